//! Parser for the assignment subset of Java.
//!
//! The grammar lives in `src/java.pest`; this module lowers the pest parse
//! tree into the [`crate::ast`] model. Submissions outside the subset fail
//! to parse; the tree scanner treats that as skip-and-continue, while a
//! candidate file that fails here is a hard error for the caller.

use anyhow::{Context, Result};
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use std::fs;
use std::path::Path;

use crate::ast::{
    Block, CompilationUnit, Expr, FieldDecl, LocalVar, Member, MethodDecl, Stmt, TypeDecl,
};

#[derive(Parser)]
#[grammar = "java.pest"]
struct JavaParser;

/// Parse a source string into a compilation unit.
pub fn parse_source(source: &str) -> Result<CompilationUnit> {
    let mut pairs =
        JavaParser::parse(Rule::unit, source).context("not parseable as Java (assignment subset)")?;
    let unit = pairs.next().context("parser produced no compilation unit")?;

    let mut package = None;
    let mut imports = Vec::new();
    let mut types = Vec::new();

    for item in unit.into_inner() {
        match item.as_rule() {
            Rule::package_decl => {
                for inner in item.into_inner() {
                    if inner.as_rule() == Rule::qualified_name {
                        package = Some(qualified_to_string(inner));
                    }
                }
            }
            Rule::import_decl => {
                for inner in item.into_inner() {
                    if inner.as_rule() == Rule::qualified_name {
                        imports.push(qualified_to_string(inner));
                    }
                }
            }
            Rule::type_decl => types.push(lower_type_decl(item)),
            _ => {}
        }
    }

    Ok(CompilationUnit {
        package,
        imports,
        types,
    })
}

/// Read and parse a source file, carrying the path in error context.
pub fn parse_file(path: &Path) -> Result<CompilationUnit> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    parse_source(&source).with_context(|| format!("Failed to parse: {}", path.display()))
}

/// Join the identifier segments of a qualified name. Built from the
/// segments rather than the matched span so interior whitespace never
/// leaks into the name.
fn qualified_to_string(pair: Pair<Rule>) -> String {
    pair.into_inner()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(".")
}

fn type_ref_to_string(pair: Pair<Rule>) -> String {
    let mut name = String::new();
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::qualified_name => name = qualified_to_string(inner),
            Rule::array_dims => {
                for _ in 0..inner.as_str().matches('[').count() {
                    name.push_str("[]");
                }
            }
            _ => {}
        }
    }
    name
}

fn lower_type_decl(pair: Pair<Rule>) -> TypeDecl {
    let mut name = String::new();
    let mut members = Vec::new();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::ident => name = inner.as_str().to_string(),
            Rule::class_body => {
                for member in inner.into_inner() {
                    if let Some(decl) = member.into_inner().next() {
                        match decl.as_rule() {
                            Rule::type_decl => members.push(Member::Type(lower_type_decl(decl))),
                            Rule::method_decl | Rule::ctor_decl => {
                                members.push(Member::Method(lower_method_decl(decl)))
                            }
                            Rule::field_decl => members.push(Member::Field(lower_field_decl(decl))),
                            _ => {}
                        }
                    }
                }
            }
            _ => {}
        }
    }

    TypeDecl { name, members }
}

fn lower_method_decl(pair: Pair<Rule>) -> MethodDecl {
    let mut name = String::new();
    let mut body = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::ident => name = inner.as_str().to_string(),
            Rule::block => body = Some(lower_block(inner)),
            _ => {}
        }
    }

    MethodDecl { name, body }
}

fn lower_field_decl(pair: Pair<Rule>) -> FieldDecl {
    let mut ty = String::new();
    let mut name = String::new();
    let mut init = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::type_ref => ty = type_ref_to_string(inner),
            Rule::ident => name = inner.as_str().to_string(),
            Rule::expr => init = Some(lower_expr(inner)),
            _ => {}
        }
    }

    FieldDecl { ty, name, init }
}

fn lower_block(pair: Pair<Rule>) -> Block {
    let mut stmts = Vec::new();
    for stmt in pair.into_inner() {
        if let Some(node) = stmt.into_inner().next() {
            stmts.push(lower_stmt(node));
        }
    }
    Block { stmts }
}

fn lower_stmt(pair: Pair<Rule>) -> Stmt {
    match pair.as_rule() {
        Rule::block => Stmt::Block(lower_block(pair)),
        Rule::local_var_decl => {
            let mut ty = String::new();
            let mut name = String::new();
            let mut init = None;
            for inner in pair.into_inner() {
                match inner.as_rule() {
                    Rule::type_ref => ty = type_ref_to_string(inner),
                    Rule::ident => name = inner.as_str().to_string(),
                    Rule::expr => init = Some(lower_expr(inner)),
                    _ => {}
                }
            }
            Stmt::LocalVar(LocalVar { ty, name, init })
        }
        Rule::return_stmt => Stmt::Return(
            pair.into_inner()
                .find(|p| p.as_rule() == Rule::expr)
                .map(lower_expr),
        ),
        Rule::expr_stmt => match pair.into_inner().next() {
            Some(expr) => Stmt::Expr(lower_expr(expr)),
            None => Stmt::Empty,
        },
        _ => Stmt::Empty,
    }
}

fn lower_expr(pair: Pair<Rule>) -> Expr {
    let mut operands = Vec::new();
    for inner in pair.into_inner() {
        if inner.as_rule() == Rule::unary {
            operands.push(lower_unary(inner));
        }
    }
    if operands.len() == 1 {
        operands.remove(0)
    } else {
        Expr::Binary(operands)
    }
}

fn lower_unary(pair: Pair<Rule>) -> Expr {
    let mut prefixes = 0;
    let mut expr = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::prefix_op => prefixes += 1,
            Rule::primary => expr = Some(lower_primary(inner)),
            Rule::postfix => {
                if let Some(base) = expr.take() {
                    expr = Some(apply_postfix(base, inner));
                }
            }
            _ => {}
        }
    }

    let mut result = expr.unwrap_or(Expr::Literal(String::new()));
    for _ in 0..prefixes {
        result = Expr::Unary(Box::new(result));
    }
    result
}

fn lower_primary(pair: Pair<Rule>) -> Expr {
    let node = match pair.into_inner().next() {
        Some(node) => node,
        None => return Expr::Literal(String::new()),
    };

    match node.as_rule() {
        Rule::literal => Expr::Literal(node.as_str().to_string()),
        Rule::new_expr => {
            let mut class = String::new();
            let mut args = Vec::new();
            for inner in node.into_inner() {
                match inner.as_rule() {
                    Rule::qualified_name => class = qualified_to_string(inner),
                    Rule::args => args = lower_args(inner),
                    _ => {}
                }
            }
            Expr::New { class, args }
        }
        Rule::paren_expr => match node.into_inner().next() {
            Some(expr) => lower_expr(expr),
            None => Expr::Literal(String::new()),
        },
        Rule::ident => Expr::Name(node.as_str().to_string()),
        _ => Expr::Literal(String::new()),
    }
}

fn apply_postfix(base: Expr, pair: Pair<Rule>) -> Expr {
    let node = match pair.into_inner().next() {
        Some(node) => node,
        None => return base,
    };

    match node.as_rule() {
        Rule::method_ref => {
            let mut name = String::new();
            let mut args = Vec::new();
            for inner in node.into_inner() {
                match inner.as_rule() {
                    Rule::ident => name = inner.as_str().to_string(),
                    Rule::args => args = lower_args(inner),
                    _ => {}
                }
            }
            Expr::Call {
                receiver: Some(Box::new(base)),
                name,
                args,
            }
        }
        Rule::field_ref => Expr::Field {
            receiver: Box::new(base),
            name: node
                .into_inner()
                .next()
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
        },
        Rule::args => {
            let args = lower_args(node);
            match base {
                // Unqualified call: `println(x)`
                Expr::Name(name) => Expr::Call {
                    receiver: None,
                    name,
                    args,
                },
                other => other,
            }
        }
        _ => base,
    }
}

fn lower_args(pair: Pair<Rule>) -> Vec<Expr> {
    pair.into_inner()
        .filter(|p| p.as_rule() == Rule::expr)
        .map(lower_expr)
        .collect()
}
