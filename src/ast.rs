//! Syntax tree model for the Java subset the checker understands.
//!
//! The model keeps exactly what the conformance checklist needs to see:
//! declaration names, declared-type text, and call expressions. Declared
//! types are the text written at the declaration site (`MathOperations`,
//! `String[]`); nothing is resolved semantically.
//!
//! Walkers return collected results from a structured recursive descent
//! rather than mutating shared flags during traversal.

/// One parsed source file: optional package declaration, imports, and the
/// type declarations in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    pub package: Option<String>,
    pub imports: Vec<String>,
    pub types: Vec<TypeDecl>,
}

/// A class, interface, or enum declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub name: String,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Type(TypeDecl),
    Method(MethodDecl),
    Field(FieldDecl),
}

/// A method or constructor. Constructors carry the class name.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub name: String,
    /// `None` for bodiless declarations (abstract/interface methods).
    pub body: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub ty: String,
    pub name: String,
    pub init: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    LocalVar(LocalVar),
    Expr(Expr),
    Return(Option<Expr>),
    Block(Block),
    Empty,
}

/// A local variable declaration: declared-type text plus variable name.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalVar {
    pub ty: String,
    pub name: String,
    pub init: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(String),
    Name(String),
    New {
        class: String,
        args: Vec<Expr>,
    },
    Call {
        receiver: Option<Box<Expr>>,
        name: String,
        args: Vec<Expr>,
    },
    Field {
        receiver: Box<Expr>,
        name: String,
    },
    Unary(Box<Expr>),
    /// Operator-agnostic chain of operands. The checklist never evaluates
    /// expressions, so precedence is not modeled.
    Binary(Vec<Expr>),
}

impl CompilationUnit {
    /// Names of the top-level type declarations, as the tree scanner
    /// records them.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.name.as_str()).collect()
    }

    /// Every type declaration in the unit, nested types included.
    pub fn all_types(&self) -> Vec<&TypeDecl> {
        let mut out = Vec::new();
        for ty in &self.types {
            collect_types(ty, &mut out);
        }
        out
    }
}

fn collect_types<'a>(ty: &'a TypeDecl, out: &mut Vec<&'a TypeDecl>) {
    out.push(ty);
    for member in &ty.members {
        if let Member::Type(nested) = member {
            collect_types(nested, out);
        }
    }
}

impl TypeDecl {
    /// Methods declared directly on this type (not in nested types).
    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Method(method) => Some(method),
            _ => None,
        })
    }

    /// Find a method on this type by name.
    pub fn find_method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods().find(|m| m.name == name)
    }
}

impl Block {
    /// All local variable declarations in this block, nested blocks
    /// included.
    pub fn local_vars(&self) -> Vec<&LocalVar> {
        let mut out = Vec::new();
        collect_local_vars(self, &mut out);
        out
    }

    /// Names of every call expression reachable from this block, in
    /// pre-order. Descends into initializers, receivers, and arguments.
    pub fn call_names(&self) -> Vec<String> {
        let mut out = Vec::new();
        for stmt in &self.stmts {
            collect_stmt_calls(stmt, &mut out);
        }
        out
    }
}

fn collect_local_vars<'a>(block: &'a Block, out: &mut Vec<&'a LocalVar>) {
    for stmt in &block.stmts {
        match stmt {
            Stmt::LocalVar(var) => out.push(var),
            Stmt::Block(nested) => collect_local_vars(nested, out),
            _ => {}
        }
    }
}

fn collect_stmt_calls(stmt: &Stmt, out: &mut Vec<String>) {
    match stmt {
        Stmt::LocalVar(var) => {
            if let Some(init) = &var.init {
                collect_expr_calls(init, out);
            }
        }
        Stmt::Expr(expr) => collect_expr_calls(expr, out),
        Stmt::Return(Some(expr)) => collect_expr_calls(expr, out),
        Stmt::Return(None) | Stmt::Empty => {}
        Stmt::Block(nested) => {
            for stmt in &nested.stmts {
                collect_stmt_calls(stmt, out);
            }
        }
    }
}

fn collect_expr_calls(expr: &Expr, out: &mut Vec<String>) {
    match expr {
        Expr::Call {
            receiver,
            name,
            args,
        } => {
            out.push(name.clone());
            if let Some(receiver) = receiver {
                collect_expr_calls(receiver, out);
            }
            for arg in args {
                collect_expr_calls(arg, out);
            }
        }
        Expr::New { args, .. } => {
            for arg in args {
                collect_expr_calls(arg, out);
            }
        }
        Expr::Field { receiver, .. } => collect_expr_calls(receiver, out),
        Expr::Unary(inner) => collect_expr_calls(inner, out),
        Expr::Binary(operands) => {
            for operand in operands {
                collect_expr_calls(operand, out);
            }
        }
        Expr::Literal(_) | Expr::Name(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(receiver: &str, name: &str, args: Vec<Expr>) -> Expr {
        Expr::Call {
            receiver: Some(Box::new(Expr::Name(receiver.to_string()))),
            name: name.to_string(),
            args,
        }
    }

    fn local(ty: &str, name: &str, init: Option<Expr>) -> Stmt {
        Stmt::LocalVar(LocalVar {
            ty: ty.to_string(),
            name: name.to_string(),
            init,
        })
    }

    #[test]
    fn test_local_vars_recurse_into_nested_blocks() {
        let body = Block {
            stmts: vec![
                local("int", "a", None),
                Stmt::Block(Block {
                    stmts: vec![local("String", "b", None)],
                }),
            ],
        };

        let vars = body.local_vars();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].name, "a");
        assert_eq!(vars[1].ty, "String");
    }

    #[test]
    fn test_call_names_descend_into_arguments() {
        // println(math.add(5, 3))
        let body = Block {
            stmts: vec![Stmt::Expr(call(
                "out",
                "println",
                vec![call(
                    "math",
                    "add",
                    vec![Expr::Literal("5".into()), Expr::Literal("3".into())],
                )],
            ))],
        };

        assert_eq!(body.call_names(), vec!["println", "add"]);
    }

    #[test]
    fn test_call_names_descend_into_initializers() {
        let body = Block {
            stmts: vec![local(
                "int",
                "sum",
                Some(call("math", "add", Vec::new())),
            )],
        };

        assert_eq!(body.call_names(), vec!["add"]);
    }

    #[test]
    fn test_all_types_includes_nested() {
        let unit = CompilationUnit {
            package: None,
            imports: Vec::new(),
            types: vec![TypeDecl {
                name: "Outer".to_string(),
                members: vec![Member::Type(TypeDecl {
                    name: "Inner".to_string(),
                    members: Vec::new(),
                })],
            }],
        };

        let names: Vec<&str> = unit.all_types().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Outer", "Inner"]);
        assert_eq!(unit.type_names(), vec!["Outer"]);
    }

    #[test]
    fn test_find_method() {
        let ty = TypeDecl {
            name: "Main".to_string(),
            members: vec![
                Member::Field(FieldDecl {
                    ty: "int".to_string(),
                    name: "count".to_string(),
                    init: None,
                }),
                Member::Method(MethodDecl {
                    name: "main".to_string(),
                    body: Some(Block::default()),
                }),
            ],
        };

        assert!(ty.find_method("main").is_some());
        assert!(ty.find_method("count").is_none());
    }
}
