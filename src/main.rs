//! CLI entry point and command handlers for gradecheck.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use gradecheck::{check, formatters, ops};

#[derive(Parser)]
#[command(name = "gradecheck")]
#[command(version)]
#[command(about = "Structural conformance checker for Java assignment submissions", long_about = None)]
struct Cli {
    /// Suppress per-check output, print the verdict only
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a candidate source file against the assignment checklist
    Check {
        /// Path to the candidate .java file
        file: PathBuf,
        /// Project root to scan for required packages and classes
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the reference program's demonstration output
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Check { file, root, format } => cmd_check(&file, &root, &format, cli.quiet),
        Commands::Demo => {
            ops::run_demo();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn cmd_check(file: &Path, root: &Path, format: &str, quiet: bool) -> Result<ExitCode> {
    let report = check::check_candidate(file, root)?;

    match format {
        "text" => println!("{}", formatters::format_text(&report, quiet)),
        "json" => println!("{}", formatters::format_json(&report)?),
        other => bail!("Unknown format '{}' (expected 'text' or 'json')", other),
    }

    Ok(if report.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
