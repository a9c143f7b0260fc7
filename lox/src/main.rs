use clap::{Parser, Subcommand};
use lox_interpreter::{Interpreter, StdoutSink};
use miette::{IntoDiagnostic, MietteHandlerOpts, Result};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

mod repl;
mod sexpr;

#[derive(Parser)]
#[command(
    name = "lox",
    version,
    about = "Tree-walking interpreter for the Lox core language",
    long_about = "Lox is a small dynamically-typed expression-and-statement language.\nWithout a subcommand, an interactive REPL starts."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Lox source file (use '-' to read from stdin)
    Run {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse Lox source files and display their AST as s-expressions (debug only)
    Parse {
        /// Lox source files to parse (use '-' to read from stdin)
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Dump the token stream before the AST
        #[arg(short, long)]
        tokens: bool,
    },
}

fn main() -> Result<()> {
    setup_miette_handler();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { file }) => handle_run_command(&file),
        Some(Commands::Parse { files, tokens }) => {
            handle_parse_command(files, tokens);
            Ok(())
        }
        None => {
            let mut session = repl::ReplSession::new()?;
            session.run()?;
            Ok(())
        }
    }
}

/// Configure miette for readable error reporting
fn setup_miette_handler() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .color(true)
                .tab_width(4)
                .with_cause_chain()
                .build(),
        )
    }))
    .ok();
}

fn handle_run_command(file: &PathBuf) -> Result<()> {
    let (source, _) = read_source(file)?;

    let statements = match lox_parser::parse_program(&source) {
        Ok(statements) => statements,
        Err(error) => {
            eprintln!("{}", repl::syntax_error_message(&error));
            process::exit(65);
        }
    };

    let mut interpreter = Interpreter::new(Box::new(StdoutSink));
    if let Err(error) = interpreter.interpret(&statements) {
        eprintln!("{}", repl::runtime_error_message(&error));
        process::exit(70);
    }

    Ok(())
}

fn handle_parse_command(files: Vec<PathBuf>, tokens: bool) {
    let mut success = true;
    let multiple_files = files.len() > 1;

    for file_path in files {
        match parse_single_file(&file_path, tokens) {
            Ok(display_name) => {
                if multiple_files {
                    println!("✅ {}", display_name);
                }
            }
            Err(e) => {
                eprintln!("{:?}", e);
                success = false;
            }
        }
    }

    if !success {
        process::exit(1);
    }
}

fn parse_single_file(file_path: &PathBuf, dump_tokens: bool) -> Result<String> {
    let (source, display_name) = read_source(file_path)?;

    let scanned = match lox_parser::scan(&source) {
        Ok(scanned) => scanned,
        Err(error) => {
            return Err(miette::miette!(
                "{}: {}",
                display_name,
                repl::scan_error_message(&error)
            ));
        }
    };

    if dump_tokens {
        for token in &scanned {
            println!("{token:?}");
        }
    }

    match lox_parser::parse_tokens(scanned) {
        Ok(statements) => {
            println!("{}", sexpr::format_program_as_sexpr(&statements));
            Ok(display_name)
        }
        Err(error) => Err(miette::miette!(
            "{}: {}",
            display_name,
            repl::parse_error_message(&error)
        )),
    }
}

fn read_source(file_path: &PathBuf) -> Result<(String, String)> {
    if file_path.to_str() == Some("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).into_diagnostic()?;
        Ok((buffer, "<stdin>".to_string()))
    } else {
        if !file_path.exists() {
            return Err(miette::miette!("File not found: {}", file_path.display()));
        }

        let source = fs::read_to_string(file_path).into_diagnostic()?;
        Ok((source, file_path.display().to_string()))
    }
}
