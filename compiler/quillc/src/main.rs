//! Quill interpreter CLI.

use std::process::ExitCode;

use quillc::commands::{format_file, lex_file, parse_file, parse_run_args, run_files, Status};
use quillc::{init_tracing, CliError, CliResult};

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    match dispatch(command, &args[2..]) {
        Ok(status) => status.into(),
        Err(error) => {
            eprintln!("error: {error}");
            if error.wants_usage() {
                eprintln!();
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: &str, rest: &[String]) -> CliResult<Status> {
    match command {
        "run" => run_files(&parse_run_args(rest)?),
        "parse" => parse_file(single_file(rest, "quill parse <file>")?),
        "lex" => lex_file(single_file(rest, "quill lex <file>")?),
        "fmt" => {
            let check = rest.iter().any(|arg| arg == "--check");
            let files: Vec<String> = rest
                .iter()
                .filter(|arg| *arg != "--check")
                .cloned()
                .collect();
            format_file(single_file(&files, "quill fmt <file> [--check]")?, check)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(Status::Success)
        }
        "version" | "--version" | "-V" => {
            println!("Quill {}", env!("CARGO_PKG_VERSION"));
            Ok(Status::Success)
        }
        _ => {
            // A bare script path runs it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("quill"))
            {
                let mut run_args = vec![command.to_owned()];
                run_args.extend_from_slice(rest);
                run_files(&parse_run_args(&run_args)?)
            } else {
                Err(CliError::UnknownCommand(command.to_owned()))
            }
        }
    }
}

fn single_file<'a>(args: &'a [String], usage: &'static str) -> CliResult<&'a str> {
    match args {
        [path] if !path.starts_with('-') => Ok(path.as_str()),
        _ => Err(CliError::Usage(usage)),
    }
}

fn print_usage() {
    println!("Quill interpreter");
    println!();
    println!("Usage: quill <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>...        Run Quill scripts (in parallel when several)");
    println!("  parse <file>         Print the syntax tree");
    println!("  lex <file>           Print the token stream");
    println!("  fmt <file>           Print the file in canonical form");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --max-depth=<n>      Limit nested calls (default 1000, 'none' for unlimited)");
    println!();
    println!("Format options:");
    println!("  --check              Exit 1 if the file is not already formatted");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=quill_eval=debug) for trace output.");
}
