//! revpo - a Reverse Polish notation calculator
//!
//! Usage:
//!   revpo              Start the interactive calculator
//!   revpo -c "5 7 +"   Evaluate a single statement
//!   revpo script.rp    Evaluate a script file

use revpo::{evaluate, Registry};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::env;
use std::fs;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const WELCOME: &str = "Welcome to revpo, a calculator using Reverse Polish notation.\n\
    Operands come before operators, such as 5 7 + to add 5 and 7.\n\
    Type ? followed by enter for help, exit or Ctrl-D to quit.\n";

fn print_usage() {
    println!(
        r#"revpo-{} A Reverse Polish notation calculator

USAGE:
    revpo                   Start the interactive calculator
    revpo -c <statement>    Evaluate a single statement and print the answer
    revpo <script>          Evaluate a script file line by line
    revpo --help            Show this help message
    revpo --version         Show version

SYNTAX:
    Operands come before operators: 5 7 + adds 5 and 7.
    The answer of one expression seeds the next: 5 7 + 3 - gives 9.
    Built-in operators: + - * /

SCRIPTS:
    One statement per line. Blank lines and lines starting with # are
    skipped; each line is an independent statement.

EXAMPLES:
    5 7 +                   # 12
    5 7 + 3 -               # 9, the 12 carries into the subtraction
    10 5 2 /                # 1, division folds left to right
    2.5e-1 4 *              # 1, scientific notation is fine
"#,
        VERSION
    );
}

fn print_version() {
    println!("revpo-{}", VERSION);
}

/// Help text for the interactive `?` command, listing whatever the
/// registry currently knows.
fn print_operator_help(registry: &Registry) {
    println!("revpo is a Reverse Polish notation calculator.");
    println!("Operands are placed before operators, such as 5 7 + to add 5 and 7.");
    println!("The answer of one expression carries into the next: 5 7 + 3 - gives 9.");
    println!();
    let operators: Vec<String> = registry
        .operators()
        .iter()
        .map(|op| op.to_string())
        .collect();
    println!("Available operators: {}\n", operators.join(" "));
}

/// Format an answer without a trailing .0 for whole numbers.
fn format_answer(answer: f64) -> String {
    if answer.fract() == 0.0 && answer.is_finite() && answer.abs() < i64::MAX as f64 {
        format!("{}", answer as i64)
    } else {
        answer.to_string()
    }
}

/// Evaluate a single statement and print the bare answer (for -c).
fn run_command(registry: &Registry, input: &str) -> ExitCode {
    match evaluate(input, registry) {
        Ok(Some(answer)) => {
            println!("{}", format_answer(answer));
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Evaluate a script file, one independent statement per line.
fn run_script(registry: &Registry, path: &str) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match evaluate(trimmed, registry) {
            Ok(Some(answer)) => println!("{}", format_answer(answer)),
            Ok(None) => {}
            Err(e) => {
                eprintln!("Error at line {}: {}", line_num + 1, e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Get home directory
fn dirs_home() -> Option<std::path::PathBuf> {
    env::var_os("HOME").map(std::path::PathBuf::from)
}

/// Run the interactive read-eval-print loop. Malformed input never
/// terminates the session; each statement is printed or reported and
/// the prompt returns.
fn run_repl(registry: &Registry) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;

    let history_path = dirs_home().map(|h| h.join(".revpo_history"));
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    println!("{}", WELCOME);

    loop {
        match rl.readline("statement> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                match trimmed {
                    "exit" | "quit" => break,
                    _ => {}
                }

                // `?` asks for help; the rest of the line still
                // evaluates, so `5 7 + ?` prints the operators and the
                // answer. Blanking keeps every other token's position.
                let statement = if trimmed.contains('?') {
                    print_operator_help(registry);
                    trimmed.replace('?', " ")
                } else {
                    trimmed.to_string()
                };

                match evaluate(&statement, registry) {
                    Ok(Some(answer)) => println!("   answer: {}\n", format_answer(answer)),
                    Ok(None) => {}
                    Err(e) => {
                        eprintln!("{}", e);
                        eprintln!("Type ? followed by enter for a list of available operators.\n");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C - drop the current line, keep the session
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D - exit
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }

    Ok(())
}

/// Parse command-line arguments
struct CliArgs {
    command: Option<String>,
    script: Option<String>,
    missing_command: bool,
    help: bool,
    version: bool,
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs {
        command: None,
        script: None,
        missing_command: false,
        help: false,
        version: false,
    };

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "-c" => {
                // Everything after -c is the statement
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                    break;
                }
                cli.missing_command = true;
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            path => {
                // Assume it's a script file if not a flag
                if !path.starts_with('-') {
                    cli.script = Some(path.to_string());
                }
            }
        }
        i += 1;
    }

    cli
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args);

    if cli.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    if cli.missing_command {
        eprintln!("Error: -c requires a statement, e.g. revpo -c \"5 7 +\"");
        return ExitCode::FAILURE;
    }

    let registry = Registry::new();

    if let Some(cmd) = cli.command {
        return run_command(&registry, &cmd);
    }

    if let Some(script) = cli.script {
        return run_script(&registry, &script);
    }

    match run_repl(&registry) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}
