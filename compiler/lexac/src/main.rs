//! lexa CLI
//!
//! Configuration-driven lexical analysis.

use lexa_lexer::ScanStrategy;
use lexac::commands::{check_config, lex_file};

fn main() {
    lexac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let mut file_path = None;
            let mut config_path = None;
            let mut strategy = ScanStrategy::HandWritten;

            let mut rest = args.iter().skip(2);
            while let Some(arg) = rest.next() {
                if arg == "--config" || arg == "-c" {
                    config_path = rest.next().map(String::as_str);
                } else if let Some(path) = arg.strip_prefix("--config=") {
                    config_path = Some(path);
                } else if arg == "--automaton" {
                    strategy = ScanStrategy::Automaton;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    print_lex_usage();
                    std::process::exit(1);
                }
            }

            let (Some(path), Some(config)) = (file_path, config_path) else {
                eprintln!("error: missing file path or configuration");
                print_lex_usage();
                std::process::exit(1);
            };
            lex_file(path, config, strategy);
        }
        "check-config" => {
            if args.len() < 3 {
                eprintln!("Usage: lexa check-config <config.json>");
                std::process::exit(1);
            }
            check_config(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("lexa {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_lex_usage() {
    eprintln!("Usage: lexa lex <file> --config <config.json> [--automaton]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <path>  JSON alphabet configuration (required)");
    eprintln!("  --automaton          Recognize identifiers and numbers with automata");
}

fn print_usage() {
    println!("lexa - configuration-driven lexer");
    println!();
    println!("Usage: lexa <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file> --config <config.json>  Tokenize a file and print tokens or errors");
    println!("  check-config <config.json>         Validate a configuration file");
    println!("  help                               Show this help message");
    println!("  version                            Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=lexa_lexer=debug) for tracing output.");
}
