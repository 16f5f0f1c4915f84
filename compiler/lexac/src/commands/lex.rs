use lexa_lexer::{LexerEngine, ScanStrategy};

use super::{fail, load_config, read_error_message};
use crate::report;

/// Scan a file and print its token table, or its error table if the scan
/// found lexical errors (then exit with status 1).
pub fn lex_file(path: &str, config_path: &str, strategy: ScanStrategy) {
    let config = load_config(config_path);
    let source = std::fs::read_to_string(path)
        .unwrap_or_else(|err| fail(&read_error_message(path, &err)));
    tracing::debug!(path, config = config_path, ?strategy, "lexing file");

    let engine = LexerEngine::with_strategy(&config, strategy);
    let result = engine.analyze(&source);

    if result.has_errors() {
        println!("Errors for '{}' ({} errors):", path, result.errors.len());
        print!("{}", report::render_result(&result));
        std::process::exit(1);
    }
    println!("Tokens for '{}' ({} tokens):", path, result.tokens.len());
    print!("{}", report::render_result(&result));
}
