//! Plain-text tables for scan results.
//!
//! When a scan has errors only the error table is shown; tokens from a text
//! with lexical errors are not reported.

use lexa_lexer::{LexError, LexResult, Token};

const TOKEN_HEADER: [&str; 4] = ["Nombre del Token", "Lexema", "Fila", "Columna"];
const ERROR_HEADER: [&str; 4] = ["Símbolo/Cadena", "Fila", "Columna", "Mensaje"];

/// Table of tokens, one row per token, in source order.
pub fn render_tokens(tokens: &[Token]) -> String {
    let rows = tokens.iter().map(|t| {
        [
            t.kind.display_name().to_owned(),
            t.lexeme.clone(),
            t.position.line().to_string(),
            t.position.column().to_string(),
        ]
    });
    render_table(TOKEN_HEADER, rows)
}

/// Table of errors, one row per error, in source order.
pub fn render_errors(errors: &[LexError]) -> String {
    let rows = errors.iter().map(|e| {
        [
            e.text.clone(),
            e.position.line().to_string(),
            e.position.column().to_string(),
            e.message().to_owned(),
        ]
    });
    render_table(ERROR_HEADER, rows)
}

/// The report for a whole scan: errors if there are any, tokens otherwise.
pub fn render_result(result: &LexResult) -> String {
    if result.has_errors() {
        render_errors(&result.errors)
    } else {
        render_tokens(&result.tokens)
    }
}

/// Left-aligned columns separated by two spaces.
///
/// Control characters in cells are shown escaped so a lexeme spanning
/// lines stays on one row.
fn render_table<const N: usize>(
    header: [&str; N],
    rows: impl Iterator<Item = [String; N]>,
) -> String {
    let rows: Vec<[String; N]> = rows.map(|row| row.map(|cell| escape_cell(&cell))).collect();
    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header.map(str::to_owned), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        out.push_str(cell);
        if i < last {
            let pad = width.saturating_sub(cell.chars().count()) + 2;
            out.push_str(&" ".repeat(pad));
        }
    }
    out.push('\n');
}

fn escape_cell(cell: &str) -> String {
    let mut out = String::with_capacity(cell.len());
    for c in cell.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}
