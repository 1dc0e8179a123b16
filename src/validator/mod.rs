//! The Yantrabhasha validation engine: preprocessing, expression checking,
//! the line-driven statement/block state machine, and the flat symbol table.
//! Malformed input is reported as diagnostics, never as a fault.

mod blocks;
mod diagnostics;
mod expression;
mod patterns;
mod preprocessor;
mod statements;
mod symbols;
mod tokenizer;

pub use blocks::{BlockFrame, BlockKind, BlockStack};
pub use diagnostics::{Diagnostic, Report};
pub use expression::validate_expression;
pub use preprocessor::{preprocess, LineRecord};
pub use symbols::{Symbol, SymbolTable, VarType};
pub use tokenizer::tokenize;

/// Validate source text and return the full diagnostics report. Pure and
/// synchronous; all state is scoped to this one call.
pub fn validate(source: &str) -> Report {
    let mut symbols = SymbolTable::new();
    let mut blocks = BlockStack::new();
    let mut report = Report::new();

    for record in preprocess(source) {
        if record.text.is_empty() {
            continue;
        }
        statements::process_line(
            &record.text,
            record.number,
            &mut symbols,
            &mut blocks,
            &mut report,
        );
    }

    // Every block still open at end of input is reported once, at its
    // opening line, in stack order.
    for frame in blocks.into_frames() {
        report.error(
            frame.opened_at,
            format!("Block '{}' not closed with ']'", frame.kind.label()),
        );
    }

    report.sort_by_line();
    report
}
