use super::diagnostics::Report;
use super::patterns;
use super::symbols::{SymbolTable, VarType};
use super::tokenizer::tokenize;

const ARITHMETIC_OPS: &[&str] = &["+", "-", "*", "/", "%"];

/// Scan an expression's tokens for balanced parentheses, legal operand
/// kinds and type agreement. Fail-fast: the first violation records exactly
/// one error and aborts the scan.
pub fn validate_expression(
    expr: &str,
    line: usize,
    symbols: &SymbolTable,
    allow_string: bool,
    report: &mut Report,
) -> bool {
    let mut depth: i32 = 0;

    for token in tokenize(expr) {
        let t = token.as_str();

        if t == "(" {
            depth += 1;
            continue;
        }
        if t == ")" {
            depth -= 1;
            if depth < 0 {
                report.error(line, format!("Unmatched ')' in expression '{}'", expr));
                return false;
            }
            continue;
        }
        if ARITHMETIC_OPS.contains(&t) {
            continue;
        }
        if patterns::int_literal().is_match(t) {
            continue;
        }
        if allow_string && patterns::string_literal().is_match(t) {
            continue;
        }
        if patterns::identifier().is_match(t) {
            let Some(var_type) = symbols.type_of(t) else {
                report.error_with(
                    line,
                    format!("Undeclared variable '{}' in expression '{}'", t, expr),
                    format!("Declare '{}' before use: PADAM {}:ANKHE;", t, t),
                );
                return false;
            };
            if var_type == VarType::Ankhe || allow_string {
                continue;
            }
            report.error_with(
                line,
                format!("Type mismatch: variable '{}' not ANKHE", t),
                "Use ANKHE for integer expressions.",
            );
            return false;
        }

        report.error(line, format!("Invalid token '{}' in expression '{}'", t, expr));
        return false;
    }

    if depth != 0 {
        report.error(line, format!("Mismatched parentheses in expression '{}'", expr));
        return false;
    }

    true
}
