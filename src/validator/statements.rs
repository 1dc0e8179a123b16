use super::blocks::{BlockKind, BlockStack};
use super::diagnostics::Report;
use super::expression::validate_expression;
use super::patterns::{self, RELATIONAL_OPS, RESERVED};
use super::symbols::{SymbolTable, VarType};

/// `^KEYWORD\b` without a regex: the keyword must not be followed by
/// another word character.
fn has_keyword_prefix(text: &str, keyword: &str) -> bool {
    match text.strip_prefix(keyword) {
        Some(rest) => !rest
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_'),
        None => false,
    }
}

/// First relational operator contained in the condition, two-character
/// candidates checked before one-character ones so `<=` never splits on `<`.
fn find_relational_op(cond: &str) -> Option<&'static str> {
    RELATIONAL_OPS.iter().copied().find(|op| cond.contains(op))
}

/// An operand is Text when it is a string literal or a declared VARTTAI
/// symbol; anything else is treated as Integer.
fn operand_is_text(operand: &str, symbols: &SymbolTable) -> bool {
    symbols.type_of(operand) == Some(VarType::Varttai)
        || patterns::string_literal().is_match(operand)
}

/// Classify one non-blank line and dispatch it. Rules are tried in fixed
/// priority order, first match wins.
pub fn process_line(
    text: &str,
    line: usize,
    symbols: &mut SymbolTable,
    blocks: &mut BlockStack,
    report: &mut Report,
) {
    if has_keyword_prefix(text, "ELAITHE") {
        handle_elaithe(text, line, symbols, blocks, report);
        return;
    }

    if has_keyword_prefix(text, "ALAITHE") {
        if !patterns::alaithe_header().is_match(text) {
            report.error_with(line, "Malformed ALAITHE header", "Use: ALAITHE [");
        }
        blocks.push(BlockKind::Alaithe, line);
        return;
    }

    if has_keyword_prefix(text, "MALLI-MALLI") {
        handle_malli(text, line, symbols, blocks, report);
        return;
    }

    if text == "]" {
        if blocks.pop().is_none() {
            report.error(line, "Unmatched closing bracket ']'");
        }
        return;
    }

    if has_keyword_prefix(text, "PADAM") {
        handle_declaration(text, line, symbols, report);
        return;
    }

    if let Some(caps) = patterns::chatimpu_stmt().captures(text) {
        let arg = caps[1].trim();
        if patterns::int_literal().is_match(arg) || patterns::string_literal().is_match(arg) {
            return;
        }
        if patterns::identifier().is_match(arg) && !symbols.contains(arg) {
            report.error(line, format!("CHATIMPU uses undeclared variable '{}'", arg));
        }
        // Any other argument shape is accepted unchecked.
        return;
    }

    if let Some(caps) = patterns::cheppu_stmt().captures(text) {
        let arg = caps[1].trim();
        if !symbols.contains(arg) {
            report.error(line, format!("CHEPPU uses undeclared variable '{}'", arg));
        }
        return;
    }

    if let Some(caps) = patterns::assignment_stmt().captures(text) {
        let target = &caps[1];
        match symbols.type_of(target) {
            None => {
                report.error(line, format!("Assignment to undeclared variable '{}'", target));
            }
            Some(var_type) => {
                validate_expression(
                    caps[2].trim(),
                    line,
                    symbols,
                    var_type == VarType::Varttai,
                    report,
                );
            }
        }
        return;
    }

    // Catch-all terminator check. Block headers and closing-marker lines
    // were already consumed above; lines starting with ']' stay exempt.
    if !text.ends_with(';') && !text.starts_with(']') {
        report.error(line, "Statement must end with semicolon");
    }
}

fn handle_elaithe(
    text: &str,
    line: usize,
    symbols: &SymbolTable,
    blocks: &mut BlockStack,
    report: &mut Report,
) {
    let Some(caps) = patterns::elaithe_header().captures(text) else {
        report.error_with(line, "Malformed ELAITHE header", "Example: ELAITHE (x < 10) [");
        blocks.push(BlockKind::Unknown, line);
        return;
    };

    let cond = caps[1].trim().to_string();
    match find_relational_op(&cond) {
        None => {
            report.error_with(
                line,
                "Condition must use relational operator",
                "Use: ELAITHE (a == 5) [",
            );
        }
        Some(op) => {
            let parts: Vec<&str> = cond.split(op).map(str::trim).collect();
            if parts.len() != 2 {
                report.error(line, format!("Malformed condition around '{}'", op));
            } else {
                let allow_string =
                    operand_is_text(parts[0], symbols) || operand_is_text(parts[1], symbols);
                validate_expression(parts[0], line, symbols, allow_string, report);
                validate_expression(parts[1], line, symbols, allow_string, report);
            }
        }
    }

    blocks.push(BlockKind::Elaithe, line);
}

fn handle_malli(
    text: &str,
    line: usize,
    symbols: &mut SymbolTable,
    blocks: &mut BlockStack,
    report: &mut Report,
) {
    let Some(caps) = patterns::malli_header().captures(text) else {
        report.error(line, "Malformed MALLI-MALLI header");
        blocks.push(BlockKind::Unknown, line);
        return;
    };

    let body = caps[1].to_string();
    let parts: Vec<&str> = body
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() != 3 {
        report.error(line, "Loop header must have init;condition;update");
    } else {
        loop_init(parts[0], line, symbols, report);
        loop_condition(parts[1], line, symbols, report);
        loop_update(parts[2], line, symbols, report);
    }

    blocks.push(BlockKind::Malli, line);
}

fn loop_init(init: &str, line: usize, symbols: &mut SymbolTable, report: &mut Report) {
    if has_keyword_prefix(init, "PADAM") {
        match patterns::loop_init_decl().captures(init) {
            Some(caps) => symbols.declare(&caps[1], VarType::Ankhe, line, true),
            None => report.error(line, "Malformed loop init. Expected: PADAM i:ANKHE = 0"),
        }
        return;
    }

    match patterns::loop_init_assign().captures(init) {
        None => report.error(line, "Loop init must be PADAM declaration or assignment"),
        Some(caps) => {
            let target = &caps[1];
            if !symbols.contains(target) {
                report.error(
                    line,
                    format!("Loop init uses undeclared variable '{}'", target),
                );
            } else {
                validate_expression(&caps[2], line, symbols, false, report);
            }
        }
    }
}

fn loop_condition(cond: &str, line: usize, symbols: &SymbolTable, report: &mut Report) {
    match find_relational_op(cond) {
        None => report.error(line, "Loop condition must use relational operator"),
        Some(op) => {
            // The operator was found by containment, so the split yields at
            // least two pieces; only the first two are validated.
            let parts: Vec<&str> = cond.split(op).map(str::trim).collect();
            validate_expression(parts[0], line, symbols, false, report);
            validate_expression(parts[1], line, symbols, false, report);
        }
    }
}

fn loop_update(update: &str, line: usize, symbols: &SymbolTable, report: &mut Report) {
    match patterns::loop_update().captures(update) {
        None => report.error(line, "Loop update must be like 'i = i + 1'"),
        Some(caps) => {
            if caps[1] != caps[2] {
                report.error(line, "Loop update variables do not match");
            } else if !symbols.contains(&caps[1]) {
                // Looser than init on purpose: an undeclared but
                // self-consistent update only warns.
                report.warn(line, "Loop update variable undeclared");
            }
        }
    }
}

fn handle_declaration(text: &str, line: usize, symbols: &mut SymbolTable, report: &mut Report) {
    let Some(caps) = patterns::padam_decl().captures(text) else {
        report.error_with(
            line,
            "Malformed PADAM declaration",
            "Example: PADAM x:ANKHE = 0;",
        );
        return;
    };

    let name = caps[1].to_string();
    if RESERVED.contains(&name.as_str()) {
        // The symbol is not registered; later uses report as undeclared.
        report.error(line, format!("Identifier '{}' is reserved", name));
        return;
    }

    let var_type = match &caps[2] {
        "VARTTAI" => VarType::Varttai,
        _ => VarType::Ankhe,
    };
    let initializer = caps.get(4).map(|m| m.as_str().trim().to_string());

    // `initialized` reflects the presence of an initializer, valid or not.
    symbols.declare(&name, var_type, line, initializer.is_some());

    let Some(init) = initializer else {
        return;
    };

    match var_type {
        VarType::Varttai => {
            if !patterns::string_literal().is_match(&init) {
                report.error_with(
                    line,
                    "VARTTAI variable initializer must be a string literal",
                    format!("Example: PADAM {}:VARTTAI = \"Hello\";", name),
                );
            }
        }
        VarType::Ankhe => {
            if !patterns::int_literal().is_match(&init) {
                report.error_with(
                    line,
                    format!("Initializer for '{}' must be an integer literal", name),
                    format!("Example: PADAM {}:ANKHE = 5;", name),
                );
            }
        }
    }
}
