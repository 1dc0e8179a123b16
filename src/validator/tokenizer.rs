/// Characters that are emitted as single-character operator tokens.
const OPERATOR_CHARS: &[char] = &['(', ')', '+', '-', '*', '/', '%'];

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        tokens.push(trimmed.to_string());
    }
    current.clear();
}

/// Split an expression into operator, literal and identifier tokens.
/// A quoted segment is accumulated into a single token, emitted whole
/// (quotes included) at the closing quote.
pub fn tokenize(expr: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_string = false;

    for ch in expr.chars() {
        if ch == '"' {
            current.push(ch);
            if in_string {
                tokens.push(std::mem::take(&mut current));
                in_string = false;
            } else {
                in_string = true;
            }
            continue;
        }

        if in_string {
            current.push(ch);
            continue;
        }

        if OPERATOR_CHARS.contains(&ch) {
            flush(&mut tokens, &mut current);
            tokens.push(ch.to_string());
            continue;
        }

        if ch.is_whitespace() {
            flush(&mut tokens, &mut current);
            continue;
        }

        current.push(ch);
    }

    flush(&mut tokens, &mut current);
    tokens
}
