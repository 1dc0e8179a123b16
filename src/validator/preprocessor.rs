/// One comment-stripped, trimmed source line (1-indexed).
#[derive(Debug, Clone)]
pub struct LineRecord {
    pub number: usize,
    pub text: String,
}

/// Normalize line endings and strip `#` comments that sit outside string
/// literals. Each physical line is handled independently; an unterminated
/// quote never carries into the next line.
pub fn preprocess(source: &str) -> Vec<LineRecord> {
    let normalized = source.replace("\r\n", "\n");

    normalized
        .split('\n')
        .enumerate()
        .map(|(idx, raw)| {
            let mut kept = String::with_capacity(raw.len());
            let mut in_string = false;
            let mut escaped = false;

            for ch in raw.chars() {
                if escaped {
                    escaped = false;
                    kept.push(ch);
                    continue;
                }
                if in_string && ch == '\\' {
                    escaped = true;
                    kept.push(ch);
                    continue;
                }
                if ch == '"' {
                    in_string = !in_string;
                }
                if ch == '#' && !in_string {
                    break;
                }
                kept.push(ch);
            }

            LineRecord {
                number: idx + 1,
                text: kept.trim().to_string(),
            }
        })
        .collect()
}
