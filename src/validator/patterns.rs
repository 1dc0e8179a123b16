use regex::Regex;
use std::sync::OnceLock;

/// Keywords that can never be used as identifiers.
pub const RESERVED: &[&str] = &[
    "PADAM", "ANKHE", "VARTTAI", "ELAITHE", "ALAITHE", "MALLI-MALLI", "CHATIMPU", "CHEPPU",
];

/// Relational operator candidates, two-character forms first so that `<=`
/// is never mis-split on `<`.
pub const RELATIONAL_OPS: &[&str] = &["==", "!=", "<=", ">=", "<", ">"];

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("pattern is a valid regex"))
}

pub fn identifier() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^[A-Za-z][A-Za-z0-9_]*$")
}

pub fn int_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^-?\d+$")
}

pub fn string_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r#"^"(?:[^"\\]|\\.)*"$"#)
}

pub fn elaithe_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^ELAITHE\s*\((.*)\)\s*\[\s*$")
}

pub fn alaithe_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^ALAITHE\s*\[\s*$")
}

pub fn malli_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^MALLI-MALLI\s*\((.*)\)\s*\[\s*$")
}

/// Loop init as a fresh declaration: `PADAM i:ANKHE = 0` (no semicolon).
pub fn loop_init_decl() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(
        &RE,
        r"^PADAM\s+([A-Za-z][A-Za-z0-9_]*)\s*:\s*ANKHE\s*=\s*(-?\d+)\s*$",
    )
}

/// Loop init as an assignment to an existing name (no semicolon).
pub fn loop_init_assign() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^([A-Za-z][A-Za-z0-9_]*)\s*=\s*(.+)$")
}

/// Loop update shape: `i = i + 1` (bare digits only, no sign).
pub fn loop_update() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(
        &RE,
        r"^([A-Za-z][A-Za-z0-9_]*)\s*=\s*([A-Za-z][A-Za-z0-9_]*)\s*([+\-])\s*(\d+)\s*$",
    )
}

pub fn padam_decl() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(
        &RE,
        r"^PADAM\s+([A-Za-z][A-Za-z0-9_]*)\s*:\s*(ANKHE|VARTTAI)\s*(=\s*(.+))?\s*;$",
    )
}

pub fn chatimpu_stmt() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"(?i)^CHATIMPU\s*\((.+)\)\s*;$")
}

pub fn cheppu_stmt() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"(?i)^CHEPPU\s*\((.+)\)\s*;$")
}

pub fn assignment_stmt() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^([A-Za-z][A-Za-z0-9_]*)\s*=\s*(.+);$")
}
