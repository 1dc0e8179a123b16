use serde::{Deserialize, Serialize};

/// One line-addressed finding. Severity is carried by which `Report` list
/// the diagnostic lives in, not by a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Final output of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, line: usize, message: impl Into<String>) {
        self.errors.push(Diagnostic {
            line,
            message: message.into(),
            suggestion: None,
        });
    }

    pub fn error_with(
        &mut self,
        line: usize,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) {
        self.errors.push(Diagnostic {
            line,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        });
    }

    pub fn warn(&mut self, line: usize, message: impl Into<String>) {
        self.warnings.push(Diagnostic {
            line,
            message: message.into(),
            suggestion: None,
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Restore ascending line order. Stable, so diagnostics emitted for the
    /// same line keep their production order.
    pub(crate) fn sort_by_line(&mut self) {
        self.errors.sort_by_key(|d| d.line);
        self.warnings.sort_by_key(|d| d.line);
    }
}
