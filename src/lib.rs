//! Diagnostics-only validation for the Yantrabhasha teaching language.
//!
//! The core is [`validate`]: a pure function from source text to a
//! [`Report`] of errors and warnings. [`store`] and [`analytics`] are the
//! surrounding collaborators for recording runs and aggregating them.

pub mod analytics;
pub mod error;
pub mod store;
pub mod validator;

pub use error::Error;
pub use validator::{validate, Diagnostic, Report};

use std::fs;
use std::path::Path;

/// Outer boundary used by the CLI and the run store: a request with no
/// source text at all is a fault, not a diagnostic. The core itself accepts
/// any string.
pub fn validate_source(source: &str) -> Result<Report, Error> {
    if source.trim().is_empty() {
        return Err(Error::EmptySource);
    }
    Ok(validator::validate(source))
}

/// Read and validate a source file.
pub fn validate_file(path: impl AsRef<Path>) -> Result<Report, Error> {
    let source = fs::read_to_string(path)?;
    validate_source(&source)
}
