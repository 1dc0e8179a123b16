use thiserror::Error;

/// Faults at the outer boundary. Malformed Yantrabhasha source is never a
/// fault; it comes back as diagnostics inside a [`crate::Report`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("source text is required")]
    EmptySource,

    #[error("could not read source file")]
    Io(#[from] std::io::Error),
}
