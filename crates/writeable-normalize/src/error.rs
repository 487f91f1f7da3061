use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// Input text is empty or whitespace-only after trimming. Analyzers are
    /// never run against an empty document.
    #[error("input text is empty after trimming whitespace")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
