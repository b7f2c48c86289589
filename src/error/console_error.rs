use thiserror::Error;

/// Represents the failures that end an interactive session abnormally.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading the input stream or writing the output stream failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
