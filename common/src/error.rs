use thiserror::Error;

/// Failure while reading a menu selection from the user.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("'{0}' is not a valid option")]
    NotANumber(String),

    #[error("no more input")]
    EndOfInput,

    #[error("failed to read selection")]
    Io(#[from] std::io::Error),
}
