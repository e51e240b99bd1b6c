use thiserror::Error;

#[derive(Error, Debug)]
pub enum UniqueCharsError {
    /// Nothing to check was supplied.
    #[error("input error: {0}")]
    Input(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
