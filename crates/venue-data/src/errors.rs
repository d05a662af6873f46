//! Generation errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Vocabulary '{vocabulary}' is empty")]
    Configuration { vocabulary: &'static str },
}
