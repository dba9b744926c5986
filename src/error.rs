use crate::prelude::*;

/// User-correctable input error: the message carries the specific reason.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    #[display("{name} must not be negative")]
    Negative { name: &'static str },

    #[display("{name} is too large (max: 1e12)")]
    TooLarge { name: &'static str },

    #[display("Unknown conversion unit: {unit}. Available units: {known}")]
    UnknownUnit { unit: String, known: String },
}

/// Terminal outcome of the interactive pipeline.
#[derive(Debug, derive_more::From)]
pub enum Failure {
    /// Reported to the user with the specific reason.
    Validation(ValidationError),

    /// Logged in full detail, while the user only gets a generic message.
    Unexpected(Error),
}

impl From<std::io::Error> for Failure {
    fn from(error: std::io::Error) -> Self {
        Self::Unexpected(error.into())
    }
}
