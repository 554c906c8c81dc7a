use derive_more::{Display, Error, From};

/// An error created from a panic payload which wasn't an error itself.
#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
#[display("{message}")]
pub struct PanicError {
    message: String,
}

impl PanicError {
    /// Returns the message rendered from the payload.
    pub fn message(&self) -> &str {
        &self.message
    }
}
