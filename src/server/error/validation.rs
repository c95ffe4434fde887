use thiserror::Error;

/// A submitted form failed one or more field constraints.
///
/// Holds one human readable message per failed constraint, in field order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .0.join("; "))]
pub struct ValidationError(pub Vec<String>);

impl ValidationError {
    /// Returns `Ok(())` when no messages were collected.
    pub fn check(messages: Vec<String>) -> Result<(), Self> {
        if messages.is_empty() {
            Ok(())
        } else {
            Err(Self(messages))
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }
}
