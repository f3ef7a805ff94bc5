use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised when a style key arrives as an untyped string.
pub enum StyleKeyError {
    /// The key does not name any [`ShineVariant`](crate::ShineVariant).
    #[error("unknown shine button variant `{0}`")]
    UnknownVariant(String),
    /// The key does not name any [`ShineSize`](crate::ShineSize).
    #[error("unknown shine button size `{0}`")]
    UnknownSize(String),
}
