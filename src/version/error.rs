use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Version must have major.minor.patch format: '{0}'")]
    MalformedCore(String),

    #[error("Major and minor must be integers: '{0}'")]
    InvalidMajorMinor(String),

    #[error("Invalid patch segment: '{0}'")]
    InvalidPatch(String),
}
