use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("invalid IPv4 address '{0}'")]
    InvalidAddress(String),

    #[error("invalid CIDR '{0}', expected address/prefix")]
    InvalidCidrSyntax(String),

    #[error("invalid prefix length '{0}', expected an integer in 0..=32")]
    InvalidPrefixLength(String),

    #[error("ranges '{a}' and '{b}' overlap but neither contains the other")]
    UnsupportedPartialOverlap { a: String, b: String },

    #[error("internal error: {0}")]
    Internal(String),
}
