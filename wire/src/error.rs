//! Error types for field-level decoding.

use std::fmt;

/// Result type for field reads.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors that can occur while reading fields from a message body.
///
/// These stay local to the decoding of one message: a failed field read
/// makes that message unparseable, never more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldError {
    /// Expected another field but the body ran out of tokens.
    MissingField,

    /// Field was not a base-10 integer.
    BadInt,

    /// Field was not a base-16 integer.
    BadHexInt,

    /// Field was not a decimal number.
    BadDecimal,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "missing field"),
            Self::BadInt => write!(f, "field is not an integer"),
            Self::BadHexInt => write!(f, "field is not a hex integer"),
            Self::BadDecimal => write!(f, "field is not a decimal number"),
        }
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(FieldError::MissingField.to_string(), "missing field");
        assert!(FieldError::BadInt.to_string().contains("integer"));
        assert!(FieldError::BadHexInt.to_string().contains("hex"));
    }
}
