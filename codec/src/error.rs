//! Error type for the decoding dispatcher.

use std::fmt;

use registry::TypeCode;

/// Result type for line decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// The distinguished "unparseable" result of [`decode`](crate::decode).
///
/// Garbled input degrades to one of these, never to a panic or a partial
/// message. The caller (the session layer) decides whether to log, drop,
/// or disconnect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The line was empty.
    EmptyLine,

    /// The text before the first separator was not a type code.
    BadTypeCode,

    /// No decoder is registered for this code. Peers newer than this build
    /// may legitimately send such lines; they are dropped, not fatal.
    UnknownType { code: TypeCode },

    /// The decoder for this type rejected the body.
    Malformed { code: TypeCode },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLine => write!(f, "empty message line"),
            Self::BadTypeCode => write!(f, "leading token is not a type code"),
            Self::UnknownType { code } => write!(f, "unknown message type: {code}"),
            Self::Malformed { code } => {
                let name = registry::name(*code).unwrap_or("?");
                write!(f, "malformed {name} body (type {code})")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_known_types() {
        let err = DecodeError::Malformed { code: 1014 };
        let msg = err.to_string();
        assert!(msg.contains("BoardLayout"));
        assert!(msg.contains("1014"));
    }

    #[test]
    fn display_unknown_type() {
        let err = DecodeError::UnknownType { code: 4242 };
        assert!(err.to_string().contains("4242"));
    }
}
