//! Errors raised while building an AST from a token stream.
use std::error::Error;
use std::fmt;
use std::num::ParseIntError;
use std::str::ParseBoolError;

/// Broad classification of a [`ParseError`]'s root cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A literal token could not be converted to its value type.
    LiteralConversion,
    /// A separator or closing token was missing or of the wrong kind.
    Structural,
}

/// Represents errors that can occur while parsing a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Integer token text does not fit a signed 64-bit integer.
    InvalidInteger {
        /// Offending token text
        text: String,
        /// Underlying conversion failure
        source: ParseIntError,
    },
    /// Boolean token text is neither `true` nor `false`.
    InvalidBoolean {
        /// Offending token text
        text: String,
        /// Underlying conversion failure
        source: ParseBoolError,
    },
    /// An object key was not followed by a colon.
    ExpectedColon {
        /// Key preceding the missing colon
        key: String,
        /// Text of the token found instead
        found: String,
    },
    /// An array element was followed by something other than `,` or `]`.
    InvalidArrayToken {
        /// Text of the token found instead
        found: String,
    },
    /// Parsing the value of an object member failed.
    ObjectValue {
        /// Key of the member being parsed
        key: String,
        /// Cause
        source: Box<ParseError>,
    },
    /// Parsing an array element failed.
    ArrayElement {
        /// Position of the element being parsed
        index: usize,
        /// Cause
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Classifies the innermost cause of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInteger { .. } | Self::InvalidBoolean { .. } => {
                ErrorKind::LiteralConversion
            }
            Self::ExpectedColon { .. } | Self::InvalidArrayToken { .. } => {
                ErrorKind::Structural
            }
            Self::ObjectValue { source, .. }
            | Self::ArrayElement { source, .. } => source.kind(),
        }
    }

    /// Returns the innermost error of a chain of wrapped parse errors.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::ObjectValue { source, .. }
            | Self::ArrayElement { source, .. } => source.root_cause(),
            _ => self,
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInteger { source, .. } => Some(source),
            Self::InvalidBoolean { source, .. } => Some(source),
            Self::ObjectValue { source, .. }
            | Self::ArrayElement { source, .. } => Some(source.as_ref()),
            Self::ExpectedColon { .. } | Self::InvalidArrayToken { .. } => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInteger { text, .. } => {
                write!(f, "failed to convert integer literal {text:?}")
            }
            Self::InvalidBoolean { text, .. } => {
                write!(f, "failed to convert boolean literal {text:?}")
            }
            Self::ExpectedColon { key, found } => write!(
                f,
                "expected colon separator after key {key:?}, found {found:?}"
            ),
            Self::InvalidArrayToken { found } => {
                write!(f, "invalid token in array: {found:?}")
            }
            Self::ObjectValue { key, .. } => {
                write!(f, "failed to parse value of object member {key:?}")
            }
            Self::ArrayElement { index, .. } => {
                write!(f, "failed to parse array element {index}")
            }
        }
    }
}
