//! # JSON Token
//!
//! Defines the lexical categories a JSON document is split into, and the
//! token value handed from the tokenizer to the parser.
use std::fmt::Display;

/// The lexical category of a [`Token`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /* Reserved */
    /// Character that did not match any lexical rule
    Unknown,

    /// End of input
    EndOfInput,

    /* Delimiters */
    /// Colon character
    Colon,

    /// Comma character
    Comma,

    /* Values */
    /// Nil literal
    Null,

    /// String literal, quotes excluded
    String,

    /// Integer literal, sign included
    Integer,

    /// Boolean literal
    Boolean,

    /* Containers */
    /// Opening curly brace
    ObjectOpen,

    /// Closing curly brace
    ObjectClose,

    /// Opening square bracket
    ArrayOpen,

    /// Closing square bracket
    ArrayClose,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::EndOfInput => "eof",
            Self::Colon => "colon",
            Self::Comma => "comma",
            Self::Null => "null",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::ObjectOpen => "left curly bracket",
            Self::ObjectClose => "right curly bracket",
            Self::ArrayOpen => "left square bracket",
            Self::ArrayClose => "right square bracket",
        };
        write!(f, "{name}")
    }
}

/// A classified lexical unit: its kind plus the literal text it was scanned
/// from.
///
/// For strings the text excludes the surrounding quotes, for `null` it is
/// empty, and for [`TokenKind::EndOfInput`] it is the fixed marker
/// [`EOF_TEXT`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    /// Lexical category
    pub kind: TokenKind,
    /// Literal text of the token
    pub text: String,
}

/// Text carried by every [`TokenKind::EndOfInput`] token.
pub const EOF_TEXT: &str = "eof";

impl Token {
    /// Creates a token of the given kind with the given text.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Returns the end-of-input sentinel token.
    #[must_use]
    pub fn eof() -> Self {
        Self::new(TokenKind::EndOfInput, EOF_TEXT)
    }

    /// Returns `true` if this token marks the end of input.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}
