//! # Tokenizer/ Lexer
//!
//! Scans a JSON document, one token per call, into classified tokens with a
//! single token of lookahead.
pub mod lexer;
pub mod token;

// Re-exports
pub use lexer::{Tokenizer, tokenize};
pub use token::{EOF_TEXT, Token, TokenKind};
