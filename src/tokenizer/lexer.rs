//! # JSON Lexer
//!
//! Pull-based scanner over the characters of a JSON document. Each call to
//! [`Tokenizer::next_token`] skips whitespace and classifies exactly one
//! token; [`Tokenizer::peek_token`] does the same without moving the cursor.
use log::trace;

use crate::tokenizer::{Token, TokenKind};

/// Characters skipped between tokens.
const WHITESPACE: [char; 4] = ['\n', '\t', '\r', ' '];

/// A tokenizer producing one [`Token`] per call from an in-memory JSON
/// document.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// The input sequence of characters to tokenize
    input: Vec<char>,
    /// Current position (current character)
    position: usize,
    /// Current reading position (after current character)
    read_position: usize,
    /// Current character under examination, `None` past the end of input
    ch: Option<char>,
}

impl Tokenizer {
    /// Creates a tokenizer over the characters of `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        let mut tokenizer = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: None,
        };
        // put the tokenizer in an initial working state
        tokenizer.read_char();
        tokenizer
    }

    /// Reads and consumes the next character in the input sequence.
    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied();
        // Advance the positions, saturating once past the end
        self.position = self.read_position.min(self.input.len());
        self.read_position = self.position + 1;
    }

    /// Consumes `count` characters.
    fn advance(&mut self, count: usize) {
        for _ in 0..count {
            self.read_char();
        }
    }

    /// Consume whitespace character(s) starting from the current position.
    fn skip_whitespace(&mut self) {
        while self.ch.is_some_and(|c| WHITESPACE.contains(&c)) {
            self.read_char();
        }
    }

    /// Characters from the current position to the end of input.
    fn rest(&self) -> &[char] {
        self.input.get(self.position..).unwrap_or_default()
    }

    /// Returns `true` if the input at the current position starts with
    /// `word`. Never reads past the end of input.
    fn lookahead_is(&self, word: &str) -> bool {
        let mut rest = self.rest().iter();
        word.chars().all(|c| rest.next() == Some(&c))
    }

    /// Returns the next token in the input sequence from the current
    /// position, consuming it.
    ///
    /// Once the end of input is reached every further call returns an
    /// [`TokenKind::EndOfInput`] token.
    pub fn next_token(&mut self) -> Token {
        let token = self.scan();
        trace!("token: {token}");
        token
    }

    /// Returns the next token without consuming it. Repeated peeks return the
    /// same token, and so does the following [`Tokenizer::next_token`].
    pub fn peek_token(&mut self) -> Token {
        let saved = (self.position, self.read_position, self.ch);
        let token = self.scan();
        (self.position, self.read_position, self.ch) = saved;
        token
    }

    /// Skips whitespace and classifies the token at the cursor. The first
    /// matching rule wins.
    fn scan(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.ch else {
            return Token::eof();
        };

        if let Some(kind) = structural_kind(ch) {
            self.read_char();
            return Token::new(kind, ch);
        }

        if self.lookahead_is("null") {
            self.advance(4);
            return Token::new(TokenKind::Null, "");
        }

        if let Some(token) = self
            .read_string()
            .or_else(|| self.read_integer())
            .or_else(|| self.read_boolean())
        {
            return token;
        }

        self.read_char();
        Token::new(TokenKind::Unknown, ch)
    }

    /// Reads a string literal verbatim up to the next `"`. Returns `None`,
    /// leaving the cursor untouched, when the literal is never closed.
    fn read_string(&mut self) -> Option<Token> {
        if self.ch != Some('"') {
            return None;
        }

        let body = self.rest().get(1..)?;
        let len = body.iter().position(|&c| c == '"')?;
        let text: String = body[..len].iter().collect();

        // opening quote + content + closing quote
        self.advance(len + 2);
        Some(Token::new(TokenKind::String, text))
    }

    /// Reads an optional `-` followed by one or more decimal digits.
    fn read_integer(&mut self) -> Option<Token> {
        let rest = self.rest();
        let sign = usize::from(rest.first() == Some(&'-'));
        let digits = rest
            .get(sign..)?
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .count();
        if digits == 0 {
            return None;
        }

        let len = sign + digits;
        let text: String = rest[..len].iter().collect();
        self.advance(len);
        Some(Token::new(TokenKind::Integer, text))
    }

    /// Reads the `true`/`false` keywords.
    fn read_boolean(&mut self) -> Option<Token> {
        let word = ["true", "false"]
            .into_iter()
            .find(|word| self.lookahead_is(word))?;
        self.advance(word.len());
        Some(Token::new(TokenKind::Boolean, word))
    }
}

/// Maps a single-character delimiter to its token kind.
const fn structural_kind(ch: char) -> Option<TokenKind> {
    match ch {
        ':' => Some(TokenKind::Colon),
        ',' => Some(TokenKind::Comma),
        '{' => Some(TokenKind::ObjectOpen),
        '}' => Some(TokenKind::ObjectClose),
        '[' => Some(TokenKind::ArrayOpen),
        ']' => Some(TokenKind::ArrayClose),
        _ => None,
    }
}

/// Tokenize a whole JSON document, returning every token up to and including
/// the end-of-input token.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(text);
    let mut tokens: Vec<Token> = vec![];

    loop {
        let token = tokenizer.next_token();
        let is_eof = token.is_eof();

        tokens.push(token);

        if is_eof {
            break;
        }
    }

    tokens
}
