/*!
# JSON Parser

Recursive-descent construction of a [`Node`] tree from the tokens of a
[`Tokenizer`]. Tokens are pulled one at a time; the only lookahead used is a
single [`Tokenizer::peek_token`] to recognize an empty array.

## Examples

```rust
use json_astify::{Node, Parser, Tokenizer};

let mut parser = Parser::new(Tokenizer::new(r#"{"a": [1, 2], "b": true}"#));
let root = parser.parse().expect("valid document").expect("a value");
assert_eq!(root.get("b"), Some(&Node::Boolean(true)));
assert_eq!(root.get("a").and_then(|a| a.index(1)), Some(&Node::Integer(2)));
```

## Leniency

The grammar accepted is looser than strict JSON:

- commas between object members are optional, and extra commas are skipped;
- object keys are taken from the raw text of whatever token sits in key
  position, whatever its kind;
- a value position holding anything other than a string, integer, boolean,
  object or array (including `null`) produces no node; its enclosing
  container keeps the slot as `None`.

## Errors

A missing colon, a bad array separator or a literal that cannot be converted
aborts the whole parse with a [`ParseError`]:

```rust
use json_astify::parser::{ErrorKind, Parser};
use json_astify::Tokenizer;

let err = Parser::new(Tokenizer::new(r#"{"a" 1}"#)).parse().unwrap_err();
assert_eq!(err.kind(), ErrorKind::Structural);
```
*/
pub mod error;

use std::collections::HashMap;

use log::debug;

use crate::ast::Node;
use crate::tokenizer::{Token, TokenKind, Tokenizer};

pub use error::{ErrorKind, ParseError};

/// Parser for turning a token stream into a [`Node`] tree.
#[derive(Debug)]
pub struct Parser {
    tokenizer: Tokenizer,
}

impl Parser {
    /// Wraps `tokenizer`; the parser takes ownership of it for one parse.
    #[must_use]
    pub const fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Parses the next value from the token stream.
    ///
    /// Returns `Ok(None)` when the next token does not start a value (for
    /// instance `null`, a stray closing bracket or the end of input).
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first structural violation or
    /// literal conversion failure; no partial tree is returned.
    pub fn parse(&mut self) -> Result<Option<Node>, ParseError> {
        let token = self.tokenizer.next_token();
        match token.kind {
            TokenKind::String => Ok(Some(Node::String(token.text))),
            TokenKind::Integer => {
                let value = token.text.parse::<i64>().map_err(|source| {
                    ParseError::InvalidInteger {
                        text: token.text.clone(),
                        source,
                    }
                })?;
                Ok(Some(Node::Integer(value)))
            }
            TokenKind::Boolean => {
                let value = token.text.parse::<bool>().map_err(|source| {
                    ParseError::InvalidBoolean {
                        text: token.text.clone(),
                        source,
                    }
                })?;
                Ok(Some(Node::Boolean(value)))
            }
            TokenKind::ObjectOpen => self.parse_object().map(Some),
            TokenKind::ArrayOpen => self.parse_array().map(Some),
            _ => {
                debug!("no value produced for {token}");
                Ok(None)
            }
        }
    }

    /// Parse the members of an object whose `{` was already consumed.
    fn parse_object(&mut self) -> Result<Node, ParseError> {
        debug!("entering object");
        let mut properties: HashMap<String, Option<Node>> = HashMap::new();

        loop {
            let Token { kind, text: key } = self.tokenizer.next_token();
            match kind {
                TokenKind::ObjectClose => break,
                TokenKind::Comma => continue,
                _ => {}
            }

            let separator = self.tokenizer.next_token();
            if separator.kind != TokenKind::Colon {
                return Err(ParseError::ExpectedColon {
                    key,
                    found: separator.text,
                });
            }

            match self.parse() {
                Ok(value) => {
                    if value.is_none() {
                        debug!("member {key:?} produced no value");
                    }
                    // last write wins on duplicate keys
                    properties.insert(key, value);
                }
                Err(err) => {
                    return Err(ParseError::ObjectValue {
                        key,
                        source: Box::new(err),
                    });
                }
            }
        }

        debug!("leaving object with {} member(s)", properties.len());
        Ok(Node::Object(properties))
    }

    /// Parse the elements of an array whose `[` was already consumed.
    fn parse_array(&mut self) -> Result<Node, ParseError> {
        debug!("entering array");
        if self.tokenizer.peek_token().kind == TokenKind::ArrayClose {
            // consume the `]` we just peeked
            self.tokenizer.next_token();
            return Ok(Node::Array(vec![]));
        }

        let mut elements: Vec<Option<Node>> = vec![];
        loop {
            let index = elements.len();
            let element = self.parse().map_err(|err| ParseError::ArrayElement {
                index,
                source: Box::new(err),
            })?;
            if element.is_none() {
                debug!("array element {index} produced no value");
            }
            elements.push(element);

            let token = self.tokenizer.next_token();
            match token.kind {
                TokenKind::ArrayClose => break,
                TokenKind::Comma => {}
                _ => {
                    return Err(ParseError::InvalidArrayToken {
                        found: token.text,
                    });
                }
            }
        }

        debug!("leaving array with {} element(s)", elements.len());
        Ok(Node::Array(elements))
    }
}

/// Parse a JSON document held in memory into its root [`Node`].
///
/// # Errors
///
/// Returns a [`ParseError`] if the document is structurally malformed.
pub fn parse_str(input: &str) -> Result<Option<Node>, ParseError> {
    Parser::new(Tokenizer::new(input)).parse()
}
