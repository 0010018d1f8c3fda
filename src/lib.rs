/*!
# `json-astify` Library

Turns JSON text into a typed abstract syntax tree: a pull-based
[`Tokenizer`] with one token of lookahead feeds a recursive-descent
[`Parser`] that builds [`Node`] values.

```rust
use json_astify::{Node, parse_str};

let root = parse_str(r#"{"tags": ["a", "b"], "count": 2}"#)
    .expect("valid document")
    .expect("a root value");
assert_eq!(root.get("count"), Some(&Node::Integer(2)));
```
*/

pub mod ast;
pub mod parser;
pub mod tokenizer;
pub mod utils;

// Re-exports
pub use ast::{Node, PathSegment};
pub use parser::{ParseError, Parser, parse_str};
pub use tokenizer::{Token, TokenKind, Tokenizer};
