//! Fixture-driven integration tests for the tokenizer and parser.
use json_astify::{Node, PathSegment, Token, TokenKind, Tokenizer, parse_str};
use serde_json::Value;

const FIXTURE: &str = include_str!("data/test.json");

/// Helper to parse the fixture into its root node.
fn fixture_root() -> Node {
    parse_str(FIXTURE)
        .expect("fixture should parse")
        .expect("fixture should produce a root node")
}

/// Walks a container slot and `value` in lockstep. An empty slot stands for
/// `null`.
fn assert_slot_same_as_oracle(slot: Option<&Node>, value: &Value, path: &str) {
    match slot {
        Some(node) => assert_same_as_oracle(node, value, path),
        None => assert!(value.is_null(), "empty slot vs {value:?} at {path}"),
    }
}

/// Walks `node` and `value` in lockstep, asserting they describe the same
/// document. `path` is only used for failure messages.
fn assert_same_as_oracle(node: &Node, value: &Value, path: &str) {
    match (node, value) {
        (Node::String(s), Value::String(expected)) => {
            assert_eq!(s, expected, "at {path}");
        }
        (Node::Integer(i), Value::Number(expected)) => {
            assert_eq!(Some(*i), expected.as_i64(), "at {path}");
        }
        (Node::Boolean(b), Value::Bool(expected)) => {
            assert_eq!(b, expected, "at {path}");
        }
        (Node::Array(elements), Value::Array(expected)) => {
            assert_eq!(elements.len(), expected.len(), "at {path}");
            for (i, (e, v)) in elements.iter().zip(expected).enumerate() {
                let at = format!("{path}[{i}]");
                assert_slot_same_as_oracle(e.as_ref(), v, &at);
            }
        }
        (Node::Object(properties), Value::Object(expected)) => {
            assert_eq!(properties.len(), expected.len(), "at {path}");
            for (key, v) in expected {
                let e = properties
                    .get(key)
                    .unwrap_or_else(|| panic!("missing key {key:?} at {path}"));
                let at = format!("{path}.{key}");
                assert_slot_same_as_oracle(e.as_ref(), v, &at);
            }
        }
        _ => panic!("mismatched node {node:?} vs {value:?} at {path}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_matches_serde_json() {
        let oracle: Value =
            serde_json::from_str(FIXTURE).expect("fixture is valid JSON");
        assert_same_as_oracle(&fixture_root(), &oracle, "$");
    }

    #[test]
    fn nulls_keep_shape_of_serde_json() {
        let input = r#"{"a": [null, {"x": 1}, null], "b": null, "c": 2}"#;
        let oracle: Value = serde_json::from_str(input).expect("valid JSON");
        let root = parse_str(input).unwrap().expect("root object");
        assert_same_as_oracle(&root, &oracle, "$");

        let path = [
            PathSegment::from("a"),
            PathSegment::Index(1),
            PathSegment::from("x"),
        ];
        assert_eq!(root.pointer(&path), Some(&Node::Integer(1)));
    }

    #[test]
    fn fixture_root_properties() {
        let root = fixture_root();
        let props = root.as_object().expect("root should be an object");
        assert_eq!(props.len(), 7);

        assert_eq!(
            root.get("test_string"),
            Some(&Node::String("hello world".into()))
        );
        assert_eq!(
            root.get("test_integer"),
            Some(&Node::Integer(1_234_567_890))
        );
        assert_eq!(root.get("test_boolean"), Some(&Node::Boolean(true)));
        assert_eq!(root.get("test_empty_array"), Some(&Node::Array(vec![])));
    }

    #[test]
    fn fixture_nested_object() {
        let root = fixture_root();
        let obj = root.get("test_object").expect("test_object");
        assert_eq!(obj.as_object().map(|o| o.len()), Some(3));
        assert_eq!(
            obj.get("test_string").and_then(Node::as_str),
            Some("hello world")
        );
        assert_eq!(
            obj.get("test_integer").and_then(Node::as_integer),
            Some(1_234_567_890)
        );
        assert_eq!(obj.get("test_boolean").and_then(Node::as_bool), Some(true));
    }

    #[test]
    fn fixture_string_array_in_order() {
        let root = fixture_root();
        let arr = root
            .get("test_string_array")
            .and_then(Node::as_array)
            .expect("test_string_array");
        assert_eq!(arr.len(), 3);
        for (i, element) in arr.iter().enumerate() {
            let expected = format!("test {}", i + 1);
            assert_eq!(
                element.as_ref().and_then(Node::as_str),
                Some(expected.as_str())
            );
        }
    }

    #[test]
    fn fixture_object_array_paths() {
        let root = fixture_root();
        let expected =
            [("hello world 1", 123, false), ("hello world 2", 456, true)];
        for (i, (s, n, b)) in expected.into_iter().enumerate() {
            let at = |key: &str| {
                let path = [
                    PathSegment::from("test_object_array"),
                    PathSegment::Index(i),
                    PathSegment::from(key),
                ];
                root.pointer(&path).cloned()
            };
            assert_eq!(at("test_string"), Some(Node::String(s.to_string())));
            assert_eq!(at("test_integer"), Some(Node::Integer(n)));
            assert_eq!(at("test_boolean"), Some(Node::Boolean(b)));
        }
    }

    #[test]
    fn fixture_token_stream_prefix() {
        let mut tokenizer = Tokenizer::new(FIXTURE);
        let expected = [
            Token::new(TokenKind::ObjectOpen, "{"),
            Token::new(TokenKind::String, "test_object"),
            Token::new(TokenKind::Colon, ":"),
            Token::new(TokenKind::ObjectOpen, "{"),
            Token::new(TokenKind::String, "test_string"),
            Token::new(TokenKind::Colon, ":"),
            Token::new(TokenKind::String, "hello world"),
            Token::new(TokenKind::Comma, ","),
            Token::new(TokenKind::String, "test_integer"),
            Token::new(TokenKind::Colon, ":"),
            Token::new(TokenKind::Integer, "1234567890"),
            Token::new(TokenKind::Comma, ","),
            Token::new(TokenKind::String, "test_boolean"),
            Token::new(TokenKind::Colon, ":"),
            Token::new(TokenKind::Boolean, "true"),
            Token::new(TokenKind::ObjectClose, "}"),
            Token::new(TokenKind::Comma, ","),
        ];
        for token in expected {
            assert_eq!(tokenizer.next_token(), token);
        }
    }

    #[test]
    fn fixture_token_stream_suffix() {
        let tokens = json_astify::tokenizer::tokenize(FIXTURE);
        let tail: Vec<_> = tokens[tokens.len() - 7..].to_vec();
        assert_eq!(
            tail,
            vec![
                Token::new(TokenKind::Comma, ","),
                Token::new(TokenKind::String, "test_empty_array"),
                Token::new(TokenKind::Colon, ":"),
                Token::new(TokenKind::ArrayOpen, "["),
                Token::new(TokenKind::ArrayClose, "]"),
                Token::new(TokenKind::ObjectClose, "}"),
                Token::eof(),
            ]
        );
    }

    #[test]
    fn peek_previews_first_token() {
        let mut tokenizer = Tokenizer::new(FIXTURE);
        let first = tokenizer.peek_token();
        assert_eq!(first, Token::new(TokenKind::ObjectOpen, "{"));
        assert_eq!(tokenizer.peek_token(), first);
        assert_eq!(tokenizer.next_token(), first);
        assert_eq!(
            tokenizer.next_token(),
            Token::new(TokenKind::String, "test_object")
        );
    }

    #[test]
    fn whitespace_does_not_change_tree() {
        let compact: String =
            FIXTURE.split_whitespace().collect::<Vec<_>>().join(" ");
        let reparsed = parse_str(&compact).unwrap().unwrap();
        assert_eq!(reparsed, fixture_root());
    }
}
