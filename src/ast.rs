/*!
# JSON AST

Typed tree produced by the [`Parser`](crate::parser::Parser). Nodes are built
bottom-up and never mutated afterwards; the accessors here are read-only.

There is no null node: a `null` literal produces nothing. Containers keep
the slot it occupies as an empty (`None`) entry, so array positions and object
keys still line up with the source document.
*/
use std::collections::HashMap;
use std::fmt;

/// Primary JSON AST definition
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Node {
    /// A string literal, verbatim (no escape decoding)
    String(String),
    /// A signed integer literal
    Integer(i64),
    /// A boolean literal
    Boolean(bool),
    /// An array, elements in source order; `None` marks an empty slot
    Array(Vec<Option<Node>>),
    /// An object with unique keys; iteration order is unspecified. `None`
    /// marks a member whose value produced no node
    Object(HashMap<String, Option<Node>>),
}

/// One step of a path from the root of a tree to a nested node.
#[derive(Hash, PartialEq, Eq, Debug, Clone)]
pub enum PathSegment {
    /// Object member lookup, e.g. `"foo"`
    Key(String),
    /// Array element lookup, e.g. `[3]`
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{key:?}"),
            Self::Index(idx) => write!(f, "[{idx}]"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        Self::Index(idx)
    }
}

impl Node {
    /// Short name of the node variant, as shown in tree dumps.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Boolean(_) => "boolean",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Returns the string value, if this is a string node.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an integer node.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean node.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the element slots, if this is an array node.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Option<Self>]> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the property map, if this is an object node.
    #[must_use]
    pub const fn as_object(&self) -> Option<&HashMap<String, Option<Self>>> {
        match self {
            Self::Object(properties) => Some(properties),
            _ => None,
        }
    }

    /// Looks up an object member by key. Missing keys and empty members
    /// both resolve to `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)?.as_ref()
    }

    /// Looks up an array element by position. Out-of-range positions and
    /// empty slots both resolve to `None`.
    #[must_use]
    pub fn index(&self, idx: usize) -> Option<&Self> {
        self.as_array()?.get(idx)?.as_ref()
    }

    /// Follows `path` from this node, returning the node it ends at.
    ///
    /// An empty path resolves to `self`. A key segment applied to a
    /// non-object, or an index segment applied to a non-array, resolves to
    /// `None`.
    #[must_use]
    pub fn pointer(&self, path: &[PathSegment]) -> Option<&Self> {
        path.iter().try_fold(self, |node, segment| match segment {
            PathSegment::Key(key) => node.get(key),
            PathSegment::Index(idx) => node.index(*idx),
        })
    }

    /// Compute the depth of the tree. Leaves and empty containers have
    /// depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Object(map) => {
                let inner_depth =
                    map.values().flatten().map(Self::depth).max().unwrap_or(0);
                1 + inner_depth
            }
            Self::Array(arr) => {
                let inner_depth =
                    arr.iter().flatten().map(Self::depth).max().unwrap_or(0);
                1 + inner_depth
            }
            Self::String(_) | Self::Integer(_) | Self::Boolean(_) => 1,
        }
    }
}
