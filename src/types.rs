//! Core types for the path-to-locator pipeline

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Token categories emitted by the path lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Element or node name (e.g. "book", "div")
    Tag,

    /// '@' marking the start of an attribute test
    Attribute,

    /// Axis specifier (e.g. "child::", "descendant::")
    Axis,

    /// '[' opening a predicate expression
    PredicateOpen,

    /// ']' closing a predicate expression
    PredicateClose,

    /// Comparison operator (=, !=, <, >, <=, >=)
    Operator,

    /// Quoted string literal
    Literal,

    /// '*' wildcard matching any node
    Wildcard,

    /// Namespace separator in a prefixed name
    Namespace,

    /// '/' or '//' path separator
    Slash,

    /// End-of-input marker
    End,
}

/// A single lexed unit of the path input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Category of this token
    pub kind: TokenKind,

    /// Exact text matched (e.g. "book", "//", "!=")
    pub text: String,

    /// Zero-based character offset where the token began, used only
    /// for diagnostics
    pub offset: usize,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }
}

/// Comparison operators permitted in attribute conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl ComparisonOp {
    /// Get operator as its source text
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::Ne => "!=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Gt => ">",
            ComparisonOp::Le => "<=",
            ComparisonOp::Ge => ">=",
        }
    }

    /// Parse an operator from its source text
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "=" => Some(ComparisonOp::Eq),
            "!=" => Some(ComparisonOp::Ne),
            "<" => Some(ComparisonOp::Lt),
            ">" => Some(ComparisonOp::Gt),
            "<=" => Some(ComparisonOp::Le),
            ">=" => Some(ComparisonOp::Ge),
            _ => None,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One condition inside a predicate
///
/// Predicates carry two kinds of conditions: attribute comparisons
/// (`@name='submit'`, or bare `price>35`) and one-based position
/// indexes (`[2]`). Boolean connectives between conditions are
/// recognized syntactically but carry no evaluation semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// Attribute comparison against a literal value
    Attribute {
        name: String,
        value: String,
        op: ComparisonOp,
    },

    /// One-based position index
    Position { index: u32 },
}

/// Ordered conditions of one bracketed predicate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    pub conditions: Vec<Condition>,
}

/// Node test of a step: a named tag or the wildcard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeTest {
    /// '*' wildcard
    Any,

    /// Named tag, possibly namespace-prefixed
    Named(String),
}

impl NodeTest {
    /// Source text of the node test ("*" for the wildcard)
    pub fn text(&self) -> &str {
        match self {
            NodeTest::Any => "*",
            NodeTest::Named(name) => name,
        }
    }

    /// Text used when synthesizing UIDs ("any" substitutes for the wildcard)
    pub fn uid_text(&self) -> &str {
        match self {
            NodeTest::Any => "any",
            NodeTest::Named(name) => name,
        }
    }
}

/// A single parsed step of a path expression
///
/// Steps preserve source order; that order is the sole hierarchy signal,
/// there is no explicit tree structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    /// Axis specifier, "child" when none was written
    pub axis: String,

    /// Tag name or wildcard this step matches
    pub node_test: NodeTest,

    /// Optional bracketed predicate conditions
    pub predicate: Option<Predicate>,

    /// True when the step began with a leading separator
    pub is_absolute: bool,
}

/// Canonical widget locator descriptor
///
/// Locators form a singly-linked chain in emission order: each locator's
/// `container_uid` is the previous locator's `uid`, absent for the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locator {
    /// Deterministic canonical identifier
    pub uid: String,

    /// Ordered key/value metadata (archetype, attributes, occurrence, visible)
    pub metadata: Map<String, Value>,

    /// UID of the containing locator, absent for the first in a chain
    pub container_uid: Option<String>,
}
