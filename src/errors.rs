//! Error types for the path-to-locator pipeline

use thiserror::Error;

/// Errors raised while lexing or parsing a path expression
///
/// Both kinds are fatal for the current call: no partial step or locator
/// list is ever returned. Offsets are zero-based character positions into
/// the source expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A quoted literal ran past the end of input
    #[error("unterminated string literal at offset {offset}")]
    UnterminatedLiteral { offset: usize },

    /// Expected a tag name or '*' where none was found
    #[error("expected tag or '*' at offset {offset}")]
    MissingNodeTest { offset: usize },

    /// A predicate was opened but never closed
    #[error("expected closing ']' at offset {offset}")]
    UnclosedPredicate { offset: usize },

    /// Token inside a predicate that fits no condition form
    #[error("unexpected token '{text}' in predicate at offset {offset}")]
    UnexpectedPredicateToken { text: String, offset: usize },

    /// Wrong token kind where a specific one was required
    #[error("expected {expected} at offset {offset}")]
    ExpectedToken {
        expected: &'static str,
        offset: usize,
    },
}

impl PathError {
    /// Offset into the source where the failure was detected
    pub fn offset(&self) -> usize {
        match self {
            PathError::UnterminatedLiteral { offset }
            | PathError::MissingNodeTest { offset }
            | PathError::UnclosedPredicate { offset }
            | PathError::UnexpectedPredicateToken { offset, .. }
            | PathError::ExpectedToken { offset, .. } => *offset,
        }
    }

    /// True for errors detected by the lexer rather than the parser
    pub fn is_lexical(&self) -> bool {
        matches!(self, PathError::UnterminatedLiteral { .. })
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PathError>;
