//! Error types returned by parsing and positional queries

use crate::position::Position;
use thiserror::Error;

/// Malformed source reported by the document parser
///
/// No partial index is ever built from a document that produced one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error at {position}: {message}")]
pub struct ParseError {
    pub position: Position,
    pub message: String,
}

impl ParseError {
    pub fn new(position: Position, message: impl Into<String>) -> Self {
        ParseError {
            position,
            message: message.into(),
        }
    }
}

/// A positional query matched no function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("no enclosing function at offset {offset}")]
    NoEnclosingFunc { offset: usize },

    #[error("no function declaration at or after offset {offset}")]
    NoNextFunc { offset: usize },

    #[error("no function declaration before offset {offset}")]
    NoPrevFunc { offset: usize },
}

impl NotFoundError {
    /// The offset the failed query was made at
    pub fn offset(&self) -> usize {
        match *self {
            NotFoundError::NoEnclosingFunc { offset }
            | NotFoundError::NoNextFunc { offset }
            | NotFoundError::NoPrevFunc { offset } => offset,
        }
    }
}
