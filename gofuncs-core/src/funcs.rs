//! Function records and the positional queries over them
//!
//! Global invariants enforced:
//! - Records are ordered by body start; ranges are disjoint or nested
//! - `func_pos.offset` is unique per record
//! - A collection never changes after it is built

use crate::document::{Field, FuncKind};
use crate::error::NotFoundError;
use crate::position::{Position, Range};
use crate::signature::{render_signature, SignatureParts};
use serde::Serialize;

/// One function-like construct of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Func {
    pub kind: FuncKind,
    /// Position of the `func` keyword; identifies the record
    pub func_pos: Position,
    /// From the `func` keyword through the closing brace, inclusive
    pub body_range: Range,
    /// Doc comment directly above a declaration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_range: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<Field>,
    pub params: Vec<Field>,
    pub results: Vec<Field>,
    pub signature: String,
}

impl Func {
    pub fn is_declaration(&self) -> bool {
        self.kind.is_declaration()
    }

    /// Where a declaration logically begins: its doc comment if it has one
    pub fn effective_start(&self) -> usize {
        self.comment_range
            .map_or(self.func_pos.offset, |comment| comment.start.offset)
    }

    pub fn signature_parts(&self) -> SignatureParts<'_> {
        SignatureParts {
            receiver: self.receiver.as_ref(),
            name: self.name.as_deref(),
            type_params: &self.type_params,
            params: &self.params,
            results: &self.results,
        }
    }

    /// Render the signature from the structural fields
    ///
    /// Always equal to the memoized `signature`.
    pub fn render_signature(&self) -> String {
        render_signature(&self.signature_parts())
    }

    /// Does a `next_func` query at `offset` accept this declaration?
    ///
    /// An offset inside the doc comment counts as being at the declaration.
    fn starts_at_or_after(&self, offset: usize) -> bool {
        self.effective_start() >= offset
            || self
                .comment_range
                .is_some_and(|comment| comment.contains(offset))
    }
}

/// Ordered, immutable collection of function records for one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Funcs {
    funcs: Vec<Func>,
}

impl Funcs {
    /// Build a collection, ordering records by body start
    ///
    /// The sort is stable, so a record that starts where another does keeps
    /// its traversal position.
    pub fn new(mut funcs: Vec<Func>) -> Self {
        funcs.sort_by_key(|f| f.body_range.start.offset);
        Funcs { funcs }
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Func> {
        self.funcs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Func> {
        self.funcs.iter()
    }

    pub fn as_slice(&self) -> &[Func] {
        &self.funcs
    }

    /// Only the named functions and methods, in the same relative order
    pub fn declarations(&self) -> Funcs {
        Funcs {
            funcs: self
                .funcs
                .iter()
                .filter(|f| f.is_declaration())
                .cloned()
                .collect(),
        }
    }

    /// The innermost function whose body range contains `offset`
    ///
    /// Boundaries count as inside. When two ranges are identical the one
    /// that comes first wins.
    pub fn enclosing_func(&self, offset: usize) -> Result<&Func, NotFoundError> {
        let mut best: Option<&Func> = None;
        for func in self.funcs.iter().filter(|f| f.body_range.contains(offset)) {
            match best {
                Some(current) if func.body_range.width() >= current.body_range.width() => {}
                _ => best = Some(func),
            }
        }
        best.ok_or(NotFoundError::NoEnclosingFunc { offset })
    }

    /// The first declaration that starts at or after `offset`
    ///
    /// A declaration with a doc comment starts at its comment, and a query
    /// from inside that comment resolves to the declaration it documents.
    /// Function literals are never returned.
    pub fn next_func(&self, offset: usize) -> Result<&Func, NotFoundError> {
        self.funcs
            .iter()
            .filter(|f| f.is_declaration())
            .find(|f| f.starts_at_or_after(offset))
            .ok_or(NotFoundError::NoNextFunc { offset })
    }

    /// The last declaration starting before `offset`
    ///
    /// From inside a function body this is the function itself. Exactly the
    /// declarations `next_func` would skip are candidates.
    pub fn prev_func(&self, offset: usize) -> Result<&Func, NotFoundError> {
        self.funcs
            .iter()
            .filter(|f| f.is_declaration())
            .take_while(|f| !f.starts_at_or_after(offset))
            .last()
            .ok_or(NotFoundError::NoPrevFunc { offset })
    }
}

impl<'a> IntoIterator for &'a Funcs {
    type Item = &'a Func;
    type IntoIter = std::slice::Iter<'a, Func>;

    fn into_iter(self) -> Self::IntoIter {
        self.funcs.iter()
    }
}

impl IntoIterator for Funcs {
    type Item = Func;
    type IntoIter = std::vec::IntoIter<Func>;

    fn into_iter(self) -> Self::IntoIter {
        self.funcs.into_iter()
    }
}
