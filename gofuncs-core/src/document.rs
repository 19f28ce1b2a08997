//! Parsed-document abstraction consumed by the function index
//!
//! A parser adapter turns source text into a `ParsedDocument`. The index only
//! ever sees the normalized shape below, never the adapter's own node types.

use crate::config::ParserOptions;
use crate::error::ParseError;
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Which kind of function-like construct a node is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuncKind {
    /// Named top-level function
    Function,
    /// Function with a receiver
    Method,
    /// Anonymous function literal
    Literal,
}

impl FuncKind {
    /// Functions and methods are declarations; literals are not
    pub fn is_declaration(&self) -> bool {
        !matches!(self, FuncKind::Literal)
    }
}

/// One parameter-like group: `a, b int`, `x ...string`, or a bare type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub names: Vec<String>,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub variadic: bool,
}

impl Field {
    pub fn named<S: Into<String>>(names: impl IntoIterator<Item = S>, type_name: &str) -> Self {
        Field {
            names: names.into_iter().map(Into::into).collect(),
            type_name: type_name.to_string(),
            variadic: false,
        }
    }

    pub fn unnamed(type_name: &str) -> Self {
        Field::named(Vec::<String>::new(), type_name)
    }

    pub fn variadic(self) -> Self {
        Field {
            variadic: true,
            ..self
        }
    }

    pub fn is_named(&self) -> bool {
        !self.names.is_empty()
    }
}

/// Structural description of one function-like node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionNode {
    pub kind: FuncKind,
    /// Offset of the `func` keyword
    pub func_offset: usize,
    /// Offset of the last byte of the construct (closing brace of the body)
    pub end_offset: usize,
    pub receiver: Option<Field>,
    pub name: Option<String>,
    pub type_params: Vec<Field>,
    pub params: Vec<Field>,
    pub results: Vec<Field>,
}

/// A successfully parsed source document
pub trait ParsedDocument {
    /// The original source text
    fn source(&self) -> &str;

    /// Every function-like node, in depth-first document order
    fn function_nodes(&self) -> Vec<FunctionNode>;

    /// Byte ranges `[start, end]` of comment groups, in document order
    ///
    /// Empty when comment tracking was disabled for the parse.
    fn comment_groups(&self) -> Vec<(usize, usize)>;

    /// Resolve a byte offset to a position
    fn position(&self, offset: usize) -> Position;
}

/// Parser producing `ParsedDocument`s from raw source
pub trait DocumentParser {
    /// Parse source text
    ///
    /// Fails with a `ParseError` when the source is malformed; no document is
    /// produced in that case.
    fn parse(
        &self,
        source: &str,
        options: &ParserOptions,
    ) -> Result<Box<dyn ParsedDocument>, ParseError>;
}
