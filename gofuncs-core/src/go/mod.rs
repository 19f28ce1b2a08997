//! Go language support
//!
//! Parses Go source with tree-sitter-go and exposes it as a `ParsedDocument`.

mod comments;
mod fields;
pub mod parser;
mod types;

pub use parser::{GoDocument, GoParser};
