//! gofuncs core library - positional function index for Go source
//!
//! Answers two questions about one parsed file: which function encloses a
//! byte offset, and which declaration comes next. Each function also carries
//! a canonical one-line signature.

// Global invariants enforced in this crate:
// - One document in, one immutable collection out; no incremental updates
// - No global mutable state, no I/O inside queries
// - Records are in document order; ranges are disjoint or nested
// - Formatting, comments, and whitespace must not affect signatures
// - Failures are returned to the caller, never logged or swallowed

pub mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod funcs;
pub mod go;
pub mod position;
pub mod report;
pub mod signature;

pub use builder::build_funcs;
pub use config::{ParserOptions, ResolvedConfig};
pub use document::{DocumentParser, Field, FuncKind, FunctionNode, ParsedDocument};
pub use error::{NotFoundError, ParseError};
pub use funcs::{Func, Funcs};
pub use go::GoParser;
pub use position::{LineIndex, Position, Range};
pub use report::{render_json, render_text, FuncReport, OutputFormat};
pub use signature::{render_signature, SignatureParts};

/// Parse Go source and index its functions
///
/// Fails with the parser's `ParseError` for malformed source; no partial
/// index is built in that case.
pub fn parse_source(source: &str, options: &ParserOptions) -> Result<Funcs, ParseError> {
    parse_with(&GoParser::new(), source, options)
}

/// Index the functions of `source` using any document parser
pub fn parse_with(
    parser: &dyn DocumentParser,
    source: &str,
    options: &ParserOptions,
) -> Result<Funcs, ParseError> {
    let document = parser.parse(source, options)?;
    Ok(build_funcs(document.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingParser;

    impl DocumentParser for FailingParser {
        fn parse(
            &self,
            _source: &str,
            _options: &ParserOptions,
        ) -> Result<Box<dyn ParsedDocument>, ParseError> {
            Err(ParseError::new(Position::new(3, 1, 4), "unexpected `}`"))
        }
    }

    #[test]
    fn test_parse_error_propagates_unchanged() {
        let err = parse_with(&FailingParser, "abc}", &ParserOptions::default()).unwrap_err();
        assert_eq!(err, ParseError::new(Position::new(3, 1, 4), "unexpected `}`"));
    }

    #[test]
    fn test_parse_source() {
        let funcs = parse_source("package main\n\nfunc main() {}\n", &ParserOptions::default())
            .unwrap();
        assert_eq!(funcs.len(), 1);
        assert_eq!(funcs.get(0).unwrap().signature, "func main()");
    }
}
