//! Go parser using tree-sitter

use super::comments::{collect_comments, group_comments};
use super::fields::{extract_fields, extract_results, node_text};
use crate::config::ParserOptions;
use crate::document::{DocumentParser, FuncKind, FunctionNode, ParsedDocument};
use crate::error::ParseError;
use crate::position::{LineIndex, Position};
use tree_sitter::{Node, Parser, Tree};

/// Longest source excerpt quoted in a parse error
const ERROR_SNIPPET_LEN: usize = 24;

/// Go parser using tree-sitter
#[derive(Debug, Clone, Copy, Default)]
pub struct GoParser;

impl GoParser {
    pub fn new() -> Self {
        GoParser
    }
}

impl DocumentParser for GoParser {
    fn parse(
        &self,
        source: &str,
        options: &ParserOptions,
    ) -> Result<Box<dyn ParsedDocument>, ParseError> {
        GoDocument::parse(source, options).map(|doc| Box::new(doc) as Box<dyn ParsedDocument>)
    }
}

/// Parsed Go source file
pub struct GoDocument {
    tree: Tree,
    source: String,
    lines: LineIndex,
    comment_groups: Vec<(usize, usize)>,
}

impl GoDocument {
    /// Parse `source`, failing on the first syntax error in the tree
    pub fn parse(source: &str, options: &ParserOptions) -> Result<Self, ParseError> {
        let lines = LineIndex::new(source);

        // tree-sitter needs a mutable parser per parse
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|e| {
                ParseError::new(lines.position(0), format!("failed to load Go grammar: {}", e))
            })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::new(lines.position(0), "parser produced no syntax tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            if let Some(bad) = first_error(root) {
                return Err(describe_error(bad, source, &lines));
            }
        }

        let comment_groups = if options.parse_comments {
            let mut comments = Vec::new();
            collect_comments(root, &mut comments);
            group_comments(source, &comments)
        } else {
            Vec::new()
        };

        tracing::debug!(
            bytes = source.len(),
            lines = lines.line_count(),
            comment_groups = comment_groups.len(),
            "parsed Go source"
        );

        Ok(GoDocument {
            tree,
            source: source.to_string(),
            lines,
            comment_groups,
        })
    }
}

impl ParsedDocument for GoDocument {
    fn source(&self) -> &str {
        &self.source
    }

    fn function_nodes(&self) -> Vec<FunctionNode> {
        let mut functions = Vec::new();
        discover_functions_recursive(self.tree.root_node(), &self.source, &mut functions);
        functions
    }

    fn comment_groups(&self) -> Vec<(usize, usize)> {
        self.comment_groups.clone()
    }

    fn position(&self, offset: usize) -> Position {
        self.lines.position(offset)
    }
}

/// Pre-order walk: an enclosing function is emitted before its literals
fn discover_functions_recursive(node: Node, source: &str, functions: &mut Vec<FunctionNode>) {
    if let Some(function) = extract_function(node, source) {
        functions.push(function);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        discover_functions_recursive(child, source, functions);
    }
}

fn extract_function(node: Node, source: &str) -> Option<FunctionNode> {
    let kind = match node.kind() {
        "function_declaration" => FuncKind::Function,
        "method_declaration" => FuncKind::Method,
        "func_literal" => FuncKind::Literal,
        _ => return None,
    };

    let name = if kind.is_declaration() {
        node.child_by_field_name("name")
            .map(|name| node_text(name, source).to_string())
    } else {
        None
    };

    let receiver = node
        .child_by_field_name("receiver")
        .and_then(|list| extract_fields(list, source).into_iter().next());

    let field_list = |field: &str| {
        node.child_by_field_name(field)
            .map(|list| extract_fields(list, source))
            .unwrap_or_default()
    };

    let results = node
        .child_by_field_name("result")
        .map(|result| extract_results(result, source))
        .unwrap_or_default();

    Some(FunctionNode {
        kind,
        func_offset: node.start_byte(),
        end_offset: node.end_byte().saturating_sub(1).max(node.start_byte()),
        receiver,
        name,
        type_params: field_list("type_parameters"),
        params: field_list("parameters"),
        results,
    })
}

/// First ERROR or MISSING node in document order
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    None
}

fn describe_error(node: Node, source: &str, lines: &LineIndex) -> ParseError {
    let position = lines.position(node.start_byte());
    if node.is_missing() {
        return ParseError::new(position, format!("missing `{}`", node.kind()));
    }

    let snippet: String = node_text(node, source)
        .lines()
        .next()
        .unwrap_or("")
        .trim()
        .chars()
        .take(ERROR_SNIPPET_LEN)
        .collect();
    if snippet.is_empty() {
        ParseError::new(position, "unexpected end of input")
    } else {
        ParseError::new(position, format!("unexpected `{}`", snippet))
    }
}
