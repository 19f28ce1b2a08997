//! Builds the function collection from a parsed document
//!
//! Global invariants enforced:
//! - One record per function-like node, outer functions before nested ones
//! - Only declarations receive a doc comment
//! - Signatures are rendered once, at build time

use crate::document::{FunctionNode, ParsedDocument};
use crate::funcs::{Func, Funcs};
use crate::position::Range;
use crate::signature::render_signature;

/// Build the collection for one parsed document
pub fn build_funcs(doc: &dyn ParsedDocument) -> Funcs {
    let comment_groups = doc.comment_groups();
    let nodes = doc.function_nodes();

    let funcs: Vec<Func> = nodes
        .into_iter()
        .map(|node| build_func(doc, node, &comment_groups))
        .collect();

    tracing::debug!(
        funcs = funcs.len(),
        declarations = funcs.iter().filter(|f| f.is_declaration()).count(),
        documented = funcs.iter().filter(|f| f.comment_range.is_some()).count(),
        "built function index"
    );

    Funcs::new(funcs)
}

fn build_func(
    doc: &dyn ParsedDocument,
    node: FunctionNode,
    comment_groups: &[(usize, usize)],
) -> Func {
    let func_pos = doc.position(node.func_offset);
    let body_range = Range::new(func_pos, doc.position(node.end_offset));

    let comment_range = if node.kind.is_declaration() {
        doc_comment_for(doc.source(), comment_groups, node.func_offset)
            .map(|(start, end)| Range::new(doc.position(start), doc.position(end)))
    } else {
        None
    };

    let mut func = Func {
        kind: node.kind,
        func_pos,
        body_range,
        comment_range,
        receiver: node.receiver,
        name: node.name,
        type_params: node.type_params,
        params: node.params,
        results: node.results,
        signature: String::new(),
    };
    func.signature = render_signature(&func.signature_parts());
    func
}

/// Find the comment group documenting the declaration at `func_offset`
///
/// The group must be the nearest one ending before the keyword, separated
/// from it by whitespace holding at most one newline, and must not trail
/// code on its first line.
pub(crate) fn doc_comment_for(
    source: &str,
    groups: &[(usize, usize)],
    func_offset: usize,
) -> Option<(usize, usize)> {
    let idx = groups.partition_point(|&(_, end)| end < func_offset);
    let &(start, end) = groups.get(idx.checked_sub(1)?)?;

    let gap = source.get(end + 1..func_offset)?;
    if !gap.chars().all(char::is_whitespace) || gap.matches('\n').count() > 1 {
        return None;
    }

    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    if !source[line_start..start].trim().is_empty() {
        return None;
    }

    Some((start, end))
}
