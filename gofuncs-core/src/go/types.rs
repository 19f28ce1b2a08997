//! Canonical one-line rendering of Go type expressions
//!
//! Types are rendered from the syntax tree rather than the source text, so
//! layout and comments inside a type never reach a signature. Struct and
//! interface bodies use the `struct{ A int; B string }` form.

use super::fields::{extract_fields, extract_results, node_text};
use crate::signature::{render_fields, render_results};
use tree_sitter::Node;

pub(crate) fn render_type(node: Node, source: &str) -> String {
    match node.kind() {
        "struct_type" => render_struct(node, source),
        "interface_type" => render_interface(node, source),
        "function_type" => render_function_type(node, source),
        "channel_type" => render_channel(node, source),
        _ if node.child_count() == 0 => node_text(node, source).to_string(),
        _ => render_tokens(node, source),
    }
}

/// Concatenate child renderings, spacing only where two words would merge
fn render_tokens(node: Node, source: &str) -> String {
    let mut out = String::new();
    for child in children(node) {
        let part = match child.kind() {
            "comment" => continue,
            "," => {
                out.push_str(", ");
                continue;
            }
            "|" => {
                out.push_str(" | ");
                continue;
            }
            _ => render_type(child, source),
        };
        // Trailing comma of a multi-line list
        if part.starts_with([']', ')']) && out.ends_with(", ") {
            out.truncate(out.len() - 2);
        }
        if ends_with_word(&out) && starts_with_word(&part) {
            out.push(' ');
        }
        out.push_str(&part);
    }
    out
}

fn render_struct(node: Node, source: &str) -> String {
    let fields: Vec<String> = children(node)
        .into_iter()
        .filter(|child| child.kind() == "field_declaration_list")
        .flat_map(children)
        .filter(|decl| decl.kind() == "field_declaration")
        .map(|decl| render_struct_field(decl, source))
        .collect();
    braced("struct", &fields)
}

fn render_struct_field(decl: Node, source: &str) -> String {
    let mut cursor = decl.walk();
    let names: Vec<&str> = decl
        .children_by_field_name("name", &mut cursor)
        .map(|name| node_text(name, source))
        .collect();
    let type_name = decl
        .child_by_field_name("type")
        .map(|ty| render_type(ty, source))
        .unwrap_or_default();

    let mut out = if names.is_empty() {
        // Embedded field, possibly through a pointer
        let pointer = children(decl).iter().any(|child| child.kind() == "*");
        format!("{}{}", if pointer { "*" } else { "" }, type_name)
    } else {
        format!("{} {}", names.join(", "), type_name)
    };
    if let Some(tag) = decl.child_by_field_name("tag") {
        out.push(' ');
        out.push_str(node_text(tag, source));
    }
    out
}

fn render_interface(node: Node, source: &str) -> String {
    let elems: Vec<String> = children(node)
        .into_iter()
        .filter_map(|child| match child.kind() {
            "method_elem" | "method_spec" => Some(render_method_elem(child, source)),
            "comment" | "interface" | "{" | "}" | "\n" | ";" => None,
            _ if child.is_named() => Some(render_type(child, source)),
            _ => None,
        })
        .collect();
    braced("interface", &elems)
}

fn render_method_elem(elem: Node, source: &str) -> String {
    let name = elem
        .child_by_field_name("name")
        .map(|name| node_text(name, source))
        .unwrap_or_default();
    format!("{}{}", name, render_callable(elem, source))
}

fn render_function_type(node: Node, source: &str) -> String {
    format!("func{}", render_callable(node, source))
}

/// `(params) results` of a function type or interface method
fn render_callable(node: Node, source: &str) -> String {
    let params = node
        .child_by_field_name("parameters")
        .map(|list| extract_fields(list, source))
        .unwrap_or_default();
    let results = node
        .child_by_field_name("result")
        .map(|result| extract_results(result, source))
        .unwrap_or_default();

    let mut out = format!("({})", render_fields(&params));
    if !results.is_empty() {
        out.push(' ');
        out.push_str(&render_results(&results));
    }
    out
}

fn render_channel(node: Node, source: &str) -> String {
    let value = node
        .child_by_field_name("value")
        .map(|value| render_type(value, source))
        .unwrap_or_default();
    let kinds: Vec<&str> = children(node).iter().map(|child| child.kind()).collect();
    match kinds.as_slice() {
        ["<-", ..] => format!("<-chan {}", value),
        _ if kinds.contains(&"<-") => format!("chan<- {}", value),
        _ => format!("chan {}", value),
    }
}

fn braced(keyword: &str, members: &[String]) -> String {
    if members.is_empty() {
        format!("{}{{}}", keyword)
    } else {
        format!("{}{{ {} }}", keyword, members.join("; "))
    }
}

fn children(node: Node) -> Vec<Node> {
    let mut cursor = node.walk();
    let nodes: Vec<Node> = node.children(&mut cursor).collect();
    nodes
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn ends_with_word(text: &str) -> bool {
    text.chars().last().is_some_and(is_word_char)
}

fn starts_with_word(text: &str) -> bool {
    text.chars().next().is_some_and(is_word_char)
}
