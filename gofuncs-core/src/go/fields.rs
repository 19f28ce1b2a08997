//! Parameter, result, receiver and type parameter extraction

use super::types::render_type;
use crate::document::Field;
use tree_sitter::Node;

pub(crate) fn node_text<'s>(node: Node, source: &'s str) -> &'s str {
    &source[node.start_byte()..node.end_byte()]
}

/// Fields of a `parameter_list` or `type_parameter_list`, in source order
pub(crate) fn extract_fields(list: Node, source: &str) -> Vec<Field> {
    let mut cursor = list.walk();
    let fields: Vec<Field> = list
        .named_children(&mut cursor)
        .filter_map(|child| extract_field(child, source))
        .collect();
    fields
}

/// Results are either a parameter list or a single bare type
pub(crate) fn extract_results(result: Node, source: &str) -> Vec<Field> {
    if result.kind() == "parameter_list" {
        extract_fields(result, source)
    } else {
        vec![Field::unnamed(&render_type(result, source))]
    }
}

fn extract_field(decl: Node, source: &str) -> Option<Field> {
    let variadic = match decl.kind() {
        "parameter_declaration" | "type_parameter_declaration" => false,
        "variadic_parameter_declaration" => true,
        // Comments inside the list
        _ => return None,
    };

    let type_node = decl.child_by_field_name("type")?;
    let mut cursor = decl.walk();
    let names = decl
        .children_by_field_name("name", &mut cursor)
        .map(|name| node_text(name, source).to_string())
        .collect();

    Some(Field {
        names,
        type_name: render_type(type_node, source),
        variadic,
    })
}
