//! Canonical single-line function signatures
//!
//! Rendering depends only on the structural fields of a function, never on
//! how the source was laid out, so reformatting a file leaves every signature
//! unchanged.

use crate::document::Field;

/// The parts of a function that make up its signature
#[derive(Debug, Clone, Copy)]
pub struct SignatureParts<'a> {
    pub receiver: Option<&'a Field>,
    /// `None` for function literals
    pub name: Option<&'a str>,
    pub type_params: &'a [Field],
    pub params: &'a [Field],
    pub results: &'a [Field],
}

/// Render a signature such as `func (q *qaz) example(x, y, z int) error`
pub fn render_signature(parts: &SignatureParts<'_>) -> String {
    let mut out = String::from("func");

    if let Some(name) = parts.name {
        out.push(' ');
        if let Some(receiver) = parts.receiver {
            out.push('(');
            out.push_str(&render_fields(std::slice::from_ref(receiver)));
            out.push_str(") ");
        }
        out.push_str(name);
        if !parts.type_params.is_empty() {
            out.push('[');
            out.push_str(&render_fields(parts.type_params));
            out.push(']');
        }
    }

    out.push('(');
    out.push_str(&render_fields(parts.params));
    out.push(')');

    let results = render_results(parts.results);
    if !results.is_empty() {
        out.push(' ');
        out.push_str(&results);
    }

    out
}

/// Render a comma-separated field list without surrounding parentheses
///
/// Adjacent named, non-variadic fields of identical type share one type:
/// `a int, b int` becomes `a, b int`. Unnamed fields render as bare types.
pub fn render_fields(fields: &[Field]) -> String {
    let mut groups: Vec<Field> = Vec::with_capacity(fields.len());

    for field in fields {
        match groups.last_mut() {
            Some(last) if mergeable(last, field) => {
                last.names.extend(field.names.iter().cloned());
            }
            _ => groups.push(field.clone()),
        }
    }

    groups
        .iter()
        .map(render_field)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a result list: nothing, a bare type, or a parenthesized list
pub fn render_results(results: &[Field]) -> String {
    match results {
        [] => String::new(),
        [only] if !only.is_named() => render_field(only),
        _ => format!("({})", render_fields(results)),
    }
}

fn mergeable(prev: &Field, next: &Field) -> bool {
    prev.is_named()
        && next.is_named()
        && !prev.variadic
        && !next.variadic
        && prev.type_name == next.type_name
}

fn render_field(field: &Field) -> String {
    let ellipsis = if field.variadic { "..." } else { "" };
    if field.is_named() {
        format!("{} {}{}", field.names.join(", "), ellipsis, field.type_name)
    } else {
        format!("{}{}", ellipsis, field.type_name)
    }
}
