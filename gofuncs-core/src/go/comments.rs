//! Comment group detection

use tree_sitter::Node;

/// Collect `[start, end]` byte ranges of every comment node, in document order
pub(crate) fn collect_comments(node: Node, comments: &mut Vec<(usize, usize)>) {
    if node.kind() == "comment" {
        comments.push((node.start_byte(), node.end_byte().saturating_sub(1)));
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_comments(child, comments);
    }
}

/// Merge adjacent comments into groups
///
/// Comments separated only by whitespace with at most one newline belong to
/// the same group. A comment trailing code on its line forms a group alone.
pub(crate) fn group_comments(source: &str, comments: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let mut groups = Vec::new();
    // (start, end, trails code)
    let mut current: Option<(usize, usize, bool)> = None;

    for &(start, end) in comments {
        if let Some((group_start, group_end, trailing)) = current {
            if !trailing && is_adjacent(source, group_end, start) {
                current = Some((group_start, end, false));
                continue;
            }
            groups.push((group_start, group_end));
        }
        current = Some((start, end, trails_code(source, start)));
    }

    if let Some((start, end, _)) = current {
        groups.push((start, end));
    }
    groups
}

fn is_adjacent(source: &str, prev_end: usize, next_start: usize) -> bool {
    source
        .get(prev_end + 1..next_start)
        .is_some_and(|gap| gap.chars().all(char::is_whitespace) && gap.matches('\n').count() <= 1)
}

fn trails_code(source: &str, start: usize) -> bool {
    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    !source[line_start..start].trim().is_empty()
}
