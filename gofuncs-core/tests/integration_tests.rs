//! Integration tests for parsing Go source into a function index

use gofuncs_core::{parse_source, FuncKind, Funcs, NotFoundError, ParserOptions};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join("go")
        .join(name)
}

fn parse_fixture(name: &str, options: &ParserOptions) -> Funcs {
    let source = std::fs::read_to_string(fixture_path(name)).unwrap();
    parse_source(&source, options).unwrap_or_else(|e| panic!("failed to parse {}: {}", name, e))
}

fn signatures(funcs: &Funcs) -> Vec<String> {
    funcs.iter().map(|f| f.signature.clone()).collect()
}

const NESTED_SRC: &str = "package main

var bar = func() {}

func foo() error {
	_ = func() {
		// -------
	}
	return nil
}
";

const DOCUMENTED_SRC: &str = "package main

// Comment foo
// Comment bar
func foo() error {
	_ = func() {
		// -------
	}
	return nil
}

func bar() error {
	return nil
}";

#[test]
fn test_enclosing_func_offsets() {
    let funcs = parse_source(NESTED_SRC, &ParserOptions::default()).unwrap();

    // (query offset, expected func keyword offset)
    let cases = [
        (24, 24), // `func` of the bar literal
        (25, 24),
        (32, 24), // closing brace of the bar literal
        (35, 35), // func foo() error {
        (53, 35),
        (59, 59), // _ = func() {
        (67, 59),
        (70, 59),
        (82, 59), // closing brace of the inner literal
        (85, 35),
        (96, 35), // closing brace of foo
    ];

    for (offset, want) in cases {
        let func = funcs.enclosing_func(offset).unwrap();
        assert_eq!(
            func.func_pos.offset, want,
            "offset {} should belong to func at {}",
            offset, want
        );
    }
}

#[test]
fn test_enclosing_func_outside_bodies() {
    let funcs = parse_source(NESTED_SRC, &ParserOptions::default()).unwrap();
    for offset in [0, 13, 23, 33, 34, 97] {
        assert_eq!(
            funcs.enclosing_func(offset),
            Err(NotFoundError::NoEnclosingFunc { offset }),
            "offset {} is outside every function",
            offset
        );
    }
}

#[test]
fn test_enclosing_func_is_innermost_everywhere() {
    let funcs = parse_source(NESTED_SRC, &ParserOptions::default()).unwrap();

    for offset in 0..NESTED_SRC.len() {
        let expected = funcs
            .iter()
            .filter(|f| f.body_range.contains(offset))
            .min_by_key(|f| f.body_range.width());
        match (funcs.enclosing_func(offset), expected) {
            (Ok(found), Some(expected)) => assert_eq!(found.func_pos, expected.func_pos),
            (Err(_), None) => {}
            (found, expected) => panic!(
                "offset {}: got {:?}, expected {:?}",
                offset,
                found.map(|f| f.func_pos),
                expected.map(|f| f.func_pos)
            ),
        }
    }
}

#[test]
fn test_records_are_nested_or_disjoint() {
    let funcs = parse_fixture("signatures.go", &ParserOptions::default());
    let all = funcs.as_slice();

    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert!(a.body_range.start.offset <= b.body_range.start.offset);
            let disjoint = a.body_range.end.offset < b.body_range.start.offset;
            assert!(
                disjoint || a.body_range.contains_range(&b.body_range),
                "{} and {} partially overlap",
                a.signature,
                b.signature
            );
            assert_ne!(a.func_pos.offset, b.func_pos.offset);
        }
    }
}

#[test]
fn test_next_func_with_comments() {
    let funcs = parse_source(DOCUMENTED_SRC, &ParserOptions::with_comments())
        .unwrap()
        .declarations();

    let foo = funcs.get(0).unwrap();
    let comment = foo.comment_range.expect("foo should have its doc comment");
    assert_eq!((comment.start.offset, comment.end.offset), (14, 42));
    assert_eq!(comment.start.line, 3);
    assert!(funcs.get(1).unwrap().comment_range.is_none());

    // (query offset, expected func keyword offset)
    let cases = [(0, 44), (14, 44), (29, 44), (42, 44), (43, 108), (44, 108), (108, 108)];
    for (offset, want) in cases {
        assert_eq!(
            funcs.next_func(offset).unwrap().func_pos.offset,
            want,
            "offset {} should pick func at {}",
            offset,
            want
        );
    }

    assert_eq!(
        funcs.next_func(109),
        Err(NotFoundError::NoNextFunc { offset: 109 })
    );
}

#[test]
fn test_next_func_without_comment_tracking() {
    let funcs = parse_source(DOCUMENTED_SRC, &ParserOptions::default()).unwrap();
    assert!(funcs.iter().all(|f| f.comment_range.is_none()));

    assert_eq!(funcs.next_func(14).unwrap().func_pos.offset, 44);
    assert_eq!(funcs.next_func(45).unwrap().func_pos.offset, 108);
    // The literal at 63 is never a candidate
    assert_eq!(funcs.next_func(50).unwrap().func_pos.offset, 108);
}

#[test]
fn test_next_func_is_monotonic() {
    let funcs = parse_source(DOCUMENTED_SRC, &ParserOptions::with_comments()).unwrap();
    let mut last = 0;
    for offset in 0..=DOCUMENTED_SRC.len() {
        if let Ok(func) = funcs.next_func(offset) {
            assert!(func.effective_start() >= last, "went backwards at {}", offset);
            last = func.effective_start();
        }
    }
}

#[test]
fn test_prev_func() {
    let funcs = parse_source(DOCUMENTED_SRC, &ParserOptions::with_comments()).unwrap();
    assert!(funcs.prev_func(20).is_err());
    assert_eq!(funcs.prev_func(70).unwrap().func_pos.offset, 44);
    assert_eq!(funcs.prev_func(108).unwrap().func_pos.offset, 44);
    assert_eq!(funcs.prev_func(120).unwrap().func_pos.offset, 108);
}

#[test]
fn test_signatures() {
    let funcs = parse_fixture("signatures.go", &ParserOptions::default());
    assert_eq!(
        signatures(&funcs),
        vec![
            "func()",
            "func foo(a int, b string, c bool) (bool, error)",
            "func foo(a, b int, foo string) (string, error)",
            "func()",
            "func (q *qaz) example(x, y, z int) error",
            "func(foo int) error",
            "func example()",
            "func variadic(x ...string)",
            "func bar(x int) error",
        ]
    );

    let kinds: Vec<_> = funcs.iter().map(|f| f.kind).collect();
    assert_eq!(kinds[0], FuncKind::Literal);
    assert_eq!(kinds[4], FuncKind::Method);
    assert_eq!(funcs.declarations().len(), 6);
}

#[test]
fn test_signatures_ignore_layout() {
    let compact = parse_fixture("compact.go", &ParserOptions::with_comments());
    let spread = parse_fixture("spread.go", &ParserOptions::with_comments());

    assert_eq!(
        signatures(&compact),
        vec![
            "func (s *Stack) Push(v, w int)",
            "func join(sep string, parts ...string) (out string, err error)",
            "func pair(a, b int, c string) (int, error)",
            "func Keys[K comparable, V any](m map[K]V) []K",
            concat!(
                "func decode(p struct{ A int; B List[T] }, h interface{ M(); N() error }, ",
                "cb func(a, b int) error, done <-chan struct{})",
            ),
        ]
    );
    assert_eq!(signatures(&compact), signatures(&spread));

    // The doc comment of Push is attached in both layouts; the type's is not
    for funcs in [&compact, &spread] {
        let push = funcs.get(0).unwrap();
        assert!(push.comment_range.is_some());
        assert!(funcs.iter().skip(1).all(|f| f.comment_range.is_none()));
    }
}

#[test]
fn test_signature_matches_renderer() {
    let funcs = parse_fixture("signatures.go", &ParserOptions::default());
    for func in &funcs {
        assert_eq!(func.signature, func.render_signature());
    }
}

#[test]
fn test_parsing_is_deterministic() {
    let first = parse_fixture("spread.go", &ParserOptions::with_comments());
    let second = parse_fixture("spread.go", &ParserOptions::with_comments());
    assert_eq!(first, second);
}

#[test]
fn test_malformed_source_fails() {
    let source = std::fs::read_to_string(fixture_path("broken.go")).unwrap();
    let err = parse_source(&source, &ParserOptions::default()).unwrap_err();
    assert!(err.position.line >= 3, "unexpected error position: {}", err);
    assert!(!err.message.is_empty());
}
