#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use pretty_assertions::assert_eq;

use super::*;
use crate::ParsedName;

fn thing() -> Resource {
    Resource::compile("example.com/Thing", &["things/{thing}"], None).unwrap()
}

fn book() -> Resource {
    Resource::compile(
        "example.com/Book",
        &["publishers/{publisher}/books/{book}", "authors/{author}/books/{book}"],
        None,
    )
    .unwrap()
}

fn publisher_book(publisher: &str, book: &str) -> ResourceName {
    ResourceName::Variant {
        pattern: 0,
        name: ParsedName::new().with("publisher", publisher).with("book", book),
    }
}

fn author_book(author: &str, book: &str) -> ResourceName {
    ResourceName::Variant {
        pattern: 1,
        name: ParsedName::new().with("author", author).with("book", book),
    }
}

// Single pattern

#[test]
fn single_pattern_parse_is_untagged() {
    assert_eq!(
        parse(&thing(), "things/foo").unwrap(),
        ResourceName::Single(ParsedName::new().with("thing", "foo"))
    );
}

#[test]
fn single_pattern_errors_are_not_aggregated() {
    assert_eq!(
        parse(&thing(), "thing/foo").unwrap_err().to_string(),
        r#"parse "thing/foo": bad segment 0, want: "things", got: "thing""#
    );
}

#[test]
fn single_pattern_full_round_trip() {
    let resource = thing();
    let name = parse_full(&resource, "//example.com/things/foo").unwrap();
    assert_eq!(format(&resource, &name).unwrap(), "things/foo");
    assert_eq!(format_full(&resource, &name).unwrap(), "//example.com/things/foo");
}

// Multi pattern

#[test]
fn first_pattern_match_is_tagged_zero() {
    assert_eq!(
        parse(&book(), "publishers/foo/books/bar").unwrap(),
        publisher_book("foo", "bar")
    );
}

#[test]
fn second_pattern_match_is_tagged_one() {
    assert_eq!(
        parse(&book(), "authors/foo/books/bar").unwrap(),
        author_book("foo", "bar")
    );
}

#[test]
fn tag_is_part_of_identity() {
    let fields = ParsedName::new().with("book", "bar");
    let a = ResourceName::Variant {
        pattern: 0,
        name: fields.clone(),
    };
    let b = ResourceName::Variant {
        pattern: 1,
        name: fields,
    };
    assert_ne!(a, b);
}

#[test]
fn earlier_pattern_wins_when_both_match() {
    let resource = Resource::compile("example.com/Any", &["{a}/{b}", "x/{c}"], None).unwrap();
    let got = parse(&resource, "x/y").unwrap();
    assert_eq!(got.pattern(), 0);
    assert_eq!(got.parsed().get("a"), Some("x"));
}

#[test]
fn all_failures_are_aggregated_in_order() {
    assert_eq!(
        parse(&book(), "publisher/foo/books/bar").unwrap_err().to_string(),
        concat!(
            r#"no pattern matches input: "#,
            r#"pattern 0: parse "publisher/foo/books/bar": bad segment 0, want: "publishers", got: "publisher"; "#,
            r#"pattern 1: parse "publisher/foo/books/bar": bad segment 0, want: "authors", got: "publisher""#,
        )
    );
}

#[test]
fn aggregated_segment_count_failures() {
    assert_eq!(
        parse(&book(), "").unwrap_err().to_string(),
        concat!(
            r#"no pattern matches input: "#,
            r#"pattern 0: parse "": bad number of segments, want: 4, got: 1; "#,
            r#"pattern 1: parse "": bad number of segments, want: 4, got: 1"#,
        )
    );
}

#[test]
fn aggregated_errors_are_structured() {
    let Err(ParseError::NoPatternMatches { errors }) = parse(&book(), "authors/foo") else {
        panic!("expected aggregate error");
    };
    let indices: Vec<_> = errors.iter().map(|e| e.pattern).collect();
    assert_eq!(indices, [0, 1]);
    assert!(errors
        .iter()
        .all(|e| matches!(e.error, ParseError::SegmentCountMismatch { want: 4, got: 2, .. })));
}

#[test]
fn full_parse_matches_second_pattern() {
    assert_eq!(
        parse_full(&book(), "//example.com/authors/foo/books/bar").unwrap(),
        author_book("foo", "bar")
    );
}

#[test]
fn full_parse_aggregates_on_remainder() {
    assert_eq!(
        parse_full(&book(), "//example.com/publisher/foo/books/bar")
            .unwrap_err()
            .to_string(),
        concat!(
            r#"no pattern matches input: "#,
            r#"pattern 0: parse "publisher/foo/books/bar": bad segment 0, want: "publishers", got: "publisher"; "#,
            r#"pattern 1: parse "publisher/foo/books/bar": bad segment 0, want: "authors", got: "publisher""#,
        )
    );
}

#[test]
fn full_parse_prefix_mismatch_short_circuits() {
    let err = parse_full(&book(), "example.com/publishers/foo/books/bar").unwrap_err();
    assert_eq!(
        err,
        ParseError::PrefixMismatch {
            input: "example.com/publishers/foo/books/bar".to_owned(),
            want: "//example.com/".to_owned(),
        }
    );
    assert_eq!(
        parse_full(&book(), "").unwrap_err().to_string(),
        r#"parse "": invalid prefix, want: "//example.com/""#
    );
}

// Format

#[test]
fn format_dispatches_on_tag() {
    let resource = book();
    assert_eq!(
        format(&resource, &publisher_book("foo", "bar")).unwrap(),
        "publishers/foo/books/bar"
    );
    assert_eq!(
        format(&resource, &author_book("foo", "bar")).unwrap(),
        "authors/foo/books/bar"
    );
    assert_eq!(
        format_full(&resource, &author_book("foo", "bar")).unwrap(),
        "//example.com/authors/foo/books/bar"
    );
}

#[test]
fn format_rejects_out_of_range_tag() {
    let name = ResourceName::Variant {
        pattern: 2,
        name: ParsedName::new(),
    };
    assert_eq!(
        format(&book(), &name),
        Err(FormatError::UnknownPattern {
            ty: "example.com/Book".to_owned(),
            pattern: 2,
            count: 2,
        })
    );
}

#[test]
fn format_rejects_untagged_name_for_multi_pattern() {
    let name = ResourceName::Single(ParsedName::new().with("book", "bar"));
    assert!(matches!(
        format(&book(), &name),
        Err(FormatError::UntaggedName { .. })
    ));
}

#[test]
fn format_rejects_tagged_name_for_single_pattern() {
    let name = ResourceName::Variant {
        pattern: 0,
        name: ParsedName::new().with("thing", "foo"),
    };
    assert!(matches!(
        format_full(&thing(), &name),
        Err(FormatError::UnexpectedTag { pattern: 0, .. })
    ));
}
