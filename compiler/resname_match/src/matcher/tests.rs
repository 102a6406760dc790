#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use pretty_assertions::assert_eq;

use super::*;

const AUTHORITY: &str = "//example.com/";

fn pattern(template: &str) -> Pattern {
    Pattern::compile(template).unwrap()
}

fn err_message(result: Result<ParsedName, ParseError>) -> String {
    result.unwrap_err().to_string()
}

// Relative parse

#[test]
fn parse_captures_variable() {
    let got = parse(&pattern("things/{thing}"), "things/foo").unwrap();
    assert_eq!(got, ParsedName::new().with("thing", "foo"));
}

#[test]
fn parse_captures_variables_in_declaration_order() {
    let got =
        parse(&pattern("projects/{project}/things/{thing}"), "projects/foo/things/bar").unwrap();
    let fields: Vec<_> = got.iter().collect();
    assert_eq!(fields, [("project", "foo"), ("thing", "bar")]);
}

#[test]
fn parse_literal_mismatch() {
    assert_eq!(
        err_message(parse(&pattern("things/{thing}"), "thing/foo")),
        r#"parse "thing/foo": bad segment 0, want: "things", got: "thing""#
    );
}

#[test]
fn parse_literal_mismatch_later_position() {
    assert_eq!(
        err_message(parse(
            &pattern("projects/{project}/things/{thing}"),
            "projects/foo/thing/bar"
        )),
        r#"parse "projects/foo/thing/bar": bad segment 2, want: "things", got: "thing""#
    );
}

#[test]
fn parse_reports_first_failing_literal() {
    let err = parse(&pattern("a/{x}/b/{y}"), "c/1/d/2").unwrap_err();
    assert_eq!(
        err,
        ParseError::LiteralMismatch {
            input: "c/1/d/2".to_owned(),
            position: 0,
            want: "a".to_owned(),
            got: "c".to_owned(),
        }
    );
}

#[test]
fn parse_too_many_segments() {
    assert_eq!(
        err_message(parse(&pattern("things/{thing}"), "things/foo/bar")),
        r#"parse "things/foo/bar": bad number of segments, want: 2, got: 3"#
    );
}

#[test]
fn parse_too_few_segments() {
    assert_eq!(
        err_message(parse(&pattern("projects/{project}/things/{thing}"), "projects/foo")),
        r#"parse "projects/foo": bad number of segments, want: 4, got: 2"#
    );
}

#[test]
fn parse_empty_input_has_one_segment() {
    assert_eq!(
        err_message(parse(&pattern("things/{thing}"), "")),
        r#"parse "": bad number of segments, want: 2, got: 1"#
    );
}

#[test]
fn segment_count_uses_pattern_length_not_variable_count() {
    let err = parse(&pattern("a/b/{c}"), "a/b").unwrap_err();
    assert!(matches!(
        err,
        ParseError::SegmentCountMismatch { want: 3, got: 2, .. }
    ));
}

#[test]
fn variable_accepts_empty_part() {
    let got = parse(&pattern("things/{thing}"), "things/").unwrap();
    assert_eq!(got.get("thing"), Some(""));
}

#[test]
fn literal_comparison_is_case_sensitive() {
    assert!(parse(&pattern("things/{thing}"), "Things/foo").is_err());
}

#[test]
fn empty_literal_from_leading_slash() {
    let p = pattern("/things/{thing}");
    assert_eq!(parse(&p, "/things/foo").unwrap().get("thing"), Some("foo"));
    assert_eq!(
        err_message(parse(&p, "x/things/foo")),
        r#"parse "x/things/foo": bad segment 0, want: "", got: "x""#
    );
}

#[test]
fn quoted_values_are_escaped() {
    assert_eq!(
        err_message(parse(&pattern("things/{thing}"), "a\"b/c")),
        r#"parse "a\"b/c": bad segment 0, want: "things", got: "a\"b""#
    );
}

#[test]
fn control_characters_use_hex_escapes() {
    assert_eq!(
        err_message(parse(&pattern("things/{thing}"), "thing\u{1}/foo")),
        r#"parse "thing\x01/foo": bad segment 0, want: "things", got: "thing\x01""#
    );
}

#[test]
fn printable_unicode_is_not_escaped() {
    assert_eq!(
        err_message(parse(&pattern("things/{thing}"), "cafe\u{301}")),
        "parse \"cafe\u{301}\": bad number of segments, want: 2, got: 1"
    );
}

// Full parse

#[test]
fn parse_full_strips_authority() {
    let got =
        parse_full(&pattern("things/{thing}"), AUTHORITY, "//example.com/things/foo").unwrap();
    assert_eq!(got, ParsedName::new().with("thing", "foo"));
}

#[test]
fn parse_full_missing_prefix() {
    assert_eq!(
        err_message(parse_full(&pattern("things/{thing}"), AUTHORITY, "example.com/things/foo")),
        r#"parse "example.com/things/foo": invalid prefix, want: "//example.com/""#
    );
}

#[test]
fn parse_full_other_host() {
    assert_eq!(
        err_message(parse_full(
            &pattern("things/{thing}"),
            AUTHORITY,
            "//foo.example.com/things/foo"
        )),
        r#"parse "//foo.example.com/things/foo": invalid prefix, want: "//example.com/""#
    );
}

#[test]
fn parse_full_empty_input() {
    assert_eq!(
        err_message(parse_full(&pattern("things/{thing}"), AUTHORITY, "")),
        r#"parse "": invalid prefix, want: "//example.com/""#
    );
}

#[test]
fn parse_full_reports_relative_errors_on_remainder() {
    assert_eq!(
        err_message(parse_full(&pattern("things/{thing}"), AUTHORITY, "//example.com/thing/foo")),
        r#"parse "thing/foo": bad segment 0, want: "things", got: "thing""#
    );
    assert_eq!(
        err_message(parse_full(
            &pattern("things/{thing}"),
            AUTHORITY,
            "//example.com/things/foo/bar"
        )),
        r#"parse "things/foo/bar": bad number of segments, want: 2, got: 3"#
    );
}

#[test]
fn parse_full_prefix_is_case_sensitive() {
    assert!(matches!(
        parse_full(&pattern("things/{thing}"), AUTHORITY, "//EXAMPLE.com/things/foo"),
        Err(ParseError::PrefixMismatch { .. })
    ));
}

// Format

#[test]
fn format_single_variable() {
    let name = ParsedName::new().with("thing", "foo");
    assert_eq!(format(&pattern("things/{thing}"), &name), "things/foo");
}

#[test]
fn format_multiple_variables() {
    let name = ParsedName::new().with("project", "foo").with("thing", "bar");
    assert_eq!(
        format(&pattern("projects/{project}/things/{thing}"), &name),
        "projects/foo/things/bar"
    );
}

#[test]
fn format_ignores_insertion_order() {
    let name = ParsedName::new().with("thing", "bar").with("project", "foo");
    assert_eq!(
        format(&pattern("projects/{project}/things/{thing}"), &name),
        "projects/foo/things/bar"
    );
}

#[test]
fn format_missing_variable_renders_empty() {
    assert_eq!(format(&pattern("things/{thing}"), &ParsedName::new()), "things/");
}

#[test]
fn format_full_prepends_authority() {
    let name = ParsedName::new().with("thing", "foo");
    assert_eq!(
        format_full(&pattern("things/{thing}"), AUTHORITY, &name),
        "//example.com/things/foo"
    );
}

#[test]
fn format_keeps_empty_literals() {
    let name = ParsedName::new().with("thing", "foo");
    assert_eq!(format(&pattern("things/{thing}/"), &name), "things/foo/");
}
