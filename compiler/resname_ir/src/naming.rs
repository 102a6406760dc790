//! Derived identifier naming.
//!
//! Generated code is consumed by name, so these conventions are fixed:
//!
//! | Item | Identifier |
//! |------|------------|
//! | relative parse | `Parse<Type>Name` |
//! | full parse | `ParseFull<Type>Name` |
//! | parsed value | `Parsed<Type>Name` |
//! | variant `i` value | `Parsed<Type>Name_<i>` |
//! | variant `i` relative parse | `Parse<Type>Name_<i>` |
//! | variant `i` full parse | `Parse<Type>NameFull_<i>` |
//! | variable field | upper-camel(name) + `ID` |
//! | record accessor | `Parse` + upper-camel(field) |
//!
//! Upper-camel splits words at `_`, `-`, space, `.` and letter/digit edges,
//! upper-cases the first letter of each word and keeps every other letter as
//! written, so `projectID` stays `ProjectID` and `userURL` stays `UserURL`.
//! Characters other than ASCII letters and digits are dropped.

use convert_case::{split, Boundary};

use crate::ResourceType;

/// Identifier of the field holding variable `name`: `project` -> `ProjectID`.
pub fn field_ident(name: &str) -> String {
    upper_camel(&format!("{name}_ID"))
}

/// Identifier of the parse accessor bound to record field `field`:
/// `person_name` -> `ParsePersonName`.
pub fn accessor_ident(field: &str) -> String {
    format!("Parse{}", upper_camel(field))
}

pub fn parse_fn(type_name: &str) -> String {
    format!("Parse{type_name}Name")
}

pub fn parse_full_fn(type_name: &str) -> String {
    format!("ParseFull{type_name}Name")
}

pub fn parsed_type(type_name: &str) -> String {
    format!("Parsed{type_name}Name")
}

const WORD_BOUNDARIES: [Boundary; 8] = [
    Boundary::UNDERSCORE,
    Boundary::HYPHEN,
    Boundary::SPACE,
    Boundary::from_delim("."),
    Boundary::LOWER_DIGIT,
    Boundary::UPPER_DIGIT,
    Boundary::DIGIT_LOWER,
    Boundary::DIGIT_UPPER,
];

fn upper_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in split(&s, &WORD_BOUNDARIES) {
        let mut chars = word.chars().filter(char::is_ascii_alphanumeric);
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars);
        }
    }
    out
}

/// Identifiers shared by every pattern of a resource.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceIdents {
    pub parse_fn: String,
    pub parse_full_fn: String,
    pub parsed_type: String,
}

impl ResourceIdents {
    pub fn for_type(ty: &ResourceType) -> Self {
        let type_name = ty.type_name();
        ResourceIdents {
            parse_fn: parse_fn(type_name),
            parse_full_fn: parse_full_fn(type_name),
            parsed_type: parsed_type(type_name),
        }
    }
}

/// Identifiers of one variant of a multi-pattern resource.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VariantIdents {
    pub index: usize,
    pub parse_fn: String,
    pub parse_full_fn: String,
    pub parsed_type: String,
}

impl VariantIdents {
    pub fn for_variant(ty: &ResourceType, index: usize) -> Self {
        let type_name = ty.type_name();
        VariantIdents {
            index,
            parse_fn: format!("Parse{type_name}Name_{index}"),
            parse_full_fn: format!("Parse{type_name}NameFull_{index}"),
            parsed_type: format!("Parsed{type_name}Name_{index}"),
        }
    }
}
