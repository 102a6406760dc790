//! Parsed name values.

use indexmap::IndexMap;

/// Fields captured from a name, keyed by declared variable name.
///
/// Iteration follows declaration order. Equality compares contents only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedName {
    fields: IndexMap<String, String>,
}

impl ParsedName {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ParsedName {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParsedName {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ParsedName {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Result of parsing a name against a resource.
///
/// The variants are closed: a single-pattern resource always yields
/// `Single`, a multi-pattern resource always yields `Variant`. The pattern
/// index is part of the value, so equal fields from different patterns are
/// different names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceName {
    Single(ParsedName),
    Variant { pattern: usize, name: ParsedName },
}

impl ResourceName {
    /// Pattern that produced this name; 0 for single-pattern names.
    pub fn pattern(&self) -> usize {
        match self {
            ResourceName::Single(_) => 0,
            ResourceName::Variant { pattern, .. } => *pattern,
        }
    }

    pub fn parsed(&self) -> &ParsedName {
        match self {
            ResourceName::Single(name) | ResourceName::Variant { name, .. } => name,
        }
    }

    pub fn into_parsed(self) -> ParsedName {
        match self {
            ResourceName::Single(name) | ResourceName::Variant { name, .. } => name,
        }
    }
}
