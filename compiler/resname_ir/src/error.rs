use thiserror::Error;

use crate::Quoted;

/// Failure while compiling a template or a resource declaration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A template part opens with `{` but does not close with `}`.
    #[error("invalid segment: {}", Quoted(.0))]
    InvalidSegment(String),

    /// The same variable name appears twice in one template.
    #[error("duplicate variable {} in pattern {}", Quoted(.name), Quoted(.template))]
    DuplicateVariable { template: String, name: String },

    /// A qualified type name has no `/` separating namespace and type.
    #[error("invalid resource type: {}", Quoted(.0))]
    InvalidResourceType(String),

    /// A resource was declared without any template.
    #[error("resource {} declares no patterns", Quoted(.0))]
    NoPatterns(String),
}
