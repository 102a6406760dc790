//! Qualified resource type names (`namespace/TypeName`).

use std::fmt;
use std::str::FromStr;

use crate::CompileError;

/// A qualified type name split at its first `/`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceType {
    namespace: String,
    type_name: String,
}

impl ResourceType {
    pub fn parse(s: &str) -> Result<Self, CompileError> {
        let Some((namespace, type_name)) = s.split_once('/') else {
            return Err(CompileError::InvalidResourceType(s.to_owned()));
        };

        Ok(ResourceType {
            namespace: namespace.to_owned(),
            type_name: type_name.to_owned(),
        })
    }

    /// Portion before the first `/`, e.g. `example.com`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Portion after the first `/`, e.g. `Thing`.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Authority used when a resource does not declare one: `//<namespace>/`.
    pub fn default_authority(&self) -> String {
        format!("//{}/", self.namespace)
    }
}

impl FromStr for ResourceType {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::parse(s)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.type_name)
    }
}
