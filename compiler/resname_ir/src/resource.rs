//! Resource model: patterns, type and authority of one resource.

use crate::naming::{ResourceIdents, VariantIdents};
use crate::{CompileError, Pattern, ResourceType};

/// A compiled resource declaration.
///
/// Holds at least one pattern. With more than one, the patterns keep their
/// declared order; that order decides both which pattern wins a parse and
/// how failures are reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    ty: ResourceType,
    authority: String,
    patterns: Vec<Pattern>,
    idents: ResourceIdents,
}

impl Resource {
    /// Compile a resource from its qualified type name and templates.
    ///
    /// Without an explicit `authority` the default `//<namespace>/` is used.
    /// The first malformed template aborts compilation.
    #[tracing::instrument(level = "debug", skip(templates, authority))]
    pub fn compile<S: AsRef<str>>(
        ty: &str,
        templates: &[S],
        authority: Option<&str>,
    ) -> Result<Self, CompileError> {
        let ty = ResourceType::parse(ty)?;
        let patterns = templates
            .iter()
            .map(|template| Pattern::compile(template.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let authority = authority.map_or_else(|| ty.default_authority(), str::to_owned);

        Resource::new(ty, authority, patterns)
    }

    /// Assemble a resource from already compiled parts.
    pub fn new(
        ty: ResourceType,
        authority: String,
        patterns: Vec<Pattern>,
    ) -> Result<Self, CompileError> {
        if patterns.is_empty() {
            return Err(CompileError::NoPatterns(ty.to_string()));
        }

        tracing::debug!(%ty, %authority, patterns = patterns.len(), "compiled resource");

        let idents = ResourceIdents::for_type(&ty);
        Ok(Resource {
            ty,
            authority,
            patterns,
            idents,
        })
    }

    pub fn ty(&self) -> &ResourceType {
        &self.ty
    }

    /// Prefix qualifying a relative name into a full name.
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Patterns in declared order. Never empty.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn is_multi_pattern(&self) -> bool {
        self.patterns.len() > 1
    }

    pub fn idents(&self) -> &ResourceIdents {
        &self.idents
    }

    /// Per-variant identifiers; empty for single-pattern resources, which
    /// have no variants.
    pub fn variant_idents(&self) -> Vec<VariantIdents> {
        if !self.is_multi_pattern() {
            return Vec::new();
        }
        (0..self.patterns.len())
            .map(|index| VariantIdents::for_variant(&self.ty, index))
            .collect()
    }
}
