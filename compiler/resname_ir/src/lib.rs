//! Intermediate representation for resource name templates.
//!
//! A resource is described by one or more slash-delimited templates such as
//! `projects/{project}/things/{thing}`. This crate compiles those templates
//! into [`Pattern`]s, splits qualified type names into [`ResourceType`]s, and
//! bundles both into a [`Resource`] together with its authority prefix and the
//! identifiers derived for it.
//!
//! Matching and formatting live in `resname_match`; this crate only holds the
//! compiled, immutable shapes.
//!
//! # Compile errors
//!
//! All compile-time failures are reported as [`CompileError`]. Compilation of a
//! resource stops at the first failure.

mod error;
pub mod naming;
mod pattern;
pub mod quote;
mod resource;
mod resource_type;

pub use error::CompileError;
pub use naming::{ResourceIdents, VariantIdents};
pub use pattern::{Pattern, Segment, Variable};
pub use quote::Quoted;
pub use resource::Resource;
pub use resource_type::ResourceType;
