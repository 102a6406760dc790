//! Matching and formatting of resource names.
//!
//! Two layers:
//!
//! - [`matcher`]: one [`Pattern`](resname_ir::Pattern). Relative and full
//!   (authority-prefixed) parse, and the inverse formatting.
//! - [`resolver`]: one [`Resource`](resname_ir::Resource). Single-pattern
//!   resources delegate straight to the matcher; multi-pattern resources try
//!   every pattern in declared order and either return the first match,
//!   tagged with its pattern index, or aggregate every failure.
//!
//! All operations are pure functions over immutable inputs.

mod error;
pub mod matcher;
mod parsed;
pub mod resolver;

pub use error::{FormatError, ParseError, PatternError, PatternErrors};
pub use parsed::{ParsedName, ResourceName};
