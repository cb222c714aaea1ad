//! MCP tool schema definitions
//!
//! Tool schemas are organized by resource:
//! - [`crew_schemas`] - crew lifecycle, listing and search
//! - [`department_schemas`] - department lifecycle and discontinuation
//! - [`classification_schemas`] - the four lookup resources
//! - [`dependent_schemas`] - dependents under a crew and relation types
//!
//! Each schema carries the tool name, a description and a JSON Schema for
//! the arguments.

pub mod classification_schemas;
pub mod crew_schemas;
pub mod department_schemas;
pub mod dependent_schemas;

pub use classification_schemas::{LookupAction, LookupKind};
