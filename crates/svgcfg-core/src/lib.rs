//! svgcfg-core — SVG-to-canvas-config pipeline.
//!
//! Raw SVG text → parsed node tree → flat shape list → role-tagged
//! group config → store → merged, identifier-annotated, exportable
//! configuration.

pub mod builder;
pub mod export;
pub mod flatten;
pub mod id;
pub mod model;
pub mod parser;
pub mod store;

pub use builder::{background_from_svg, background_group, interaction_from_svg, interaction_group};
pub use export::{DEFAULT_EXPORT_NAME, ExportError, export_config, import_config};
pub use flatten::{flatten, flatten_all};
pub use id::{IdPolicy, assign_identifiers, random_token};
pub use model::*;
pub use parser::{ParseError, parse_svg};
pub use store::ConfigStore;
