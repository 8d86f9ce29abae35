//! Config builder: flattened shapes + a role → one `GroupConfig`.
//!
//! Pure constructors, no failure path of their own. The `*_from_svg`
//! helpers string the whole pipeline together (parse → flatten → build)
//! for one document, propagating only the parser's error.

use crate::flatten::flatten;
use crate::model::{GroupConfig, GroupType, Nature, ShapeDescriptor};
use crate::parser::{ParseError, parse_svg};

/// Wrap flattened shapes as the background layer.
#[must_use]
pub fn background_group(children: Vec<ShapeDescriptor>) -> GroupConfig {
    GroupConfig {
        group_type: GroupType::Group,
        children,
        nature: Nature::Background,
        file_name: None,
        identifier: None,
    }
}

/// Wrap flattened shapes as an interactive region, keyed by the source
/// file name. The key drives all later remove/rename lookups.
#[must_use]
pub fn interaction_group(children: Vec<ShapeDescriptor>, file_name: impl Into<String>) -> GroupConfig {
    GroupConfig {
        group_type: GroupType::Group,
        children,
        nature: Nature::Interaction,
        file_name: Some(file_name.into()),
        identifier: None,
    }
}

/// Parse raw SVG text and build the background group from it.
pub fn background_from_svg(text: &str) -> Result<GroupConfig, ParseError> {
    Ok(background_group(flatten(&parse_svg(text)?)))
}

/// Parse raw SVG text and build an interaction group from it.
pub fn interaction_from_svg(
    text: &str,
    file_name: impl Into<String>,
) -> Result<GroupConfig, ParseError> {
    Ok(interaction_group(flatten(&parse_svg(text)?), file_name))
}
