//! Flattener: `SvgNode` tree → ordered list of `ShapeDescriptor`.
//!
//! Depth-first, document order. Containers and unrecognized tags are
//! traversed but never emitted; drawable primitives emit exactly one
//! descriptor each; primitives without usable geometry are dropped
//! silently. The output is fully flat — downstream consumers work with a
//! uniform array, and its order is significant (z-order and the
//! sequential-identifier fallback both derive from it).

use crate::model::{ShapeDescriptor, SvgNode, TagKind};
use std::collections::BTreeMap;

/// Flatten a single parsed tree.
#[must_use]
pub fn flatten(root: &SvgNode) -> Vec<ShapeDescriptor> {
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Flatten several independently parsed trees into one list,
/// preserving slice order then document order within each tree.
#[must_use]
pub fn flatten_all(roots: &[SvgNode]) -> Vec<ShapeDescriptor> {
    let mut out = Vec::new();
    for root in roots {
        walk(root, &mut out);
    }
    out
}

fn walk(node: &SvgNode, out: &mut Vec<ShapeDescriptor>) {
    match node.kind {
        // Nothing under defs/style/title is drawable content.
        TagKind::Meta => {}
        TagKind::Container | TagKind::Other => {
            for child in &node.children {
                walk(child, out);
            }
        }
        TagKind::Path
        | TagKind::Rect
        | TagKind::Circle
        | TagKind::Ellipse
        | TagKind::Line
        | TagKind::Polyline
        | TagKind::Polygon => match shape_from(node) {
            Some(shape) => out.push(shape),
            None => log::debug!("dropping <{}> with no usable geometry", node.name),
        },
    }
}

/// The attributes that constitute each primitive's geometry payload.
fn geometry_attrs(kind: TagKind) -> &'static [&'static str] {
    match kind {
        TagKind::Path => &["d"],
        TagKind::Rect => &["x", "y", "width", "height", "rx", "ry"],
        TagKind::Circle => &["cx", "cy", "r"],
        TagKind::Ellipse => &["cx", "cy", "rx", "ry"],
        TagKind::Line => &["x1", "y1", "x2", "y2"],
        TagKind::Polyline | TagKind::Polygon => &["points"],
        TagKind::Container | TagKind::Meta | TagKind::Other => &[],
    }
}

/// Build a descriptor from a drawable node, or `None` when the node
/// carries no usable geometry.
fn shape_from(node: &SvgNode) -> Option<ShapeDescriptor> {
    let mut attributes = BTreeMap::new();
    for &key in geometry_attrs(node.kind) {
        if let Some(value) = node.attribute(key) {
            attributes.insert(key.to_string(), value.to_string());
        }
    }
    has_usable_geometry(node.kind, &attributes).then(|| ShapeDescriptor {
        kind: node.kind,
        attributes,
    })
}

fn has_usable_geometry(kind: TagKind, attrs: &BTreeMap<String, String>) -> bool {
    let num = |key: &str| -> Option<f64> { attrs.get(key)?.trim().parse().ok() };
    let positive = |key: &str| num(key).is_some_and(|v| v > 0.0);

    match kind {
        TagKind::Path => attrs.get("d").is_some_and(|d| !d.trim().is_empty()),
        TagKind::Rect => positive("width") && positive("height"),
        TagKind::Circle => positive("r"),
        TagKind::Ellipse => positive("rx") && positive("ry"),
        TagKind::Line => ["x1", "y1", "x2", "y2"].iter().all(|k| num(k).is_some()),
        TagKind::Polyline | TagKind::Polygon => attrs.get("points").is_some_and(|p| {
            // At least two coordinate pairs.
            p.split([' ', ',', '\t', '\n'])
                .filter(|t| !t.is_empty())
                .count()
                >= 4
        }),
        TagKind::Container | TagKind::Meta | TagKind::Other => false,
    }
}
