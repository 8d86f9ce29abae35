//! Core data model for canvas configurations.
//!
//! An uploaded SVG document becomes a tree of `SvgNode` values, which the
//! flattener collapses into an ordered list of `ShapeDescriptor` primitives.
//! Each document contributes one `GroupConfig` tagged with a `Nature`
//! (background layer vs. interactive region); the full, exportable
//! `CanvasConfig` is the background group (if any) followed by the
//! interaction groups in insertion order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

// ─── Tag kinds ───────────────────────────────────────────────────────────

/// The closed set of SVG tag kinds the pipeline cares about.
///
/// Dispatch is always an exhaustive `match` over this enum — never
/// string comparison on raw tag names past the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Path,
    Rect,
    Circle,
    Ellipse,
    Line,
    Polyline,
    Polygon,
    /// Structural container (`svg`, `g`, `symbol`, `a`, `switch`):
    /// traversed for children, never emitted itself.
    Container,
    /// Non-drawable metadata (`defs`, `style`, `title`, `desc`,
    /// `metadata`): skipped entirely, children included.
    Meta,
    /// Any tag the pipeline does not recognize. Traversed like a
    /// container so drawables nested under foreign markup still surface.
    Other,
}

impl TagKind {
    /// Classify a raw tag name into its kind.
    pub fn classify(tag: &str) -> Self {
        match tag {
            "path" => Self::Path,
            "rect" => Self::Rect,
            "circle" => Self::Circle,
            "ellipse" => Self::Ellipse,
            "line" => Self::Line,
            "polyline" => Self::Polyline,
            "polygon" => Self::Polygon,
            "svg" | "g" | "symbol" | "a" | "switch" => Self::Container,
            "defs" | "style" | "title" | "desc" | "metadata" => Self::Meta,
            _ => Self::Other,
        }
    }

    /// Whether this kind is a drawable primitive (emitted by the flattener).
    pub fn is_drawable(self) -> bool {
        matches!(
            self,
            Self::Path
                | Self::Rect
                | Self::Circle
                | Self::Ellipse
                | Self::Line
                | Self::Polyline
                | Self::Polygon
        )
    }
}

// ─── Parsed SVG tree ─────────────────────────────────────────────────────

/// Attribute list for a parsed node. Almost always small.
pub type AttrList = SmallVec<[(String, String); 4]>;

/// A node in the parsed SVG tree: tag, attributes, children.
///
/// Purely structural — no semantic interpretation happens at this level.
/// The tree is acyclic by construction; the root owns all descendants.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgNode {
    /// Classified tag kind.
    pub kind: TagKind,
    /// The raw tag name as it appeared in the document.
    pub name: String,
    /// Attributes in document order.
    pub attributes: AttrList,
    /// Child elements in document order.
    pub children: Vec<SvgNode>,
}

impl SvgNode {
    pub fn new(name: &str) -> Self {
        Self {
            kind: TagKind::classify(name),
            name: name.to_string(),
            attributes: AttrList::new(),
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

// ─── Shape descriptors ───────────────────────────────────────────────────

/// A single drawable primitive in flattened form.
///
/// `attributes` holds the geometry payload needed to redraw the shape
/// (`d` for paths, `cx`/`cy`/`r` for circles, …). Identity is positional:
/// two descriptors with equal content at different list indices are
/// distinct shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    #[serde(rename = "type")]
    pub kind: TagKind,
    pub attributes: BTreeMap<String, String>,
}

// ─── Group configs ───────────────────────────────────────────────────────

/// Role of a group on the canvas.
///
/// Immutable after creation — a background group never becomes an
/// interaction group or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nature {
    Background,
    Interaction,
}

/// Wire-format marker for the `type` field. Always `"group"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    #[default]
    Group,
}

/// One uploaded document's contribution to the canvas configuration.
///
/// Invariants (upheld by the builder in `builder.rs`):
/// - `file_name` is present iff `nature == Interaction`; it is the lookup
///   key for remove/rename in the store.
/// - `identifier` is a derived projection of (position, id policy) — set
///   by the identity assigner on every `merged_config` read, or by a
///   manual rename that lasts until the next assignment pass.
///
/// The canonical wire name for the label field is `identifier`; the
/// legacy `nanoid` spelling is accepted when decoding but never emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    #[serde(rename = "type")]
    pub group_type: GroupType,
    pub children: Vec<ShapeDescriptor>,
    pub nature: Nature,
    #[serde(rename = "fileName", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, alias = "nanoid", skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// The merged, exportable configuration: at most one background entry,
/// first, followed by all interaction entries in insertion order.
pub type CanvasConfig = Vec<GroupConfig>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classify_covers_drawables_and_containers() {
        assert_eq!(TagKind::classify("path"), TagKind::Path);
        assert_eq!(TagKind::classify("g"), TagKind::Container);
        assert_eq!(TagKind::classify("defs"), TagKind::Meta);
        assert_eq!(TagKind::classify("foreignObject"), TagKind::Other);
        assert!(TagKind::classify("polygon").is_drawable());
        assert!(!TagKind::classify("svg").is_drawable());
    }

    #[test]
    fn attribute_lookup() {
        let mut node = SvgNode::new("circle");
        node.attributes.push(("cx".into(), "10".into()));
        node.attributes.push(("r".into(), "4".into()));
        assert_eq!(node.attribute("r"), Some("4"));
        assert_eq!(node.attribute("cy"), None);
    }

    #[test]
    fn group_config_wire_field_names() {
        let group = GroupConfig {
            group_type: GroupType::Group,
            children: vec![ShapeDescriptor {
                kind: TagKind::Path,
                attributes: BTreeMap::from([("d".to_string(), "M0 0L1 1".to_string())]),
            }],
            nature: Nature::Interaction,
            file_name: Some("area.svg".into()),
            identifier: Some("1".into()),
        };
        let json = serde_json::to_string(&group).unwrap();
        assert!(json.contains(r#""type":"group""#));
        assert!(json.contains(r#""nature":"interaction""#));
        assert!(json.contains(r#""fileName":"area.svg""#));
        assert!(json.contains(r#""identifier":"1""#));
        assert!(!json.contains("nanoid"));
    }

    #[test]
    fn legacy_nanoid_field_accepted_on_decode() {
        let json = r#"{
            "type": "group",
            "children": [],
            "nature": "interaction",
            "fileName": "legacy.svg",
            "nanoid": "abc123"
        }"#;
        let group: GroupConfig = serde_json::from_str(json).unwrap();
        assert_eq!(group.identifier.as_deref(), Some("abc123"));
    }

    #[test]
    fn background_omits_absent_optionals() {
        let group = GroupConfig {
            group_type: GroupType::Group,
            children: Vec::new(),
            nature: Nature::Background,
            file_name: None,
            identifier: None,
        };
        let json = serde_json::to_string(&group).unwrap();
        assert!(!json.contains("fileName"));
        assert!(!json.contains("identifier"));
    }
}
