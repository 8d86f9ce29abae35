//! Shape parser: SVG markup text → `SvgNode` tree.
//!
//! A thin adapter over `roxmltree`. No SVG-specific validation happens
//! here — any well-formed XML parses successfully and simply flattens to
//! an empty shape list later if it contains no drawable elements.

use crate::model::{SvgNode, TagKind};

/// Markup could not be tokenized as XML.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed SVG markup: {0}")]
    Markup(#[from] roxmltree::Error),
}

/// Parse an SVG document string into a generic node tree.
///
/// The returned root is the document's root element (normally `<svg>`).
/// Text nodes, comments, and processing instructions are discarded —
/// only elements matter downstream.
pub fn parse_svg(text: &str) -> Result<SvgNode, ParseError> {
    let doc = roxmltree::Document::parse(text)?;
    Ok(convert(doc.root_element()))
}

fn convert(node: roxmltree::Node<'_, '_>) -> SvgNode {
    let name = node.tag_name().name();
    let mut out = SvgNode {
        kind: TagKind::classify(name),
        name: name.to_string(),
        attributes: node
            .attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect(),
        children: Vec::new(),
    };
    for child in node.children().filter(|c| c.is_element()) {
        out.children.push(convert(child));
    }
    out
}
