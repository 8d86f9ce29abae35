//! Integration tests: SVG text → flattened groups → export → re-import.
//!
//! Verifies that configurations produced by the full pipeline survive a
//! JSON round-trip unchanged, and that flattening honors document order.

use pretty_assertions::assert_eq;
use svgcfg_core::{
    ConfigStore, IdPolicy, Nature, TagKind, background_from_svg, export_config, flatten,
    import_config, interaction_from_svg, parse_svg,
};

// ─── Helpers ─────────────────────────────────────────────────────────────

/// Build a store from the standard fixtures: one background, three
/// interaction files.
fn fixture_store() -> ConfigStore {
    let mut store = ConfigStore::new();
    store.set_background(background_from_svg(include_str!("fixtures/background.svg")).unwrap());
    store.add_interaction(
        interaction_from_svg(include_str!("fixtures/button.svg"), "button.svg").unwrap(),
    );
    store.add_interaction(
        interaction_from_svg(include_str!("fixtures/badge.svg"), "badge.svg").unwrap(),
    );
    store.add_interaction(
        interaction_from_svg(include_str!("fixtures/zone.svg"), "zone.svg").unwrap(),
    );
    store
}

// ─── Round-trip ──────────────────────────────────────────────────────────

#[test]
fn roundtrip_sequential_config() {
    let config = fixture_store().merged_config(IdPolicy::Sequential);
    let blob = export_config(&config).unwrap();
    let decoded = import_config(&blob).unwrap();
    assert_eq!(decoded, config);
}

#[test]
fn roundtrip_random_config() {
    let config = fixture_store().merged_config(IdPolicy::Random);
    let blob = export_config(&config).unwrap();
    let decoded = import_config(&blob).unwrap();
    assert_eq!(decoded, config);
}

#[test]
fn roundtrip_background_only_config() {
    let mut store = ConfigStore::new();
    store.set_background(background_from_svg(include_str!("fixtures/background.svg")).unwrap());
    let config = store.merged_config(IdPolicy::Sequential);
    let blob = export_config(&config).unwrap();
    assert_eq!(import_config(&blob).unwrap(), config);
}

// ─── Flattening over fixtures ────────────────────────────────────────────

#[test]
fn background_fixture_flattens_in_document_order() {
    // defs subtree skipped; rect, then circle and path inside the group.
    let shapes = flatten(&parse_svg(include_str!("fixtures/background.svg")).unwrap());
    let kinds: Vec<_> = shapes.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![TagKind::Rect, TagKind::Circle, TagKind::Path]);
}

#[test]
fn zone_fixture_drops_its_degenerate_rect() {
    // The fixture carries a zero-width rect that must not survive.
    let shapes = flatten(&parse_svg(include_str!("fixtures/zone.svg")).unwrap());
    let kinds: Vec<_> = shapes.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![TagKind::Ellipse, TagKind::Line]);
}

#[test]
fn merged_config_shape_counts_match_fixtures() {
    let config = fixture_store().merged_config(IdPolicy::Sequential);
    assert_eq!(config.len(), 4);
    assert_eq!(config[0].nature, Nature::Background);
    assert_eq!(config[0].children.len(), 3);
    // button.svg: rect + path
    assert_eq!(config[1].children.len(), 2);
    // badge.svg: polygon + circle
    assert_eq!(config[2].children.len(), 2);
    // zone.svg: ellipse + line (degenerate rect dropped)
    assert_eq!(config[3].children.len(), 2);
}

// ─── Malformed-file isolation ────────────────────────────────────────────

#[test]
fn malformed_file_contributes_nothing() {
    let mut store = ConfigStore::new();
    let uploads = [
        ("button.svg", include_str!("fixtures/button.svg")),
        ("malformed.svg", include_str!("fixtures/malformed.svg")),
        ("badge.svg", include_str!("fixtures/badge.svg")),
    ];
    for (name, text) in uploads {
        // A parse failure must not add a partial or garbage entry.
        if let Ok(group) = interaction_from_svg(text, name) {
            store.add_interaction(group);
        }
    }
    let config = store.merged_config(IdPolicy::Sequential);
    assert_eq!(config.len(), 2);
    assert_eq!(config[0].file_name.as_deref(), Some("button.svg"));
    assert_eq!(config[1].file_name.as_deref(), Some("badge.svg"));
}
