//! Identity assigner for interaction groups.
//!
//! Identifiers are a derived projection of (position in list, policy),
//! recomputed on every `merged_config` read — never durable state. The
//! assigner builds new `GroupConfig` values rather than mutating the
//! input, so earlier readers of the same list never observe a
//! half-assigned state.

use crate::model::GroupConfig;
use uuid::Uuid;

/// How interaction-group identifiers are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// 1-based position in the list, as a decimal string. Positions
    /// shift when entries are removed — these are sequence labels, not
    /// persistent keys.
    #[default]
    Sequential,
    /// A fresh collision-resistant random token per entry per pass.
    /// Discards any previous identifier, including manual edits.
    Random,
}

/// Compute every group's identifier under `policy`, returning new values.
///
/// Both policies overwrite whatever identifier each entry carried before,
/// so a manual rename survives only until the next assignment pass.
#[must_use]
pub fn assign_identifiers(groups: &[GroupConfig], policy: IdPolicy) -> Vec<GroupConfig> {
    groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let mut group = group.clone();
            group.identifier = Some(match policy {
                IdPolicy::Sequential => (index + 1).to_string(),
                IdPolicy::Random => random_token(),
            });
            group
        })
        .collect()
}

/// A collision-resistant random token (uuid-v4, 32 hex chars).
#[must_use]
pub fn random_token() -> String {
    Uuid::new_v4().simple().to_string()
}
