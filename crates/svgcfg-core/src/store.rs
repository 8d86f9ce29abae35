//! Config store: source of truth for the current canvas configuration.
//!
//! Holds the background slot (0 or 1 entries) and the ordered interaction
//! list. Constructed once per session and passed by reference wherever a
//! component needs to read or mutate it — there is no ambient global.
//! `merged_config` is the read projection handed to the render surface
//! and the exporter.

use crate::id::{IdPolicy, assign_identifiers};
use crate::model::{CanvasConfig, GroupConfig, Nature};

#[derive(Debug, Default)]
pub struct ConfigStore {
    background: Option<GroupConfig>,
    interactions: Vec<GroupConfig>,
}

impl ConfigStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the background slot. At most one background group exists
    /// at any time — a second upload replaces, never appends.
    pub fn set_background(&mut self, group: GroupConfig) {
        debug_assert_eq!(group.nature, Nature::Background);
        if self.background.is_some() {
            log::debug!("replacing existing background group");
        }
        self.background = Some(group);
    }

    /// Append an interaction group.
    ///
    /// Insertion order is completion order of the upstream file reads,
    /// not upload-request order — an accepted nondeterminism when
    /// several files are ingested concurrently. Colliding file names are
    /// not deduplicated; later lookups are first-match-wins.
    pub fn add_interaction(&mut self, group: GroupConfig) {
        debug_assert_eq!(group.nature, Nature::Interaction);
        self.interactions.push(group);
    }

    /// Remove the first interaction group with a matching file name.
    /// Silent no-op when absent; returns whether anything was removed.
    /// Sequential identifiers of later entries shift on the next read.
    pub fn remove_interaction(&mut self, file_name: &str) -> bool {
        match self.position_of(file_name) {
            Some(index) => {
                self.interactions.remove(index);
                log::debug!("removed interaction group {file_name:?}");
                true
            }
            None => false,
        }
    }

    /// Overwrite the identifier of the first interaction group with a
    /// matching file name. Silent no-op when absent.
    ///
    /// The new identifier is stored on the list itself, so it persists
    /// until the next full assignment pass (any `merged_config` read)
    /// overwrites it under the prevailing policy.
    pub fn rename_interaction(&mut self, file_name: &str, new_identifier: &str) -> bool {
        match self.position_of(file_name) {
            Some(index) => {
                self.interactions[index].identifier = Some(new_identifier.to_string());
                true
            }
            None => false,
        }
    }

    pub fn background(&self) -> Option<&GroupConfig> {
        self.background.as_ref()
    }

    pub fn interactions(&self) -> &[GroupConfig] {
        &self.interactions
    }

    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.interactions.is_empty()
    }

    /// The merged configuration: background first (if any), then the
    /// interaction list with identifiers freshly assigned under `policy`.
    #[must_use]
    pub fn merged_config(&self, policy: IdPolicy) -> CanvasConfig {
        let mut merged = CanvasConfig::new();
        merged.extend(self.background.clone());
        merged.extend(assign_identifiers(&self.interactions, policy));
        merged
    }

    fn position_of(&self, file_name: &str) -> Option<usize> {
        self.interactions
            .iter()
            .position(|g| g.file_name.as_deref() == Some(file_name))
    }
}
