//! Load-order resolution from mod master declarations

use crate::error::{Error, Result};
use crate::manifest::ModInfo;
use rulecraft_core::ModId;
use std::collections::HashSet;

/// Mods selected to load under one master, in application order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOrder {
    /// Indices into the resolved mod slice; the active master comes first
    pub sequence: Vec<usize>,
    /// Mods excluded because they cannot load under the active master
    pub skipped: Vec<ModId>,
}

impl LoadOrder {
    /// Compute the order in which `mods` are applied under `active_master`
    ///
    /// The active master is moved to the front. Every other mod keeps its
    /// position relative to the rest. Other masters and mods bound to a
    /// different master are left out.
    pub fn resolve(mods: &[ModInfo], active_master: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        for info in mods {
            if !seen.insert(info.id().as_str()) {
                return Err(Error::DuplicateMod(info.id().to_string()));
            }
        }

        let master_index = mods
            .iter()
            .position(|info| info.id().as_str() == active_master)
            .ok_or_else(|| Error::MasterNotFound(active_master.to_string()))?;
        if !mods[master_index].is_master() {
            return Err(Error::NotAMaster(active_master.to_string()));
        }

        let mut sequence = vec![master_index];
        let mut skipped = Vec::new();
        for (index, info) in mods.iter().enumerate() {
            if index == master_index {
                continue;
            }
            if info.is_master() || !info.can_activate(active_master) {
                tracing::warn!(
                    mod_id = %info.id(),
                    master = info.master(),
                    active_master,
                    "mod cannot load under the active master, skipping"
                );
                skipped.push(info.id().clone());
            } else {
                sequence.push(index);
            }
        }

        Ok(Self { sequence, skipped })
    }

    /// Number of mods that will be applied
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
