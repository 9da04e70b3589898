//! Ruleset assembly: applying an ordered sequence of mods to one store

use crate::config::{AssemblyConfig, ErrorPolicy};
use crate::error::{Error, Result};
use crate::loader::ModSource;
use crate::manifest::ModInfo;
use crate::order::LoadOrder;
use crate::store::RulesetStore;
use rulecraft_core::{ModId, Value};

/// Outcome of an assembly run
#[derive(Debug, Default)]
pub struct AssemblyReport {
    /// Mods applied, in application order
    pub loaded: Vec<ModId>,
    /// Mods left out by load-order resolution
    pub skipped: Vec<ModId>,
    /// Mods rolled back after an error
    pub failed: Vec<(ModId, Error)>,
}

impl AssemblyReport {
    /// Whether every selected mod was applied
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Finished ruleset and the report describing how it was built
#[derive(Debug)]
pub struct Assembly {
    pub store: RulesetStore,
    pub report: AssemblyReport,
}

/// Builds a ruleset from mods in an explicit order
pub struct Assembler {
    config: AssemblyConfig,
}

impl Assembler {
    pub fn new(config: AssemblyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Assemble a ruleset from `mods`
    ///
    /// `mods` is the caller's ordering; the active master is moved to the
    /// front and incompatible mods are left out (see [`LoadOrder::resolve`]).
    /// Each mod is applied to a staged copy of the store and committed only
    /// if all of its documents load.
    pub fn assemble(&self, mods: Vec<ModSource>) -> Result<Assembly> {
        let infos: Vec<ModInfo> = mods.iter().map(|m| m.info.clone()).collect();
        let order = LoadOrder::resolve(&infos, self.config.active_master())?;

        let mut slots: Vec<Option<ModSource>> = mods.into_iter().map(Some).collect();
        let mut store = RulesetStore::new();
        let mut report = AssemblyReport {
            skipped: order.skipped.clone(),
            ..AssemblyReport::default()
        };

        for index in order.sequence {
            let Some(source) = slots[index].take() else {
                continue;
            };
            let id = source.info.id().clone();
            let mut staged = store.clone();

            match apply_mod(&mut staged, &source) {
                Ok(applied) => {
                    tracing::info!(mod_id = %id, rules = applied, "applied mod");
                    store = staged;
                    report.loaded.push(id);
                }
                Err(err) => match self.config.on_error() {
                    ErrorPolicy::SkipMod => {
                        tracing::warn!(mod_id = %id, error = %err, "mod failed to load, rolled back");
                        report.failed.push((id, err));
                    }
                    ErrorPolicy::Abort => return Err(err.in_mod(id.as_str())),
                },
            }
        }

        tracing::info!(
            loaded = report.loaded.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            units = store.len(),
            "ruleset assembled"
        );
        Ok(Assembly { store, report })
    }
}

fn apply_mod(store: &mut RulesetStore, source: &ModSource) -> Result<usize> {
    let mut applied = 0;
    for document in &source.documents {
        let node: Value = ron::from_str(&document.content)
            .map_err(|e| Error::from(e).in_document(document.name.as_str()))?;
        applied += store
            .load_document(&node)
            .map_err(|e| e.in_document(document.name.as_str()))?;
        tracing::debug!(
            mod_id = %source.info.id(),
            document = document.name.as_str(),
            "applied rule document"
        );
    }
    Ok(applied)
}
