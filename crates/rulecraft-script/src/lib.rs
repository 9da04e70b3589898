//! Rulecraft Script - Mod metadata, rule schemas and ruleset assembly
//!
//! Turns a set of independently authored mods into one rule database:
//! - Mod manifests with master/dependency declarations (`ModInfo`)
//! - Unit rule schema with field-level overrides (`Unit`, `UnitStats`)
//! - Keyed rule registry (`RulesetStore`)
//! - Load-order resolution and assembly (`LoadOrder`, `Assembler`)
//!
//! Data files are RON. A mod directory holds a manifest and rule documents:
//!
//! ```ron
//! // metadata.ron
//! (id: "bigger-soldiers", name: "Bigger Soldiers", master: "xcom1")
//!
//! // units.ron
//! (units: [(type: "STR_SOLDIER", standHeight: 24)])
//! ```

mod assembly;
mod config;
mod error;
mod loader;
mod manifest;
mod order;
mod schema;
mod store;

pub use assembly::{Assembler, Assembly, AssemblyReport};
pub use config::{AssemblyConfig, ErrorPolicy};
pub use error::{Error, Result};
pub use loader::{ModSource, RuleDocument};
pub use manifest::ModInfo;
pub use order::LoadOrder;
pub use schema::{SpecialAbility, Unit, UnitStats};
pub use store::RulesetStore;

pub use rulecraft_core::{ModId, Record, RuleId, Value};
