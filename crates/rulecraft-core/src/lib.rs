//! Rulecraft Core - Node tree and merge contract for mod-aware rulesets
//!
//! This crate provides the pieces every rule entity shares:
//! - Dynamic node types (`Value`, `ValueMap`) handed over by the data parser
//! - Rule and mod identifiers
//! - The field-table merge contract (`Record`, `Field`)
//!
//! ## Merge Semantics
//!
//! Mods are applied one after another. Each mod's node for a rule only
//! overwrites the fields it names, so later mods win per field rather than
//! replacing whole rules. The same field table drives loading and saving,
//! which keeps the saved form loadable field-for-field.

mod error;
mod identity;
pub mod record;
mod value;

pub use error::{Error, Result};
pub use identity::{ModId, RuleId};
pub use record::{Field, Record};
pub use value::{Value, ValueMap};
