//! Keyed registry of rules assembled from mod data

use crate::error::{Error, Result};
use crate::schema::Unit;
use indexmap::IndexMap;
use rulecraft_core::{Record, RuleId, Value, ValueMap};

/// Rule database the simulation runs against
///
/// Owns every rule; everything else refers to rules by their type name.
/// Rules iterate in the order their type was first defined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RulesetStore {
    units: IndexMap<RuleId, Unit>,
}

impl RulesetStore {
    /// Create an empty ruleset
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a unit rule by type
    pub fn unit(&self, unit_type: &str) -> Option<&Unit> {
        self.units.get(unit_type)
    }

    /// Get a unit rule by type for in-place adjustment
    pub fn unit_mut(&mut self, unit_type: &str) -> Option<&mut Unit> {
        self.units.get_mut(unit_type)
    }

    /// All unit rules, in first-definition order
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    /// Number of unit rules
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Apply one unit rule node, creating the rule on first reference
    ///
    /// Returns the type the node was applied to. On error the store is
    /// unchanged.
    pub fn load_unit(&mut self, node: &Value) -> Result<RuleId> {
        let unit_type = match node.expect_map_or_empty()?.get("type") {
            Some(v) => RuleId::new(v.to_string_value().map_err(|e| e.in_field("type"))?),
            None => {
                return Err(rulecraft_core::Error::MissingField("type".to_string()).into());
            }
        };

        match self.units.get_mut(&unit_type) {
            Some(existing) => {
                existing.load(node)?;
                tracing::trace!(unit = %unit_type, "overlaid unit rule");
            }
            None => {
                let mut unit = Unit::new(unit_type.clone(), "", "");
                unit.load(node)?;
                self.units.insert(unit_type.clone(), unit);
                tracing::trace!(unit = %unit_type, "created unit rule");
            }
        }
        Ok(unit_type)
    }

    /// Apply a parsed rule document
    ///
    /// The document is a map of rule sections; each section is a list of rule
    /// nodes. Sections this ruleset has no rules for are skipped. Returns the
    /// number of rule nodes applied. Stops at the first failing node, leaving
    /// earlier nodes applied; wrap in a staged copy for all-or-nothing.
    pub fn load_document(&mut self, document: &Value) -> Result<usize> {
        let mut applied = 0;
        for (section, rules) in document.expect_map_or_empty()?.iter() {
            match section.as_str() {
                "units" => {
                    let rules = rules
                        .as_list()
                        .ok_or_else(|| Error::InvalidSchema("units must be a list".to_string()))?;
                    for (index, rule) in rules.iter().enumerate() {
                        self.load_unit(rule).map_err(|e| match e {
                            Error::Core(core) => {
                                Error::Core(core.in_field(format!("units[{}]", index)))
                            }
                            other => other,
                        })?;
                        applied += 1;
                    }
                }
                other => tracing::debug!(section = other, "skipping unknown rule section"),
            }
        }
        Ok(applied)
    }

    /// Parse and apply a RON rule document
    pub fn load_str(&mut self, content: &str) -> Result<usize> {
        let document: Value = ron::from_str(content)?;
        self.load_document(&document)
    }

    /// Full serialization of every rule, loadable by `load_document`
    pub fn save(&self) -> Value {
        let units: Vec<Value> = self.units.values().map(Unit::save).collect();
        let mut document = ValueMap::new();
        document.insert("units".to_string(), Value::List(units));
        Value::Map(document)
    }

    /// Serialize every rule as a pretty-printed RON document
    pub fn to_ron_string(&self) -> Result<String> {
        let text = ron::ser::to_string_pretty(&self.save(), ron::ser::PrettyConfig::default())?;
        Ok(text)
    }
}
