//! Field-table merge contract shared by every rule entity
//!
//! A rule type lists its fields once, as a table of `(key, loader, saver)`.
//! Partial loads, complete loads and saves all walk that same table, so the
//! set and order of keys a rule saves is exactly the set it knows how to load.
//!
//! ```
//! use rulecraft_core::{Field, Record, Value};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Armor {
//!     name: String,
//!     front: i32,
//! }
//!
//! impl Record for Armor {
//!     const FIELDS: &'static [Field<Self>] = &[
//!         Field {
//!             key: "name",
//!             load: |a, v| {
//!                 a.name = v.to_string_value()?;
//!                 Ok(())
//!             },
//!             save: |a| Value::from(a.name.as_str()),
//!         },
//!         Field {
//!             key: "front",
//!             load: |a, v| {
//!                 a.front = v.to_i32()?;
//!                 Ok(())
//!             },
//!             save: |a| Value::from(a.front),
//!         },
//!     ];
//! }
//!
//! let mut armor = Armor::default();
//! armor.load(&[("front", 12)].into_iter().collect()).unwrap();
//! assert_eq!(armor.front, 12);
//! assert_eq!(armor.name, "");
//! ```

use crate::error::{Error, Result};
use crate::value::{Value, ValueMap};

/// One recognized key of a record and how to move it in and out of a node
pub struct Field<R> {
    /// Key as it appears in data files
    pub key: &'static str,
    /// Overwrite the field from a node
    pub load: fn(&mut R, &Value) -> Result<()>,
    /// Emit the field as a node
    pub save: fn(&R) -> Value,
}

/// A data record driven by a declarative field table
pub trait Record: Clone + 'static {
    /// Recognized keys, in save order
    const FIELDS: &'static [Field<Self>];

    /// Overlay the keys present in `node` onto this record
    ///
    /// Keys absent from `node` keep their current value and unrecognized keys
    /// are skipped. Either every present key is applied or, on error, none are.
    fn load(&mut self, node: &Value) -> Result<()> {
        let map = node.expect_map_or_empty()?;
        let mut staged = self.clone();
        apply_present(&mut staged, &map)?;
        for key in map.keys() {
            if !Self::FIELDS.iter().any(|field| field.key == key) {
                tracing::trace!(key = key.as_str(), "ignoring unrecognized key");
            }
        }
        *self = staged;
        Ok(())
    }

    /// Build a record from a node that must name every field
    fn load_complete(node: &Value) -> Result<Self>
    where
        Self: Default,
    {
        let map = node.expect_map_or_empty()?;
        if let Some(missing) = Self::FIELDS.iter().find(|f| !map.contains_key(f.key)) {
            return Err(Error::MissingField(missing.key.to_string()));
        }
        let mut record = Self::default();
        apply_present(&mut record, &map)?;
        Ok(record)
    }

    /// Emit every field, in table order
    fn save(&self) -> Value {
        let map: ValueMap = Self::FIELDS
            .iter()
            .map(|field| (field.key.to_string(), (field.save)(self)))
            .collect();
        Value::Map(map)
    }
}

fn apply_present<R: Record>(record: &mut R, map: &ValueMap) -> Result<()> {
    for field in R::FIELDS {
        if let Some(value) = map.get(field.key) {
            (field.load)(record, value).map_err(|e| e.in_field(field.key))?;
        }
    }
    Ok(())
}
