//! Base capability profile of a unit

use rulecraft_core::{Field, Record, Value};
use serde::{Deserialize, Serialize};

/// Eleven base stats of a unit
///
/// Always loaded as a whole block: a mod that names `stats` for a unit must
/// supply every stat, and replaces the previous block entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UnitStats {
    pub time_units: i32,
    pub stamina: i32,
    pub health: i32,
    pub bravery: i32,
    pub reactions: i32,
    pub firing: i32,
    pub throwing: i32,
    pub strength: i32,
    pub psi_strength: i32,
    pub psi_skill: i32,
    pub melee: i32,
}

macro_rules! stat_fields {
    ($($key:literal => $field:ident),* $(,)?) => {
        &[$(
            Field {
                key: $key,
                load: |s: &mut UnitStats, v: &Value| {
                    s.$field = v.to_i32()?;
                    Ok(())
                },
                save: |s: &UnitStats| Value::from(s.$field),
            },
        )*]
    };
}

impl Record for UnitStats {
    const FIELDS: &'static [Field<Self>] = stat_fields![
        "tu" => time_units,
        "stamina" => stamina,
        "health" => health,
        "bravery" => bravery,
        "reactions" => reactions,
        "firing" => firing,
        "throwing" => throwing,
        "strength" => strength,
        "psiStrength" => psi_strength,
        "psiSkill" => psi_skill,
        "melee" => melee,
    ];
}
