//! Special ability tag of a unit

use rulecraft_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Special ability triggered by a unit, stored in data as an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpecialAbility {
    #[default]
    None = 0,
    ExplodeOnDeath = 1,
    BurnFloor = 2,
}

impl SpecialAbility {
    /// All abilities, in discriminant order
    pub const ALL: [SpecialAbility; 3] = [
        SpecialAbility::None,
        SpecialAbility::ExplodeOnDeath,
        SpecialAbility::BurnFloor,
    ];

    /// Integer discriminant as written to data files
    pub fn discriminant(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i64> for SpecialAbility {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SpecialAbility::None),
            1 => Ok(SpecialAbility::ExplodeOnDeath),
            2 => Ok(SpecialAbility::BurnFloor),
            _ => Err(Error::InvalidDiscriminant {
                value,
                target: "SpecialAbility",
            }),
        }
    }
}

impl fmt::Display for SpecialAbility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpecialAbility::None => "none",
            SpecialAbility::ExplodeOnDeath => "explode_on_death",
            SpecialAbility::BurnFloor => "burn_floor",
        };
        f.write_str(name)
    }
}
