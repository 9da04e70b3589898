//! Unit rule definition

use super::{SpecialAbility, UnitStats};
use rulecraft_core::{Field, Record, RuleId, Value};

/// Rule for one type of unit (soldier, alien rank, terror unit, ...)
///
/// Created with defaults the first time a unit type is named during ruleset
/// assembly, then overlaid in place by every later mod that names the same
/// type. Partial loads are field-granular except for `stats`, which is always
/// replaced as a whole block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    unit_type: RuleId,
    race: String,
    rank: String,
    stats: UnitStats,
    armor: String,
    stand_height: i32,
    kneel_height: i32,
    loftemps: i32,
    value: i32,
    death_sound: i32,
    intelligence: i32,
    aggression: i32,
    special_ability: SpecialAbility,
}

impl Unit {
    /// Create a unit rule with zeroed stats and no armor or special ability
    pub fn new(
        unit_type: impl Into<RuleId>,
        race: impl Into<String>,
        rank: impl Into<String>,
    ) -> Self {
        Self {
            unit_type: unit_type.into(),
            race: race.into(),
            rank: rank.into(),
            stats: UnitStats::default(),
            armor: String::new(),
            stand_height: 0,
            kneel_height: 0,
            loftemps: 0,
            value: 0,
            death_sound: 0,
            intelligence: 0,
            aggression: 0,
            special_ability: SpecialAbility::None,
        }
    }

    /// Unique name of this unit type; the lookup key within a ruleset
    pub fn unit_type(&self) -> &RuleId {
        &self.unit_type
    }

    /// Get the race this unit belongs to
    pub fn race(&self) -> &str {
        &self.race
    }

    /// Get the rank of this unit within its race
    pub fn rank(&self) -> &str {
        &self.rank
    }

    /// Get the base stats block
    pub fn stats(&self) -> &UnitStats {
        &self.stats
    }

    /// Mutable access to the stats block for in-place adjustment
    ///
    /// The exclusive borrow rules out concurrent writers; share a `Unit`
    /// across threads only behind your own synchronization.
    pub fn stats_mut(&mut self) -> &mut UnitStats {
        &mut self.stats
    }

    /// Replace the whole stats block
    pub fn set_stats(&mut self, stats: UnitStats) {
        self.stats = stats;
    }

    /// Armor rule this unit wears, unresolved
    pub fn armor(&self) -> &str {
        &self.armor
    }

    /// Set the armor rule this unit wears
    pub fn set_armor(&mut self, armor: impl Into<String>) {
        self.armor = armor.into();
    }

    /// Height in voxels when standing
    pub fn stand_height(&self) -> i32 {
        self.stand_height
    }

    /// Height in voxels when kneeling
    pub fn kneel_height(&self) -> i32 {
        self.kneel_height
    }

    /// Line-of-fire template id
    pub fn loftemps(&self) -> i32 {
        self.loftemps
    }

    /// Set all three voxel parameters together
    pub fn set_voxel_parameters(&mut self, stand_height: i32, kneel_height: i32, loftemps: i32) {
        self.stand_height = stand_height;
        self.kneel_height = kneel_height;
        self.loftemps = loftemps;
    }

    /// Score awarded for this unit
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the score awarded for this unit
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    /// Sound resource index played on death
    pub fn death_sound(&self) -> i32 {
        self.death_sound
    }

    /// Set the sound resource index played on death
    pub fn set_death_sound(&mut self, id: i32) {
        self.death_sound = id;
    }

    /// Number of turns the AI remembers enemy positions
    pub fn intelligence(&self) -> i32 {
        self.intelligence
    }

    /// Chance of retaliating and taking cover
    pub fn aggression(&self) -> i32 {
        self.aggression
    }

    /// Set both AI parameters together
    pub fn set_ai_parameters(&mut self, intelligence: i32, aggression: i32) {
        self.intelligence = intelligence;
        self.aggression = aggression;
    }

    /// Get the special ability triggered by this unit
    pub fn special_ability(&self) -> SpecialAbility {
        self.special_ability
    }

    /// Set the special ability triggered by this unit
    pub fn set_special_ability(&mut self, special_ability: SpecialAbility) {
        self.special_ability = special_ability;
    }
}

macro_rules! int_field {
    ($key:literal => $field:ident) => {
        Field {
            key: $key,
            load: |u: &mut Unit, v: &Value| {
                u.$field = v.to_i32()?;
                Ok(())
            },
            save: |u: &Unit| Value::from(u.$field),
        }
    };
}

macro_rules! string_field {
    ($key:literal => $field:ident) => {
        Field {
            key: $key,
            load: |u: &mut Unit, v: &Value| {
                u.$field = v.to_string_value()?;
                Ok(())
            },
            save: |u: &Unit| Value::from(u.$field.as_str()),
        }
    };
}

impl Record for Unit {
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            key: "type",
            load: |u, v| {
                u.unit_type = RuleId::new(v.to_string_value()?);
                Ok(())
            },
            save: |u| Value::from(u.unit_type.as_str()),
        },
        string_field!("race" => race),
        string_field!("rank" => rank),
        Field {
            key: "stats",
            load: |u, v| {
                u.stats = UnitStats::load_complete(v)?;
                Ok(())
            },
            save: |u| u.stats.save(),
        },
        string_field!("armor" => armor),
        int_field!("standHeight" => stand_height),
        int_field!("kneelHeight" => kneel_height),
        int_field!("loftemps" => loftemps),
        int_field!("value" => value),
        int_field!("deathSound" => death_sound),
        int_field!("intelligence" => intelligence),
        int_field!("aggression" => aggression),
        Field {
            key: "specab",
            load: |u, v| {
                let raw = v
                    .as_int()
                    .ok_or_else(|| rulecraft_core::Error::type_error("int", v.type_name()))?;
                u.special_ability = SpecialAbility::try_from(raw)?;
                Ok(())
            },
            save: |u| Value::from(u.special_ability.discriminant()),
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulecraft_core::Error;

    fn node(src: &str) -> Value {
        ron::from_str(src).unwrap()
    }

    fn full_stats() -> &'static str {
        r#"(tu: 50, stamina: 40, health: 30, bravery: 20, reactions: 45, firing: 55,
            throwing: 50, strength: 25, psiStrength: 35, psiSkill: 0, melee: 60)"#
    }

    fn sectoid() -> Unit {
        let mut unit = Unit::new("STR_SECTOID_SOLDIER", "STR_SECTOID", "STR_LIVE_SOLDIER");
        unit.set_stats(UnitStats {
            time_units: 54,
            stamina: 90,
            health: 30,
            bravery: 80,
            reactions: 63,
            firing: 52,
            throwing: 58,
            strength: 30,
            psi_strength: 40,
            psi_skill: 0,
            melee: 76,
        });
        unit.set_armor("SECTOID_ARMOR0");
        unit.set_voxel_parameters(16, 12, 3);
        unit.set_value(10);
        unit.set_death_sound(10);
        unit.set_ai_parameters(2, 1);
        unit.set_special_ability(SpecialAbility::ExplodeOnDeath);
        unit
    }

    #[test]
    fn test_new_uses_defaults() {
        let unit = Unit::new("STR_SOLDIER", "STR_HUMAN", "STR_ROOKIE");
        assert_eq!(unit.unit_type().as_str(), "STR_SOLDIER");
        assert_eq!(unit.race(), "STR_HUMAN");
        assert_eq!(unit.rank(), "STR_ROOKIE");
        assert_eq!(*unit.stats(), UnitStats::default());
        assert_eq!(unit.armor(), "");
        assert_eq!(unit.stand_height(), 0);
        assert_eq!(unit.intelligence(), 0);
        assert_eq!(unit.special_ability(), SpecialAbility::None);
    }

    #[test]
    fn test_overlay_stats_then_armor() {
        let mut unit = Unit::new("SOLDIER_X", "HUMAN", "ROOKIE");
        unit.load(&node(&format!("(stats: {})", full_stats()))).unwrap();
        unit.load(&node(r#"(armor: "STR_ARMOR1")"#)).unwrap();

        assert_eq!(unit.armor(), "STR_ARMOR1");
        assert_eq!(unit.stats().health, 30);
        assert_eq!(unit.stats().time_units, 50);
        assert_eq!(unit.race(), "HUMAN");
        assert_eq!(unit.rank(), "ROOKIE");
    }

    #[test]
    fn test_partial_load_changes_only_named_fields() {
        let before = sectoid();
        let mut unit = before.clone();
        unit.load(&node("(kneelHeight: 9, aggression: 4)")).unwrap();

        assert_eq!(unit.kneel_height(), 9);
        assert_eq!(unit.aggression(), 4);
        assert_eq!(unit.stand_height(), before.stand_height());
        assert_eq!(unit.loftemps(), before.loftemps());
        assert_eq!(unit.intelligence(), before.intelligence());

        unit.load(&node("(kneelHeight: 12, aggression: 1)")).unwrap();
        assert_eq!(unit, before);
    }

    #[test]
    fn test_empty_overlay_changes_nothing() {
        let before = sectoid();
        let mut unit = before.clone();
        unit.load(&node("()")).unwrap();
        assert_eq!(unit, before);
    }

    #[test]
    fn test_stats_block_replaced_whole() {
        let mut unit = sectoid();
        let err = unit.load(&node("(stats: (health: 99))")).unwrap_err();
        assert_eq!(err.field_path(), "stats");
        assert_eq!(unit.stats().health, 30);
        assert_eq!(unit.stats().melee, 76);
    }

    #[test]
    fn test_save_then_load_reproduces_unit() {
        let original = sectoid();
        let mut fresh = Unit::new("", "", "");
        fresh.load(&original.save()).unwrap();
        assert_eq!(fresh, original);
    }

    #[test]
    fn test_save_key_order() {
        let saved = sectoid().save();
        let keys: Vec<_> = saved.expect_map().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                "type",
                "race",
                "rank",
                "stats",
                "armor",
                "standHeight",
                "kneelHeight",
                "loftemps",
                "value",
                "deathSound",
                "intelligence",
                "aggression",
                "specab",
            ]
        );
        assert_eq!(saved.get("specab"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_invalid_specab_rejected() {
        let mut unit = sectoid();
        let err = unit.load(&node("(specab: 7, value: 50)")).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDiscriminant {
                value: 7,
                target: "SpecialAbility",
            }
            .in_field("specab")
        );
        assert_eq!(unit.value(), 10);
        assert_eq!(unit.special_ability(), SpecialAbility::ExplodeOnDeath);
    }

    #[test]
    fn test_type_reassigned_only_when_named() {
        let mut unit = sectoid();
        unit.load(&node(r#"(race: "STR_SECTOID_LEADER")"#)).unwrap();
        assert_eq!(unit.unit_type().as_str(), "STR_SECTOID_SOLDIER");
        unit.load(&node(r#"(type: "STR_SECTOID_LEADER")"#)).unwrap();
        assert_eq!(unit.unit_type().as_str(), "STR_SECTOID_LEADER");
    }

    #[test]
    fn test_grouped_setters_apply_together() {
        let mut unit = sectoid();
        unit.set_voxel_parameters(10, 5, 3);
        assert_eq!(
            (unit.stand_height(), unit.kneel_height(), unit.loftemps()),
            (10, 5, 3)
        );
        unit.set_ai_parameters(7, 8);
        assert_eq!((unit.intelligence(), unit.aggression()), (7, 8));
    }

    #[test]
    fn test_stats_mut_adjusts_in_place() {
        let mut unit = sectoid();
        unit.stats_mut().health -= 5;
        assert_eq!(unit.stats().health, 25);
    }
}
