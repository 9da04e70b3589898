//! Rule schemas loaded from mod data

pub mod special;
pub mod stats;
pub mod unit;

pub use special::SpecialAbility;
pub use stats::UnitStats;
pub use unit::Unit;
