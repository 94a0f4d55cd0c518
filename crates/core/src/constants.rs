//! Application-wide constants.

/// Display name used before the user picks one.
pub const DEFAULT_DISPLAY_NAME: &str = "Anonymous User";

/// Lifetime point total that unlocks the `eco-warrior` badge.
pub const ECO_WARRIOR_POINT_THRESHOLD: i64 = 1000;

/// Pounds of CO2 a mature tree absorbs per year. Used to express impact
/// estimates in "trees planted" terms.
pub const TREE_CO2_LBS_PER_YEAR: i64 = 48;
