//! Unit conversion constants and functions
//!
//! Conversions and their approximate inverses use separate literal factors
//! (e.g. 0.453592 and 2.20462). They are not exact inverses of each other and
//! must not be derived from one another.

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;
/// Inches per centimeter
pub const IN_PER_CM: f64 = 0.393701;
/// Centimeters per inch
pub const CM_PER_IN: f64 = 2.54;
/// Inches per foot
pub const IN_PER_FT: f64 = 12.0;

/// A height split into whole feet and rounded inches
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeetInches {
    pub feet: f64,
    /// Rounded half-up; can be 12 (see [`inches_to_feet_inches`])
    pub inches: f64,
}

// ============================================================================
// Rounding
// ============================================================================

/// Round to the nearest integer, halves toward positive infinity.
///
/// `2.5 -> 3`, `-2.5 -> -2`. Unlike `f64::round` this does not round halves
/// away from zero, and unlike `(x + 0.5).floor()` it is exact for values just
/// below one half.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// [`round_half_up`] as an integer. NaN maps to 0, infinities saturate.
pub fn round_to_i64(value: f64) -> i64 {
    round_half_up(value) as i64
}

/// Round half-up to a number of decimal places
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    round_half_up(value * factor) / factor
}

// ============================================================================
// Weight
// ============================================================================

pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * KG_PER_LB
}

pub fn kg_to_pounds(kg: f64) -> f64 {
    kg * LB_PER_KG
}

// ============================================================================
// Height
// ============================================================================

pub fn cm_to_inches(cm: f64) -> f64 {
    cm * IN_PER_CM
}

pub fn inches_to_cm(total_inches: f64) -> f64 {
    total_inches * CM_PER_IN
}

/// Split total inches into feet and inches.
///
/// Inches are rounded after the split and not carried: 71.6 gives 5 ft 12 in,
/// not 6 ft 0 in.
pub fn inches_to_feet_inches(total_inches: f64) -> FeetInches {
    FeetInches {
        feet: (total_inches / IN_PER_FT).floor(),
        inches: round_half_up(total_inches % IN_PER_FT),
    }
}

pub fn feet_inches_to_total_inches(feet: f64, inches: f64) -> f64 {
    feet * IN_PER_FT + inches
}
