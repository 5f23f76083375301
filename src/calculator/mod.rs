//! Calculation engine
//!
//! Pure functions for unit conversion, BMR/TDEE and macro planning.

pub mod energy;
pub mod macros;
pub mod units;

pub use energy::{calculate_bmr, calculate_tdee, has_required_fields, height_in_cm, weight_in_kg};
pub use macros::{
    calculate_macros, calculate_macros_by_name, calculate_macros_with_split, target_calories,
};
pub use units::{
    cm_to_inches, feet_inches_to_total_inches, inches_to_cm, inches_to_feet_inches, kg_to_pounds,
    pounds_to_kg, round_half_up, round_to_i64, round_to_places, FeetInches,
};
