//! BMR and TDEE calculation
//!
//! BMR uses the Mifflin-St Jeor equation (Mifflin et al., 1990):
//!
//! - male:   `10 * weight_kg + 6.25 * height_cm - 5 * age + 5`
//! - female: `10 * weight_kg + 6.25 * height_cm - 5 * age - 161`
//!
//! TDEE is the unrounded BMR times the activity multiplier. Both are rounded
//! half-up only at the end. Nothing is clamped: pathological inputs can give
//! a negative BMR and it is returned as is.

use crate::models::{EnergyResult, Gender, HeightUnit, UserProfile, WeightUnit};

use super::units::{inches_to_cm, pounds_to_kg, round_to_i64};

const MALE_CONSTANT: f64 = 5.0;
const FEMALE_CONSTANT: f64 = -161.0;

/// Zero or NaN, the numbers that make a profile field count as missing
fn is_missing(value: f64) -> bool {
    value == 0.0 || value.is_nan()
}

/// Whether the profile has every field the formula needs.
///
/// This only checks for missing values; range checks belong to
/// [`UserProfile::validate`].
pub fn has_required_fields(profile: &UserProfile) -> bool {
    profile.gender.is_set()
        && profile.age != 0
        && !is_missing(profile.weight)
        && !is_missing(profile.height)
        && !is_missing(profile.activity_multiplier)
}

/// Profile weight in kilograms
pub fn weight_in_kg(profile: &UserProfile) -> f64 {
    match profile.weight_unit {
        WeightUnit::Kg => profile.weight,
        WeightUnit::Lbs => pounds_to_kg(profile.weight),
    }
}

/// Profile height in centimeters; ft-in heights are stored as total inches
pub fn height_in_cm(profile: &UserProfile) -> f64 {
    match profile.height_unit {
        HeightUnit::Cm => profile.height,
        HeightUnit::FeetInches => inches_to_cm(profile.height),
    }
}

/// Unrounded Mifflin-St Jeor BMR in kcal/day.
///
/// Every gender other than `Male` uses the female constant.
pub fn calculate_bmr(gender: Gender, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let constant = match gender {
        Gender::Male => MALE_CONSTANT,
        Gender::Female | Gender::Unset => FEMALE_CONSTANT,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + constant
}

/// Calculate BMR and TDEE for a profile.
///
/// Returns [`EnergyResult::INCOMPLETE`] (both zero) when gender is unset or
/// any of age, weight, height or activity multiplier is missing.
pub fn calculate_tdee(profile: &UserProfile) -> EnergyResult {
    if !has_required_fields(profile) {
        return EnergyResult::INCOMPLETE;
    }

    let bmr = calculate_bmr(
        profile.gender,
        weight_in_kg(profile),
        height_in_cm(profile),
        profile.age,
    );
    let tdee = bmr * profile.activity_multiplier;

    EnergyResult {
        bmr: round_to_i64(bmr),
        tdee: round_to_i64(tdee),
    }
}
