//! Energy Tools
//!
//! Profile validation followed by the BMR/TDEE calculation.

use serde::Serialize;

use crate::calculator::{calculate_bmr, calculate_tdee, height_in_cm, weight_in_kg};
use crate::models::{ActivityLevel, EnergyResult, UserProfile};

/// Response for calculate_tdee
#[derive(Debug, Serialize)]
pub struct EnergyResponse {
    pub valid: bool,
    /// Set when the profile failed validation
    pub error: Option<String>,
    /// Lets callers show "select a gender" separately from a generic form error
    pub missing_gender: bool,
    pub bmr: i64,
    pub tdee: i64,
    pub bmr_unrounded: Option<f64>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub activity_level: Option<String>,
}

impl EnergyResponse {
    pub fn energy(&self) -> EnergyResult {
        EnergyResult {
            bmr: self.bmr,
            tdee: self.tdee,
        }
    }
}

/// Validate a profile and calculate its energy expenditure.
///
/// An invalid profile is not an error here: it produces the zero result plus
/// the validation message, the same as submitting an incomplete form.
pub fn calculate_energy(profile: &UserProfile) -> EnergyResponse {
    if let Err(e) = profile.validate() {
        tracing::debug!("Profile rejected: {}", e);
        return EnergyResponse {
            valid: false,
            error: Some(e.to_string()),
            missing_gender: e.is_missing_gender(),
            bmr: 0,
            tdee: 0,
            bmr_unrounded: None,
            weight_kg: None,
            height_cm: None,
            activity_level: None,
        };
    }

    let weight_kg = weight_in_kg(profile);
    let height_cm = height_in_cm(profile);
    let result = calculate_tdee(profile);

    tracing::debug!(
        "Calculated bmr={} tdee={} for {} kg / {} cm",
        result.bmr,
        result.tdee,
        weight_kg,
        height_cm
    );

    EnergyResponse {
        valid: true,
        error: None,
        missing_gender: false,
        bmr: result.bmr,
        tdee: result.tdee,
        bmr_unrounded: Some(calculate_bmr(profile.gender, weight_kg, height_cm, profile.age)),
        weight_kg: Some(weight_kg),
        height_cm: Some(height_cm),
        activity_level: ActivityLevel::from_multiplier(profile.activity_multiplier)
            .map(|level| level.label.to_string()),
    }
}
