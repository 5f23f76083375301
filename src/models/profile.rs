//! User profile model
//!
//! The demographic and activity inputs a calculation is run against.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::activity::ActivityLevel;

/// Minimum age accepted by profile validation
pub const MIN_AGE: u32 = 18;
/// Maximum age accepted by profile validation
pub const MAX_AGE: u32 = 100;

/// Gender used to pick the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "female")]
    Female,
    /// Nothing selected yet
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unset => "",
        }
    }

    /// Parse from string.
    ///
    /// Only the exact value `"male"` selects the male branch; an empty string
    /// is `Unset` and every other value is treated as female.
    pub fn from_str(s: &str) -> Self {
        match s {
            "male" => Gender::Male,
            "" => Gender::Unset,
            _ => Gender::Female,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Gender::Unset)
    }
}

/// Unit the profile weight is expressed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Some(WeightUnit::Kg),
            "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Lbs),
            _ => None,
        }
    }

    /// The other unit
    pub fn toggled(&self) -> Self {
        match self {
            WeightUnit::Kg => WeightUnit::Lbs,
            WeightUnit::Lbs => WeightUnit::Kg,
        }
    }
}

/// Unit the profile height is expressed in.
///
/// With `FeetInches` the stored height is the total number of inches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeightUnit {
    #[default]
    #[serde(rename = "cm")]
    Cm,
    #[serde(rename = "ft-in")]
    FeetInches,
}

impl HeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::FeetInches => "ft-in",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Some(HeightUnit::Cm),
            "ft-in" | "ft" | "in" | "inches" | "imperial" => Some(HeightUnit::FeetInches),
            _ => None,
        }
    }

    /// The other unit
    pub fn toggled(&self) -> Self {
        match self {
            HeightUnit::Cm => HeightUnit::FeetInches,
            HeightUnit::FeetInches => HeightUnit::Cm,
        }
    }
}

/// Why a profile is not ready to be calculated
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("Please select a gender")]
    MissingGender,

    #[error("Age must be between 18 and 100 years (got {0})")]
    AgeOutOfRange(u32),

    #[error("Weight must be greater than zero")]
    NonPositiveWeight,

    #[error("Height must be greater than zero")]
    NonPositiveHeight,

    #[error("Please select an activity level")]
    MissingActivityLevel,

    #[error("Unknown activity multiplier: {0}")]
    UnknownActivityLevel(f64),
}

impl ProfileError {
    /// Missing gender gets its own message; everything else is an incomplete form.
    pub fn is_missing_gender(&self) -> bool {
        matches!(self, ProfileError::MissingGender)
    }
}

/// Inputs for a BMR/TDEE calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub gender: Gender,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub activity_multiplier: f64,
    #[serde(default)]
    pub weight_unit: WeightUnit,
    #[serde(default)]
    pub height_unit: HeightUnit,
}

impl UserProfile {
    /// Check the profile the way the input form does before calculating.
    ///
    /// A missing gender is reported before any other problem.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !self.gender.is_set() {
            return Err(ProfileError::MissingGender);
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(ProfileError::AgeOutOfRange(self.age));
        }
        // Written as negated comparisons so NaN is rejected too
        if !(self.weight > 0.0) {
            return Err(ProfileError::NonPositiveWeight);
        }
        if !(self.height > 0.0) {
            return Err(ProfileError::NonPositiveHeight);
        }
        if !(self.activity_multiplier > 0.0) {
            return Err(ProfileError::MissingActivityLevel);
        }
        if ActivityLevel::from_multiplier(self.activity_multiplier).is_none() {
            return Err(ProfileError::UnknownActivityLevel(self.activity_multiplier));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_profile() -> UserProfile {
        UserProfile {
            gender: Gender::Male,
            age: 25,
            weight: 70.0,
            height: 175.0,
            activity_multiplier: 1.55,
            weight_unit: WeightUnit::Kg,
            height_unit: HeightUnit::Cm,
        }
    }

    #[test]
    fn test_gender_from_str_fallbacks() {
        assert_eq!(Gender::from_str("male"), Gender::Male);
        assert_eq!(Gender::from_str("female"), Gender::Female);
        assert_eq!(Gender::from_str(""), Gender::Unset);
        // Anything that is not exactly "male" takes the female branch
        assert_eq!(Gender::from_str("Male"), Gender::Female);
        assert_eq!(Gender::from_str("other"), Gender::Female);
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!(WeightUnit::from_str("lbs"), Some(WeightUnit::Lbs));
        assert_eq!(WeightUnit::from_str(" KG "), Some(WeightUnit::Kg));
        assert_eq!(WeightUnit::from_str("stone"), None);
        assert_eq!(HeightUnit::from_str("ft-in"), Some(HeightUnit::FeetInches));
        assert_eq!(HeightUnit::from_str("cm"), Some(HeightUnit::Cm));
        assert_eq!(HeightUnit::from_str("m"), None);
    }

    #[test]
    fn test_units_toggle() {
        assert_eq!(WeightUnit::Kg.toggled(), WeightUnit::Lbs);
        assert_eq!(WeightUnit::Lbs.toggled(), WeightUnit::Kg);
        assert_eq!(HeightUnit::Cm.toggled(), HeightUnit::FeetInches);
        assert_eq!(HeightUnit::FeetInches.toggled(), HeightUnit::Cm);
    }

    #[test]
    fn test_validate_complete_profile() {
        assert_eq!(complete_profile().validate(), Ok(()));
    }

    #[test]
    fn test_validate_missing_gender_reported_first() {
        let profile = UserProfile {
            gender: Gender::Unset,
            age: 0,
            weight: 0.0,
            ..complete_profile()
        };
        let err = profile.validate().unwrap_err();
        assert!(err.is_missing_gender());
        assert_eq!(err.to_string(), "Please select a gender");
    }

    #[test]
    fn test_validate_age_bounds() {
        let mut profile = complete_profile();
        profile.age = 18;
        assert!(profile.is_valid());
        profile.age = 100;
        assert!(profile.is_valid());
        profile.age = 17;
        assert_eq!(profile.validate(), Err(ProfileError::AgeOutOfRange(17)));
        profile.age = 101;
        assert_eq!(profile.validate(), Err(ProfileError::AgeOutOfRange(101)));
    }

    #[test]
    fn test_validate_measurements() {
        let profile = UserProfile {
            weight: 0.0,
            ..complete_profile()
        };
        assert_eq!(profile.validate(), Err(ProfileError::NonPositiveWeight));

        let profile = UserProfile {
            height: -1.0,
            ..complete_profile()
        };
        assert_eq!(profile.validate(), Err(ProfileError::NonPositiveHeight));

        let profile = UserProfile {
            weight: f64::NAN,
            ..complete_profile()
        };
        assert_eq!(profile.validate(), Err(ProfileError::NonPositiveWeight));
    }

    #[test]
    fn test_validate_activity_level() {
        let profile = UserProfile {
            activity_multiplier: 0.0,
            ..complete_profile()
        };
        let err = profile.validate().unwrap_err();
        assert_eq!(err, ProfileError::MissingActivityLevel);
        assert!(!err.is_missing_gender());

        let profile = UserProfile {
            activity_multiplier: 1.3,
            ..complete_profile()
        };
        assert_eq!(
            profile.validate(),
            Err(ProfileError::UnknownActivityLevel(1.3))
        );
    }

    #[test]
    fn test_profile_deserialize_defaults() {
        let json = r#"{"age": 30, "weight": 60, "height": 165, "activity_multiplier": 1.2}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.gender, Gender::Unset);
        assert_eq!(profile.weight_unit, WeightUnit::Kg);
        assert_eq!(profile.height_unit, HeightUnit::Cm);

        let json = r#"{"gender": "female", "age": 30, "weight": 132, "height": 65,
                       "activity_multiplier": 1.2, "weight_unit": "lbs", "height_unit": "ft-in"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.weight_unit, WeightUnit::Lbs);
        assert_eq!(profile.height_unit, HeightUnit::FeetInches);
    }
}
