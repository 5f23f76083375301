//! Unit Tools
//!
//! Switching a profile between metric and imperial input, and height helpers.

use serde::Serialize;

use crate::calculator::{
    cm_to_inches, feet_inches_to_total_inches, inches_to_cm, inches_to_feet_inches, kg_to_pounds,
    pounds_to_kg, round_half_up, round_to_places,
};
use crate::models::{HeightUnit, WeightUnit};

/// Result of toggle_weight_unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightToggle {
    pub weight: f64,
    pub weight_unit: WeightUnit,
}

/// Result of toggle_height_unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeightToggle {
    /// Centimeters, or total inches when the unit is ft-in
    pub height: f64,
    pub height_unit: HeightUnit,
    pub feet: f64,
    pub inches: f64,
}

/// Response for convert_height
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeightConversion {
    pub cm: f64,
    pub total_inches: f64,
    pub feet: f64,
    pub inches: f64,
}

/// Flip the weight unit, converting a positive weight to one decimal place.
///
/// A zero or negative weight is left as is (still rounded).
pub fn toggle_weight_unit(weight: f64, unit: WeightUnit) -> WeightToggle {
    let converted = match unit {
        WeightUnit::Kg if weight > 0.0 => kg_to_pounds(weight),
        WeightUnit::Lbs if weight > 0.0 => pounds_to_kg(weight),
        _ => weight,
    };

    WeightToggle {
        weight: round_to_places(converted, 1),
        weight_unit: unit.toggled(),
    }
}

/// Flip the height unit.
///
/// - cm to ft-in: the height becomes unrounded total inches and the feet and
///   inches fields are refilled from it (only when height is positive).
/// - ft-in to cm: the feet and inches fields are turned into whole
///   centimeters (only when feet is positive).
///
/// Otherwise the height and the feet/inches fields are kept.
pub fn toggle_height_unit(height: f64, unit: HeightUnit, feet: f64, inches: f64) -> HeightToggle {
    match unit {
        HeightUnit::Cm if height > 0.0 => {
            let total_inches = cm_to_inches(height);
            let split = inches_to_feet_inches(total_inches);
            HeightToggle {
                height: total_inches,
                height_unit: HeightUnit::FeetInches,
                feet: split.feet,
                inches: split.inches,
            }
        }
        HeightUnit::FeetInches if feet > 0.0 => {
            let total_inches = feet_inches_to_total_inches(feet, inches);
            HeightToggle {
                height: round_half_up(inches_to_cm(total_inches)),
                height_unit: HeightUnit::Cm,
                feet,
                inches,
            }
        }
        _ => HeightToggle {
            height,
            height_unit: unit.toggled(),
            feet,
            inches,
        },
    }
}

/// Stored ft-in height after the feet or inches field is edited.
///
/// Keeps `current_height` while both fields are zero or negative.
pub fn height_from_feet_inches(feet: f64, inches: f64, current_height: f64) -> f64 {
    if feet > 0.0 || inches > 0.0 {
        feet_inches_to_total_inches(feet, inches)
    } else {
        current_height
    }
}

pub fn convert_cm(cm: f64) -> HeightConversion {
    let total_inches = cm_to_inches(cm);
    let split = inches_to_feet_inches(total_inches);
    HeightConversion {
        cm,
        total_inches,
        feet: split.feet,
        inches: split.inches,
    }
}

pub fn convert_feet_inches(feet: f64, inches: f64) -> HeightConversion {
    let total_inches = feet_inches_to_total_inches(feet, inches);
    HeightConversion {
        cm: inches_to_cm(total_inches),
        total_inches,
        feet,
        inches,
    }
}
