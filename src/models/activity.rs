//! Activity level table
//!
//! The five canonical TDEE multipliers offered to the user.

use serde::Serialize;

/// A selectable activity level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityLevel {
    pub multiplier: f64,
    pub label: &'static str,
    pub description: &'static str,
}

/// Canonical activity levels, least to most active
pub const ACTIVITY_LEVELS: &[ActivityLevel] = &[
    ActivityLevel {
        multiplier: 1.2,
        label: "Sedentary",
        description: "Little or no exercise",
    },
    ActivityLevel {
        multiplier: 1.375,
        label: "Lightly Active",
        description: "Light exercise 1-3 days/week",
    },
    ActivityLevel {
        multiplier: 1.55,
        label: "Moderately Active",
        description: "Moderate exercise 3-5 days/week",
    },
    ActivityLevel {
        multiplier: 1.725,
        label: "Very Active",
        description: "Hard exercise 6-7 days/week",
    },
    ActivityLevel {
        multiplier: 1.9,
        label: "Extremely Active",
        description: "Very hard exercise, physical job",
    },
];

impl ActivityLevel {
    /// Look up the canonical level with exactly this multiplier
    pub fn from_multiplier(multiplier: f64) -> Option<&'static ActivityLevel> {
        ACTIVITY_LEVELS.iter().find(|level| level.multiplier == multiplier)
    }

    /// Look up a level by label, ignoring case and surrounding whitespace
    pub fn from_label(label: &str) -> Option<&'static ActivityLevel> {
        let wanted = label.trim().to_lowercase();
        ACTIVITY_LEVELS
            .iter()
            .find(|level| level.label.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_canonical_levels() {
        let multipliers: Vec<f64> = ACTIVITY_LEVELS.iter().map(|l| l.multiplier).collect();
        assert_eq!(multipliers, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }

    #[test]
    fn test_from_multiplier() {
        let level = ActivityLevel::from_multiplier(1.55).unwrap();
        assert_eq!(level.label, "Moderately Active");
        assert!(ActivityLevel::from_multiplier(1.5).is_none());
        assert!(ActivityLevel::from_multiplier(0.0).is_none());
    }

    #[test]
    fn test_from_label() {
        let level = ActivityLevel::from_label(" very active ").unwrap();
        assert_eq!(level.multiplier, 1.725);
        assert!(ActivityLevel::from_label("couch potato").is_none());
    }
}
