//! Reference Tools
//!
//! The fixed tables a caller needs to build its inputs.

use serde::Serialize;

use crate::models::{ActivityLevel, DietStyle, Goal, MacroSplit, ACTIVITY_LEVELS};

/// Response for list_activity_levels
#[derive(Debug, Serialize)]
pub struct ListActivityLevelsResponse {
    pub levels: Vec<ActivityLevel>,
    pub total: usize,
}

/// Diet style with its split
#[derive(Debug, Serialize)]
pub struct DietStyleInfo {
    pub diet_style: DietStyle,
    pub label: &'static str,
    pub description: String,
    pub split: MacroSplit,
}

/// Goal with its calorie offset
#[derive(Debug, Serialize)]
pub struct GoalInfo {
    pub goal: Goal,
    pub display_name: &'static str,
    pub calorie_offset: i64,
}

/// Response for list_diet_styles
#[derive(Debug, Serialize)]
pub struct ListDietStylesResponse {
    pub diet_styles: Vec<DietStyleInfo>,
    pub goals: Vec<GoalInfo>,
}

pub fn list_activity_levels() -> ListActivityLevelsResponse {
    ListActivityLevelsResponse {
        levels: ACTIVITY_LEVELS.to_vec(),
        total: ACTIVITY_LEVELS.len(),
    }
}

pub fn list_diet_styles() -> ListDietStylesResponse {
    ListDietStylesResponse {
        diet_styles: DietStyle::ALL
            .iter()
            .map(|&style| DietStyleInfo {
                diet_style: style,
                label: style.label(),
                description: style.description(),
                split: style.split(),
            })
            .collect(),
        goals: Goal::ALL
            .iter()
            .map(|&goal| GoalInfo {
                goal,
                display_name: goal.display_name(),
                calorie_offset: goal.calorie_offset(),
            })
            .collect(),
    }
}
