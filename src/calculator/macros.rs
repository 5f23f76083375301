//! Macro planning
//!
//! Turns a TDEE into a daily calorie target for a goal, then splits the
//! target into carbohydrate, protein and fat grams.

use crate::models::{DietStyle, Goal, MacroPlan, MacroSplit};

use super::units::round_to_i64;

/// kcal per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// kcal per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Daily calorie target for a goal. Not clamped at zero.
pub fn target_calories(tdee: i64, goal: Goal) -> i64 {
    tdee + goal.calorie_offset()
}

/// Plan macros for a goal and diet style
pub fn calculate_macros(tdee: i64, goal: Goal, diet_style: DietStyle) -> MacroPlan {
    calculate_macros_with_split(tdee, goal, diet_style.split())
}

/// Plan macros for an explicit split.
///
/// Each gram value is rounded on its own, so the grams converted back to
/// kcal will not add up exactly to the target. The percentages in the result
/// are the split's, not recomputed from the grams.
pub fn calculate_macros_with_split(tdee: i64, goal: Goal, split: MacroSplit) -> MacroPlan {
    let target = target_calories(tdee, goal);
    let target_kcal = target as f64;

    let carbs_kcal = target_kcal * split.carbs_fraction();
    let protein_kcal = target_kcal * split.protein_fraction();
    let fat_kcal = target_kcal * split.fat_fraction();

    MacroPlan {
        target_calories: target,
        carbs_grams: round_to_i64(carbs_kcal / KCAL_PER_G_CARBS),
        protein_grams: round_to_i64(protein_kcal / KCAL_PER_G_PROTEIN),
        fat_grams: round_to_i64(fat_kcal / KCAL_PER_G_FAT),
        carbs_pct: split.carbs_pct,
        protein_pct: split.protein_pct,
        fat_pct: split.fat_pct,
    }
}

/// Plan macros from loosely typed goal and diet style names.
///
/// An unknown goal plans for maintenance; an unknown diet style gives a plan
/// with the target calories but zero percentages and zero grams.
pub fn calculate_macros_by_name(tdee: i64, goal: &str, diet_style: &str) -> MacroPlan {
    calculate_macros_with_split(
        tdee,
        Goal::from_str_or_maintenance(goal),
        MacroSplit::for_style_name(diet_style),
    )
}
