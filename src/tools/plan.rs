//! Plan Tools
//!
//! Energy plus macro plans for a goal, with one card per diet style.

use serde::Serialize;

use crate::calculator::{calculate_macros, calculate_macros_by_name};
use crate::models::{DietStyle, EnergyResult, Goal, MacroPlan, UserProfile};

use super::energy::{calculate_energy, EnergyResponse};

/// Macro plan for one diet style, as shown side by side to the user
#[derive(Debug, Serialize)]
pub struct DietStyleCard {
    pub diet_style: DietStyle,
    pub label: &'static str,
    pub description: String,
    pub selected: bool,
    pub plan: MacroPlan,
}

/// Response for calculate_plan
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub energy: EnergyResponse,
    pub goal: Goal,
    pub diet_style: DietStyle,
    /// Plan for the selected diet style; absent unless TDEE is positive
    pub macros: Option<MacroPlan>,
    pub diet_options: Vec<DietStyleCard>,
}

/// Response for calculate_macros
#[derive(Debug, Serialize)]
pub struct MacrosResponse {
    pub tdee: i64,
    pub goal: String,
    pub diet_style: String,
    pub recognized_diet_style: bool,
    pub plan: MacroPlan,
}

/// Parse an optional goal name, using `default` when absent
pub fn parse_goal(goal: Option<&str>, default: Goal) -> Result<Goal, String> {
    match goal {
        None => Ok(default),
        Some(name) => Goal::from_str(name).ok_or_else(|| {
            format!("Unknown goal '{}'. Use maintenance, cutting or bulking.", name)
        }),
    }
}

/// Parse an optional diet style name, using `default` when absent
pub fn parse_diet_style(diet_style: Option<&str>, default: DietStyle) -> Result<DietStyle, String> {
    match diet_style {
        None => Ok(default),
        Some(name) => DietStyle::from_str(name).ok_or_else(|| {
            format!("Unknown diet style '{}'. Use moderate, lowCarb or highCarb.", name)
        }),
    }
}

/// Cards for every diet style at the same goal
pub fn diet_style_cards(tdee: i64, goal: Goal, selected: DietStyle) -> Vec<DietStyleCard> {
    DietStyle::ALL
        .iter()
        .map(|&style| DietStyleCard {
            diet_style: style,
            label: style.label(),
            description: style.description(),
            selected: style == selected,
            plan: calculate_macros(tdee, goal, style),
        })
        .collect()
}

/// Recompute macros after the goal or diet style changes.
///
/// Nothing is planned until a positive TDEE has been calculated.
pub fn recalculate_macros(energy: &EnergyResult, goal: Goal, diet_style: DietStyle) -> Option<MacroPlan> {
    if energy.can_plan_macros() {
        Some(calculate_macros(energy.tdee, goal, diet_style))
    } else {
        None
    }
}

/// Validate the profile, calculate energy, then plan macros
pub fn calculate_plan(profile: &UserProfile, goal: Goal, diet_style: DietStyle) -> PlanResponse {
    let energy = calculate_energy(profile);
    let result = energy.energy();

    let macros = recalculate_macros(&result, goal, diet_style);
    let diet_options = if macros.is_some() {
        diet_style_cards(result.tdee, goal, diet_style)
    } else {
        Vec::new()
    };

    PlanResponse {
        energy,
        goal,
        diet_style,
        macros,
        diet_options,
    }
}

/// Plan macros from a known TDEE with loosely typed names.
///
/// Unknown goals fall back to maintenance and unknown diet styles give a
/// zero split; `recognized_diet_style` reports which happened.
pub fn macros_for_tdee(tdee: i64, goal: &str, diet_style: &str) -> MacrosResponse {
    let recognized = DietStyle::from_wire(diet_style).is_some();
    let plan = calculate_macros_by_name(tdee, goal, diet_style);

    MacrosResponse {
        tdee,
        goal: Goal::from_wire(goal).unwrap_or_default().as_str().to_string(),
        diet_style: diet_style.to_string(),
        recognized_diet_style: recognized,
        plan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, HeightUnit, MacroSplit, WeightUnit};

    fn profile() -> UserProfile {
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
    fn test_calculate_plan() {
        let response = calculate_plan(&profile(), Goal::Cutting, DietStyle::LowCarb);
        assert_eq!(response.energy.tdee, 2594);

        let macros = response.macros.unwrap();
        assert_eq!(macros.target_calories, 2094);
        assert_eq!(macros, calculate_macros(2594, Goal::Cutting, DietStyle::LowCarb));

        assert_eq!(response.diet_options.len(), 3);
        let selected: Vec<DietStyle> = response
            .diet_options
            .iter()
            .filter(|card| card.selected)
            .map(|card| card.diet_style)
            .collect();
        assert_eq!(selected, vec![DietStyle::LowCarb]);
        for card in &response.diet_options {
            assert_eq!(card.plan.target_calories, 2094);
        }
    }

    #[test]
    fn test_invalid_profile_plans_nothing() {
        let response = calculate_plan(
            &UserProfile {
                gender: Gender::Unset,
                ..profile()
            },
            Goal::Maintenance,
            DietStyle::Moderate,
        );
        assert!(response.energy.missing_gender);
        assert!(response.macros.is_none());
        assert!(response.diet_options.is_empty());
    }

    #[test]
    fn test_recalculate_requires_positive_tdee() {
        assert!(recalculate_macros(&EnergyResult::INCOMPLETE, Goal::Bulking, DietStyle::HighCarb).is_none());

        let energy = EnergyResult { bmr: 1320, tdee: 1584 };
        let plan = recalculate_macros(&energy, Goal::Bulking, DietStyle::HighCarb).unwrap();
        assert_eq!(plan.target_calories, 2084);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(parse_goal(None, Goal::Bulking), Ok(Goal::Bulking));
        assert_eq!(parse_goal(Some("cutting"), Goal::Bulking), Ok(Goal::Cutting));
        assert!(parse_goal(Some("recomp"), Goal::Maintenance).is_err());
        assert_eq!(
            parse_diet_style(Some("lowCarb"), DietStyle::Moderate),
            Ok(DietStyle::LowCarb)
        );
        assert!(parse_diet_style(Some("keto"), DietStyle::Moderate)
            .unwrap_err()
            .contains("keto"));
    }

    #[test]
    fn test_macros_for_tdee_fallbacks() {
        let response = macros_for_tdee(2000, "cutting", "lowCarb");
        assert!(response.recognized_diet_style);
        assert_eq!(response.plan.fat_grams, 67);

        let response = macros_for_tdee(2000, "recomp", "keto");
        assert!(!response.recognized_diet_style);
        assert_eq!(response.goal, "maintenance");
        assert_eq!(response.plan.target_calories, 2000);
        assert_eq!(response.plan.split(), MacroSplit::ZERO);
        assert_eq!(response.plan.carbs_grams, 0);

        let response = macros_for_tdee(2000, "Cut", "LowCarb");
        assert!(!response.recognized_diet_style);
        assert_eq!(response.goal, "maintenance");
        assert_eq!(response.plan.target_calories, 2000);
        assert_eq!(response.plan.split(), MacroSplit::ZERO);
    }
}
