//! Goal, diet style and macro plan models

use serde::{Deserialize, Serialize};

/// Calorie goal relative to TDEE
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    #[default]
    Maintenance,
    Cutting,
    Bulking,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Maintenance, Goal::Cutting, Goal::Bulking];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Maintenance => "maintenance",
            Goal::Cutting => "cutting",
            Goal::Bulking => "bulking",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "maintenance" | "maintain" => Some(Goal::Maintenance),
            "cutting" | "cut" => Some(Goal::Cutting),
            "bulking" | "bulk" => Some(Goal::Bulking),
            _ => None,
        }
    }

    /// Exact wire name only: "maintenance", "cutting" or "bulking"
    pub fn from_wire(s: &str) -> Option<Self> {
        Goal::ALL.into_iter().find(|g| g.as_str() == s)
    }

    /// Parse an exact wire name, falling back to maintenance for anything else
    pub fn from_str_or_maintenance(s: &str) -> Self {
        Self::from_wire(s).unwrap_or_else(|| {
            tracing::warn!("Unknown goal '{}', using maintenance", s);
            Goal::Maintenance
        })
    }

    /// kcal added to TDEE to get the daily target
    pub fn calorie_offset(&self) -> i64 {
        match self {
            Goal::Maintenance => 0,
            Goal::Cutting => -500,
            Goal::Bulking => 500,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::Maintenance => "Maintenance",
            Goal::Cutting => "Cutting",
            Goal::Bulking => "Bulking",
        }
    }
}

/// Macro distribution style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DietStyle {
    #[default]
    Moderate,
    LowCarb,
    HighCarb,
}

impl DietStyle {
    pub const ALL: [DietStyle; 3] = [DietStyle::Moderate, DietStyle::LowCarb, DietStyle::HighCarb];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietStyle::Moderate => "moderate",
            DietStyle::LowCarb => "lowCarb",
            DietStyle::HighCarb => "highCarb",
        }
    }

    /// Parse from string. Accepts the camelCase wire name and a few spellings of it.
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "moderate" | "moderatecarb" => Some(DietStyle::Moderate),
            "lowcarb" | "lowercarb" => Some(DietStyle::LowCarb),
            "highcarb" | "highercarb" => Some(DietStyle::HighCarb),
            _ => None,
        }
    }

    /// Exact wire name only: "moderate", "lowCarb" or "highCarb"
    pub fn from_wire(s: &str) -> Option<Self> {
        DietStyle::ALL.into_iter().find(|d| d.as_str() == s)
    }

    pub fn split(&self) -> MacroSplit {
        match self {
            DietStyle::Moderate => MacroSplit::new(35, 30, 35),
            DietStyle::LowCarb => MacroSplit::new(20, 40, 40),
            DietStyle::HighCarb => MacroSplit::new(50, 30, 20),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietStyle::Moderate => "Moderate Carb",
            DietStyle::LowCarb => "Lower Carb",
            DietStyle::HighCarb => "Higher Carb",
        }
    }

    /// e.g. "35% Carbs, 30% Protein, 35% Fat"
    pub fn description(&self) -> String {
        self.split().describe()
    }
}

/// Share of target calories per macro, in whole percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacroSplit {
    pub carbs_pct: u8,
    pub protein_pct: u8,
    pub fat_pct: u8,
}

impl MacroSplit {
    /// Split used when the diet style is not recognized
    pub const ZERO: MacroSplit = MacroSplit {
        carbs_pct: 0,
        protein_pct: 0,
        fat_pct: 0,
    };

    pub const fn new(carbs_pct: u8, protein_pct: u8, fat_pct: u8) -> Self {
        Self {
            carbs_pct,
            protein_pct,
            fat_pct,
        }
    }

    pub fn for_style(style: Option<DietStyle>) -> Self {
        style.map(|s| s.split()).unwrap_or(Self::ZERO)
    }

    /// Split for a diet style wire name; anything else degrades to the zero split
    pub fn for_style_name(name: &str) -> Self {
        let style = DietStyle::from_wire(name);
        if style.is_none() {
            tracing::warn!("Unknown diet style '{}', using a zero macro split", name);
        }
        Self::for_style(style)
    }

    pub fn total(&self) -> u32 {
        u32::from(self.carbs_pct) + u32::from(self.protein_pct) + u32::from(self.fat_pct)
    }

    pub fn carbs_fraction(&self) -> f64 {
        f64::from(self.carbs_pct) / 100.0
    }

    pub fn protein_fraction(&self) -> f64 {
        f64::from(self.protein_pct) / 100.0
    }

    pub fn fat_fraction(&self) -> f64 {
        f64::from(self.fat_pct) / 100.0
    }

    pub fn describe(&self) -> String {
        format!(
            "{}% Carbs, {}% Protein, {}% Fat",
            self.carbs_pct, self.protein_pct, self.fat_pct
        )
    }
}

/// Daily calorie target and macro grams for one goal and diet style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacroPlan {
    /// May be negative for a very low TDEE while cutting
    pub target_calories: i64,
    pub carbs_grams: i64,
    pub protein_grams: i64,
    pub fat_grams: i64,
    pub carbs_pct: u8,
    pub protein_pct: u8,
    pub fat_pct: u8,
}

impl MacroPlan {
    pub fn split(&self) -> MacroSplit {
        MacroSplit::new(self.carbs_pct, self.protein_pct, self.fat_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_offsets() {
        assert_eq!(Goal::Maintenance.calorie_offset(), 0);
        assert_eq!(Goal::Cutting.calorie_offset(), -500);
        assert_eq!(Goal::Bulking.calorie_offset(), 500);
    }

    #[test]
    fn test_goal_parsing() {
        assert_eq!(Goal::from_str("cutting"), Some(Goal::Cutting));
        assert_eq!(Goal::from_str(" Bulk "), Some(Goal::Bulking));
        assert_eq!(Goal::from_str("recomp"), None);
        assert_eq!(Goal::from_str_or_maintenance("recomp"), Goal::Maintenance);
        assert_eq!(Goal::from_str_or_maintenance("bulking"), Goal::Bulking);
    }

    #[test]
    fn test_wire_parsing_is_exact() {
        assert_eq!(Goal::from_wire("cutting"), Some(Goal::Cutting));
        assert_eq!(Goal::from_wire("Cut"), None);
        assert_eq!(Goal::from_wire(" cutting"), None);
        assert_eq!(Goal::from_str_or_maintenance("Cut"), Goal::Maintenance);
        assert_eq!(DietStyle::from_wire("lowCarb"), Some(DietStyle::LowCarb));
        assert_eq!(DietStyle::from_wire("LowCarb"), None);
        assert_eq!(DietStyle::from_wire("low_carb"), None);
        assert_eq!(MacroSplit::for_style_name("LowCarb"), MacroSplit::ZERO);
    }

    #[test]
    fn test_splits_sum_to_100() {
        for style in DietStyle::ALL {
            assert_eq!(style.split().total(), 100, "{:?}", style);
        }
        assert_eq!(MacroSplit::ZERO.total(), 0);
    }

    #[test]
    fn test_split_fractions_match_literals() {
        let split = DietStyle::Moderate.split();
        assert_eq!(split.carbs_fraction(), 0.35);
        assert_eq!(split.protein_fraction(), 0.3);
        assert_eq!(split.fat_fraction(), 0.35);

        let split = DietStyle::LowCarb.split();
        assert_eq!(split.carbs_fraction(), 0.2);
        assert_eq!(split.protein_fraction(), 0.4);
    }

    #[test]
    fn test_diet_style_parsing() {
        assert_eq!(DietStyle::from_str("lowCarb"), Some(DietStyle::LowCarb));
        assert_eq!(DietStyle::from_str("high_carb"), Some(DietStyle::HighCarb));
        assert_eq!(DietStyle::from_str("Moderate Carb"), Some(DietStyle::Moderate));
        assert_eq!(DietStyle::from_str("keto"), None);
    }

    #[test]
    fn test_unknown_style_name_degrades_to_zero() {
        assert_eq!(MacroSplit::for_style_name("keto"), MacroSplit::ZERO);
        assert_eq!(MacroSplit::for_style(None), MacroSplit::ZERO);
        assert_eq!(
            MacroSplit::for_style_name("highCarb"),
            MacroSplit::new(50, 30, 20)
        );
    }

    #[test]
    fn test_labels_and_descriptions() {
        assert_eq!(DietStyle::LowCarb.label(), "Lower Carb");
        assert_eq!(
            DietStyle::LowCarb.description(),
            "20% Carbs, 40% Protein, 40% Fat"
        );
        assert_eq!(
            DietStyle::Moderate.description(),
            "35% Carbs, 30% Protein, 35% Fat"
        );
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&DietStyle::LowCarb).unwrap(), "\"lowCarb\"");
        assert_eq!(serde_json::to_string(&Goal::Bulking).unwrap(), "\"bulking\"");
        let style: DietStyle = serde_json::from_str("\"highCarb\"").unwrap();
        assert_eq!(style, DietStyle::HighCarb);
    }
}
