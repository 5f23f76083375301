//! Energy expenditure result

use serde::{Deserialize, Serialize};

/// BMR and TDEE in kcal/day, rounded half-up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnergyResult {
    pub bmr: i64,
    pub tdee: i64,
}

impl EnergyResult {
    /// Sentinel returned for a profile that cannot be calculated
    pub const INCOMPLETE: EnergyResult = EnergyResult { bmr: 0, tdee: 0 };

    pub fn is_incomplete(&self) -> bool {
        *self == Self::INCOMPLETE
    }

    /// Macros are only planned from a positive TDEE
    pub fn can_plan_macros(&self) -> bool {
        self.tdee > 0
    }
}
