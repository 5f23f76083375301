//! Data models
//!
//! Value types passed into and returned from the calculator.

mod activity;
mod energy;
mod plan;
mod profile;

pub use activity::{ActivityLevel, ACTIVITY_LEVELS};
pub use energy::EnergyResult;
pub use plan::{DietStyle, Goal, MacroPlan, MacroSplit};
pub use profile::{Gender, HeightUnit, ProfileError, UserProfile, WeightUnit, MAX_AGE, MIN_AGE};
