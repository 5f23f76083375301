//! Status Tool
//!
//! Runtime status of the service and the calculator guide text.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info;
use crate::config::Config;

/// How the calculator works, for assistants and users
pub const CALCULATOR_GUIDE: &str = r#"
# TDEE Calculator Guide

## What is BMR?

Basal Metabolic Rate is the energy your body uses at complete rest to keep
itself running. It depends on age, sex, height and weight.

## What is TDEE?

Total Daily Energy Expenditure estimates how many calories you burn in a day
once activity is included. It is BMR multiplied by an activity multiplier.

## The Equation (Mifflin-St Jeor)

| Sex | BMR |
|-----|-----|
| Male | 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) + 5 |
| Female | 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) - 161 |

Weights in lbs are converted with 0.453592 kg/lb. Heights in feet and inches
are converted from total inches with 2.54 cm/in.

TDEE = BMR x activity multiplier. Both are rounded to whole kcal at the end.

## Activity Multipliers

| Level | Multiplier | Typical week |
|-------|------------|--------------|
| Sedentary | 1.2 | Little or no exercise |
| Lightly Active | 1.375 | Light exercise 1-3 days |
| Moderately Active | 1.55 | Moderate exercise 3-5 days |
| Very Active | 1.725 | Hard exercise 6-7 days |
| Extremely Active | 1.9 | Very hard exercise or a physical job |

Call `list_activity_levels` for the exact values to pass as `activity_multiplier`.

## Goals

- **maintenance** - eat at TDEE to hold your current weight.
- **cutting** - TDEE - 500 kcal to lose fat while keeping muscle.
- **bulking** - TDEE + 500 kcal to build muscle.

A sustainable rate of change is about 0.5-1 kg (1-2 lbs) per week.

## Diet Styles

| Style | Carbs | Protein | Fat |
|-------|-------|---------|-----|
| moderate | 35% | 30% | 35% |
| lowCarb | 20% | 40% | 40% |
| highCarb | 50% | 30% | 20% |

Grams use 4 kcal/g for carbs and protein and 9 kcal/g for fat. Each gram value
is rounded on its own, so they may not add back up to the exact target.

## Workflow

1. Call `calculate_plan` with the profile (gender, age 18-100, weight, height,
   activity_multiplier, units) plus goal and diet_style.
2. If `energy.missing_gender` is true, ask for gender; if `energy.valid` is
   false for another reason, show `energy.error`.
3. To compare a different goal or style for the same person, call
   `calculate_macros` with the returned `tdee`.
"#;

/// Service status information
#[derive(Debug, Clone, Serialize)]
pub struct TdeeStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub default_goal: &'static str,
    pub default_diet_style: &'static str,
}

/// Tracks service start for status reports
pub struct StatusTracker {
    start_time: Instant,
    started_at: String,
    config: Config,
}

impl StatusTracker {
    pub fn new(config: Config) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            config,
        }
    }

    pub fn get_status(&self) -> TdeeStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        TdeeStatus {
            build_number: build_info::build_number(),
            build_timestamp: build_info::BUILD_TIMESTAMP,
            version: build_info::VERSION,
            started_at: self.started_at.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            default_goal: self.config.default_goal.as_str(),
            default_diet_style: self.config.default_diet_style.as_str(),
        }
    }
}
