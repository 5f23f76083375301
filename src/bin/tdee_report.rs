//! One-off calculation from the command line
//! Usage: cargo run --bin tdee_report -- <gender> <age> <weight> <height> <multiplier|label>
//!        [weight_unit] [height_unit] [goal] [diet_style]

use tdee::config::Config;
use tdee::models::{ActivityLevel, Gender, HeightUnit, UserProfile, WeightUnit};
use tdee::tools::plan;

const USAGE: &str = "Usage: tdee_report <gender> <age> <weight> <height> <multiplier|label> \
                     [kg|lbs] [cm|ft-in] [maintenance|cutting|bulking] [moderate|lowCarb|highCarb]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 5 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    let config = Config::from_env()?;

    let weight_unit = match args.get(5) {
        Some(s) => WeightUnit::from_str(s).ok_or_else(|| format!("Unknown weight unit '{}'", s))?,
        None => WeightUnit::Kg,
    };
    let height_unit = match args.get(6) {
        Some(s) => HeightUnit::from_str(s).ok_or_else(|| format!("Unknown height unit '{}'", s))?,
        None => HeightUnit::Cm,
    };

    // "1.55" or "Moderately Active"
    let activity_multiplier = match args[4].parse::<f64>() {
        Ok(m) => m,
        Err(_) => ActivityLevel::from_label(&args[4])
            .map(|level| level.multiplier)
            .ok_or_else(|| format!("Unknown activity level '{}'", args[4]))?,
    };

    let profile = UserProfile {
        gender: Gender::from_str(&args[0]),
        age: args[1].parse()?,
        weight: args[2].parse()?,
        height: args[3].parse()?,
        activity_multiplier,
        weight_unit,
        height_unit,
    };

    let goal = plan::parse_goal(args.get(7).map(String::as_str), config.default_goal)?;
    let diet_style = plan::parse_diet_style(args.get(8).map(String::as_str), config.default_diet_style)?;

    let response = plan::calculate_plan(&profile, goal, diet_style);
    println!("{}", serde_json::to_string_pretty(&response)?);

    if !response.energy.valid {
        std::process::exit(1);
    }

    Ok(())
}
