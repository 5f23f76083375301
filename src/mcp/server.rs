//! TDEE MCP Server Implementation
//!
//! Exposes the calculator tools over MCP.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::models::{ActivityLevel, Gender, HeightUnit, UserProfile, WeightUnit};
use crate::tools::energy;
use crate::tools::plan;
use crate::tools::reference;
use crate::tools::status::StatusTracker;
use crate::tools::units;

/// TDEE MCP Service
#[derive(Clone)]
pub struct TdeeService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Arc<Config>,
    tool_router: ToolRouter<TdeeService>,
}

impl TdeeService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config.clone()))),
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct ProfileParams {
    /// "male" or "female"; any value other than "male" uses the female equation
    #[serde(default)]
    pub gender: Option<String>,
    /// Age in whole years (18-100)
    pub age: u32,
    /// Body weight in weight_unit
    pub weight: f64,
    /// Height in cm, or total inches when height_unit is "ft-in"
    #[serde(default)]
    pub height: f64,
    /// Feet field for "ft-in"; with inches, replaces height when either is positive
    #[serde(default)]
    pub feet: Option<f64>,
    /// Inches field for "ft-in"
    #[serde(default)]
    pub inches: Option<f64>,
    /// One of 1.2, 1.375, 1.55, 1.725, 1.9 (see list_activity_levels)
    #[serde(default)]
    pub activity_multiplier: f64,
    /// Activity label such as "Moderately Active"; overrides activity_multiplier
    #[serde(default)]
    pub activity_level: Option<String>,
    /// "kg" (default) or "lbs"
    pub weight_unit: Option<String>,
    /// "cm" (default) or "ft-in"
    pub height_unit: Option<String>,
}

impl ProfileParams {
    fn into_profile(self) -> Result<UserProfile, McpError> {
        let weight_unit = match self.weight_unit.as_deref() {
            None => WeightUnit::Kg,
            Some(s) => WeightUnit::from_str(s).ok_or_else(|| {
                McpError::invalid_params(format!("Unknown weight unit '{}'. Use kg or lbs.", s), None)
            })?,
        };
        let height_unit = match self.height_unit.as_deref() {
            None => HeightUnit::Cm,
            Some(s) => HeightUnit::from_str(s).ok_or_else(|| {
                McpError::invalid_params(format!("Unknown height unit '{}'. Use cm or ft-in.", s), None)
            })?,
        };

        let activity_multiplier = match self.activity_level.as_deref() {
            None => self.activity_multiplier,
            Some(label) => ActivityLevel::from_label(label)
                .map(|level| level.multiplier)
                .ok_or_else(|| {
                    McpError::invalid_params(
                        format!("Unknown activity level '{}'. See list_activity_levels.", label),
                        None,
                    )
                })?,
        };

        let height = match (height_unit, self.feet, self.inches) {
            (HeightUnit::FeetInches, feet, inches) if feet.is_some() || inches.is_some() => {
                units::height_from_feet_inches(feet.unwrap_or(0.0), inches.unwrap_or(0.0), self.height)
            }
            _ => self.height,
        };

        Ok(UserProfile {
            gender: Gender::from_str(self.gender.as_deref().unwrap_or("")),
            age: self.age,
            weight: self.weight,
            height,
            activity_multiplier,
            weight_unit,
            height_unit,
        })
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateTdeeParams {
    #[serde(flatten)]
    pub profile: ProfileParams,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculatePlanParams {
    #[serde(flatten)]
    pub profile: ProfileParams,
    /// maintenance, cutting or bulking (default from TDEE_DEFAULT_GOAL)
    pub goal: Option<String>,
    /// moderate, lowCarb or highCarb (default from TDEE_DEFAULT_DIET_STYLE)
    pub diet_style: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateMacrosParams {
    /// TDEE in kcal/day, as returned by calculate_tdee
    pub tdee: i64,
    /// maintenance, cutting or bulking; unknown values plan for maintenance
    pub goal: Option<String>,
    /// moderate, lowCarb or highCarb; unknown values give zero macros
    pub diet_style: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ToggleWeightUnitParams {
    /// Current weight value
    pub weight: f64,
    /// Unit the weight is currently in: "kg" or "lbs"
    pub weight_unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ToggleHeightUnitParams {
    /// Current height value (cm, or total inches for ft-in)
    pub height: f64,
    /// Unit the height is currently in: "cm" or "ft-in"
    pub height_unit: String,
    /// Current feet field (used when switching from ft-in)
    #[serde(default)]
    pub feet: f64,
    /// Current inches field (used when switching from ft-in)
    #[serde(default)]
    pub inches: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertHeightParams {
    /// Height in centimeters; takes precedence over feet/inches
    pub cm: Option<f64>,
    /// Feet part of the height
    pub feet: Option<f64>,
    /// Inches part of the height
    pub inches: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl TdeeService {
    // --- Status ---

    #[tool(description = "Get the current status of the TDEE service including build info, configured defaults, and process information")]
    async fn tdee_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Explain BMR, TDEE, activity multipliers, goals and diet styles, and how to use the calculator tools")]
    fn calculator_guide(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_GUIDE;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_GUIDE)]))
    }

    // --- Reference ---

    #[tool(description = "List the five canonical activity levels with their multipliers")]
    fn list_activity_levels(&self) -> Result<CallToolResult, McpError> {
        json_result(&reference::list_activity_levels())
    }

    #[tool(description = "List diet styles with their macro splits, and goals with their calorie offsets")]
    fn list_diet_styles(&self) -> Result<CallToolResult, McpError> {
        json_result(&reference::list_diet_styles())
    }

    // --- Calculation ---

    #[tool(description = "Validate a profile and calculate BMR and TDEE (Mifflin-St Jeor). Invalid profiles return zeros plus an error message.")]
    fn calculate_tdee(&self, Parameters(p): Parameters<CalculateTdeeParams>) -> Result<CallToolResult, McpError> {
        let profile = p.profile.into_profile()?;
        tracing::debug!("calculate_tdee: {:?}", profile);
        json_result(&energy::calculate_energy(&profile))
    }

    #[tool(description = "Calculate BMR, TDEE and macro targets for a goal and diet style, with plans for all three diet styles")]
    fn calculate_plan(&self, Parameters(p): Parameters<CalculatePlanParams>) -> Result<CallToolResult, McpError> {
        let goal = plan::parse_goal(p.goal.as_deref(), self.config.default_goal)
            .map_err(|e| McpError::invalid_params(e, None))?;
        let diet_style = plan::parse_diet_style(p.diet_style.as_deref(), self.config.default_diet_style)
            .map_err(|e| McpError::invalid_params(e, None))?;
        let profile = p.profile.into_profile()?;
        tracing::debug!("calculate_plan: {:?} goal={:?} diet_style={:?}", profile, goal, diet_style);
        json_result(&plan::calculate_plan(&profile, goal, diet_style))
    }

    #[tool(description = "Calculate macro targets from a known TDEE. Unknown goals plan for maintenance; unknown diet styles return zero macros.")]
    fn calculate_macros(&self, Parameters(p): Parameters<CalculateMacrosParams>) -> Result<CallToolResult, McpError> {
        let goal = p.goal.unwrap_or_else(|| self.config.default_goal.as_str().to_string());
        let diet_style = p
            .diet_style
            .unwrap_or_else(|| self.config.default_diet_style.as_str().to_string());
        json_result(&plan::macros_for_tdee(p.tdee, &goal, &diet_style))
    }

    // --- Units ---

    #[tool(description = "Switch a weight between kg and lbs, rounded to one decimal")]
    fn toggle_weight_unit(&self, Parameters(p): Parameters<ToggleWeightUnitParams>) -> Result<CallToolResult, McpError> {
        let unit = WeightUnit::from_str(&p.weight_unit).ok_or_else(|| {
            McpError::invalid_params(format!("Unknown weight unit '{}'. Use kg or lbs.", p.weight_unit), None)
        })?;
        json_result(&units::toggle_weight_unit(p.weight, unit))
    }

    #[tool(description = "Switch a height between cm and feet/inches")]
    fn toggle_height_unit(&self, Parameters(p): Parameters<ToggleHeightUnitParams>) -> Result<CallToolResult, McpError> {
        let unit = HeightUnit::from_str(&p.height_unit).ok_or_else(|| {
            McpError::invalid_params(format!("Unknown height unit '{}'. Use cm or ft-in.", p.height_unit), None)
        })?;
        json_result(&units::toggle_height_unit(p.height, unit, p.feet, p.inches))
    }

    #[tool(description = "Convert a height given in cm, or in feet and inches, to all representations")]
    fn convert_height(&self, Parameters(p): Parameters<ConvertHeightParams>) -> Result<CallToolResult, McpError> {
        match (p.cm, p.feet, p.inches) {
            (Some(cm), _, _) => json_result(&units::convert_cm(cm)),
            (None, None, None) => json_result(&ErrorResponse {
                error: "Provide cm, or feet and/or inches".to_string(),
            }),
            (None, feet, inches) => json_result(&units::convert_feet_inches(
                feet.unwrap_or(0.0),
                inches.unwrap_or(0.0),
            )),
        }
    }
}

#[tool_handler]
impl ServerHandler for TdeeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "tdee".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("TDEE Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "TDEE Calculator - BMR, TDEE and macro targets. \
                 Call calculator_guide first if unsure. \
                 Reference: list_activity_levels, list_diet_styles. \
                 Calculation: calculate_tdee, calculate_plan, calculate_macros. \
                 Units: toggle_weight_unit, toggle_height_unit, convert_height. \
                 Status: tdee_status."
                    .into(),
            ),
        }
    }
}
