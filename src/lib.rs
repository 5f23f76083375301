//! TDEE Calculator Library
//!
//! BMR, TDEE and macronutrient targets, plus the tools that serve them.

pub mod build_info;
pub mod calculator;
pub mod config;
pub mod mcp;
pub mod models;
pub mod tools;
