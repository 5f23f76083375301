//! MCP Tools implementation

pub mod energy;
pub mod plan;
pub mod reference;
pub mod status;
pub mod units;
