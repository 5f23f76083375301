//! TDEE Calculator
//!
//! An MCP server for BMR, TDEE and macro calculations.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use tdee::build_info;
use tdee::config::Config;
use tdee::mcp::TdeeService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Defaults and log directive come from TDEE_* env vars
    let config = Config::from_env()?;

    // Logging goes to stderr so it does not interfere with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Banner and effective defaults, also on stderr
    build_info::print_startup_banner();
    tracing::info!(
        "Defaults: goal={} diet_style={}",
        config.default_goal.as_str(),
        config.default_diet_style.as_str()
    );
    eprintln!("Starting MCP server on stdio...");

    let service = TdeeService::new(config);

    // Serve over stdin/stdout until the client disconnects
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
