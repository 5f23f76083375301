//! Version and build metadata embedded by `build.rs`

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// ISO 8601 compile time, or "unknown" outside a cargo build
pub const BUILD_TIMESTAMP: &str = match option_env!("TDEE_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Build counter from `build_number.txt`; 0 when absent or unparsable
pub fn build_number() -> u64 {
    parse_build_number(option_env!("TDEE_BUILD_NUMBER"))
}

fn parse_build_number(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// Banner for stderr; stdout belongs to the MCP transport
pub fn print_startup_banner() {
    eprintln!("===============================================");
    eprintln!("  TDEE Calculator");
    eprintln!("  Version: {} | Build: {}", VERSION, build_number());
    eprintln!("  Compiled: {}", BUILD_TIMESTAMP);
    eprintln!("===============================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_number() {
        assert_eq!(parse_build_number(Some("42")), 42);
        assert_eq!(parse_build_number(Some("4x2")), 0);
        assert_eq!(parse_build_number(Some("")), 0);
        assert_eq!(parse_build_number(None), 0);
    }
}
