//! Server initialization utilities

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging for the server.
///
/// Logs go to stderr (stdout is reserved for the MCP protocol) with:
/// - Formatted output without ANSI colors
/// - Environment-based filtering via `RUST_LOG`
/// - Default log level of `info` for this crate
///
/// Set `LOG_FORMAT=json` for structured JSON output (useful for log
/// aggregation). Default is human-readable text output.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("hoststats_mcp=info".parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}
