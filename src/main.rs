//! Host Telemetry MCP Server
//!
//! Cross-platform host telemetry tools via MCP.
//! Reads host identity, CPU usage, memory, disk usage, and aggregate network
//! counters.
//!
//! # Usage
//!
//! Run directly: `hoststats-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "hoststats": { "command": "./hoststats-mcp" } } }
//! ```

use hoststats_mcp::{init_tracing, HostStatsMcpServer};
use rmcp::ServiceExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    tracing::info!("Starting hoststats MCP server");

    let server = HostStatsMcpServer::new();
    let service = server.serve(rmcp::transport::stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
