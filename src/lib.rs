//! Host Telemetry MCP Library
//!
//! Cross-platform host telemetry tools via MCP.
//! Reads host identity, CPU usage, memory, disk usage, and aggregate network
//! counters, and serves them as schema-described tools over stdio.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use hoststats_mcp::HostStatsMcpServer;
//!
//! let server = HostStatsMcpServer::new();
//! let tools = server.list_tools();
//! let result = server.call_tool("get_memory_info", serde_json::json!({})).await?;
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `hoststats-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "hoststats": { "command": "./hoststats-mcp" } } }
//! ```

pub mod collect;
pub mod error;
pub mod init;
pub mod params;
pub mod result;
pub mod server;
pub mod types;

// Re-export main server type
pub use server::HostStatsMcpServer;

// Re-export parameter types for direct API usage
pub use params::{default_disk_path, DiskUsageParams};

pub use error::DispatchError;
pub use init::init_tracing;
