//! MCP server implementation for host telemetry

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde_json::Value;
use sysinfo::System;
use tokio::sync::Mutex;

use crate::collect;
use crate::collect::cpu::CPU_SAMPLE_WINDOW;
use crate::error::{collection_failed, DispatchError};
use crate::params::DiskUsageParams;
use crate::result::json_success;

/// The main host telemetry MCP server
#[derive(Clone)]
pub struct HostStatsMcpServer {
    system: Arc<Mutex<System>>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl HostStatsMcpServer {
    pub fn new() -> Self {
        Self {
            system: Arc::new(Mutex::new(System::new())),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Get host information (hostname, OS, platform, kernel version, boot time)"
    )]
    async fn get_host_info(&self) -> Result<CallToolResult, McpError> {
        let info = collect::host::host_info().map_err(|e| collection_failed("get_host_info", e))?;
        json_success(&info)
    }

    #[tool(description = "Get CPU usage percentage and logical core count")]
    async fn get_cpu_info(&self) -> Result<CallToolResult, McpError> {
        let mut sys = self.system.lock().await;
        sys.refresh_cpu_usage();
        tokio::time::sleep(CPU_SAMPLE_WINDOW).await;
        sys.refresh_cpu_usage();
        json_success(&collect::cpu::cpu_info(&sys))
    }

    #[tool(description = "Get memory usage (total, available, used, percent)")]
    async fn get_memory_info(&self) -> Result<CallToolResult, McpError> {
        let mut sys = self.system.lock().await;
        sys.refresh_memory();
        json_success(&collect::memory::memory_info(&sys))
    }

    #[tool(description = "Get disk usage for a filesystem path (default: / or C:)")]
    async fn get_disk_usage(
        &self,
        Parameters(params): Parameters<DiskUsageParams>,
    ) -> Result<CallToolResult, McpError> {
        let usage = collect::disk::disk_usage(&params.path)
            .map_err(|e| collection_failed("get_disk_usage", e))?;
        json_success(&usage)
    }

    #[tool(description = "Get aggregate network I/O statistics (bytes and packets sent/received)")]
    async fn get_network_stats(&self) -> Result<CallToolResult, McpError> {
        let stats = collect::network::network_stats()
            .map_err(|e| collection_failed("get_network_stats", e))?;
        json_success(&stats)
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for HostStatsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Host telemetry MCP server - provides tools for reading host \
                 identity, CPU usage, memory, disk usage, and aggregate network \
                 counters."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

impl Default for HostStatsMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// In-Process Dispatch
// ============================================================================

impl HostStatsMcpServer {
    /// All registered tools with their input schemas, in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Resolve `name` against the catalog and invoke the bound collector.
    ///
    /// Unknown names fail with [`DispatchError::ToolNotFound`] without
    /// touching any collector. `arguments` must be a JSON object; undeclared
    /// fields are ignored, and malformed declared fields degrade to their
    /// schema defaults.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<CallToolResult, DispatchError> {
        tracing::debug!(tool = name, "dispatching tool call");

        match name {
            "get_host_info" => self.get_host_info().await.map_err(Into::into),

            "get_cpu_info" => self.get_cpu_info().await.map_err(Into::into),

            "get_memory_info" => self.get_memory_info().await.map_err(Into::into),

            "get_disk_usage" => {
                let params: DiskUsageParams = serde_json::from_value(arguments)?;
                self.get_disk_usage(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "get_network_stats" => self.get_network_stats().await.map_err(Into::into),

            _ => Err(DispatchError::ToolNotFound(name.to_string())),
        }
    }
}
