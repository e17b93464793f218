//! Error types for tool dispatch

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::collect::CollectError;

/// Errors surfaced by the in-process dispatch surface
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The request named a tool absent from the catalog
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// The argument value was not a JSON object
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),

    /// The underlying OS metric read failed
    #[error("{0}")]
    CollectionFailed(String),
}

impl From<McpError> for DispatchError {
    fn from(err: McpError) -> Self {
        DispatchError::CollectionFailed(err.message.to_string())
    }
}

/// Wrap a collector failure in the wire error shape, attributing the
/// underlying cause to the tool that failed.
pub fn collection_failed(tool: &str, err: CollectError) -> McpError {
    tracing::warn!(tool, error = %err, "collection failed");
    McpError::internal_error(format!("failed to collect {tool}: {err}"), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_failed_names_the_tool() {
        let err = collection_failed(
            "get_network_stats",
            CollectError::Unavailable("network interface counters"),
        );
        assert!(err.message.contains("get_network_stats"));
        assert!(err.message.contains("network interface counters"));
    }

    #[test]
    fn test_mcp_error_converts_to_collection_failed() {
        let err = McpError::internal_error("failed to collect get_disk_usage: boom", None);
        let dispatch_err = DispatchError::from(err);
        assert!(matches!(
            dispatch_err,
            DispatchError::CollectionFailed(msg) if msg.contains("get_disk_usage")
        ));
    }
}
