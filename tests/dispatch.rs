//! In-process dispatch tests for the hoststats MCP server
//!
//! These exercise the public library surface end to end: catalog discovery,
//! argument extraction, collector invocation, and the response envelope.
//! No network access or external processes are required.

use hoststats_mcp::types::{CpuInfo, MemoryInfo};
use hoststats_mcp::{DispatchError, HostStatsMcpServer};
use rmcp::model::{CallToolResult, RawContent};
use serde_json::{json, Value};

/// Extract the JSON text payload from a success envelope.
fn payload_text(result: &CallToolResult) -> &str {
    result
        .content
        .iter()
        .find_map(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
        .expect("tool returned no text content")
}

#[tokio::test]
async fn memory_payload_round_trips() {
    let server = HostStatsMcpServer::new();
    let result = server
        .call_tool("get_memory_info", json!({}))
        .await
        .unwrap();

    let raw: Value = serde_json::from_str(payload_text(&result)).unwrap();
    let info: MemoryInfo = serde_json::from_value(raw.clone()).unwrap();

    assert!(info.total_bytes > 0);
    assert!(info.used_bytes <= info.total_bytes);
    assert!((0.0..=100.0).contains(&info.used_percent));

    // No field loss: re-serializing reproduces the payload exactly
    assert_eq!(serde_json::to_value(&info).unwrap(), raw);
}

#[tokio::test]
async fn cpu_info_reports_cores_and_bounded_usage() {
    let server = HostStatsMcpServer::new();
    let result = server.call_tool("get_cpu_info", json!({})).await.unwrap();

    let info: CpuInfo = serde_json::from_str(payload_text(&result)).unwrap();
    assert!(info.cpu_cores >= 1);
    assert!((0.0..=100.0).contains(&info.cpu_percent));
}

#[tokio::test]
async fn extra_arguments_do_not_change_the_outcome() {
    let server = HostStatsMcpServer::new();

    let plain = server
        .call_tool("get_memory_info", json!({}))
        .await
        .unwrap();
    let with_extras = server
        .call_tool("get_memory_info", json!({ "verbose": true, "depth": 3 }))
        .await
        .unwrap();

    let plain_info: MemoryInfo = serde_json::from_str(payload_text(&plain)).unwrap();
    let extras_info: MemoryInfo = serde_json::from_str(payload_text(&with_extras)).unwrap();
    assert_eq!(plain_info.total_bytes, extras_info.total_bytes);
}

#[tokio::test]
async fn unknown_tool_is_rejected() {
    let server = HostStatsMcpServer::new();
    let err = server
        .call_tool("bogus_tool", json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::ToolNotFound(_)));
    assert!(err.to_string().contains("bogus_tool"));
}

#[tokio::test]
async fn unreadable_disk_path_fails_with_attribution() {
    let server = HostStatsMcpServer::new();
    let err = server
        .call_tool("get_disk_usage", json!({ "path": "/nonexistent" }))
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("get_disk_usage"));
    assert!(message.contains("/nonexistent"));
}

#[tokio::test]
async fn discovery_and_dispatch_agree_for_every_tool() {
    let server = HostStatsMcpServer::new();
    let tools = server.list_tools();
    assert_eq!(tools.len(), 5);

    // Every discovered tool resolves; a failed request must not poison the
    // next one.
    for tool in &tools {
        let result = server.call_tool(tool.name.as_ref(), json!({})).await;
        assert!(
            !matches!(result, Err(DispatchError::ToolNotFound(_))),
            "discovered tool {} failed to resolve",
            tool.name
        );
    }

    let after = server
        .call_tool("get_memory_info", json!({}))
        .await
        .unwrap();
    assert!(!after.content.is_empty());
}
