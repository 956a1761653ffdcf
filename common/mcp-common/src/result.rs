//! `CallToolResult` builders

use rmcp::model::{CallToolResult, Content, RawContent};
use serde::Serialize;

use crate::error::{McpResult, ResultExt};

/// Pretty-printed JSON body as a single text content item
pub fn json_success<T: Serialize>(data: &T) -> McpResult<CallToolResult> {
    let json = serde_json::to_string_pretty(data).to_mcp_err()?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Text of the first text content item, if any
pub fn first_text(result: &CallToolResult) -> Option<&str> {
    result.content.iter().find_map(|content| match &content.raw {
        RawContent::Text(text) => Some(text.text.as_str()),
        _ => None,
    })
}
