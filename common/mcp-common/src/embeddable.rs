//! In-process tool execution
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without a
//! stdio transport in between. Integration tests drive servers through it.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments did not deserialize into the tool's parameter type
    #[error("invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    /// The tool ran and returned an MCP error
    #[error("tool error {code}: {message}")]
    Tool { code: i32, message: String },
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::Tool {
            code: err.code.0,
            message: err.message.into_owned(),
        }
    }
}

pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// A server whose tools can be invoked by name with JSON arguments
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name used in MCP client configuration
    fn server_name(&self) -> &str;

    fn server_description(&self) -> Option<&str> {
        None
    }

    fn server_version(&self) -> Option<&str> {
        None
    }

    /// Tool definitions with their input schemas
    fn list_tools(&self) -> Vec<Tool>;

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;
}
