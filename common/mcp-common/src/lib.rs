//! Shared plumbing for the MCP servers in this workspace
//!
//! - [`init_tracing`]: stderr logging with env and config driven defaults
//! - [`json_success`]: serialize a tool response
//! - [`IntoMcpError`] / [`ResultExt`]: map domain errors onto MCP error codes
//! - [`EmbeddableMcp`]: call a server's tools in-process

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, IntoMcpError, McpResult, ResultExt};
pub use init::{init_tracing, LogFormat, TracingOptions};
pub use result::{first_text, json_success};

pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

pub use async_trait::async_trait;
