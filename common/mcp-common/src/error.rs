//! Conversions from domain errors into MCP error payloads

use rmcp::ErrorData as McpError;

pub type McpResult<T> = Result<T, McpError>;

/// Domain errors that know which MCP error code they map to
///
/// Servers implement this for their own error enums so tool bodies can use
/// [`ResultExt::to_mcp_err`] instead of a `map_err` closure at every call.
pub trait IntoMcpError {
    fn into_mcp_error(self) -> McpError;
}

impl IntoMcpError for serde_json::Error {
    fn into_mcp_error(self) -> McpError {
        internal_error(format!("JSON error: {}", self))
    }
}

pub trait ResultExt<T> {
    fn to_mcp_err(self) -> McpResult<T>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> McpResult<T> {
        self.map_err(IntoMcpError::into_mcp_error)
    }
}

/// Server-side failure the caller cannot fix
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Rejected tool arguments
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_error_codes() {
        assert_eq!(internal_error("boom").code, ErrorCode::INTERNAL_ERROR);
        assert_eq!(invalid_params("bad").code, ErrorCode::INVALID_PARAMS);
        assert_eq!(invalid_params("bad seed").message, "bad seed");
    }

    #[test]
    fn test_result_ext_maps_json_errors() {
        let parsed: Result<u32, serde_json::Error> = serde_json::from_str("not json");
        let err = parsed.to_mcp_err().unwrap_err();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.starts_with("JSON error:"));
    }
}
