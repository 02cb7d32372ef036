//! Response envelope of versioned endpoints.

use serde::Deserialize;

/// `{"status": "success", "data": ...}` or
/// `{"status": "bad_request" | "server_error", "message": ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// The payload of a successful response.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        if self.is_success() {
            self.data
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_yields_data() {
        let response: ApiResponse<Vec<String>> =
            serde_json::from_str(r#"{"status":"success","data":["0x1"]}"#).unwrap();
        assert_eq!(response.into_data(), Some(vec!["0x1".to_string()]));
    }

    #[test]
    fn failure_status_yields_nothing() {
        let response: ApiResponse<Vec<String>> =
            serde_json::from_str(r#"{"status":"server_error","message":"boom"}"#).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.message.as_deref(), Some("boom"));
        assert_eq!(response.into_data(), None);
    }

    #[test]
    fn failure_status_ignores_stray_data() {
        let response: ApiResponse<u32> =
            serde_json::from_str(r#"{"status":"bad_request","data":1}"#).unwrap();
        assert_eq!(response.into_data(), None);
    }
}
