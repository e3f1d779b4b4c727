// Request/response bodies for the HTTP API

use serde::{Deserialize, Serialize};

/// Body of POST /api/consultation
#[derive(Debug, Clone, Deserialize)]
pub struct ConsultationRequest {
    pub prompt: String,
}

/// Body of GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// JSON body returned for recovered rejections
#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    pub code: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consultation_request_deserialization() {
        let json = r#"{"prompt":"How do I price a subscription product?"}"#;
        let request: ConsultationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.prompt, "How do I price a subscription product?");
    }

    #[test]
    fn test_consultation_request_missing_prompt_fails() {
        let json = r#"{"question":"wrong field"}"#;
        let result = serde_json::from_str::<ConsultationRequest>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse::ok();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "ok");
    }

    #[test]
    fn test_error_message_serialization() {
        let error = ErrorMessage {
            code: 401,
            message: "unauthorized".to_string(),
        };
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["code"], 401);
        assert_eq!(value["message"], "unauthorized");
    }
}
