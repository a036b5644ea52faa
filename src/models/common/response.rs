use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 仅包含 message 字段的响应体，用于 404 / 400 / 500
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "api.ts")]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub const COURSE_NOT_FOUND: &'static str = "Course Not Found!";
    pub const INTERNAL_SERVER_ERROR: &'static str = "Internal Server Error";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn course_not_found() -> Self {
        Self::new(Self::COURSE_NOT_FOUND)
    }

    pub fn internal_error() -> Self {
        Self::new(Self::INTERNAL_SERVER_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_not_found_body() {
        let body = serde_json::to_value(MessageResponse::course_not_found()).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Course Not Found!" }));
    }
}
