use actix_web::{Error, HttpRequest, HttpResponse, error::InternalError, error::QueryPayloadError};
use tracing::debug;

use crate::models::MessageResponse;

/// 查询参数解析失败时返回 400 JSON
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Rejecting query string '{}': {}", req.query_string(), err);
    let body = MessageResponse::new(format!("Invalid query parameters: {err}"));
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use actix_web::{body::to_bytes, http::StatusCode, test::TestRequest, web};

    use super::*;

    #[actix_web::test]
    async fn test_query_error_becomes_bad_request() {
        let err = web::Query::<HashMap<String, i32>>::from_query("credits=many").unwrap_err();
        let req = TestRequest::get().uri("/?credits=many").to_http_request();

        let resp = query_error_handler(err, &req).error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let body: MessageResponse = serde_json::from_slice(&body).unwrap();
        assert!(body.message.starts_with("Invalid query parameters"));
    }
}
