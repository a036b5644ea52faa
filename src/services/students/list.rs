use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, error};

use super::StudentService;
use crate::models::{
    MessageResponse,
    students::{requests::StudentQueryParams, responses::StudentResponse},
};

// 成功时返回 201 而非 200，这是对外接口的既定行为
pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    query: StudentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let order = query.order();

    debug!("Listing students, order: {}", order);

    match storage.list_students(order).await {
        Ok(students) => {
            Ok(HttpResponse::Created().json(StudentResponse::from_students(&students)))
        }
        Err(e) => {
            error!("Failed to retrieve student list: {e}");
            Ok(HttpResponse::InternalServerError().json(MessageResponse::internal_error()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{body::to_bytes, http::StatusCode, test::TestRequest};

    use super::*;
    use crate::services::testing::FailingStorage;

    #[actix_web::test]
    async fn test_storage_failure_maps_to_internal_error() {
        let service = StudentService::new(Arc::new(FailingStorage));
        let request = TestRequest::default().to_http_request();

        let resp = list_students(&service, &request, StudentQueryParams::default())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Internal Server Error" }));
    }
}
