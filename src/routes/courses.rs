use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::MessageResponse;
use crate::services::CourseService;
use crate::utils::SafeCourseId;

// 懒加载的全局 COURSE_SERVICE 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn get_course_detail(
    req: HttpRequest,
    course_id: SafeCourseId,
) -> ActixResult<HttpResponse> {
    match course_id.0 {
        Some(course_id) => COURSE_SERVICE.get_course_detail(&req, course_id).await,
        // 超出 INTEGER 范围的 ID 不可能命中任何课程
        None => Ok(HttpResponse::NotFound().json(MessageResponse::course_not_found())),
    }
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/course_details")
            .service(web::resource("/{course_id}").route(web::get().to(get_course_detail))),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test, web};
    use serde_json::{Value, json};

    use super::*;
    use crate::storage::{
        Storage,
        sea_orm_storage::{SeaOrmStorage, testing::memory_storage},
    };

    async fn get_detail(storage: SeaOrmStorage, uri: &str) -> (StatusCode, Value) {
        let storage: Arc<dyn Storage> = Arc::new(storage);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_course_routes),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_course_detail() {
        let storage = memory_storage().await;
        let ada = storage.seed_instructor("Ada", "Lovelace").await;
        let course = storage.seed_course("Algorithms", Some(ada)).await;
        let alan = storage.seed_student("Alan", "Turing", Some(2023), Some(3.1)).await;
        let grace = storage.seed_student("Grace", "Hopper", Some(2022), Some(3.9)).await;
        storage.seed_enrollment(alan, course, Some("A")).await;
        storage.seed_enrollment(grace, course, None).await;

        let (status, body) = get_detail(storage, &format!("/api/course_details/{course}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "Course Name": "Algorithms",
                "Instructor name": "Ada Lovelace",
                "student info": {
                    "number of students": 2,
                    "students": [
                        { "first_name": "Alan", "last_name": "Turing" },
                        { "first_name": "Grace", "last_name": "Hopper" }
                    ]
                }
            })
        );
    }

    #[actix_web::test]
    async fn test_course_not_found() {
        let storage = memory_storage().await;
        let (status, body) = get_detail(storage, "/api/course_details/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Course Not Found!" }));
    }

    #[actix_web::test]
    async fn test_course_without_instructor_or_students() {
        let storage = memory_storage().await;
        let course = storage.seed_course("Independent Study", None).await;

        let (status, body) = get_detail(storage, &format!("/api/course_details/{course}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Instructor name"], "Unassigned");
        assert_eq!(body["student info"]["number of students"], 0);
        assert_eq!(body["student info"]["students"], json!([]));
    }

    #[actix_web::test]
    async fn test_student_count_matches_list() {
        let storage = memory_storage().await;
        let course = storage.seed_course("Compilers", None).await;
        for (first, last) in [("Niklaus", "Wirth"), ("John", "Backus"), ("Frances", "Allen")] {
            let id = storage.seed_student(first, last, None, None).await;
            storage.seed_enrollment(id, course, None).await;
        }

        let (_, body) = get_detail(storage, &format!("/api/course_details/{course}")).await;
        let info = &body["student info"];
        let students = info["students"].as_array().unwrap();
        assert_eq!(info["number of students"].as_u64().unwrap() as usize, students.len());
        assert_eq!(students.len(), 3);

        for student in students {
            let object = student.as_object().unwrap();
            assert_eq!(object.len(), 2);
            assert!(!object.contains_key("id"));
            assert!(!object.contains_key("year"));
            assert!(!object.contains_key("gpa"));
        }
    }

    #[actix_web::test]
    async fn test_course_id_beyond_integer_range_is_not_found() {
        for uri in [
            "/api/course_details/2147483648",
            "/api/course_details/99999999999",
        ] {
            let storage = memory_storage().await;
            let (status, body) = get_detail(storage, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body, json!({ "message": "Course Not Found!" }));
        }
    }

    #[actix_web::test]
    async fn test_malformed_course_id() {
        let storage = memory_storage().await;
        let (status, body) = get_detail(storage, "/api/course_details/algorithms").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Invalid course id: algorithms" }));
    }
}
