use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::students::requests::StudentQueryParams;
use crate::services::StudentService;

// 懒加载的全局 STUDENT_SERVICE 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// HTTP处理程序
// 以键值对读取查询串，重复的 order 参数不视为错误
pub async fn list_students(
    req: HttpRequest,
    query: web::Query<Vec<(String, String)>>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .list_students(&req, StudentQueryParams::from_pairs(query.into_inner()))
        .await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/students")
            // 可选 ?order=last_name|gpa
            .service(web::resource("").route(web::get().to(list_students))),
    );
}
