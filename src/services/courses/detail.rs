use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, warn};

use super::CourseService;
use crate::errors::Result;
use crate::models::{
    MessageResponse,
    courses::{entities::Course, responses::CourseDetailResponse},
    instructors::entities::Instructor,
};
use crate::storage::Storage;

pub async fn get_course_detail(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i32,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(MessageResponse::course_not_found()));
        }
        Err(e) => {
            error!("Failed to get course {course_id}: {e}");
            return Ok(HttpResponse::InternalServerError().json(MessageResponse::internal_error()));
        }
    };

    match build_course_detail(&storage, &course).await {
        Ok(detail) => Ok(HttpResponse::Ok().json(detail)),
        Err(e) => {
            error!("Failed to build detail for course {course_id}: {e}");
            Ok(HttpResponse::InternalServerError().json(MessageResponse::internal_error()))
        }
    }
}

/// 查询教师和选课学生并组装详情
async fn build_course_detail(
    storage: &Arc<dyn Storage>,
    course: &Course,
) -> Result<CourseDetailResponse> {
    let instructor = resolve_instructor(storage, course).await?;
    let students = storage.list_course_students(course.id).await?;

    Ok(CourseDetailResponse::new(
        course,
        instructor.as_ref(),
        &students,
    ))
}

/// 未设置或指向不存在的教师时返回 None，由响应层填充占位名
async fn resolve_instructor(
    storage: &Arc<dyn Storage>,
    course: &Course,
) -> Result<Option<Instructor>> {
    let Some(instructor_id) = course.instructor_id else {
        warn!("Course {} has no instructor assigned", course.id);
        return Ok(None);
    };

    let instructor = storage.get_instructor_by_id(instructor_id).await?;
    if instructor.is_none() {
        warn!(
            "Course {} references missing instructor {}",
            course.id, instructor_id
        );
    }
    Ok(instructor)
}
