use serde::Serialize;
use ts_rs::TS;

use super::entities::Course;
use crate::models::instructors::entities::Instructor;
use crate::models::students::{entities::Student, responses::StudentNameResponse};

// 课程详情响应，字段名沿用对外约定的带空格写法
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct CourseDetailResponse {
    #[serde(rename = "Course Name")]
    pub course_name: String,
    #[serde(rename = "Instructor name")]
    pub instructor_name: String,
    #[serde(rename = "student info")]
    pub student_info: CourseStudentInfo,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct CourseStudentInfo {
    #[serde(rename = "number of students")]
    pub number_of_students: usize,
    pub students: Vec<StudentNameResponse>,
}

impl CourseDetailResponse {
    /// 课程未关联教师时使用的占位名
    pub const UNASSIGNED_INSTRUCTOR: &'static str = "Unassigned";

    pub fn new(course: &Course, instructor: Option<&Instructor>, students: &[Student]) -> Self {
        let students = StudentNameResponse::from_students(students);

        Self {
            course_name: course.name.clone(),
            instructor_name: instructor
                .map(Instructor::display_name)
                .unwrap_or_else(|| Self::UNASSIGNED_INSTRUCTOR.to_string()),
            student_info: CourseStudentInfo {
                number_of_students: students.len(),
                students,
            },
        }
    }
}
