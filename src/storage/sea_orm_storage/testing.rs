//! 测试辅助：内存 SQLite 存储及数据填充

use super::SeaOrmStorage;
use crate::config::DatabaseConfig;
use crate::entity::prelude::{
    CourseActiveModel, InstructorActiveModel, StudentActiveModel, StudentCourseActiveModel,
};
use sea_orm::{ActiveModelTrait, Set};

pub(crate) async fn memory_storage() -> SeaOrmStorage {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    SeaOrmStorage::connect(&config)
        .await
        .expect("in-memory database should be available")
}

impl SeaOrmStorage {
    pub(crate) async fn seed_student(
        &self,
        first_name: &str,
        last_name: &str,
        year: Option<i32>,
        gpa: Option<f64>,
    ) -> i32 {
        StudentActiveModel {
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            year: Set(year),
            gpa: Set(gpa),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("insert student")
        .id
    }

    pub(crate) async fn seed_instructor(&self, first_name: &str, last_name: &str) -> i32 {
        InstructorActiveModel {
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            hire_date: Set(chrono::NaiveDate::from_ymd_opt(2020, 9, 1)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("insert instructor")
        .id
    }

    pub(crate) async fn seed_course(&self, name: &str, instructor_id: Option<i32>) -> i32 {
        CourseActiveModel {
            name: Set(name.to_string()),
            instructor_id: Set(instructor_id),
            credits: Set(Some(3)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("insert course")
        .id
    }

    pub(crate) async fn seed_enrollment(&self, student_id: i32, course_id: i32, grade: Option<&str>) {
        StudentCourseActiveModel {
            student_id: Set(Some(student_id)),
            course_id: Set(Some(course_id)),
            grade: Set(grade.map(str::to_string)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("insert enrollment");
    }
}
