use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::{
    courses::entities::Course,
    instructors::entities::Instructor,
    students::{entities::Student, requests::StudentOrder},
};

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 按指定方式排序列出全部学生
    async fn list_students(&self, order: StudentOrder) -> Result<Vec<Student>>;

    /// 课程管理方法
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i32) -> Result<Option<Course>>;
    // 列出选修该课程的学生，每条选课记录对应一项
    async fn list_course_students(&self, course_id: i32) -> Result<Vec<Student>>;

    /// 教师管理方法
    // 通过ID获取教师信息
    async fn get_instructor_by_id(&self, instructor_id: i32) -> Result<Option<Instructor>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let config = AppConfig::get();
    let storage = sea_orm_storage::SeaOrmStorage::connect(&config.database).await?;
    Ok(Arc::new(storage))
}
