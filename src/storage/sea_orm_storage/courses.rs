//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::Entity as Courses;
use crate::entity::student_course::Column as StudentCourseColumn;
use crate::entity::students::{Entity as Students, Relation as StudentRelation};
use crate::errors::{RegistrarError, Result};
use crate::models::{courses::entities::Course, students::entities::Student};
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

impl SeaOrmStorage {
    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i32) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| RegistrarError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 列出课程的选课学生，按选课记录顺序返回
    pub async fn list_course_students_impl(&self, course_id: i32) -> Result<Vec<Student>> {
        let students = Students::find()
            .join(JoinType::InnerJoin, StudentRelation::StudentCourse.def())
            .filter(StudentCourseColumn::CourseId.eq(course_id))
            .order_by_asc(StudentCourseColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                RegistrarError::database_operation(format!("查询课程学生列表失败: {e}"))
            })?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }
}
