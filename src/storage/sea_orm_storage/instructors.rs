//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::instructors::Entity as Instructors;
use crate::errors::{RegistrarError, Result};
use crate::models::instructors::entities::Instructor;
use sea_orm::EntityTrait;

impl SeaOrmStorage {
    /// 通过 ID 获取教师
    pub async fn get_instructor_by_id_impl(&self, instructor_id: i32) -> Result<Option<Instructor>> {
        let result = Instructors::find_by_id(instructor_id)
            .one(&self.db)
            .await
            .map_err(|e| RegistrarError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_instructor()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::memory_storage;

    #[actix_web::test]
    async fn test_get_instructor_by_id() {
        let storage = memory_storage().await;
        let id = storage.seed_instructor("Ada", "Lovelace").await;

        let instructor = storage.get_instructor_by_id_impl(id).await.unwrap().unwrap();
        assert_eq!(instructor.display_name(), "Ada Lovelace");
        assert_eq!(
            instructor.hire_date,
            chrono::NaiveDate::from_ymd_opt(2020, 9, 1)
        );

        assert!(storage.get_instructor_by_id_impl(id + 1).await.unwrap().is_none());
    }
}
