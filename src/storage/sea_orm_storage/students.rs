//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{Column, Entity as Students};
use crate::errors::{RegistrarError, Result};
use crate::models::students::{entities::Student, requests::StudentOrder};
use sea_orm::{EntityTrait, QueryOrder};

impl SeaOrmStorage {
    /// 列出全部学生
    ///
    /// 指定排序字段时按该字段升序，相同值再按主键排序；否则保持数据库默认顺序。
    pub async fn list_students_impl(&self, order: StudentOrder) -> Result<Vec<Student>> {
        let mut select = Students::find();

        select = match order {
            StudentOrder::LastName => select
                .order_by_asc(Column::LastName)
                .order_by_asc(Column::Id),
            StudentOrder::Gpa => select.order_by_asc(Column::Gpa).order_by_asc(Column::Id),
            StudentOrder::Default => select,
        };

        let students = select
            .all(&self.db)
            .await
            .map_err(|e| RegistrarError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::memory_storage;
    use crate::models::students::requests::StudentOrder;

    #[actix_web::test]
    async fn test_list_students_orders() {
        let storage = memory_storage().await;
        storage.seed_student("Grace", "Hopper", Some(2022), Some(3.9)).await;
        storage.seed_student("Alan", "Turing", None, Some(3.1)).await;
        storage.seed_student("Edsger", "Dijkstra", Some(2023), Some(3.5)).await;

        let by_name = storage.list_students_impl(StudentOrder::LastName).await.unwrap();
        let names: Vec<&str> = by_name.iter().map(|s| s.last_name.as_str()).collect();
        assert_eq!(names, ["Dijkstra", "Hopper", "Turing"]);

        let by_gpa = storage.list_students_impl(StudentOrder::Gpa).await.unwrap();
        let gpas: Vec<f64> = by_gpa.iter().filter_map(|s| s.gpa).collect();
        assert_eq!(gpas, [3.1, 3.5, 3.9]);

        let default = storage.list_students_impl(StudentOrder::Default).await.unwrap();
        let mut ids: Vec<i32> = default.iter().map(|s| s.id).collect();
        ids.sort();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[actix_web::test]
    async fn test_list_students_empty() {
        let storage = memory_storage().await;
        let students = storage.list_students_impl(StudentOrder::Default).await.unwrap();
        assert!(students.is_empty());
    }
}
