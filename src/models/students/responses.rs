//! 学生序列化
//!
//! 完整表示输出 `{id, first_name, last_name, year, gpa}`，
//! 姓名表示只输出 `{first_name, last_name}`，嵌入课程详情时使用。

use serde::Serialize;
use ts_rs::TS;

use super::entities::Student;

// 学生完整信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub year: Option<i32>,
    pub gpa: Option<f64>,
}

impl From<&Student> for StudentResponse {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            year: student.year,
            gpa: student.gpa,
        }
    }
}

impl StudentResponse {
    /// 按输入顺序序列化学生列表
    pub fn from_students(students: &[Student]) -> Vec<Self> {
        students.iter().map(Self::from).collect()
    }
}

// 学生姓名
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentNameResponse {
    pub first_name: String,
    pub last_name: String,
}

impl From<&Student> for StudentNameResponse {
    fn from(student: &Student) -> Self {
        Self {
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
        }
    }
}

impl StudentNameResponse {
    pub fn from_students(students: &[Student]) -> Vec<Self> {
        students.iter().map(Self::from).collect()
    }
}
