// 学生
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    // 入学年份
    pub year: Option<i32>,
    pub gpa: Option<f64>,
}
