// 课程
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    // 授课教师ID，可能未设置
    pub instructor_id: Option<i32>,
    // 学分
    pub credits: Option<i32>,
}
