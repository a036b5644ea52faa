// 教师
#[derive(Debug, Clone, PartialEq)]
pub struct Instructor {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    // 入职日期
    pub hire_date: Option<chrono::NaiveDate>,
}

impl Instructor {
    /// 展示用姓名，格式为 "<first_name> <last_name>"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
