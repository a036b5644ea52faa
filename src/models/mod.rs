pub mod common;
pub mod courses;
pub mod instructors;
pub mod students;

pub use common::MessageResponse;

// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
