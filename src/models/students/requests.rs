use serde::Deserialize;
use std::fmt;
use ts_rs::TS;

// 学生列表查询参数（来自HTTP请求）
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentQueryParams {
    pub order: Option<String>,
}

impl StudentQueryParams {
    pub const ORDER: &'static str = "order";

    /// 从原始查询键值对构建，重复的 order 只取第一个
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            order: pairs
                .into_iter()
                .find(|(key, _)| key == Self::ORDER)
                .map(|(_, value)| value),
        }
    }

    pub fn order(&self) -> StudentOrder {
        StudentOrder::from_param(self.order.as_deref())
    }
}

// 学生列表排序方式（用于存储层）
//
// 未识别的取值不报错，回退到数据库默认顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentOrder {
    LastName,
    Gpa,
    Default,
}

impl StudentOrder {
    pub const LAST_NAME: &'static str = "last_name";
    pub const GPA: &'static str = "gpa";

    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some(Self::LAST_NAME) => StudentOrder::LastName,
            Some(Self::GPA) => StudentOrder::Gpa,
            _ => StudentOrder::Default,
        }
    }
}

impl fmt::Display for StudentOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentOrder::LastName => write!(f, "{}", Self::LAST_NAME),
            StudentOrder::Gpa => write!(f, "{}", Self::GPA),
            StudentOrder::Default => write!(f, "default"),
        }
    }
}
