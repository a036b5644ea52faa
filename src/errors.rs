//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_registrar_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum RegistrarError {
            $($variant(String),)*
        }

        impl RegistrarError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(RegistrarError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(RegistrarError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(RegistrarError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl RegistrarError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        RegistrarError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_registrar_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
}

impl RegistrarError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for RegistrarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.format_simple())
    }
}

impl std::error::Error for RegistrarError {}

impl From<sea_orm::DbErr> for RegistrarError {
    fn from(err: sea_orm::DbErr) -> Self {
        RegistrarError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RegistrarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RegistrarError::database_config("test").code(), "E001");
        assert_eq!(RegistrarError::database_connection("test").code(), "E002");
        assert_eq!(RegistrarError::database_operation("test").code(), "E003");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            RegistrarError::database_connection("test").error_type(),
            "Database Connection Error"
        );
    }

    #[test]
    fn test_db_err_conversion() {
        let err: RegistrarError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn test_display() {
        let err = RegistrarError::database_config("unknown scheme");
        let formatted = err.to_string();
        assert!(formatted.starts_with("[E001]"));
        assert!(formatted.contains("Database Configuration Error"));
        assert!(formatted.contains("unknown scheme"));
    }
}
