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
macro_rules! define_siakad_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SiakadError {
            $($variant(String),)*
        }

        impl SiakadError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SiakadError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SiakadError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SiakadError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SiakadError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SiakadError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_siakad_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    DocumentGeneration("E006", "Document Generation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    StoragePluginNotFound("E010", "Storage Plugin Not Found"),
    DateParse("E011", "Date Parse Error"),
    ScopeMismatch("E012", "Scope Mismatch Error"),
}

impl SiakadError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SiakadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SiakadError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SiakadError {
    fn from(err: sea_orm::DbErr) -> Self {
        SiakadError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SiakadError {
    fn from(err: std::io::Error) -> Self {
        SiakadError::DocumentGeneration(err.to_string())
    }
}

impl From<serde_json::Error> for SiakadError {
    fn from(err: serde_json::Error) -> Self {
        SiakadError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SiakadError {
    fn from(err: chrono::ParseError) -> Self {
        SiakadError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SiakadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SiakadError::cache_connection("test").code(), "E001");
        assert_eq!(SiakadError::database_config("test").code(), "E003");
        assert_eq!(SiakadError::validation("test").code(), "E007");
        assert_eq!(SiakadError::scope_mismatch("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SiakadError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            SiakadError::document_generation("test").error_type(),
            "Document Generation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SiakadError::validation("Invalid NISN");
        assert_eq!(err.message(), "Invalid NISN");
    }

    #[test]
    fn test_format_simple() {
        let err = SiakadError::not_found("student missing");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("student missing"));
    }

    #[test]
    fn test_from_db_err() {
        let err: SiakadError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert_eq!(err.code(), "E005");
    }
}
