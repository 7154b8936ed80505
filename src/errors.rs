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
macro_rules! define_ledger_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum LedgerError {
            $($variant(String),)*
        }

        impl LedgerError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(LedgerError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(LedgerError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(LedgerError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl LedgerError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        LedgerError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_ledger_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Conflict("E006", "Constraint Conflict"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    Token("E009", "Token Error"),
    Export("E010", "Export Error"),
}

impl LedgerError {
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

    /// 将 SeaORM 错误按约束类型归类
    ///
    /// 唯一约束与外键约束冲突归为 `Conflict`，其余为 `DatabaseOperation`。
    /// 驱动返回的细节只保留在错误内部用于日志，不直接作为响应消息。
    pub fn from_db(context: &str, err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                LedgerError::conflict(format!("{context}: duplicate value ({detail})"))
            }
            Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(detail)) => {
                LedgerError::conflict(format!("{context}: related record constraint ({detail})"))
            }
            // SQLite 以扩展码 1811 报告的外键失败，sql_err() 不识别
            _ if err.to_string().contains("FOREIGN KEY constraint failed") => {
                LedgerError::conflict(format!("{context}: related record constraint ({err})"))
            }
            _ => LedgerError::database_operation(format!("{context}: {err}")),
        }
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LedgerError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for LedgerError {
    fn from(err: sea_orm::DbErr) -> Self {
        LedgerError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Export(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for LedgerError {
    fn from(err: chrono::ParseError) -> Self {
        LedgerError::DateParse(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for LedgerError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        LedgerError::Token(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for LedgerError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        LedgerError::Export(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::database_config("test").code(), "E001");
        assert_eq!(LedgerError::validation("test").code(), "E004");
        assert_eq!(LedgerError::not_found("test").code(), "E005");
        assert_eq!(LedgerError::conflict("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            LedgerError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            LedgerError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = LedgerError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = LedgerError::not_found("Course 7");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Course 7"));
    }

    #[test]
    fn test_plain_db_error_is_operation_error() {
        let err = LedgerError::from_db("查询课程失败", sea_orm::DbErr::Custom("boom".into()));
        assert!(matches!(err, LedgerError::DatabaseOperation(_)));
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn test_foreign_key_failure_text_is_conflict() {
        let err = LedgerError::from_db(
            "删除课程失败",
            sea_orm::DbErr::Custom(
                "error returned from database: (code: 1811) FOREIGN KEY constraint failed".into(),
            ),
        );
        assert!(matches!(err, LedgerError::Conflict(_)));
    }
}
