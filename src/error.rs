//! 错误处理模块
//!
//! 连接、配置、校验类错误由本库产生；
//! 单次操作的驱动错误原样透传，不做转换

use thiserror::Error;

/// rat_quickmongo 错误类型
#[derive(Error, Debug)]
pub enum QuickMongoError {
    /// 数据库连接错误（创建客户端、连通性检查失败）
    #[error("{message}")]
    ConnectionError { message: String },

    /// 配置错误
    #[error("{message}")]
    ConfigError { message: String },

    /// 参数校验错误
    #[error("{field}: {message}")]
    ValidationError { field: String, message: String },

    /// 序列化错误
    #[error("{message}")]
    SerializationError { message: String },

    /// IO错误
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    /// 驱动返回的错误，原样透传
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),
}

/// rat_quickmongo 结果类型
pub type QuickMongoResult<T> = Result<T, QuickMongoError>;

impl QuickMongoError {
    /// 是否为驱动透传的错误
    pub fn is_driver_error(&self) -> bool {
        matches!(self, QuickMongoError::Driver(_))
    }
}

/// 快速构建错误的宏
///
/// ```ignore
/// quick_error!(connection, "连接失败");
/// quick_error!(config, format!("缺少配置: {}", key));
/// quick_error!(validation, "timezone_offset", "格式错误");
/// ```
#[macro_export]
macro_rules! quick_error {
    (connection, $msg:expr) => {
        $crate::error::QuickMongoError::ConnectionError {
            message: ($msg).to_string(),
        }
    };
    (config, $msg:expr) => {
        $crate::error::QuickMongoError::ConfigError {
            message: ($msg).to_string(),
        }
    };
    (validation, $field:expr, $msg:expr) => {
        $crate::error::QuickMongoError::ValidationError {
            field: ($field).to_string(),
            message: ($msg).to_string(),
        }
    };
    (serialization, $msg:expr) => {
        $crate::error::QuickMongoError::SerializationError {
            message: ($msg).to_string(),
        }
    };
}
