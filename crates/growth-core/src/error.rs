//! 错误定义模块

use thiserror::Error;

/// 生长评估系统统一错误类型
#[derive(Error, Debug)]
pub enum GrowthError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("数据解析错误: {0}")]
    Parse(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 生长评估系统统一结果类型
pub type Result<T> = std::result::Result<T, GrowthError>;
