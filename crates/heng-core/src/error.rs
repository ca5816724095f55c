//! 统一错误类型定义.
//!
//! 所有 Heng crate 共用的错误类型, 支持跨模块传播.

use thiserror::Error;

/// Heng 统一错误类型
#[derive(Debug, Error)]
pub enum HengError {
    /// 无效参数
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 不支持的操作
    #[error("不支持的操作: {0}")]
    Unsupported(String),

    /// 无效数据 (损坏的码流等)
    #[error("无效数据: {0}")]
    InvalidData(String),

    /// 单帧频带计数达到上限 (畸形或恶意码流, 整帧应被丢弃)
    #[error("频带数达到上限: 已计数 {count}, 上限 {limit}")]
    BandOverflow { count: usize, limit: usize },

    /// 内部错误 (不应发生)
    #[error("内部错误: {0}")]
    Internal(String),
}

/// Heng 统一 Result 类型
pub type HengResult<T> = Result<T, HengError>;
