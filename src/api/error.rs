// ==========================================
// 办公室披萨订购协调系统 - API 层错误类型
// ==========================================
// 职责: 定义 API 层错误类型, 转换引擎错误为面向调用方的错误
// 所有错误信息必须包含显式原因
// ==========================================

use crate::engine::error::EngineError;
use crate::MAX_SLICES_PER_LINE;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 数据完整性错误
    // ==========================================
    /// 订单行数量越界 (有效区间 1..=8)
    #[error("数量越界: line_item_id={line_item_id}, quantity={quantity} (有效区间 1..={max})", max = MAX_SLICES_PER_LINE)]
    QuantityOutOfRange { line_item_id: i64, quantity: u32 },

    /// 订单行 ID 重复 (编号结果以行 ID 为键, 必须全局唯一)
    #[error("订单行重复: line_item_id={0}")]
    DuplicateLineItem(i64),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置无效: {0}")]
    InvalidConfig(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidQuantity {
                line_item_id,
                quantity,
            } => ApiError::QuantityOutOfRange {
                line_item_id,
                quantity,
            },
            EngineError::InvalidConfig(msg) => ApiError::InvalidConfig(msg),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
