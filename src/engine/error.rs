// ==========================================
// 办公室披萨订购协调系统 - 引擎层错误类型
// ==========================================
// 职责: 聚合运行中的数据完整性错误
// 注: 覆写引用不存在/已消耗的 ID 不是错误 (尽力而为的提示),
//     分解后切片数不守恒属编程错误, 由测试断言而非运行时处理
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 订单行数量非正 - 数据完整性违规, 整次运行失败
    #[error("数据完整性违规: 订单行 {line_item_id} 的数量为 {quantity}")]
    InvalidQuantity { line_item_id: i64, quantity: u32 },

    /// 引擎配置无效 (部门标记串为空或互相包含)
    #[error("引擎配置无效: {0}")]
    InvalidConfig(String),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
