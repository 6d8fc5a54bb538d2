// ==========================================
// 办公室披萨订购协调系统 - 切片实体
// ==========================================
// 职责: 订单行展开后的最小单位 (1/8 张披萨)
// 一经物化即不可变; 顺序承载自源订单行
// ==========================================

use crate::domain::types::FlavorCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 单个切片
///
/// 同一订单行展开出的切片携带完全相同的元数据,
/// 仅凭其在序列中的位置区分。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    /// 来源订单行 ID
    pub line_item_id: i64,

    /// 口味 ID
    pub flavor_id: i64,

    /// 口味名称
    pub flavor_name: String,

    /// 口味类别
    pub category: FlavorCategory,

    /// 贡献用户 ID
    pub user_id: i64,

    /// 贡献用户所属部门标签
    pub sector: String,

    /// 下单时间
    pub ordered_at: DateTime<Utc>,
}
