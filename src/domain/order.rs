// ==========================================
// 办公室披萨订购协调系统 - 订单行实体
// ==========================================
// 职责: 引擎的输入快照, 已由外部协作方过滤到有效口味/有效用户
// ==========================================

use crate::domain::types::FlavorCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 订单行 (一个用户对一种口味的若干切片)
///
/// 快照输入, 引擎运行期间不可变。`quantity` 个切片会在
/// Materializer 中展开为独立的 Slice 记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// 订单行 ID (编号结果以此为键, 全局唯一)
    pub line_item_id: i64,

    /// 所属订单 ID
    pub order_id: i64,

    /// 口味 ID
    pub flavor_id: i64,

    /// 口味名称
    pub flavor_name: String,

    /// 口味类别 (咸/甜)
    pub category: FlavorCategory,

    /// 切片数量
    pub quantity: u32,

    /// 下单用户 ID
    pub user_id: i64,

    /// 下单用户所属部门 (自由文本标签, 按标记串匹配)
    pub sector: String,

    /// 下单时间
    pub ordered_at: DateTime<Utc>,
}

impl OrderLine {
    /// 规范输入顺序的排序键: (下单时间, 订单 ID, 订单行 ID)
    ///
    /// 这一顺序是下游全部确定性的唯一来源, 预览与付款报告
    /// 两个调用方必须对同一快照得到同一顺序。
    pub fn canonical_key(&self) -> (DateTime<Utc>, i64, i64) {
        (self.ordered_at, self.order_id, self.line_item_id)
    }
}

/// 将订单行快照排成规范顺序 (稳定排序)
pub fn sort_canonical(lines: &mut [OrderLine]) {
    lines.sort_by_key(|l| l.canonical_key());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn line(line_item_id: i64, order_id: i64, secs: i64) -> OrderLine {
        OrderLine {
            line_item_id,
            order_id,
            flavor_id: 1,
            flavor_name: "Cheese".to_string(),
            category: FlavorCategory::Savory,
            quantity: 1,
            user_id: 10,
            sector: "STI".to_string(),
            ordered_at: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_canonical_order() {
        // 时间相同 → 按订单 ID, 再按行 ID
        let mut lines = vec![line(3, 2, 100), line(2, 1, 100), line(1, 1, 50)];
        sort_canonical(&mut lines);
        let ids: Vec<i64> = lines.iter().map(|l| l.line_item_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
