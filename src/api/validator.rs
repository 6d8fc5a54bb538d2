// ==========================================
// 办公室披萨订购协调系统 - 入口校验器
// ==========================================
// 职责: 在进入引擎前校验订单行快照
// 规则: 行 ID 全局唯一; 数量在 1..=8 (历史入口约束)
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::order::OrderLine;
use crate::MAX_SLICES_PER_LINE;
use std::collections::HashSet;
use tracing::warn;

// ==========================================
// OrderLineValidator - 入口校验器
// ==========================================
pub struct OrderLineValidator {
    // 无状态校验器
}

impl OrderLineValidator {
    pub fn new() -> Self {
        Self {}
    }

    /// 校验订单行快照
    ///
    /// # 返回
    /// - `Ok(())`: 快照有效
    /// - `Err(ApiError::DuplicateLineItem)`: 行 ID 重复
    /// - `Err(ApiError::QuantityOutOfRange)`: 数量为 0 或超出单行上限
    pub fn validate(&self, lines: &[OrderLine]) -> ApiResult<()> {
        let mut seen_ids: HashSet<i64> = HashSet::with_capacity(lines.len());

        for line in lines {
            if !seen_ids.insert(line.line_item_id) {
                warn!(line_item_id = line.line_item_id, "订单行 ID 重复");
                return Err(ApiError::DuplicateLineItem(line.line_item_id));
            }

            if line.quantity == 0 || line.quantity > MAX_SLICES_PER_LINE {
                warn!(
                    line_item_id = line.line_item_id,
                    quantity = line.quantity,
                    "订单行数量越界"
                );
                return Err(ApiError::QuantityOutOfRange {
                    line_item_id: line.line_item_id,
                    quantity: line.quantity,
                });
            }
        }

        Ok(())
    }
}

impl Default for OrderLineValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::FlavorCategory;
    use chrono::{TimeZone, Utc};

    fn line(line_item_id: i64, quantity: u32) -> OrderLine {
        OrderLine {
            line_item_id,
            order_id: 1,
            flavor_id: 1,
            flavor_name: "Cheese".to_string(),
            category: FlavorCategory::Savory,
            quantity,
            user_id: 1,
            sector: "STI".to_string(),
            ordered_at: Utc.timestamp_opt(1_000, 0).unwrap(),
        }
    }

    #[test]
    fn test_valid_snapshot() {
        let v = OrderLineValidator::new();
        assert!(v.validate(&[line(1, 1), line(2, 8)]).is_ok());
        assert!(v.validate(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_line_id() {
        let v = OrderLineValidator::new();
        match v.validate(&[line(1, 2), line(1, 3)]) {
            Err(ApiError::DuplicateLineItem(id)) => assert_eq!(id, 1),
            _ => panic!("Expected DuplicateLineItem"),
        }
    }

    #[test]
    fn test_quantity_bounds() {
        let v = OrderLineValidator::new();
        assert!(matches!(
            v.validate(&[line(1, 0)]),
            Err(ApiError::QuantityOutOfRange { .. })
        ));
        assert!(matches!(
            v.validate(&[line(1, 9)]),
            Err(ApiError::QuantityOutOfRange { .. })
        ));
    }
}
