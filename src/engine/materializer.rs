// ==========================================
// 办公室披萨订购协调系统 - 切片物化引擎
// ==========================================
// 职责: 将带数量的订单行展开为独立切片
// 输入: 规范顺序的订单行序列
// 输出: 切片序列 (保持输入顺序)
// ==========================================
// 纯展开, 无副作用; 数量为 0 的行视为数据完整性违规
// ==========================================

use crate::domain::order::OrderLine;
use crate::domain::slice::Slice;
use crate::engine::error::{EngineError, EngineResult};
use tracing::{debug, warn};

// ==========================================
// SliceMaterializer - 切片物化引擎
// ==========================================
pub struct SliceMaterializer {
    // 无状态引擎, 不需要注入依赖
}

impl SliceMaterializer {
    pub fn new() -> Self {
        Self {}
    }

    /// 展开订单行为切片序列
    ///
    /// 每行发出 `quantity` 条携带相同元数据的切片, 顺序与输入一致。
    ///
    /// # 参数
    /// - `lines`: 规范顺序的订单行
    ///
    /// # 返回
    /// - `Ok(Vec<Slice>)`: 展开后的切片
    /// - `Err(EngineError::InvalidQuantity)`: 存在数量为 0 的行, 整次运行失败
    pub fn materialize(&self, lines: &[OrderLine]) -> EngineResult<Vec<Slice>> {
        let mut slices = Vec::with_capacity(lines.iter().map(|l| l.quantity as usize).sum());

        for line in lines {
            if line.quantity == 0 {
                warn!(
                    line_item_id = line.line_item_id,
                    quantity = line.quantity,
                    "订单行数量非正, 拒绝整次运行"
                );
                return Err(EngineError::InvalidQuantity {
                    line_item_id: line.line_item_id,
                    quantity: line.quantity,
                });
            }

            for _ in 0..line.quantity {
                slices.push(Slice {
                    line_item_id: line.line_item_id,
                    flavor_id: line.flavor_id,
                    flavor_name: line.flavor_name.clone(),
                    category: line.category,
                    user_id: line.user_id,
                    sector: line.sector.clone(),
                    ordered_at: line.ordered_at,
                });
            }
        }

        debug!(
            lines_count = lines.len(),
            slices_count = slices.len(),
            "切片物化完成"
        );

        Ok(slices)
    }
}

impl Default for SliceMaterializer {
    fn default() -> Self {
        Self::new()
    }
}
