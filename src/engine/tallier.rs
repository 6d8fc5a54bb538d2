// ==========================================
// 办公室披萨订购协调系统 - 部门计数引擎
// ==========================================
// 职责: 统计每张完成披萨中两个部门贡献的切片数, 判定归属
// 输入: 完成披萨单元 (Whole | PairedHalf) + 部门覆写
// 输出: CompletedPizza (计数 + 归属, 未编号)
// ==========================================
// 匹配规则: 部门标签大小写无关地包含标记串即计数;
// 归属覆写无条件替换计算结果, 不与实际计数核对
// ==========================================

use crate::config::EngineConfig;
use crate::domain::pizza::{CompletedPizza, PizzaUnit, SectorTally};
use crate::domain::types::Winner;
use std::collections::BTreeMap;
use tracing::debug;

// ==========================================
// SectorTallier - 部门计数引擎
// ==========================================
pub struct SectorTallier {
    // 构造时统一转为大写, 每片只做一次包含判断
    marker_a: String,
    marker_b: String,
}

impl SectorTallier {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            marker_a: config.sector_a_marker.trim().to_uppercase(),
            marker_b: config.sector_b_marker.trim().to_uppercase(),
        }
    }

    /// 统计单个披萨单元的部门切片数
    pub fn tally_unit(&self, unit: &PizzaUnit) -> SectorTally {
        let mut tally = SectorTally::default();
        for slice in unit.slices() {
            let sector = slice.sector.to_uppercase();
            if sector.contains(&self.marker_a) {
                tally.sector_a += 1;
            }
            if sector.contains(&self.marker_b) {
                tally.sector_b += 1;
            }
        }
        tally
    }

    /// 对全部完成披萨计数并判定归属
    ///
    /// # 参数
    /// - `units`: 完成披萨单元 (规范拼接顺序: 咸整张, 甜整张, 咸拼合, 甜拼合)
    /// - `sector_overrides`: 单元 ID -> 强制归属
    pub fn tally(
        &self,
        units: Vec<PizzaUnit>,
        sector_overrides: &BTreeMap<String, Winner>,
    ) -> Vec<CompletedPizza> {
        units
            .into_iter()
            .map(|unit| {
                let tally = self.tally_unit(&unit);
                let computed = tally.computed_winner();
                let winner = match sector_overrides.get(unit.id()) {
                    Some(&forced) => {
                        debug!(
                            unit_id = %unit.id(),
                            computed = %computed,
                            forced = %forced,
                            "部门归属被人工覆写"
                        );
                        forced
                    }
                    None => computed,
                };
                CompletedPizza {
                    unit,
                    tally,
                    winner,
                    number: None,
                }
            })
            .collect()
    }
}
