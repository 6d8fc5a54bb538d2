// ==========================================
// 办公室披萨订购协调系统 - 口味统计引擎
// ==========================================
// 职责: 粗粒度实时看板的只读统计 (无配对, 无编号)
// 输入: 口味分组 (两域合并, 仅看总量)
// 输出: 每口味整张数/余片数 + 拼满机会列表
// ==========================================
// 注: 余数正好 4 片的口味不进机会列表 —— 完整半张留给配对,
//     这一不对称是现网行为, 未经产品确认不得"修复"
// ==========================================

use crate::domain::pizza::FlavorGroup;
use crate::domain::types::FlavorCategory;
use crate::{SLICES_PER_HALF, SLICES_PER_WHOLE};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ==========================================
// 统计结果
// ==========================================

/// 单口味统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlavorStats {
    pub flavor_id: i64,
    pub flavor_name: String,
    pub category: FlavorCategory,

    /// 切片总数
    pub total_slices: usize,

    /// 整张披萨数 (total / 8)
    pub whole_pizzas: usize,

    /// 不足整张的余片数 (total % 8)
    pub remainder_slices: usize,

    /// 余片在 1..=3 或 5..=7 (排除正好半张的 4)
    pub near_complete: bool,
}

/// 拼满机会: 差 4 片以内就能凑出整张的口味
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionOpportunity {
    pub flavor_id: i64,
    pub flavor_name: String,
    pub total_slices: usize,

    /// 还差几片 (8 - 余片, 恒 ≤ 4)
    pub slices_to_complete: usize,
}

/// 看板统计报告
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateReport {
    /// 每口味统计, 按切片总数降序 (同数按名称升序)
    pub stats: Vec<FlavorStats>,

    /// 拼满机会, 按还差片数升序
    pub opportunities: Vec<CompletionOpportunity>,
}

// ==========================================
// AggregateReporter - 口味统计引擎
// ==========================================
pub struct AggregateReporter {
    // 无状态引擎, 不需要注入依赖
}

impl AggregateReporter {
    pub fn new() -> Self {
        Self {}
    }

    /// 由口味分组计算看板统计
    pub fn report(&self, groups: &[FlavorGroup]) -> AggregateReport {
        let mut stats: Vec<FlavorStats> = groups
            .iter()
            .map(|g| {
                let total = g.slices.len();
                let remainder = total % SLICES_PER_WHOLE;
                FlavorStats {
                    flavor_id: g.flavor_id,
                    flavor_name: g.name.clone(),
                    category: g.category,
                    total_slices: total,
                    whole_pizzas: total / SLICES_PER_WHOLE,
                    remainder_slices: remainder,
                    near_complete: remainder != 0 && remainder != SLICES_PER_HALF,
                }
            })
            .collect();

        stats.sort_by(|a, b| {
            b.total_slices
                .cmp(&a.total_slices)
                .then_with(|| a.flavor_name.cmp(&b.flavor_name))
        });

        let mut opportunities: Vec<CompletionOpportunity> = stats
            .iter()
            .filter_map(|s| {
                // 余 4 片是完整半张, 留给配对; 其余非零余数才算机会
                if s.remainder_slices == 0 || s.remainder_slices == SLICES_PER_HALF {
                    return None;
                }
                let needed = SLICES_PER_WHOLE - s.remainder_slices;
                if needed > SLICES_PER_HALF {
                    return None;
                }
                Some(CompletionOpportunity {
                    flavor_id: s.flavor_id,
                    flavor_name: s.flavor_name.clone(),
                    total_slices: s.total_slices,
                    slices_to_complete: needed,
                })
            })
            .collect();

        opportunities.sort_by_key(|o| o.slices_to_complete);

        debug!(
            flavors = stats.len(),
            opportunities = opportunities.len(),
            "口味统计完成"
        );

        AggregateReport {
            stats,
            opportunities,
        }
    }
}

impl Default for AggregateReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slice::Slice;
    use chrono::{TimeZone, Utc};

    fn group(flavor_id: i64, name: &str, count: usize) -> FlavorGroup {
        let slices = (0..count)
            .map(|i| Slice {
                line_item_id: i as i64,
                flavor_id,
                flavor_name: name.to_string(),
                category: FlavorCategory::Savory,
                user_id: 1,
                sector: "STI".to_string(),
                ordered_at: Utc.timestamp_opt(1_000, 0).unwrap(),
            })
            .collect();
        FlavorGroup {
            flavor_id,
            name: name.to_string(),
            category: FlavorCategory::Savory,
            slices,
        }
    }

    #[test]
    fn test_stats_arithmetic() {
        let r = AggregateReporter::new();
        let report = r.report(&[group(1, "Cheese", 13)]);
        let s = &report.stats[0];
        assert_eq!(s.whole_pizzas, 1);
        assert_eq!(s.remainder_slices, 5);
        assert!(s.near_complete);
    }

    #[test]
    fn test_stats_sorted_by_total_desc_then_name() {
        let r = AggregateReporter::new();
        let report = r.report(&[group(1, "Beta", 4), group(2, "Alpha", 4), group(3, "Gamma", 9)]);
        let names: Vec<&str> = report.stats.iter().map(|s| s.flavor_name.as_str()).collect();
        assert_eq!(names, vec!["Gamma", "Alpha", "Beta"]);
    }

    #[test]
    fn test_opportunity_thresholds() {
        let r = AggregateReporter::new();
        // 余 5/6/7 → 差 3/2/1 片, 全部是机会; 余 1..=3 → 差 5..=7, 不是
        let report = r.report(&[
            group(1, "A", 15), // 余 7, 差 1
            group(2, "B", 6),  // 余 6, 差 2
            group(3, "C", 3),  // 余 3, 差 5 → 排除
            group(4, "D", 8),  // 余 0 → 排除
        ]);
        let needed: Vec<usize> = report
            .opportunities
            .iter()
            .map(|o| o.slices_to_complete)
            .collect();
        // 按差片数升序
        assert_eq!(needed, vec![1, 2]);
        assert_eq!(report.opportunities[0].flavor_name, "A");
    }

    #[test]
    fn test_exact_half_excluded_from_opportunities() {
        let r = AggregateReporter::new();
        // 余正好 4 片: near_complete=false, 也不进机会列表
        let report = r.report(&[group(1, "A", 12)]);
        assert!(!report.stats[0].near_complete);
        assert!(report.opportunities.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let r = AggregateReporter::new();
        let report = r.report(&[]);
        assert!(report.stats.is_empty());
        assert!(report.opportunities.is_empty());
    }
}
