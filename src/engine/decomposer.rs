// ==========================================
// 办公室披萨订购协调系统 - 口味分解引擎
// ==========================================
// 职责: 将每个口味的切片序列切成 整张 / 半张候选 / 余片
// 输入: 单个域的口味分组
// 输出: Decomposition (整张, 半张候选, 余片)
// ==========================================
// 排序键: 切片数降序, 口味 ID 升序兜底
// 这一顺序决定口味的分解次序, 进而影响配对与时间戳,
// 必须精确且稳定 (预览与付款报告共用)
// ==========================================
// 红线: 口味内切片按保留顺序消耗, 分解绝不重排
// ==========================================

use crate::domain::pizza::{FlavorGroup, HalfCandidate, LeftoverSlices, WholePizza};
use crate::{SLICES_PER_HALF, SLICES_PER_WHOLE};
use tracing::debug;

// ==========================================
// Decomposition - 单域分解结果
// ==========================================

#[derive(Debug, Clone, Default)]
pub struct Decomposition {
    /// 整张披萨 (分解顺序)
    pub wholes: Vec<WholePizza>,

    /// 半张候选 (分解顺序, 待配对)
    pub half_candidates: Vec<HalfCandidate>,

    /// 数值余片 (1-3 片)
    pub leftovers: Vec<LeftoverSlices>,
}

// ==========================================
// Decomposer - 口味分解引擎
// ==========================================
pub struct Decomposer {
    // 无状态引擎, 不需要注入依赖
}

impl Decomposer {
    pub fn new() -> Self {
        Self {}
    }

    /// 分解一个域的全部口味分组
    ///
    /// 对每个口味: `whole = count / 8` 张整披萨 (各取连续 8 片),
    /// 余数中 `rest / 4` 个半张候选 (各取连续 4 片),
    /// 最后 `rest % 4` 片为余片。每个单元的时间戳取其
    /// 分解顺序中最后一片的下单时间。
    pub fn decompose(&self, mut groups: Vec<FlavorGroup>) -> Decomposition {
        // 热门口味先分解; 同数切片按口味 ID 升序兜底
        groups.sort_by(|a, b| {
            b.slices
                .len()
                .cmp(&a.slices.len())
                .then(a.flavor_id.cmp(&b.flavor_id))
        });

        let mut out = Decomposition::default();

        for group in groups {
            let total = group.slices.len();
            let whole_count = total / SLICES_PER_WHOLE;
            let rest = total % SLICES_PER_WHOLE;
            let half_count = rest / SLICES_PER_HALF;
            let final_rest = rest % SLICES_PER_HALF;

            debug!(
                flavor_id = group.flavor_id,
                total,
                whole_count,
                half_count,
                final_rest,
                "口味分解"
            );

            // 整张: 连续 8 片一组
            for i in 0..whole_count {
                let chunk = &group.slices[i * SLICES_PER_WHOLE..(i + 1) * SLICES_PER_WHOLE];
                out.wholes.push(WholePizza {
                    id: format!("{}-whole-{}", group.flavor_id, i),
                    flavor_id: group.flavor_id,
                    flavor_name: group.name.clone(),
                    category: group.category,
                    slices: chunk.to_vec(),
                    last_update: chunk[SLICES_PER_WHOLE - 1].ordered_at,
                });
            }

            // 半张候选: 连续 4 片一组
            let base = whole_count * SLICES_PER_WHOLE;
            for i in 0..half_count {
                let start = base + i * SLICES_PER_HALF;
                let chunk = &group.slices[start..start + SLICES_PER_HALF];
                out.half_candidates.push(HalfCandidate {
                    id: format!("{}-half-{}", group.flavor_id, i),
                    flavor_id: group.flavor_id,
                    flavor_name: group.name.clone(),
                    category: group.category,
                    slices: chunk.to_vec(),
                    last_update: chunk[SLICES_PER_HALF - 1].ordered_at,
                });
            }

            // 余片: 不足半张的尾部
            if final_rest > 0 {
                let start = base + half_count * SLICES_PER_HALF;
                let chunk = &group.slices[start..];
                out.leftovers.push(LeftoverSlices {
                    id: format!("{}-rest", group.flavor_id),
                    flavor_id: group.flavor_id,
                    flavor_name: group.name.clone(),
                    category: group.category,
                    slices: chunk.to_vec(),
                    last_update: chunk[final_rest - 1].ordered_at,
                    waiting_half: false,
                });
            }
        }

        out
    }
}

impl Default for Decomposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slice::Slice;
    use crate::domain::types::FlavorCategory;
    use chrono::{TimeZone, Utc};

    /// 构造一个口味分组, 切片时间戳为 t0+0, t0+1, ...
    fn group_with(flavor_id: i64, count: usize) -> FlavorGroup {
        let slices = (0..count)
            .map(|i| Slice {
                line_item_id: 100 + i as i64,
                flavor_id,
                flavor_name: format!("F{}", flavor_id),
                category: FlavorCategory::Savory,
                user_id: 1,
                sector: "STI".to_string(),
                ordered_at: Utc.timestamp_opt(1_000 + i as i64, 0).unwrap(),
            })
            .collect();
        FlavorGroup {
            flavor_id,
            name: format!("F{}", flavor_id),
            category: FlavorCategory::Savory,
            slices,
        }
    }

    #[test]
    fn test_arithmetic_13_slices() {
        // 13 片 → 1 整张 (片 1-8) + 1 半张 (片 9-12) + 1 余片 (片 13)
        let d = Decomposer::new();
        let out = d.decompose(vec![group_with(1, 13)]);

        assert_eq!(out.wholes.len(), 1);
        assert_eq!(out.half_candidates.len(), 1);
        assert_eq!(out.leftovers.len(), 1);

        let whole = &out.wholes[0];
        assert_eq!(whole.id, "1-whole-0");
        assert_eq!(whole.slices.len(), 8);
        // 时间戳 = 第 8 片 (分解顺序最后一片)
        assert_eq!(whole.last_update, Utc.timestamp_opt(1_007, 0).unwrap());

        let half = &out.half_candidates[0];
        assert_eq!(half.id, "1-half-0");
        assert_eq!(half.slices.len(), 4);
        assert_eq!(half.last_update, Utc.timestamp_opt(1_011, 0).unwrap());

        let rest = &out.leftovers[0];
        assert_eq!(rest.id, "1-rest");
        assert_eq!(rest.slices.len(), 1);
        assert!(!rest.waiting_half);
        assert_eq!(rest.last_update, Utc.timestamp_opt(1_012, 0).unwrap());
    }

    #[test]
    fn test_in_order_consumption() {
        // 口味内消耗严格按保留顺序: 前 8 片进第一张整披萨
        let d = Decomposer::new();
        let out = d.decompose(vec![group_with(1, 16)]);
        assert_eq!(out.wholes.len(), 2);
        let first: Vec<i64> = out.wholes[0].slices.iter().map(|s| s.line_item_id).collect();
        assert_eq!(first, (100..108).collect::<Vec<i64>>());
        let second: Vec<i64> = out.wholes[1].slices.iter().map(|s| s.line_item_id).collect();
        assert_eq!(second, (108..116).collect::<Vec<i64>>());
    }

    #[test]
    fn test_flavor_ordering_by_count_then_id() {
        // 口味 5 有 9 片, 口味 2 和 7 各 4 片 → 分解顺序 5, 2, 7
        let d = Decomposer::new();
        let out = d.decompose(vec![group_with(7, 4), group_with(5, 9), group_with(2, 4)]);

        assert_eq!(out.wholes.len(), 1);
        assert_eq!(out.wholes[0].flavor_id, 5);
        let half_flavors: Vec<i64> = out.half_candidates.iter().map(|h| h.flavor_id).collect();
        // 5 的余 1 片不产生半张; 2 和 7 按 ID 升序
        assert_eq!(half_flavors, vec![2, 7]);
    }

    #[test]
    fn test_exact_half_remainder() {
        // 正好 4 片 → 只产生半张候选, 无余片
        let d = Decomposer::new();
        let out = d.decompose(vec![group_with(1, 4)]);
        assert!(out.wholes.is_empty());
        assert_eq!(out.half_candidates.len(), 1);
        assert!(out.leftovers.is_empty());
    }

    #[test]
    fn test_conservation_within_domain() {
        let d = Decomposer::new();
        let out = d.decompose(vec![group_with(1, 13), group_with(2, 7), group_with(3, 8)]);
        let total: usize = out.wholes.iter().map(|w| w.slices.len()).sum::<usize>()
            + out.half_candidates.iter().map(|h| h.slices.len()).sum::<usize>()
            + out.leftovers.iter().map(|l| l.slices.len()).sum::<usize>();
        assert_eq!(total, 28);
    }
}
