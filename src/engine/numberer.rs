// ==========================================
// 办公室披萨订购协调系统 - 披萨编号引擎
// ==========================================
// 职责: 按归属部门排序完成披萨, 分配全局递增序号
// 输入: 计数判定后的完成披萨
// 输出: 编号后的披萨 + 订单行 -> 序号映射
// ==========================================
// 排序规则 (现场取餐动线约定):
//   A 部门按时间戳降序 (最新优先), B 部门按时间戳升序 (最早优先);
//   先 A 后 B 连续编号 1..N; 平局披萨不参与编号
// 时间戳相同者保持规范拼接顺序 (稳定排序)
// ==========================================

use crate::domain::pizza::{CompletedPizza, NumberedResult};
use crate::domain::types::Winner;
use std::collections::BTreeSet;
use tracing::{debug, info};

// ==========================================
// PizzaNumberer - 披萨编号引擎
// ==========================================
pub struct PizzaNumberer {
    // 无状态引擎, 不需要注入依赖
}

impl PizzaNumberer {
    pub fn new() -> Self {
        Self {}
    }

    /// 为完成披萨分配序号
    ///
    /// # 参数
    /// - `pizzas`: 规范拼接顺序的完成披萨 (归属已判定, 未编号)
    ///
    /// # 返回
    /// (编号后的披萨列表 [A 区, B 区, 平局], 订单行映射)
    pub fn number(&self, pizzas: Vec<CompletedPizza>) -> (Vec<CompletedPizza>, NumberedResult) {
        // 按归属切分, 保持拼接顺序
        let mut sector_a = Vec::new();
        let mut sector_b = Vec::new();
        let mut ties = Vec::new();
        for pizza in pizzas {
            match pizza.winner {
                Winner::SectorA => sector_a.push(pizza),
                Winner::SectorB => sector_b.push(pizza),
                Winner::Tie => ties.push(pizza),
            }
        }

        // A 区: 最新优先; B 区: 最早优先 (均为稳定排序)
        sector_a.sort_by(|x, y| y.unit.last_update().cmp(&x.unit.last_update()));
        sector_b.sort_by(|x, y| x.unit.last_update().cmp(&y.unit.last_update()));

        // 先 A 后 B 连续编号
        let mut result = NumberedResult::default();
        let mut current = 0u32;
        for pizza in sector_a.iter_mut().chain(sector_b.iter_mut()) {
            current += 1;
            pizza.number = Some(current);

            // 同一披萨内每个订单行只计一次
            let mut seen_lines = BTreeSet::new();
            for slice in pizza.unit.slices() {
                if seen_lines.insert(slice.line_item_id) {
                    result
                        .assignments
                        .entry(slice.line_item_id)
                        .or_default()
                        .push(current);
                }
            }

            debug!(
                number = current,
                unit_id = %pizza.unit.id(),
                winner = %pizza.winner,
                flavor = %pizza.unit.flavor_label(),
                "披萨编号"
            );
        }
        result.total_numbered = current;

        info!(
            numbered = current,
            ties = ties.len(),
            "编号完成 (平局披萨不编号)"
        );

        let mut ordered = sector_a;
        ordered.extend(sector_b);
        ordered.extend(ties);
        (ordered, result)
    }
}

impl Default for PizzaNumberer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pizza::{PizzaUnit, SectorTally, WholePizza};
    use crate::domain::slice::Slice;
    use crate::domain::types::FlavorCategory;
    use chrono::{TimeZone, Utc};

    /// 构造一张完成披萨, 8 片同属一个订单行
    fn pizza(id: &str, line_item_id: i64, winner: Winner, secs: i64) -> CompletedPizza {
        let slices = (0..8)
            .map(|i| Slice {
                line_item_id,
                flavor_id: 1,
                flavor_name: "Cheese".to_string(),
                category: FlavorCategory::Savory,
                user_id: 1,
                sector: "STI".to_string(),
                ordered_at: Utc.timestamp_opt(secs, 0).unwrap(),
            })
            .collect();
        CompletedPizza {
            unit: PizzaUnit::Whole(WholePizza {
                id: id.to_string(),
                flavor_id: 1,
                flavor_name: "Cheese".to_string(),
                category: FlavorCategory::Savory,
                slices,
                last_update: Utc.timestamp_opt(secs, 0).unwrap(),
            }),
            tally: SectorTally::default(),
            winner,
            number: None,
        }
    }

    #[test]
    fn test_a_desc_then_b_asc() {
        let n = PizzaNumberer::new();
        let (ordered, result) = n.number(vec![
            pizza("a-old", 1, Winner::SectorA, 100),
            pizza("a-new", 2, Winner::SectorA, 300),
            pizza("b-old", 3, Winner::SectorB, 100),
            pizza("b-new", 4, Winner::SectorB, 300),
        ]);

        // A 区最新优先, B 区最早优先
        let ids: Vec<(&str, Option<u32>)> = ordered
            .iter()
            .map(|p| (p.unit.id(), p.number))
            .collect();
        assert_eq!(
            ids,
            vec![
                ("a-new", Some(1)),
                ("a-old", Some(2)),
                ("b-old", Some(3)),
                ("b-new", Some(4)),
            ]
        );
        assert_eq!(result.total_numbered, 4);
    }

    #[test]
    fn test_tie_excluded() {
        let n = PizzaNumberer::new();
        let (ordered, result) = n.number(vec![
            pizza("t", 1, Winner::Tie, 100),
            pizza("a", 2, Winner::SectorA, 200),
        ]);
        assert_eq!(result.total_numbered, 1);
        // 平局排在结果尾部且无编号
        let tie = ordered.iter().find(|p| p.unit.id() == "t").unwrap();
        assert_eq!(tie.number, None);
        assert!(!result.assignments.contains_key(&1));
        assert_eq!(result.assignments.get(&2).unwrap(), &vec![1]);
    }

    #[test]
    fn test_numbers_contiguous() {
        let n = PizzaNumberer::new();
        let (ordered, result) = n.number(vec![
            pizza("a1", 1, Winner::SectorA, 10),
            pizza("t1", 2, Winner::Tie, 20),
            pizza("b1", 3, Winner::SectorB, 30),
            pizza("a2", 4, Winner::SectorA, 40),
        ]);
        let mut numbers: Vec<u32> = ordered.iter().filter_map(|p| p.number).collect();
        numbers.sort();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(result.total_numbered, 3);
    }

    #[test]
    fn test_stable_on_equal_timestamps() {
        // 同一时间戳 → 保持输入 (规范拼接) 顺序
        let n = PizzaNumberer::new();
        let (ordered, _) = n.number(vec![
            pizza("first", 1, Winner::SectorA, 100),
            pizza("second", 2, Winner::SectorA, 100),
        ]);
        assert_eq!(ordered[0].unit.id(), "first");
        assert_eq!(ordered[0].number, Some(1));
        assert_eq!(ordered[1].number, Some(2));
    }

    #[test]
    fn test_line_not_duplicated_within_unit() {
        // 订单行 7 贡献整张 8 片 → 映射中只出现一次序号
        let n = PizzaNumberer::new();
        let (_, result) = n.number(vec![pizza("a", 7, Winner::SectorA, 100)]);
        assert_eq!(result.assignments.get(&7).unwrap(), &vec![1]);
    }
}
