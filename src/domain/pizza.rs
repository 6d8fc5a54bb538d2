// ==========================================
// 办公室披萨订购协调系统 - 披萨单元实体
// ==========================================
// 封闭变体类型: Whole | PairedHalf | Leftover
// Tallier/Numberer 边界上穷举匹配, 不存在"可能有口味"的模糊访问
// HalfCandidate 是配对前的中间形态, 不是最终单元
// ==========================================

use crate::domain::slice::Slice;
use crate::domain::types::{FlavorCategory, Winner};
use crate::SLICES_PER_WHOLE;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// 口味分组 (FlavorGroup)
// ==========================================

/// 同一口味的切片序列 (保持首次出现顺序, 不重排)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlavorGroup {
    pub flavor_id: i64,
    pub name: String,
    pub category: FlavorCategory,
    pub slices: Vec<Slice>,
}

// ==========================================
// 披萨单元 (PizzaUnit)
// ==========================================

/// 整张披萨 (单一口味, 正好 8 片)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WholePizza {
    /// 单元 ID, 形如 "{flavor_id}-whole-{i}", 跨运行可复现
    pub id: String,
    pub flavor_id: i64,
    pub flavor_name: String,
    pub category: FlavorCategory,
    pub slices: Vec<Slice>,
    /// 分解顺序中最后一片的时间戳
    pub last_update: DateTime<Utc>,
}

/// 半张候选 (单一口味, 正好 4 片, 等待配对)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HalfCandidate {
    /// 单元 ID, 形如 "{flavor_id}-half-{i}"; 配对覆写以此为键
    pub id: String,
    pub flavor_id: i64,
    pub flavor_name: String,
    pub category: FlavorCategory,
    pub slices: Vec<Slice>,
    pub last_update: DateTime<Utc>,
}

/// 配对成功的拼合披萨 (两个半张, 4+4 片)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairedHalfPizza {
    /// 单元 ID, 形如 "combined-{h1}-{h2}"
    pub id: String,
    pub flavor_a_id: i64,
    pub flavor_a_name: String,
    pub flavor_b_id: i64,
    pub flavor_b_name: String,
    pub category: FlavorCategory,
    /// 前半 ++ 后半, 各自内部顺序保持
    pub slices: Vec<Slice>,
    /// max(两个半张的 last_update)
    pub last_update: DateTime<Utc>,
}

/// 零散余片 (1-7 片, 或落单的 4 片等待半张)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeftoverSlices {
    /// 单元 ID, 形如 "{flavor_id}-rest"
    pub id: String,
    pub flavor_id: i64,
    pub flavor_name: String,
    pub category: FlavorCategory,
    pub slices: Vec<Slice>,
    pub last_update: DateTime<Utc>,
    /// true = 未配对成功的完整半张 (与数值余片区分, 但同样不编号)
    pub waiting_half: bool,
}

/// 披萨单元 - 分解+配对后的封闭变体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PizzaUnit {
    Whole(WholePizza),
    PairedHalf(PairedHalfPizza),
    Leftover(LeftoverSlices),
}

impl PizzaUnit {
    pub fn id(&self) -> &str {
        match self {
            PizzaUnit::Whole(w) => &w.id,
            PizzaUnit::PairedHalf(p) => &p.id,
            PizzaUnit::Leftover(l) => &l.id,
        }
    }

    pub fn slices(&self) -> &[Slice] {
        match self {
            PizzaUnit::Whole(w) => &w.slices,
            PizzaUnit::PairedHalf(p) => &p.slices,
            PizzaUnit::Leftover(l) => &l.slices,
        }
    }

    pub fn slice_count(&self) -> usize {
        self.slices().len()
    }

    pub fn last_update(&self) -> DateTime<Utc> {
        match self {
            PizzaUnit::Whole(w) => w.last_update,
            PizzaUnit::PairedHalf(p) => p.last_update,
            PizzaUnit::Leftover(l) => l.last_update,
        }
    }

    /// 仅正好 8 片的单元可参与编号
    pub fn is_complete(&self) -> bool {
        match self {
            PizzaUnit::Whole(_) | PizzaUnit::PairedHalf(_) => {
                self.slice_count() == SLICES_PER_WHOLE
            }
            PizzaUnit::Leftover(_) => false,
        }
    }

    /// 展示用口味标签 (拼合披萨为 "A / B")
    pub fn flavor_label(&self) -> String {
        match self {
            PizzaUnit::Whole(w) => w.flavor_name.clone(),
            PizzaUnit::PairedHalf(p) => format!("{} / {}", p.flavor_a_name, p.flavor_b_name),
            PizzaUnit::Leftover(l) => l.flavor_name.clone(),
        }
    }
}

// ==========================================
// 部门计数与编号结果
// ==========================================

/// 单个披萨的部门切片计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorTally {
    pub sector_a: usize,
    pub sector_b: usize,
}

impl SectorTally {
    /// 按严格多数判定归属, 相等 (含 0-0) 为平局
    pub fn computed_winner(&self) -> Winner {
        if self.sector_a > self.sector_b {
            Winner::SectorA
        } else if self.sector_b > self.sector_a {
            Winner::SectorB
        } else {
            Winner::Tie
        }
    }
}

/// 完成判定与编号后的披萨 (Whole 或 PairedHalf)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedPizza {
    pub unit: PizzaUnit,
    pub tally: SectorTally,
    pub winner: Winner,
    /// 全局序号, 1 起递增; 平局单元为 None
    pub number: Option<u32>,
}

/// 编号结果: 订单行 ID -> 该行贡献过切片的披萨序号列表
///
/// 一个订单行的数量跨越披萨边界时会映射到多个序号;
/// 同一披萨内不重复计入。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberedResult {
    pub assignments: BTreeMap<i64, Vec<u32>>,
    /// 获得编号的披萨总数 N (序号恒为 1..=N)
    pub total_numbered: u32,
}

/// 一次聚合运行的完整输出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationResult {
    /// 完成判定与编号后的披萨 (含平局未编号者)
    pub completed: Vec<CompletedPizza>,

    /// 零散余片与落单半张 (永不编号)
    pub leftovers: Vec<LeftoverSlices>,

    /// 订单行 -> 披萨序号映射
    pub numbering: NumberedResult,

    /// 输入切片总数 (守恒校验基准)
    pub total_slices: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn slice(flavor_id: i64, secs: i64) -> Slice {
        Slice {
            line_item_id: 1,
            flavor_id,
            flavor_name: "Cheese".to_string(),
            category: FlavorCategory::Savory,
            user_id: 1,
            sector: "STI".to_string(),
            ordered_at: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_leftover_never_complete() {
        // 落单半张即使有 4 片也不可编号
        let unit = PizzaUnit::Leftover(LeftoverSlices {
            id: "1-rest".to_string(),
            flavor_id: 1,
            flavor_name: "Cheese".to_string(),
            category: FlavorCategory::Savory,
            slices: (0..4).map(|i| slice(1, i)).collect(),
            last_update: Utc.timestamp_opt(3, 0).unwrap(),
            waiting_half: true,
        });
        assert!(!unit.is_complete());
    }

    #[test]
    fn test_tally_winner() {
        assert_eq!(
            SectorTally { sector_a: 5, sector_b: 3 }.computed_winner(),
            Winner::SectorA
        );
        assert_eq!(
            SectorTally { sector_a: 3, sector_b: 5 }.computed_winner(),
            Winner::SectorB
        );
        assert_eq!(
            SectorTally { sector_a: 4, sector_b: 4 }.computed_winner(),
            Winner::Tie
        );
        // 双方都不含标记 (0-0) 同样是平局
        assert_eq!(SectorTally::default().computed_winner(), Winner::Tie);
    }
}
