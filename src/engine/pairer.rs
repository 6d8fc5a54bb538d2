// ==========================================
// 办公室披萨订购协调系统 - 半张配对引擎
// ==========================================
// 职责: 将同域的半张候选两两拼成整张披萨
// 输入: 单个域的半张候选 (分解顺序拼接) + 配对覆写
// 输出: PairingOutcome (拼合披萨, 落单半张)
// ==========================================
// 先应用人工覆写 (按键升序), 再按到达顺序自动配对;
// 覆写引用未知/已消耗/自指 ID 时静默跳过, 不使运行失败
// ==========================================
// 红线: 候选的消耗是显式所有权转移 (从池中取走),
//       不存在共享可变的"已配对"集合
// ==========================================

use crate::domain::pizza::{HalfCandidate, LeftoverSlices, PairedHalfPizza};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

// ==========================================
// PairingOutcome - 单域配对结果
// ==========================================

#[derive(Debug, Clone, Default)]
pub struct PairingOutcome {
    /// 拼合披萨 (覆写对在前, 自动配对在后)
    pub paired: Vec<PairedHalfPizza>,

    /// 落单半张, 降级为 4 片等待余片 (不可编号)
    pub waiting: Vec<LeftoverSlices>,
}

// ==========================================
// HalfPairer - 半张配对引擎
// ==========================================
pub struct HalfPairer {
    // 无状态引擎, 不需要注入依赖
}

impl HalfPairer {
    pub fn new() -> Self {
        Self {}
    }

    /// 配对一个域的半张候选
    ///
    /// # 参数
    /// - `halves`: 该域全部半张候选, 分解顺序
    /// - `pairing_overrides`: 半张 ID -> 半张 ID (跨域引用等同于未知 ID)
    pub fn pair(
        &self,
        halves: Vec<HalfCandidate>,
        pairing_overrides: &BTreeMap<String, String>,
    ) -> PairingOutcome {
        let index_by_id: HashMap<String, usize> = halves
            .iter()
            .enumerate()
            .map(|(i, h)| (h.id.clone(), i))
            .collect();

        // 候选池: 消耗即取走, 池中仅存未配对者
        let mut pool: Vec<Option<HalfCandidate>> = halves.into_iter().map(Some).collect();
        let mut outcome = PairingOutcome::default();

        // 步骤1: 人工覆写优先 (键升序, 保证可复现)
        for (h1_id, h2_id) in pairing_overrides {
            if h1_id == h2_id {
                debug!(half_id = %h1_id, "忽略自指配对覆写");
                continue;
            }

            let (i, j) = match (index_by_id.get(h1_id), index_by_id.get(h2_id)) {
                (Some(&i), Some(&j)) => (i, j),
                _ => {
                    debug!(h1 = %h1_id, h2 = %h2_id, "配对覆写引用未知半张, 跳过");
                    continue;
                }
            };

            let h1 = match pool[i].take() {
                Some(h) => h,
                None => {
                    debug!(half_id = %h1_id, "半张已被先前覆写消耗, 跳过");
                    continue;
                }
            };
            let h2 = match pool[j].take() {
                Some(h) => h,
                None => {
                    debug!(half_id = %h2_id, "半张已被先前覆写消耗, 跳过");
                    // 归还未消耗的一侧
                    pool[i] = Some(h1);
                    continue;
                }
            };

            outcome.paired.push(Self::combine(h1, h2));
        }

        // 步骤2: 剩余半张按原拼接顺序两两自动配对
        let mut remaining = pool.into_iter().flatten();
        while let Some(h1) = remaining.next() {
            match remaining.next() {
                Some(h2) => outcome.paired.push(Self::combine(h1, h2)),
                None => {
                    // 奇数落单 → 4 片等待余片
                    debug!(half_id = %h1.id, "半张落单, 降级为等待余片");
                    outcome.waiting.push(LeftoverSlices {
                        id: h1.id,
                        flavor_id: h1.flavor_id,
                        flavor_name: h1.flavor_name,
                        category: h1.category,
                        slices: h1.slices,
                        last_update: h1.last_update,
                        waiting_half: true,
                    });
                }
            }
        }

        outcome
    }

    /// 拼合两个半张: 切片 h1 ++ h2, 时间戳取较晚者
    fn combine(h1: HalfCandidate, h2: HalfCandidate) -> PairedHalfPizza {
        let last_update = h1.last_update.max(h2.last_update);
        let mut slices = h1.slices;
        slices.extend(h2.slices);
        PairedHalfPizza {
            id: format!("combined-{}-{}", h1.id, h2.id),
            flavor_a_id: h1.flavor_id,
            flavor_a_name: h1.flavor_name,
            flavor_b_id: h2.flavor_id,
            flavor_b_name: h2.flavor_name,
            category: h1.category,
            slices,
            last_update,
        }
    }
}

impl Default for HalfPairer {
    fn default() -> Self {
        Self::new()
    }
}
