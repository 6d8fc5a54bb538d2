// ==========================================
// 办公室披萨订购协调系统 - 口味分组引擎
// ==========================================
// 职责: 按口味归组切片, 并按类别切分为咸/甜两个独立域
// 输入: 物化后的切片序列
// 输出: 口味分组 (组内保持首次出现顺序)
// ==========================================
// 红线: 稳定分组, 不是重排序; 域间永不交叉配对/编号
// ==========================================

use crate::domain::pizza::FlavorGroup;
use crate::domain::slice::Slice;
use crate::domain::types::FlavorCategory;
use std::collections::HashMap;
use tracing::debug;

// ==========================================
// FlavorGrouper - 口味分组引擎
// ==========================================
pub struct FlavorGrouper {
    // 无状态引擎, 不需要注入依赖
}

impl FlavorGrouper {
    pub fn new() -> Self {
        Self {}
    }

    /// 按口味 ID 归组切片
    ///
    /// 组的先后顺序 = 口味首次出现顺序; 组内切片顺序 = 输入顺序。
    /// 这一顺序与最终展示排序无关, 但下游分解依赖它。
    pub fn group(&self, slices: Vec<Slice>) -> Vec<FlavorGroup> {
        let mut groups: Vec<FlavorGroup> = Vec::new();
        let mut index_by_flavor: HashMap<i64, usize> = HashMap::new();

        for slice in slices {
            match index_by_flavor.get(&slice.flavor_id) {
                Some(&idx) => groups[idx].slices.push(slice),
                None => {
                    index_by_flavor.insert(slice.flavor_id, groups.len());
                    groups.push(FlavorGroup {
                        flavor_id: slice.flavor_id,
                        name: slice.flavor_name.clone(),
                        category: slice.category,
                        slices: vec![slice],
                    });
                }
            }
        }

        debug!(groups_count = groups.len(), "口味分组完成");

        groups
    }

    /// 按口味类别切分为 (咸味域, 甜味域)
    ///
    /// 两个域各自独立走完 Decomposer → Pairer → Tallier,
    /// 任何配对与编号都不跨域。
    pub fn split_domains(&self, groups: Vec<FlavorGroup>) -> (Vec<FlavorGroup>, Vec<FlavorGroup>) {
        let (savory, sweet): (Vec<FlavorGroup>, Vec<FlavorGroup>) = groups
            .into_iter()
            .partition(|g| g.category == FlavorCategory::Savory);

        debug!(
            savory_count = savory.len(),
            sweet_count = sweet.len(),
            "口味域切分完成"
        );

        (savory, sweet)
    }
}

impl Default for FlavorGrouper {
    fn default() -> Self {
        Self::new()
    }
}
