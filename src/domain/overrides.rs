// ==========================================
// 办公室披萨订购协调系统 - 人工覆写配置
// ==========================================
// 职责: 单次聚合运行的只读外部状态
// 缺省即空映射; 覆写是尽力而为的提示, 不是契约
// ==========================================

use crate::domain::types::Winner;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 人工覆写配置 (按事件/报告范围取一份)
///
/// 使用 BTreeMap 而非 HashMap: 配对覆写按键升序应用,
/// 迭代顺序必须跨运行一致, 否则编号不可复现。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideConfig {
    /// 半张配对覆写: 半张 ID -> 半张 ID (单向书写, 对称意图)
    #[serde(default, rename = "pairing_overrides")]
    pub pairing: BTreeMap<String, String>,

    /// 部门归属覆写: 披萨单元 ID -> 强制归属
    #[serde(default, rename = "sector_overrides")]
    pub sector: BTreeMap<String, Winner>,
}

impl OverrideConfig {
    pub fn is_empty(&self) -> bool {
        self.pairing.is_empty() && self.sector.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(OverrideConfig::default().is_empty());
    }

    #[test]
    fn test_deserialize_external_keys() {
        // 外部存储的字段名: pairing_overrides / sector_overrides
        let json = r#"{
            "pairing_overrides": {"3-half-0": "5-half-0"},
            "sector_overrides": {"1-whole-0": "SECTOR_B"}
        }"#;
        let cfg: OverrideConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.pairing.get("3-half-0").unwrap(), "5-half-0");
        assert_eq!(cfg.sector.get("1-whole-0"), Some(&Winner::SectorB));
    }

    #[test]
    fn test_deserialize_missing_maps() {
        // 缺省字段 ⇒ 空映射, 不报错
        let cfg: OverrideConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.is_empty());
    }
}
