// ==========================================
// 办公室披萨订购协调系统 - 领域类型定义
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与外部存储一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 口味类别 (Flavor Category)
// ==========================================
// 咸味域与甜味域各自独立走完整条流水线, 互不配对
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlavorCategory {
    Savory, // 咸味
    Sweet,  // 甜味
}

impl fmt::Display for FlavorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlavorCategory::Savory => write!(f, "SAVORY"),
            FlavorCategory::Sweet => write!(f, "SWEET"),
        }
    }
}

impl FlavorCategory {
    /// 从字符串解析口味类别
    ///
    /// 未知取值回落为咸味 (与历史数据兼容: 仅 "SWEET" 为甜味)
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "SWEET" => FlavorCategory::Sweet,
            _ => FlavorCategory::Savory,
        }
    }
}

// ==========================================
// 归属部门判定结果 (Winner)
// ==========================================
// 平局 (Tie) 的披萨不参与编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Winner {
    SectorA, // A 部门多数
    SectorB, // B 部门多数
    Tie,     // 平局
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::SectorA => write!(f, "SECTOR_A"),
            Winner::SectorB => write!(f, "SECTOR_B"),
            Winner::Tie => write!(f, "TIE"),
        }
    }
}
