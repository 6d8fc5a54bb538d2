// ==========================================
// 办公室披萨订购协调系统 - 引擎配置
// ==========================================
// 职责: 部门标记串配置
// Tallier 按"标签大小写无关地包含标记串"计数,
// 标记串在引擎构造时校验一次, 运行期间只读
// ==========================================

use serde::{Deserialize, Serialize};

/// 引擎配置
///
/// 默认标记沿用现网部门缩写: A = "STI", B = "SGS"。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// A 部门标记串
    #[serde(default = "default_sector_a_marker")]
    pub sector_a_marker: String,

    /// B 部门标记串
    #[serde(default = "default_sector_b_marker")]
    pub sector_b_marker: String,
}

fn default_sector_a_marker() -> String {
    "STI".to_string()
}

fn default_sector_b_marker() -> String {
    "SGS".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sector_a_marker: default_sector_a_marker(),
            sector_b_marker: default_sector_b_marker(),
        }
    }
}

impl EngineConfig {
    /// 校验标记串配置
    ///
    /// # 校验规则
    /// 1. 标记串不能为空白
    /// 2. 两个标记串大小写无关地互不包含 (否则同一片会被双边计数)
    ///
    /// # 返回
    /// - `Ok(())`: 配置有效
    /// - `Err(String)`: 配置无效, 返回错误描述
    pub fn validate(&self) -> Result<(), String> {
        let a = self.sector_a_marker.trim();
        let b = self.sector_b_marker.trim();

        if a.is_empty() {
            return Err("A 部门标记串不能为空".to_string());
        }
        if b.is_empty() {
            return Err("B 部门标记串不能为空".to_string());
        }

        let a_upper = a.to_uppercase();
        let b_upper = b.to_uppercase();
        if a_upper.contains(&b_upper) || b_upper.contains(&a_upper) {
            return Err(format!(
                "部门标记串互相包含: A=\"{}\", B=\"{}\", 计数会产生歧义",
                a, b
            ));
        }

        Ok(())
    }
}
