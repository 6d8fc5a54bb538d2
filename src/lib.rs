// ==========================================
// 办公室披萨订购协调系统 - 核心库
// ==========================================
// 系统定位: 披萨聚合与编号引擎 (纯计算, 无 I/O)
// 输入: 订单行快照 + 人工覆写配置
// 输出: 编号结果 + 口味统计 (内存结构, 持久化由外部负责)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 引擎配置
pub mod config;

// API 层 - 业务接口
pub mod api;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{FlavorCategory, Winner};

// 领域实体
pub use domain::{
    AggregationResult, CompletedPizza, FlavorGroup, HalfCandidate, LeftoverSlices, NumberedResult,
    OrderLine, OverrideConfig, PairedHalfPizza, PizzaUnit, SectorTally, Slice, WholePizza,
};

// 引擎
pub use engine::{
    AggregateReport, AggregateReporter, AggregationOrchestrator, Decomposer, FlavorGrouper,
    HalfPairer, PizzaNumberer, SectorTallier, SliceMaterializer,
};

// 配置
pub use config::EngineConfig;

// API
pub use api::{AggregationApi, ApiError, ApiResult, EngineError, OrderLineValidator};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "办公室披萨订购协调系统";

// 一张整披萨的切片数
pub const SLICES_PER_WHOLE: usize = 8;

// 半张披萨的切片数
pub const SLICES_PER_HALF: usize = 4;

// 单个订单行允许的最大切片数 (入口校验边界)
pub const MAX_SLICES_PER_LINE: u32 = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_slice_constants() {
        // 配对算法依赖: 半张正好是整张的一半
        assert_eq!(SLICES_PER_WHOLE, SLICES_PER_HALF * 2);
    }
}
