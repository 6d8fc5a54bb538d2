// ==========================================
// 办公室披萨订购协调系统 - 领域层
// ==========================================
// 职责: 定义实体与类型, 不含业务规则
// ==========================================

pub mod order;
pub mod overrides;
pub mod pizza;
pub mod slice;
pub mod types;

// 重导出核心实体
pub use order::OrderLine;
pub use overrides::OverrideConfig;
pub use pizza::{
    AggregationResult, CompletedPizza, FlavorGroup, HalfCandidate, LeftoverSlices, NumberedResult,
    PairedHalfPizza, PizzaUnit, SectorTally, WholePizza,
};
pub use slice::Slice;
pub use types::{FlavorCategory, Winner};
