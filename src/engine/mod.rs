// ==========================================
// 办公室披萨订购协调系统 - 引擎层
// ==========================================
// 职责: 实现聚合与编号的业务规则, 纯计算
// 红线: 引擎不做 I/O, 不持可变共享状态;
//       同一输入快照 + 同一覆写配置 ⇒ 同一输出
// ==========================================

pub mod decomposer;
pub mod error;
pub mod grouper;
pub mod materializer;
pub mod numberer;
pub mod orchestrator;
pub mod pairer;
pub mod reporter;
pub mod tallier;

// 重导出核心引擎
pub use decomposer::{Decomposer, Decomposition};
pub use error::EngineError;
pub use grouper::FlavorGrouper;
pub use materializer::SliceMaterializer;
pub use numberer::PizzaNumberer;
pub use orchestrator::AggregationOrchestrator;
pub use pairer::{HalfPairer, PairingOutcome};
pub use reporter::{AggregateReport, AggregateReporter, CompletionOpportunity, FlavorStats};
pub use tallier::SectorTallier;
