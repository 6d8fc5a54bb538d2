// ==========================================
// 办公室披萨订购协调系统 - 聚合 API
// ==========================================
// 职责: 统一的聚合入口, 预览看板与付款报告共用
// 两个调用方必须经由同一个编排器取数 —— 这是编号
// 可复现性的前提, 禁止在调用方复刻算法
// ==========================================

use crate::api::error::ApiResult;
use crate::api::validator::OrderLineValidator;
use crate::config::EngineConfig;
use crate::domain::order::OrderLine;
use crate::domain::overrides::OverrideConfig;
use crate::domain::pizza::AggregationResult;
use crate::engine::orchestrator::AggregationOrchestrator;
use crate::engine::reporter::AggregateReport;
use crate::i18n::{t, t_with_args};
use crate::perf::PerfGuard;
use serde::{Deserialize, Serialize};
use tracing::info;

// ==========================================
// DashboardView - 看板响应
// ==========================================

/// 粗粒度实时看板视图 (无编号)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub report: AggregateReport,

    /// 本地化提示语 (有机会 → 鼓励拼单, 无机会 → 全部完整)
    pub message: String,
}

// ==========================================
// AggregationApi - 聚合 API
// ==========================================

pub struct AggregationApi {
    orchestrator: AggregationOrchestrator,
    validator: OrderLineValidator,
}

impl AggregationApi {
    /// 创建 API 实例, 配置在此校验一次
    pub fn new(config: EngineConfig) -> ApiResult<Self> {
        Ok(Self {
            orchestrator: AggregationOrchestrator::new(config)?,
            validator: OrderLineValidator::new(),
        })
    }

    /// 实时看板预览: 每口味整张/余片统计 + 拼满机会
    ///
    /// 无需覆写配置, 只读且无状态。
    pub fn dashboard_preview(&self, lines: &[OrderLine]) -> ApiResult<DashboardView> {
        let _perf = PerfGuard::new("dashboard_preview");

        self.validator.validate(lines)?;
        let report = self.orchestrator.aggregate(lines)?;

        let message = if report.opportunities.is_empty() {
            t("dashboard.all_complete")
        } else {
            t_with_args(
                "dashboard.opportunities",
                &[("count", &report.opportunities.len().to_string())],
            )
        };

        Ok(DashboardView { report, message })
    }

    /// 付款/取餐报告: 完整流水线, 含配对/归属/编号
    ///
    /// 与 `dashboard_preview` 消费同一快照时, 结果保证一致。
    pub fn numbering_report(
        &self,
        lines: &[OrderLine],
        overrides: &OverrideConfig,
    ) -> ApiResult<AggregationResult> {
        let _perf = PerfGuard::new("numbering_report");

        self.validator.validate(lines)?;
        let result = self.orchestrator.numerate(lines, overrides)?;

        info!(
            numbered = result.numbering.total_numbered,
            lines_mapped = result.numbering.assignments.len(),
            "付款报告生成完成"
        );

        Ok(result)
    }
}
