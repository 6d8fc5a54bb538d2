// ==========================================
// 办公室披萨订购协调系统 - 引擎编排器
// ==========================================
// 用途: 协调六个核心引擎的执行顺序
// Materializer → Grouper → Decomposer → Pairer → Tallier → Numberer
// 统计引擎 (Reporter) 只消费 Materializer/Grouper 输出
// ==========================================
// 红线: 预览看板与付款报告都必须经由本编排器取数,
//       两个调用方各自复刻算法是历史事故的根源
// ==========================================

use crate::config::EngineConfig;
use crate::domain::order::{sort_canonical, OrderLine};
use crate::domain::overrides::OverrideConfig;
use crate::domain::pizza::{AggregationResult, LeftoverSlices, PizzaUnit};
use crate::engine::decomposer::{Decomposer, Decomposition};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::grouper::FlavorGrouper;
use crate::engine::materializer::SliceMaterializer;
use crate::engine::numberer::PizzaNumberer;
use crate::engine::pairer::{HalfPairer, PairingOutcome};
use crate::engine::reporter::{AggregateReport, AggregateReporter};
use crate::engine::tallier::SectorTallier;
use tracing::{debug, info};

// ==========================================
// AggregationOrchestrator - 引擎编排器
// ==========================================

pub struct AggregationOrchestrator {
    materializer: SliceMaterializer,
    grouper: FlavorGrouper,
    decomposer: Decomposer,
    pairer: HalfPairer,
    tallier: SectorTallier,
    numberer: PizzaNumberer,
    reporter: AggregateReporter,
}

impl AggregationOrchestrator {
    /// 创建编排器, 构造时校验一次配置
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate().map_err(EngineError::InvalidConfig)?;
        Ok(Self {
            materializer: SliceMaterializer::new(),
            grouper: FlavorGrouper::new(),
            decomposer: Decomposer::new(),
            pairer: HalfPairer::new(),
            tallier: SectorTallier::new(&config),
            numberer: PizzaNumberer::new(),
            reporter: AggregateReporter::new(),
        })
    }

    /// 完整聚合流水线: 物化 → 分组 → 分解 → 配对 → 计数 → 编号
    ///
    /// 单次运行完全同步且确定: 相同输入 + 相同覆写 ⇒ 相同输出。
    /// 不同事件的运行可并发调用, 互不协调。
    ///
    /// # 参数
    /// - `lines`: 订单行快照 (顺序任意, 内部排成规范顺序)
    /// - `overrides`: 人工覆写配置, 运行期间只读
    pub fn numerate(
        &self,
        lines: &[OrderLine],
        overrides: &OverrideConfig,
    ) -> EngineResult<AggregationResult> {
        info!(
            lines_count = lines.len(),
            pairing_overrides = overrides.pairing.len(),
            sector_overrides = overrides.sector.len(),
            "开始聚合编号运行"
        );

        // 步骤0: 排成规范顺序 (下单时间, 订单 ID, 订单行 ID)
        let mut lines = lines.to_vec();
        sort_canonical(&mut lines);

        // 步骤1: 物化切片
        debug!("步骤1: 物化切片");
        let slices = self.materializer.materialize(&lines)?;
        let total_slices = slices.len();

        // 步骤2: 口味分组 + 域切分
        debug!("步骤2: 口味分组与域切分");
        let groups = self.grouper.group(slices);
        let (savory_groups, sweet_groups) = self.grouper.split_domains(groups);

        // 步骤3: 两域各自分解
        debug!("步骤3: 口味分解");
        let savory: Decomposition = self.decomposer.decompose(savory_groups);
        let sweet: Decomposition = self.decomposer.decompose(sweet_groups);

        // 步骤4: 两域各自配对 (覆写只在域内解析)
        debug!("步骤4: 半张配对");
        let savory_pairs: PairingOutcome =
            self.pairer.pair(savory.half_candidates, &overrides.pairing);
        let sweet_pairs: PairingOutcome =
            self.pairer.pair(sweet.half_candidates, &overrides.pairing);

        // 步骤5: 规范拼接顺序 - 咸整张, 甜整张, 咸拼合, 甜拼合
        // 时间戳相同的披萨在编号排序中保持这一顺序
        let mut units: Vec<PizzaUnit> = Vec::new();
        units.extend(savory.wholes.into_iter().map(PizzaUnit::Whole));
        units.extend(sweet.wholes.into_iter().map(PizzaUnit::Whole));
        units.extend(savory_pairs.paired.into_iter().map(PizzaUnit::PairedHalf));
        units.extend(sweet_pairs.paired.into_iter().map(PizzaUnit::PairedHalf));

        let mut leftovers: Vec<LeftoverSlices> = Vec::new();
        leftovers.extend(savory.leftovers);
        leftovers.extend(sweet.leftovers);
        leftovers.extend(savory_pairs.waiting);
        leftovers.extend(sweet_pairs.waiting);

        // 切片守恒: 分解+配对后每片归属唯一单元 (违反即编程错误)
        debug_assert_eq!(
            units.iter().map(|u| u.slice_count()).sum::<usize>()
                + leftovers.iter().map(|l| l.slices.len()).sum::<usize>(),
            total_slices,
        );

        // 步骤6: 部门计数与归属判定
        debug!("步骤6: 部门计数");
        let completed = self.tallier.tally(units, &overrides.sector);

        // 步骤7: 编号
        debug!("步骤7: 披萨编号");
        let (completed, numbering) = self.numberer.number(completed);

        info!(
            completed_count = completed.len(),
            leftovers_count = leftovers.len(),
            numbered = numbering.total_numbered,
            total_slices,
            "聚合编号运行完成"
        );

        Ok(AggregationResult {
            completed,
            leftovers,
            numbering,
            total_slices,
        })
    }

    /// 轻量统计通道: 物化 → 分组 → 统计 (无配对, 无编号, 无覆写)
    pub fn aggregate(&self, lines: &[OrderLine]) -> EngineResult<AggregateReport> {
        let mut lines = lines.to_vec();
        sort_canonical(&mut lines);

        let slices = self.materializer.materialize(&lines)?;
        let groups = self.grouper.group(slices);
        Ok(self.reporter.report(&groups))
    }
}
