// ==========================================
// 办公室披萨订购协调系统 - 命令行入口
// ==========================================
// 用途: 对一份订单行快照离线运行聚合引擎
// 输入: 订单行 JSON 文件 (+ 可选覆写配置 JSON)
// 输出: stdout 上的 JSON 结果
// ==========================================

use anyhow::{bail, Context, Result};
use pizza_aps::{AggregationApi, EngineConfig, OrderLine, OverrideConfig};

fn usage() -> &'static str {
    "用法: pizza-aps [--aggregate] <lines.json> [overrides.json]\n\
     --aggregate  只输出看板统计 (无配对/编号)"
}

fn main() -> Result<()> {
    // 初始化日志系统
    pizza_aps::logging::init();

    tracing::info!("==================================================");
    tracing::info!("办公室披萨订购协调系统 - 聚合与编号引擎");
    tracing::info!("系统版本: {}", pizza_aps::VERSION);
    tracing::info!("==================================================");

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let aggregate_only = if let Some(pos) = args.iter().position(|a| a == "--aggregate") {
        args.remove(pos);
        true
    } else {
        false
    };

    if args.is_empty() {
        bail!("{}", usage());
    }

    let lines_path = &args[0];
    let lines_json = std::fs::read_to_string(lines_path)
        .with_context(|| format!("无法读取订单行文件: {}", lines_path))?;
    let lines: Vec<OrderLine> = serde_json::from_str(&lines_json)
        .with_context(|| format!("订单行文件格式无效: {}", lines_path))?;

    let overrides: OverrideConfig = match args.get(1) {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("无法读取覆写配置文件: {}", path))?;
            serde_json::from_str(&json)
                .with_context(|| format!("覆写配置文件格式无效: {}", path))?
        }
        None => OverrideConfig::default(),
    };

    let api = AggregationApi::new(EngineConfig::default())?;

    if aggregate_only {
        let view = api.dashboard_preview(&lines)?;
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        let result = api.numbering_report(&lines, &overrides)?;
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
