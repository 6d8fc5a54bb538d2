use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Instant;

// 0 = 未初始化, 1 = 关闭, 2 = 开启
static PERF_ENABLED: AtomicU8 = AtomicU8::new(0);

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

fn perf_enabled() -> bool {
    match PERF_ENABLED.load(Ordering::Relaxed) {
        0 => {
            // Debug 默认开启；Release 默认关闭（可通过环境变量开启）
            let enabled = match std::env::var("PIZZA_APS_PERF") {
                Ok(v) => is_true(&v),
                Err(_) => cfg!(debug_assertions),
            };
            PERF_ENABLED.store(if enabled { 2 } else { 1 }, Ordering::Relaxed);
            enabled
        }
        2 => true,
        _ => false,
    }
}

/// 性能统计 Guard：记录操作耗时 elapsed_ms
///
/// 开关：`PIZZA_APS_PERF=1` 强制开启
///
/// 使用方式：
/// ```ignore
/// let _perf = pizza_aps::perf::PerfGuard::new("numbering_report");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    enabled: bool,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
            enabled: perf_enabled(),
        }
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        if !self.enabled {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms,
            "done"
        );
    }
}
