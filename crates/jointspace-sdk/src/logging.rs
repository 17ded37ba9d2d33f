//! 日志初始化
//!
//! 库 crate 只通过 `tracing` 宏记录日志，由应用程序决定是否安装订阅者。

use tracing_subscriber::EnvFilter;

/// 默认日志级别（`RUST_LOG` 未设置时）
pub const DEFAULT_LOG_FILTER: &str = "info";

/// 初始化日志
///
/// - 过滤规则取自 `RUST_LOG`，未设置时为 `info`
/// - `log` crate 的记录通过 `tracing-log` 转发
///
/// 可以重复调用，只有第一次生效。
pub fn init_logger() {
    init_logger_with(DEFAULT_LOG_FILTER);
}

/// 使用指定的默认过滤规则初始化日志（`RUST_LOG` 优先）
///
/// 返回本次调用是否安装了全局订阅者。
pub fn init_logger_with(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();

    let installed = tracing::subscriber::set_global_default(subscriber).is_ok();
    // 已有其他 log 实现时保留原实现
    let _ = tracing_log::LogTracer::init();

    if installed {
        log::debug!("logger initialized");
    }
    installed
}
