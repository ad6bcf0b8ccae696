//! 日志初始化
//!
//! 安装 `tracing-subscriber` 的 fmt 输出，并把 `log` 记录桥接到 `tracing`。
//! 过滤规则取自 `RUST_LOG`，未设置时使用传入的默认指令。

use tracing_subscriber::EnvFilter;

/// 初始化日志（默认级别 `info`）
///
/// 重复调用时静默忽略。
pub fn init_logger() {
    let _ = try_init_logger("info");
}

/// 初始化日志，`default_directive` 在 `RUST_LOG` 未设置时生效
///
/// # 错误
///
/// 全局 subscriber 已被设置时返回错误。
pub fn try_init_logger(
    default_directive: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))?;

    tracing_log::LogTracer::init_with_filter(log::LevelFilter::Trace)?;

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
