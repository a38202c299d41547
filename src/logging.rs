//! 日志初始化
//!
//! `RUST_LOG` 优先；未设置时使用配置中的级别。

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// 初始化tracing日志系统
///
/// 已经安装过全局subscriber时静默返回。`log_to_console` 为 false 时不安装。
pub fn init(config: &LoggingConfig) {
    if !config.log_to_console {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();

    tracing::debug!(target: "gr_binding", "Logging initialized at {}", config.level.as_directive());
}
