//! Logging
//!
//! 初始化全局 tracing 订阅器（优先级：RUST_LOG > 配置文件日志级别）

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// 日志初始化错误
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to install tracing subscriber: {0}")]
    InitError(String),
}

/// 构造过滤指令，如 "info,bookshelf=info"
pub fn filter_directive(config: &LogConfig) -> String {
    format!("{},bookshelf={}", config.level, config.level)
}

/// 安装全局订阅器
///
/// 已有全局订阅器时返回 `LoggingError`。
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    let result = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    result.map_err(|e| LoggingError::InitError(e.to_string()))
}
