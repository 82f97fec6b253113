//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（bookshelf.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::domain::library::{EARLIEST_LIFE_YEAR, MAX_PUBLICATION_YEAR, MIN_PUBLICATION_YEAR};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["bookshelf", "bookshelf.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "BOOKSHELF";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `BOOKSHELF_`，层级分隔符 `__`）
/// 2. 配置文件（bookshelf.toml 或 bookshelf.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `BOOKSHELF_RULES__MIN_PUBLICATION_YEAR=1500`
/// - `BOOKSHELF_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("rules.min_publication_year", MIN_PUBLICATION_YEAR as i64)?
        .set_default("rules.max_publication_year", MAX_PUBLICATION_YEAR as i64)?
        .set_default("rules.earliest_life_year", EARLIEST_LIFE_YEAR as i64)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: BOOKSHELF_RULES__MAX_PUBLICATION_YEAR=2100
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    config
        .rules
        .to_rules()
        .validate()
        .map_err(|reason| ConfigError::ValidationError(reason.to_string()))?;

    if config.log.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Log level cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Bookshelf Configuration ===");
    tracing::info!(
        "Publication Years: [{}, {}]",
        config.rules.min_publication_year,
        config.rules.max_publication_year
    );
    tracing::info!("Earliest Life Year: {}", config.rules.earliest_life_year);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("Log JSON: {}", config.log.json);
    tracing::info!("===============================");
}
