//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::library::{
    ValidationRules, EARLIEST_LIFE_YEAR, MAX_PUBLICATION_YEAR, MIN_PUBLICATION_YEAR,
};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 校验规则配置
    #[serde(default)]
    pub rules: RulesConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 校验规则配置
#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    /// 最早出版年份
    #[serde(default = "default_min_publication_year")]
    pub min_publication_year: i32,

    /// 最晚出版年份（允许未来日期的编目条目）
    #[serde(default = "default_max_publication_year")]
    pub max_publication_year: i32,

    /// 作者出生/去世年份下限
    #[serde(default = "default_earliest_life_year")]
    pub earliest_life_year: i32,
}

fn default_min_publication_year() -> i32 {
    MIN_PUBLICATION_YEAR
}

fn default_max_publication_year() -> i32 {
    MAX_PUBLICATION_YEAR
}

fn default_earliest_life_year() -> i32 {
    EARLIEST_LIFE_YEAR
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_publication_year: default_min_publication_year(),
            max_publication_year: default_max_publication_year(),
            earliest_life_year: default_earliest_life_year(),
        }
    }
}

impl RulesConfig {
    /// 转换为领域层校验规则
    pub fn to_rules(&self) -> ValidationRules {
        ValidationRules {
            min_publication_year: self.min_publication_year,
            max_publication_year: self.max_publication_year,
            earliest_life_year: self.earliest_life_year,
        }
    }
}

impl From<&RulesConfig> for ValidationRules {
    fn from(config: &RulesConfig) -> Self {
        config.to_rules()
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
