//! Bookshelf - 作者与图书的内存领域模型
//!
//! 架构设计: DDD
//!
//! 领域层 (domain/):
//! - Library Context: Author 聚合、Book 实体、Catalog 关联维护
//!
//! 支撑模块:
//! - config: 校验规则与日志配置的多源加载
//! - logging: tracing 订阅器初始化

pub mod config;
pub mod domain;
pub mod logging;

pub use crate::config::{load_config, AppConfig};
pub use domain::library::{
    Author, AuthorId, Book, BookId, Catalog, LibraryError, LibraryResult, ValidationRules,
};

/// 按配置创建目录
pub fn catalog_from_config(config: &AppConfig) -> LibraryResult<Catalog> {
    Catalog::with_rules(config.rules.to_rules())
}
