//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Library Context: 作者与图书

pub mod library;
