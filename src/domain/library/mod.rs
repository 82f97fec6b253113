//! Library Context - 图书馆限界上下文
//!
//! 职责:
//! - Author 聚合与 Book 实体
//! - 双向关联（作者书单 / 图书作者）的一致性维护
//! - 字段校验与不变量检查

mod author;
mod book;
mod catalog;
mod errors;
mod rules;
mod value_objects;

pub use author::Author;
pub use book::Book;
pub use catalog::Catalog;
pub use errors::{LibraryError, LibraryResult};
pub use rules::{ValidationRules, EARLIEST_LIFE_YEAR, MAX_PUBLICATION_YEAR, MIN_PUBLICATION_YEAR};
pub use value_objects::{AuthorId, BookId};
