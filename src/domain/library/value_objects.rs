//! Library Context - Value Objects

use std::fmt;
use uuid::Uuid;

/// 作者唯一标识
///
/// 非拥有的句柄：Book 通过它指向所属作者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(Uuid);

impl AuthorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 图书唯一标识
///
/// 非拥有的句柄：Author 的书单只保存它
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 去除首尾空白；纯空白输入返回 None
pub(crate) fn trimmed(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// ISBN 规范化：缺失或纯空白视为缺失，否则保存去空白后的值（不做格式校验）
pub(crate) fn normalize_isbn(isbn: Option<&str>) -> Option<String> {
    isbn.and_then(trimmed)
}
