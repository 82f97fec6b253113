//! Library Context - Errors

use thiserror::Error;

/// 图书馆领域错误
///
/// - `InvalidArgument`: 调用方传入了结构上无效的参数（缺失的引用、空标题），在任何状态变更之前检测
/// - `InvariantViolation`: 字段取值或双向关联的语义规则被破坏
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

impl LibraryError {
    /// 创建参数错误
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// 创建不变量违反错误
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }
}

pub type LibraryResult<T> = Result<T, LibraryError>;
