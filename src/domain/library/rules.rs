//! Library Context - Validation Rules

use super::{LibraryError, LibraryResult};

/// 最早允许的出版年份（活字印刷术）
pub const MIN_PUBLICATION_YEAR: i32 = 1450;

/// 最晚允许的出版年份（允许未来日期的编目条目）
pub const MAX_PUBLICATION_YEAR: i32 = 3000;

/// 作者出生/去世年份的下限
pub const EARLIEST_LIFE_YEAR: i32 = -3000;

/// 不变量检查使用的数值边界
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_publication_year: i32,
    pub max_publication_year: i32,
    pub earliest_life_year: i32,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_publication_year: MIN_PUBLICATION_YEAR,
            max_publication_year: MAX_PUBLICATION_YEAR,
            earliest_life_year: EARLIEST_LIFE_YEAR,
        }
    }
}

impl ValidationRules {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.min_publication_year > self.max_publication_year {
            return Err("min_publication_year must not exceed max_publication_year");
        }
        Ok(())
    }

    pub fn check_publication_year(&self, year: i32) -> LibraryResult<()> {
        if !(self.min_publication_year..=self.max_publication_year).contains(&year) {
            return Err(LibraryError::invariant(format!(
                "Book.PublicationYear must be in [{}, {}], got {}",
                self.min_publication_year, self.max_publication_year, year
            )));
        }
        Ok(())
    }

    pub fn check_pages(&self, pages: i32) -> LibraryResult<()> {
        if pages <= 0 {
            return Err(LibraryError::invariant(format!(
                "Book.Pages must be positive, got {}",
                pages
            )));
        }
        Ok(())
    }

    /// `field` 只用于错误信息，如 "Author.BirthYear"
    pub fn check_life_year(&self, field: &str, year: Option<i32>) -> LibraryResult<()> {
        match year {
            Some(year) if year < self.earliest_life_year => Err(LibraryError::invariant(format!(
                "{} is unrealistically small: {} < {}",
                field, year, self.earliest_life_year
            ))),
            _ => Ok(()),
        }
    }
}
