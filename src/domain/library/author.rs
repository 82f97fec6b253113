//! Library Context - Author Aggregate

use chrono::{DateTime, Utc};
use std::fmt;

use super::value_objects::trimmed;
use super::{AuthorId, BookId, LibraryError, LibraryResult, ValidationRules};

/// Author 聚合根
///
/// 不变量:
/// - 名和姓去空白后不可为空
/// - 出生/去世年份（若存在）不早于规则下限，且去世年份不早于出生年份
/// - 书单中的每本书都存在，并且都指回本作者
///
/// 书单只保存 `BookId` 句柄，不拥有 Book 的生命周期；
/// 只有 Catalog 在代表 Book 变更关联时才能修改书单。
#[derive(Debug, Clone)]
pub struct Author {
    id: AuthorId,
    first_name: String,
    last_name: String,
    birth_year: Option<i32>,
    death_year: Option<i32>,
    books: Vec<BookId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Author {
    /// 创建新作者（尚无图书）
    pub(super) fn new(
        first_name: &str,
        last_name: &str,
        birth_year: Option<i32>,
        death_year: Option<i32>,
        rules: &ValidationRules,
    ) -> LibraryResult<Self> {
        let now = Utc::now();
        let author = Self {
            id: AuthorId::new(),
            first_name: trimmed(first_name).unwrap_or_default(),
            last_name: trimmed(last_name).unwrap_or_default(),
            birth_year,
            death_year,
            books: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        // 空书单不会查询归属
        author.check_invariant(rules, |_| None)?;
        Ok(author)
    }

    /// 登记一本书（仅供 Catalog 维护双向关联时调用）
    ///
    /// 不去重。追加后重新检查不变量，失败则撤销追加。
    pub(super) fn add_book_internal<F>(
        &mut self,
        book: BookId,
        rules: &ValidationRules,
        owner_of: F,
    ) -> LibraryResult<()>
    where
        F: Fn(&BookId) -> Option<AuthorId>,
    {
        self.books.push(book);
        if let Err(err) = self.check_invariant(rules, owner_of) {
            self.books.pop();
            return Err(err);
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// 移除第一本匹配的书；不存在时不做任何事
    pub(super) fn remove_book_internal<F>(
        &mut self,
        book: &BookId,
        rules: &ValidationRules,
        owner_of: F,
    ) -> LibraryResult<()>
    where
        F: Fn(&BookId) -> Option<AuthorId>,
    {
        let Some(position) = self.books.iter().position(|b| b == book) else {
            return Ok(());
        };

        let removed = self.books.remove(position);
        if let Err(err) = self.check_invariant(rules, owner_of) {
            self.books.insert(position, removed);
            return Err(err);
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// 撤销最近一次登记（最后一个匹配项），用于回滚失败的作者变更
    pub(super) fn forget_book_internal(&mut self, book: &BookId) {
        if let Some(position) = self.books.iter().rposition(|b| b == book) {
            self.books.remove(position);
        }
    }

    /// 把书放回原位置，用于回滚失败的作者变更
    pub(super) fn restore_book_internal(&mut self, position: usize, book: BookId) {
        let position = position.min(self.books.len());
        self.books.insert(position, book);
    }

    /// 回滚时恢复修改时间
    pub(super) fn restore_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    /// 检查全部不变量
    ///
    /// `owner_of` 解析书单中句柄对应图书的所属作者，无法解析的句柄视为缺失项。
    pub(super) fn check_invariant<F>(&self, rules: &ValidationRules, owner_of: F) -> LibraryResult<()>
    where
        F: Fn(&BookId) -> Option<AuthorId>,
    {
        if self.first_name.trim().is_empty() {
            return Err(LibraryError::invariant("Author.FirstName cannot be empty"));
        }
        if self.last_name.trim().is_empty() {
            return Err(LibraryError::invariant("Author.LastName cannot be empty"));
        }

        rules.check_life_year("Author.BirthYear", self.birth_year)?;
        rules.check_life_year("Author.DeathYear", self.death_year)?;
        if let (Some(birth), Some(death)) = (self.birth_year, self.death_year) {
            if death < birth {
                return Err(LibraryError::invariant(format!(
                    "Author.DeathYear ({}) cannot be before BirthYear ({})",
                    death, birth
                )));
            }
        }

        for book in &self.books {
            match owner_of(book) {
                None => {
                    return Err(LibraryError::invariant(format!(
                        "Author.Books contains a missing book: {}",
                        book
                    )))
                }
                Some(owner) if owner != self.id => {
                    return Err(LibraryError::invariant(format!(
                        "Author.Books must reference this author: book {} belongs to {}",
                        book, owner
                    )))
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// 完整姓名，如 "Mary Shelley"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    // Getters
    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_year(&self) -> Option<i32> {
        self.birth_year
    }

    pub fn death_year(&self) -> Option<i32> {
        self.death_year
    }

    /// 只读书单，按登记顺序
    pub fn books(&self) -> &[BookId] {
        &self.books
    }

    pub fn has_book(&self, book: &BookId) -> bool {
        self.books.contains(book)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
