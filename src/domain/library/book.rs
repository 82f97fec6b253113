//! Library Context - Book Entity

use chrono::{DateTime, Utc};

use super::value_objects::{normalize_isbn, trimmed};
use super::{AuthorId, BookId, LibraryError, LibraryResult, ValidationRules};

/// 图书
///
/// 不变量:
/// - 标题去空白后不可为空
/// - 必须有且只有一个已登记的作者
/// - 出版年份在规则区间内（默认 [1450, 3000]）
/// - 页数为正
///
/// 所有修改都先校验再提交，失败的调用不会改变任何字段。
#[derive(Debug, Clone)]
pub struct Book {
    id: BookId,
    title: String,
    author: AuthorId,
    publication_year: i32,
    pages: i32,
    isbn: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Book {
    /// 创建新图书并执行与修改操作相同的不变量检查
    ///
    /// `is_registered` 判断作者句柄是否存在。
    /// 反向登记到作者书单由 Catalog 在检查通过后完成。
    pub(super) fn new<F>(
        title: &str,
        author: AuthorId,
        publication_year: i32,
        pages: i32,
        isbn: Option<&str>,
        rules: &ValidationRules,
        is_registered: F,
    ) -> LibraryResult<Self>
    where
        F: Fn(&AuthorId) -> bool,
    {
        let now = Utc::now();
        let book = Self {
            id: BookId::new(),
            title: trimmed(title).unwrap_or_default(),
            author,
            publication_year,
            pages,
            isbn: normalize_isbn(isbn),
            created_at: now,
            updated_at: now,
        };
        book.check_invariant(rules, is_registered)?;
        Ok(book)
    }

    /// 修改标题；空标题属于调用方参数错误
    pub(super) fn change_title(&mut self, new_title: &str) -> LibraryResult<()> {
        let title = trimmed(new_title)
            .ok_or_else(|| LibraryError::invalid_argument("new_title", "Title cannot be empty"))?;
        self.title = title;
        self.touch();
        Ok(())
    }

    pub(super) fn change_publication_year(
        &mut self,
        new_year: i32,
        rules: &ValidationRules,
    ) -> LibraryResult<()> {
        rules.check_publication_year(new_year)?;
        self.publication_year = new_year;
        self.touch();
        Ok(())
    }

    pub(super) fn change_pages(&mut self, new_pages: i32, rules: &ValidationRules) -> LibraryResult<()> {
        rules.check_pages(new_pages)?;
        self.pages = new_pages;
        self.touch();
        Ok(())
    }

    /// 设置 ISBN；缺失或纯空白即清除
    pub(super) fn set_isbn(&mut self, isbn: Option<&str>) {
        self.isbn = normalize_isbn(isbn);
        self.touch();
    }

    /// 改写作者句柄，返回原作者（双方书单由 Catalog 同步）
    pub(super) fn reassign_author(&mut self, author: AuthorId) -> AuthorId {
        let previous = std::mem::replace(&mut self.author, author);
        self.touch();
        previous
    }

    pub(super) fn check_invariant<F>(&self, rules: &ValidationRules, is_registered: F) -> LibraryResult<()>
    where
        F: Fn(&AuthorId) -> bool,
    {
        if self.title.trim().is_empty() {
            return Err(LibraryError::invariant("Book.Title cannot be empty"));
        }
        if !is_registered(&self.author) {
            return Err(LibraryError::invariant(format!(
                "Book.Author cannot be missing: {}",
                self.author
            )));
        }
        rules.check_publication_year(self.publication_year)?;
        rules.check_pages(self.pages)?;
        Ok(())
    }

    /// 回滚时恢复修改时间
    pub(super) fn restore_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    // Getters
    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn pages(&self) -> i32 {
        self.pages
    }

    pub fn isbn(&self) -> Option<&str> {
        self.isbn.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
