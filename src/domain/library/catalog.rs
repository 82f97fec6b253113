//! Library Context - Catalog
//!
//! 持有全部 Author 与 Book，并代表 Book 维护双向关联。
//! 实体之间只通过 `AuthorId` / `BookId` 句柄互相引用。

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::{Author, AuthorId, Book, BookId, LibraryError, LibraryResult, ValidationRules};

/// 内存目录
///
/// 不变量（每次调用之间都成立）:
/// - 作者书单中的每本书都指回该作者
/// - 每本书都出现在其作者的书单中
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    authors: HashMap<AuthorId, Author>,
    books: HashMap<BookId, Book>,
    rules: ValidationRules,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用自定义校验规则创建目录
    pub fn with_rules(rules: ValidationRules) -> LibraryResult<Self> {
        rules
            .validate()
            .map_err(|reason| LibraryError::invalid_argument("rules", reason))?;
        Ok(Self {
            rules,
            ..Self::default()
        })
    }

    /// 创建并登记作者
    pub fn add_author(
        &mut self,
        first_name: &str,
        last_name: &str,
        birth_year: Option<i32>,
        death_year: Option<i32>,
    ) -> LibraryResult<AuthorId> {
        let author = Author::new(first_name, last_name, birth_year, death_year, &self.rules)
            .map_err(|err| rejected("add_author", err))?;
        let author_id = author.id();
        tracing::debug!(author_id = %author_id, name = %author, "Author registered");
        self.authors.insert(author_id, author);
        Ok(author_id)
    }

    /// 创建图书并登记到作者书单
    ///
    /// 作者不存在时返回参数错误，且不修改任何作者。
    pub fn add_book(
        &mut self,
        title: &str,
        author: AuthorId,
        publication_year: i32,
        pages: i32,
        isbn: Option<&str>,
    ) -> LibraryResult<BookId> {
        if !self.authors.contains_key(&author) {
            return Err(rejected("add_book", author_not_found("author", author)));
        }

        let authors = &self.authors;
        let book = Book::new(title, author, publication_year, pages, isbn, &self.rules, |id| {
            authors.contains_key(id)
        })
        .map_err(|err| rejected("add_book", err))?;
        let book_id = book.id();
        self.books.insert(book_id, book);

        let books = &self.books;
        let registered = match self.authors.get_mut(&author) {
            Some(owner) => owner.add_book_internal(book_id, &self.rules, owner_lookup(books)),
            None => Err(author_not_found("author", author)),
        };
        if let Err(err) = registered {
            self.books.remove(&book_id);
            return Err(rejected("add_book", err));
        }

        tracing::debug!(book_id = %book_id, author_id = %author, "Book registered");
        Ok(book_id)
    }

    /// 修改标题
    pub fn change_title(&mut self, book: BookId, new_title: &str) -> LibraryResult<()> {
        self.book_entry(book)?
            .change_title(new_title)
            .map_err(|err| rejected("change_title", err))?;
        tracing::debug!(book_id = %book, "Book title changed");
        Ok(())
    }

    /// 变更作者，同时更新新旧双方的书单
    ///
    /// 新作者与当前作者相同时不做任何事。任一步失败都会撤销之前的步骤。
    pub fn change_author(&mut self, book: BookId, new_author: AuthorId) -> LibraryResult<()> {
        if !self.authors.contains_key(&new_author) {
            return Err(rejected("change_author", author_not_found("new_author", new_author)));
        }
        let current = self.book_entry(book)?.author();
        if current == new_author {
            return Ok(());
        }

        let rules = self.rules;
        let snapshot = self.snapshot_reassignment(book, current, new_author);

        // 1. 从原作者书单移除
        {
            let books = &self.books;
            if let Some(old) = self.authors.get_mut(&current) {
                old.remove_book_internal(&book, &rules, owner_lookup(books))
                    .map_err(|err| rejected("change_author", err))?;
            }
        }

        // 2. 改写句柄
        if let Some(entry) = self.books.get_mut(&book) {
            entry.reassign_author(new_author);
        }

        // 3. 登记到新作者书单，再检查图书自身的不变量
        let linked = {
            let books = &self.books;
            match self.authors.get_mut(&new_author) {
                Some(target) => target.add_book_internal(book, &rules, owner_lookup(books)),
                None => Err(author_not_found("new_author", new_author)),
            }
        };
        let checked = linked.and_then(|()| {
            let authors = &self.authors;
            match self.books.get(&book) {
                Some(entry) => entry.check_invariant(&rules, |id| authors.contains_key(id)),
                None => Err(book_not_found(book)),
            }
        });

        if let Err(err) = checked {
            self.undo_reassignment(snapshot);
            return Err(rejected("change_author", err));
        }

        tracing::debug!(
            book_id = %book,
            from = %current,
            to = %new_author,
            "Book author changed"
        );
        Ok(())
    }

    pub fn change_publication_year(&mut self, book: BookId, new_year: i32) -> LibraryResult<()> {
        let rules = self.rules;
        self.book_entry(book)?
            .change_publication_year(new_year, &rules)
            .map_err(|err| rejected("change_publication_year", err))?;
        tracing::debug!(book_id = %book, year = new_year, "Book publication year changed");
        Ok(())
    }

    pub fn change_pages(&mut self, book: BookId, new_pages: i32) -> LibraryResult<()> {
        let rules = self.rules;
        self.book_entry(book)?
            .change_pages(new_pages, &rules)
            .map_err(|err| rejected("change_pages", err))?;
        tracing::debug!(book_id = %book, pages = new_pages, "Book pages changed");
        Ok(())
    }

    /// 设置 ISBN；`None` 或纯空白即清除
    pub fn set_isbn(&mut self, book: BookId, isbn: Option<&str>) -> LibraryResult<()> {
        self.book_entry(book)?.set_isbn(isbn);
        tracing::debug!(book_id = %book, "Book ISBN updated");
        Ok(())
    }

    /// 重新检查整个目录的双向一致性，返回第一个违反项
    pub fn check_consistency(&self) -> LibraryResult<()> {
        for author in self.authors.values() {
            author.check_invariant(&self.rules, owner_lookup(&self.books))?;
        }
        for book in self.books.values() {
            book.check_invariant(&self.rules, |id| self.authors.contains_key(id))?;
            let listed = self
                .authors
                .get(&book.author())
                .is_some_and(|author| author.has_book(&book.id()));
            if !listed {
                return Err(LibraryError::invariant(format!(
                    "Book {} is not listed by its author {}",
                    book.id(),
                    book.author()
                )));
            }
        }
        Ok(())
    }

    /// 形如 "Frankenstein (1818) by Mary Shelley"
    pub fn describe_book(&self, book: BookId) -> LibraryResult<String> {
        let entry = self.books.get(&book).ok_or_else(|| book_not_found(book))?;
        let author = self
            .authors
            .get(&entry.author())
            .ok_or_else(|| author_not_found("author", entry.author()))?;
        Ok(format!(
            "{} ({}) by {}",
            entry.title(),
            entry.publication_year(),
            author
        ))
    }

    // Queries
    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(&id)
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(&id)
    }

    /// 作者的图书，按登记顺序
    pub fn books_of(&self, author: AuthorId) -> LibraryResult<Vec<&Book>> {
        let author = self
            .authors
            .get(&author)
            .ok_or_else(|| author_not_found("author", author))?;
        Ok(author
            .books()
            .iter()
            .filter_map(|id| self.books.get(id))
            .collect())
    }

    pub fn authors(&self) -> impl Iterator<Item = &Author> {
        self.authors.values()
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    fn book_entry(&mut self, book: BookId) -> LibraryResult<&mut Book> {
        self.books
            .get_mut(&book)
            .ok_or_else(|| rejected("book_lookup", book_not_found(book)))
    }

    fn snapshot_reassignment(
        &self,
        book: BookId,
        previous: AuthorId,
        attempted: AuthorId,
    ) -> ReassignSnapshot {
        let old = self.authors.get(&previous);
        ReassignSnapshot {
            book,
            previous,
            attempted,
            position: old.and_then(|a| a.books().iter().position(|b| *b == book)),
            book_updated_at: self.books.get(&book).map(Book::updated_at),
            previous_updated_at: old.map(Author::updated_at),
            attempted_updated_at: self.authors.get(&attempted).map(Author::updated_at),
        }
    }

    /// 把一次失败的作者变更恢复到调用前的状态（含 updated_at）
    fn undo_reassignment(&mut self, snapshot: ReassignSnapshot) {
        let ReassignSnapshot {
            book,
            previous,
            attempted,
            position,
            book_updated_at,
            previous_updated_at,
            attempted_updated_at,
        } = snapshot;

        if let Some(target) = self.authors.get_mut(&attempted) {
            target.forget_book_internal(&book);
            if let Some(at) = attempted_updated_at {
                target.restore_updated_at(at);
            }
        }
        if let Some(entry) = self.books.get_mut(&book) {
            entry.reassign_author(previous);
            if let Some(at) = book_updated_at {
                entry.restore_updated_at(at);
            }
        }
        if let Some(old) = self.authors.get_mut(&previous) {
            if let Some(position) = position {
                old.restore_book_internal(position, book);
            }
            if let Some(at) = previous_updated_at {
                old.restore_updated_at(at);
            }
        }
    }
}

/// 作者变更前的状态
struct ReassignSnapshot {
    book: BookId,
    previous: AuthorId,
    attempted: AuthorId,
    position: Option<usize>,
    book_updated_at: Option<DateTime<Utc>>,
    previous_updated_at: Option<DateTime<Utc>>,
    attempted_updated_at: Option<DateTime<Utc>>,
}

fn owner_lookup(books: &HashMap<BookId, Book>) -> impl Fn(&BookId) -> Option<AuthorId> + '_ {
    move |id: &BookId| books.get(id).map(Book::author)
}

fn author_not_found(argument: &'static str, id: AuthorId) -> LibraryError {
    LibraryError::invalid_argument(argument, format!("Author not found: {}", id))
}

fn book_not_found(id: BookId) -> LibraryError {
    LibraryError::invalid_argument("book", format!("Book not found: {}", id))
}

fn rejected(operation: &'static str, err: LibraryError) -> LibraryError {
    tracing::warn!(operation, error = %err, "Catalog operation rejected");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::library::{MAX_PUBLICATION_YEAR, MIN_PUBLICATION_YEAR};

    fn shelley(catalog: &mut Catalog) -> AuthorId {
        catalog.add_author("Mary", "Shelley", Some(1797), Some(1851)).unwrap()
    }

    #[test]
    fn test_author_constructs_with_minimum_data() {
        let mut catalog = Catalog::new();
        let id = catalog.add_author("Jane", "Austen", None, None).unwrap();

        let author = catalog.author(id).unwrap();
        assert_eq!(author.first_name(), "Jane");
        assert_eq!(author.last_name(), "Austen");
        assert!(author.books().is_empty());
    }

    #[test]
    fn test_invalid_author_is_not_registered() {
        let mut catalog = Catalog::new();
        let err = catalog
            .add_author("Leo", "Tolstoy", Some(1828), Some(1827))
            .unwrap_err();
        assert!(err.is_invariant_violation());
        assert_eq!(catalog.author_count(), 0);
    }

    #[test]
    fn test_book_registers_with_author() {
        let mut catalog = Catalog::new();
        let author = shelley(&mut catalog);
        let book = catalog.add_book("Frankenstein", author, 1818, 280, None).unwrap();

        let entry = catalog.book(book).unwrap();
        assert_eq!(entry.title(), "Frankenstein");
        assert_eq!(entry.publication_year(), 1818);
        assert_eq!(entry.pages(), 280);
        assert_eq!(entry.author(), author);

        let books = catalog.author(author).unwrap().books();
        assert_eq!(books, &[book]);
    }

    #[test]
    fn test_books_keep_insertion_order() {
        let mut catalog = Catalog::new();
        let author = shelley(&mut catalog);
        let first = catalog.add_book("Frankenstein", author, 1818, 280, None).unwrap();
        let second = catalog.add_book("Mathilda", author, 1819, 180, None).unwrap();
        let third = catalog.add_book("The Last Man", author, 1826, 479, None).unwrap();

        let titles: Vec<_> = catalog
            .books_of(author)
            .unwrap()
            .iter()
            .map(|b| b.title())
            .collect();
        assert_eq!(titles, ["Frankenstein", "Mathilda", "The Last Man"]);
        assert_eq!(catalog.author(author).unwrap().books(), &[first, second, third]);
    }

    #[test]
    fn test_missing_author_is_invalid_argument() {
        let mut catalog = Catalog::new();
        let author = shelley(&mut catalog);

        let err = catalog
            .add_book("Test", AuthorId::new(), 2000, 100, None)
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(catalog.book_count(), 0);
        assert!(catalog.author(author).unwrap().books().is_empty());
    }

    #[test]
    fn test_author_from_other_catalog_is_absent() {
        let mut other = Catalog::new();
        let foreign = shelley(&mut other);

        let mut catalog = Catalog::new();
        let err = catalog.add_book("Test", foreign, 2000, 100, None).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_invalid_book_leaves_author_untouched() {
        let mut catalog = Catalog::new();
        let author = shelley(&mut catalog);

        for (title, year, pages) in [
            ("", 1818, 200),
            (" ", 1818, 200),
            ("Some Title", MIN_PUBLICATION_YEAR - 1, 123),
            ("Some Title", MAX_PUBLICATION_YEAR + 1, 123),
            ("Some Title", 2001, 0),
            ("Some Title", 2001, -1),
        ] {
            let err = catalog.add_book(title, author, year, pages, None).unwrap_err();
            assert!(err.is_invariant_violation(), "{:?}", (title, year, pages));
        }
        assert_eq!(catalog.book_count(), 0);
        assert!(catalog.author(author).unwrap().books().is_empty());
    }

    #[test]
    fn test_boundary_values_accepted() {
        let mut catalog = Catalog::new();
        let author = shelley(&mut catalog);

        assert!(catalog.add_book("Early", author, MIN_PUBLICATION_YEAR, 1, None).is_ok());
        assert!(catalog.add_book("Late", author, MAX_PUBLICATION_YEAR, 1, None).is_ok());
        assert!(catalog.check_consistency().is_ok());
    }

    #[test]
    fn test_change_title() {
        let mut catalog = Catalog::new();
        let author = shelley(&mut catalog);
        let book = catalog.add_book("Frankenstein", author, 1818, 280, None).unwrap();

        catalog
            .change_title(book, "Frankenstein: The Modern Prometheus")
            .unwrap();
        assert_eq!(
            catalog.book(book).unwrap().title(),
            "Frankenstein: The Modern Prometheus"
        );

        for blank in ["", " "] {
            let err = catalog.change_title(book, blank).unwrap_err();
            assert!(err.is_invalid_argument());
        }
        assert_eq!(
            catalog.book(book).unwrap().title(),
            "Frankenstein: The Modern Prometheus"
        );
    }

    #[test]
    fn test_change_title_is_idempotent() {
        let mut catalog = Catalog::new();
        let author = shelley(&mut catalog);
        let book = catalog.add_book("Frankenstein", author, 1818, 280, None).unwrap();

        catalog.change_title(book, "Mathilda").unwrap();
        let once = catalog.describe_book(book).unwrap();
        catalog.change_title(book, "Mathilda").unwrap();
        assert_eq!(catalog.describe_book(book).unwrap(), once);
    }

    #[test]
    fn test_change_author_updates_both_sides() {
        let mut catalog = Catalog::new();
        let mary = catalog.add_author("Mary", "Shelley", None, None).unwrap();
        let percy = catalog.add_author("Percy", "Shelley", None, None).unwrap();
        let book = catalog.add_book("Frankenstein", mary, 1818, 280, None).unwrap();

        catalog.change_author(book, percy).unwrap();

        assert_eq!(catalog.book(book).unwrap().author(), percy);
        assert!(!catalog.author(mary).unwrap().has_book(&book));
        assert!(catalog.author(percy).unwrap().has_book(&book));
        assert!(catalog.check_consistency().is_ok());
    }

    #[test]
    fn test_change_author_to_current_is_noop() {
        let mut catalog = Catalog::new();
        let mary = shelley(&mut catalog);
        let book = catalog.add_book("Frankenstein", mary, 1818, 280, None).unwrap();
        let other = catalog.add_book("Mathilda", mary, 1819, 180, None).unwrap();

        catalog.change_author(book, mary).unwrap();
        assert_eq!(catalog.author(mary).unwrap().books(), &[book, other]);
    }

    #[test]
    fn test_change_author_missing_is_invalid_argument() {
        let mut catalog = Catalog::new();
        let mary = shelley(&mut catalog);
        let book = catalog.add_book("Frankenstein", mary, 1818, 280, None).unwrap();

        let err = catalog.change_author(book, AuthorId::new()).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(catalog.book(book).unwrap().author(), mary);
        assert_eq!(catalog.author(mary).unwrap().books(), &[book]);
    }

    #[test]
    fn test_unknown_book_is_invalid_argument() {
        let mut catalog = Catalog::new();
        let mary = shelley(&mut catalog);
        let missing = BookId::new();

        assert!(catalog.change_title(missing, "Title").unwrap_err().is_invalid_argument());
        assert!(catalog.change_author(missing, mary).unwrap_err().is_invalid_argument());
        assert!(catalog.change_pages(missing, 10).unwrap_err().is_invalid_argument());
        assert!(catalog.set_isbn(missing, None).unwrap_err().is_invalid_argument());
        assert!(catalog.describe_book(missing).is_err());
    }

    #[test]
    fn test_change_publication_year_respects_invariant() {
        let mut catalog = Catalog::new();
        let author = shelley(&mut catalog);
        let book = catalog.add_book("Frankenstein", author, 1818, 280, None).unwrap();

        catalog.change_publication_year(book, 2000).unwrap();
        assert_eq!(catalog.book(book).unwrap().publication_year(), 2000);

        let err = catalog
            .change_publication_year(book, MIN_PUBLICATION_YEAR - 5)
            .unwrap_err();
        assert!(err.is_invariant_violation());
        assert_eq!(catalog.book(book).unwrap().publication_year(), 2000);

        assert!(catalog.change_publication_year(book, MAX_PUBLICATION_YEAR + 1).is_err());
        assert!(catalog.change_publication_year(book, MAX_PUBLICATION_YEAR).is_ok());
        assert_eq!(catalog.book(book).unwrap().publication_year(), MAX_PUBLICATION_YEAR);
        assert!(catalog.change_publication_year(book, MIN_PUBLICATION_YEAR).is_ok());
        assert_eq!(catalog.book(book).unwrap().publication_year(), MIN_PUBLICATION_YEAR);
    }

    #[test]
    fn test_change_pages_respects_invariant() {
        let mut catalog = Catalog::new();
        let author = shelley(&mut catalog);
        let book = catalog.add_book("Frankenstein", author, 1818, 280, None).unwrap();

        catalog.change_pages(book, 300).unwrap();
        assert_eq!(catalog.book(book).unwrap().pages(), 300);

        assert!(catalog.change_pages(book, 0).unwrap_err().is_invariant_violation());
        assert!(catalog.change_pages(book, -10).unwrap_err().is_invariant_violation());
        assert_eq!(catalog.book(book).unwrap().pages(), 300);

        catalog.change_pages(book, 1).unwrap();
        assert_eq!(catalog.book(book).unwrap().pages(), 1);
    }

    #[test]
    fn test_set_isbn_stores_trimmed_or_none() {
        let mut catalog = Catalog::new();
        let author = shelley(&mut catalog);
        let book = catalog.add_book("Frankenstein", author, 1818, 280, None).unwrap();

        catalog.set_isbn(book, Some("  978-3-16-148410-0 ")).unwrap();
        assert_eq!(catalog.book(book).unwrap().isbn(), Some("978-3-16-148410-0"));

        catalog.set_isbn(book, None).unwrap();
        assert_eq!(catalog.book(book).unwrap().isbn(), None);

        catalog.set_isbn(book, Some("  ")).unwrap();
        assert_eq!(catalog.book(book).unwrap().isbn(), None);
    }

    #[test]
    fn test_author_books_always_reference_back() {
        let mut catalog = Catalog::new();
        let mary = shelley(&mut catalog);
        let percy = catalog.add_author("Percy", "Shelley", Some(1792), Some(1822)).unwrap();
        let b1 = catalog.add_book("Frankenstein", mary, 1818, 280, None).unwrap();
        let b2 = catalog.add_book("Mathilda", mary, 1819, 180, None).unwrap();
        let b3 = catalog.add_book("Queen Mab", percy, 1813, 120, None).unwrap();

        catalog.change_author(b3, mary).unwrap();
        catalog.change_author(b1, percy).unwrap();

        for author in catalog.authors() {
            for book in catalog.books_of(author.id()).unwrap() {
                assert_eq!(book.author(), author.id());
            }
        }
        for book in catalog.books() {
            assert!(catalog.author(book.author()).unwrap().has_book(&book.id()));
        }
        assert_eq!(catalog.author(mary).unwrap().books(), &[b2, b3]);
        assert_eq!(catalog.author(percy).unwrap().books(), &[b1]);
        assert!(catalog.check_consistency().is_ok());
    }

    #[test]
    fn test_describe_book() {
        let mut catalog = Catalog::new();
        let author = shelley(&mut catalog);
        let book = catalog.add_book("Frankenstein", author, 1818, 280, None).unwrap();

        assert_eq!(
            catalog.describe_book(book).unwrap(),
            "Frankenstein (1818) by Mary Shelley"
        );
    }

    #[test]
    fn test_custom_rules() {
        let rules = ValidationRules {
            min_publication_year: 1900,
            max_publication_year: 2100,
            ..ValidationRules::default()
        };
        let mut catalog = Catalog::with_rules(rules).unwrap();
        let author = catalog.add_author("Ursula", "Le Guin", Some(1929), Some(2018)).unwrap();

        assert!(catalog.add_book("Old", author, 1818, 100, None).is_err());
        assert!(catalog.add_book("The Dispossessed", author, 1974, 387, None).is_ok());
    }

    #[test]
    fn test_inverted_rules_rejected() {
        let rules = ValidationRules {
            min_publication_year: 2100,
            max_publication_year: 1900,
            ..ValidationRules::default()
        };
        assert!(Catalog::with_rules(rules).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_failed_change_author_restores_previous_state() {
        let mut catalog = Catalog::new();
        let mary = shelley(&mut catalog);
        let percy = catalog.add_author("Percy", "Shelley", None, None).unwrap();
        let b1 = catalog.add_book("Frankenstein", mary, 1818, 280, None).unwrap();
        let b2 = catalog.add_book("Mathilda", mary, 1819, 180, None).unwrap();

        // 目标作者书单中混入一本不存在的书，使登记步骤失败
        let ghost = BookId::new();
        let rules = catalog.rules;
        catalog
            .authors
            .get_mut(&percy)
            .unwrap()
            .add_book_internal(ghost, &rules, |_| Some(percy))
            .unwrap();

        let mary_updated = catalog.author(mary).unwrap().updated_at();
        let percy_updated = catalog.author(percy).unwrap().updated_at();
        let book_updated = catalog.book(b1).unwrap().updated_at();

        let err = catalog.change_author(b1, percy).unwrap_err();
        assert!(err.is_invariant_violation());
        assert!(err.to_string().contains("missing book"));

        assert_eq!(catalog.author(mary).unwrap().books(), &[b1, b2]);
        assert_eq!(catalog.book(b1).unwrap().author(), mary);
        assert_eq!(catalog.author(percy).unwrap().books(), &[ghost]);

        assert_eq!(catalog.author(mary).unwrap().updated_at(), mary_updated);
        assert_eq!(catalog.author(percy).unwrap().updated_at(), percy_updated);
        assert_eq!(catalog.book(b1).unwrap().updated_at(), book_updated);
    }

    #[test]
    fn test_undo_reassignment_restores_position() {
        let mut catalog = Catalog::new();
        let mary = shelley(&mut catalog);
        let percy = catalog.add_author("Percy", "Shelley", None, None).unwrap();
        let b1 = catalog.add_book("Frankenstein", mary, 1818, 280, None).unwrap();
        let b2 = catalog.add_book("Mathilda", mary, 1819, 180, None).unwrap();

        let snapshot = catalog.snapshot_reassignment(b1, mary, percy);
        catalog.change_author(b1, percy).unwrap();
        catalog.undo_reassignment(snapshot);

        assert_eq!(catalog.author(mary).unwrap().books(), &[b1, b2]);
        assert!(catalog.author(percy).unwrap().books().is_empty());
        assert!(catalog.check_consistency().is_ok());
    }
}
