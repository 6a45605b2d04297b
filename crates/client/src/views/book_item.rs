use bookshelf_types::Book;

use crate::route::Route;

/// Presentational summary of one record, as the list view shows it.
///
/// Each row links to the detail page for its record; the shell decides
/// when to follow the link.
pub struct BookItem<'a> {
    book: &'a Book,
}

impl<'a> BookItem<'a> {
    pub fn new(book: &'a Book) -> Self {
        Self { book }
    }

    /// One summary line exposing id, title, and author.
    pub fn render(&self) -> String {
        format!(
            "[{}] {} by {}",
            self.book.id, self.book.title, self.book.author
        )
    }

    /// The detail route this row links to.
    pub fn route(&self) -> Route {
        Route::BookDetail(self.book.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Book {
        Book {
            id: "1".into(),
            title: "A".into(),
            author: "X".into(),
        }
    }

    #[test]
    fn summary_exposes_id_title_and_author() {
        let book = book();
        assert_eq!(BookItem::new(&book).render(), "[1] A by X");
    }

    #[test]
    fn row_links_to_the_detail_page() {
        let book = book();
        assert_eq!(BookItem::new(&book).route(), Route::BookDetail("1".into()));
    }
}
