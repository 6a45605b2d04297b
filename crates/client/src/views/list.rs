use bookshelf_types::Book;

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::views::BookItem;

/// The list page: the whole collection, one summary row per record.
pub struct ListView {
    books: Vec<Book>,
}

impl ListView {
    /// Mount the view: one GET for the collection, stored verbatim.
    ///
    /// There is no retry and no error state; a failed fetch propagates to
    /// the caller.
    pub async fn mount(api: &ApiClient) -> ClientResult<Self> {
        Ok(Self {
            books: api.list_books().await?,
        })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// One line per record, in the order the API returned them.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for book in &self.books {
            out.push_str(&BookItem::new(book).render());
            out.push('\n');
        }
        out
    }
}
