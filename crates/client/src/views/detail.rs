use bookshelf_types::Book;

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::route::{AlertSink, Navigator, Route};

/// The fixed message shown when a delete does not come back `"ok"`.
pub const DELETE_FAILED_ALERT: &str = "failed to delete book";

/// The detail page for one record.
///
/// The view starts in the unloaded state (a placeholder record with empty
/// fields) and becomes loaded when the fetch resolves. There is no further
/// state machine: actions may race the initial load, and nothing cancels
/// an in-flight fetch.
pub struct DetailView {
    id: String,
    book: Book,
}

impl DetailView {
    /// The unloaded view for a route id: placeholder record, nothing
    /// fetched.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            book: Book::placeholder(),
        }
    }

    /// Mount the view: one GET for the record named by the route id.
    ///
    /// A failed fetch propagates to the caller; there is no error state.
    pub async fn mount(api: &ApiClient, id: impl Into<String>) -> ClientResult<Self> {
        let id = id.into();
        let book = api.get_book(&id).await?;
        Ok(Self { id, book })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    /// The detail page: controls, then author above title.
    pub fn render(&self) -> String {
        format!(
            "[update] [delete]\n{}\n{}\n",
            self.book.author, self.book.title
        )
    }

    /// The update action: pure navigation to the edit form for this id.
    /// No data is touched.
    pub fn update(&self, navigator: &dyn Navigator) {
        navigator.push(Route::UpdateForm(self.id.clone()));
    }

    /// The delete action: one DELETE for this id.
    ///
    /// A response body of exactly `"ok"` navigates home. Any other body,
    /// and any transport failure, surfaces exactly one alert with the
    /// fixed message; both failure kinds take the same path.
    pub async fn delete(
        &self,
        api: &ApiClient,
        navigator: &dyn Navigator,
        alerts: &dyn AlertSink,
    ) {
        match api.delete_book(&self.id).await {
            Ok(body) if body == "ok" => navigator.push(Route::Home),
            Ok(_) | Err(_) => alerts.alert(DELETE_FAILED_ALERT),
        }
    }
}
