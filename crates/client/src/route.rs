//! Routing and alert collaborators.
//!
//! The views never decide what a route transition or an alert looks like;
//! they hand both to the embedding shell through these traits.

/// The client-side routes of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The list page.
    Home,
    /// The detail page for one record.
    BookDetail(String),
    /// The edit form for one record.
    UpdateForm(String),
}

impl Route {
    /// The path form of the route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::BookDetail(id) => format!("/book/{id}"),
            Route::UpdateForm(id) => format!("/updateForm/{id}"),
        }
    }
}

/// Programmatic navigation, implemented by the embedding shell.
pub trait Navigator {
    fn push(&self, route: Route);
}

/// Blocking user-facing alert surface.
pub trait AlertSink {
    fn alert(&self, message: &str);
}
