use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use bookshelf_core::{BookError, BookService};
use bookshelf_types::{Book, BookPatch, NewBook};

/// Body of a successful delete. Catalog clients compare the raw response
/// text against this literal, so it must stay exactly `"ok"`.
pub const DELETE_OK_BODY: &str = "ok";

/// Application state shared across REST API handlers
///
/// Currently holds a BookService instance for catalog operations.
#[derive(Clone)]
pub struct AppState {
    book_service: BookService,
}

impl AppState {
    pub fn new(book_service: BookService) -> Self {
        Self { book_service }
    }
}

/// Health check response payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_books, create_book, get_book, update_book, delete_book),
    components(schemas(HealthRes, Book, NewBook, BookPatch))
)]
struct ApiDoc;

/// Build the REST router over the given state.
///
/// CORS is permissive: the browser front-ends this API was written for are
/// served from a different origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/book", get(list_books))
        .route("/book", post(create_book))
        .route("/book/:id", get(get_book))
        .route("/book/:id", put(update_book))
        .route("/book/:id", delete(delete_book))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Bookshelf REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/book",
    responses(
        (status = 200, description = "List of books", body = [Book])
    )
)]
/// List all books in the catalog
///
/// # Returns
/// * `Json<Vec<Book>>` - All records in ascending id order
#[axum::debug_handler]
async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.book_service.find_all())
}

#[utoipa::path(
    post,
    path = "/book",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book created", body = Book)
    )
)]
/// Create a new book record
///
/// The service assigns the id; the created record is echoed back.
#[axum::debug_handler]
async fn create_book(
    State(state): State<AppState>,
    Json(req): Json<NewBook>,
) -> (StatusCode, Json<Book>) {
    (StatusCode::CREATED, Json(state.book_service.save(req)))
}

#[utoipa::path(
    get,
    path = "/book/{id}",
    responses(
        (status = 200, description = "Book retrieved", body = Book),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Book not found")
    )
)]
/// Fetch one book by id
///
/// # Errors
/// Returns `400 Bad Request` for a malformed id and `404 Not Found` when no
/// record exists under the id.
#[axum::debug_handler]
async fn get_book(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<Book>, (StatusCode, &'static str)> {
    match state.book_service.find_by_id(&id) {
        Ok(book) => Ok(Json(book)),
        Err(e) => Err(error_response("Get book", e)),
    }
}

#[utoipa::path(
    put,
    path = "/book/{id}",
    request_body = BookPatch,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Book not found")
    )
)]
/// Update a book's title and author
///
/// Both fields are applied wholesale; the updated record is echoed back.
///
/// # Errors
/// Returns `400 Bad Request` for a malformed id and `404 Not Found` when no
/// record exists under the id.
#[axum::debug_handler]
async fn update_book(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    Json(req): Json<BookPatch>,
) -> Result<Json<Book>, (StatusCode, &'static str)> {
    match state.book_service.update(&id, req) {
        Ok(book) => Ok(Json(book)),
        Err(e) => Err(error_response("Update book", e)),
    }
}

#[utoipa::path(
    delete,
    path = "/book/{id}",
    responses(
        (status = 200, description = "Book deleted, plain-text body \"ok\""),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Book not found")
    )
)]
/// Delete a book
///
/// On success the body is the plain text `"ok"`; clients key off that exact
/// literal. Any other body means the delete did not happen.
///
/// # Errors
/// Returns `400 Bad Request` for a malformed id and `404 Not Found` when no
/// record exists under the id.
#[axum::debug_handler]
async fn delete_book(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<&'static str, (StatusCode, &'static str)> {
    match state.book_service.delete(&id) {
        Ok(()) => Ok(DELETE_OK_BODY),
        Err(e) => Err(error_response("Delete book", e)),
    }
}

// Helper function
fn error_response(context: &str, err: BookError) -> (StatusCode, &'static str) {
    tracing::warn!("{} error: {:?}", context, err);
    match err {
        BookError::NotFound(_) => (StatusCode::NOT_FOUND, "book not found"),
        BookError::InvalidId(_) => (StatusCode::BAD_REQUEST, "invalid book id"),
    }
}
