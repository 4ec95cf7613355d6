//! Book HTTP Routes
//!
//! - `GET    /books?page=N`
//! - `POST   /books?page=N`
//! - `PATCH  /books/{id}`
//! - `DELETE /books/{id}?page=N`

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, Query, State,
    },
    response::Response,
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use bookshelf_core::{
    BookError, BookId, BookService, CreateResponse, DeleteResponse, ErrorKind, ListResponse,
    OperationError, Page, RecordStore, UpdateResponse,
};

use crate::error::{envelope, ApiError};

/// Book service shared across handlers
pub type SharedService<S> = Arc<BookService<S>>;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Page,
}

/// Create book routes
pub fn book_routes<S>(service: SharedService<S>) -> Router
where
    S: RecordStore + Send + 'static,
{
    Router::new()
        .route("/books", get(list_books_handler::<S>).post(create_book_handler::<S>))
        .route(
            "/books/:id",
            patch(update_book_handler::<S>).delete(delete_book_handler::<S>),
        )
        .with_state(service)
}

/// Liveness probe
pub async fn health_handler() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Unknown routes get the not-found envelope
pub async fn fallback_handler() -> Response {
    envelope(ErrorKind::NotFound)
}

/// A malformed query string means the first page
fn page_of(query: Option<Query<PageQuery>>) -> Page {
    query.map(|Query(q)| q.page).unwrap_or_default()
}

/// Unparseable ids can't name a book
fn parse_id(raw: &str) -> Result<BookId, ApiError> {
    raw.parse()
        .map_err(|_| OperationError::not_found(BookError::InvalidId(raw.to_string())).into())
}

/// Book id from the path; a segment axum can't decode names no book either
fn path_id(path: Result<Path<String>, PathRejection>) -> Result<BookId, ApiError> {
    let Path(raw) =
        path.map_err(|rejection| rejected(ErrorKind::NotFound, rejection.body_text()))?;
    parse_id(&raw)
}

/// Request body, with a read failure reported as the operation's `kind`
fn body_of(body: Result<Bytes, BytesRejection>, kind: ErrorKind) -> Result<Bytes, ApiError> {
    body.map_err(|rejection| rejected(kind, rejection.body_text()))
}

fn rejected(kind: ErrorKind, reason: String) -> ApiError {
    OperationError::new(kind, BookError::UnreadableRequest(reason)).into()
}

async fn list_books_handler<S: RecordStore + Send + 'static>(
    State(service): State<SharedService<S>>,
    query: Option<Query<PageQuery>>,
) -> Result<Json<ListResponse>, ApiError> {
    let response = service.list_books(page_of(query))?;
    Ok(Json(response))
}

async fn update_book_handler<S: RecordStore + Send + 'static>(
    State(service): State<SharedService<S>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let id = path_id(id)?;
    let body = body_of(body, ErrorKind::NotFound)?;
    let response = service.update_book(id, &body)?;
    Ok(Json(response))
}

async fn delete_book_handler<S: RecordStore + Send + 'static>(
    State(service): State<SharedService<S>>,
    id: Result<Path<String>, PathRejection>,
    query: Option<Query<PageQuery>>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = path_id(id)?;
    let response = service.delete_book(id, page_of(query))?;
    Ok(Json(response))
}

async fn create_book_handler<S: RecordStore + Send + 'static>(
    State(service): State<SharedService<S>>,
    query: Option<Query<PageQuery>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<CreateResponse>, ApiError> {
    let body = body_of(body, ErrorKind::Unprocessable)?;
    let response = service.create_book(&body, page_of(query))?;
    Ok(Json(response))
}
