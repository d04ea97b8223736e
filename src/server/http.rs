//! HTTP handlers for the book catalog

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::libs::book::{BookInput, BookQuery};
use crate::libs::messages::Message;
use crate::server::ServerState;

/// Create a book
pub async fn create_book_handler(State(state): State<ServerState>, Json(input): Json<BookInput>) -> Response {
    match state.books.create(&input) {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => storage_error(e),
    }
}

/// List every book; an empty catalog is an empty array, never a 404
pub async fn list_books_handler(State(state): State<ServerState>) -> Response {
    match state.books.list() {
        Ok(books) => (StatusCode::OK, Json(books)).into_response(),
        Err(e) => storage_error(e),
    }
}

/// Search by title, author and year
pub async fn search_books_handler(State(state): State<ServerState>, Query(query): Query<BookQuery>) -> Response {
    match state.books.search(&query) {
        Ok(books) => (StatusCode::OK, Json(books)).into_response(),
        Err(e) => storage_error(e),
    }
}

/// Replace a book's fields
pub async fn update_book_handler(
    State(state): State<ServerState>,
    Path(book_id): Path<i64>,
    Json(input): Json<BookInput>,
) -> Response {
    match state.books.update(book_id, &input) {
        Ok(Some(book)) => (StatusCode::OK, Json(book)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": Message::BookNotFound.to_string() })),
        )
            .into_response(),
        Err(e) => storage_error(e),
    }
}

/// Delete a book. Both outcomes answer 200 with a message
pub async fn delete_book_handler(State(state): State<ServerState>, Path(book_id): Path<i64>) -> Response {
    let message = match state.books.delete(book_id) {
        Ok(true) => Message::BookDeleted,
        Ok(false) => Message::BookNotFound,
        Err(e) => return storage_error(e),
    };

    (StatusCode::OK, Json(json!({ "message": message.to_string() }))).into_response()
}

fn storage_error(e: anyhow::Error) -> Response {
    error!(error = %e, "book storage failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": Message::DbQueryFailed.to_string()
        })),
    )
        .into_response()
}
