//! HTTP server for the book catalog.
//!
//! Exposes the [`Books`] store as a small JSON API:
//!
//! | Method   | Path                  | Handler                        |
//! |----------|-----------------------|--------------------------------|
//! | `POST`   | `/books/`             | [`http::create_book_handler`]  |
//! | `GET`    | `/books/`             | [`http::list_books_handler`]   |
//! | `GET`    | `/books/search/`      | [`http::search_books_handler`] |
//! | `PUT`    | `/books/{book_id}`    | [`http::update_book_handler`]  |
//! | `DELETE` | `/books/{book_id}`    | [`http::delete_book_handler`]  |

pub mod http;

use crate::db::books::Books;
use crate::libs::config::ServerConfig;
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared server state
#[derive(Clone)]
pub struct ServerState {
    pub books: Books,
}

impl ServerState {
    pub fn new(books: Books) -> Self {
        ServerState { books }
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/books/", post(http::create_book_handler).get(http::list_books_handler))
        .route("/books/search/", get(http::search_books_handler))
        .route("/books/{book_id}", put(http::update_book_handler).delete(http::delete_book_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the catalog until Ctrl+C.
pub async fn start_server(config: &ServerConfig, books: Books) -> Result<()> {
    let app = router(ServerState::new(books));

    let listener = TcpListener::bind(config.address()).await?;
    msg_info!(Message::BookServerStarted(listener.local_addr()?.to_string()));

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    msg_info!(Message::BookServerStopped);
    Ok(())
}

async fn shutdown_signal() {
    // If the handler cannot be installed the server simply runs until killed
    let _ = tokio::signal::ctrl_c().await;
}
