//! Book catalog storage.
//!
//! [`Books`] wraps one SQLite connection behind an `Arc<Mutex<_>>` so the
//! same store can be cloned into every HTTP handler. Each method holds the
//! lock only for the statements it runs.
//!
//! ## Usage
//!
//! ```rust
//! use classwork::db::{books::Books, db::Db};
//! use classwork::libs::book::{BookInput, BookQuery};
//!
//! # fn main() -> anyhow::Result<()> {
//! let books = Books::from_db(Db::open_in_memory()?);
//! books.create(&BookInput::new("Dune", "Frank Herbert", Some(1965)))?;
//!
//! let query = BookQuery { author: Some("Herbert".to_string()), ..Default::default() };
//! assert_eq!(books.search(&query)?.len(), 1);
//! # Ok(())
//! # }
//! ```

use super::db::Db;
use crate::libs::book::{Book, BookInput, BookQuery};
use anyhow::Result;
use parking_lot::Mutex;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::Arc;

const INSERT_BOOK: &str = "INSERT INTO books (title, author, year) VALUES (?1, ?2, ?3)";
const UPDATE_BOOK: &str = "UPDATE books SET title = ?2, author = ?3, year = ?4 WHERE id = ?1";
const DELETE_BOOK: &str = "DELETE FROM books WHERE id = ?1";
const SELECT_BOOKS: &str = "SELECT id, title, author, year FROM books";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_BY_ID: &str = "ORDER BY id";

#[derive(Clone)]
pub struct Books {
    conn: Arc<Mutex<Connection>>,
}

impl Books {
    /// Opens the catalog stored in the application data directory.
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn from_db(db: Db) -> Self {
        Books {
            conn: Arc::new(Mutex::new(db.conn)),
        }
    }

    pub fn create(&self, input: &BookInput) -> Result<Book> {
        let conn = self.conn.lock();
        conn.execute(INSERT_BOOK, params![input.title, input.author, input.year])?;

        Ok(Book {
            id: conn.last_insert_rowid(),
            title: input.title.clone(),
            author: input.author.clone(),
            year: input.year,
        })
    }

    pub fn list(&self) -> Result<Vec<Book>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!("{} {}", SELECT_BOOKS, ORDER_BY_ID))?;
        let books = stmt.query_map([], map_book)?.collect::<Result<Vec<_>, _>>()?;

        Ok(books)
    }

    pub fn get(&self, id: i64) -> Result<Option<Book>> {
        let conn = self.conn.lock();
        let book = conn
            .query_row(&format!("{} {}", SELECT_BOOKS, WHERE_ID), params![id], map_book)
            .optional()?;

        Ok(book)
    }

    /// Replaces every field of an existing book. Returns `None` if `id` is unknown.
    pub fn update(&self, id: i64, input: &BookInput) -> Result<Option<Book>> {
        let conn = self.conn.lock();
        let affected = conn.execute(UPDATE_BOOK, params![id, input.title, input.author, input.year])?;

        if affected == 0 {
            return Ok(None);
        }

        Ok(Some(Book {
            id,
            title: input.title.clone(),
            author: input.author.clone(),
            year: input.year,
        }))
    }

    /// Returns `true` when a row was deleted.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.conn.lock();
        let affected = conn.execute(DELETE_BOOK, params![id])?;

        Ok(affected > 0)
    }

    /// Substring match on title and author, exact match on year; filters are ANDed.
    pub fn search(&self, query: &BookQuery) -> Result<Vec<Book>> {
        let mut clauses: Vec<String> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(title) = query.title() {
            values.push(Value::Text(title.to_string()));
            clauses.push(format!("title LIKE '%' || ?{} || '%'", values.len()));
        }
        if let Some(author) = query.author() {
            values.push(Value::Text(author.to_string()));
            clauses.push(format!("author LIKE '%' || ?{} || '%'", values.len()));
        }
        if let Some(year) = query.year {
            values.push(Value::Integer(i64::from(year)));
            clauses.push(format!("year = ?{}", values.len()));
        }

        let sql = if clauses.is_empty() {
            format!("{} {}", SELECT_BOOKS, ORDER_BY_ID)
        } else {
            format!("{} WHERE {} {}", SELECT_BOOKS, clauses.join(" AND "), ORDER_BY_ID)
        };

        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&sql)?;
        let books = stmt.query_map(params_from_iter(values.iter()), map_book)?.collect::<Result<Vec<_>, _>>()?;

        Ok(books)
    }
}

fn map_book(row: &Row) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        year: row.get(3)?,
    })
}
