//! Database layer for the classwork application.
//!
//! A thin SQLite persistence layer for the book catalog: connection
//! management in [`db`], versioned schema changes in [`migrations`] and the
//! catalog store itself in [`books`]. The student roster is deliberately not
//! stored here; it lives only for the duration of one `grades` session.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use classwork::db::books::Books;
//! use classwork::libs::book::BookInput;
//!
//! # fn main() -> anyhow::Result<()> {
//! let books = Books::new()?;
//! let book = books.create(&BookInput::new("Emma", "Jane Austen", Some(1815)))?;
//! println!("Stored book #{}", book.id);
//! # Ok(())
//! # }
//! ```

pub mod books;

pub mod db;

pub mod migrations;
