//! # Classwork
//!
//! Small coursework exercises bundled into one command-line tool.
//!
//! ## Features
//!
//! - **Student Grade Analyzer**: An in-memory roster driven by a console menu,
//!   with per-student averages, aggregate statistics and a top performer
//! - **Profile Builder**: Collects a name, birth year and hobbies and prints a summary
//! - **Book Catalog**: SQLite-backed book storage served as a JSON HTTP API
//!
//! ## Usage
//!
//! ```rust,no_run
//! use classwork::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod server;
