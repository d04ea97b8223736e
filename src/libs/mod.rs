//! Core library modules for the classwork application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging, console prompts
//! - **Grade Analysis**: The student roster and its aggregate report
//! - **Profiles**: Life stage classification and profile assembly
//! - **Book Catalog**: Book records and search filters
//! - **User Interface**: Console table rendering
//!
//! ## Usage
//!
//! ```rust
//! use classwork::libs::roster::Roster;
//!
//! let mut roster = Roster::new();
//! roster.add_student("ada").unwrap();
//! assert_eq!(roster.students()[0].name().as_str(), "Ada");
//! ```

pub mod book;
pub mod config;
pub mod data_storage;
pub mod messages;
pub mod profile;
pub mod prompt;
pub mod roster;
pub mod view;
