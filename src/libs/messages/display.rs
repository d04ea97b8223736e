//! Display implementation for classwork application messages.
//!
//! Every piece of user-facing text is produced here, so prompts, rejections
//! and report lines stay consistent across the grade analyzer, the profile
//! builder and the book catalog.
//!
//! ## Parameter Interpolation
//!
//! ```rust
//! use classwork::libs::messages::Message;
//!
//! let line = Message::StudentAverage("Alice".to_string(), 85.0).to_string();
//! assert_eq!(line, "Alice's average grade is 85.0");
//! ```
//!
//! Averages are always rendered with one decimal place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === MENU MESSAGES ===
            Message::GradeMenuTitle => "--- Student Grade Analyzer ---".to_string(),
            Message::GradeMenuItems => [
                "1. Add a new student",
                "2. Add grades for a student",
                "3. Generate a full report",
                "4. Find the top student",
                "5. Exit",
            ]
            .join("\n"),
            Message::InvalidMenuChoice => "Invalid choice! Please try again.".to_string(),
            Message::ExitingProgram => "Exiting program.".to_string(),
            Message::PromptMenuChoice => "Enter your choice".to_string(),

            // === STUDENT MESSAGES ===
            Message::PromptStudentName => "Enter student name".to_string(),
            Message::InvalidStudentName => "Please enter a valid student name!".to_string(),
            Message::StudentAlreadyExists => "This name already exists!".to_string(),
            Message::StudentAdded(name) => format!("Student {} added.", name),
            Message::InvalidStudentNameInput => "Invalid input! Please enter name.".to_string(),
            Message::StudentNotFound => "Student not found! Please try again!".to_string(),
            Message::NoStudentsAdded => "No students added!".to_string(),

            // === GRADE MESSAGES ===
            Message::PromptGrade => "Enter grade (or 'done' to finish)".to_string(),
            Message::GradeNotANumber => "Invalid input! Please enter a number.".to_string(),
            Message::GradeOutOfRange => "Invalid input! Please enter a grade from 0 to 100.".to_string(),
            Message::GradesRecorded(name, count) => format!("Recorded {} grade(s) for {}.", count, name),

            // === REPORT MESSAGES ===
            Message::NoStudents => "No students!".to_string(),
            Message::NoGrades => "No grade!".to_string(),
            Message::NoStudentsWithGrades => "No students with grade!".to_string(),
            Message::StudentAverage(name, average) => format!("{}'s average grade is {:.1}", name, average),
            Message::ReportSeparator => "------------------------".to_string(),
            Message::MaxAverage(value) => format!("Max Average: {:.1}.", value),
            Message::MinAverage(value) => format!("Min Average: {:.1}.", value),
            Message::OverallAverage(value) => format!("Overall Average: {:.1}.", value),
            Message::TopStudent(name, average) => {
                format!("The student with highest average is {} with a grade of {:.1}.", name, average)
            }

            // === PROFILE MESSAGES ===
            Message::PromptUserName => "Hello user! Enter your name".to_string(),
            Message::PromptBirthYear => "Enter your birth year".to_string(),
            Message::InvalidBirthYear => "Please enter a valid birth year.".to_string(),
            Message::PromptHobby => "Enter a favorite hobby or type 'stop' to finish".to_string(),
            Message::ProfileSummaryHeader => "Profile Summary:".to_string(),
            Message::ProfileDetails { name, age, stage } => format!("Name: {}\nAge: {}\nStage: {}", name, age, stage),
            Message::FavoriteHobbiesHeader(count) => format!("Favorite Hobbies ({}):", count),
            Message::HobbyItem(hobby) => format!("- {}", hobby),
            Message::NoHobbies => "You didn't mention any hobby.".to_string(),

            // === BOOK MESSAGES ===
            Message::BookNotFound => "Book not found".to_string(),
            Message::BookDeleted => "Book deleted".to_string(),
            Message::BooksNotFound => "No books found.".to_string(),
            Message::BooksHeader => "Books:".to_string(),
            Message::BookServerStarted(address) => format!("Book API listening on http://{}", address),
            Message::BookServerStopped => "Book API stopped".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleServer => "Book API server".to_string(),
            Message::PromptServerHost => "Enter the host to bind the book API to".to_string(),
            Message::PromptServerPort => "Enter the port to bind the book API to".to_string(),

            // === DATABASE MESSAGES ===
            Message::DbQueryFailed => "Database query failed".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),

            // === GENERAL MESSAGES ===
            Message::InputCancelled => "Cancelled, back to the menu.".to_string(),
            Message::InputExhausted => "No more input available".to_string(),
        };
        write!(f, "{}", text)
    }
}
