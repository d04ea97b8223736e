//! In-memory student roster with grade aggregation.
//!
//! The roster is the state behind the Student Grade Analyzer menu. It is an
//! ordered collection of students, keyed by a normalized name, each carrying
//! the grades recorded for them so far. Nothing here touches the console: the
//! menu in `commands::grades` turns the typed outcomes into messages.
//!
//! ## Invariants
//!
//! - Names are trimmed, title-cased and purely alphabetic ([`StudentName`]).
//! - No two students share a normalized name.
//! - Every grade lies in `0..=100` ([`Grade`]).
//! - Students are never removed or renamed; iteration follows insertion order.
//!
//! ## Usage
//!
//! ```rust
//! use classwork::libs::roster::{Grade, Roster, StudentName};
//!
//! let mut roster = Roster::new();
//! roster.add_student("  alice ").unwrap();
//! roster.add_student("bob").unwrap();
//!
//! let alice = StudentName::parse("ALICE").unwrap();
//! roster.record_grades(&alice, [Grade::new(90).unwrap(), Grade::new(80).unwrap()]).unwrap();
//! let bob = StudentName::parse("Bob").unwrap();
//! roster.record_grade(&bob, Grade::new(70).unwrap()).unwrap();
//!
//! let top = roster.top_student().unwrap();
//! assert_eq!(top.name.as_str(), "Alice");
//! assert_eq!(top.average, 85.0);
//! ```

use std::fmt::{Display, Formatter};
use std::num::IntErrorKind;
use thiserror::Error;

/// Reasons a roster operation is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("invalid student name: {0:?}")]
    InvalidName(String),

    #[error("student {0} already exists")]
    DuplicateName(StudentName),

    #[error("student {0} not found")]
    StudentNotFound(StudentName),

    #[error("the roster has no students")]
    NoStudents,

    #[error("no student has a recorded grade")]
    NoGrades,
}

/// Reasons a grade token is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GradeError {
    #[error("{0:?} is not a whole number")]
    NotANumber(String),

    #[error("grade {0} is outside {min}..={max}", min = Grade::MIN, max = Grade::MAX)]
    OutOfRange(String),
}

/// A student name after trimming and title-casing.
///
/// Only names made entirely of alphabetic characters are valid, so
/// multi-word input such as `"mary jane"` is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentName(String);

impl StudentName {
    pub fn parse(raw: &str) -> Result<Self, RosterError> {
        let normalized = title_case(raw.trim());

        if normalized.is_empty() || !normalized.chars().all(char::is_alphabetic) {
            return Err(RosterError::InvalidName(normalized));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StudentName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest.
///
/// Only cased letters continue a run, so apostrophes and caseless scripts
/// start a new one: `"o'neil"` becomes `"O'Neil"`.
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut in_word = false;

    for c in input.chars() {
        if c.is_uppercase() || c.is_lowercase() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}

/// `done` in any letter case ends grade entry.
pub fn is_done_sentinel(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("done")
}

/// A single grade in the inclusive range `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grade(u8);

impl Grade {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    pub fn new(value: i64) -> Result<Self, GradeError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(GradeError::OutOfRange(value.to_string()));
        }
        Ok(Self(value as u8))
    }

    /// Parses a console token such as `" 87 "` or `"+5"`.
    ///
    /// Integers too large for `i64` are still integers, so they are reported
    /// as out of range rather than as non-numeric input.
    pub fn parse(token: &str) -> Result<Self, GradeError> {
        let token = token.trim();

        match token.parse::<i64>() {
            Ok(value) => Self::new(value),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(GradeError::OutOfRange(token.to_string())),
                _ => Err(GradeError::NotANumber(token.to_string())),
            },
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: StudentName,
    grades: Vec<Grade>,
}

impl Student {
    pub fn new(name: StudentName) -> Self {
        Self { name, grades: Vec::new() }
    }

    pub fn name(&self) -> &StudentName {
        &self.name
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Arithmetic mean of the grades, or `None` when there are none yet.
    pub fn average(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let sum: u64 = self.grades.iter().map(|g| u64::from(g.value())).sum();
        Some(sum as f64 / self.grades.len() as f64)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentAverage {
    pub name: StudentName,
    pub average: f64,
}

/// Per-student averages plus the aggregate statistics over them.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeReport {
    pub averages: Vec<StudentAverage>,
    pub max: f64,
    pub min: f64,
    pub overall: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn get(&self, name: &StudentName) -> Option<&Student> {
        self.students.iter().find(|s| &s.name == name)
    }

    pub fn contains(&self, name: &StudentName) -> bool {
        self.get(name).is_some()
    }

    /// Registers a student with no grades.
    pub fn add_student(&mut self, raw_name: &str) -> Result<&Student, RosterError> {
        let name = StudentName::parse(raw_name)?;

        if self.contains(&name) {
            return Err(RosterError::DuplicateName(name));
        }

        self.students.push(Student::new(name));
        let index = self.students.len() - 1;
        Ok(&self.students[index])
    }

    /// Looks a student up by raw, not yet normalized, input.
    pub fn find(&self, raw_name: &str) -> Result<&Student, RosterError> {
        let name = StudentName::parse(raw_name)?;
        self.get(&name).ok_or(RosterError::StudentNotFound(name))
    }

    pub fn record_grade(&mut self, name: &StudentName, grade: Grade) -> Result<&Student, RosterError> {
        let student = self.get_mut(name)?;
        student.grades.push(grade);
        Ok(&*student)
    }

    /// Appends several grades at once and returns how many were added.
    pub fn record_grades<I>(&mut self, name: &StudentName, grades: I) -> Result<usize, RosterError>
    where
        I: IntoIterator<Item = Grade>,
    {
        let student = self.get_mut(name)?;
        let before = student.grades.len();
        student.grades.extend(grades);
        Ok(student.grades.len() - before)
    }

    /// Builds the full report over every student that has at least one grade.
    ///
    /// Students without grades are skipped individually, so a roster that
    /// mixes graded and ungraded students never divides by zero.
    pub fn report(&self) -> Result<GradeReport, RosterError> {
        if self.students.is_empty() {
            return Err(RosterError::NoStudents);
        }

        let averages: Vec<StudentAverage> = self
            .students
            .iter()
            .filter_map(|s| {
                s.average().map(|average| StudentAverage {
                    name: s.name.clone(),
                    average,
                })
            })
            .collect();

        if averages.is_empty() {
            return Err(RosterError::NoGrades);
        }

        let max = averages.iter().map(|a| a.average).fold(f64::NEG_INFINITY, f64::max);
        let min = averages.iter().map(|a| a.average).fold(f64::INFINITY, f64::min);
        let overall = averages.iter().map(|a| a.average).sum::<f64>() / averages.len() as f64;

        Ok(GradeReport {
            averages,
            max,
            min,
            overall,
        })
    }

    /// The student with the highest average; the earliest registered wins ties.
    pub fn top_student(&self) -> Result<StudentAverage, RosterError> {
        if self.students.is_empty() {
            return Err(RosterError::NoStudents);
        }

        self.students
            .iter()
            .filter_map(|s| {
                s.average().map(|average| StudentAverage {
                    name: s.name.clone(),
                    average,
                })
            })
            .reduce(|best, next| if next.average > best.average { next } else { best })
            .ok_or(RosterError::NoGrades)
    }

    fn get_mut(&mut self, name: &StudentName) -> Result<&mut Student, RosterError> {
        self.students
            .iter_mut()
            .find(|s| &s.name == name)
            .ok_or_else(|| RosterError::StudentNotFound(name.clone()))
    }
}
