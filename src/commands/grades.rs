//! Student Grade Analyzer: the interactive roster menu.
//!
//! The menu owns a [`Roster`] for the duration of one session and hands it
//! by reference to each operation. Every operation re-prompts on invalid
//! input instead of failing; only I/O errors (for example, stdin closing)
//! end the session early.
//!
//! ```text
//! awaiting choice ──1──▶ add student ──┐
//!        ▲        ──2──▶ add grades  ──┤
//!        │        ──3──▶ report      ──┤
//!        │        ──4──▶ top student ──┤
//!        └─────────────────────────────┘
//!                 ──5──▶ exit
//! ```

use crate::libs::messages::Message;
use crate::libs::prompt::{LinePrompt, Prompt, TerminalPrompt};
use crate::libs::roster::{is_done_sentinel, Grade, GradeError, Roster, RosterError, StudentName};
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use std::io::{self, IsTerminal};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    AddGrades,
    Report,
    TopStudent,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::AddStudent),
            "2" => Ok(MenuChoice::AddGrades),
            "3" => Ok(MenuChoice::Report),
            "4" => Ok(MenuChoice::TopStudent),
            "5" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

pub fn cmd() -> Result<()> {
    let mut roster = Roster::new();

    if io::stdin().is_terminal() {
        run(&mut roster, &mut TerminalPrompt::new())
    } else {
        run(&mut roster, &mut LinePrompt::new(io::stdin().lock()))
    }
}

/// Runs the menu loop until the user picks "Exit".
pub fn run<P: Prompt>(roster: &mut Roster, prompt: &mut P) -> Result<()> {
    loop {
        msg_print!(Message::GradeMenuTitle, true);
        msg_print!(Message::GradeMenuItems);

        let input = prompt.read_line(&Message::PromptMenuChoice)?;
        match input.parse::<MenuChoice>() {
            Ok(MenuChoice::AddStudent) => add_student(roster, prompt)?,
            Ok(MenuChoice::AddGrades) => add_grades(roster, prompt)?,
            Ok(MenuChoice::Report) => show_report(roster),
            Ok(MenuChoice::TopStudent) => show_top_student(roster),
            Ok(MenuChoice::Exit) => {
                msg_print!(Message::ExitingProgram);
                return Ok(());
            }
            Err(()) => msg_error!(Message::InvalidMenuChoice),
        }
    }
}

/// Prompts until a valid, unused name is entered and registers it.
pub fn add_student<P: Prompt>(roster: &mut Roster, prompt: &mut P) -> Result<()> {
    loop {
        let input = prompt.read_line(&Message::PromptStudentName)?;

        match roster.add_student(&input) {
            Ok(student) => {
                msg_success!(Message::StudentAdded(student.name().to_string()));
                return Ok(());
            }
            Err(RosterError::DuplicateName(_)) => msg_error!(Message::StudentAlreadyExists),
            Err(_) => msg_error!(Message::InvalidStudentName),
        }
    }
}

/// Picks a student, then appends grades until `done` is entered.
pub fn add_grades<P: Prompt>(roster: &mut Roster, prompt: &mut P) -> Result<()> {
    if roster.is_empty() {
        msg_warning!(Message::NoStudentsAdded);
        return Ok(());
    }

    let Some(name) = select_student(roster, prompt)? else {
        msg_info!(Message::InputCancelled);
        return Ok(());
    };

    let mut recorded = 0;
    loop {
        let input = prompt.read_line(&Message::PromptGrade)?;
        if is_done_sentinel(&input) {
            break;
        }

        match Grade::parse(&input) {
            Ok(grade) => {
                roster.record_grade(&name, grade)?;
                recorded += 1;
            }
            Err(GradeError::NotANumber(_)) => msg_error!(Message::GradeNotANumber),
            Err(GradeError::OutOfRange(_)) => msg_error!(Message::GradeOutOfRange),
        }
    }

    msg_success!(Message::GradesRecorded(name.to_string(), recorded));
    Ok(())
}

/// Asks for an existing student's name. An empty line cancels.
fn select_student<P: Prompt>(roster: &Roster, prompt: &mut P) -> Result<Option<StudentName>> {
    loop {
        let input = prompt.read_line(&Message::PromptStudentName)?;
        if input.trim().is_empty() {
            return Ok(None);
        }

        match roster.find(&input) {
            Ok(student) => return Ok(Some(student.name().clone())),
            Err(RosterError::StudentNotFound(_)) => msg_error!(Message::StudentNotFound),
            Err(_) => msg_error!(Message::InvalidStudentNameInput),
        }
    }
}

pub fn show_report(roster: &Roster) {
    match roster.report() {
        Ok(report) => {
            for entry in &report.averages {
                msg_print!(Message::StudentAverage(entry.name.to_string(), entry.average));
            }
            msg_print!(Message::ReportSeparator);
            msg_print!(Message::MaxAverage(report.max));
            msg_print!(Message::MinAverage(report.min));
            msg_print!(Message::OverallAverage(report.overall));
        }
        Err(RosterError::NoStudents) => msg_warning!(Message::NoStudents),
        Err(_) => msg_warning!(Message::NoGrades),
    }
}

pub fn show_top_student(roster: &Roster) {
    match roster.top_student() {
        Ok(top) => msg_print!(Message::TopStudent(top.name.to_string(), top.average)),
        Err(RosterError::NoStudents) => msg_warning!(Message::NoStudents),
        Err(_) => msg_warning!(Message::NoStudentsWithGrades),
    }
}
