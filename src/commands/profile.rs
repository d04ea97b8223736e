use crate::libs::messages::Message;
use crate::libs::profile::{is_stop_sentinel, parse_birth_year, Profile};
use crate::libs::prompt::{LinePrompt, Prompt, TerminalPrompt};
use crate::{msg_error, msg_print};
use anyhow::Result;
use chrono::{Datelike, Local};
use std::io::{self, IsTerminal};

pub fn cmd() -> Result<()> {
    let current_year = Local::now().year();

    let profile = if io::stdin().is_terminal() {
        collect(&mut TerminalPrompt::new(), current_year)?
    } else {
        collect(&mut LinePrompt::new(io::stdin().lock()), current_year)?
    };

    print_summary(&profile);
    Ok(())
}

/// Asks for name, birth year and hobbies, re-prompting on an invalid year.
pub fn collect<P: Prompt>(prompt: &mut P, current_year: i32) -> Result<Profile> {
    let name = prompt.read_line(&Message::PromptUserName)?;

    let birth_year = loop {
        let input = prompt.read_line(&Message::PromptBirthYear)?;
        match parse_birth_year(&input, current_year) {
            Ok(year) => break year,
            Err(_) => msg_error!(Message::InvalidBirthYear),
        }
    };

    let mut hobbies = Vec::new();
    loop {
        let input = prompt.read_line(&Message::PromptHobby)?;
        if is_stop_sentinel(&input) {
            break;
        }

        let hobby = input.trim();
        if !hobby.is_empty() {
            hobbies.push(hobby.to_string());
        }
    }

    Ok(Profile::new(&name, birth_year, current_year, hobbies))
}

pub fn print_summary(profile: &Profile) {
    msg_print!(Message::ProfileSummaryHeader);
    msg_print!(Message::ProfileDetails {
        name: profile.name.clone(),
        age: profile.age,
        stage: profile.stage.to_string(),
    });

    if profile.hobbies.is_empty() {
        msg_print!(Message::NoHobbies);
        return;
    }

    msg_print!(Message::FavoriteHobbiesHeader(profile.hobbies.len()));
    for hobby in &profile.hobbies {
        msg_print!(Message::HobbyItem(hobby.clone()));
    }
}
