//! Line-oriented console input.
//!
//! The interactive exercises only ever need "show a prompt, read one line".
//! [`Prompt`] captures that so the same menu logic runs against a real
//! terminal ([`TerminalPrompt`], backed by `dialoguer`) or against any
//! buffered reader ([`LinePrompt`]), which covers piped stdin and tests.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead, Write};

pub trait Prompt {
    /// Shows `prompt` and returns the next line without its line terminator.
    fn read_line(&mut self, prompt: &Message) -> Result<String>;
}

pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn read_line(&mut self, prompt: &Message) -> Result<String> {
        let line: String = Input::with_theme(&self.theme)
            .with_prompt(prompt.to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }
}

/// Reads answers from any `BufRead`, echoing prompts to stdout.
pub struct LinePrompt<R> {
    reader: R,
    echo: bool,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, echo: true }
    }

    /// A prompt that does not print anything, for scripted runs.
    pub fn silent(reader: R) -> Self {
        Self { reader, echo: false }
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn read_line(&mut self, prompt: &Message) -> Result<String> {
        if self.echo {
            print!("{}: ", prompt);
            io::stdout().flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(msg_error_anyhow!(Message::InputExhausted));
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

