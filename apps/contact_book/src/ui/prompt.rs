//! Line-driven input for the interactive page.

use std::{
    io::{BufRead, Write},
    time::Duration,
};

use anyhow::Result;
use shared::domain::DraftField;

use crate::{page::ContactPage, ui::render::render_page};

pub const HELP: &str = "\
commands:
  name <text>    set Full Name
  email <text>   set Email
  phone <text>   set Phone Number
  notes <text>   set Notes
  submit         save the contact
  show           redraw the page
  help           show this help
  quit           leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    SetField(DraftField, String),
    Submit,
    Show,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> PromptInput {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let field = match command.to_ascii_lowercase().as_str() {
        "name" | "fullname" => Some(DraftField::FullName),
        "email" => Some(DraftField::Email),
        "phone" => Some(DraftField::PhoneNumber),
        "notes" => Some(DraftField::Notes),
        "submit" | "save" => return PromptInput::Submit,
        "" | "show" => return PromptInput::Show,
        "help" | "?" => return PromptInput::Help,
        "quit" | "exit" => return PromptInput::Quit,
        _ => None,
    };

    match field {
        Some(field) => PromptInput::SetField(field, rest.to_string()),
        None => PromptInput::Unknown(command.to_string()),
    }
}

/// Runs the page against `input` until `quit` or end of input. Each submit
/// waits up to `settle_timeout` for the save to finish before redrawing.
pub fn run_interactive<R: BufRead, W: Write>(
    page: &mut ContactPage,
    input: R,
    mut out: W,
    settle_timeout: Duration,
) -> Result<()> {
    page.wait_until_settled(settle_timeout);
    write!(out, "{}", render_page(page.state()))?;
    writeln!(out, "type 'help' for commands")?;

    for line in input.lines() {
        let line = line?;
        page.pump();
        match parse_line(&line) {
            PromptInput::SetField(field, value) => page.set_field(field, value),
            PromptInput::Submit => {
                let missing = page.state().form().missing_required_fields();
                if !missing.is_empty() {
                    let names: Vec<&str> = missing.into_iter().map(DraftField::label).collect();
                    writeln!(out, "please fill in: {}", names.join(", "))?;
                    continue;
                }
                if !page.submit().is_applied() {
                    writeln!(out, "a save is already in progress")?;
                    continue;
                }
                if !page.wait_until_settled(settle_timeout) {
                    writeln!(out, "still saving; type 'show' to refresh")?;
                }
                write!(out, "{}", render_page(page.state()))?;
            }
            PromptInput::Show => {
                page.pump();
                write!(out, "{}", render_page(page.state()))?;
            }
            PromptInput::Help => writeln!(out, "{HELP}")?,
            PromptInput::Quit => break,
            PromptInput::Unknown(command) => {
                writeln!(out, "unknown command '{command}'; type 'help'")?
            }
        }
        out.flush()?;
    }
    Ok(())
}
