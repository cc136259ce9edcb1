//! Line-oriented prompts.
//!
//! Everything interactive goes through [`Prompt`], which is generic over
//! its reader and writer so the menus can be driven from tests.

use crate::errors::AppResult;
use crate::utils::colors::dim;
use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl Prompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

/// Result of a numbered-menu selection.
#[derive(Debug, PartialEq, Eq)]
pub enum Choice<'a, T> {
    Picked(&'a T),
    Typed(String),
}

/// How a raw menu answer should be interpreted.
#[derive(Debug, PartialEq, Eq)]
pub enum Answer {
    /// 0-based index into the list.
    Index(usize),
    Text(String),
    OutOfRange,
    NumberOnEmptyList,
    Empty,
}

/// Numbers are only taken as menu indices when they are short enough
/// to be one; anything else is a name.
pub fn classify(input: &str, len: usize) -> Answer {
    let input = input.trim();
    if input.is_empty() {
        return Answer::Empty;
    }

    if input.len() < 10 && input.bytes().all(|b| b.is_ascii_digit()) {
        if len == 0 {
            return Answer::NumberOnEmptyList;
        }
        return match input.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => Answer::Index(n - 1),
            _ => Answer::OutOfRange,
        };
    }

    Answer::Text(input.to_string())
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn say<T: fmt::Display>(&mut self, line: T) -> AppResult<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    /// Print `question` and read one trimmed line. `None` at end of input.
    pub fn ask(&mut self, question: &str) -> AppResult<Option<String>> {
        write!(self.writer, "{question}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// `[y/N]` style confirmation; only `y`/`yes` confirm.
    pub fn confirm(&mut self, question: &str) -> AppResult<bool> {
        let answer = self.ask(question)?.unwrap_or_default().to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }

    /// Print `items` as a numbered menu and read a selection.
    ///
    /// Returns `Ok(None)` when the answer is unusable; the reason has
    /// already been shown to the user.
    pub fn select<'a, T, F>(
        &mut self,
        items: &'a [T],
        label: F,
        question: &str,
    ) -> AppResult<Option<Choice<'a, T>>>
    where
        F: Fn(&T) -> &str,
    {
        if items.is_empty() {
            self.say(format!("   {}", dim("(List is empty)")))?;
        } else {
            for (i, item) in items.iter().enumerate() {
                self.say(format!(" [{}] {}", i + 1, label(item)))?;
            }
        }

        let Some(input) = self.ask(&format!("{question} (or type name): "))? else {
            self.say("Cancelled.")?;
            return Ok(None);
        };

        let choice = match classify(&input, items.len()) {
            Answer::Index(i) => Some(Choice::Picked(&items[i])),
            Answer::Text(t) => Some(Choice::Typed(t)),
            Answer::OutOfRange => {
                self.say("❌ Invalid number.")?;
                None
            }
            Answer::NumberOnEmptyList => {
                self.say("❌ List is empty, please type a name.")?;
                None
            }
            Answer::Empty => {
                self.say("❌ Invalid input.")?;
                None
            }
        };
        Ok(choice)
    }
}
