//! @acp:module "Prompter"
//! @acp:summary "Terminal interaction seam: key reads, frame drawing and text prompts"
//! @acp:domain cli
//! @acp:layer io
//!
//! Everything that touches the terminal goes through [`Prompter`]. The
//! interactive binary uses [`TermPrompter`]; tests drive whole sessions
//! with [`ScriptedPrompter`].

use std::collections::VecDeque;

use console::{Key, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::error::{Result, RuleError};
use crate::selector::Frame;
use crate::style::{paint, Tone};

/// Terminal operations needed by the selector and resolver
pub trait Prompter {
    /// Block until one key event arrives. Ctrl-C yields `RuleError::Cancelled`.
    fn read_key(&mut self) -> Result<Key>;

    /// Replace the previously drawn frame with `frame`
    fn draw(&mut self, frame: &Frame) -> Result<()>;

    /// Erase the last drawn frame
    fn clear(&mut self) -> Result<()>;

    /// Ask for one line of text, pre-filled with `initial`
    fn text(&mut self, prompt: &str, initial: &str) -> Result<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Print a status line
    fn say(&mut self, tone: Tone, message: &str);
}

/// Physical rows a line takes once the terminal wraps it at `width` columns
fn rows_for(line: &str, width: usize) -> usize {
    let cols = console::measure_text_width(line);
    if width == 0 || cols == 0 {
        return 1;
    }
    cols.div_ceil(width)
}

/// @acp:summary "Interactive prompter backed by console and dialoguer"
pub struct TermPrompter {
    term: Term,
    theme: ColorfulTheme,
    /// Terminal rows occupied by the last drawn frame, wrapping included
    drawn: usize,
}

impl TermPrompter {
    /// Attach to stdout. Fails when stdout is not an interactive terminal.
    pub fn new() -> Result<Self> {
        let term = Term::stdout();
        if !term.is_term() {
            return Err(RuleError::Other(
                "rule-master needs an interactive terminal".to_string(),
            ));
        }
        Ok(Self {
            term,
            theme: ColorfulTheme::default(),
            drawn: 0,
        })
    }
}

impl Prompter for TermPrompter {
    fn read_key(&mut self) -> Result<Key> {
        self.term.read_key().map_err(RuleError::from_terminal)
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.clear()?;
        let width = self.term.size().1 as usize;
        let mut rows = 0;
        for (tone, line) in frame.lines() {
            self.term.write_line(&paint(*tone, line))?;
            rows += rows_for(line, width);
        }
        self.drawn = rows;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.drawn > 0 {
            self.term.clear_last_lines(self.drawn)?;
            self.drawn = 0;
        }
        Ok(())
    }

    fn text(&mut self, prompt: &str, initial: &str) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    fn say(&mut self, tone: Tone, message: &str) {
        println!("{}", paint(tone, message));
    }
}

/// One scripted operator response
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Key(Key),
    /// Replace the pre-filled text with this value
    Text(String),
    /// Accept the pre-filled text unchanged
    Accept,
    Confirm(bool),
    /// Abort at whatever prompt comes next
    Cancel,
}

/// @acp:summary "Replays a fixed conversation, recording everything shown"
///
/// Running out of replies counts as cancellation, so a short script can
/// never hang a test.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    /// Plain-text copy of every frame drawn
    pub frames: Vec<String>,
    /// Prompts shown for text and confirm questions
    pub prompts: Vec<String>,
    /// Status lines printed through `say`
    pub messages: Vec<(Tone, String)>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: Key) -> Self {
        self.replies.push_back(Reply::Key(key));
        self
    }

    pub fn keys<I: IntoIterator<Item = Key>>(mut self, keys: I) -> Self {
        self.replies.extend(keys.into_iter().map(Reply::Key));
        self
    }

    pub fn answer(mut self, value: impl Into<String>) -> Self {
        self.replies.push_back(Reply::Text(value.into()));
        self
    }

    pub fn accept(mut self) -> Self {
        self.replies.push_back(Reply::Accept);
        self
    }

    pub fn yes(mut self) -> Self {
        self.replies.push_back(Reply::Confirm(true));
        self
    }

    pub fn no(mut self) -> Self {
        self.replies.push_back(Reply::Confirm(false));
        self
    }

    pub fn cancel(mut self) -> Self {
        self.replies.push_back(Reply::Cancel);
        self
    }

    /// Replies not yet consumed
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }

    fn next(&mut self, wanted: &str) -> Result<Reply> {
        match self.replies.pop_front() {
            None | Some(Reply::Cancel) => Err(RuleError::Cancelled),
            Some(reply) => {
                tracing::trace!(?reply, wanted, "Scripted reply");
                Ok(reply)
            }
        }
    }
}

fn unexpected(wanted: &str, got: &Reply) -> RuleError {
    RuleError::Other(format!("script expected {}, found {:?}", wanted, got))
}

impl Prompter for ScriptedPrompter {
    fn read_key(&mut self) -> Result<Key> {
        match self.next("key")? {
            Reply::Key(key) => Ok(key),
            other => Err(unexpected("key", &other)),
        }
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    fn text(&mut self, prompt: &str, initial: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        match self.next("text")? {
            Reply::Text(value) => Ok(value),
            Reply::Accept => Ok(initial.to_string()),
            other => Err(unexpected("text", &other)),
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        self.prompts.push(prompt.to_string());
        match self.next("confirm")? {
            Reply::Confirm(yes) => Ok(yes),
            Reply::Accept => Ok(default),
            other => Err(unexpected("confirm", &other)),
        }
    }

    fn say(&mut self, tone: Tone, message: &str) {
        self.messages.push((tone, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_replays_in_order() {
        let mut p = ScriptedPrompter::new()
            .key(Key::Enter)
            .answer("hello")
            .accept()
            .yes();
        assert_eq!(p.read_key().unwrap(), Key::Enter);
        assert_eq!(p.text("Name", "x").unwrap(), "hello");
        assert_eq!(p.text("Name", "seed").unwrap(), "seed");
        assert!(p.confirm("Sure?", false).unwrap());
        assert_eq!(p.prompts, vec!["Name", "Name", "Sure?"]);
        assert_eq!(p.remaining(), 0);
    }

    #[test]
    fn test_exhausted_script_cancels() {
        let mut p = ScriptedPrompter::new();
        assert!(p.read_key().unwrap_err().is_cancelled());
        assert!(p.text("x", "").unwrap_err().is_cancelled());
    }

    #[test]
    fn test_explicit_cancel() {
        let mut p = ScriptedPrompter::new().cancel().answer("never read");
        assert!(p.confirm("Add?", false).unwrap_err().is_cancelled());
        assert_eq!(p.remaining(), 1);
    }

    #[test]
    fn test_wrong_reply_kind_is_an_error() {
        let mut p = ScriptedPrompter::new().answer("oops");
        let err = p.read_key().unwrap_err();
        assert!(matches!(err, RuleError::Other(_)));
    }

    #[test]
    fn test_rows_for_counts_wrapped_lines() {
        assert_eq!(rows_for("", 80), 1);
        assert_eq!(rows_for("short", 80), 1);
        assert_eq!(rows_for(&"x".repeat(80), 80), 1);
        assert_eq!(rows_for(&"x".repeat(81), 80), 2);
        assert_eq!(rows_for(&"x".repeat(200), 80), 3);
        assert_eq!(rows_for(&"x".repeat(200), 0), 1);
    }

    #[test]
    fn test_rows_for_ignores_ansi_codes() {
        let styled = console::style("x".repeat(80)).bold().force_styling(true).to_string();
        assert!(styled.len() > 80);
        assert_eq!(rows_for(&styled, 80), 1);
    }
}
