//! @acp:module "Selector"
//! @acp:summary "Navigable list state machine driven by single key events"
//! @acp:domain cli
//! @acp:layer logic
//!
//! # Selector
//!
//! A selector is built fresh for each pass over a rule and discarded once
//! it yields a [`SelectionOutcome`]. State transitions live in
//! [`Selector::apply`], a pure `(state, action) -> outcome` step, so the
//! whole machine is testable without a terminal. [`Selector::run`] only
//! adds the blocking key loop on top.
//!
//! Keys:
//! - `↑`/`k`, `↓`/`j`: move the cursor (wraps around)
//! - `Space`: toggle the entry under the cursor (multi mode only)
//! - `Enter`: confirm
//! - `Esc`/`q`/Ctrl-C: cancel
//! - `d`: show details for the entry under the cursor
//! - `e`: request an edit of the entry under the cursor

pub mod render;

pub use render::{render, Frame};

use std::collections::BTreeSet;

use console::Key;

use crate::error::Result;
use crate::prompt::Prompter;

/// Detail shown when editing is requested on a read-only entry
pub const NOT_EDITABLE: &str = "This entry cannot be edited (only predefined rule content is editable).";

/// Selection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Single,
    Multi,
}

/// One selectable row
#[derive(Debug, Clone)]
pub struct Entry<T> {
    pub value: T,
    pub label: String,
    /// Text shown on the detail key
    pub detail: String,
    /// Whether the edit key may request an edit of this entry
    pub editable: bool,
}

impl<T> Entry<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            detail: String::new(),
            editable: false,
        }
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }
}

/// Terminal result of one selector pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Cancelled,
    /// Confirmed entry indices in list order. At most one in single mode.
    Confirmed(Vec<usize>),
    EditRequested(usize),
}

/// Discrete input understood by the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Toggle,
    Confirm,
    Cancel,
    Detail,
    Edit,
}

impl Action {
    /// Map a key press, `None` for keys the selector ignores
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::ArrowUp | Key::Char('k') => Some(Action::Up),
            Key::ArrowDown | Key::Char('j') => Some(Action::Down),
            Key::Char(' ') => Some(Action::Toggle),
            Key::Enter => Some(Action::Confirm),
            Key::Escape | Key::Char('q') => Some(Action::Cancel),
            Key::Char('d') => Some(Action::Detail),
            Key::Char('e') => Some(Action::Edit),
            _ => None,
        }
    }
}

/// @acp:summary "List selector over borrowed entries"
#[derive(Debug)]
pub struct Selector<'a, T> {
    title: &'a str,
    entries: &'a [Entry<T>],
    mode: Mode,
    cursor: usize,
    selected: BTreeSet<usize>,
    detail: Option<String>,
}

impl<'a, T> Selector<'a, T> {
    /// # Panics
    ///
    /// Panics if `entries` is empty.
    pub fn new(title: &'a str, entries: &'a [Entry<T>], mode: Mode) -> Self {
        assert!(!entries.is_empty(), "selector needs at least one entry");
        Self {
            title,
            entries,
            mode,
            cursor: 0,
            selected: BTreeSet::new(),
            detail: None,
        }
    }

    /// Start at `cursor`, clamped to the entry list
    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor.min(self.entries.len() - 1);
        self
    }

    /// Pre-select entries. Ignored in single mode; out-of-range indices are dropped.
    pub fn with_selection<I: IntoIterator<Item = usize>>(mut self, selection: I) -> Self {
        if self.mode == Mode::Multi {
            let len = self.entries.len();
            self.selected = selection.into_iter().filter(|&i| i < len).collect();
        }
        self
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn detail_message(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Apply one action. Returns an outcome when the pass is over.
    pub fn apply(&mut self, action: Action) -> Option<SelectionOutcome> {
        let len = self.entries.len();
        match action {
            Action::Up => {
                self.cursor = (self.cursor + len - 1) % len;
                None
            }
            Action::Down => {
                self.cursor = (self.cursor + 1) % len;
                None
            }
            Action::Toggle => {
                if self.mode == Mode::Multi && !self.selected.remove(&self.cursor) {
                    self.selected.insert(self.cursor);
                }
                None
            }
            Action::Confirm => Some(SelectionOutcome::Confirmed(match self.mode {
                Mode::Single => vec![self.cursor],
                Mode::Multi => self.selected.iter().copied().collect(),
            })),
            Action::Cancel => Some(SelectionOutcome::Cancelled),
            Action::Detail => {
                self.detail = Some(self.entries[self.cursor].detail.clone());
                None
            }
            Action::Edit => {
                if self.entries[self.cursor].editable {
                    Some(SelectionOutcome::EditRequested(self.cursor))
                } else {
                    self.detail = Some(NOT_EDITABLE.to_string());
                    None
                }
            }
        }
    }

    pub fn render(&self) -> Frame {
        render(self)
    }

    /// Block on key events until the pass produces an outcome.
    ///
    /// Ctrl-C at the terminal is reported as `Cancelled`, same as `Esc`.
    pub fn run<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<SelectionOutcome> {
        loop {
            prompter.draw(&self.render())?;
            let key = match prompter.read_key() {
                Ok(key) => key,
                Err(e) if e.is_cancelled() => return Ok(SelectionOutcome::Cancelled),
                Err(e) => return Err(e),
            };
            let Some(action) = Action::from_key(&key) else {
                continue;
            };
            if let Some(outcome) = self.apply(action) {
                prompter.clear()?;
                tracing::debug!(?outcome, "Selector finished");
                return Ok(outcome);
            }
        }
    }
}
