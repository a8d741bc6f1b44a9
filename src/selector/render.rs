//! @acp:module "Selector Renderer"
//! @acp:summary "Pure text rendering of selector state"
//! @acp:domain cli
//! @acp:layer presentation

use std::fmt;

use super::{Mode, Selector};
use crate::style::Tone;

/// Rendered selector screen, one toned line per entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<(Tone, String)>,
}

impl Frame {
    /// Append text, splitting embedded newlines into separate lines
    pub fn push(&mut self, tone: Tone, text: &str) {
        for line in text.split('\n') {
            self.lines.push((tone, line.to_string()));
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &(Tone, String)> {
        self.lines.iter()
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (_, line)) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Draw the selector. Depends only on cursor, selection and detail message.
pub fn render<T>(selector: &Selector<'_, T>) -> Frame {
    let mut frame = Frame::default();
    frame.push(Tone::Plain, selector.title);

    for (i, entry) in selector.entries.iter().enumerate() {
        let pointer = if i == selector.cursor { ">" } else { " " };
        let line = match selector.mode {
            Mode::Single => format!("{} {}", pointer, entry.label),
            Mode::Multi => {
                let mark = if selector.selected.contains(&i) { "[x]" } else { "[ ]" };
                format!("{} {} {}", pointer, mark, entry.label)
            }
        };
        let tone = if i == selector.cursor { Tone::Selected } else { Tone::Plain };
        frame.push(tone, &line);
    }

    frame.push(Tone::Plain, "");
    let mut hints = String::from("[d] details  [e] edit  [Enter] confirm");
    if selector.mode == Mode::Multi {
        hints.push_str("  [Space] toggle");
    }
    hints.push_str("  [Esc] cancel");
    frame.push(Tone::Info, &hints);

    if let Some(detail) = &selector.detail {
        frame.push(Tone::Plain, "");
        frame.push(Tone::Detail, "--- Detail ---");
        frame.push(Tone::Detail, detail);
    }

    frame
}
