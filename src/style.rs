//! @acp:module "Style"
//! @acp:summary "Stateless mapping from a message tone to styled terminal text"
//! @acp:domain cli
//! @acp:layer presentation

use console::style;

/// Visual tone of a line of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Header,
    Info,
    Success,
    Warning,
    Failure,
    Selected,
    Detail,
    Plain,
}

/// @acp:summary "Paint text for the given tone"
///
/// `console` decides on its own whether the target terminal supports
/// colors, so piped output stays plain.
pub fn paint(tone: Tone, text: &str) -> String {
    match tone {
        Tone::Header => format!("\n{}", style(format!("=== {} ===", text)).magenta().bold()),
        Tone::Info => style(text).cyan().to_string(),
        Tone::Success => format!("{} {}", style("✓").green(), text),
        Tone::Warning => format!("{} {}", style("⚠").yellow(), style(text).yellow()),
        Tone::Failure => format!("{} {}", style("✗").red(), style(text).red()),
        Tone::Selected => style(text).cyan().bold().to_string(),
        Tone::Detail => style(text).yellow().to_string(),
        Tone::Plain => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_is_untouched() {
        assert_eq!(paint(Tone::Plain, "hello"), "hello");
    }

    #[test]
    fn test_tones_keep_text() {
        for tone in [Tone::Header, Tone::Info, Tone::Success, Tone::Warning, Tone::Failure] {
            let painted = console::strip_ansi_codes(&paint(tone, "rules")).to_string();
            assert!(painted.contains("rules"), "{:?} lost its text", tone);
        }
    }

    #[test]
    fn test_header_frame() {
        let painted = console::strip_ansi_codes(&paint(Tone::Header, "Style")).to_string();
        assert_eq!(painted, "\n=== Style ===");
    }
}
