//! Text command parsing
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Accept any Unicode decimal digit in numbers
//! - 1.0.0: Initial help/list/cancel/remind grammar

use regex::Regex;
use std::sync::OnceLock;

use crate::features::reminders::TimeUnit;

static CANCEL_PATTERN: OnceLock<Regex> = OnceLock::new();
static REMIND_PATTERN: OnceLock<Regex> = OnceLock::new();
static DIGIT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn cancel_pattern() -> &'static Regex {
    CANCEL_PATTERN
        .get_or_init(|| Regex::new(r"^cancel\s+(\d+)$").expect("cancel pattern is valid"))
}

fn remind_pattern() -> &'static Regex {
    REMIND_PATTERN.get_or_init(|| {
        Regex::new(r"^remind\s+(\d+(?:\.\d+)?)(h|m)\s+(.+)$").expect("remind pattern is valid")
    })
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0; 4];
    DIGIT_PATTERN
        .get_or_init(|| Regex::new(r"^\d$").expect("digit pattern is valid"))
        .is_match(c.encode_utf8(&mut buf))
}

/// ASCII form of any Unicode decimal digit
///
/// Decimal digits are encoded as contiguous runs of ten starting at zero, so a
/// digit's value is its offset from the start of its block, modulo ten.
fn ascii_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    char::from_digit((c as u32 - start) % 10, 10)
}

/// Rewrite a matched number so the std parsers accept it
fn ascii_number(number: &str) -> Option<String> {
    number
        .chars()
        .map(|c| if c == '.' { Some('.') } else { ascii_digit(c) })
        .collect()
}

/// A classified chat command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    List,
    /// 1-based display position
    Cancel(usize),
    Remind {
        amount: f64,
        unit: TimeUnit,
        text: String,
    },
    Unrecognized,
}

impl Command {
    /// Classify a raw message body
    ///
    /// The body is trimmed and lower-cased first, so reminder text is stored
    /// lower-cased as well.
    pub fn parse(input: &str) -> Command {
        let text = input.trim().to_lowercase();

        match text.as_str() {
            "help" => return Command::Help,
            "list" => return Command::List,
            _ => {}
        }

        if let Some(caps) = cancel_pattern().captures(&text) {
            // Digits beyond usize can never name a listed reminder
            let index = ascii_number(&caps[1])
                .map_or(usize::MAX, |n| n.parse::<usize>().unwrap_or(usize::MAX));
            return Command::Cancel(index);
        }

        if let Some(caps) = remind_pattern().captures(&text) {
            let amount = ascii_number(&caps[1]).and_then(|n| n.parse::<f64>().ok());
            let unit = TimeUnit::from_suffix(&caps[2]);
            if let (Some(amount), Some(unit)) = (amount, unit) {
                return Command::Remind {
                    amount,
                    unit,
                    text: caps[3].to_string(),
                };
            }
        }

        Command::Unrecognized
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::List => "list",
            Command::Cancel(_) => "cancel",
            Command::Remind { .. } => "remind",
            Command::Unrecognized => "unrecognized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remind(amount: f64, unit: TimeUnit, text: &str) -> Command {
        Command::Remind {
            amount,
            unit,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("list"), Command::List);
        assert_eq!(Command::parse("  HELP \n"), Command::Help);
        assert_eq!(Command::parse("List"), Command::List);
    }

    #[test]
    fn test_no_partial_matches() {
        assert_eq!(Command::parse("help me"), Command::Unrecognized);
        assert_eq!(Command::parse("listing"), Command::Unrecognized);
        assert_eq!(Command::parse("cancel"), Command::Unrecognized);
        assert_eq!(Command::parse("cancel 1 2"), Command::Unrecognized);
        assert_eq!(Command::parse("cancel -1"), Command::Unrecognized);
    }

    #[test]
    fn test_cancel() {
        assert_eq!(Command::parse("cancel 2"), Command::Cancel(2));
        assert_eq!(Command::parse("Cancel   10"), Command::Cancel(10));
        assert_eq!(Command::parse("cancel 0"), Command::Cancel(0));
        assert_eq!(
            Command::parse("cancel 99999999999999999999999999"),
            Command::Cancel(usize::MAX)
        );
    }

    #[test]
    fn test_remind() {
        assert_eq!(
            Command::parse("remind 1.5h take out laundry"),
            remind(1.5, TimeUnit::Hours, "take out laundry")
        );
        assert_eq!(
            Command::parse("remind 10m tea"),
            remind(10.0, TimeUnit::Minutes, "tea")
        );
    }

    #[test]
    fn test_remind_text_is_lowercased() {
        assert_eq!(
            Command::parse("Remind 2H Call Mom"),
            remind(2.0, TimeUnit::Hours, "call mom")
        );
    }

    #[test]
    fn test_remind_keeps_inner_whitespace() {
        assert_eq!(
            Command::parse("remind 1m  a   b"),
            remind(1.0, TimeUnit::Minutes, "a   b")
        );
    }

    #[test]
    fn test_malformed_remind_is_unrecognized() {
        for input in [
            "remind 1.2.3h x",
            "remind 1d x",
            "remind 1h",
            "remind h x",
            "remind .5h x",
            "remind 1.h x",
            "remind 1 h x",
            "remind -1m x",
            "remind 1hx",
        ] {
            assert_eq!(Command::parse(input), Command::Unrecognized, "{input}");
        }
    }

    #[test]
    fn test_non_ascii_digits() {
        assert_eq!(Command::parse("cancel ٣"), Command::Cancel(3));
        assert_eq!(Command::parse("cancel １２"), Command::Cancel(12));
        assert_eq!(
            Command::parse("remind ٥m x"),
            remind(5.0, TimeUnit::Minutes, "x")
        );
        assert_eq!(
            Command::parse("remind ١.٥h x"),
            remind(1.5, TimeUnit::Hours, "x")
        );
    }

    #[test]
    fn test_digit_value_within_adjacent_blocks() {
        // Mathematical digits are five back-to-back runs of ten
        assert_eq!(ascii_digit('\u{1D7CE}'), Some('0'));
        assert_eq!(ascii_digit('\u{1D7D5}'), Some('7'));
        assert_eq!(ascii_digit('\u{1D7E5}'), Some('3'));
        assert_eq!(ascii_digit('\u{0669}'), Some('9'));
        assert_eq!(ascii_digit('x'), None);
        assert_eq!(ascii_digit('½'), None);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(Command::parse("banana"), Command::Unrecognized);
        assert_eq!(Command::parse(""), Command::Unrecognized);
    }

    #[test]
    fn test_command_names() {
        assert_eq!(Command::parse("cancel 1").name(), "cancel");
        assert_eq!(Command::parse("remind 1m x").name(), "remind");
        assert_eq!(Command::parse("nope").name(), "unrecognized");
    }
}
