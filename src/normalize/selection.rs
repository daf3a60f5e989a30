//! Structured selection parsing
//!
//! Turns free-form outcome labels into a typed descriptor: totals
//! (`over 2.5`), bare handicap lines (`+1.5`), sides carrying a line
//! (`home -1.5`) and plain named outcomes.

use super::tables::{lookup, SELECTION_SYNONYMS};
use super::text::clean;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Kind of outcome a selection refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionKind {
    /// Total above the line
    Over,
    /// Total below the line
    Under,
    /// Bare handicap line
    Handicap,
    /// Named outcome (`home`, `draw`, `yes`, ...), possibly with a line
    Named(String),
}

/// Typed form of a canonical selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionDescriptor {
    pub kind: SelectionKind,
    pub line: Option<Decimal>,
}

impl SelectionDescriptor {
    fn named(token: String) -> Self {
        Self {
            kind: SelectionKind::Named(token),
            line: None,
        }
    }
}

impl fmt::Display for SelectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, self.line) {
            (SelectionKind::Over, Some(line)) => write!(f, "over_{}", line.normalize()),
            (SelectionKind::Under, Some(line)) => write!(f, "under_{}", line.normalize()),
            (SelectionKind::Over, None) => f.write_str("over"),
            (SelectionKind::Under, None) => f.write_str("under"),
            (SelectionKind::Handicap, Some(line)) => f.write_str(&signed(line)),
            (SelectionKind::Handicap, None) => f.write_str("handicap"),
            (SelectionKind::Named(token), Some(line)) => write!(f, "{}_{}", token, signed(line)),
            (SelectionKind::Named(token), None) => f.write_str(token),
        }
    }
}

/// Render a handicap line with an explicit sign on positive values
fn signed(line: Decimal) -> String {
    let line = line.normalize();
    if line.is_zero() {
        "0".to_string()
    } else if line.is_sign_positive() {
        format!("+{}", line)
    } else {
        line.to_string()
    }
}

fn total_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(over|o|mais de|mais|under|u|menos de|menos) \+?(\d+(?:\.\d+)?)$")
            .expect("total pattern is valid")
    })
}

fn side_line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([a-z0-9]+(?: [a-z0-9]+)*) ([+-]?\d+(?:\.\d+)?)$")
            .expect("side line pattern is valid")
    })
}

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[+-]?\d+(?:\.\d+)?$").expect("line pattern is valid"))
}

/// Parse a numeric line, tolerating the explicit `+` sign
fn parse_line(text: &str) -> Option<Decimal> {
    Decimal::from_str(text.trim_start_matches('+')).ok()
}

/// Parse a raw selection label into a typed descriptor.
///
/// Never fails: anything unrecognised becomes a named outcome holding the
/// cleaned label.
pub fn parse_selection(raw: &str) -> SelectionDescriptor {
    let cleaned = clean(raw);

    if let Some((_, canonical)) = SELECTION_SYNONYMS.iter().find(|(from, _)| *from == cleaned) {
        return SelectionDescriptor::named((*canonical).to_string());
    }

    if let Some(caps) = total_pattern().captures(&cleaned) {
        if let Some(line) = parse_line(&caps[2]) {
            let kind = if caps[1].starts_with('o') || caps[1].starts_with("mais") {
                SelectionKind::Over
            } else {
                SelectionKind::Under
            };
            return SelectionDescriptor {
                kind,
                line: Some(line),
            };
        }
    }

    if line_pattern().is_match(&cleaned) {
        if let Some(line) = parse_line(&cleaned) {
            return SelectionDescriptor {
                kind: SelectionKind::Handicap,
                line: Some(line),
            };
        }
    }

    if let Some(caps) = side_line_pattern().captures(&cleaned) {
        if let Some(line) = parse_line(&caps[2]) {
            let side = lookup(SELECTION_SYNONYMS, caps[1].to_string());
            return SelectionDescriptor {
                kind: SelectionKind::Named(side),
                line: Some(line),
            };
        }
    }

    SelectionDescriptor::named(cleaned)
}
