//! Normalization module
//!
//! Maps bookmaker-specific team, league, market and selection strings to
//! shared canonical tokens so quotes for the same real-world outcome compare
//! equal across sources.
//!
//! Every canonicalizer is total (empty input gives empty output, nothing
//! panics) and idempotent.

mod selection;
mod tables;
mod text;

pub use selection::{parse_selection, SelectionDescriptor, SelectionKind};
pub use text::{clean, fold_diacritics};

use tables::{lookup, LEAGUE_SYNONYMS, MARKET_SYNONYMS, TEAM_FILLERS, TEAM_SYNONYMS};

/// Canonical team token
pub fn canonicalize_team(raw: &str) -> String {
    let cleaned = text::strip_fillers(&clean(raw), TEAM_FILLERS);
    lookup(TEAM_SYNONYMS, cleaned)
}

/// Canonical league token
pub fn canonicalize_league(raw: &str) -> String {
    lookup(LEAGUE_SYNONYMS, clean(raw))
}

/// Canonical market token
pub fn canonicalize_market(raw: &str) -> String {
    lookup(MARKET_SYNONYMS, clean(raw))
}

/// Canonical selection token, rendered from its parsed descriptor
pub fn canonicalize_selection(raw: &str) -> String {
    parse_selection(raw).to_string()
}

/// Canonical form for free identifiers such as bookmaker or sport names
pub fn canonicalize_token(raw: &str) -> String {
    clean(raw)
}
