//! Normalize command implementation

use crate::normalize::{
    canonicalize_league, canonicalize_market, canonicalize_selection, canonicalize_team,
    parse_selection,
};
use clap::{Args, ValueEnum};

/// Which vocabulary to canonicalize against
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NormalizeKind {
    Team,
    League,
    Market,
    Selection,
}

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Vocabulary to use
    #[arg(short, long, value_enum)]
    pub kind: NormalizeKind,

    /// Raw string as scraped
    pub value: String,
}

impl NormalizeArgs {
    pub fn canonical(&self) -> String {
        match self.kind {
            NormalizeKind::Team => canonicalize_team(&self.value),
            NormalizeKind::League => canonicalize_league(&self.value),
            NormalizeKind::Market => canonicalize_market(&self.value),
            NormalizeKind::Selection => canonicalize_selection(&self.value),
        }
    }

    pub fn execute(&self) -> anyhow::Result<()> {
        println!("{}", self.canonical());
        if self.kind == NormalizeKind::Selection {
            println!("{:?}", parse_selection(&self.value));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: NormalizeKind, value: &str) -> NormalizeArgs {
        NormalizeArgs {
            kind,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_canonical_per_kind() {
        assert_eq!(args(NormalizeKind::Team, "Manchester United FC").canonical(), "man united");
        assert_eq!(args(NormalizeKind::Market, "Over/Under").canonical(), "over_under");
        assert_eq!(args(NormalizeKind::Selection, "Mais de 2,5").canonical(), "over_2.5");
        assert_eq!(args(NormalizeKind::Selection, "Empate").canonical(), "draw");
    }
}
