//! Canonical quote store
//!
//! Holds at most one quote per [`IdentityKey`](crate::quote::IdentityKey) and
//! decides which quote survives when a key is seen again.

mod canonical;

pub use canonical::CanonicalStore;

use crate::quote::Quote;
use serde::{Deserialize, Serialize};

/// Which quote to keep when an identity key is already stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    /// Keep the larger price
    #[default]
    Highest,
    /// Keep the most recently observed quote
    Latest,
}

impl MergePolicy {
    /// Whether `incoming` should replace `existing`. Ties keep `existing`.
    pub fn prefers(&self, incoming: &Quote, existing: &Quote) -> bool {
        match self {
            MergePolicy::Highest => incoming.price > existing.price,
            MergePolicy::Latest => incoming.observed_at > existing.observed_at,
        }
    }
}
