//! Lock-protected quote store

use super::MergePolicy;
use crate::quote::{IdentityKey, Quote};
use crate::telemetry::{set_gauge, GaugeMetric};
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Debug, Default)]
struct StoreInner {
    /// Quotes in first-insertion order
    quotes: Vec<Quote>,
    /// Position of each key in `quotes`
    index: HashMap<IdentityKey, usize>,
}

/// Deduplicating quote store shared between ingestion and detection
///
/// A whole batch is applied under one write lock, so readers never observe a
/// partially applied batch.
#[derive(Debug, Default)]
pub struct CanonicalStore {
    policy: MergePolicy,
    inner: RwLock<StoreInner>,
}

impl CanonicalStore {
    /// Create an empty store with the given merge policy
    pub fn new(policy: MergePolicy) -> Self {
        Self {
            policy,
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// Merge a batch of canonical quotes.
    ///
    /// Returns how many brand-new identity keys were added; replacements are
    /// not counted. Quotes sharing a key within the batch merge left to right.
    pub fn upsert(&self, quotes: impl IntoIterator<Item = Quote>) -> usize {
        let mut added = 0;
        let mut replaced = 0;

        let mut inner = self.inner.write();
        for quote in quotes {
            let key = quote.identity_key();
            match inner.index.get(&key).copied() {
                Some(pos) => {
                    if self.policy.prefers(&quote, &inner.quotes[pos]) {
                        inner.quotes[pos] = quote;
                        replaced += 1;
                    }
                }
                None => {
                    let pos = inner.quotes.len();
                    inner.quotes.push(quote);
                    inner.index.insert(key, pos);
                    added += 1;
                }
            }
        }
        let size = inner.quotes.len();
        drop(inner);

        set_gauge(GaugeMetric::StoreSize, size as f64);
        tracing::debug!(added, replaced, size, "Store batch applied");
        added
    }

    /// Consistent copy of every stored quote, in first-insertion order
    pub fn snapshot(&self) -> Vec<Quote> {
        self.inner.read().quotes.clone()
    }

    /// Number of distinct identity keys stored
    pub fn len(&self) -> usize {
        self.inner.read().quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge policy in effect
    pub fn policy(&self) -> MergePolicy {
        self.policy
    }
}
