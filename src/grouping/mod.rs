//! Event grouping
//!
//! Clusters canonical quotes into fixtures by `(home, away, league,
//! start_time)`, regardless of bookmaker or market.
//!
//! Grouping is purely key based. A fixture whose team names canonicalize
//! differently between bookmakers splits into separate clusters, and quotes
//! without a start time group by teams and league alone.

use crate::quote::{EventKey, Quote};
use std::collections::BTreeMap;

/// Bucket quotes by fixture. Within a cluster, input order is preserved.
pub fn group_by_event(quotes: &[Quote]) -> BTreeMap<EventKey, Vec<&Quote>> {
    let mut clusters: BTreeMap<EventKey, Vec<&Quote>> = BTreeMap::new();
    for quote in quotes {
        clusters.entry(quote.event_key()).or_default().push(quote);
    }
    clusters
}
