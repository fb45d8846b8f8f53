// Concurrent batch fan-out over a single-entity lookup.

use crate::core::errors::PeerError;
use futures::future::join_all;
use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use tracing::debug;

/// Resolve many keys concurrently against `lookup`, returning only the keys
/// that resolved to a value.
///
/// All lookups are issued at once (the key-set size is the only concurrency
/// bound) and the call suspends until every one has completed or timed out;
/// there is no early exit on first failure. A key whose lookup fails, or
/// resolves to `None` under the operation's own fail-open policy, is
/// silently omitted — callers cannot distinguish "absent" from "lookup
/// failed" here, so gating decisions about an individual key must use that
/// key's own fail-secure client call instead. The batch itself never fails.
pub async fn resolve_many<K, V, F, Fut>(keys: impl IntoIterator<Item = K>, lookup: F) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<Option<V>, PeerError>>,
{
    let lookups = keys.into_iter().map(|key| {
        let fut = lookup(key.clone());
        async move { (key, fut.await) }
    });

    let results = join_all(lookups).await;
    let total = results.len();

    let resolved: HashMap<K, V> = results
        .into_iter()
        .filter_map(|(key, result)| match result {
            Ok(Some(value)) => Some((key, value)),
            _ => None,
        })
        .collect();

    if resolved.len() < total {
        debug!(
            requested = total,
            resolved = resolved.len(),
            "batch lookup omitted unresolved keys"
        );
    }

    resolved
}
