//! Keyed aggregation.

use crate::sources::VecStream;
use crate::stream::DataStream;
use std::collections::HashMap;
use std::hash::Hash;

/// Drain `upstream` and fold every element into a per-key accumulator,
/// returning a stream of `(key, accumulator)` pairs in the order each key
/// was first seen.
///
/// Eager: the upstream is consumed fully here, at construction. The first
/// occurrence of a key seeds its accumulator with a clone of `init`;
/// `accumulate` then folds each element into the entry for its key, in
/// upstream order. Exactly one output pair per distinct key.
///
/// # Example
/// ```
/// use pullflow::{from_vec, adapters::aggregate_by_key, DataStreamExt};
///
/// let words = from_vec(vec!["b", "a", "b", "c", "a", "b"]);
/// let counts = aggregate_by_key(words, 0u64, |_, n| *n += 1, |w| w.to_string());
/// assert_eq!(
///     counts.collect(),
///     vec![
///         ("b".to_string(), 3),
///         ("a".to_string(), 2),
///         ("c".to_string(), 1),
///     ],
/// );
/// ```
pub fn aggregate_by_key<S, K, A, G, H>(
    mut upstream: S,
    init: A,
    mut accumulate: G,
    mut key: H,
) -> VecStream<(K, A)>
where
    S: DataStream,
    K: Eq + Hash + Clone,
    A: Clone,
    G: FnMut(&S::Item, &mut A),
    H: FnMut(&S::Item) -> K,
{
    let mut results: Vec<(K, A)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();
    while let Some(item) = upstream.next() {
        let k = key(&item);
        let slot = match index.get(&k) {
            Some(&i) => i,
            None => {
                results.push((k.clone(), init.clone()));
                index.insert(k, results.len() - 1);
                results.len() - 1
            }
        };
        accumulate(&item, &mut results[slot].1);
    }
    VecStream::new(results)
}
