//! Left-outer hash joins, eager on the right side.
//!
//! Two shapes share the same semantics:
//!
//! - [`JoinStream`] joins two [`KV`] streams on their `key` fields and emits
//!   the value sides.
//! - [`JoinByKeyStream`] joins arbitrary element types through caller-supplied
//!   key functions and emits the full elements.
//!
//! Both drain the right stream into a `HashMap<K, Vec<_>>` at construction,
//! preserving right-side insertion order per key, then stream the left side
//! lazily. A left element with `n > 0` right matches produces `n` rows in
//! insertion order; a left element with no match produces exactly one row
//! with `right: None`. Every left element appears at least once; there is no
//! error case.

use crate::stream::{DataStream, JoinResult, KV};
use std::collections::HashMap;
use std::hash::Hash;

/// Join of two key-value streams on the `key` field. Output rows pair the
/// left **value** with each matching right **value**.
///
/// # Example
/// ```
/// use pullflow::{from_vec, DataStreamExt, JoinResult, KV};
///
/// let left = from_vec(vec![
///     KV { key: 1, value: "alice" },
///     KV { key: 2, value: "bob" },
/// ]);
/// let right = from_vec(vec![KV { key: 1, value: "ops" }]);
///
/// let rows = left.join(right).collect();
/// assert_eq!(rows, vec![
///     JoinResult { left: "alice", right: Some("ops") },
///     JoinResult { left: "bob", right: None },
/// ]);
/// ```
pub struct JoinStream<S, K, Lv, Rv> {
    left: S,
    rights: HashMap<K, Vec<Rv>>,
    // left value being fanned out, its key, and the next right index
    current: Option<(Lv, K, usize)>,
}

impl<S, K, Lv, Rv> JoinStream<S, K, Lv, Rv>
where
    S: DataStream<Item = KV<K, Lv>>,
    K: Eq + Hash + Clone,
    Lv: Clone,
    Rv: Clone,
{
    /// Drains `right` immediately; `left` is streamed on demand.
    pub fn new<R>(left: S, mut right: R) -> Self
    where
        R: DataStream<Item = KV<K, Rv>>,
    {
        let mut rights: HashMap<K, Vec<Rv>> = HashMap::new();
        while let Some(kv) = right.next() {
            rights.entry(kv.key).or_default().push(kv.value);
        }
        Self {
            left,
            rights,
            current: None,
        }
    }
}

impl<S, K, Lv, Rv> DataStream for JoinStream<S, K, Lv, Rv>
where
    S: DataStream<Item = KV<K, Lv>>,
    K: Eq + Hash + Clone,
    Lv: Clone,
    Rv: Clone,
{
    type Item = JoinResult<Lv, Rv>;

    fn next(&mut self) -> Option<JoinResult<Lv, Rv>> {
        if let Some((left, key, index)) = self.current.take() {
            // invariant: `current` is only set while rights[key][index] exists
            if let Some(matches) = self.rights.get(&key) {
                let row = JoinResult {
                    left: left.clone(),
                    right: Some(matches[index].clone()),
                };
                if index + 1 < matches.len() {
                    self.current = Some((left, key, index + 1));
                }
                return Some(row);
            }
        }
        let kv = self.left.next()?;
        match self.rights.get(&kv.key) {
            Some(matches) if !matches.is_empty() => {
                let row = JoinResult {
                    left: kv.value.clone(),
                    right: Some(matches[0].clone()),
                };
                if matches.len() > 1 {
                    self.current = Some((kv.value, kv.key, 1));
                }
                Some(row)
            }
            _ => Some(JoinResult {
                left: kv.value,
                right: None,
            }),
        }
    }

    fn is_end(&self) -> bool {
        self.current.is_none() && self.left.is_end()
    }
}

/// Join of two arbitrary streams through key functions. Output rows pair the
/// full left element with each matching full right element.
pub struct JoinByKeyStream<S: DataStream, R, K, F> {
    left: S,
    left_key: F,
    rights: HashMap<K, Vec<R>>,
    current: Option<(S::Item, K, usize)>,
}

impl<S, R, K, F> JoinByKeyStream<S, R, K, F>
where
    S: DataStream,
    S::Item: Clone,
    R: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&S::Item) -> K,
{
    /// Drains `right` immediately, keying each element with `right_key`;
    /// `left` is streamed on demand and keyed with `left_key`.
    pub fn new<RS, G>(left: S, mut right: RS, left_key: F, mut right_key: G) -> Self
    where
        RS: DataStream<Item = R>,
        G: FnMut(&R) -> K,
    {
        let mut rights: HashMap<K, Vec<R>> = HashMap::new();
        while let Some(element) = right.next() {
            rights.entry(right_key(&element)).or_default().push(element);
        }
        Self {
            left,
            left_key,
            rights,
            current: None,
        }
    }
}

impl<S, R, K, F> DataStream for JoinByKeyStream<S, R, K, F>
where
    S: DataStream,
    S::Item: Clone,
    R: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&S::Item) -> K,
{
    type Item = JoinResult<S::Item, R>;

    fn next(&mut self) -> Option<JoinResult<S::Item, R>> {
        if let Some((left, key, index)) = self.current.take() {
            if let Some(matches) = self.rights.get(&key) {
                let row = JoinResult {
                    left: left.clone(),
                    right: Some(matches[index].clone()),
                };
                if index + 1 < matches.len() {
                    self.current = Some((left, key, index + 1));
                }
                return Some(row);
            }
        }
        let element = self.left.next()?;
        let key = (self.left_key)(&element);
        match self.rights.get(&key) {
            Some(matches) if !matches.is_empty() => {
                let row = JoinResult {
                    left: element.clone(),
                    right: Some(matches[0].clone()),
                };
                if matches.len() > 1 {
                    self.current = Some((element, key, 1));
                }
                Some(row)
            }
            _ => Some(JoinResult {
                left: element,
                right: None,
            }),
        }
    }

    fn is_end(&self) -> bool {
        self.current.is_none() && self.left.is_end()
    }
}
