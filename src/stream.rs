//! The core stream contract and the element vocabulary shared by adapters.
//!
//! This module defines:
//!
//! - [`DataStream`]: the pull contract every source, adapter, and sink speaks.
//! - [`KV`]: a key-value element with a distinguished `key` field, consumed by
//!   the key-based join.
//! - [`JoinResult`]: a left element paired with an optional right match
//!   (left-outer semantics).
//!
//! Everything else in the crate is either an implementor of [`DataStream`]
//! (sources in [`crate::sources`] and [`crate::io`], adapters in
//! [`crate::adapters`]) or a consumer of one (sinks in [`crate::sinks`]).

use serde::{Deserialize, Serialize};

/// A lazy, finite, single-pass sequence of typed elements with a pull cursor.
///
/// A stream yields elements in order through [`next`](DataStream::next) and
/// reports exhaustion through [`is_end`](DataStream::is_end). Streams are
/// **fused**: once `next` has returned `None`, every later call returns `None`
/// and `is_end` stays `true`. Stale data after end is unrepresentable.
///
/// Streams own their upstream resources (source iterators, file handles) and
/// release them when dropped or exhausted, whichever comes first. They are not
/// restartable; passing a stream into an adapter or sink transfers ownership,
/// so the original handle cannot be reused.
///
/// `is_end` never advances the cursor. For lazy adapters it may be
/// conservative: a filter whose upstream holds only non-matching elements
/// reports `false` until a pull observes the end. Once `true`, it stays
/// `true`.
///
/// # Example
/// ```
/// use pullflow::{from_vec, DataStream};
///
/// let mut s = from_vec(vec![1, 2]);
/// assert!(!s.is_end());
/// assert_eq!(s.next(), Some(1));
/// assert_eq!(s.next(), Some(2));
/// assert_eq!(s.next(), None);
/// assert!(s.is_end());
/// assert_eq!(s.next(), None); // fused
/// ```
pub trait DataStream {
    /// The element type carried by this stream. Fixed per stream instance.
    type Item;

    /// Advance the cursor and return the next element, or `None` at
    /// end-of-stream. After the first `None`, every call returns `None`.
    fn next(&mut self) -> Option<Self::Item>;

    /// Whether the cursor is exhausted, without advancing it.
    fn is_end(&self) -> bool;
}

/// A key-value element. The `key` field drives the key-based join; equality
/// is componentwise.
///
/// # Example
/// ```
/// use pullflow::KV;
///
/// let a = KV { key: 1, value: "x" };
/// let b = KV { key: 1, value: "x" };
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KV<K, V> {
    pub key: K,
    pub value: V,
}

/// One output row of a join: a left element and its optional right match.
///
/// `right` is `None` exactly when the left element had no match on the right
/// side, in which case the join emits a single such row for it (left-outer
/// semantics).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinResult<L, R> {
    pub left: L,
    pub right: Option<R>,
}
