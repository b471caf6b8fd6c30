//! Method-chaining surface over the same adapters and sinks as the pipe
//! operator. Each method takes `self` by value: chaining transfers ownership
//! stage to stage exactly as piping does.

use crate::adapters::{
    aggregate_by_key, split_result, DropNoneStream, FilterStream, JoinByKeyStream, JoinStream,
    MapStream, Partitioned, SplitStream,
};
use crate::io::FileLineStream;
use crate::pipe::Flow;
use crate::sinks;
use crate::sources::VecStream;
use crate::stream::{DataStream, KV};
use anyhow::Result;
use std::fmt::Display;
use std::hash::Hash;
use std::io::Write;
use std::path::PathBuf;

/// Adapter and sink methods available on every [`DataStream`].
///
/// # Example
/// ```
/// use pullflow::{from_vec, DataStreamExt};
///
/// let out = from_vec(vec![1, 2, 3, 4, 5, 6, 7, 8])
///     .filter(|x| x % 2 == 0)
///     .map(|x| x * x)
///     .collect();
/// assert_eq!(out, vec![4, 16, 36, 64]);
/// ```
pub trait DataStreamExt: DataStream + Sized {
    /// Keep the elements satisfying `predicate`. Lazy, order-preserving.
    fn filter<P>(self, predicate: P) -> Flow<FilterStream<Self, P>>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Flow(FilterStream::new(self, predicate))
    }

    /// Apply `f` to each element, exactly once, at emission time. Lazy.
    fn map<U, F>(self, f: F) -> Flow<MapStream<Self, F>>
    where
        F: FnMut(Self::Item) -> U,
    {
        Flow(MapStream::new(self, f))
    }

    /// Keep the present values of an optional-element stream.
    fn drop_none<T>(self) -> Flow<DropNoneStream<Self>>
    where
        Self: DataStream<Item = Option<T>>,
    {
        Flow(DropNoneStream::new(self))
    }

    /// Tokenize text elements on a set of delimiter characters. Lazy.
    fn split(self, delimiters: &str) -> Flow<SplitStream<Self>>
    where
        Self::Item: AsRef<str>,
    {
        Flow(SplitStream::new(self, delimiters))
    }

    /// Fold every element into a per-key accumulator; emits `(key, acc)` in
    /// first-occurrence key order. Eager.
    fn aggregate_by_key<K, A, G, H>(
        self,
        init: A,
        accumulate: G,
        key: H,
    ) -> Flow<VecStream<(K, A)>>
    where
        K: Eq + Hash + Clone,
        A: Clone,
        G: FnMut(&Self::Item, &mut A),
        H: FnMut(&Self::Item) -> K,
    {
        Flow(aggregate_by_key(self, init, accumulate, key))
    }

    /// Fan a fallible stream out into failure and success streams. Eager.
    fn split_result<T, E>(self) -> Partitioned<T, E>
    where
        Self: DataStream<Item = Result<T, E>>,
    {
        split_result(self)
    }

    /// Left-outer join with a key-value stream on the `key` field, emitting
    /// the value sides. Eager on the right, lazy on the left.
    fn join<K, Lv, Rv, R>(self, right: R) -> Flow<JoinStream<Self, K, Lv, Rv>>
    where
        Self: DataStream<Item = KV<K, Lv>>,
        R: DataStream<Item = KV<K, Rv>>,
        K: Eq + Hash + Clone,
        Lv: Clone,
        Rv: Clone,
    {
        Flow(JoinStream::new(self, right))
    }

    /// Left-outer join through key functions, emitting full elements. Eager
    /// on the right, lazy on the left.
    fn join_by_key<R, K, LK, RK>(
        self,
        right: R,
        left_key: LK,
        right_key: RK,
    ) -> Flow<JoinByKeyStream<Self, R::Item, K, LK>>
    where
        Self::Item: Clone,
        R: DataStream,
        R::Item: Clone,
        K: Eq + Hash + Clone,
        LK: FnMut(&Self::Item) -> K,
        RK: FnMut(&R::Item) -> K,
    {
        Flow(JoinByKeyStream::new(self, right, left_key, right_key))
    }

    /// Read each path as a file and yield its non-empty lines.
    fn open_files(self) -> Flow<FileLineStream<Self>>
    where
        Self: DataStream<Item = PathBuf>,
    {
        Flow(FileLineStream::new(self))
    }

    /// Exhaust into a vector, preserving order.
    fn collect(self) -> Vec<Self::Item> {
        sinks::collect(self)
    }

    /// Exhaust, writing each element followed by `delimiter`.
    ///
    /// # Errors
    ///
    /// Fails on the first write error.
    fn write<W: Write>(self, out: W, delimiter: char) -> Result<()>
    where
        Self::Item: Display,
    {
        sinks::write(self, out, delimiter)
    }

    /// Exhaust, writing each element on its own line.
    ///
    /// # Errors
    ///
    /// Fails on the first write error.
    fn print<W: Write>(self, out: W) -> Result<()>
    where
        Self::Item: Display,
    {
        sinks::print(self, out)
    }
}

impl<S: DataStream> DataStreamExt for S {}
