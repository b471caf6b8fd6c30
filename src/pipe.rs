//! Pipe composition: `source | stage | stage | sink`.
//!
//! [`Flow`] wraps any [`DataStream`] and carries the `|` operator. A stage is
//! an ordinary value implementing [`Stage`]; applying one transfers ownership
//! of the upstream into it and yields either another [`Flow`] (adapters) or a
//! terminal value (sinks). The operator is left-associative, so a pipeline
//! reads as a linear program:
//!
//! ```
//! use pullflow::{from_vec, Collect, Filter, Map};
//!
//! let out = from_vec(vec![1, 2, 3, 4, 5, 6, 7, 8])
//!     | Filter(|x: &i32| x % 2 == 0)
//!     | Map(|x: i32| x * x)
//!     | Collect;
//! assert_eq!(out, vec![4, 16, 36, 64]);
//! ```
//!
//! Applying a stage to a stream whose element type it cannot consume is a
//! compile error, not a runtime failure.
//!
//! [`Flow`] itself implements [`DataStream`], so the operator surface and the
//! method surface ([`DataStreamExt`](crate::DataStreamExt)) mix freely.

use crate::adapters::{
    aggregate_by_key, split_result, DropNoneStream, FilterStream, JoinByKeyStream, JoinStream,
    MapStream, Partitioned, SplitStream,
};
use crate::io::FileLineStream;
use crate::sinks;
use crate::sources::VecStream;
use crate::stream::{DataStream, KV};
use anyhow::Result;
use std::fmt::Display;
use std::hash::Hash;
use std::io::Write;
use std::ops::BitOr;
use std::path::PathBuf;

/// A pipeable stream. Sources return their stream wrapped in `Flow`; adapters
/// rewrap their output, so composition keeps flowing left to right.
pub struct Flow<S>(pub S);

impl<S: DataStream> DataStream for Flow<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.0.next()
    }

    fn is_end(&self) -> bool {
        self.0.is_end()
    }
}

/// A pipeline stage: consumes an owned upstream stream, produces a stream or
/// a terminal value.
pub trait Stage<S> {
    type Output;

    fn apply(self, upstream: S) -> Self::Output;
}

impl<S: DataStream, G: Stage<S>> BitOr<G> for Flow<S> {
    type Output = G::Output;

    fn bitor(self, stage: G) -> G::Output {
        stage.apply(self.0)
    }
}

/// Filter stage; see [`FilterStream`].
pub struct Filter<P>(pub P);

impl<S, P> Stage<S> for Filter<P>
where
    S: DataStream,
    P: FnMut(&S::Item) -> bool,
{
    type Output = Flow<FilterStream<S, P>>;

    fn apply(self, upstream: S) -> Self::Output {
        Flow(FilterStream::new(upstream, self.0))
    }
}

/// Transform stage; see [`MapStream`].
pub struct Map<F>(pub F);

impl<S, F, U> Stage<S> for Map<F>
where
    S: DataStream,
    F: FnMut(S::Item) -> U,
{
    type Output = Flow<MapStream<S, F>>;

    fn apply(self, upstream: S) -> Self::Output {
        Flow(MapStream::new(upstream, self.0))
    }
}

/// Option-stripping stage; see [`DropNoneStream`].
pub struct DropNone;

impl<S, T> Stage<S> for DropNone
where
    S: DataStream<Item = Option<T>>,
{
    type Output = Flow<DropNoneStream<S>>;

    fn apply(self, upstream: S) -> Self::Output {
        Flow(DropNoneStream::new(upstream))
    }
}

/// Tokenizer stage over a delimiter character set; see [`SplitStream`].
pub struct Split<'a>(pub &'a str);

impl<S> Stage<S> for Split<'_>
where
    S: DataStream,
    S::Item: AsRef<str>,
{
    type Output = Flow<SplitStream<S>>;

    fn apply(self, upstream: S) -> Self::Output {
        Flow(SplitStream::new(upstream, self.0))
    }
}

/// Keyed aggregation stage: initial accumulator, in-place accumulate
/// function, key function. Eager; see
/// [`aggregate_by_key`](crate::adapters::aggregate_by_key).
pub struct AggregateByKey<A, G, H>(pub A, pub G, pub H);

impl<S, K, A, G, H> Stage<S> for AggregateByKey<A, G, H>
where
    S: DataStream,
    K: Eq + Hash + Clone,
    A: Clone,
    G: FnMut(&S::Item, &mut A),
    H: FnMut(&S::Item) -> K,
{
    type Output = Flow<VecStream<(K, A)>>;

    fn apply(self, upstream: S) -> Self::Output {
        Flow(aggregate_by_key(upstream, self.0, self.1, self.2))
    }
}

/// Partition-by-result stage; see
/// [`split_result`](crate::adapters::split_result). Terminal fan-out: yields
/// the two buffered streams rather than a single pipeable one.
pub struct SplitResult;

impl<S, T, E> Stage<S> for SplitResult
where
    S: DataStream<Item = Result<T, E>>,
{
    type Output = Partitioned<T, E>;

    fn apply(self, upstream: S) -> Self::Output {
        split_result(upstream)
    }
}

/// Key-value join stage holding the right stream; see [`JoinStream`].
pub struct Join<R>(pub R);

impl<S, R, K, Lv, Rv> Stage<S> for Join<R>
where
    S: DataStream<Item = KV<K, Lv>>,
    R: DataStream<Item = KV<K, Rv>>,
    K: Eq + Hash + Clone,
    Lv: Clone,
    Rv: Clone,
{
    type Output = Flow<JoinStream<S, K, Lv, Rv>>;

    fn apply(self, upstream: S) -> Self::Output {
        Flow(JoinStream::new(upstream, self.0))
    }
}

/// Key-function join stage: right stream, left key function, right key
/// function; see [`JoinByKeyStream`].
pub struct JoinByKey<R, LK, RK>(pub R, pub LK, pub RK);

impl<S, R, K, LK, RK> Stage<S> for JoinByKey<R, LK, RK>
where
    S: DataStream,
    S::Item: Clone,
    R: DataStream,
    R::Item: Clone,
    K: Eq + Hash + Clone,
    LK: FnMut(&S::Item) -> K,
    RK: FnMut(&R::Item) -> K,
{
    type Output = Flow<JoinByKeyStream<S, R::Item, K, LK>>;

    fn apply(self, upstream: S) -> Self::Output {
        Flow(JoinByKeyStream::new(upstream, self.0, self.1, self.2))
    }
}

/// File-content stage over a path stream; see [`FileLineStream`].
pub struct OpenFiles;

impl<S> Stage<S> for OpenFiles
where
    S: DataStream<Item = PathBuf>,
{
    type Output = Flow<FileLineStream<S>>;

    fn apply(self, upstream: S) -> Self::Output {
        Flow(FileLineStream::new(upstream))
    }
}

/// Collect sink; see [`sinks::collect`].
pub struct Collect;

impl<S: DataStream> Stage<S> for Collect {
    type Output = Vec<S::Item>;

    fn apply(self, upstream: S) -> Self::Output {
        sinks::collect(upstream)
    }
}

/// Delimited write sink; see [`sinks::write`].
pub struct WriteTo<W>(pub W, pub char);

impl<S, W> Stage<S> for WriteTo<W>
where
    S: DataStream,
    S::Item: Display,
    W: Write,
{
    type Output = Result<()>;

    fn apply(self, upstream: S) -> Self::Output {
        sinks::write(upstream, self.0, self.1)
    }
}

/// Line-print sink; see [`sinks::print`].
pub struct Print<W>(pub W);

impl<S, W> Stage<S> for Print<W>
where
    S: DataStream,
    S::Item: Display,
    W: Write,
{
    type Output = Result<()>;

    fn apply(self, upstream: S) -> Self::Output {
        sinks::print(upstream, self.0)
    }
}
