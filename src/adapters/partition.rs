//! Partition-by-result fan-out.

use crate::pipe::Flow;
use crate::sources::VecStream;
use crate::stream::DataStream;

/// The two output streams of [`split_result`]: failures and successes, each
/// fully buffered in upstream encounter order and independently consumable.
pub struct Partitioned<T, E> {
    pub failures: Flow<VecStream<E>>,
    pub successes: Flow<VecStream<T>>,
}

/// Route each element of a fallible stream into one of two streams, both
/// materialized immediately.
///
/// Failed elements are not errors from the library's point of view; they are
/// data carried in the `Err` variant and delivered on the failure stream.
///
/// # Example
/// ```
/// use pullflow::{from_vec, DataStreamExt};
///
/// let parts = from_vec(vec![Ok(1), Err("bad"), Ok(2)]).split_result();
/// assert_eq!(parts.failures.collect(), vec!["bad"]);
/// assert_eq!(parts.successes.collect(), vec![1, 2]);
/// ```
pub fn split_result<S, T, E>(mut upstream: S) -> Partitioned<T, E>
where
    S: DataStream<Item = Result<T, E>>,
{
    let mut failures = Vec::new();
    let mut successes = Vec::new();
    while let Some(item) = upstream.next() {
        match item {
            Ok(value) => successes.push(value),
            Err(error) => failures.push(error),
        }
    }
    Partitioned {
        failures: Flow(VecStream::new(failures)),
        successes: Flow(VecStream::new(successes)),
    }
}
