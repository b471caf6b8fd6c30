//! Composable, lazy pull-based data-flow pipelines.
//!
//! A pipeline threads a source through adapter stages to a sink, either with
//! the pipe operator or with method chaining — both surfaces share one set of
//! stream types:
//!
//! ```
//! use pullflow::{from_vec, Collect, DataStreamExt, Filter, Map};
//!
//! // pipe composition
//! let piped = from_vec(vec![1, 2, 3, 4])
//!     | Filter(|x: &i32| x % 2 == 0)
//!     | Map(|x: i32| x * 10)
//!     | Collect;
//!
//! // method chaining
//! let chained = from_vec(vec![1, 2, 3, 4])
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 10)
//!     .collect();
//!
//! assert_eq!(piped, chained);
//! ```
//!
//! Sources: [`from_vec`], [`from_iter`], [`from_readers`], [`from_dir`].
//! Lazy adapters: filter, map, drop-none, split. Eager adapters: aggregate
//! by key, partition by result, the right side of the joins. Sinks: collect,
//! delimited write, line print.
//!
//! Streams are single-pass and own their resources; see
//! [`DataStream`] for the pull contract.

pub mod adapters;
pub mod ext;
pub mod io;
pub mod pipe;
pub mod sinks;
pub mod sources;
pub mod stream;
pub mod testing;

pub use adapters::Partitioned;
pub use ext::DataStreamExt;
pub use io::{from_dir, DirStream, FileLineStream};
pub use pipe::{
    AggregateByKey, Collect, DropNone, Filter, Flow, Join, JoinByKey, Map, OpenFiles, Print,
    Split, SplitResult, Stage, WriteTo,
};
pub use sources::{from_iter, from_readers, from_vec, VecStream};
pub use stream::{DataStream, JoinResult, KV};
