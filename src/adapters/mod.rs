//! Adapter stages: each consumes an upstream stream and produces a stream.
//!
//! Lazy adapters ([`FilterStream`], [`MapStream`], [`DropNoneStream`],
//! [`SplitStream`], the left side of the joins) advance their upstream only
//! on demand. Eager adapters ([`aggregate_by_key`], [`split_result`], the
//! right side of the joins) consume their input fully at construction, then
//! hold the materialized data; they still expose the stream contract so they
//! compose uniformly.
//!
//! Every adapter takes exclusive ownership of its upstream stream(s).

pub mod aggregate;
pub mod drop_none;
pub mod filter;
pub mod join;
pub mod map;
pub mod partition;
pub mod split;

pub use aggregate::aggregate_by_key;
pub use drop_none::DropNoneStream;
pub use filter::FilterStream;
pub use join::{JoinByKeyStream, JoinStream};
pub use map::MapStream;
pub use partition::{split_result, Partitioned};
pub use split::SplitStream;
