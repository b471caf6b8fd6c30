//! Filesystem sources.
//!
//! Two collaborators feed pipelines from disk:
//!
//! - [`DirStream`] / [`from_dir`] — walk a directory (flat or recursive) and
//!   yield the paths of regular files.
//! - [`FileLineStream`] — open each path from an upstream stream and yield its
//!   non-empty lines, files concatenated in path order.
//!
//! Both follow the same propagation policy: construction errors surface
//! immediately, per-entry I/O errors are demoted to silent skips (reported at
//! `debug` level) so the stream stays live.

pub mod dir;
pub mod lines;

pub use dir::{from_dir, DirStream};
pub use lines::FileLineStream;
