//! In-memory sources.
//!
//! [`from_vec`] and [`from_iter`] wrap an ordered sequence; [`from_readers`]
//! flattens a collection of text buffers into one string element each. All
//! three return a [`Flow`] so the result can be piped into stages or chained
//! through [`DataStreamExt`](crate::DataStreamExt) methods.

use crate::pipe::Flow;
use crate::stream::DataStream;
use anyhow::{Context, Result};
use std::io::Read;

/// A stream over an owned, in-memory sequence. Yields elements in sequence
/// order and ends when the sequence is consumed.
pub struct VecStream<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> VecStream<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            items: data.into_iter(),
        }
    }
}

impl<T> DataStream for VecStream<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.next()
    }

    fn is_end(&self) -> bool {
        self.items.as_slice().is_empty()
    }
}

/// Create a stream from an owned vector.
///
/// # Example
/// ```
/// use pullflow::{from_vec, DataStreamExt};
///
/// let out = from_vec(vec![1, 2, 3]).collect();
/// assert_eq!(out, vec![1, 2, 3]);
/// ```
pub fn from_vec<T>(data: Vec<T>) -> Flow<VecStream<T>> {
    Flow(VecStream::new(data))
}

/// Create a stream from any owned iterator (collects into a vector first).
pub fn from_iter<T, I>(iter: I) -> Flow<VecStream<T>>
where
    I: IntoIterator<Item = T>,
{
    from_vec(iter.into_iter().collect())
}

/// Create a string stream from a collection of text buffers, one element per
/// buffer holding its full textual content.
///
/// # Errors
///
/// Fails if any buffer cannot be read to a string.
pub fn from_readers<R: Read>(readers: Vec<R>) -> Result<Flow<VecStream<String>>> {
    let mut contents = Vec::with_capacity(readers.len());
    for (i, mut reader) in readers.into_iter().enumerate() {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .with_context(|| format!("read text buffer #{i}"))?;
        contents.push(text);
    }
    Ok(from_vec(contents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_stream_yields_in_order_and_fuses() {
        let mut s = VecStream::new(vec!["a", "b"]);
        assert!(!s.is_end());
        assert_eq!(s.next(), Some("a"));
        assert_eq!(s.next(), Some("b"));
        assert!(s.is_end());
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
        assert!(s.is_end());
    }

    #[test]
    fn empty_vec_stream_starts_ended() {
        let s = VecStream::<u8>::new(vec![]);
        assert!(s.is_end());
    }

    #[test]
    fn from_readers_flattens_each_buffer() -> Result<()> {
        use std::io::Cursor;
        let buffers = vec![Cursor::new("1,2,3"), Cursor::new("4;5")];
        let mut s = from_readers(buffers)?;
        assert_eq!(s.next(), Some("1,2,3".to_string()));
        assert_eq!(s.next(), Some("4;5".to_string()));
        assert_eq!(s.next(), None);
        Ok(())
    }
}
