//! Delimiter tokenizer.

use crate::stream::DataStream;
use std::collections::HashSet;

/// Splits a stream of text elements into maximal non-empty runs of
/// non-delimiter characters.
///
/// Delimiters separate tokens and are discarded; consecutive delimiters
/// produce no empty tokens. Tokens never cross an upstream element boundary:
/// when the current element is exhausted, a token in progress is emitted
/// before the next element is consumed. Each input element (a file line, say)
/// is therefore its own record even when it neither starts nor ends with a
/// delimiter.
///
/// Lazy: one token per pull, scanning at most to the end of the token.
///
/// # Example
/// ```
/// use pullflow::{from_vec, DataStreamExt};
///
/// let out = from_vec(vec!["a,b".to_string(), "c".to_string()])
///     .split(",;")
///     .collect();
/// assert_eq!(out, vec!["a", "b", "c"]);
/// ```
pub struct SplitStream<S> {
    upstream: S,
    delimiters: HashSet<char>,
    current: Vec<char>,
    pos: usize,
    token: String,
}

impl<S> SplitStream<S>
where
    S: DataStream,
    S::Item: AsRef<str>,
{
    /// `delimiters` is read as a set of characters.
    pub fn new(upstream: S, delimiters: &str) -> Self {
        Self {
            upstream,
            delimiters: delimiters.chars().collect(),
            current: Vec::new(),
            pos: 0,
            token: String::new(),
        }
    }
}

impl<S> DataStream for SplitStream<S>
where
    S: DataStream,
    S::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            while self.pos < self.current.len() {
                let c = self.current[self.pos];
                self.pos += 1;
                if self.delimiters.contains(&c) {
                    if !self.token.is_empty() {
                        return Some(std::mem::take(&mut self.token));
                    }
                } else {
                    self.token.push(c);
                }
            }
            if !self.current.is_empty() {
                // element exhausted; a token in progress stops here
                self.current.clear();
                self.pos = 0;
                if !self.token.is_empty() {
                    return Some(std::mem::take(&mut self.token));
                }
            }
            match self.upstream.next() {
                Some(element) => {
                    self.current = element.as_ref().chars().collect();
                    self.pos = 0;
                }
                None => return None,
            }
        }
    }

    fn is_end(&self) -> bool {
        self.upstream.is_end() && self.pos >= self.current.len() && self.token.is_empty()
    }
}
