//! Terminal stages. Each sink exhausts its stream and produces a value or a
//! side effect; the stream is consumed by ownership transfer.

use crate::stream::DataStream;
use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::Write;

/// Exhaust the stream into a vector, preserving order.
pub fn collect<S: DataStream>(mut stream: S) -> Vec<S::Item> {
    let mut out = Vec::new();
    while let Some(item) = stream.next() {
        out.push(item);
    }
    out
}

/// Exhaust the stream, writing each element followed by `delimiter`. An
/// `n`-element stream produces `n` delimiters, so output ends with a trailing
/// one.
///
/// # Errors
///
/// Fails on the first write error.
pub fn write<S, W>(mut stream: S, mut out: W, delimiter: char) -> Result<()>
where
    S: DataStream,
    S::Item: Display,
    W: Write,
{
    while let Some(item) = stream.next() {
        write!(out, "{item}{delimiter}").context("write element")?;
    }
    Ok(())
}

/// Exhaust the stream, writing each element on its own line.
///
/// # Errors
///
/// Fails on the first write error.
pub fn print<S, W>(mut stream: S, mut out: W) -> Result<()>
where
    S: DataStream,
    S::Item: Display,
    W: Write,
{
    while let Some(item) = stream.next() {
        writeln!(out, "{item}").context("write element")?;
    }
    Ok(())
}
