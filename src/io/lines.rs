//! Line-by-line file reader over a stream of paths.

use crate::stream::DataStream;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::PathBuf;
use tracing::debug;

/// Yields each non-empty line of every file named by the upstream path
/// stream, in path order, files concatenated.
///
/// Files are opened lazily: a file is opened only when the previous one is
/// exhausted, and its handle is dropped as soon as its last line has been
/// read. Empty lines are not emitted; no separator element is introduced
/// between files.
///
/// A path whose file cannot be opened is skipped and iteration continues with
/// the next path. A read error mid-file abandons the rest of that file the
/// same way.
pub struct FileLineStream<S> {
    paths: S,
    current: Option<Lines<BufReader<File>>>,
}

impl<S> FileLineStream<S>
where
    S: DataStream<Item = PathBuf>,
{
    pub fn new(paths: S) -> Self {
        Self {
            paths,
            current: None,
        }
    }
}

impl<S> DataStream for FileLineStream<S>
where
    S: DataStream<Item = PathBuf>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(lines) = self.current.as_mut() {
                match lines.next() {
                    Some(Ok(line)) if line.is_empty() => continue,
                    Some(Ok(line)) => return Some(line),
                    Some(Err(e)) => {
                        debug!("skipping rest of file after read error: {e}");
                        self.current = None;
                    }
                    None => self.current = None,
                }
            } else {
                let path = self.paths.next()?;
                match File::open(&path) {
                    Ok(f) => self.current = Some(BufReader::new(f).lines()),
                    Err(e) => debug!("skipping unreadable file {}: {e}", path.display()),
                }
            }
        }
    }

    fn is_end(&self) -> bool {
        self.current.is_none() && self.paths.is_end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::VecStream;
    use anyhow::Result;
    use std::fs;
    use tempfile::TempDir;

    fn drain<S: DataStream>(mut s: S) -> Vec<S::Item> {
        let mut out = Vec::new();
        while let Some(item) = s.next() {
            out.push(item);
        }
        out
    }

    #[test]
    fn concatenates_lines_across_files() -> Result<()> {
        let dir = TempDir::new()?;
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "line1\nline2\nline3")?;
        fs::write(&b, "row1\nrow2")?;

        let lines = FileLineStream::new(VecStream::new(vec![a, b]));
        assert_eq!(drain(lines), vec!["line1", "line2", "line3", "row1", "row2"]);
        Ok(())
    }

    #[test]
    fn empty_lines_are_skipped() -> Result<()> {
        let dir = TempDir::new()?;
        let a = dir.path().join("a.txt");
        fs::write(&a, "\nfirst\n\n\nsecond\n")?;

        let lines = FileLineStream::new(VecStream::new(vec![a]));
        assert_eq!(drain(lines), vec!["first", "second"]);
        Ok(())
    }

    #[test]
    fn unopenable_files_are_skipped() -> Result<()> {
        let dir = TempDir::new()?;
        let a = dir.path().join("a.txt");
        let missing = dir.path().join("missing.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "one")?;
        fs::write(&b, "two")?;

        let lines = FileLineStream::new(VecStream::new(vec![a, missing, b]));
        assert_eq!(drain(lines), vec!["one", "two"]);
        Ok(())
    }

    #[test]
    fn empty_path_stream_ends_immediately() {
        let mut lines = FileLineStream::new(VecStream::new(vec![]));
        assert_eq!(lines.next(), None);
        assert!(lines.is_end());
    }
}
