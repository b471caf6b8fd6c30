//! Directory walk source.

use crate::pipe::Flow;
use crate::stream::DataStream;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A stream of regular-file paths under a directory.
///
/// Yields regular files only; directories, symlinks to non-files, and special
/// files are skipped silently. A symlink pointing at a regular file is
/// yielded. In recursive mode subdirectories are descended into as they are
/// encountered; symlinked directories are not followed.
///
/// The traversal order is whatever the filesystem reports. No sort is
/// imposed, so two walks of the same tree may disagree across platforms.
///
/// # Example
/// ```no_run
/// use pullflow::{from_dir, DataStreamExt};
///
/// let paths = from_dir("logs", true)?.collect();
/// # anyhow::Result::<()>::Ok(())
/// ```
pub struct DirStream {
    stack: Vec<fs::ReadDir>,
    recursive: bool,
}

impl DirStream {
    /// Open a directory walk rooted at `path`.
    ///
    /// # Errors
    ///
    /// Fails immediately if `path` does not exist or cannot be opened as a
    /// directory.
    pub fn new(path: impl AsRef<Path>, recursive: bool) -> Result<Self> {
        let path = path.as_ref();
        let root = fs::read_dir(path)
            .with_context(|| format!("open directory {}", path.display()))?;
        Ok(Self {
            stack: vec![root],
            recursive,
        })
    }
}

impl DataStream for DirStream {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.stack.last_mut() {
                Some(dir) => dir.next(),
                None => return None,
            };
            match entry {
                None => {
                    self.stack.pop();
                }
                Some(Err(e)) => {
                    debug!("skipping unreadable directory entry: {e}");
                }
                Some(Ok(entry)) => {
                    let path = entry.path();
                    let file_type = match entry.file_type() {
                        Ok(t) => t,
                        Err(e) => {
                            debug!("skipping {}: {e}", path.display());
                            continue;
                        }
                    };
                    if file_type.is_dir() {
                        if self.recursive {
                            match fs::read_dir(&path) {
                                Ok(sub) => self.stack.push(sub),
                                Err(e) => {
                                    debug!("skipping unreadable directory {}: {e}", path.display())
                                }
                            }
                        }
                        continue;
                    }
                    // metadata() follows symlinks, so a link to a regular
                    // file counts as one
                    match fs::metadata(&path) {
                        Ok(meta) if meta.is_file() => return Some(path),
                        _ => continue,
                    }
                }
            }
        }
    }

    fn is_end(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Create a directory source, piped-composition ready.
///
/// # Errors
///
/// Fails if `path` does not exist or cannot be opened as a directory.
pub fn from_dir(path: impl AsRef<Path>, recursive: bool) -> Result<Flow<DirStream>> {
    Ok(Flow(DirStream::new(path, recursive)?))
}
