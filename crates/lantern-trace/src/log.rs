//! The file-backed [`TraceLog`].

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use lantern_core::{CallSite, TraceSink};

use crate::ring::TraceRing;

/// A [`TraceRing`] bound to a log file path.
///
/// Recording only touches the in-memory ring; [`flush`](TraceLog::flush)
/// rewrites the file from scratch with the ring's current contents.
/// Flush on demand — typically from a panic hook or at the end of a
/// batch — rather than per record.
pub struct TraceLog {
    path: PathBuf,
    ring: TraceRing,
}

impl TraceLog {
    /// Bind a ring of [`DEFAULT_DEPTH`](crate::DEFAULT_DEPTH) entries to
    /// `path`.
    ///
    /// The file is created (or truncated) eagerly so an unwritable path
    /// fails here rather than at the first flush.
    pub fn create<P: Into<PathBuf>>(path: P) -> io::Result<Self> {
        Self::with_depth(path, crate::DEFAULT_DEPTH)
    }

    /// Bind a ring of `depth` entries to `path`.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is zero.
    pub fn with_depth<P: Into<PathBuf>>(path: P, depth: usize) -> io::Result<Self> {
        let path = path.into();
        File::create(&path)?;
        Ok(Self {
            path,
            ring: TraceRing::with_depth(depth),
        })
    }

    /// The log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying ring.
    pub fn ring(&self) -> &TraceRing {
        &self.ring
    }

    /// The underlying ring, mutably.
    pub fn ring_mut(&mut self) -> &mut TraceRing {
        &mut self.ring
    }

    /// Rewrite the log file with the ring's current contents.
    pub fn flush(&self) -> io::Result<()> {
        let mut file = BufWriter::new(File::create(&self.path)?);
        self.ring.write_to(&mut file)?;
        file.flush()
    }
}

impl TraceSink for TraceLog {
    fn record(&mut self, site: CallSite) {
        self.ring.record(site);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_test_utils::site;

    fn temp_log(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("lantern-trace-{}-{name}.log", std::process::id()));
        path
    }

    #[test]
    fn create_touches_the_file() {
        let path = temp_log("create");
        let _log = TraceLog::create(&path).unwrap();
        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn create_fails_on_unwritable_path() {
        let result = TraceLog::create("/definitely/missing/dir/trace.log");
        assert!(result.is_err());
    }

    #[test]
    fn flush_rewrites_the_file_each_time() {
        let path = temp_log("flush");
        let mut log = TraceLog::create(&path).unwrap();

        log.record(site("first"));
        log.flush().unwrap();
        let once = std::fs::read_to_string(&path).unwrap();
        assert!(once.starts_with("first, line: 1"));

        log.record(site("second"));
        log.flush().unwrap();
        let twice = std::fs::read_to_string(&path).unwrap();
        assert!(twice.starts_with("second, line: 1"));
        // Rewritten, not appended: exactly one summary block.
        assert_eq!(twice.matches("1x first").count(), 1);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn recording_alone_leaves_the_file_empty() {
        let path = temp_log("lazy");
        let mut log = TraceLog::create(&path).unwrap();
        log.record(site("quiet"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
        std::fs::remove_file(&path).unwrap();
    }
}
