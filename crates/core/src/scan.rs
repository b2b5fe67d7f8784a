use crate::err::{Error, Result};
use memchr::memmem;
use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::Path,
    time::{Duration, Instant},
};

/// A literal, case-sensitive keyword compiled for repeated containment
/// tests. An empty keyword matches every line.
pub struct Keyword {
    finder: memmem::Finder<'static>,
}

impl Keyword {
    pub fn new(keyword: &str) -> Self {
        Self {
            finder: memmem::Finder::new(keyword.as_bytes()).into_owned(),
        }
    }

    /// Whether the keyword occurs anywhere within `line`.
    #[inline]
    pub fn matches(&self, line: &[u8]) -> bool {
        self.finder.find(line).is_some()
    }
}

/// The outcome of a completed scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanReport {
    /// Number of lines that contained the keyword at least once.
    pub matching_lines: u64,
    /// Wall-clock duration of the open-and-scan loop, excluding any
    /// reporting done by the caller.
    pub elapsed: Duration,
}

/// Opens `path` and counts the lines containing `keyword`.
///
/// The timer starts before the file is opened and stops once the last
/// line has been tested. A missing file is reported as [Error::NotFound]
/// so callers can recover it separately from other I/O failures.
pub fn scan_file(path: &Path, keyword: &Keyword) -> Result<ScanReport> {
    let start = Instant::now();

    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io(err),
    })?;

    let matching_lines = count_matching_lines(BufReader::new(file), keyword)?;

    Ok(ScanReport {
        matching_lines,
        elapsed: start.elapsed(),
    })
}

/// Counts the lines of `reader` that contain the keyword. A line is any
/// run of bytes up to and including a newline, or up to end of input; a
/// line with multiple occurrences still counts once.
pub fn count_matching_lines<R: BufRead>(mut reader: R, keyword: &Keyword) -> Result<u64> {
    let mut line = Vec::new();
    let mut matched = 0;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if keyword.matches(&line) {
            matched += 1;
        }
    }

    Ok(matched)
}
