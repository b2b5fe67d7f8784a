pub mod err;
pub mod scan;

pub use err::{Error, Result};
pub use scan::{count_matching_lines, scan_file, Keyword, ScanReport};
