//! Text histogram artifact.
//!
//! One line of ASCII decimal counts, bin 0 first, each count followed by a
//! single space and no trailing newline: `0 9 0 0 0 `.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use pixel_ops::Histogram;

/// Write the counts of `histogram` to `writer`.
pub fn encode<W: Write>(histogram: &Histogram, mut writer: W) -> io::Result<()> {
    for count in histogram.counts() {
        write!(writer, "{} ", count)?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write `histogram` to it.
pub fn write_file(path: &Path, histogram: &Histogram) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    encode(histogram, &mut writer)?;
    writer.flush()
}
