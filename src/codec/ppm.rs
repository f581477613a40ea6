//! Binary PPM (`P6`, maxval 255) raster codec.
//!
//! Layout:
//!
//! ```text
//! P6 <ws> width <ws> height <ws> 255 <single ws byte> <width*height RGB records>
//! ```
//!
//! `<ws>` is any run of ASCII whitespace. As in netpbm, a `#` at the start of
//! a header token begins a comment that runs to the end of the line. The
//! body is row-major `R G B` bytes with no padding. Bytes after the last
//! pixel record are ignored.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use pixel_ops::{BufferError, ImageBuffer};

/// Magic token for binary RGB rasters.
pub const MAGIC: &[u8] = b"P6";

/// The only supported maximum channel value.
pub const MAXVAL: u32 = 255;

/// Header field named in decode errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Width,
    Height,
    Maxval,
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeaderField::Width => "width",
            HeaderField::Height => "height",
            HeaderField::Maxval => "maxval",
        };
        f.write_str(name)
    }
}

/// Error from [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("not a binary RGB raster (expected magic \"P6\")")]
    BadMagic,

    #[error("header ended before {0}")]
    MissingToken(HeaderField),

    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: HeaderField, value: String },

    #[error("unsupported maxval {0:?} (only 255 is supported)")]
    UnsupportedMaxval(String),

    #[error(transparent)]
    Buffer(#[from] BufferError),
}

impl DecodeError {
    /// True when decoding failed for lack of memory rather than bad input.
    pub fn is_resource(&self) -> bool {
        matches!(self, DecodeError::Buffer(e) if e.is_resource())
    }
}

/// Decode a complete binary PPM file held in memory.
pub fn decode(data: &[u8]) -> Result<ImageBuffer, DecodeError> {
    let mut header = HeaderReader::new(data);

    match header.token() {
        Some(token) if token == MAGIC => {}
        _ => return Err(DecodeError::BadMagic),
    }

    let width = header.dimension(HeaderField::Width)?;
    let height = header.dimension(HeaderField::Height)?;

    let maxval = header
        .token()
        .ok_or(DecodeError::MissingToken(HeaderField::Maxval))?;
    if maxval != MAXVAL.to_string().as_bytes() {
        return Err(DecodeError::UnsupportedMaxval(
            String::from_utf8_lossy(maxval).into_owned(),
        ));
    }

    let body = header.body();
    Ok(ImageBuffer::from_raw(width, height, body)?)
}

/// Encode `image` as a binary PPM into `writer`.
///
/// The header is always `P6\n<width> <height>\n255\n`.
pub fn encode<W: Write>(image: &ImageBuffer, mut writer: W) -> io::Result<()> {
    write!(writer, "P6\n{} {}\n{}\n", image.width(), image.height(), MAXVAL)?;

    let mut row = Vec::with_capacity(image.width() * 3);
    for y in 0..image.height() {
        row.clear();
        for px in image.row(y) {
            row.extend_from_slice(&px.to_bytes());
        }
        writer.write_all(&row)?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write `image` to it.
pub fn write_file(path: &Path, image: &ImageBuffer) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    encode(image, &mut writer)?;
    writer.flush()
}

/// Cursor over the ASCII header.
struct HeaderReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn skip_separators(&mut self) {
        loop {
            while self.pos < self.data.len() && self.data[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < self.data.len() && self.data[self.pos] == b'#' {
                while self.pos < self.data.len() && self.data[self.pos] != b'\n' {
                    self.pos += 1;
                }
            } else {
                return;
            }
        }
    }

    /// Next whitespace-delimited token, or `None` at end of input.
    fn token(&mut self) -> Option<&'a [u8]> {
        self.skip_separators();
        let data = self.data;
        let start = self.pos;
        while self.pos < data.len() && !data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        (self.pos > start).then(|| &data[start..self.pos])
    }

    fn dimension(&mut self, field: HeaderField) -> Result<usize, DecodeError> {
        let token = self.token().ok_or(DecodeError::MissingToken(field))?;
        std::str::from_utf8(token)
            .ok()
            .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .ok_or_else(|| DecodeError::InvalidNumber {
                field,
                value: String::from_utf8_lossy(token).into_owned(),
            })
    }

    /// Everything after the single whitespace byte that ends the header.
    fn body(self) -> &'a [u8] {
        // `token()` stops on whitespace or end of input, so at most one byte
        // needs skipping here.
        let start = (self.pos + 1).min(self.data.len());
        &self.data[start..]
    }
}
