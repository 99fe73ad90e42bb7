use crate::error::{Error, Result};
use crate::nec::types::{Point2D, Projection, RawSegment};
use std::io::BufRead;
use std::iter::FusedIterator;
use tracing::trace;

/// Number of whitespace separated elements in a GW line
pub const GW_ELEMENT_COUNT: usize = 10;

// 0  1   2  3   4   5   6   7   8   9
// GW ITG NS XW1 YW1 ZW1 XW2 YW2 ZW2 RAD
const GW_FIELD_NAMES: [&str; GW_ELEMENT_COUNT] = [
    "GW", "ITG", "NS", "XW1", "YW1", "ZW1", "XW2", "YW2", "ZW2", "RAD",
];

const FIRST_END_OFFSET: usize = 3;
const SECOND_END_OFFSET: usize = 6;

/// Parse a single NEC line.
///
/// Returns `Ok(None)` for anything that is not a GW record: lines without the
/// `GW` prefix and `GW` lines that do not split into exactly ten elements.
/// Only the four coordinates selected by `projection` are parsed; a bad value
/// in one of them is an error.
pub fn parse_gw_line(
    line: &str,
    line_number: usize,
    projection: Projection,
) -> Result<Option<RawSegment>> {
    if !line.starts_with("GW") {
        return Ok(None);
    }

    let elements: Vec<&str> = line.split_whitespace().collect();
    if elements.len() != GW_ELEMENT_COUNT {
        trace!(
            line = line_number,
            elements = elements.len(),
            "Skipping GW line with unexpected element count"
        );
        return Ok(None);
    }

    let (x_index, y_index) = projection.indices();
    let field = |index: usize| parse_coordinate(&elements, index, line_number);

    let from = Point2D::new(
        field(FIRST_END_OFFSET + x_index)?,
        field(FIRST_END_OFFSET + y_index)?,
    );
    let to = Point2D::new(
        field(SECOND_END_OFFSET + x_index)?,
        field(SECOND_END_OFFSET + y_index)?,
    );

    Ok(Some(RawSegment {
        line: line_number,
        from,
        to,
    }))
}

fn parse_coordinate(elements: &[&str], index: usize, line_number: usize) -> Result<f64> {
    let token = elements[index];
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::Parse {
            line: line_number,
            field: GW_FIELD_NAMES[index],
            token: token.to_string(),
        }),
    }
}

/// Lazy iterator over the GW records of a NEC stream.
///
/// Lines are read as raw bytes; only lines starting with `GW` get decoded, so
/// non-UTF-8 comment cards never abort a conversion. The iterator stops after
/// the first error.
pub struct GwRecords<R> {
    reader: R,
    projection: Projection,
    line_number: usize,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: BufRead> GwRecords<R> {
    pub fn new(reader: R, projection: Projection) -> Self {
        Self {
            reader,
            projection,
            line_number: 0,
            buf: Vec::new(),
            finished: false,
        }
    }

    /// Number of input lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for GwRecords<R> {
    type Item = Result<RawSegment>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.finished = true;
                    return None;
                }
                Ok(_) => self.line_number += 1,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }

            if !self.buf.starts_with(b"GW") {
                continue;
            }

            let line = String::from_utf8_lossy(&self.buf);
            match parse_gw_line(&line, self.line_number, self.projection) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => {}
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

impl<R: BufRead> FusedIterator for GwRecords<R> {}

/// Iterate over the GW records of `reader` for the given projection
pub fn gw_records<R: BufRead>(reader: R, projection: Projection) -> GwRecords<R> {
    GwRecords::new(reader, projection)
}
