use crate::error::{Error, Result};
use crate::nec::bounds::BoundingBox;
use crate::nec::parser::gw_records;
use crate::nec::types::{ConvertOptions, RawSegment, Segment};
use std::io::BufRead;
use tracing::debug;

/// Maps raw GW records into scaled output segments
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    options: ConvertOptions,
}

impl Projector {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Scale both endpoints of `raw`; fails when a product overflows
    pub fn project(&self, raw: &RawSegment) -> Result<Segment> {
        let scale = self.options.scale;
        let segment = Segment::new(raw.from.scaled(scale), raw.to.scaled(scale));
        let finite = [segment.from, segment.to]
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite());
        if !finite {
            return Err(Error::Overflow {
                line: raw.line,
                scale,
            });
        }
        Ok(segment)
    }
}

/// Projected segments in input order together with their bounding box
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    segments: Vec<Segment>,
    bounds: BoundingBox,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment and widen the bounding box to cover it
    pub fn push(&mut self, segment: Segment) {
        self.bounds.include_segment(&segment);
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromIterator<Segment> for Drawing {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        let mut drawing = Drawing::new();
        for segment in iter {
            drawing.push(segment);
        }
        drawing
    }
}

/// Read every GW record from `input` into a drawing.
///
/// Fails on a non-finite scale, on the first malformed or overflowing
/// coordinate, on I/O errors, and when the input holds no GW records at all.
pub fn read_drawing<R: BufRead>(input: R, options: &ConvertOptions) -> Result<Drawing> {
    options.validate()?;
    let projector = Projector::new(*options);
    let mut records = gw_records(input, options.projection);
    let mut drawing = Drawing::new();

    for record in records.by_ref() {
        drawing.push(projector.project(&record?)?);
    }

    if drawing.is_empty() {
        return Err(Error::EmptyInput);
    }

    debug!(
        lines = records.lines_read(),
        segments = drawing.len(),
        projection = %options.projection,
        scale = options.scale,
        "Read NEC geometry"
    );

    Ok(drawing)
}
