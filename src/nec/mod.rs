//! NEC to EPS conversion module
//!
//! This module reads the wire geometry (GW) records of a NEC antenna
//! description, projects them onto one of the X-Y, Y-Z or X-Z planes and
//! writes the result as an EPS line drawing.

pub mod bounds;
pub mod eps;
pub mod parser;
pub mod project;
pub mod types;

use crate::error::Result;
use std::io::{BufRead, Write};

// Re-export main public API
pub use bounds::BoundingBox;
pub use eps::{drawing_to_eps, write_eps};
pub use parser::{GwRecords, gw_records, parse_gw_line};
pub use project::{Drawing, Projector, read_drawing};
pub use types::*;

/// Convert NEC text from `input` into an EPS document on `output`.
///
/// The whole input is read before anything is written, so a failed
/// conversion leaves `output` untouched.
pub fn convert<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    options: &ConvertOptions,
) -> Result<Drawing> {
    let drawing = read_drawing(input, options)?;
    write_eps(&drawing, output)?;
    Ok(drawing)
}
