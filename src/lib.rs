//! # nec2eps
//!
//! A Rust library for drawing NEC antenna geometry as Encapsulated PostScript.
//!
//! ## Features
//!
//! - **GW records**: Read the wire geometry cards of a NEC input deck
//! - **Projection**: Flatten the wires onto the X-Y, Y-Z or X-Z plane with a scale factor
//! - **EPS output**: Emit a single page line drawing with a tight bounding box
//!
//! ## Example
//!
//! ```rust,ignore
//! use nec2eps::nec::{ConvertOptions, Projection, convert};
//! use std::io::BufReader;
//!
//! let input = BufReader::new(std::fs::File::open("dipole.nec").unwrap());
//! let mut output = std::fs::File::create("dipole.eps").unwrap();
//! let options = ConvertOptions::new(Projection::Xz).with_scale(100.0);
//! convert(input, &mut output, &options).unwrap();
//! ```

pub mod error;
pub mod nec;

// Re-export commonly used items
pub use error::{Error, Result};
pub use nec::{ConvertOptions, Drawing, Projection, convert, drawing_to_eps, read_drawing};
