use crate::error::{Error, Result};
use std::fmt;

/// 2D point in output space (projected and scaled)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both coordinates by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// One projected wire, drawn as a single stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point2D,
    pub to: Point2D,
}

impl Segment {
    pub fn new(from: Point2D, to: Point2D) -> Self {
        Self { from, to }
    }
}

/// GW record reduced to the two coordinates of each endpoint the active
/// projection needs, in input units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSegment {
    /// 1-based line number in the NEC input
    pub line: usize,
    pub from: Point2D,
    pub to: Point2D,
}

/// Orthogonal plane the 3D geometry is projected onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Xy,
    Yz,
    Xz,
}

impl Projection {
    /// Resolve the projection from three mutually exclusive switches.
    /// Exactly one of them must be set.
    pub fn from_flags(xy: bool, yz: bool, xz: bool) -> Result<Self> {
        match (xy, yz, xz) {
            (true, false, false) => Ok(Projection::Xy),
            (false, true, false) => Ok(Projection::Yz),
            (false, false, true) => Ok(Projection::Xz),
            (false, false, false) => Err(Error::Configuration(
                "no projection selected, use one of --xy, --yz or --xz".to_string(),
            )),
            _ => Err(Error::Configuration("more than one projection selected".to_string())),
        }
    }

    /// Axis indices (0 = X, 1 = Y, 2 = Z) used as output x and y
    pub fn indices(&self) -> (usize, usize) {
        match self {
            Projection::Xy => (0, 1),
            Projection::Yz => (1, 2),
            Projection::Xz => (0, 2),
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Projection::Xy => "x-y",
            Projection::Yz => "y-z",
            Projection::Xz => "x-z",
        };
        f.write_str(name)
    }
}

/// Conversion settings for a single run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertOptions {
    pub projection: Projection,
    /// Output scale factor. Negative flips, zero collapses to the origin.
    pub scale: f64,
}

impl ConvertOptions {
    pub fn new(projection: Projection) -> Self {
        Self {
            projection,
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Reject a scale that would put `inf` or `NaN` into the drawing
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() {
            return Err(Error::Configuration(format!(
                "scale must be a finite number, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_from_single_flag() {
        assert_eq!(Projection::from_flags(true, false, false).unwrap(), Projection::Xy);
        assert_eq!(Projection::from_flags(false, true, false).unwrap(), Projection::Yz);
        assert_eq!(Projection::from_flags(false, false, true).unwrap(), Projection::Xz);
    }

    #[test]
    fn test_projection_requires_exactly_one_flag() {
        assert!(matches!(
            Projection::from_flags(false, false, false),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Projection::from_flags(true, true, false),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Projection::from_flags(true, true, true),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_projection_indices() {
        assert_eq!(Projection::Xy.indices(), (0, 1));
        assert_eq!(Projection::Yz.indices(), (1, 2));
        assert_eq!(Projection::Xz.indices(), (0, 2));
    }

    #[test]
    fn test_options_default_scale() {
        let opts = ConvertOptions::new(Projection::Xz);
        assert_eq!(opts.scale, 1.0);
        assert_eq!(opts.with_scale(-2.5).scale, -2.5);
    }

    #[test]
    fn test_options_reject_non_finite_scale() {
        let opts = ConvertOptions::new(Projection::Xy);
        assert!(opts.validate().is_ok());
        assert!(opts.with_scale(-0.5).validate().is_ok());
        for scale in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                opts.with_scale(scale).validate(),
                Err(Error::Configuration(_))
            ));
        }
    }
}
