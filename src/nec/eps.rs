use crate::error::{Error, Result};
use crate::nec::project::Drawing;
use crate::nec::types::Segment;
use std::io::Write;

/// Format a coordinate with the shortest round-trip representation,
/// treating -0 as 0
fn f(n: f64) -> String {
    let n = if n == 0.0 { 0.0 } else { n };
    format!("{}", n)
}

fn segment_path(segment: &Segment) -> String {
    format!(
        "newpath {} {} moveto {} {} lineto stroke closepath",
        f(segment.from.x),
        f(segment.from.y),
        f(segment.to.x),
        f(segment.to.y)
    )
}

/// Write `drawing` as a single page EPS document and flush `out`
pub fn write_eps<W: Write>(drawing: &Drawing, out: &mut W) -> Result<()> {
    if drawing.is_empty() {
        return Err(Error::EmptyInput);
    }

    let bounds = drawing.bounds();
    writeln!(out, "%!PS-Adobe-3.0 EPSF-3.0")?;
    writeln!(out, "%%Pages: 1")?;
    writeln!(
        out,
        "%%BoundingBox: {} {} {} {}",
        f(bounds.min.x),
        f(bounds.min.y),
        f(bounds.max.x),
        f(bounds.max.y)
    )?;

    for segment in drawing.segments() {
        writeln!(out, "{}", segment_path(segment))?;
    }

    out.flush()?;
    Ok(())
}

/// Render `drawing` to an EPS string
pub fn drawing_to_eps(drawing: &Drawing) -> Result<String> {
    let mut buf = Vec::new();
    write_eps(drawing, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nec::types::Point2D;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point2D::new(x0, y0), Point2D::new(x1, y1))
    }

    #[test]
    fn test_number_format() {
        assert_eq!(f(2.0), "2");
        assert_eq!(f(0.001), "0.001");
        assert_eq!(f(-1.25), "-1.25");
        assert_eq!(f(-0.0), "0");
        assert_eq!(f(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_segment_path() {
        assert_eq!(
            segment_path(&seg(0.0, 0.0, 2.0, 2.0)),
            "newpath 0 0 moveto 2 2 lineto stroke closepath"
        );
    }

    #[test]
    fn test_single_segment_document() {
        let drawing: Drawing = [seg(0.0, 0.0, 2.0, 2.0)].into_iter().collect();
        let eps = drawing_to_eps(&drawing).unwrap();
        assert_eq!(
            eps,
            "%!PS-Adobe-3.0 EPSF-3.0\n\
             %%Pages: 1\n\
             %%BoundingBox: 0 0 2 2\n\
             newpath 0 0 moveto 2 2 lineto stroke closepath\n"
        );
    }

    #[test]
    fn test_paths_follow_segment_order() {
        let drawing: Drawing = [seg(1.5, -1.0, 0.0, 0.5), seg(-3.0, 2.0, 4.0, 2.0)]
            .into_iter()
            .collect();
        let eps = drawing_to_eps(&drawing).unwrap();
        let lines: Vec<&str> = eps.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "%%BoundingBox: -3 -1 4 2");
        assert_eq!(lines[3], "newpath 1.5 -1 moveto 0 0.5 lineto stroke closepath");
        assert_eq!(lines[4], "newpath -3 2 moveto 4 2 lineto stroke closepath");
    }

    #[test]
    fn test_empty_drawing_writes_nothing() {
        let mut out = Vec::new();
        let err = write_eps(&Drawing::new(), &mut out).unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
        assert!(out.is_empty());
    }
}
