//! Donut arc path generation.

use super::layout::{SliceAngles, TAU};

/// Outer radius of the donut.
pub const OUTER_RADIUS: f64 = 150.0;
/// Radius of the hole.
pub const INNER_RADIUS: f64 = OUTER_RADIUS / 3.0;

const FULL_TURN_EPSILON: f64 = 1e-6;

/// Point on a circle of radius `r`, angles clockwise from 12 o'clock.
fn point(r: f64, angle: f64) -> (f64, f64) {
    (r * angle.sin(), -r * angle.cos())
}

fn fmt(v: f64) -> String {
    format!("{:.3}", v)
}

/// SVG path data for the annular sector between `angles.start` and
/// `angles.end`, centered on the origin. Zero-span slices produce an empty
/// path; full turns produce a complete ring.
pub fn arc_path(angles: SliceAngles) -> String {
    let span = angles.span();
    if span <= 0.0 {
        return String::new();
    }
    if span >= TAU - FULL_TURN_EPSILON {
        return annulus_path();
    }

    let (x0, y0) = point(OUTER_RADIUS, angles.start);
    let (x1, y1) = point(OUTER_RADIUS, angles.end);
    let (x2, y2) = point(INNER_RADIUS, angles.end);
    let (x3, y3) = point(INNER_RADIUS, angles.start);
    let large = if span > TAU / 2.0 { 1 } else { 0 };

    format!(
        "M{},{}A{},{} 0 {} 1 {},{}L{},{}A{},{} 0 {} 0 {},{}Z",
        fmt(x0),
        fmt(y0),
        fmt(OUTER_RADIUS),
        fmt(OUTER_RADIUS),
        large,
        fmt(x1),
        fmt(y1),
        fmt(x2),
        fmt(y2),
        fmt(INNER_RADIUS),
        fmt(INNER_RADIUS),
        large,
        fmt(x3),
        fmt(y3),
    )
}

/// A single arc with coincident endpoints collapses, so a full-turn slice is
/// drawn as two half circles per radius, the inner pair wound the other way
/// to cut the hole.
fn annulus_path() -> String {
    let r = OUTER_RADIUS;
    let i = INNER_RADIUS;
    format!(
        "M0,{}A{},{} 0 1 1 0,{}A{},{} 0 1 1 0,{}M0,{}A{},{} 0 1 0 0,{}A{},{} 0 1 0 0,{}Z",
        fmt(-r),
        fmt(r),
        fmt(r),
        fmt(r),
        fmt(r),
        fmt(r),
        fmt(-r),
        fmt(-i),
        fmt(i),
        fmt(i),
        fmt(i),
        fmt(i),
        fmt(i),
        fmt(-i),
    )
}

/// Midpoint of the slice at the radial center of the ring; the tooltip
/// anchors here.
pub fn centroid(angles: SliceAngles) -> (f64, f64) {
    let mid = (angles.start + angles.end) / 2.0;
    point((OUTER_RADIUS + INNER_RADIUS) / 2.0, mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_path_has_outer_and_inner_arcs() {
        let path = arc_path(SliceAngles {
            start: 0.0,
            end: TAU / 4.0,
        });
        assert!(path.starts_with("M0.000,-150.000"));
        assert_eq!(path.matches('A').count(), 2);
        assert!(path.ends_with('Z'));
        // Outer end point of a quarter turn sits at 3 o'clock.
        assert!(path.contains("150.000,-0.000") || path.contains("150.000,0.000"));
    }

    #[test]
    fn large_arc_flag_follows_the_span() {
        let minor = arc_path(SliceAngles {
            start: 0.0,
            end: TAU / 4.0,
        });
        let major = arc_path(SliceAngles {
            start: 0.0,
            end: TAU * 0.75,
        });
        assert!(minor.contains(" 0 1 "));
        assert!(!minor.contains(" 1 1 "));
        assert!(major.contains(" 1 1 "));
    }

    #[test]
    fn zero_span_is_empty() {
        let path = arc_path(SliceAngles {
            start: 1.0,
            end: 1.0,
        });
        assert!(path.is_empty());
    }

    #[test]
    fn full_turn_renders_as_a_ring() {
        let path = arc_path(SliceAngles {
            start: 0.0,
            end: TAU,
        });
        assert_eq!(path.matches('A').count(), 4);
        assert_eq!(path.matches('M').count(), 2);
    }

    #[test]
    fn centroid_sits_mid_ring() {
        // Right half of the donut: mid angle is 3 o'clock.
        let (x, y) = centroid(SliceAngles {
            start: 0.0,
            end: TAU / 2.0,
        });
        assert!((x - (OUTER_RADIUS + INNER_RADIUS) / 2.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }
}
