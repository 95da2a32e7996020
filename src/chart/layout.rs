//! Pie layout: weighted values to angular spans.

/// One full turn.
pub const TAU: f64 = std::f64::consts::TAU;

/// Start/end angle pair of one slice, clockwise from 12 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceAngles {
    pub start: f64,
    pub end: f64,
}

impl SliceAngles {
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Zero-width arc at this slice's end angle.
    pub fn collapsed(&self) -> SliceAngles {
        SliceAngles {
            start: self.end,
            end: self.end,
        }
    }

    /// Linear interpolation of both angles.
    pub fn lerp(from: SliceAngles, to: SliceAngles, t: f64) -> SliceAngles {
        SliceAngles {
            start: from.start + (to.start - from.start) * t,
            end: from.end + (to.end - from.end) * t,
        }
    }
}

/// Compute slice angles proportional to each weight's share of the total.
///
/// Slices follow input order; no re-sorting happens here. Non-positive
/// weights, or a non-positive total, yield zero-span slices rather than NaN
/// angles.
pub fn pie_angles(weights: &[f64]) -> Vec<SliceAngles> {
    let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    let k = if total > 0.0 { TAU / total } else { 0.0 };

    let mut acc = 0.0;
    weights
        .iter()
        .map(|w| {
            let start = acc;
            if *w > 0.0 {
                acc += w * k;
            }
            SliceAngles { start, end: acc }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_span(slices: &[SliceAngles]) -> f64 {
        slices.iter().map(|s| s.span()).sum()
    }

    #[test]
    fn spans_cover_a_full_turn() {
        let slices = pie_angles(&[1000.0, 500.0, 250.0]);
        assert!((total_span(&slices) - TAU).abs() < 1e-9);
        assert!((slices.last().unwrap().end - TAU).abs() < 1e-9);
    }

    #[test]
    fn spans_are_cost_proportional() {
        // rent 1000 / food 500 -> 240 and 120 degrees
        let slices = pie_angles(&[1000.0, 500.0]);
        assert!((slices[0].span() - TAU * 2.0 / 3.0).abs() < 1e-9);
        assert!((slices[1].span() - TAU / 3.0).abs() < 1e-9);
    }

    #[test]
    fn input_order_is_preserved() {
        let slices = pie_angles(&[1.0, 3.0, 2.0]);
        assert_eq!(slices[0].start, 0.0);
        for pair in slices.windows(2) {
            assert!((pair[0].end - pair[1].start).abs() < 1e-12);
        }
        assert!(slices[1].span() > slices[2].span());
    }

    #[test]
    fn single_weight_takes_the_whole_turn() {
        let slices = pie_angles(&[42.0]);
        assert_eq!(slices.len(), 1);
        assert!((slices[0].span() - TAU).abs() < 1e-9);
    }

    #[test]
    fn empty_input_yields_no_slices() {
        assert!(pie_angles(&[]).is_empty());
    }

    #[test]
    fn zero_total_degenerates_to_zero_spans() {
        for slice in pie_angles(&[0.0, 0.0, -5.0]) {
            assert_eq!(slice.span(), 0.0);
            assert!(slice.start.is_finite());
        }
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let from = SliceAngles { start: 0.0, end: 1.0 };
        let to = SliceAngles { start: 2.0, end: 4.0 };
        assert_eq!(SliceAngles::lerp(from, to, 0.0), from);
        assert_eq!(SliceAngles::lerp(from, to, 1.0), to);
        let mid = SliceAngles::lerp(from, to, 0.5);
        assert!((mid.start - 1.0).abs() < 1e-12);
        assert!((mid.end - 2.5).abs() < 1e-12);
    }

    #[test]
    fn collapsed_sits_at_the_end_angle() {
        let slice = SliceAngles { start: 0.5, end: 2.0 };
        let collapsed = slice.collapsed();
        assert_eq!(collapsed.start, 2.0);
        assert_eq!(collapsed.end, 2.0);
        assert_eq!(collapsed.span(), 0.0);
    }
}
