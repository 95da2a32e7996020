//! Time-parameterized slice animations.

use super::layout::SliceAngles;

/// Arc sweep duration for enter/update/exit transitions.
pub const SWEEP_MS: f64 = 1000.0;
/// Opacity fade duration on hover start.
pub const HOVER_IN_MS: f64 = 150.0;
/// Opacity fade duration on hover end.
pub const HOVER_OUT_MS: f64 = 400.0;
/// Resting slice opacity.
pub const DEFAULT_OPACITY: f64 = 0.75;

fn progress(started: &mut Option<f64>, now_ms: f64, duration_ms: f64) -> f64 {
    let start = *started.get_or_insert(now_ms);
    ((now_ms - start) / duration_ms).clamp(0.0, 1.0)
}

/// Interpolates a slice between two angle pairs over [`SWEEP_MS`].
///
/// The start timestamp is stamped on the first sample, so tweens can be
/// scheduled outside the frame loop.
#[derive(Clone, Debug)]
pub struct ArcTween {
    from: SliceAngles,
    to: SliceAngles,
    started: Option<f64>,
}

impl ArcTween {
    pub fn between(from: SliceAngles, to: SliceAngles) -> Self {
        ArcTween {
            from,
            to,
            started: None,
        }
    }

    /// Grow from a zero-width arc at the target's end angle.
    pub fn enter(to: SliceAngles) -> Self {
        Self::between(to.collapsed(), to)
    }

    /// Shrink down to a zero-width arc at the current end angle.
    pub fn exit(from: SliceAngles) -> Self {
        Self::between(from, from.collapsed())
    }

    pub fn sample(&mut self, now_ms: f64) -> SliceAngles {
        let t = progress(&mut self.started, now_ms, SWEEP_MS);
        SliceAngles::lerp(self.from, self.to, t)
    }

    pub fn finished(&self, now_ms: f64) -> bool {
        matches!(self.started, Some(start) if now_ms - start >= SWEEP_MS)
    }
}

/// Opacity fade used for hover feedback.
#[derive(Clone, Debug)]
pub struct FadeTween {
    from: f64,
    to: f64,
    duration_ms: f64,
    started: Option<f64>,
}

impl FadeTween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        FadeTween {
            from,
            to,
            duration_ms,
            started: None,
        }
    }

    pub fn sample(&mut self, now_ms: f64) -> f64 {
        let t = progress(&mut self.started, now_ms, self.duration_ms);
        self.from + (self.to - self.from) * t
    }

    pub fn finished(&self, now_ms: f64) -> bool {
        matches!(self.started, Some(start) if now_ms - start >= self.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: SliceAngles = SliceAngles {
        start: 0.0,
        end: 2.0,
    };
    const B: SliceAngles = SliceAngles {
        start: 1.0,
        end: 3.0,
    };

    #[test]
    fn update_tween_hits_endpoints() {
        let mut tween = ArcTween::between(A, B);
        assert_eq!(tween.sample(100.0), A);
        let mid = tween.sample(100.0 + SWEEP_MS / 2.0);
        assert!((mid.start - 0.5).abs() < 1e-12);
        assert!((mid.end - 2.5).abs() < 1e-12);
        assert_eq!(tween.sample(100.0 + SWEEP_MS), B);
        assert!(tween.finished(100.0 + SWEEP_MS));
    }

    #[test]
    fn progress_clamps_past_the_duration() {
        let mut tween = ArcTween::between(A, B);
        tween.sample(0.0);
        assert_eq!(tween.sample(SWEEP_MS * 10.0), B);
    }

    #[test]
    fn enter_grows_from_the_end_angle() {
        let mut tween = ArcTween::enter(B);
        let first = tween.sample(0.0);
        assert_eq!(first, B.collapsed());
        assert_eq!(first.span(), 0.0);
        assert_eq!(tween.sample(SWEEP_MS), B);
    }

    #[test]
    fn exit_collapses_to_the_end_angle() {
        let mut tween = ArcTween::exit(A);
        assert_eq!(tween.sample(0.0), A);
        let last = tween.sample(SWEEP_MS);
        assert_eq!(last, A.collapsed());
        assert_eq!(last.span(), 0.0);
    }

    #[test]
    fn not_finished_before_first_sample() {
        let tween = ArcTween::between(A, B);
        assert!(!tween.finished(1e9));
    }

    #[test]
    fn fade_interpolates_opacity() {
        let mut fade = FadeTween::new(DEFAULT_OPACITY, 1.0, HOVER_IN_MS);
        assert_eq!(fade.sample(5.0), DEFAULT_OPACITY);
        let mid = fade.sample(5.0 + HOVER_IN_MS / 2.0);
        assert!((mid - (DEFAULT_OPACITY + 1.0) / 2.0).abs() < 1e-12);
        assert_eq!(fade.sample(5.0 + HOVER_IN_MS), 1.0);
        assert!(fade.finished(5.0 + HOVER_OUT_MS));
    }
}
