use super::HIGHLIGHT_DURATION;
use std::time::Duration;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AnimationKind {
    Expand,
    Contract,
}

/// Fire-and-forget radius change of one slice.
///
/// The chart already holds the target radius when this is emitted; hosts only use it to
/// interpolate what is on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceAnimation {
    pub index: usize,
    pub kind: AnimationKind,
    pub from_radius: f64,
    pub to_radius: f64,
    pub duration: Duration,
}

impl SliceAnimation {
    pub fn new(index: usize, kind: AnimationKind, from_radius: f64, to_radius: f64) -> Self {
        Self {
            index,
            kind,
            from_radius,
            to_radius,
            duration: HIGHLIGHT_DURATION,
        }
    }

    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Linearly interpolated outer radius `elapsed` after the animation started.
    pub fn radius_at(&self, elapsed: Duration) -> f64 {
        let t = self.progress(elapsed);
        self.from_radius + (self.to_radius - self.from_radius) * t
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_interpolates_linearly() {
        let anim = SliceAnimation::new(0, AnimationKind::Expand, 70.0, 86.0);
        assert_eq!(anim.duration, Duration::from_millis(70));
        assert_eq!(anim.radius_at(Duration::ZERO), 70.0);
        assert!((anim.radius_at(Duration::from_millis(35)) - 78.0).abs() < 1e-9);
        assert_eq!(anim.radius_at(Duration::from_millis(70)), 86.0);
    }

    #[test]
    fn test_radius_clamps_past_end() {
        let anim = SliceAnimation::new(2, AnimationKind::Contract, 86.0, 70.0);
        assert_eq!(anim.radius_at(Duration::from_secs(1)), 70.0);
        assert!(anim.is_finished(Duration::from_millis(70)));
        assert!(!anim.is_finished(Duration::from_millis(69)));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(AnimationKind::Expand.to_string(), "expand");
        assert_eq!(AnimationKind::Contract.to_string(), "contract");
    }
}
