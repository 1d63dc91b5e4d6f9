use crate::animation::ease::Ease;

/// Eased scroll animation toward a snap target, sampled against wall time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapTween {
    from_px: f64,
    to_px: f64,
    start_secs: f64,
    duration_secs: f64,
    ease: Ease,
}

impl SnapTween {
    /// Tween from `from_px` to `to_px` starting at `start_secs`.
    pub fn new(from_px: f64, to_px: f64, start_secs: f64, duration_secs: f64, ease: Ease) -> Self {
        Self {
            from_px,
            to_px,
            start_secs,
            duration_secs: duration_secs.max(0.0),
            ease,
        }
    }

    /// Scroll offset the tween ends on.
    pub fn target(&self) -> f64 {
        self.to_px
    }

    /// Duration in seconds, excluding any start delay.
    pub fn duration(&self) -> f64 {
        self.duration_secs
    }

    /// Scroll offset at `now_secs`. Before the start this is `from_px`.
    pub fn sample(&self, now_secs: f64) -> f64 {
        if self.duration_secs <= 0.0 {
            return if now_secs >= self.start_secs {
                self.to_px
            } else {
                self.from_px
            };
        }
        let t = ((now_secs - self.start_secs) / self.duration_secs).clamp(0.0, 1.0);
        self.from_px + (self.to_px - self.from_px) * self.ease.apply(t)
    }

    /// Return `true` once the tween has reached its target.
    pub fn is_done(&self, now_secs: f64) -> bool {
        now_secs - self.start_secs >= self.duration_secs
    }
}

#[cfg(test)]
#[path = "../../tests/unit/snap/tween.rs"]
mod tests;
