/// Number of time constants that fit into one scrub interval.
///
/// With `scrub = s` seconds the displayed progress covers ~95% of a jump within `s` seconds.
const TIME_CONSTANTS_PER_SCRUB: f64 = 3.0;

/// Remaining distance below which the displayed progress snaps onto its target.
const SETTLE_EPSILON: f64 = 1e-4;

/// First-order low-pass filter that makes displayed progress lag behind scroll progress.
#[derive(Clone, Debug)]
pub struct ScrubFilter {
    lag_secs: f64,
    displayed: Option<f64>,
}

impl ScrubFilter {
    /// Create a filter with a catch-up time of `lag_secs` (`0` disables smoothing).
    pub fn new(lag_secs: f64) -> Self {
        Self {
            lag_secs: lag_secs.max(0.0),
            displayed: None,
        }
    }

    /// Advance by `dt_secs` toward `target` and return the new displayed progress.
    ///
    /// The first update (and every update when smoothing is off) lands exactly on `target`.
    pub fn update(&mut self, target: f64, dt_secs: f64) -> f64 {
        let next = match self.displayed {
            None => target,
            Some(_) if self.lag_secs <= 0.0 => target,
            Some(current) => {
                let tau = self.lag_secs / TIME_CONSTANTS_PER_SCRUB;
                let alpha = 1.0 - (-dt_secs.max(0.0) / tau).exp();
                let moved = current + (target - current) * alpha;
                if (target - moved).abs() < SETTLE_EPSILON {
                    target
                } else {
                    moved
                }
            }
        };
        self.displayed = Some(next);
        next
    }

    /// Jump straight to `progress`, dropping any pending lag.
    pub fn jump_to(&mut self, progress: f64) {
        self.displayed = Some(progress);
    }

    /// Return `true` when the displayed progress already equals `target`.
    pub fn is_settled(&self, target: f64) -> bool {
        self.displayed == Some(target)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/scrub.rs"]
mod tests;
