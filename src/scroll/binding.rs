use crate::{
    animation::timeline::{TargetProperty, Timeline},
    foundation::core::{ElementId, clamp_unit},
    foundation::error::{ReelError, ReelResult},
};

/// What drives a binding's progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TriggerMode {
    /// Pin the trigger at the top of the viewport for `distance_vh` viewport heights and map that
    /// scroll distance onto progress.
    PinnedScrub {
        /// Pin distance as a multiple of viewport height (`1.3` = `+=130%`).
        distance_vh: f64,
    },
    /// Reveal while the trigger's top travels from `start` to `end` (fractions of viewport
    /// height measured from the viewport top, `start > end`).
    ThresholdReveal {
        /// Viewport fraction where progress is 0 (e.g. `0.85`).
        start: f64,
        /// Viewport fraction where progress is 1 (e.g. `0.55`).
        end: f64,
    },
}

impl TriggerMode {
    /// Scroll region for a trigger whose document top is `top_px`.
    pub fn region(self, top_px: f64, viewport_height: f64) -> ScrollRegion {
        match self {
            Self::PinnedScrub { distance_vh } => ScrollRegion {
                start_px: top_px,
                end_px: top_px + distance_vh * viewport_height,
            },
            Self::ThresholdReveal { start, end } => ScrollRegion {
                start_px: top_px - start * viewport_height,
                end_px: top_px - end * viewport_height,
            },
        }
    }

    /// Pin spacer height this mode inserts below its trigger.
    pub fn spacer_px(self, viewport_height: f64) -> Option<f64> {
        match self {
            Self::PinnedScrub { distance_vh } => Some(distance_vh * viewport_height),
            Self::ThresholdReveal { .. } => None,
        }
    }
}

/// Measured scroll interval `[start_px, end_px]` in document pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRegion {
    /// Scroll offset where progress is 0.
    pub start_px: f64,
    /// Scroll offset where progress is 1.
    pub end_px: f64,
}

impl ScrollRegion {
    /// Progress for `scroll_y`, clamped into `[0, 1]`.
    pub fn progress(self, scroll_y: f64) -> f64 {
        let len = self.end_px - self.start_px;
        if len <= 0.0 {
            return if scroll_y >= self.start_px { 1.0 } else { 0.0 };
        }
        clamp_unit((scroll_y - self.start_px) / len)
    }

    /// Scroll offset at `fraction` of the region.
    pub fn offset_at(self, fraction: f64) -> f64 {
        self.start_px + (self.end_px - self.start_px) * fraction
    }
}

/// Binding of a timeline to a scroll region.
#[derive(Clone, Debug)]
pub struct ScrollBinding {
    /// Section that owns this binding (used for teardown).
    pub section: ElementId,
    /// Element whose position defines the scroll region.
    pub trigger: ElementId,
    /// Progress driver.
    pub mode: TriggerMode,
    /// Catch-up time in seconds for displayed progress (`0` = immediate).
    pub scrub: f64,
    /// Timeline evaluated at displayed progress.
    pub timeline: Timeline,
    /// Values applied once each time scroll moves back above the region start.
    pub leave_back: Vec<(TargetProperty, f64)>,
    /// Where inside the region navigation should land; `None` uses the mode default.
    pub reveal: Option<f64>,
}

impl ScrollBinding {
    /// Pinned binding whose trigger is the section itself.
    pub fn pinned(
        section: impl Into<ElementId>,
        distance_vh: f64,
        scrub: f64,
        timeline: Timeline,
    ) -> ReelResult<Self> {
        let section = section.into();
        let binding = Self {
            trigger: section.clone(),
            section,
            mode: TriggerMode::PinnedScrub { distance_vh },
            scrub,
            timeline,
            leave_back: Vec::new(),
            reveal: None,
        };
        binding.validate()?;
        Ok(binding)
    }

    /// Threshold-reveal binding for one element inside `section`.
    pub fn reveal(
        section: impl Into<ElementId>,
        trigger: impl Into<ElementId>,
        start: f64,
        end: f64,
        scrub: f64,
        timeline: Timeline,
    ) -> ReelResult<Self> {
        let binding = Self {
            section: section.into(),
            trigger: trigger.into(),
            mode: TriggerMode::ThresholdReveal { start, end },
            scrub,
            timeline,
            leave_back: Vec::new(),
            reveal: None,
        };
        binding.validate()?;
        Ok(binding)
    }

    /// Attach values applied when scrolling back above the start.
    pub fn with_leave_back(mut self, values: Vec<(TargetProperty, f64)>) -> Self {
        self.leave_back = values;
        self
    }

    /// Override the navigation reveal fraction.
    pub fn with_reveal(mut self, fraction: f64) -> ReelResult<Self> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ReelError::binding(format!(
                "reveal fraction for '{}' must be in [0, 1] (got {fraction})",
                self.trigger
            )));
        }
        self.reveal = Some(fraction);
        Ok(self)
    }

    /// Return `true` for pinned bindings.
    pub fn is_pinned(&self) -> bool {
        matches!(self.mode, TriggerMode::PinnedScrub { .. })
    }

    /// Reveal fraction navigation lands on: explicit override, else mid-pin or top.
    pub fn reveal_fraction(&self) -> f64 {
        self.reveal
            .unwrap_or(if self.is_pinned() { 0.5 } else { 0.0 })
    }

    /// Validate static invariants.
    pub fn validate(&self) -> ReelResult<()> {
        if !(self.scrub >= 0.0 && self.scrub.is_finite()) {
            return Err(ReelError::binding(format!(
                "scrub for '{}' must be finite and >= 0 (got {})",
                self.trigger, self.scrub
            )));
        }
        if !self.trigger.is_within(&self.section) {
            return Err(ReelError::binding(format!(
                "trigger '{}' is not part of section '{}'",
                self.trigger, self.section
            )));
        }
        match self.mode {
            TriggerMode::PinnedScrub { distance_vh } => {
                if !(distance_vh > 0.0 && distance_vh.is_finite()) {
                    return Err(ReelError::binding(format!(
                        "pin distance for '{}' must be > 0 (got {distance_vh})",
                        self.trigger
                    )));
                }
            }
            TriggerMode::ThresholdReveal { start, end } => {
                if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) || start <= end
                {
                    return Err(ReelError::binding(format!(
                        "reveal thresholds for '{}' need 1 >= start > end >= 0 (got {start} -> {end})",
                        self.trigger
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/binding.rs"]
mod tests;
