use crate::{
    foundation::core::clamp_unit,
    foundation::error::{ReelError, ReelResult},
};

/// Pinned scroll range as fractions of the total scrollable distance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PinnedRange {
    /// Fraction where the pin starts.
    pub start: f64,
    /// Fraction where the pin ends.
    pub end: f64,
    /// Fraction snapping lands on.
    pub center: f64,
}

impl PinnedRange {
    /// Range centered halfway between `start` and `end`.
    pub fn new(start: f64, end: f64) -> ReelResult<Self> {
        Self::with_reveal(start, end, 0.5)
    }

    /// Range whose center sits at `reveal` of the way from `start` to `end`.
    pub fn with_reveal(start: f64, end: f64, reveal: f64) -> ReelResult<Self> {
        if !(start.is_finite() && end.is_finite()) || start > end {
            return Err(ReelError::layout(format!(
                "pinned range needs finite start <= end (got {start} .. {end})"
            )));
        }
        if !(0.0..=1.0).contains(&reveal) {
            return Err(ReelError::layout(format!(
                "reveal fraction must be in [0, 1] (got {reveal})"
            )));
        }
        Ok(Self {
            start,
            end,
            center: start + (end - start) * reveal,
        })
    }

    /// Convert a pixel interval into fractions of `max_scroll`.
    ///
    /// Returns `None` when there is nothing to scroll.
    pub fn from_scroll_px(
        start_px: f64,
        end_px: f64,
        max_scroll: f64,
        reveal: Option<f64>,
    ) -> ReelResult<Option<Self>> {
        if !(max_scroll > 0.0) {
            return Ok(None);
        }
        let start = clamp_unit(start_px / max_scroll);
        let end = clamp_unit(end_px / max_scroll);
        Self::with_reveal(start, end, reveal.unwrap_or(0.5)).map(Some)
    }

    /// Return `true` when `value` lies in `[start - tolerance, end + tolerance]`.
    pub fn contains_with_tolerance(&self, value: f64, tolerance: f64) -> bool {
        self.start - tolerance <= value && value <= self.end + tolerance
    }
}

#[cfg(test)]
#[path = "../../tests/unit/snap/range.rs"]
mod tests;
