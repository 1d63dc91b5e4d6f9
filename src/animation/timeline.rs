use std::collections::{BTreeMap, BTreeSet};

use crate::{
    animation::ease::Ease,
    foundation::core::{ElementId, clamp_unit},
    foundation::error::{ReelError, ReelResult},
};

/// Animatable visual property of an element.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    /// Horizontal translation in pixels.
    X,
    /// Vertical translation in pixels.
    Y,
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Uniform scale.
    Scale,
    /// Horizontal scale.
    ScaleX,
    /// Vertical scale.
    ScaleY,
}

/// One property of one element.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TargetProperty {
    /// Element being animated.
    pub element: ElementId,
    /// Property of that element.
    pub property: Property,
}

impl TargetProperty {
    /// Pair an element with a property.
    pub fn new(element: impl Into<ElementId>, property: Property) -> Self {
        Self {
            element: element.into(),
            property,
        }
    }
}

/// Interpolation of a single property over `[start, start + duration]` of timeline progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// Animated property.
    pub target: TargetProperty,
    /// Value at the start of the segment.
    pub from: f64,
    /// Value at the end of the segment.
    pub to: f64,
    /// Start offset in normalized timeline progress.
    pub start: f64,
    /// Length in normalized timeline progress, `(0, 1]`.
    pub duration: f64,
    /// Easing applied to segment-local progress.
    pub ease: Ease,
}

impl Segment {
    /// End offset (`start + duration`).
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Return `true` when `progress` lies inside `[start, end]`.
    pub fn contains(&self, progress: f64) -> bool {
        self.start <= progress && progress <= self.end()
    }

    /// Eased value at timeline `progress`; local progress is clamped to the segment.
    pub fn sample(&self, progress: f64) -> f64 {
        let local = ((progress - self.start) / self.duration).clamp(0.0, 1.0);
        let t = self.ease.apply(local);
        self.from + (self.to - self.from) * t
    }

    /// Validate offsets and values.
    pub fn validate(&self) -> ReelResult<()> {
        if !(self.from.is_finite() && self.to.is_finite()) {
            return Err(ReelError::timeline(format!(
                "segment for '{}' has non-finite values",
                self.target.element
            )));
        }
        if !(0.0..=1.0).contains(&self.start) {
            return Err(ReelError::timeline(format!(
                "segment for '{}' starts outside [0, 1] (start={})",
                self.target.element, self.start
            )));
        }
        if !(self.duration > 0.0 && self.duration <= 1.0) {
            return Err(ReelError::timeline(format!(
                "segment for '{}' must have duration in (0, 1] (duration={})",
                self.target.element, self.duration
            )));
        }
        // Small slack so authored offsets like 0.7 + 0.3 are not rejected by rounding.
        if self.end() > 1.0 + 1e-9 {
            return Err(ReelError::timeline(format!(
                "segment for '{}' ends past 1.0 (end={})",
                self.target.element,
                self.end()
            )));
        }
        Ok(())
    }
}

/// Property values produced by evaluating a timeline.
pub type Evaluated = BTreeMap<TargetProperty, f64>;

/// Ordered set of segments evaluated over normalized progress `[0, 1]`.
///
/// Declaration order is priority: where segments for the same property overlap, the later one
/// wins.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    /// Empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-ordered segments, validating each.
    pub fn from_segments(segments: Vec<Segment>) -> ReelResult<Self> {
        for s in &segments {
            s.validate()?;
        }
        Ok(Self { segments })
    }

    /// Append a segment with the lowest priority so far.
    pub fn push(&mut self, segment: Segment) -> ReelResult<()> {
        segment.validate()?;
        self.segments.push(segment);
        Ok(())
    }

    /// Segments in declaration order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Return `true` when no segments are declared.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Every property touched by at least one segment.
    pub fn targets(&self) -> BTreeSet<&TargetProperty> {
        self.segments.iter().map(|s| &s.target).collect()
    }

    /// Distinct elements touched by this timeline.
    pub fn elements(&self) -> BTreeSet<&ElementId> {
        self.segments.iter().map(|s| &s.target.element).collect()
    }

    /// Value of `target` at `progress`, or `None` when no segment animates it.
    ///
    /// Outside every segment the property holds: after a segment it keeps that segment's `to`,
    /// before the first one it shows the `from` of the earliest segment.
    pub fn value_at(&self, target: &TargetProperty, progress: f64) -> Option<f64> {
        let p = clamp_unit(progress);

        let mut active: Option<f64> = None;
        let mut passed: Option<(f64, f64)> = None;
        let mut upcoming: Option<(f64, f64)> = None;

        for seg in self.segments.iter().filter(|s| &s.target == target) {
            if seg.contains(p) {
                active = Some(seg.sample(p));
            } else if seg.end() < p {
                if passed.is_none_or(|(end, _)| seg.end() >= end) {
                    passed = Some((seg.end(), seg.to));
                }
            } else if upcoming.is_none_or(|(start, _)| seg.start <= start) {
                upcoming = Some((seg.start, seg.from));
            }
        }

        active
            .or(passed.map(|(_, v)| v))
            .or(upcoming.map(|(_, v)| v))
    }

    /// Evaluate every animated property at `progress` (clamped into `[0, 1]`).
    pub fn evaluate(&self, progress: f64) -> Evaluated {
        self.targets()
            .into_iter()
            .filter_map(|t| self.value_at(t, progress).map(|v| (t.clone(), v)))
            .collect()
    }

    /// Return `true` when no segment animates anything strictly inside `(a, b)`.
    pub fn is_static_between(&self, a: f64, b: f64) -> bool {
        const SLACK: f64 = 1e-9;
        self.segments
            .iter()
            .all(|s| s.end() <= a + SLACK || s.start >= b - SLACK)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
