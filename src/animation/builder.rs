use crate::{
    animation::ease::Ease,
    animation::timeline::{Property, Segment, TargetProperty, Timeline},
    foundation::core::{ElementId, Length, Viewport},
    foundation::error::{ReelError, ReelResult},
};

/// Placement of a tween on the builder's time axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Absolute time.
    At(f64),
    /// Offset from the end of the previously added tween (negative overlaps it).
    Relative(f64),
}

/// Property list for one side of a tween.
pub type Props<'a> = &'a [(Property, Length)];

#[derive(Clone, Debug)]
struct RawSegment {
    target: TargetProperty,
    from: f64,
    to: f64,
    start: f64,
    duration: f64,
    ease: Ease,
}

/// Builder for [`Timeline`] values authored in arbitrary time units.
///
/// Tweens are placed on an unnormalized axis (seconds for auto-play, progress for scroll
/// timelines). [`TimelineBuilder::build`] divides every offset by the total length so the result
/// lives in `[0, 1]`. Lengths resolve against the builder's viewport.
///
/// The first invalid call is remembered and reported by `build`.
pub struct TimelineBuilder {
    viewport: Viewport,
    raw: Vec<RawSegment>,
    cursor: f64,
    min_length: f64,
    error: Option<ReelError>,
}

impl TimelineBuilder {
    /// Create an empty builder resolving lengths against `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            raw: Vec::new(),
            cursor: 0.0,
            min_length: 0.0,
            error: None,
        }
    }

    /// Force the timeline to be at least `length` long, padding with an idle tail.
    pub fn span(mut self, length: f64) -> Self {
        self.min_length = self.min_length.max(length);
        self
    }

    /// Tween the listed properties of `target` from `from` to `to`.
    ///
    /// Every property in `to` needs a matching entry in `from`.
    pub fn from_to(
        mut self,
        target: impl Into<ElementId>,
        from: Props<'_>,
        to: Props<'_>,
        at: Position,
        duration: f64,
        ease: Ease,
    ) -> Self {
        let target = target.into();
        let start = self.resolve_position(at);
        self.push_tween(&target, from, to, start, duration, ease);
        self.cursor = start + duration;
        self
    }

    /// Apply the same tween to several elements, offsetting each by `stagger`.
    ///
    /// The following `Relative` position is measured from the end of the last staggered tween.
    #[allow(clippy::too_many_arguments)]
    pub fn stagger<I, E>(
        mut self,
        targets: I,
        from: Props<'_>,
        to: Props<'_>,
        at: Position,
        duration: f64,
        stagger: f64,
        ease: Ease,
    ) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<ElementId>,
    {
        let base = self.resolve_position(at);
        let mut end = base;
        for (i, target) in targets.into_iter().enumerate() {
            let start = base + stagger * i as f64;
            self.push_tween(&target.into(), from, to, start, duration, ease);
            end = end.max(start + duration);
        }
        self.cursor = end;
        self
    }

    /// Total length on the unnormalized axis.
    pub fn length(&self) -> f64 {
        self.raw
            .iter()
            .map(|r| r.start + r.duration)
            .fold(self.min_length, f64::max)
    }

    /// Normalize into a [`Timeline`].
    pub fn build(self) -> ReelResult<Timeline> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let total = self.length();
        let mut timeline = Timeline::new();
        if total <= 0.0 {
            return Ok(timeline);
        }
        for r in self.raw {
            timeline.push(Segment {
                target: r.target,
                from: r.from,
                to: r.to,
                start: r.start / total,
                duration: r.duration / total,
                ease: r.ease,
            })?;
        }
        Ok(timeline)
    }

    /// Normalize into a [`Timeline`] and return the unnormalized length alongside it.
    pub fn build_with_length(self) -> ReelResult<(Timeline, f64)> {
        let length = self.length();
        Ok((self.build()?, length))
    }

    fn resolve_position(&self, at: Position) -> f64 {
        match at {
            Position::At(t) => t,
            Position::Relative(delta) => (self.cursor + delta).max(0.0),
        }
    }

    fn push_tween(
        &mut self,
        target: &ElementId,
        from: Props<'_>,
        to: Props<'_>,
        start: f64,
        duration: f64,
        ease: Ease,
    ) {
        if self.error.is_some() {
            return;
        }
        if !(duration > 0.0) || !(start >= 0.0) {
            self.error = Some(ReelError::timeline(format!(
                "tween for '{target}' needs start >= 0 and duration > 0 (start={start}, duration={duration})"
            )));
            return;
        }
        for &(property, to_len) in to {
            let Some(&(_, from_len)) = from.iter().find(|(p, _)| *p == property) else {
                self.error = Some(ReelError::timeline(format!(
                    "tween for '{target}' animates {property:?} without a starting value"
                )));
                return;
            };
            self.raw.push(RawSegment {
                target: TargetProperty::new(target.clone(), property),
                from: from_len.resolve(&self.viewport),
                to: to_len.resolve(&self.viewport),
                start,
                duration,
                ease,
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/builder.rs"]
mod tests;
