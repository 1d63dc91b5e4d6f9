use crate::{
    config::{DurationRange, SnapConfig},
    scroll::controller::ScrollController,
    scroll::layout::LayoutProbe,
    snap::range::PinnedRange,
    snap::tween::SnapTween,
};

/// Document-level snap function over a fixed set of pinned ranges.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapFunction {
    ranges: Vec<PinnedRange>,
    tolerance: f64,
}

impl SnapFunction {
    /// Snap function over `ranges`, which are expected sorted by `start`.
    pub fn new(ranges: Vec<PinnedRange>, tolerance: f64) -> Self {
        Self {
            ranges,
            tolerance: tolerance.max(0.0),
        }
    }

    /// Pinned ranges in snap priority order.
    pub fn ranges(&self) -> &[PinnedRange] {
        &self.ranges
    }

    /// Tolerance band added around every range.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Snap a scroll fraction.
    ///
    /// Inside any tolerance band the nearest center wins, with earlier ranges winning ties.
    /// Everywhere else `value` is returned unchanged.
    pub fn snap_to(&self, value: f64) -> f64 {
        let in_pinned = self
            .ranges
            .iter()
            .any(|r| r.contains_with_tolerance(value, self.tolerance));
        if !in_pinned {
            return value;
        }
        let mut best = self.ranges[0].center;
        for r in &self.ranges[1..] {
            if (r.center - value).abs() < (best - value).abs() {
                best = r.center;
            }
        }
        best
    }
}

/// Lifecycle of the global snap function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapPhase {
    /// Nothing scheduled or installed.
    Idle,
    /// Waiting for layout to settle; installs once `now >= due_secs`.
    Settling {
        /// Time at which installation happens.
        due_secs: f64,
    },
    /// A snap function is installed.
    Installed,
}

/// Builds and owns the single snap function for the page.
///
/// Every rebuild replaces the previous function wholesale.
#[derive(Clone, Debug)]
pub struct SnapCoordinator {
    config: SnapConfig,
    settle_delay_secs: f64,
    phase: SnapPhase,
    snap: Option<SnapFunction>,
}

impl SnapCoordinator {
    /// Idle coordinator. An inverted duration range is reordered.
    pub fn new(mut config: SnapConfig, settle_delay_secs: f64) -> Self {
        let d = config.duration;
        if d.min > d.max {
            tracing::warn!(min = d.min, max = d.max, "snap duration range inverted; swapping");
            config.duration = DurationRange {
                min: d.max,
                max: d.min,
            };
        }
        Self {
            config,
            settle_delay_secs: settle_delay_secs.max(0.0),
            phase: SnapPhase::Idle,
            snap: None,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SnapPhase {
        self.phase
    }

    /// Schedule a (re)build one settle delay after `now_secs`. A pending schedule is replaced.
    pub fn schedule(&mut self, now_secs: f64) {
        let due_secs = now_secs + self.settle_delay_secs;
        tracing::debug!(due_secs, "snap rebuild scheduled");
        self.phase = SnapPhase::Settling { due_secs };
    }

    /// Install the snap function if the settle delay has elapsed. Returns `true` when a function
    /// was installed by this call.
    pub fn poll<P: LayoutProbe>(
        &mut self,
        now_secs: f64,
        controller: &mut ScrollController,
        probe: &mut P,
    ) -> bool {
        match self.phase {
            SnapPhase::Settling { due_secs } if now_secs >= due_secs => {
                self.install(controller, probe).is_some()
            }
            _ => false,
        }
    }

    /// Enumerate pinned bindings and install a snap function over them, then refresh layout.
    ///
    /// With no pinned bindings or nothing to scroll, any previous function is dropped and nothing
    /// is installed.
    #[tracing::instrument(skip_all)]
    pub fn install<P: LayoutProbe>(
        &mut self,
        controller: &mut ScrollController,
        probe: &mut P,
    ) -> Option<&SnapFunction> {
        self.snap = None;
        self.phase = SnapPhase::Idle;

        let max_scroll = controller.max_scroll();
        let mut pinned = controller.pinned_regions();
        if pinned.is_empty() || !(max_scroll > 0.0) {
            tracing::debug!(
                pinned = pinned.len(),
                max_scroll,
                "no pinned ranges to snap to; snap not installed"
            );
            return None;
        }
        pinned.sort_by(|a, b| a.region.start_px.total_cmp(&b.region.start_px));

        let mut ranges = Vec::with_capacity(pinned.len());
        for p in &pinned {
            match PinnedRange::from_scroll_px(
                p.region.start_px,
                p.region.end_px,
                max_scroll,
                p.reveal,
            ) {
                Ok(Some(range)) => ranges.push(range),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(section = %p.section, %err, "pinned range skipped");
                }
            }
        }
        if ranges.is_empty() {
            return None;
        }

        tracing::debug!(ranges = ranges.len(), max_scroll, "snap installed");
        self.snap = Some(SnapFunction::new(ranges, self.config.tolerance));
        self.phase = SnapPhase::Installed;
        controller.refresh(probe);
        self.snap.as_ref()
    }

    /// Installed snap function, if any.
    pub fn snap_fn(&self) -> Option<&SnapFunction> {
        self.snap.as_ref()
    }

    /// Snap `value`; identity while nothing is installed.
    pub fn snap_to(&self, value: f64) -> f64 {
        self.snap.as_ref().map_or(value, |s| s.snap_to(value))
    }

    /// Snap tween duration for travelling `distance` (a scroll fraction).
    pub fn duration_for(&self, distance: f64) -> f64 {
        self.config
            .duration
            .clamp(distance.abs() * self.config.seconds_per_unit)
    }

    /// Plan the tween that settles a scroll resting at `scroll_y`, if it needs to move.
    pub fn plan(&self, now_secs: f64, scroll_y: f64, max_scroll: f64) -> Option<SnapTween> {
        self.snap.as_ref()?;
        if !(max_scroll > 0.0) {
            return None;
        }
        let value = scroll_y / max_scroll;
        let target = self.snap_to(value);
        let target_px = target * max_scroll;
        if (target_px - scroll_y).abs() < 0.5 {
            return None;
        }
        Some(SnapTween::new(
            scroll_y,
            target_px,
            now_secs + self.config.delay,
            self.duration_for(target - value),
            self.config.ease,
        ))
    }

    /// Drop the installed function and any pending schedule.
    pub fn teardown(&mut self) {
        if self.snap.take().is_some() {
            tracing::debug!("snap torn down");
        }
        self.phase = SnapPhase::Idle;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/snap/coordinator.rs"]
mod tests;
