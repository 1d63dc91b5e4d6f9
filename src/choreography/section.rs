use std::collections::BTreeSet;

use crate::{
    animation::timeline::Timeline,
    foundation::core::ElementId,
    foundation::error::{ReelError, ReelResult},
    scroll::binding::ScrollBinding,
    scroll::controller::{BindingId, PlaybackId, ScrollController},
    scroll::layout::LayoutProbe,
};

/// What drives a section's animation progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionMode {
    /// The section pins and scroll distance scrubs its timeline.
    PinnedScrub,
    /// Elements reveal as they cross viewport thresholds; nothing pins.
    ThresholdReveal,
}

/// Progress interval of a pinned timeline where every animated value holds still.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HoldWindow {
    /// Progress where the entrance has finished.
    pub start: f64,
    /// Progress where the exit begins.
    pub end: f64,
}

impl HoldWindow {
    /// Validated hold window with `0 <= start <= end <= 1`.
    pub fn new(start: f64, end: f64) -> ReelResult<Self> {
        if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) || start > end {
            return Err(ReelError::validation(format!(
                "hold window needs 0 <= start <= end <= 1 (got {start} .. {end})"
            )));
        }
        Ok(Self { start, end })
    }
}

/// Time-driven timeline played once when the section mounts.
#[derive(Clone, Debug, PartialEq)]
pub struct Entrance {
    /// Normalized timeline.
    pub timeline: Timeline,
    /// Wall-clock length in seconds.
    pub duration_secs: f64,
}

/// Declarative animation setup for one page section.
#[derive(Clone, Debug)]
pub struct SectionChoreography {
    /// Section element id.
    pub id: ElementId,
    /// Progress driver.
    pub mode: SectionMode,
    /// Hold window of the pinned timeline, if the section has one.
    pub hold: Option<HoldWindow>,
    /// Scroll bindings in registration order.
    pub bindings: Vec<ScrollBinding>,
    /// Optional auto-play entrance.
    pub entrance: Option<Entrance>,
}

/// Controller handles owned by a mounted section.
#[derive(Clone, Debug, PartialEq)]
pub struct MountedSection {
    /// Section element id.
    pub id: ElementId,
    /// Registered bindings.
    pub bindings: Vec<BindingId>,
    /// Running entrance, if one was started.
    pub entrance: Option<PlaybackId>,
}

impl SectionChoreography {
    /// Empty choreography for `id`.
    pub fn new(id: impl Into<ElementId>, mode: SectionMode) -> Self {
        Self {
            id: id.into(),
            mode,
            hold: None,
            bindings: Vec::new(),
            entrance: None,
        }
    }

    /// Declare the hold window.
    pub fn with_hold(mut self, start: f64, end: f64) -> ReelResult<Self> {
        self.hold = Some(HoldWindow::new(start, end)?);
        Ok(self)
    }

    /// Add a binding.
    pub fn with_binding(mut self, binding: ScrollBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Play `timeline` over `duration_secs` when the section mounts.
    pub fn with_entrance(mut self, timeline: Timeline, duration_secs: f64) -> Self {
        self.entrance = Some(Entrance {
            timeline,
            duration_secs,
        });
        self
    }

    /// Return `true` for pinned sections.
    pub fn is_pinned(&self) -> bool {
        self.mode == SectionMode::PinnedScrub
    }

    /// The pinned binding, if any.
    pub fn pinned_binding(&self) -> Option<&ScrollBinding> {
        self.bindings.iter().find(|b| b.is_pinned())
    }

    /// Override the navigation reveal fraction of the section's pinned binding.
    ///
    /// Threshold sections navigate to their measured top, so an override there is an error.
    pub fn set_reveal(&mut self, fraction: f64) -> ReelResult<()> {
        let Some(idx) = self.bindings.iter().position(|b| b.is_pinned()) else {
            return Err(ReelError::validation(format!(
                "section '{}' does not pin; reveal overrides only apply to pinned sections",
                self.id
            )));
        };
        let binding = self.bindings[idx].clone();
        self.bindings[idx] = binding.with_reveal(fraction)?;
        Ok(())
    }

    /// Every element the section needs mounted: triggers and animated targets.
    pub fn elements(&self) -> BTreeSet<&ElementId> {
        let mut out = BTreeSet::new();
        out.insert(&self.id);
        for b in &self.bindings {
            out.insert(&b.trigger);
            out.extend(b.timeline.elements());
            out.extend(b.leave_back.iter().map(|(t, _)| &t.element));
        }
        if let Some(e) = &self.entrance {
            out.extend(e.timeline.elements());
        }
        out
    }

    /// Check mode consistency and the hold window.
    pub fn validate(&self) -> ReelResult<()> {
        for b in &self.bindings {
            b.validate()?;
            if b.section != self.id {
                return Err(ReelError::validation(format!(
                    "binding for '{}' belongs to '{}', not '{}'",
                    b.trigger, b.section, self.id
                )));
            }
        }
        let pinned = self.bindings.iter().filter(|b| b.is_pinned()).count();
        match self.mode {
            SectionMode::PinnedScrub if pinned != 1 => {
                return Err(ReelError::validation(format!(
                    "pinned section '{}' needs exactly one pinned binding (has {pinned})",
                    self.id
                )));
            }
            SectionMode::ThresholdReveal if pinned != 0 => {
                return Err(ReelError::validation(format!(
                    "threshold section '{}' cannot pin",
                    self.id
                )));
            }
            _ => {}
        }
        if let (Some(hold), Some(binding)) = (self.hold, self.pinned_binding())
            && !binding.timeline.is_static_between(hold.start, hold.end)
        {
            return Err(ReelError::validation(format!(
                "section '{}' animates inside its hold window {} .. {}",
                self.id, hold.start, hold.end
            )));
        }
        if let Some(e) = &self.entrance
            && !(e.duration_secs > 0.0 && e.duration_secs.is_finite())
        {
            return Err(ReelError::validation(format!(
                "entrance of '{}' needs a positive duration",
                self.id
            )));
        }
        Ok(())
    }

    /// Register the section's bindings and start its entrance.
    ///
    /// If any required element is missing the whole section is skipped and `None` is returned.
    pub fn mount<P: LayoutProbe>(
        &self,
        controller: &mut ScrollController,
        probe: &mut P,
    ) -> Option<MountedSection> {
        if let Some(missing) = self.elements().into_iter().find(|e| !probe.contains(e)) {
            tracing::warn!(section = %self.id, element = %missing, "element not mounted; section skipped");
            return None;
        }

        let mut bindings = Vec::with_capacity(self.bindings.len());
        for b in &self.bindings {
            if let Some(id) = controller.bind(b.clone(), probe) {
                bindings.push(id);
            }
        }
        let entrance = self.entrance.as_ref().and_then(|e| {
            controller
                .play(self.id.clone(), e.timeline.clone(), e.duration_secs)
                .inspect_err(|err| tracing::warn!(section = %self.id, %err, "entrance not played"))
                .ok()
        });
        tracing::debug!(section = %self.id, bindings = bindings.len(), "section mounted");
        Some(MountedSection {
            id: self.id.clone(),
            bindings,
            entrance,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/section.rs"]
mod tests;
