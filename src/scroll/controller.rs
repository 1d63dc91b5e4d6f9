use std::collections::BTreeMap;

use slotmap::{SlotMap, new_key_type};

use crate::{
    animation::timeline::{TargetProperty, Timeline},
    foundation::core::{ElementId, Viewport},
    foundation::error::{ReelError, ReelResult},
    scroll::binding::{ScrollBinding, ScrollRegion},
    scroll::layout::LayoutProbe,
    scroll::scrub::ScrubFilter,
    scroll::sink::PropertySink,
};

new_key_type! {
    /// Handle to a registered scroll binding.
    pub struct BindingId;
    /// Handle to a running auto-play timeline.
    pub struct PlaybackId;
}

struct BindingState {
    binding: ScrollBinding,
    region: Option<ScrollRegion>,
    filter: ScrubFilter,
    dirty: bool,
    last_displayed: Option<f64>,
    last_applied: BTreeMap<TargetProperty, f64>,
    last_scroll_y: Option<f64>,
    reset_applied: bool,
    evaluations: u64,
}

struct Playback {
    section: ElementId,
    timeline: Timeline,
    duration_secs: f64,
    elapsed_secs: f64,
    last_applied: BTreeMap<TargetProperty, f64>,
}

/// Measured region of a pinned binding.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PinnedRegion {
    /// Owning section.
    pub section: ElementId,
    /// Pinned element.
    pub trigger: ElementId,
    /// Pin interval in document pixels.
    pub region: ScrollRegion,
    /// Explicit reveal fraction, if declared.
    pub reveal: Option<f64>,
}

/// Registry of scroll bindings driven by the per-frame tick.
///
/// Bindings are kept in registration order, which is document order when sections mount top to
/// bottom. Removing a binding drops every piece of per-frame state tied to it, so a later tick can
/// never evaluate its timeline again.
pub struct ScrollController {
    bindings: SlotMap<BindingId, BindingState>,
    order: Vec<BindingId>,
    playbacks: SlotMap<PlaybackId, Playback>,
    viewport: Viewport,
    scroll_y: f64,
    max_scroll: f64,
}

impl ScrollController {
    /// Empty controller for `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            bindings: SlotMap::with_key(),
            order: Vec::new(),
            playbacks: SlotMap::with_key(),
            viewport,
            scroll_y: 0.0,
            max_scroll: 0.0,
        }
    }

    /// Register `binding`, measure it against `probe` and re-measure everything else.
    ///
    /// Returns `None` (and registers nothing) when the trigger element is not mounted.
    pub fn bind<P: LayoutProbe>(
        &mut self,
        binding: ScrollBinding,
        probe: &mut P,
    ) -> Option<BindingId> {
        if !probe.contains(&binding.trigger) {
            tracing::warn!(trigger = %binding.trigger, "trigger not mounted; binding skipped");
            return None;
        }
        let filter = ScrubFilter::new(binding.scrub);
        let id = self.bindings.insert(BindingState {
            binding,
            region: None,
            filter,
            dirty: true,
            last_displayed: None,
            last_applied: BTreeMap::new(),
            last_scroll_y: None,
            reset_applied: false,
            evaluations: 0,
        });
        self.order.push(id);
        self.refresh(probe);
        Some(id)
    }

    /// Remove a binding. Its timeline is never evaluated again.
    ///
    /// Pin spacers are only released by the next [`ScrollController::refresh`].
    pub fn unbind(&mut self, id: BindingId) -> bool {
        let removed = self.bindings.remove(id).is_some();
        if removed {
            self.order.retain(|&o| o != id);
            tracing::debug!(?id, "binding removed");
        }
        removed
    }

    /// Remove every binding and playback owned by `section`. Returns the number removed.
    pub fn unbind_section(&mut self, section: &ElementId) -> usize {
        let doomed: Vec<BindingId> = self
            .order
            .iter()
            .copied()
            .filter(|&id| {
                self.bindings
                    .get(id)
                    .is_some_and(|s| &s.binding.section == section)
            })
            .collect();
        let mut n = 0;
        for id in doomed {
            if self.unbind(id) {
                n += 1;
            }
        }
        let before = self.playbacks.len();
        self.playbacks.retain(|_, p| &p.section != section);
        n + (before - self.playbacks.len())
    }

    /// Play `timeline` over `duration_secs` of wall time, starting on the next tick.
    pub fn play(
        &mut self,
        section: impl Into<ElementId>,
        timeline: Timeline,
        duration_secs: f64,
    ) -> ReelResult<PlaybackId> {
        if !(duration_secs > 0.0 && duration_secs.is_finite()) {
            return Err(ReelError::timeline(format!(
                "auto-play duration must be > 0 (got {duration_secs})"
            )));
        }
        Ok(self.playbacks.insert(Playback {
            section: section.into(),
            timeline,
            duration_secs,
            elapsed_secs: 0.0,
            last_applied: BTreeMap::new(),
        }))
    }

    /// Re-measure every binding: declare pin spacers, then read trigger positions.
    #[tracing::instrument(skip_all, fields(bindings = self.order.len()))]
    pub fn refresh<P: LayoutProbe>(&mut self, probe: &mut P) {
        self.viewport = probe.viewport();
        let vh = self.viewport.height;

        let spacers: Vec<(ElementId, f64)> = self
            .order
            .iter()
            .filter_map(|&id| self.bindings.get(id))
            .filter_map(|s| {
                s.binding
                    .mode
                    .spacer_px(vh)
                    .map(|px| (s.binding.trigger.clone(), px))
            })
            .collect();
        probe.set_pin_spacers(&spacers);

        for &id in &self.order {
            let Some(state) = self.bindings.get_mut(id) else {
                continue;
            };
            state.region = probe
                .element_top(&state.binding.trigger)
                .map(|top| state.binding.mode.region(top, vh));
            if state.region.is_none() {
                tracing::warn!(trigger = %state.binding.trigger, "trigger vanished; binding idle");
            }
            state.dirty = true;
        }

        // A document shorter than the viewport reports a negative distance.
        let max = probe.max_scroll();
        self.max_scroll = if max.is_finite() { max.max(0.0) } else { 0.0 };
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll);
        tracing::debug!(max_scroll = self.max_scroll, "layout refreshed");
    }

    /// Record the current scroll offset (clamped to the document) and return it.
    pub fn set_scroll(&mut self, y: f64) -> f64 {
        self.scroll_y = if y.is_nan() {
            0.0
        } else {
            y.clamp(0.0, self.max_scroll)
        };
        self.scroll_y
    }

    /// Current scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Maximum scroll offset measured by the last refresh.
    pub fn max_scroll(&self) -> f64 {
        self.max_scroll
    }

    /// Viewport measured by the last refresh.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Return `true` when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Return `true` while `id` is registered.
    pub fn contains(&self, id: BindingId) -> bool {
        self.bindings.contains_key(id)
    }

    /// Return `true` while the auto-play `id` is still running.
    pub fn is_playing(&self, id: PlaybackId) -> bool {
        self.playbacks.contains_key(id)
    }

    /// Borrow a registered binding.
    pub fn binding(&self, id: BindingId) -> Option<&ScrollBinding> {
        self.bindings.get(id).map(|s| &s.binding)
    }

    /// Last measured region of a binding.
    pub fn region(&self, id: BindingId) -> Option<ScrollRegion> {
        self.bindings.get(id).and_then(|s| s.region)
    }

    /// Number of timeline evaluations performed for `id`.
    pub fn evaluations(&self, id: BindingId) -> Option<u64> {
        self.bindings.get(id).map(|s| s.evaluations)
    }

    /// Measured pinned regions in registration order.
    pub fn pinned_regions(&self) -> Vec<PinnedRegion> {
        self.order
            .iter()
            .filter_map(|&id| self.bindings.get(id))
            .filter(|s| s.binding.is_pinned())
            .filter_map(|s| {
                s.region.map(|region| PinnedRegion {
                    section: s.binding.section.clone(),
                    trigger: s.binding.trigger.clone(),
                    region,
                    reveal: s.binding.reveal,
                })
            })
            .collect()
    }

    /// Binding and region triggered by `element`, preferring a pinned binding.
    pub fn find_region(&self, element: &ElementId) -> Option<(&ScrollBinding, ScrollRegion)> {
        let mut candidates = self
            .order
            .iter()
            .filter_map(|&id| self.bindings.get(id))
            .filter(|s| &s.binding.trigger == element)
            .filter_map(|s| s.region.map(|r| (&s.binding, r)));
        let first = candidates.next()?;
        if first.0.is_pinned() {
            return Some(first);
        }
        Some(candidates.find(|(b, _)| b.is_pinned()).unwrap_or(first))
    }

    /// Return `true` while some binding is still catching up or an entrance is playing.
    pub fn needs_frame(&self) -> bool {
        if !self.playbacks.is_empty() {
            return true;
        }
        self.bindings.values().any(|s| {
            s.region.is_some_and(|r| {
                s.dirty || !s.filter.is_settled(r.progress(self.scroll_y))
            })
        })
    }

    /// Advance one animation frame by `dt_secs` and push changed values into `sink`.
    ///
    /// Returns the number of values applied.
    pub fn tick<S: PropertySink>(&mut self, dt_secs: f64, sink: &mut S) -> usize {
        let y = self.scroll_y;
        let mut applied = 0;

        for &id in &self.order {
            let Some(state) = self.bindings.get_mut(id) else {
                continue;
            };
            let Some(region) = state.region else {
                continue;
            };

            let left_back = state
                .last_scroll_y
                .is_some_and(|prev| prev > region.start_px && y <= region.start_px);
            if left_back && !state.reset_applied {
                for (target, value) in &state.binding.leave_back {
                    applied += apply_changed(&mut state.last_applied, target, *value, sink);
                }
                state.reset_applied = true;
                tracing::trace!(trigger = %state.binding.trigger, "leave-back reset applied");
            }
            if y > region.start_px {
                state.reset_applied = false;
            }
            state.last_scroll_y = Some(y);

            let displayed = state.filter.update(region.progress(y), dt_secs);
            if !state.dirty && state.last_displayed == Some(displayed) {
                continue;
            }
            state.dirty = false;
            state.last_displayed = Some(displayed);
            state.evaluations += 1;

            for (target, value) in state.binding.timeline.evaluate(displayed) {
                applied += apply_changed(&mut state.last_applied, &target, value, sink);
            }
        }

        let mut finished = Vec::new();
        for (pid, pb) in self.playbacks.iter_mut() {
            pb.elapsed_secs += dt_secs.max(0.0);
            let p = (pb.elapsed_secs / pb.duration_secs).min(1.0);
            for (target, value) in pb.timeline.evaluate(p) {
                applied += apply_changed(&mut pb.last_applied, &target, value, sink);
            }
            if p >= 1.0 {
                finished.push(pid);
            }
        }
        for pid in finished {
            if let Some(pb) = self.playbacks.remove(pid) {
                tracing::debug!(section = %pb.section, "auto-play finished");
                // The entrance wrote over scroll-driven values; make those bindings re-apply.
                for state in self.bindings.values_mut() {
                    if state.binding.section == pb.section {
                        state.dirty = true;
                        state.last_applied.clear();
                    }
                }
            }
        }

        tracing::trace!(scroll_y = y, applied, "tick");
        applied
    }
}

fn apply_changed<S: PropertySink>(
    last: &mut BTreeMap<TargetProperty, f64>,
    target: &TargetProperty,
    value: f64,
    sink: &mut S,
) -> usize {
    if last.get(target) == Some(&value) {
        return 0;
    }
    sink.apply(target, value);
    last.insert(target.clone(), value);
    1
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/controller.rs"]
mod tests;
