use crate::{
    choreography::landing::landing_page,
    choreography::section::{MountedSection, SectionChoreography},
    config::EngineConfig,
    foundation::core::{ElementId, Viewport},
    foundation::error::ReelResult,
    navigation::resolver::{NavigationResolver, ScrollTarget},
    scroll::controller::ScrollController,
    scroll::layout::LayoutProbe,
    scroll::sink::PropertySink,
    snap::coordinator::{SnapCoordinator, SnapPhase},
    snap::range::PinnedRange,
    snap::tween::SnapTween,
};

/// Produces the page's section choreographies for a viewport.
///
/// Called on mount and again after every debounced resize, since keyframe lengths resolve
/// against the viewport.
pub trait SectionSource {
    /// Build every section in document order.
    fn sections(
        &self,
        viewport: Viewport,
        config: &EngineConfig,
    ) -> ReelResult<Vec<SectionChoreography>>;
}

/// The nine-section landing page.
#[derive(Clone, Copy, Debug, Default)]
pub struct LandingPage;

impl SectionSource for LandingPage {
    fn sections(
        &self,
        viewport: Viewport,
        config: &EngineConfig,
    ) -> ReelResult<Vec<SectionChoreography>> {
        landing_page(viewport, config)
    }
}

impl<F> SectionSource for F
where
    F: Fn(Viewport, &EngineConfig) -> ReelResult<Vec<SectionChoreography>>,
{
    fn sections(
        &self,
        viewport: Viewport,
        config: &EngineConfig,
    ) -> ReelResult<Vec<SectionChoreography>> {
        self(viewport, config)
    }
}

/// Summary of one [`Engine::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct FrameReport {
    /// Scroll offset after the frame.
    pub scroll_y: f64,
    /// Number of property values pushed to the sink.
    pub applied: usize,
    /// A snap tween moved the scroll position this frame.
    pub snapping: bool,
    /// The snap function was (re)installed this frame.
    pub snap_installed: bool,
    /// The page was rebuilt after a resize this frame.
    pub rebuilt: bool,
}

struct Active<P> {
    probe: P,
    controller: ScrollController,
    snap: SnapCoordinator,
    sections: Vec<SectionChoreography>,
    mounted: Vec<MountedSection>,
    tween: Option<SnapTween>,
    resize_due: Option<f64>,
    reschedule_snap: bool,
    last_tick: Option<f64>,
}

/// Page-shell entry point: owns the layout probe, the controller and the snap coordinator.
///
/// An engine mounted without a layout probe is disabled: every call is a no-op and the page is
/// expected to render as static content.
pub struct Engine<P, S = LandingPage> {
    config: EngineConfig,
    source: S,
    active: Option<Active<P>>,
}

impl<P: LayoutProbe, S: SectionSource> Engine<P, S> {
    /// Build and mount every section from `source`.
    ///
    /// Sections whose elements are missing are skipped. Passing `None` for `probe` yields a
    /// disabled engine.
    #[tracing::instrument(skip_all)]
    pub fn mount(config: EngineConfig, probe: Option<P>, source: S) -> ReelResult<Self> {
        config.validate()?;
        let Some(mut probe) = probe else {
            tracing::warn!("layout probe unavailable; choreography disabled");
            return Ok(Self {
                config,
                source,
                active: None,
            });
        };

        let viewport = probe.viewport();
        let sections = source.sections(viewport, &config)?;
        let mut controller = ScrollController::new(viewport);
        controller.refresh(&mut probe);
        let mounted = mount_all(&sections, &mut controller, &mut probe);
        tracing::debug!(
            sections = sections.len(),
            mounted = mounted.len(),
            "page mounted"
        );

        let snap = SnapCoordinator::new(config.snap.clone(), config.settle_delay_secs());
        Ok(Self {
            config,
            source,
            active: Some(Active {
                probe,
                controller,
                snap,
                sections,
                mounted,
                tween: None,
                resize_due: None,
                reschedule_snap: false,
                last_tick: None,
            }),
        })
    }

    /// Return `true` unless the engine was mounted without a layout probe.
    pub fn is_enabled(&self) -> bool {
        self.active.is_some()
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start the settle delay after which the snap function is installed.
    pub fn init(&mut self, now_secs: f64) {
        if let Some(a) = &mut self.active {
            a.snap.schedule(now_secs);
        }
    }

    /// User scroll to `y`. Cancels an in-flight snap tween. Returns the clamped offset.
    pub fn on_scroll(&mut self, y: f64) -> f64 {
        let Some(a) = &mut self.active else {
            return y;
        };
        if a.tween.take().is_some() {
            tracing::trace!("snap tween cancelled by user scroll");
        }
        a.controller.set_scroll(y)
    }

    /// Scrolling came to rest; start a snap tween if the position is inside a pinned zone.
    ///
    /// Returns the tween's target offset.
    pub fn on_scroll_end(&mut self, now_secs: f64) -> Option<f64> {
        let a = self.active.as_mut()?;
        let tween = a.snap.plan(
            now_secs,
            a.controller.scroll_y(),
            a.controller.max_scroll(),
        )?;
        tracing::debug!(
            from = a.controller.scroll_y(),
            to = tween.target(),
            duration = tween.duration(),
            "snap tween started"
        );
        a.tween = Some(tween);
        Some(tween.target())
    }

    /// The viewport changed; the page is rebuilt once resizes stop for the debounce period.
    ///
    /// Update the probe (see [`Engine::probe_mut`]) before calling this.
    pub fn on_resize(&mut self, now_secs: f64) {
        if let Some(a) = &mut self.active {
            a.resize_due = Some(now_secs + self.config.resize_debounce_secs());
        }
    }

    /// Advance one animation frame at wall time `now_secs`.
    pub fn tick<K: PropertySink>(&mut self, now_secs: f64, sink: &mut K) -> FrameReport {
        let Some(a) = &mut self.active else {
            return FrameReport::default();
        };
        let mut report = FrameReport::default();

        if a.resize_due.is_some_and(|due| now_secs >= due) {
            a.resize_due = None;
            match rebuild(a, &self.source, &self.config) {
                Ok(()) => {
                    report.rebuilt = true;
                    a.reschedule_snap = true;
                }
                Err(err) => tracing::warn!(%err, "rebuild after resize failed; keeping old layout"),
            }
        }
        if a.reschedule_snap {
            a.reschedule_snap = false;
            a.snap.schedule(now_secs);
        }
        report.snap_installed = a.snap.poll(now_secs, &mut a.controller, &mut a.probe);

        if let Some(tween) = a.tween {
            a.controller.set_scroll(tween.sample(now_secs));
            report.snapping = true;
            if tween.is_done(now_secs) {
                a.tween = None;
            }
        }

        let dt = a.last_tick.map_or(0.0, |last| (now_secs - last).max(0.0));
        a.last_tick = Some(now_secs);
        report.applied = a.controller.tick(dt, sink);
        report.scroll_y = a.controller.scroll_y();
        report
    }

    /// Resolve where navigating to `id` should land.
    pub fn scroll_to_section(&mut self, id: &ElementId) -> Option<ScrollTarget> {
        let a = self.active.as_mut()?;
        NavigationResolver::resolve(&mut a.controller, &mut a.probe, id)
    }

    /// Tear down one section: its bindings and entrance stop immediately and the snap function
    /// is rebuilt on the next tick.
    pub fn unmount_section(&mut self, id: &ElementId) -> bool {
        let Some(a) = &mut self.active else {
            return false;
        };
        let removed = a.controller.unbind_section(id);
        let before = a.mounted.len();
        a.mounted.retain(|m| &m.id != id);
        a.sections.retain(|s| &s.id != id);
        if before == a.mounted.len() && removed == 0 {
            return false;
        }
        a.controller.refresh(&mut a.probe);
        a.snap.teardown();
        a.reschedule_snap = true;
        tracing::debug!(section = %id, removed, "section unmounted");
        true
    }

    /// Tear down everything: all bindings, entrances and the snap function.
    pub fn unmount(&mut self) {
        if let Some(mut a) = self.active.take() {
            for m in &a.mounted {
                a.controller.unbind_section(&m.id);
            }
            a.snap.teardown();
            tracing::debug!("engine unmounted");
        }
    }

    /// Pinned ranges of the installed snap function.
    pub fn snap_ranges(&self) -> Vec<PinnedRange> {
        self.active
            .as_ref()
            .and_then(|a| a.snap.snap_fn())
            .map(|s| s.ranges().to_vec())
            .unwrap_or_default()
    }

    /// Snap `value` with the installed function (identity when none is installed).
    pub fn snap_to(&self, value: f64) -> f64 {
        self.active
            .as_ref()
            .map_or(value, |a| a.snap.snap_to(value))
    }

    /// Current snap lifecycle phase.
    pub fn snap_phase(&self) -> SnapPhase {
        self.active
            .as_ref()
            .map_or(SnapPhase::Idle, |a| a.snap.phase())
    }

    /// Return `true` while a snap tween is running.
    pub fn is_snapping(&self) -> bool {
        self.active.as_ref().is_some_and(|a| a.tween.is_some())
    }

    /// Return `true` while another frame would change something.
    pub fn needs_frame(&self) -> bool {
        self.active.as_ref().is_some_and(|a| {
            a.tween.is_some()
                || a.resize_due.is_some()
                || a.reschedule_snap
                || matches!(a.snap.phase(), SnapPhase::Settling { .. })
                || a.controller.needs_frame()
        })
    }

    /// Mounted sections in document order.
    pub fn mounted_sections(&self) -> &[MountedSection] {
        match &self.active {
            Some(a) => &a.mounted,
            None => &[],
        }
    }

    /// Scroll controller, when enabled.
    pub fn controller(&self) -> Option<&ScrollController> {
        self.active.as_ref().map(|a| &a.controller)
    }

    /// Layout probe, when enabled.
    pub fn probe(&self) -> Option<&P> {
        self.active.as_ref().map(|a| &a.probe)
    }

    /// Mutable layout probe, e.g. to apply a new viewport before [`Engine::on_resize`].
    pub fn probe_mut(&mut self) -> Option<&mut P> {
        self.active.as_mut().map(|a| &mut a.probe)
    }
}

fn mount_all<P: LayoutProbe>(
    sections: &[SectionChoreography],
    controller: &mut ScrollController,
    probe: &mut P,
) -> Vec<MountedSection> {
    sections
        .iter()
        .filter_map(|s| s.mount(controller, probe))
        .collect()
}

#[tracing::instrument(skip_all)]
fn rebuild<P: LayoutProbe, S: SectionSource>(
    a: &mut Active<P>,
    source: &S,
    config: &EngineConfig,
) -> ReelResult<()> {
    let viewport = a.probe.viewport();
    let live: Vec<&ElementId> = a.sections.iter().map(|s| &s.id).collect();
    let mut sections: Vec<SectionChoreography> = source
        .sections(viewport, config)?
        .into_iter()
        .filter(|s| live.contains(&&s.id))
        .collect();
    // Entrances already played on the first mount.
    for s in &mut sections {
        s.entrance = None;
    }

    for m in &a.mounted {
        a.controller.unbind_section(&m.id);
    }
    a.snap.teardown();
    a.tween = None;
    a.controller.refresh(&mut a.probe);
    a.mounted = mount_all(&sections, &mut a.controller, &mut a.probe);
    a.sections = sections;
    tracing::debug!(
        width = viewport.width,
        height = viewport.height,
        mounted = a.mounted.len(),
        "page rebuilt"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
