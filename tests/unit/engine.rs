use super::*;
use crate::{
    choreography::landing::landing_layout,
    scroll::layout::StackedLayout,
    scroll::sink::InMemorySink,
};

fn desktop() -> Viewport {
    Viewport::new(1440.0, 900.0).unwrap()
}

fn engine() -> Engine<StackedLayout> {
    let config = EngineConfig::default();
    let sections = landing_page(desktop(), &config).unwrap();
    let layout = landing_layout(desktop(), &sections).unwrap();
    Engine::mount(config, Some(layout), LandingPage).unwrap()
}

fn settled() -> Engine<StackedLayout> {
    let mut e = engine();
    let mut sink = InMemorySink::new();
    e.init(0.0);
    e.tick(0.0, &mut sink);
    e.tick(0.5, &mut sink);
    e
}

#[test]
fn missing_probe_disables_everything() {
    let mut e: Engine<StackedLayout> =
        Engine::mount(EngineConfig::default(), None, LandingPage).unwrap();
    let mut sink = InMemorySink::new();
    assert!(!e.is_enabled());
    e.init(0.0);
    assert_eq!(e.tick(1.0, &mut sink), FrameReport::default());
    assert!(sink.applied().is_empty());
    assert!(e.scroll_to_section(&"hero".into()).is_none());
    assert!(e.snap_ranges().is_empty());
    assert_eq!(e.on_scroll(120.0), 120.0);
    assert!(!e.unmount_section(&"hero".into()));
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = EngineConfig::default();
    config.snap.tolerance = -1.0;
    let sections = landing_page(desktop(), &EngineConfig::default()).unwrap();
    let layout = landing_layout(desktop(), &sections).unwrap();
    assert!(Engine::mount(config, Some(layout), LandingPage).is_err());
}

#[test]
fn snap_installs_after_settle_delay() {
    let mut e = engine();
    let mut sink = InMemorySink::new();
    assert_eq!(e.mounted_sections().len(), 9);
    e.init(0.0);
    assert!(!e.tick(0.0, &mut sink).snap_installed);
    assert!(!e.tick(0.49, &mut sink).snap_installed);
    assert!(e.snap_ranges().is_empty());
    assert!(e.tick(0.5, &mut sink).snap_installed);
    assert_eq!(e.snap_phase(), SnapPhase::Installed);

    let ranges = e.snap_ranges();
    assert_eq!(ranges.len(), 7);
    assert!(ranges.windows(2).all(|w| w[0].start < w[1].start));
}

#[test]
fn scroll_end_snaps_to_nearest_center() {
    let mut e = settled();
    let mut sink = InMemorySink::new();
    e.on_scroll(300.0);
    let target = e.on_scroll_end(1.0).unwrap();
    // Hero pins for 1.3 viewport heights; its center is half of that.
    assert!((target - 585.0).abs() < 1e-6);
    assert!(e.is_snapping());

    e.tick(1.1, &mut sink);
    let report = e.tick(1.4, &mut sink);
    assert!(report.snapping);
    assert!((report.scroll_y - 585.0).abs() < 1e-6);
    assert!(!e.is_snapping());

    // Already centered: nothing to do.
    assert!(e.on_scroll_end(2.0).is_none());
}

#[test]
fn user_scroll_cancels_snap_tween() {
    let mut e = settled();
    let mut sink = InMemorySink::new();
    e.on_scroll(300.0);
    e.on_scroll_end(1.0).unwrap();
    e.tick(1.05, &mut sink);
    e.on_scroll(1000.0);
    assert!(!e.is_snapping());
    let report = e.tick(1.1, &mut sink);
    assert!(!report.snapping);
    assert_eq!(report.scroll_y, 1000.0);
}

#[test]
fn free_zone_is_never_snapped() {
    let mut e = settled();
    let max = e.controller().unwrap().max_scroll();
    let ranges = e.snap_ranges();
    // Between the features pin and the deep-feature pin sits the unpinned three-up grid.
    let gap = (ranges[1].end + ranges[2].start) / 2.0;
    assert_eq!(e.snap_to(gap), gap);
    e.on_scroll(gap * max);
    assert!(e.on_scroll_end(3.0).is_none());
}

#[test]
fn resize_rebuilds_after_debounce() {
    let mut e = settled();
    let mut sink = InMemorySink::new();
    let before = e.controller().unwrap().max_scroll();

    e.probe_mut()
        .unwrap()
        .set_viewport(Viewport::new(390.0, 844.0).unwrap());
    e.on_resize(2.0);
    assert!(e.needs_frame());
    assert!(!e.tick(2.3, &mut sink).rebuilt);
    let report = e.tick(2.5, &mut sink);
    assert!(report.rebuilt);
    assert!(e.snap_ranges().is_empty());
    assert_eq!(e.mounted_sections().len(), 9);
    assert!(e.mounted_sections().iter().all(|m| m.entrance.is_none()));
    assert!(e.controller().unwrap().max_scroll() < before);

    assert!(e.tick(3.0, &mut sink).snap_installed);
    assert_eq!(e.snap_ranges().len(), 7);
}

#[test]
fn unmounting_a_pinned_section_rebuilds_snap() {
    let mut e = settled();
    let mut sink = InMemorySink::new();
    assert!(e.unmount_section(&"gallery".into()));
    assert!(!e.unmount_section(&"gallery".into()));
    assert!(e.snap_ranges().is_empty());
    assert_eq!(e.controller().unwrap().pinned_regions().len(), 6);

    e.tick(4.0, &mut sink);
    assert!(e.tick(4.5, &mut sink).snap_installed);
    assert_eq!(e.snap_ranges().len(), 6);
}

#[test]
fn navigation_uses_reveal_fraction() {
    let mut e = settled();
    let hero = e.scroll_to_section(&"hero".into()).unwrap();
    assert!((hero.offset_px - 585.0).abs() < 1e-9);
    let footer = e.scroll_to_section(&"footer".into()).unwrap();
    assert_eq!(footer.source, crate::navigation::resolver::TargetSource::Measured);
}

#[test]
fn closure_sources_are_accepted() {
    let config = EngineConfig::default();
    let source = |vp: Viewport, c: &EngineConfig| -> ReelResult<Vec<SectionChoreography>> {
        Ok(landing_page(vp, c)?.into_iter().take(2).collect())
    };
    let sections = source(desktop(), &config).unwrap();
    let layout = landing_layout(desktop(), &sections).unwrap();
    let mut e = Engine::mount(config, Some(layout), source).unwrap();
    let mut sink = InMemorySink::new();
    e.init(0.0);
    e.tick(0.5, &mut sink);
    assert_eq!(e.snap_ranges().len(), 2);

    e.unmount();
    assert!(!e.is_enabled());
}
