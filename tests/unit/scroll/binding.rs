use super::*;

#[test]
fn pinned_region_spans_pin_distance() {
    let mode = TriggerMode::PinnedScrub { distance_vh: 1.3 };
    let r = mode.region(2000.0, 1000.0);
    assert_eq!(r.start_px, 2000.0);
    assert_eq!(r.end_px, 3300.0);
    assert_eq!(mode.spacer_px(1000.0), Some(1300.0));

    assert_eq!(r.progress(1000.0), 0.0);
    assert_eq!(r.progress(2650.0), 0.5);
    assert_eq!(r.progress(9000.0), 1.0);
}

#[test]
fn threshold_region_tracks_viewport_crossing() {
    let mode = TriggerMode::ThresholdReveal {
        start: 0.85,
        end: 0.55,
    };
    let r = mode.region(5000.0, 1000.0);
    // Element top at 85% of the viewport when scrolled to 4150.
    assert_eq!(r.start_px, 4150.0);
    assert_eq!(r.end_px, 4450.0);
    assert_eq!(mode.spacer_px(1000.0), None);
    assert!((r.progress(4300.0) - 0.5).abs() < 1e-12);
}

#[test]
fn degenerate_region_steps() {
    let r = ScrollRegion {
        start_px: 100.0,
        end_px: 100.0,
    };
    assert_eq!(r.progress(99.0), 0.0);
    assert_eq!(r.progress(100.0), 1.0);
}

#[test]
fn reveal_fraction_defaults_by_mode() {
    let pinned = ScrollBinding::pinned("hero", 1.3, 0.6, Timeline::new()).unwrap();
    assert_eq!(pinned.reveal_fraction(), 0.5);

    let reveal =
        ScrollBinding::reveal("footer", "footer.cta", 0.85, 0.6, 0.5, Timeline::new()).unwrap();
    assert_eq!(reveal.reveal_fraction(), 0.0);
    assert!(!reveal.is_pinned());

    let tuned = pinned.with_reveal(0.25).unwrap();
    assert_eq!(tuned.reveal_fraction(), 0.25);
}

#[test]
fn invalid_bindings_are_rejected() {
    assert!(ScrollBinding::pinned("hero", 0.0, 0.6, Timeline::new()).is_err());
    assert!(ScrollBinding::pinned("hero", 1.3, -0.1, Timeline::new()).is_err());
    assert!(ScrollBinding::reveal("s", "s.a", 0.5, 0.8, 0.5, Timeline::new()).is_err());
    assert!(ScrollBinding::reveal("s", "other.a", 0.8, 0.5, 0.5, Timeline::new()).is_err());
    let pinned = ScrollBinding::pinned("hero", 1.3, 0.6, Timeline::new()).unwrap();
    assert!(pinned.with_reveal(1.5).is_err());
}
