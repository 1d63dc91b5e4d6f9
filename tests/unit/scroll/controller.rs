use super::*;
use crate::{
    animation::ease::Ease,
    animation::timeline::{Property, Segment},
    scroll::layout::StackedLayout,
    scroll::sink::InMemorySink,
};

fn viewport() -> Viewport {
    Viewport::new(1000.0, 1000.0).unwrap()
}

fn layout() -> StackedLayout {
    StackedLayout::new(viewport())
        .section("a", 1.0)
        .unwrap()
        .section("b", 1.0)
        .unwrap()
        .section("c", 1.0)
        .unwrap()
        .element("c.card", "c", 0.5)
        .unwrap()
}

fn x(element: &str) -> TargetProperty {
    TargetProperty::new(element, Property::X)
}

fn linear(element: &str, from: f64, to: f64) -> Timeline {
    Timeline::from_segments(vec![Segment {
        target: x(element),
        from,
        to,
        start: 0.0,
        duration: 1.0,
        ease: Ease::Linear,
    }])
    .unwrap()
}

fn pinned(section: &str, scrub: f64) -> ScrollBinding {
    ScrollBinding::pinned(section, 1.0, scrub, linear(section, 0.0, 100.0)).unwrap()
}

#[test]
fn missing_trigger_is_skipped() {
    let mut probe = layout();
    let mut ctl = ScrollController::new(viewport());
    assert!(ctl.bind(pinned("zzz", 0.0), &mut probe).is_none());
    assert!(ctl.is_empty());
}

#[test]
fn pins_add_spacers_and_shift_later_regions() {
    let mut probe = layout();
    let mut ctl = ScrollController::new(viewport());
    let a = ctl.bind(pinned("a", 0.0), &mut probe).unwrap();
    let b = ctl.bind(pinned("b", 0.0), &mut probe).unwrap();

    assert_eq!(ctl.region(a).unwrap().start_px, 0.0);
    assert_eq!(ctl.region(a).unwrap().end_px, 1000.0);
    // `b` sits below `a` plus a's 1000px spacer.
    assert_eq!(ctl.region(b).unwrap().start_px, 2000.0);
    assert_eq!(ctl.region(b).unwrap().end_px, 3000.0);
    // 3 sections + 2 spacers - viewport.
    assert_eq!(ctl.max_scroll(), 4000.0);

    let regions = ctl.pinned_regions();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].section.as_str(), "a");
    assert_eq!(regions[1].section.as_str(), "b");
}

#[test]
fn unscrubbed_progress_follows_scroll_and_diffs_output() {
    let mut probe = layout();
    let mut ctl = ScrollController::new(viewport());
    ctl.bind(pinned("a", 0.0), &mut probe).unwrap();
    let mut sink = InMemorySink::new();

    assert_eq!(ctl.tick(1.0 / 60.0, &mut sink), 1);
    assert_eq!(sink.last(&x("a")), Some(0.0));

    ctl.set_scroll(250.0);
    ctl.tick(1.0 / 60.0, &mut sink);
    assert_eq!(sink.last(&x("a")), Some(25.0));

    // Unchanged scroll applies nothing new.
    sink.drain();
    assert_eq!(ctl.tick(1.0 / 60.0, &mut sink), 0);
    assert!(sink.applied().is_empty());
    assert!(!ctl.needs_frame());
}

#[test]
fn scrub_lags_behind_scroll() {
    let mut probe = layout();
    let mut ctl = ScrollController::new(viewport());
    let id = ctl.bind(pinned("a", 0.6), &mut probe).unwrap();
    let mut sink = InMemorySink::new();
    ctl.tick(0.0, &mut sink);

    ctl.set_scroll(1000.0);
    ctl.tick(1.0 / 60.0, &mut sink);
    let first = sink.last(&x("a")).unwrap();
    assert!(first > 0.0 && first < 100.0);
    assert!(ctl.needs_frame());

    for _ in 0..600 {
        ctl.tick(1.0 / 60.0, &mut sink);
    }
    assert_eq!(sink.last(&x("a")), Some(100.0));
    assert!(!ctl.needs_frame());
    assert!(ctl.evaluations(id).unwrap() > 2);
}

#[test]
fn unbound_timeline_is_never_evaluated_again() {
    let mut probe = layout();
    let mut ctl = ScrollController::new(viewport());
    let a = ctl.bind(pinned("a", 0.6), &mut probe).unwrap();
    ctl.bind(pinned("b", 0.0), &mut probe).unwrap();
    let mut sink = InMemorySink::new();
    ctl.tick(0.0, &mut sink);

    // Leave `a` mid-catch-up, then tear it down.
    ctl.set_scroll(800.0);
    ctl.tick(1.0 / 60.0, &mut sink);
    assert!(ctl.unbind(a));
    assert!(!ctl.contains(a));
    assert_eq!(ctl.evaluations(a), None);

    sink.drain();
    for step in 0..120 {
        ctl.set_scroll(step as f64 * 20.0);
        ctl.tick(1.0 / 60.0, &mut sink);
    }
    assert!(sink.applied().iter().all(|v| v.target.element.as_str() != "a"));
    assert!(!ctl.unbind(a));
}

#[test]
fn unbind_section_removes_bindings_and_playbacks() {
    let mut probe = layout();
    let mut ctl = ScrollController::new(viewport());
    ctl.bind(pinned("a", 0.0), &mut probe).unwrap();
    ctl.bind(pinned("b", 0.0), &mut probe).unwrap();
    let pb = ctl.play("a", linear("a", 5.0, 6.0), 1.0).unwrap();

    assert_eq!(ctl.unbind_section(&"a".into()), 2);
    assert!(!ctl.is_playing(pb));
    assert_eq!(ctl.len(), 1);

    ctl.refresh(&mut probe);
    assert_eq!(ctl.pinned_regions()[0].region.start_px, 1000.0);
}

#[test]
fn leave_back_reset_applies_once_per_crossing() {
    let mut probe = layout();
    let mut ctl = ScrollController::new(viewport());
    let opacity = TargetProperty::new("b", Property::Opacity);
    let binding = pinned("b", 0.0).with_leave_back(vec![(opacity.clone(), 1.0)]);
    ctl.bind(binding, &mut probe).unwrap();
    // Only `b` is pinned, so it starts right after `a`.
    let start = 1000.0;
    let mut sink = InMemorySink::new();

    ctl.set_scroll(start + 500.0);
    ctl.tick(0.0, &mut sink);
    assert_eq!(sink.last(&opacity), None);

    ctl.set_scroll(start - 10.0);
    ctl.tick(0.0, &mut sink);
    assert_eq!(sink.last(&opacity), Some(1.0));
    let count = |s: &InMemorySink| s.applied().iter().filter(|v| v.target == opacity).count();
    assert_eq!(count(&sink), 1);

    // Staying above the start, even moving further up, does not re-apply.
    for y in [start - 20.0, start - 400.0, start] {
        ctl.set_scroll(y);
        ctl.tick(0.0, &mut sink);
    }
    assert_eq!(count(&sink), 1);
}

#[test]
fn playback_runs_to_completion_then_stops() {
    let mut probe = layout();
    let mut ctl = ScrollController::new(viewport());
    ctl.refresh(&mut probe);
    let pb = ctl.play("a", linear("a.rule", 0.0, 1.0), 2.0).unwrap();
    let mut sink = InMemorySink::new();
    let rule = x("a.rule");

    ctl.tick(0.0, &mut sink);
    assert_eq!(sink.last(&rule), Some(0.0));
    ctl.tick(1.0, &mut sink);
    assert_eq!(sink.last(&rule), Some(0.5));
    assert!(ctl.needs_frame());
    ctl.tick(1.5, &mut sink);
    assert_eq!(sink.last(&rule), Some(1.0));
    assert!(!ctl.is_playing(pb));
    assert!(ctl.play("a", Timeline::new(), 0.0).is_err());
}

#[test]
fn find_region_prefers_pinned_binding() {
    let mut probe = layout();
    let mut ctl = ScrollController::new(viewport());
    let reveal = ScrollBinding::reveal("c", "c", 0.9, 0.5, 0.0, Timeline::new()).unwrap();
    ctl.bind(reveal, &mut probe).unwrap();
    ctl.bind(pinned("c", 0.0), &mut probe).unwrap();

    let (binding, region) = ctl.find_region(&"c".into()).unwrap();
    assert!(binding.is_pinned());
    assert_eq!(region.start_px, 2000.0);

    let card = ScrollBinding::reveal("c", "c.card", 0.85, 0.55, 0.0, Timeline::new()).unwrap();
    ctl.bind(card, &mut probe).unwrap();
    let (binding, region) = ctl.find_region(&"c.card".into()).unwrap();
    assert!(!binding.is_pinned());
    assert_eq!(region.start_px, 2500.0 - 850.0);
    assert!(ctl.find_region(&"a".into()).is_none());
}

struct ShortDocument {
    max: f64,
}

impl LayoutProbe for ShortDocument {
    fn viewport(&self) -> Viewport {
        Viewport::new(800.0, 900.0).unwrap()
    }

    fn element_top(&self, id: &ElementId) -> Option<f64> {
        (id.as_str() == "a").then_some(0.0)
    }

    fn max_scroll(&self) -> f64 {
        self.max
    }

    fn set_pin_spacers(&mut self, _spacers: &[(ElementId, f64)]) {}
}

#[test]
fn document_shorter_than_viewport_has_nothing_to_scroll() {
    for max in [600.0 - 900.0, f64::NAN, f64::NEG_INFINITY] {
        let mut probe = ShortDocument { max };
        let mut ctl = ScrollController::new(probe.viewport());
        ctl.bind(pinned("a", 0.0), &mut probe);
        ctl.refresh(&mut probe);
        assert_eq!(ctl.max_scroll(), 0.0);
        assert_eq!(ctl.set_scroll(250.0), 0.0);
        assert_eq!(ctl.set_scroll(-10.0), 0.0);
    }
}
