use super::*;
use crate::{
    animation::timeline::Timeline,
    foundation::core::Viewport,
    scroll::binding::ScrollBinding,
    scroll::layout::StackedLayout,
};

fn setup() -> (StackedLayout, ScrollController) {
    let vp = Viewport::new(800.0, 1000.0).unwrap();
    let layout = StackedLayout::new(vp)
        .section("hero", 1.0)
        .unwrap()
        .section("cards", 1.2)
        .unwrap()
        .section("gallery", 1.0)
        .unwrap()
        .section("footer", 0.9)
        .unwrap()
        .element("cards.heading", "cards", 0.1)
        .unwrap();
    (layout, ScrollController::new(vp))
}

#[test]
fn pinned_section_lands_mid_pin() {
    let (mut layout, mut ctl) = setup();
    ctl.bind(
        ScrollBinding::pinned("hero", 1.3, 0.0, Timeline::new()).unwrap(),
        &mut layout,
    );
    let t = NavigationResolver::resolve(&mut ctl, &mut layout, &"hero".into()).unwrap();
    assert_eq!(t.source, TargetSource::Pinned);
    assert_eq!(t.offset_px, 650.0);
}

#[test]
fn explicit_reveal_fraction_overrides_default() {
    let (mut layout, mut ctl) = setup();
    ctl.bind(
        ScrollBinding::pinned("hero", 1.3, 0.0, Timeline::new()).unwrap(),
        &mut layout,
    );
    let gallery = ScrollBinding::pinned("gallery", 1.0, 0.3, Timeline::new())
        .unwrap()
        .with_reveal(0.25)
        .unwrap();
    ctl.bind(gallery, &mut layout);
    let t = NavigationResolver::resolve(&mut ctl, &mut layout, &"gallery".into()).unwrap();
    // hero 1000 + spacer 1300 + cards 1200.
    assert_eq!(t.offset_px, 3500.0 + 250.0);
}

#[test]
fn threshold_binding_lands_at_region_start() {
    let (mut layout, mut ctl) = setup();
    let heading =
        ScrollBinding::reveal("cards", "cards.heading", 0.8, 0.55, 0.5, Timeline::new()).unwrap();
    ctl.bind(heading, &mut layout);
    let t = NavigationResolver::resolve(&mut ctl, &mut layout, &"cards.heading".into()).unwrap();
    assert_eq!(t.source, TargetSource::Region);
    assert_eq!(t.offset_px, 1100.0 - 800.0);
}

#[test]
fn unregistered_section_falls_back_to_measured_top() {
    let (mut layout, mut ctl) = setup();
    ctl.bind(
        ScrollBinding::pinned("hero", 1.3, 0.0, Timeline::new()).unwrap(),
        &mut layout,
    );
    let t = NavigationResolver::resolve(&mut ctl, &mut layout, &"footer".into()).unwrap();
    assert_eq!(t.source, TargetSource::Measured);
    assert_eq!(t.offset_px, layout.element_top(&"footer".into()).unwrap());
    assert_eq!(t.offset_px, 1000.0 + 1300.0 + 1200.0 + 1000.0);
}

#[test]
fn fallback_works_before_anything_is_bound() {
    let (mut layout, mut ctl) = setup();
    let t = NavigationResolver::resolve(&mut ctl, &mut layout, &"cards".into()).unwrap();
    assert_eq!(t.offset_px, 1000.0);
    assert!(NavigationResolver::resolve(&mut ctl, &mut layout, &"nope".into()).is_none());
}
