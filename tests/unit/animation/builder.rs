use super::*;
use crate::foundation::core::{px, vw};

fn viewport() -> Viewport {
    Viewport::new(1000.0, 800.0).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn relative_positions_chain_off_previous_end() {
    let b = TimelineBuilder::new(viewport())
        .from_to(
            "rule",
            &[(Property::ScaleY, px(0.0))],
            &[(Property::ScaleY, px(1.0))],
            Position::At(0.0),
            0.6,
            Ease::OutCubic,
        )
        .from_to(
            "tile",
            &[(Property::X, vw(12.0))],
            &[(Property::X, px(0.0))],
            Position::Relative(-0.3),
            0.9,
            Ease::OutCubic,
        );
    assert!(close(b.length(), 1.2));

    let tl = b.build().unwrap();
    let tile = tl
        .segments()
        .iter()
        .find(|s| s.target.element.as_str() == "tile")
        .unwrap();
    assert!(close(tile.start, 0.25));
    assert!(close(tile.duration, 0.75));
    assert!(close(tile.from, 120.0));
}

#[test]
fn stagger_offsets_each_target_and_moves_cursor() {
    let (tl, length) = TimelineBuilder::new(viewport())
        .stagger(
            ["a", "b", "c"],
            &[(Property::Opacity, px(0.0))],
            &[(Property::Opacity, px(1.0))],
            Position::At(0.0),
            0.5,
            0.25,
            Ease::Linear,
        )
        .from_to(
            "d",
            &[(Property::Opacity, px(0.0))],
            &[(Property::Opacity, px(1.0))],
            Position::Relative(0.0),
            1.0,
            Ease::Linear,
        )
        .build_with_length()
        .unwrap();

    assert!(close(length, 2.0));
    let starts: Vec<f64> = tl.segments().iter().map(|s| s.start).collect();
    assert!(close(starts[0], 0.0));
    assert!(close(starts[1], 0.125));
    assert!(close(starts[2], 0.25));
    assert!(close(starts[3], 0.5));
}

#[test]
fn span_pads_scroll_timelines_to_unit_length() {
    let tl = TimelineBuilder::new(viewport())
        .span(1.0)
        .from_to(
            "a",
            &[(Property::X, px(0.0))],
            &[(Property::X, px(10.0))],
            Position::At(0.0),
            0.3,
            Ease::Linear,
        )
        .build()
        .unwrap();
    assert!(close(tl.segments()[0].duration, 0.3));
}

#[test]
fn missing_from_value_is_reported_at_build() {
    let res = TimelineBuilder::new(viewport())
        .from_to(
            "a",
            &[(Property::X, px(0.0))],
            &[(Property::Opacity, px(1.0))],
            Position::At(0.0),
            1.0,
            Ease::Linear,
        )
        .build();
    assert!(res.is_err());
}

#[test]
fn zero_duration_is_rejected() {
    let res = TimelineBuilder::new(viewport())
        .from_to(
            "a",
            &[(Property::X, px(0.0))],
            &[(Property::X, px(1.0))],
            Position::At(0.0),
            0.0,
            Ease::Linear,
        )
        .build();
    assert!(res.is_err());
}

#[test]
fn empty_builder_yields_empty_timeline() {
    assert!(TimelineBuilder::new(viewport()).build().unwrap().is_empty());
}
