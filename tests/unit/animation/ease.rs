use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn out_curves_decelerate() {
    // Front-loaded: more than half the distance is covered by the midpoint.
    assert!(Ease::OutCubic.apply(0.5) > 0.5);
    assert!(Ease::InCubic.apply(0.5) < 0.5);
}

#[test]
fn power_aliases_deserialize() {
    let e: Ease = serde_json::from_str("\"power2.out\"").unwrap();
    assert_eq!(e, Ease::OutCubic);
    let e: Ease = serde_json::from_str("\"none\"").unwrap();
    assert_eq!(e, Ease::Linear);
    let e: Ease = serde_json::from_str("\"InQuad\"").unwrap();
    assert_eq!(e, Ease::InQuad);
}

#[test]
fn in_out_curves_are_point_symmetric() {
    for ease in [Ease::InOutQuad, Ease::InOutCubic] {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-12);
        for t in [0.1, 0.3, 0.45] {
            assert!((ease.apply(t) + ease.apply(1.0 - t) - 1.0).abs() < 1e-12);
        }
    }
    assert!((Ease::InOutCubic.apply(0.25) - 4.0 * 0.25f64.powi(3)).abs() < 1e-12);
}
