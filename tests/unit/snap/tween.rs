use super::*;

#[test]
fn decelerates_toward_target() {
    let t = SnapTween::new(0.0, 100.0, 10.0, 0.25, Ease::OutCubic);
    assert_eq!(t.sample(9.0), 0.0);
    assert_eq!(t.sample(10.0), 0.0);
    let half = t.sample(10.125);
    assert!(half > 50.0 && half < 100.0);
    assert_eq!(t.sample(10.25), 100.0);
    assert!(!t.is_done(10.24));
    assert!(t.is_done(10.25));
    assert_eq!(t.target(), 100.0);
}

#[test]
fn delayed_start_holds_origin() {
    let t = SnapTween::new(500.0, 300.0, 1.0 + 0.05, 0.15, Ease::OutCubic);
    assert_eq!(t.sample(1.02), 500.0);
    assert!(t.sample(1.12) < 500.0);
    assert!(!t.is_done(1.15));
}

#[test]
fn zero_duration_jumps() {
    let t = SnapTween::new(0.0, 40.0, 2.0, 0.0, Ease::Linear);
    assert_eq!(t.sample(1.0), 0.0);
    assert_eq!(t.sample(2.0), 40.0);
    assert!(t.is_done(2.0));
}
