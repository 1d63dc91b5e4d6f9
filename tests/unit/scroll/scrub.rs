use super::*;

#[test]
fn zero_scrub_tracks_target_exactly() {
    let mut f = ScrubFilter::new(0.0);
    assert_eq!(f.update(0.0, 1.0 / 60.0), 0.0);
    assert_eq!(f.update(0.8, 1.0 / 60.0), 0.8);
    assert_eq!(f.update(0.1, 1.0 / 60.0), 0.1);
    assert!(f.is_settled(0.1));
}

#[test]
fn first_update_lands_on_target() {
    let mut f = ScrubFilter::new(0.6);
    assert_eq!(f.update(0.4, 1.0 / 60.0), 0.4);
}

#[test]
fn smoothing_lags_then_converges() {
    let mut f = ScrubFilter::new(0.6);
    f.update(0.0, 0.0);

    let one = f.update(1.0, 1.0 / 60.0);
    assert!(one > 0.0 && one < 0.2);

    let mut last = one;
    for _ in 0..600 {
        let next = f.update(1.0, 1.0 / 60.0);
        assert!(next >= last);
        last = next;
    }
    assert_eq!(last, 1.0);
    assert!(f.is_settled(1.0));
}

#[test]
fn catches_most_of_a_jump_within_scrub_interval() {
    let mut f = ScrubFilter::new(0.5);
    f.update(0.0, 0.0);
    let mut v = 0.0;
    for _ in 0..30 {
        v = f.update(1.0, 0.5 / 30.0);
    }
    assert!(v > 0.9 && v < 1.0);
}

#[test]
fn zero_dt_does_not_move() {
    let mut f = ScrubFilter::new(0.6);
    f.update(0.2, 0.0);
    assert_eq!(f.update(0.9, 0.0), 0.2);
}

#[test]
fn jump_drops_lag() {
    let mut f = ScrubFilter::new(1.0);
    f.update(0.0, 0.0);
    f.jump_to(0.7);
    assert!(f.is_settled(0.7));
    assert_eq!(f.update(0.7, 0.016), 0.7);
}
