use super::*;

#[test]
fn pulse_stays_inside_range() {
    for f in 0..600 {
        let v = pulse(f, 0.2, [0.8, 1.2]).unwrap();
        assert!((0.8 - 1e-12..=1.2 + 1e-12).contains(&v), "frame {f}: {v}");
    }
    assert!((pulse(0, 0.2, [0.8, 1.2]).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn pulse_with_flat_range_is_constant() {
    assert_eq!(pulse(7, 0.2, [1.0, 1.0]).unwrap(), 1.0);
}

#[test]
fn wobble_is_zero_at_start_and_bounded() {
    assert_eq!(wobble(0, 0.3, 3.0), 0.0);
    for f in 0..300 {
        assert!(wobble(f, 0.3, 3.0).abs() <= 3.0);
    }
}

#[test]
fn spin_wraps_full_turns() {
    assert_eq!(spin(0, 2.0), 0.0);
    assert_eq!(spin(90, 2.0), 180.0);
    assert_eq!(spin(180, 2.0), 0.0);
    assert_eq!(spin(181, 2.0), 2.0);
}

#[test]
fn drift_starts_on_the_y_axis() {
    let d = drift(0, Vec2::new(0.005, 0.007), Vec2::new(0.2, 0.15));
    assert_eq!(d, Vec2::new(0.0, 0.15));
    let later = drift(1000, Vec2::new(0.005, 0.007), Vec2::new(0.2, 0.15));
    assert!(later.x.abs() <= 0.2 && later.y.abs() <= 0.15);
}
