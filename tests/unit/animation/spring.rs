use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn curve(preset: SpringPreset, frames: i64) -> Vec<f64> {
    (0..=frames)
        .map(|f| spring_ease(f, fps30(), &preset.config()).unwrap())
        .collect()
}

#[test]
fn starts_at_exactly_zero() {
    for preset in SpringPreset::ALL {
        assert_eq!(spring_ease(0, fps30(), &preset.config()).unwrap(), 0.0);
    }
    assert_eq!(
        spring_ease(0, Fps::new(24000, 1001).unwrap(), &SpringConfig::default()).unwrap(),
        0.0
    );
}

#[test]
fn negative_frames_are_not_started_yet() {
    for preset in SpringPreset::ALL {
        assert_eq!(spring_ease(-45, fps30(), &preset.config()).unwrap(), 0.0);
    }
}

#[test]
fn smooth_and_ease_are_monotonic_without_overshoot() {
    for preset in [SpringPreset::Smooth, SpringPreset::Ease] {
        let values = curve(preset, 900);
        for w in values.windows(2) {
            assert!(w[1] >= w[0], "{preset:?}: {} then {}", w[0], w[1]);
        }
        assert!(values.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }
}

#[test]
fn bounce_and_elastic_overshoot() {
    for preset in [SpringPreset::Bounce, SpringPreset::Elastic] {
        let peak = curve(preset, 90).into_iter().fold(f64::MIN, f64::max);
        assert!(peak > 1.05, "{preset:?} peak {peak}");
    }
}

#[test]
fn every_preset_settles_near_one() {
    for preset in SpringPreset::ALL {
        let v = spring_ease(450, fps30(), &preset.config()).unwrap();
        assert!((v - 1.0).abs() < 1e-3, "{preset:?} at 15s: {v}");
    }
}

#[test]
fn damping_ratio_classifies_presets() {
    assert!(SpringPreset::Smooth.config().damping_ratio() > 1.0);
    assert!(SpringPreset::Ease.config().damping_ratio() > 1.0);
    assert!(SpringPreset::Bounce.config().damping_ratio() < 1.0);
    assert!(SpringPreset::Elastic.config().damping_ratio() < 1.0);
}

#[test]
fn critically_damped_branch_is_continuous_with_neighbours() {
    // stiffness 100, mass 1 => critical damping 20.
    let at = |damping: f64| spring_ease(10, fps30(), &SpringConfig::new(damping, 1.0)).unwrap();
    let critical = at(20.0);
    assert!((critical - at(19.99)).abs() < 1e-3);
    assert!((critical - at(20.01)).abs() < 1e-3);
}

#[test]
fn undamped_spring_is_allowed() {
    let v = spring_ease(5, fps30(), &SpringConfig::new(0.0, 1.0)).unwrap();
    assert!(v.is_finite());
}

#[test]
fn overshoot_clamping_caps_at_one() {
    let config = SpringPreset::Elastic
        .config()
        .with_overshoot_clamping(true);
    for f in 0..120 {
        assert!(spring_ease(f, fps30(), &config).unwrap() <= 1.0);
    }
}

#[test]
fn invalid_params_fail_fast() {
    let bad = [
        SpringConfig::new(10.0, 0.0),
        SpringConfig::new(10.0, -1.0),
        SpringConfig::new(-1.0, 1.0),
        SpringConfig::new(10.0, 1.0).with_stiffness(0.0),
        SpringConfig::new(f64::NAN, 1.0),
    ];
    for config in bad {
        let err = spring_ease(10, fps30(), &config).unwrap_err();
        assert!(matches!(err, ReelError::InvalidEasingParams(_)), "{config:?}");
    }
    let err = spring_ease(10, Fps { num: 0, den: 1 }, &SpringConfig::default()).unwrap_err();
    assert!(matches!(err, ReelError::InvalidEasingParams(_)));
}

#[test]
fn invalid_params_fail_even_before_release() {
    let err = spring_ease(0, fps30(), &SpringConfig::new(10.0, 0.0)).unwrap_err();
    assert!(matches!(err, ReelError::InvalidEasingParams(_)));
}

#[test]
fn faster_fps_slows_the_curve_in_frames() {
    let config = SpringPreset::Ease.config();
    let at30 = spring_ease(10, fps30(), &config).unwrap();
    let at60 = spring_ease(10, Fps::new(60, 1).unwrap(), &config).unwrap();
    assert!(at60 < at30);
}

#[test]
fn spring_delay_and_span() {
    let spring = Spring::new(SpringPreset::Bounce).delay(30).from_to(10.0, 20.0);
    assert_eq!(spring.sample(0, fps30()).unwrap(), 10.0);
    assert_eq!(spring.sample(30, fps30()).unwrap(), 10.0);
    let shifted = spring.sample(40, fps30()).unwrap();
    let base = Spring::new(SpringPreset::Bounce)
        .from_to(10.0, 20.0)
        .sample(10, fps30())
        .unwrap();
    assert!((shifted - base).abs() < 1e-12);
}

#[test]
fn spring_config_deserializes_with_defaults() {
    let c: SpringConfig = serde_json::from_str(r#"{ "damping": 200, "mass": 2 }"#).unwrap();
    assert_eq!(c, SpringPreset::Smooth.config());
    let p: SpringPreset = serde_json::from_str("\"elastic\"").unwrap();
    assert_eq!(p, SpringPreset::Elastic);
}
