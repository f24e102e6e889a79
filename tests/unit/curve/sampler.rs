use super::*;

fn params() -> LissajousParams {
    LissajousParams {
        xfreq: 5.0,
        yfreq: 4.0,
        xphase: 0.0,
        yphase: 0.0,
    }
}

#[test]
fn sample_count_is_ceiling_of_sweep_over_step() {
    assert_eq!(sample_count(1.0, 0.5).unwrap(), 13);
    assert_eq!(sample_count(2.0, 0.01).unwrap(), 1257);
    assert_eq!(sample_count(0.0, 0.01).unwrap(), 0);
}

#[test]
fn sampler_yields_exactly_sample_count_points() {
    for (cycles, res) in [(1.0, 0.5), (2.0, 0.01), (0.25, 0.3), (3.0, 1.0)] {
        let s = CurveSampler::new(params(), cycles, res).unwrap();
        let expected = (cycles * TAU / res).ceil() as u64;
        assert_eq!(s.total(), expected);
        assert_eq!(s.count() as u64, expected);
    }
}

#[test]
fn last_sample_is_strictly_before_sweep_end() {
    let cycles = 1.0;
    let res = 0.5;
    let n = sample_count(cycles, res).unwrap();
    let last_t = (n - 1) as f64 * res;
    assert!(last_t < cycles * TAU);
    assert!(n as f64 * res >= cycles * TAU);
}

#[test]
fn samples_lie_in_the_unit_square() {
    let s = CurveSampler::new(params(), 2.0, 0.05).unwrap();
    for (x, y) in s {
        assert!((-1.0..=1.0).contains(&x));
        assert!((-1.0..=1.0).contains(&y));
    }
}

#[test]
fn first_sample_starts_at_origin_with_zero_phase() {
    let mut s = CurveSampler::new(params(), 1.0, 0.1).unwrap();
    assert_eq!(s.next(), Some((0.0, 0.0)));
    let (x, y) = s.next().unwrap();
    assert_eq!(x, (0.1f64 * 5.0).sin());
    assert_eq!(y, (0.1f64 * 4.0).sin());
}

#[test]
fn size_hint_tracks_remaining_samples() {
    let mut s = CurveSampler::new(params(), 1.0, 0.5).unwrap();
    assert_eq!(s.size_hint(), (13, Some(13)));
    s.next();
    s.next();
    assert_eq!(s.size_hint(), (11, Some(11)));
}

#[test]
fn invalid_resolution_is_rejected() {
    for res in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        let err = CurveSampler::new(params(), 1.0, res).unwrap_err();
        assert!(err.to_string().contains("validation error:"));
    }
}

#[test]
fn invalid_cycles_are_rejected() {
    assert!(sample_count(-1.0, 0.1).is_err());
    assert!(sample_count(f64::NAN, 0.1).is_err());
}

#[test]
fn sweeps_restart_fresh() {
    let a: Vec<_> = CurveSampler::new(params(), 1.0, 0.3).unwrap().collect();
    let b: Vec<_> = CurveSampler::new(params(), 1.0, 0.3).unwrap().collect();
    assert_eq!(a, b);
}
