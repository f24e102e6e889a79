use super::*;

fn base() -> LissajousParams {
    LissajousParams {
        xfreq: 5.0,
        yfreq: 4.0,
        xphase: 0.0,
        yphase: 1.0,
    }
}

fn inc() -> LissajousParams {
    LissajousParams {
        xfreq: 0.5,
        yfreq: -0.25,
        xphase: 0.125,
        yphase: 2.0,
    }
}

#[test]
fn point_at_zero_is_sine_of_phases() {
    let (x, y) = base().point(0.0);
    assert_eq!(x, 0.0);
    assert_eq!(y, 1.0f64.sin());
}

#[test]
fn advance_adds_every_component() {
    let mut p = base();
    p.advance(&inc());
    assert_eq!(
        p,
        LissajousParams {
            xfreq: 5.5,
            yfreq: 3.75,
            xphase: 0.125,
            yphase: 3.0,
        }
    );
}

#[test]
fn closed_form_matches_repeated_advance_for_exact_increments() {
    let mut p = base();
    for i in 0..20u64 {
        assert_eq!(LissajousParams::at_frame(&base(), &inc(), i), p);
        p.advance(&inc());
    }
}

#[test]
fn closed_form_is_order_independent() {
    let later = LissajousParams::at_frame(&base(), &inc(), 9);
    let earlier = LissajousParams::at_frame(&base(), &inc(), 3);
    assert_eq!(later.xfreq, 5.0 + 9.0 * 0.5);
    assert_eq!(earlier.yphase, 1.0 + 3.0 * 2.0);
    assert_eq!(LissajousParams::at_frame(&base(), &inc(), 0), base());
}

#[test]
fn finiteness_check_covers_all_fields() {
    assert!(base().is_finite());
    let mut p = base();
    p.yphase = f64::NAN;
    assert!(!p.is_finite());
    let mut p = base();
    p.xfreq = f64::INFINITY;
    assert!(!p.is_finite());
}
