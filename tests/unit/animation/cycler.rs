use super::*;

#[test]
fn rejects_invalid_parameters() {
    assert!(FrameCycler::new(0, 0, 1.0).is_err());
    assert!(FrameCycler::new(0, 4, 0.0).is_err());
    assert!(FrameCycler::new(0, 4, -1.0).is_err());
    assert!(FrameCycler::new(0, 4, f64::NAN).is_err());
    assert!(FrameCycler::new(u32::MAX, 2, 1.0).is_err());
}

#[test]
fn starts_at_start_index() {
    let cycler = FrameCycler::new(7, 3, 1.0).unwrap();
    assert_eq!(cycler.frame(), 7);
}

#[test]
fn advances_at_wall_clock_rate() {
    // 4 frames per second.
    let mut cycler = FrameCycler::new(0, 4, 1.0).unwrap();
    assert_eq!(cycler.tick(0.1), 0); // v = 0.4
    assert_eq!(cycler.tick(0.2), 1); // v = 1.2
    assert_eq!(cycler.tick(0.25), 2); // v = 2.2
}

#[test]
fn fractional_progress_survives_irregular_ticks() {
    let mut a = FrameCycler::new(0, 10, 1.0).unwrap();
    let mut b = FrameCycler::new(0, 10, 1.0).unwrap();
    a.tick(0.06);
    a.tick(0.06);
    assert_eq!(a.frame(), b.tick(0.12));
}

#[test]
fn loop_closes_after_one_duration() {
    let mut cycler = FrameCycler::new(2, 5, 1.0).unwrap();
    let mut frames = Vec::new();
    for _ in 0..10 {
        frames.push(cycler.tick(0.1));
    }
    // One full duration of simulated time ends back at the start.
    assert_eq!(*frames.last().unwrap(), 2);
    for f in frames {
        assert!((2..=6).contains(&f), "frame {f} escaped the range");
    }
}

#[test]
fn boundary_is_a_hard_reset_not_a_wrap() {
    // Drive the accumulator exactly one past the end of the range: the
    // emitted frame must be the start index itself, not the last frame or a
    // modulo-wrapped intermediate.
    let mut cycler = FrameCycler::new(3, 4, 1.0).unwrap();
    assert_eq!(cycler.tick(1.0), 3);
}

#[test]
fn rounded_overflow_emits_start_index() {
    // Half a frame before the end the rounded value already exceeds the last
    // frame; the emission snaps to the start while the cycle keeps running.
    let mut cycler = FrameCycler::new(0, 4, 1.0).unwrap();
    assert_eq!(cycler.tick(0.9), 0); // v = 3.6, round = 4 > 3
}

#[test]
fn never_emits_outside_range_under_irregular_ticks() {
    let mut cycler = FrameCycler::new(10, 7, 0.9).unwrap();
    let dts = [0.016, 0.2, 0.001, 0.4, 0.033, 0.7, 0.05];
    for _ in 0..200 {
        for dt in dts {
            let f = cycler.tick(dt);
            assert!((10..=16).contains(&f), "frame {f} escaped the range");
        }
    }
}

#[test]
fn zero_tick_re_reads_current_frame() {
    let mut cycler = FrameCycler::new(0, 4, 1.0).unwrap();
    cycler.tick(0.3);
    let f = cycler.frame();
    assert_eq!(cycler.tick(0.0), f);
}

#[test]
fn reset_rewinds_to_start() {
    let mut cycler = FrameCycler::new(5, 4, 1.0).unwrap();
    cycler.tick(0.5);
    cycler.reset();
    assert_eq!(cycler.frame(), 5);
}
