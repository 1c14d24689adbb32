use super::*;

#[test]
fn accumulates_and_clamps_to_range() {
    let mut engine = ScrollEngine::new(1000.0).unwrap();
    assert_eq!(engine.scroll_by(300.0), 300.0);
    assert_eq!(engine.scroll_by(900.0), 1000.0);
    assert_eq!(engine.scroll_by(-2500.0), 0.0);
}

#[test]
fn ignores_non_finite_deltas() {
    let mut engine = ScrollEngine::new(500.0).unwrap();
    engine.scroll_by(120.0);
    assert_eq!(engine.scroll_by(f64::NAN), 120.0);
    assert_eq!(engine.scroll_by(f64::INFINITY), 120.0);
}

#[test]
fn scroll_to_jumps_within_range() {
    let mut engine = ScrollEngine::new(800.0).unwrap();
    assert_eq!(engine.scroll_to(450.0), 450.0);
    assert_eq!(engine.scroll_to(-10.0), 0.0);
    assert_eq!(engine.scroll_to(9999.0), 800.0);
}

#[test]
fn shrinking_limit_reclamps_position() {
    let mut engine = ScrollEngine::new(1000.0).unwrap();
    engine.scroll_to(900.0);
    engine.set_limit(600.0).unwrap();
    assert_eq!(engine.position(), 600.0);
    assert_eq!(engine.limit(), 600.0);
}

#[test]
fn offset_scales_position_by_coefficient() {
    let mut engine = ScrollEngine::new(2000.0).unwrap();
    engine.scroll_to(400.0);
    let with = engine.offset_for(0.375);
    assert_eq!(with.x, 0.0);
    assert_eq!(with.y, 150.0);
    let against = engine.offset_for(-0.4);
    assert_eq!(against.y, -160.0);
}

#[test]
fn rejects_invalid_limits() {
    assert!(ScrollEngine::new(-1.0).is_err());
    assert!(ScrollEngine::new(f64::NAN).is_err());
    let mut engine = ScrollEngine::new(100.0).unwrap();
    assert!(engine.set_limit(f64::INFINITY).is_err());
}
