use super::*;

use crate::assets::source::{CompletionOrder, InMemorySource};
use crate::scene::dsl::LayerConfigBuilder;

fn layer(num_images: u32, duration: f64, z_index: f64) -> LayerConfig {
    LayerConfigBuilder::new()
        .num_images(num_images)
        .duration_sec(duration)
        .size_px(100.0)
        .position_pct(20.0, 30.0)
        .z_index(z_index)
        .build()
        .unwrap()
}

fn source_with_frames(count: u32) -> Box<InMemorySource> {
    let mut source = InMemorySource::new();
    for i in 0..count {
        source.insert_solid(i, 2, 2, [i as u8 + 1, 0, 0, 255]);
    }
    Box::new(source)
}

fn first_pixel(controller: &SurfaceController) -> [u8; 4] {
    let data = controller.surface().data();
    [data[0], data[1], data[2], data[3]]
}

#[test]
fn invalid_config_produces_no_controller() {
    let mut bad = layer(4, 1.0, 0.0);
    bad.num_images = 0;
    let err = SurfaceController::new(bad, source_with_frames(4), 1.0).unwrap_err();
    assert!(matches!(err, CycloramaError::Validation(_)));

    let mut bad = layer(4, 1.0, 0.0);
    bad.duration = 0.0;
    assert!(SurfaceController::new(bad, source_with_frames(4), 1.0).is_err());
}

#[test]
fn rejects_bad_device_pixel_ratio() {
    let config = layer(4, 1.0, 0.0);
    assert!(SurfaceController::new(config, source_with_frames(4), 0.0).is_err());
}

#[test]
fn exposes_layout_and_parallax_attributes() {
    let config = layer(4, 1.0, 2.0);
    let controller = SurfaceController::new(config, source_with_frames(4), 1.0).unwrap();
    assert_eq!(controller.top_pct(), 20.0);
    assert_eq!(controller.left_pct(), 30.0);
    assert_eq!(controller.z_index(), 2.0);
    assert!((controller.outer_size_px() - 140.0).abs() < 1e-9);
    assert!((controller.coefficient() - (-0.4)).abs() < 1e-12);
    assert_eq!(controller.coefficient_attr(), "-0.40");
}

#[test]
fn paints_the_first_frame_on_mount() {
    let config = layer(4, 1.0, 0.0);
    let mut controller = SurfaceController::new(config, source_with_frames(4), 1.0).unwrap();
    controller.tick(0.0); // pump the initial load
    assert_eq!(controller.current_frame(), 0);
    assert_eq!(first_pixel(&controller), [1, 0, 0, 255]);
}

#[test]
fn tick_advances_and_repaints() {
    let config = layer(4, 1.0, 0.0); // 4 fps
    let mut controller = SurfaceController::new(config, source_with_frames(4), 1.0).unwrap();
    controller.tick(0.3); // v = 1.2 -> frame 1
    assert_eq!(controller.current_frame(), 1);
    assert_eq!(first_pixel(&controller), [2, 0, 0, 255]);
}

#[test]
fn entrance_runs_independently_of_the_cycle() {
    let config = layer(4, 100.0, 0.0); // cycle far slower than the entrance
    let mut controller = SurfaceController::new(config, source_with_frames(4), 1.0).unwrap();
    assert_eq!(controller.opacity(), 0.0);
    controller.tick(0.4);
    assert!((controller.opacity() - 0.5).abs() < 1e-12);
    assert_eq!(controller.current_frame(), 0);
    controller.tick(0.4);
    assert!(controller.entrance_complete());
}

#[test]
fn scroll_offset_scales_with_the_coefficient() {
    let config = layer(4, 1.0, 0.5);
    let controller = SurfaceController::new(config, source_with_frames(4), 1.0).unwrap();
    let offset = controller.scroll_offset(100.0);
    assert_eq!(offset.x, 0.0);
    assert!((offset.y - 37.5).abs() < 1e-9);
}

#[test]
fn set_frame_range_restarts_playback() {
    let config = layer(4, 1.0, 0.0);
    let mut controller = SurfaceController::new(config, source_with_frames(8), 1.0).unwrap();
    controller.tick(0.3);
    controller.set_frame_range(4, 4, 2.0).unwrap();
    assert_eq!(controller.current_frame(), 4);
    assert!(controller.set_frame_range(0, 0, 1.0).is_err());
}

#[test]
fn set_depth_recomputes_the_coefficient() {
    let config = layer(4, 1.0, 0.5);
    let mut controller = SurfaceController::new(config, source_with_frames(4), 1.0).unwrap();
    controller.set_depth(2.0).unwrap();
    assert!((controller.coefficient() - (-0.4)).abs() < 1e-12);
    assert_eq!(controller.coefficient_attr(), "-0.40");
}

#[test]
fn stale_load_resolves_to_the_newest_frame() {
    let config = layer(8, 1.0, 0.0);
    let mut source = InMemorySource::with_order(CompletionOrder::Lifo);
    for i in 0..8 {
        source.insert_solid(i, 2, 2, [i as u8 + 1, 0, 0, 255]);
    }
    let mut controller = SurfaceController::new(config, Box::new(source), 1.0).unwrap();
    // Two frame advances before any load completes; the newest wins.
    controller.tick(0.2); // paint(2) queued (v = 1.6)
    assert_eq!(controller.current_frame(), 2);
    assert_eq!(first_pixel(&controller), [3, 0, 0, 255]);
}

#[test]
fn teardown_stops_painting_and_releases_the_surface() {
    let config = layer(4, 1.0, 0.0);
    let mut source = InMemorySource::new();
    source.insert_solid(0, 2, 2, [1, 0, 0, 255]);
    source.set_stalled(true); // keep the mount paint in flight
    let mut controller = SurfaceController::new(config, Box::new(source), 1.0).unwrap();

    controller.teardown();
    assert!(controller.is_torn_down());
    assert!(controller.surface().is_released());

    // Late completions and further ticks are guarded no-ops.
    controller.tick(0.5);
    assert!(controller.surface().is_released());
    controller.teardown(); // idempotent
}
