use std::cmp::Ordering;
use std::sync::Arc;

use crate::assets::source::AssetSource;
use crate::foundation::core::{Rgba8Premul, Vec2};
use crate::foundation::error::{CycloramaError, CycloramaResult};
use crate::scene::controller::SurfaceController;
use crate::scene::model::{LayerConfig, Scene};

/// Colors the host shell applies around the composed surfaces.
///
/// An explicit value threaded through the composer rather than global state;
/// the host's show/hide transition swaps it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Page background, premultiplied RGBA8.
    pub background: Rgba8Premul,
    /// Text/foreground color, premultiplied RGBA8.
    pub foreground: Rgba8Premul,
}

impl Theme {
    /// Black background, white foreground.
    pub const DARK: Self = Self {
        background: Rgba8Premul([0, 0, 0, 255]),
        foreground: Rgba8Premul([255, 255, 255, 255]),
    };

    /// Red background, black foreground, used while surfaces are shown.
    pub const ACCENT: Self = Self {
        background: Rgba8Premul([253, 44, 42, 255]),
        foreground: Rgba8Premul([0, 0, 0, 255]),
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::DARK
    }
}

/// Reported when the scroll position is near enough to an extreme that the
/// host should re-sync its scroll engine's measurements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBoundary {
    /// Within the margin of position zero.
    Top,
    /// Within the margin of the scroll limit.
    Bottom,
}

/// Margin in pixels within which a scroll position counts as at an extreme.
pub const BOUNDARY_MARGIN_PX: f64 = 10.0;

/// Factory producing a fresh asset source for a layer each time its group
/// mounts.
pub type SourceFactory = Box<dyn Fn(&LayerConfig) -> Box<dyn AssetSource>>;

/// Per-surface output the host compositor places in its visual stack.
#[derive(Clone, Debug)]
pub struct SurfacePlacement {
    /// Index of the group the surface belongs to.
    pub group: usize,
    /// Vertical position anchor as a percentage of the container.
    pub top_pct: f64,
    /// Horizontal position anchor as a percentage of the container.
    pub left_pct: f64,
    /// Stacking depth.
    pub z_index: f64,
    /// Outer box edge length in logical pixels.
    pub outer_size_px: f64,
    /// Parallax translation at the current scroll position.
    pub offset: Vec2,
    /// Entrance transition opacity.
    pub opacity: f64,
    /// Entrance transition scale.
    pub scale: f64,
    /// Scroll-speed coefficient formatted to two decimal places.
    pub scroll_speed_attr: String,
}

/// Mounts one [`SurfaceController`] per layer of each visible group and fans
/// host tick/scroll events out to them.
///
/// The scene data is shared read-only across all controllers; each controller
/// exclusively owns its own playback state and backing surface. Smooth-scroll
/// transforms themselves stay with the external scroll engine: the composer
/// only exposes per-surface placements for it to apply.
pub struct SceneComposer {
    scene: Arc<Scene>,
    make_source: SourceFactory,
    theme: Theme,
    device_pixel_ratio: f64,
    scroll_position: f64,
    groups: Vec<Vec<SurfaceController>>,
}

impl SceneComposer {
    /// Create a composer with all groups hidden.
    pub fn new(
        scene: Arc<Scene>,
        make_source: SourceFactory,
        device_pixel_ratio: f64,
    ) -> CycloramaResult<Self> {
        scene.validate()?;
        if !(device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0) {
            return Err(CycloramaError::validation(
                "device_pixel_ratio must be finite and > 0",
            ));
        }
        let groups = scene.groups.iter().map(|_| Vec::new()).collect();
        Ok(Self {
            scene,
            make_source,
            theme: Theme::default(),
            device_pixel_ratio,
            scroll_position: 0.0,
            groups,
        })
    }

    /// The shared scene data.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Replace the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Number of groups in the scene.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Whether a group currently has mounted controllers.
    pub fn is_group_visible(&self, group: usize) -> bool {
        self.groups.get(group).is_some_and(|g| !g.is_empty())
    }

    /// Mounted controllers of one group, for inspection.
    pub fn group_controllers(&self, group: usize) -> &[SurfaceController] {
        self.groups.get(group).map_or(&[], |g| g.as_slice())
    }

    /// Mount one controller per layer of `group`.
    ///
    /// Playback starts fresh at each layer's `start_index`; showing an
    /// already visible group is a no-op.
    pub fn show_group(&mut self, group: usize) -> CycloramaResult<()> {
        let scene = Arc::clone(&self.scene);
        let layers = scene
            .groups
            .get(group)
            .ok_or_else(|| CycloramaError::validation(format!("no group {group} in scene")))?;
        if !self.groups[group].is_empty() {
            return Ok(());
        }
        let mut mounted = Vec::with_capacity(layers.layers.len());
        for layer in &layers.layers {
            let source = (self.make_source)(layer);
            mounted.push(SurfaceController::new(
                *layer,
                source,
                self.device_pixel_ratio,
            )?);
        }
        tracing::debug!(group, layers = mounted.len(), "group mounted");
        self.groups[group] = mounted;
        Ok(())
    }

    /// Tear down and drop every controller of `group`.
    pub fn hide_group(&mut self, group: usize) -> CycloramaResult<()> {
        let mounted = self
            .groups
            .get_mut(group)
            .ok_or_else(|| CycloramaError::validation(format!("no group {group} in scene")))?;
        for controller in mounted.iter_mut() {
            controller.teardown();
        }
        let count = mounted.len();
        mounted.clear();
        if count > 0 {
            tracing::debug!(group, layers = count, "group unmounted");
        }
        Ok(())
    }

    /// Flip a group's visibility; returns whether it is now visible.
    pub fn toggle_group(&mut self, group: usize) -> CycloramaResult<bool> {
        if self.is_group_visible(group) {
            self.hide_group(group)?;
            Ok(false)
        } else {
            self.show_group(group)?;
            Ok(true)
        }
    }

    /// Tear down every visible group.
    pub fn unmount_all(&mut self) {
        for group in 0..self.groups.len() {
            // Index is in range; hide cannot fail here.
            let _ = self.hide_group(group);
        }
    }

    /// Advance every mounted controller by `dt_sec` of elapsed time.
    #[tracing::instrument(skip(self))]
    pub fn tick(&mut self, dt_sec: f64) {
        for group in &mut self.groups {
            for controller in group.iter_mut() {
                controller.tick(dt_sec);
            }
        }
    }

    /// Record a scroll event from the external engine.
    ///
    /// Returns a boundary marker when `position` is within
    /// [`BOUNDARY_MARGIN_PX`] of either extreme, signalling the host to
    /// re-sync its scroll engine; no correction happens here.
    pub fn on_scroll(&mut self, position: f64, limit: f64) -> Option<ScrollBoundary> {
        self.scroll_position = position;
        if position <= BOUNDARY_MARGIN_PX {
            Some(ScrollBoundary::Top)
        } else if position >= limit - BOUNDARY_MARGIN_PX {
            Some(ScrollBoundary::Bottom)
        } else {
            None
        }
    }

    /// Scroll position of the most recent scroll event.
    pub fn scroll_position(&self) -> f64 {
        self.scroll_position
    }

    /// Propagate a device pixel ratio change to every mounted controller.
    pub fn set_device_pixel_ratio(&mut self, ratio: f64) -> CycloramaResult<()> {
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(CycloramaError::validation(
                "device_pixel_ratio must be finite and > 0",
            ));
        }
        self.device_pixel_ratio = ratio;
        for group in &mut self.groups {
            for controller in group.iter_mut() {
                controller.set_device_pixel_ratio(ratio)?;
            }
        }
        Ok(())
    }

    /// Placements of every visible surface in paint order (ascending depth,
    /// stable within equal depths).
    pub fn placements(&self) -> Vec<SurfacePlacement> {
        let mut out = Vec::new();
        for (gi, group) in self.groups.iter().enumerate() {
            for controller in group {
                out.push(SurfacePlacement {
                    group: gi,
                    top_pct: controller.top_pct(),
                    left_pct: controller.left_pct(),
                    z_index: controller.z_index(),
                    outer_size_px: controller.outer_size_px(),
                    offset: controller.scroll_offset(self.scroll_position),
                    opacity: controller.opacity(),
                    scale: controller.scale(),
                    scroll_speed_attr: controller.coefficient_attr(),
                });
            }
        }
        out.sort_by(|a, b| a.z_index.partial_cmp(&b.z_index).unwrap_or(Ordering::Equal));
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composer.rs"]
mod tests;
