use crate::animation::cycler::FrameCycler;
use crate::animation::entrance::EntranceTransition;
use crate::assets::source::AssetSource;
use crate::foundation::core::Vec2;
use crate::foundation::error::{CycloramaError, CycloramaResult};
use crate::render::renderer::SurfaceRenderer;
use crate::render::surface::{BackingSurface, SurfaceStats};
use crate::scene::model::LayerConfig;
use crate::scene::parallax;

/// Ratio of the outer box edge to the configured base size.
///
/// The outer box is larger than the inner painted sprite so parallax
/// translation never clips against a hard edge.
pub const OUTER_SCALE: f64 = 1.4;

/// One animated parallax surface: a frame cycle, a backing surface, and the
/// layout/parallax attributes the external compositor reads.
///
/// A controller is created when its group becomes visible and torn down when
/// the group hides; playback state never survives a visibility toggle. It
/// exclusively owns its cycler, renderer, and backing surface.
pub struct SurfaceController {
    config: LayerConfig,
    cycler: FrameCycler,
    renderer: SurfaceRenderer,
    entrance: EntranceTransition,
    coefficient: f64,
    device_pixel_ratio: f64,
    last_painted: u32,
    torn_down: bool,
}

impl std::fmt::Debug for SurfaceController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceController")
            .field("config", &self.config)
            .field("cycler", &self.cycler)
            .field("entrance", &self.entrance)
            .field("coefficient", &self.coefficient)
            .field("device_pixel_ratio", &self.device_pixel_ratio)
            .field("last_painted", &self.last_painted)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

impl SurfaceController {
    /// Mount a controller for one layer.
    ///
    /// Validates the config, sizes the backing store, requests the first
    /// frame, and starts the entrance transition. Fails with a validation
    /// error rather than constructing a controller in an undefined state.
    pub fn new(
        config: LayerConfig,
        source: Box<dyn AssetSource>,
        device_pixel_ratio: f64,
    ) -> CycloramaResult<Self> {
        config.validate()?;
        if !(device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0) {
            return Err(CycloramaError::validation(
                "device_pixel_ratio must be finite and > 0",
            ));
        }
        let cycler = FrameCycler::new(config.start_index, config.num_images, config.duration)?;
        let mut renderer = SurfaceRenderer::new(source);
        renderer.resize(config.size, device_pixel_ratio);
        renderer.paint(config.start_index);
        Ok(Self {
            cycler,
            renderer,
            entrance: EntranceTransition::new(),
            coefficient: parallax::scroll_speed(config.z_index),
            device_pixel_ratio,
            last_painted: config.start_index,
            config,
            torn_down: false,
        })
    }

    /// Advance the frame cycle and entrance transition by `dt_sec`,
    /// repainting on frame change and applying any finished loads.
    ///
    /// A zero `dt_sec` only pumps pending loads. No-op after teardown.
    pub fn tick(&mut self, dt_sec: f64) {
        if self.torn_down {
            return;
        }
        self.entrance.tick(dt_sec);
        let frame = self.cycler.tick(dt_sec);
        if frame != self.last_painted {
            self.renderer.paint(frame);
            self.last_painted = frame;
        }
        self.renderer.pump();
    }

    /// Replace the frame cycle with new range/timing parameters.
    ///
    /// The old cycle is cancelled first; playback restarts at the new
    /// `start_index`.
    pub fn set_frame_range(
        &mut self,
        start_index: u32,
        num_images: u32,
        duration_sec: f64,
    ) -> CycloramaResult<()> {
        if self.torn_down {
            return Err(CycloramaError::torn_down(
                "set_frame_range on unmounted controller",
            ));
        }
        self.cycler = FrameCycler::new(start_index, num_images, duration_sec)?;
        self.config.start_index = start_index;
        self.config.num_images = num_images;
        self.config.duration = duration_sec;
        self.renderer.paint(start_index);
        self.last_painted = start_index;
        Ok(())
    }

    /// Resize the backing store for a new device pixel ratio and repaint the
    /// current frame.
    ///
    /// The resize replaces the buffer with a cleared one, so the frame must
    /// be re-requested or the surface stays blank until the cycle next
    /// advances.
    pub fn set_device_pixel_ratio(&mut self, ratio: f64) -> CycloramaResult<()> {
        if self.torn_down {
            return Err(CycloramaError::torn_down(
                "set_device_pixel_ratio on unmounted controller",
            ));
        }
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(CycloramaError::validation(
                "device_pixel_ratio must be finite and > 0",
            ));
        }
        self.device_pixel_ratio = ratio;
        self.renderer.resize(self.config.size, ratio);
        self.renderer.paint(self.last_painted);
        self.renderer.pump();
        Ok(())
    }

    /// Change the stacking depth, recomputing the parallax coefficient.
    pub fn set_depth(&mut self, z_index: f64) -> CycloramaResult<()> {
        if !z_index.is_finite() {
            return Err(CycloramaError::validation("z_index must be finite"));
        }
        self.config.z_index = z_index;
        self.coefficient = parallax::scroll_speed(z_index);
        Ok(())
    }

    /// The layer config this controller was mounted for.
    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    /// The render target: this controller's backing surface.
    pub fn surface(&self) -> &BackingSurface {
        self.renderer.surface()
    }

    /// Allocation counters of the backing surface.
    pub fn surface_stats(&self) -> SurfaceStats {
        self.renderer.stats()
    }

    /// Vertical position anchor as a percentage of the container.
    pub fn top_pct(&self) -> f64 {
        self.config.top
    }

    /// Horizontal position anchor as a percentage of the container.
    pub fn left_pct(&self) -> f64 {
        self.config.left
    }

    /// Stacking depth.
    pub fn z_index(&self) -> f64 {
        self.config.z_index
    }

    /// Outer box edge length in logical pixels (`size * 1.4`).
    pub fn outer_size_px(&self) -> f64 {
        self.config.size * OUTER_SCALE
    }

    /// Signed scroll-speed multiplier derived from the stacking depth.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// The coefficient formatted to two decimal places, the attribute form
    /// the external scroll engine reads.
    pub fn coefficient_attr(&self) -> String {
        parallax::scroll_speed_attr(self.config.z_index)
    }

    /// Translation the external scroll engine applies at `scroll_position`.
    pub fn scroll_offset(&self, scroll_position: f64) -> Vec2 {
        Vec2::new(0.0, scroll_position * self.coefficient)
    }

    /// Current opacity of the entrance transition.
    pub fn opacity(&self) -> f64 {
        self.entrance.opacity()
    }

    /// Current scale of the entrance transition.
    pub fn scale(&self) -> f64 {
        self.entrance.scale()
    }

    /// Whether the entrance transition has finished.
    pub fn entrance_complete(&self) -> bool {
        self.entrance.is_complete()
    }

    /// Frame index most recently requested for paint.
    pub fn current_frame(&self) -> u32 {
        self.last_painted
    }

    /// Unmount: cancel the frame cycle and release the backing surface.
    ///
    /// Idempotent. Late load completions after teardown are discarded; no
    /// paint ever happens on a torn-down controller.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.renderer.teardown();
    }

    /// Whether teardown has run.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/controller.rs"]
mod tests;
