use crate::foundation::error::CycloramaResult;
use crate::scene::model::{LayerConfig, LayerGroup, Scene};

/// Builder for [`LayerConfig`](crate::LayerConfig).
#[derive(Clone, Debug)]
pub struct LayerConfigBuilder {
    start_index: u32,
    num_images: u32,
    duration: f64,
    size: f64,
    top: f64,
    left: f64,
    z_index: f64,
}

impl Default for LayerConfigBuilder {
    fn default() -> Self {
        Self {
            start_index: 0,
            num_images: 1,
            duration: 1.0,
            size: 100.0,
            top: 0.0,
            left: 0.0,
            z_index: 0.0,
        }
    }
}

impl LayerConfigBuilder {
    /// Create a builder with a one-frame, one-second, 100px default layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first frame of the asset range.
    pub fn start_index(mut self, start_index: u32) -> Self {
        self.start_index = start_index;
        self
    }

    /// Set the frame count of the cyclic range.
    pub fn num_images(mut self, num_images: u32) -> Self {
        self.num_images = num_images;
        self
    }

    /// Set the seconds to traverse the full range once.
    pub fn duration_sec(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Set the base sprite edge length in logical pixels.
    pub fn size_px(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the position anchor as percentages of the container.
    pub fn position_pct(mut self, top: f64, left: f64) -> Self {
        self.top = top;
        self.left = left;
        self
    }

    /// Set the stacking depth.
    pub fn z_index(mut self, z_index: f64) -> Self {
        self.z_index = z_index;
        self
    }

    /// Build and validate the final [`LayerConfig`](crate::LayerConfig).
    pub fn build(self) -> CycloramaResult<LayerConfig> {
        let config = LayerConfig {
            start_index: self.start_index,
            num_images: self.num_images,
            duration: self.duration,
            size: self.size,
            top: self.top,
            left: self.left,
            z_index: self.z_index,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Builder for [`Scene`](crate::Scene).
#[derive(Clone, Debug, Default)]
pub struct SceneBuilder {
    groups: Vec<LayerGroup>,
}

impl SceneBuilder {
    /// Create a builder for an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group of layers, mounted and unmounted as a unit.
    pub fn group(mut self, layers: Vec<LayerConfig>) -> Self {
        self.groups.push(LayerGroup { layers });
        self
    }

    /// Build and validate the final [`Scene`](crate::Scene).
    pub fn build(self) -> CycloramaResult<Scene> {
        let scene = Scene {
            groups: self.groups,
        };
        scene.validate()?;
        Ok(scene)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
