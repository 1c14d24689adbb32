use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{CycloramaError, CycloramaResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Static description of one animated surface.
///
/// A layer config is read-only data: it is supplied externally, validated
/// once, and shared across the lifetime of its owning group. Playback state
/// lives in the [`SurfaceController`](crate::SurfaceController) mounted for
/// it, never in the config itself.
pub struct LayerConfig {
    /// First frame in the asset range.
    pub start_index: u32,
    /// Count of frames in the cyclic range; must be >= 1.
    pub num_images: u32,
    /// Seconds to traverse the full range once; must be > 0.
    pub duration: f64,
    /// Base edge length of the rendered sprite in logical pixels; must be > 0.
    pub size: f64,
    /// Vertical position anchor as a percentage of the container.
    pub top: f64,
    /// Horizontal position anchor as a percentage of the container.
    pub left: f64,
    /// Stacking depth; drives both paint order and parallax speed.
    pub z_index: f64,
}

impl LayerConfig {
    /// Validate field invariants.
    pub fn validate(&self) -> CycloramaResult<()> {
        if self.num_images < 1 {
            return Err(CycloramaError::validation("num_images must be >= 1"));
        }
        if self.start_index.checked_add(self.num_images).is_none() {
            return Err(CycloramaError::validation(
                "start_index + num_images overflows the frame index space",
            ));
        }
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(CycloramaError::validation(
                "duration must be finite and > 0 seconds",
            ));
        }
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(CycloramaError::validation(
                "size must be finite and > 0 pixels",
            ));
        }
        if !self.top.is_finite() || !self.left.is_finite() {
            return Err(CycloramaError::validation("top and left must be finite"));
        }
        if !self.z_index.is_finite() {
            return Err(CycloramaError::validation("z_index must be finite"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// An ordered set of layers mounted and unmounted as a unit.
///
/// Groups correspond to page sections; serialized as a plain JSON array.
pub struct LayerGroup {
    /// Layers in declaration order.
    pub layers: Vec<LayerConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// A complete scene: an ordered sequence of layer groups.
///
/// A scene is a pure data model that can be:
/// - built programmatically (see [`crate::SceneBuilder`])
/// - serialized/deserialized via Serde as an array-of-arrays JSON document
///
/// Mounting and playing a scene is performed by
/// [`SceneComposer`](crate::SceneComposer).
pub struct Scene {
    /// Groups in page-section order.
    pub groups: Vec<LayerGroup>,
}

impl Scene {
    /// Validate every layer of every group.
    pub fn validate(&self) -> CycloramaResult<()> {
        for (gi, group) in self.groups.iter().enumerate() {
            for (li, layer) in group.layers.iter().enumerate() {
                layer.validate().map_err(|e| {
                    CycloramaError::validation(format!("group {gi} layer {li}: {e}"))
                })?;
            }
        }
        Ok(())
    }

    /// Parse and validate a scene from a JSON string.
    pub fn from_json_str(s: &str) -> CycloramaResult<Self> {
        let scene: Self = serde_json::from_str(s)
            .map_err(|e| CycloramaError::serde(format!("parse scene json: {e}")))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Read, parse, and validate a scene from a JSON file.
    pub fn from_path(path: &Path) -> CycloramaResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read scene '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Total layer count across all groups.
    pub fn layer_count(&self) -> usize {
        self.groups.iter().map(|g| g.layers.len()).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
