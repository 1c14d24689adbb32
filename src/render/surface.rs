/// Allocation and resize counters for one backing surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct SurfaceStats {
    /// Buffer allocations performed since creation.
    pub allocations: u64,
    /// Resize calls accepted since creation.
    pub resizes: u64,
    /// Bytes currently held by the buffer.
    pub retained_bytes: usize,
}

/// Device-pixel backing buffer for one rendered sprite.
///
/// Dimensions are tracked in both logical (CSS-space) units and device
/// pixels; the scale factor between them compensates for display density so
/// drawing coordinates stay logical while pixels stay sharp. The buffer holds
/// premultiplied RGBA8, row-major, tightly packed. Each surface is owned
/// exclusively by one controller and never shared.
#[derive(Clone, Debug, Default)]
pub struct BackingSurface {
    logical_width: f64,
    logical_height: f64,
    scale: f64,
    width: u32,
    height: u32,
    data: Vec<u8>,
    stats: SurfaceStats,
}

impl BackingSurface {
    /// Create an unallocated surface.
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            ..Self::default()
        }
    }

    /// Resize to the given logical dimensions at the given device pixel
    /// ratio.
    ///
    /// Idempotent: the buffer is replaced only when the device dimensions
    /// actually change, so repeated calls with the same arguments never
    /// accumulate allocations.
    pub fn resize(&mut self, logical_width: f64, logical_height: f64, device_pixel_ratio: f64) {
        let w = (logical_width * device_pixel_ratio).round().max(1.0) as u32;
        let h = (logical_height * device_pixel_ratio).round().max(1.0) as u32;
        self.logical_width = logical_width;
        self.logical_height = logical_height;
        self.scale = device_pixel_ratio;
        self.stats.resizes = self.stats.resizes.saturating_add(1);

        if w == self.width && h == self.height && !self.data.is_empty() {
            return;
        }
        self.width = w;
        self.height = h;
        self.data = vec![0u8; (w as usize) * (h as usize) * 4];
        self.stats.allocations = self.stats.allocations.saturating_add(1);
        self.stats.retained_bytes = self.data.len();
    }

    /// Zero the buffer.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Drop the buffer and zero the dimensions.
    pub fn release(&mut self) {
        self.width = 0;
        self.height = 0;
        self.data = Vec::new();
        self.stats.retained_bytes = 0;
    }

    /// Whether the surface currently holds no buffer.
    pub fn is_released(&self) -> bool {
        self.data.is_empty()
    }

    /// Device-pixel width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Device-pixel height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Logical (CSS-space) width.
    pub fn logical_width(&self) -> f64 {
        self.logical_width
    }

    /// Logical (CSS-space) height.
    pub fn logical_height(&self) -> f64 {
        self.logical_height
    }

    /// Device pixel ratio the buffer was sized for.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Premultiplied RGBA8 pixel data, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Allocation counters.
    pub fn stats(&self) -> SurfaceStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
