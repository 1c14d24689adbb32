use crate::assets::decode::DecodedFrame;
use crate::assets::source::{AssetSource, LoadCompletion, LoadTicket};
use crate::render::surface::{BackingSurface, SurfaceStats};

/// Ratio of the painted sprite's logical dimensions to the configured base
/// size.
pub const LOGICAL_SCALE: f64 = 1.2;

/// Owns one backing surface and repaints it from frame indices.
///
/// Paint requests are fire-and-forget: `paint` starts an asynchronous load
/// and `pump` applies finished loads. Only the most recent request is ever
/// applied; completions for superseded requests are discarded so a slow load
/// can never regress the surface to an older frame. Failed loads leave the
/// previously painted content in place.
pub struct SurfaceRenderer {
    surface: BackingSurface,
    source: Box<dyn AssetSource>,
    latest: Option<(LoadTicket, u32)>,
    torn_down: bool,
}

impl SurfaceRenderer {
    /// Create a renderer over the given asset source with an unallocated
    /// surface.
    pub fn new(source: Box<dyn AssetSource>) -> Self {
        Self {
            surface: BackingSurface::new(),
            source,
            latest: None,
            torn_down: false,
        }
    }

    /// Resize the backing store for a sprite of base `size_px`.
    ///
    /// Logical dimensions become `size_px * 1.2` square; device dimensions
    /// are scaled by `device_pixel_ratio`. Safe to call any number of times.
    pub fn resize(&mut self, size_px: f64, device_pixel_ratio: f64) {
        if self.torn_down {
            return;
        }
        let logical = size_px * LOGICAL_SCALE;
        self.surface.resize(logical, logical, device_pixel_ratio);
    }

    /// Request a repaint for `frame_index`, superseding any in-flight load.
    pub fn paint(&mut self, frame_index: u32) {
        if self.torn_down {
            return;
        }
        let ticket = self.source.begin_load(frame_index);
        self.latest = Some((ticket, frame_index));
    }

    /// Drain finished loads, applying only the most recent request.
    pub fn pump(&mut self) {
        while let Some(done) = self.source.poll_completion() {
            if self.torn_down {
                tracing::debug!("ignoring load completion after teardown");
                continue;
            }
            match done {
                LoadCompletion::Ready {
                    ticket,
                    frame_index,
                    frame,
                } => match self.latest {
                    Some((latest, _)) if latest == ticket => self.apply(&frame),
                    _ => tracing::debug!(frame_index, "discarding stale frame load"),
                },
                LoadCompletion::Failed {
                    frame_index,
                    reason,
                    ..
                } => {
                    tracing::warn!(frame_index, %reason, "frame load failed; keeping previous content");
                }
            }
        }
    }

    fn apply(&mut self, frame: &DecodedFrame) {
        if self.surface.width() == 0 || self.surface.height() == 0 {
            return;
        }
        let expected = frame.width as usize * frame.height as usize * 4;
        if frame.rgba8_premul.len() != expected {
            tracing::warn!(
                width = frame.width,
                height = frame.height,
                len = frame.rgba8_premul.len(),
                "mis-sized frame buffer; keeping previous content"
            );
            return;
        }
        self.surface.clear();
        blit_stretched(frame, &mut self.surface);
    }

    /// The owned backing surface.
    pub fn surface(&self) -> &BackingSurface {
        &self.surface
    }

    /// Allocation counters of the backing surface.
    pub fn stats(&self) -> SurfaceStats {
        self.surface.stats()
    }

    /// Release the backing surface and invalidate any in-flight load.
    ///
    /// After teardown every operation is a guarded no-op, so a late load
    /// completion can never paint.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.latest = None;
        self.surface.release();
    }

    /// Whether teardown has run.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

/// Nearest-neighbor stretch of `frame` over the whole surface. Aspect ratio
/// is not preserved.
fn blit_stretched(frame: &DecodedFrame, surface: &mut BackingSurface) {
    let dw = surface.width() as usize;
    let dh = surface.height() as usize;
    let sw = frame.width as usize;
    let sh = frame.height as usize;
    if dw == 0 || dh == 0 || sw == 0 || sh == 0 {
        return;
    }
    let src = frame.rgba8_premul.clone();
    let dst = surface.data_mut();
    for dy in 0..dh {
        let sy = (dy * sh) / dh;
        let src_row = &src[sy * sw * 4..(sy + 1) * sw * 4];
        let dst_row = &mut dst[dy * dw * 4..(dy + 1) * dw * 4];
        for dx in 0..dw {
            let sx = (dx * sw) / dw;
            dst_row[dx * 4..dx * 4 + 4].copy_from_slice(&src_row[sx * 4..sx * 4 + 4]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
