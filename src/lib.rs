//! Cyclorama is a scroll-synchronized sprite playback engine.
//!
//! Each configured layer owns one independently animated surface: a frame
//! cycle advances an integer frame index on wall-clock time, a renderer blits
//! the corresponding raster frame into a device-pixel-correct backing
//! surface, and a parallax coefficient derived from the layer's stacking
//! depth tells an external scroll engine how fast to translate the surface.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: a [`Scene`] is an ordered set of layer groups, built from
//!    JSON or programmatically via [`SceneBuilder`]
//! 2. **Mount**: [`SceneComposer`] spawns one [`SurfaceController`] per layer
//!    of each visible group
//! 3. **Tick**: the host's per-frame callback advances frame cycles and the
//!    entrance transitions, repainting surfaces on frame change
//! 4. **Scroll**: the host's scroll engine reads each surface's parallax
//!    coefficient and offsets it by `scroll_position * coefficient`
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No hidden clocks**: hosts drive ticks with explicit elapsed seconds,
//!   so playback is deterministic under simulated time.
//! - **Non-blocking asset loads**: frame loads complete asynchronously via
//!   polling; stale completions are discarded, failed loads degrade silently
//!   by retaining the previously painted content.
//! - **Premultiplied RGBA8** end-to-end: backing surfaces hold premultiplied
//!   pixels sized in device pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod foundation;
mod render;
mod scene;

pub use animation::cycler::FrameCycler;
pub use animation::ease::Ease;
pub use animation::entrance::{ENTRANCE_DURATION_SEC, EntranceTransition};
pub use assets::decode::{DecodedFrame, decode_frame};
pub use assets::source::{
    AssetSource, CompletionOrder, ImageSequenceSource, InMemorySource, LoadCompletion, LoadTicket,
};
pub use foundation::core::{Point, Rect, Rgba8Premul, Vec2};
pub use foundation::error::{CycloramaError, CycloramaResult};
pub use render::renderer::{LOGICAL_SCALE, SurfaceRenderer};
pub use render::surface::{BackingSurface, SurfaceStats};
pub use scene::composer::{
    BOUNDARY_MARGIN_PX, SceneComposer, ScrollBoundary, SourceFactory, SurfacePlacement, Theme,
};
pub use scene::controller::{OUTER_SCALE, SurfaceController};
pub use scene::dsl::{LayerConfigBuilder, SceneBuilder};
pub use scene::model::{LayerConfig, LayerGroup, Scene};
pub use scene::parallax::{scroll_speed, scroll_speed_attr};
pub use scene::scroll::ScrollEngine;
