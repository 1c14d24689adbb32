use std::collections::{BTreeMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;

use crate::assets::decode::{DecodedFrame, decode_frame};
use crate::foundation::error::{CycloramaError, CycloramaResult};

/// Handle identifying one in-flight frame load.
///
/// Tickets are monotonically increasing per source; the renderer uses them to
/// recognize and discard completions superseded by a newer paint request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(pub u64);

/// Outcome of one finished frame load.
#[derive(Clone, Debug)]
pub enum LoadCompletion {
    /// Frame bytes resolved and decoded.
    Ready {
        /// Ticket of the originating request.
        ticket: LoadTicket,
        /// Frame index that was requested.
        frame_index: u32,
        /// The decoded frame.
        frame: DecodedFrame,
    },
    /// Load failed; callers retain previously painted content.
    Failed {
        /// Ticket of the originating request.
        ticket: LoadTicket,
        /// Frame index that was requested.
        frame_index: u32,
        /// Human-readable failure description.
        reason: String,
    },
}

impl LoadCompletion {
    /// Ticket of the originating request.
    pub fn ticket(&self) -> LoadTicket {
        match self {
            Self::Ready { ticket, .. } | Self::Failed { ticket, .. } => *ticket,
        }
    }
}

/// Maps integer frame indices to raster frames, completing loads
/// asynchronously.
///
/// `begin_load` is fire-and-forget: it never blocks and returns a ticket.
/// Completions are delivered later through `poll_completion`, possibly out of
/// request order, possibly never (a source may drop work when its owner goes
/// away). Load failure is reported as a [`LoadCompletion::Failed`] value,
/// never as a panic.
pub trait AssetSource {
    /// Start loading `frame_index`; returns a ticket identifying the request.
    fn begin_load(&mut self, frame_index: u32) -> LoadTicket;

    /// Deliver at most one finished load, if any is ready.
    fn poll_completion(&mut self) -> Option<LoadCompletion>;
}

/// Asset source backed by an ordered list of image files.
///
/// The frame index is a direct index into the file list; out-of-range
/// indices complete as [`LoadCompletion::Failed`]. Files are read and decoded
/// on poll, one completion per call, in request order.
#[derive(Debug, Default)]
pub struct ImageSequenceSource {
    paths: Vec<PathBuf>,
    pending: VecDeque<(LoadTicket, u32)>,
    next_ticket: u64,
}

impl ImageSequenceSource {
    /// Create a source over an explicit ordered file list.
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            pending: VecDeque::new(),
            next_ticket: 0,
        }
    }

    /// Create a source from a directory, taking image files in sorted name
    /// order.
    pub fn from_dir(dir: &Path) -> CycloramaResult<Self> {
        let mut paths = Vec::new();
        let entries =
            std::fs::read_dir(dir).with_context(|| format!("read frame dir '{}'", dir.display()))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("read frame dir '{}'", dir.display()))?;
            let path = entry.path();
            let is_image = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| matches!(e.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg" | "webp"));
            if is_image {
                paths.push(path);
            }
        }
        paths.sort();
        if paths.is_empty() {
            return Err(CycloramaError::asset(format!(
                "no image files in '{}'",
                dir.display()
            )));
        }
        Ok(Self::new(paths))
    }

    /// Number of files in the sequence.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the sequence has no files.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn load(&self, frame_index: u32) -> CycloramaResult<DecodedFrame> {
        let path = self.paths.get(frame_index as usize).ok_or_else(|| {
            CycloramaError::asset(format!(
                "frame index {frame_index} outside sequence of {} files",
                self.paths.len()
            ))
        })?;
        let bytes =
            std::fs::read(path).with_context(|| format!("read frame '{}'", path.display()))?;
        decode_frame(&bytes)
    }
}

impl AssetSource for ImageSequenceSource {
    fn begin_load(&mut self, frame_index: u32) -> LoadTicket {
        let ticket = LoadTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.push_back((ticket, frame_index));
        ticket
    }

    fn poll_completion(&mut self) -> Option<LoadCompletion> {
        let (ticket, frame_index) = self.pending.pop_front()?;
        Some(match self.load(frame_index) {
            Ok(frame) => LoadCompletion::Ready {
                ticket,
                frame_index,
                frame,
            },
            Err(e) => LoadCompletion::Failed {
                ticket,
                frame_index,
                reason: e.to_string(),
            },
        })
    }
}

/// Completion delivery order for [`InMemorySource`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompletionOrder {
    /// Complete requests oldest-first.
    #[default]
    Fifo,
    /// Complete requests newest-first, modeling out-of-order loads.
    Lifo,
}

/// Scriptable in-memory asset source used by tests and demos.
///
/// Frames are pre-decoded; completion order and stalling are controllable so
/// out-of-order and in-flight load scenarios can be driven deterministically.
#[derive(Debug, Default)]
pub struct InMemorySource {
    frames: BTreeMap<u32, DecodedFrame>,
    pending: VecDeque<(LoadTicket, u32)>,
    order: CompletionOrder,
    stalled: bool,
    next_ticket: u64,
}

impl InMemorySource {
    /// Create an empty FIFO source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty source with the given completion order.
    pub fn with_order(order: CompletionOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Register a pre-decoded frame.
    pub fn insert_frame(&mut self, frame_index: u32, frame: DecodedFrame) {
        self.frames.insert(frame_index, frame);
    }

    /// Register a solid-color frame in straight-alpha RGBA8.
    pub fn insert_solid(&mut self, frame_index: u32, width: u32, height: u32, rgba: [u8; 4]) {
        let premul = crate::foundation::core::Rgba8Premul::from_straight(rgba).0;
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&premul);
        }
        self.insert_frame(
            frame_index,
            DecodedFrame {
                width,
                height,
                rgba8_premul: Arc::new(data),
            },
        );
    }

    /// Hold all completions while `true`, keeping requests in flight.
    pub fn set_stalled(&mut self, stalled: bool) {
        self.stalled = stalled;
    }

    /// Number of requests awaiting completion.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl AssetSource for InMemorySource {
    fn begin_load(&mut self, frame_index: u32) -> LoadTicket {
        let ticket = LoadTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.push_back((ticket, frame_index));
        ticket
    }

    fn poll_completion(&mut self) -> Option<LoadCompletion> {
        if self.stalled {
            return None;
        }
        let (ticket, frame_index) = match self.order {
            CompletionOrder::Fifo => self.pending.pop_front()?,
            CompletionOrder::Lifo => self.pending.pop_back()?,
        };
        Some(match self.frames.get(&frame_index) {
            Some(frame) => LoadCompletion::Ready {
                ticket,
                frame_index,
                frame: frame.clone(),
            },
            None => LoadCompletion::Failed {
                ticket,
                frame_index,
                reason: format!("no frame registered for index {frame_index}"),
            },
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
