use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Handle for a frame hosted by a `FrameGraph`.
///
/// Ids are dense indices handed out in registration order.  They are only
/// meaningful for the graph that issued them.  An out-of-range id is
/// reported as [`FrameError::UnknownFrame`]; an in-range id minted by a
/// different graph is indistinguishable from a native one, so keeping ids
/// with their graph is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameId(u32);

impl FrameId {
    /// Wrap a raw registry index.
    ///
    /// Ids are normally obtained from `FrameGraph::add_frame`; constructing
    /// one by hand is only useful in tests and tooling.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// The raw index into the owning graph's registry.
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Workspace-wide error type spanning vector arithmetic, rotation
/// construction, transform registration, and path resolution.
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum FrameError {
    /// Two frame-tagged values were combined but their frames differ.
    /// `None` stands for the universal frame.
    #[error("Frame Mismatch: expected {expected:?}, found {found:?}")]
    FrameMismatch {
        expected: Option<FrameId>,
        found: Option<FrameId>,
    },

    /// A transform was registered against a frame that is not its source.
    #[error("Source Mismatch: frame {frame:?} cannot host a transform sourced at {transform_source:?}")]
    SourceMismatch {
        frame: FrameId,
        transform_source: FrameId,
    },

    /// Axis-angle construction was given a zero-magnitude axis.
    #[error("Degenerate Axis: rotation axis has zero magnitude")]
    DegenerateAxis,

    /// No chain of registered transforms connects the two frames.
    #[error("Unreachable Frame: no transform chain from {from:?} to {to:?}")]
    Unreachable { from: FrameId, to: FrameId },

    /// The id is out of range for this graph's registry.
    #[error("Unknown Frame: {0:?} is not hosted by this graph")]
    UnknownFrame(FrameId),

    /// A root transform (no destination frame) was used where a destination
    /// is required, e.g. inversion.
    #[error("Missing Destination: transform has no destination frame")]
    MissingDestination,
}
