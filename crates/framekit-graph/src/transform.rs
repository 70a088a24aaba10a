//! Rigid transforms between reference frames.

use framekit_spatial::{Rotation, Vector};
use framekit_types::{FrameError, FrameId};

/// A rigid map from a source frame into a destination frame.
///
/// `origin` is the source frame's origin expressed in the destination frame,
/// so the destination is `origin.frame` by definition and the two can never
/// disagree.  A transform whose origin is tagged universal
/// (`dest() == None`) is a *root* pose: a graph records it for bookkeeping,
/// but it contributes no edge and cannot be inverted.
///
/// Transforms are immutable values.  Building, composing, or inverting one
/// never touches a [`FrameGraph`]; registration is a separate, explicit
/// step.
///
/// [`FrameGraph`]: crate::graph::FrameGraph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    rotation: Rotation,
    origin: Vector,
    source: FrameId,
}

impl Transform {
    /// Create the transform mapping vectors expressed in `source` into
    /// `origin.frame`.
    pub fn new(rotation: Rotation, origin: Vector, source: FrameId) -> Self {
        Self {
            rotation,
            origin,
            source,
        }
    }

    /// The rotation part.
    pub fn rotation(self) -> Rotation {
        self.rotation
    }

    /// The source frame's origin expressed in the destination frame.
    pub fn origin(self) -> Vector {
        self.origin
    }

    /// Frame this transform maps from.
    pub fn source(self) -> FrameId {
        self.source
    }

    /// Frame this transform maps into; `None` for a root pose.
    pub fn dest(self) -> Option<FrameId> {
        self.origin.frame
    }

    /// Re-express `p` in the destination frame: `R·p + origin`.
    ///
    /// `p` must be tagged with the source frame, else the call is a
    /// [`FrameError::FrameMismatch`].
    pub fn apply_to_vector(self, p: Vector) -> Result<Vector, FrameError> {
        if p.frame != Some(self.source) {
            return Err(FrameError::FrameMismatch {
                expected: Some(self.source),
                found: p.frame,
            });
        }
        let rotated = self.rotation.rotate(p);
        // Retag into the destination frame before adding the origin offset.
        Vector::from_components(
            rotated.components[0],
            rotated.components[1],
            rotated.components[2],
            self.origin.frame,
        )
        .add(self.origin)
    }

    /// The transform "apply `other` first, then `self`".
    ///
    /// `other` must land in `self`'s source frame; a root `other` (no
    /// destination) never chains.  The composite maps `other`'s source into
    /// `self`'s destination.
    pub fn compose(self, other: Self) -> Result<Self, FrameError> {
        if other.dest() != Some(self.source) {
            return Err(FrameError::FrameMismatch {
                expected: Some(self.source),
                found: other.dest(),
            });
        }
        let origin = self.apply_to_vector(other.origin)?;
        Ok(Self {
            rotation: self.rotation.compose(other.rotation),
            origin,
            source: other.source,
        })
    }

    /// The inverse map, destination back to source.
    ///
    /// A root pose has no destination frame to serve as the inverse's
    /// source, so inverting one is a [`FrameError::MissingDestination`].
    pub fn invert(self) -> Result<Self, FrameError> {
        let dest = self.dest().ok_or(FrameError::MissingDestination)?;
        let rotation = self.rotation.invert();
        let negated = rotation.rotate(self.origin).negate();
        let origin = Vector::from_components(
            negated.components[0],
            negated.components[1],
            negated.components[2],
            Some(self.source),
        );
        Ok(Self {
            rotation,
            origin,
            source: dest,
        })
    }
}
