//! Frame-tagged 3-component vectors.

use framekit_types::{FrameError, FrameId};

/// A point or direction in 3-space, tagged with the frame it is expressed in.
///
/// `frame == None` denotes the universal frame.  Vectors are immutable
/// values: every operation returns a new `Vector`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    /// x, y, z components.
    pub components: [f64; 3],
    /// Frame the components are expressed in; `None` is the universal frame.
    pub frame: Option<FrameId>,
}

impl Vector {
    /// Create a vector with an explicit frame tag.
    pub fn from_components(x: f64, y: f64, z: f64, frame: Option<FrameId>) -> Self {
        Self {
            components: [x, y, z],
            frame,
        }
    }

    /// Create a vector expressed in the universal frame.
    pub fn universal(x: f64, y: f64, z: f64) -> Self {
        Self::from_components(x, y, z, None)
    }

    /// Create a vector expressed in `frame`.
    pub fn in_frame(x: f64, y: f64, z: f64, frame: FrameId) -> Self {
        Self::from_components(x, y, z, Some(frame))
    }

    /// Component-wise sum.
    ///
    /// Both operands must carry the same frame tag; adding vectors expressed
    /// in different frames is a [`FrameError::FrameMismatch`].
    pub fn add(self, other: Self) -> Result<Self, FrameError> {
        if self.frame != other.frame {
            return Err(FrameError::FrameMismatch {
                expected: self.frame,
                found: other.frame,
            });
        }
        Ok(Self {
            components: [
                self.components[0] + other.components[0],
                self.components[1] + other.components[1],
                self.components[2] + other.components[2],
            ],
            frame: self.frame,
        })
    }

    /// Negate every component, keeping the frame tag.
    pub fn negate(self) -> Self {
        Self {
            components: [
                -self.components[0],
                -self.components[1],
                -self.components[2],
            ],
            frame: self.frame,
        }
    }

    /// Euclidean norm.
    pub fn magnitude(self) -> f64 {
        self.components.iter().map(|c| c * c).sum::<f64>().sqrt()
    }
}
