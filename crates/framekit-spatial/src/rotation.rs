//! Orthonormal 3×3 rotation matrices.
//!
//! Rotations are built with [`Rotation::from_axis_angle`] (Rodrigues'
//! formula), composed, inverted by transposition, and recovered back into
//! axis-angle form.  The matrix field is private: every construction path
//! preserves orthonormality, so arbitrary matrices never enter the system.

use framekit_types::FrameError;

use crate::vector::Vector;

/// Angles below this are treated as the identity rotation.
const ZERO_ANGLE_TOLERANCE: f64 = 1e-9;

/// Band around θ = π inside which skew extraction is too ill-conditioned.
const STRAIGHT_ANGLE_TOLERANCE: f64 = 1e-6;

/// A right-handed rotation in 3-space, stored as an orthonormal matrix in
/// row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    matrix: [[f64; 3]; 3],
}

impl Rotation {
    /// The identity rotation.
    pub fn identity() -> Self {
        Self {
            matrix: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Build the right-handed rotation by `theta` radians about `axis`.
    ///
    /// The axis is normalized internally, so it need not be unit length; its
    /// frame tag is ignored (rotations are frame-free).  A zero-magnitude
    /// axis is a [`FrameError::DegenerateAxis`].
    ///
    /// Uses `sin(theta)` directly rather than `sqrt(1 - cos²θ)`, so the
    /// right-hand rule holds for any `theta` in `[0, 2π)` and beyond.
    pub fn from_axis_angle(axis: Vector, theta: f64) -> Result<Self, FrameError> {
        let mag = axis.magnitude();
        if mag <= f64::EPSILON {
            return Err(FrameError::DegenerateAxis);
        }
        let kx = axis.components[0] / mag;
        let ky = axis.components[1] / mag;
        let kz = axis.components[2] / mag;

        let c = theta.cos();
        let s = theta.sin();
        let v = 1.0 - c;

        // Rodrigues: R = cI + s[k]× + (1 − c)kkᵀ
        Ok(Self {
            matrix: [
                [
                    c + kx * kx * v,
                    kx * ky * v - kz * s,
                    kx * kz * v + ky * s,
                ],
                [
                    ky * kx * v + kz * s,
                    c + ky * ky * v,
                    ky * kz * v - kx * s,
                ],
                [
                    kz * kx * v - ky * s,
                    kz * ky * v + kx * s,
                    c + kz * kz * v,
                ],
            ],
        })
    }

    /// Recover `(axis, theta)` with `theta` in `[0, π]` such that
    /// [`Rotation::from_axis_angle`] rebuilds this matrix within floating
    /// tolerance.
    ///
    /// The identity has no defined axis and returns the unit x axis with
    /// `theta = 0`.  At `theta = π` both axis signs denote the same rotation
    /// and the returned sign is arbitrary.  The axis is tagged universal.
    pub fn to_axis_angle(self) -> (Vector, f64) {
        let m = &self.matrix;
        let trace = m[0][0] + m[1][1] + m[2][2];
        let c = ((trace - 1.0) / 2.0).clamp(-1.0, 1.0);
        let theta = c.acos();

        if theta < ZERO_ANGLE_TOLERANCE {
            return (Vector::universal(1.0, 0.0, 0.0), 0.0);
        }

        if std::f64::consts::PI - theta < STRAIGHT_ANGLE_TOLERANCE {
            // The skew part vanishes near θ = π.  There R ≈ −I + 2kkᵀ, so
            // read the axis off the symmetric part, starting from the
            // dominant diagonal to stay well conditioned.
            let v = 1.0 - c;
            let (i, j, k) = if m[0][0] >= m[1][1] && m[0][0] >= m[2][2] {
                (0, 1, 2)
            } else if m[1][1] >= m[2][2] {
                (1, 2, 0)
            } else {
                (2, 0, 1)
            };
            let mut axis = [0.0; 3];
            axis[i] = ((m[i][i] - c) / v).max(0.0).sqrt();
            axis[j] = (m[i][j] + m[j][i]) / (2.0 * axis[i] * v);
            axis[k] = (m[i][k] + m[k][i]) / (2.0 * axis[i] * v);
            // Just short of π the residual skew R − Rᵀ = 2 sin(θ)[k]× still
            // fixes the rotation sense; the recovered axis must align with
            // it.  At exactly π the skew vanishes and either sign denotes
            // the same rotation.
            let skew = [
                m[2][1] - m[1][2],
                m[0][2] - m[2][0],
                m[1][0] - m[0][1],
            ];
            if axis[0] * skew[0] + axis[1] * skew[1] + axis[2] * skew[2] < 0.0 {
                for component in &mut axis {
                    *component = -*component;
                }
            }
            return (Vector::universal(axis[0], axis[1], axis[2]), theta);
        }

        // General case: R − Rᵀ = 2 sin(θ) [k]×.
        let s2 = 2.0 * theta.sin();
        let axis = Vector::universal(
            (m[2][1] - m[1][2]) / s2,
            (m[0][2] - m[2][0]) / s2,
            (m[1][0] - m[0][1]) / s2,
        );
        (axis, theta)
    }

    /// Matrix product: apply `other` first, then `self`.
    pub fn compose(self, other: Self) -> Self {
        let mut matrix = [[0.0; 3]; 3];
        for (i, row) in matrix.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = (0..3)
                    .map(|k| self.matrix[i][k] * other.matrix[k][j])
                    .sum();
            }
        }
        Self { matrix }
    }

    /// The inverse rotation (transpose of an orthonormal matrix).
    pub fn invert(self) -> Self {
        let m = &self.matrix;
        Self {
            matrix: [
                [m[0][0], m[1][0], m[2][0]],
                [m[0][1], m[1][1], m[2][1]],
                [m[0][2], m[1][2], m[2][2]],
            ],
        }
    }

    /// Matrix-vector product, preserving `v`'s frame tag.
    ///
    /// Rotating a vector does not re-express it in another frame; that
    /// bookkeeping belongs to the transform applying the rotation.
    pub fn rotate(self, v: Vector) -> Vector {
        let m = &self.matrix;
        let [x, y, z] = v.components;
        Vector::from_components(
            m[0][0] * x + m[0][1] * y + m[0][2] * z,
            m[1][0] * x + m[1][1] * y + m[1][2] * z,
            m[2][0] * x + m[2][1] * y + m[2][2] * z,
            v.frame,
        )
    }

    /// Copy of the underlying matrix, row-major.
    pub fn matrix(self) -> [[f64; 3]; 3] {
        self.matrix
    }
}
