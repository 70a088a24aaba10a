//! `framekit-spatial` – vector and rotation algebra for frame-tagged geometry.
//!
//! The value types the rest of the workspace builds on:
//!
//! - [`vector`] – [`Vector`][vector::Vector]: a 3-component point or
//!   direction tagged with the reference frame it is expressed in.
//! - [`rotation`] – [`Rotation`][rotation::Rotation]: an orthonormal 3×3
//!   rotation matrix with axis-angle construction and extraction.
//!
//! # Example
//!
//! ```rust
//! use framekit_spatial::{Rotation, Vector};
//!
//! // A quarter turn about z carries x onto y.
//! let axis = Vector::universal(0.0, 0.0, 1.0);
//! let quarter = Rotation::from_axis_angle(axis, std::f64::consts::FRAC_PI_2)?;
//! let spun = quarter.rotate(Vector::universal(1.0, 0.0, 0.0));
//! assert!(spun.components[0].abs() < 1e-9);
//! assert!((spun.components[1] - 1.0).abs() < 1e-9);
//! # Ok::<(), framekit_types::FrameError>(())
//! ```

pub mod rotation;
pub mod vector;

pub use rotation::Rotation;
pub use vector::Vector;
