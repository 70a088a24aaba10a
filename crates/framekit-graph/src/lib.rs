//! `framekit-graph` – frame registry, rigid transforms, and path resolution.
//!
//! A [`FrameGraph`] owns a set of named reference frames and the rigid
//! [`Transform`]s registered between them.  Transforms are pure values:
//! building, composing, or inverting one never touches a graph, and a value
//! becomes an edge only through an explicit
//! [`register`][FrameGraph::register] call.  Resolution finds the chain of
//! registered transforms connecting two frames that needs the fewest matrix
//! inversions, then folds it into a single composite transform.
//!
//! # Modules
//!
//! - [`graph`] – the frame registry and direct-edge storage.
//! - [`transform`] – rigid source→destination maps over frame-tagged vectors.
//! - [`resolver`] – cheapest-path search (cost = inversions) and composite
//!   construction.
//! - [`display`] – adapters rendering vectors, transforms, and resolved
//!   paths with frame names.
//!
//! # Example
//!
//! ```rust
//! use framekit_graph::{FrameGraph, Transform};
//! use framekit_spatial::{Rotation, Vector};
//!
//! let mut graph = FrameGraph::new();
//! let world = graph.add_frame("world");
//! let base = graph.add_frame("base");
//!
//! // base sits one unit along x from world, same orientation.
//! let pose = Transform::new(
//!     Rotation::identity(),
//!     Vector::in_frame(1.0, 0.0, 0.0, world),
//!     base,
//! );
//! graph.register(pose)?;
//!
//! let p = Vector::in_frame(0.0, 2.0, 0.0, base);
//! let in_world = graph.transform_between(base, world)?.apply_to_vector(p)?;
//! assert!((in_world.components[0] - 1.0).abs() < 1e-9);
//! assert!((in_world.components[1] - 2.0).abs() < 1e-9);
//! # Ok::<(), framekit_types::FrameError>(())
//! ```

pub mod display;
pub mod graph;
pub mod resolver;
pub mod transform;

pub use graph::FrameGraph;
pub use resolver::{EdgeUse, PathStep, ResolvedPaths};
pub use transform::Transform;
