//! Frame registry and direct-edge storage.

use std::collections::HashMap;

use tracing::warn;

use framekit_types::{FrameError, FrameId};

use crate::transform::Transform;

/// A named frame plus its outgoing direct edges.
#[derive(Debug)]
pub(crate) struct FrameNode {
    pub(crate) name: String,
    /// Destination frame → the registered transform reaching it directly.
    pub(crate) edges: HashMap<FrameId, Transform>,
}

/// Registry of reference frames and the transforms connecting them.
///
/// The graph owns everything: frames are appended with
/// [`add_frame`][Self::add_frame] and addressed by the returned [`FrameId`];
/// a [`Transform`] value becomes an edge only through an explicit
/// [`register_edge`][Self::register_edge] / [`register`][Self::register]
/// call.  Multiple independent graphs can coexist; nothing is
/// process-global.  Ids are plain indices: out-of-range ones are rejected,
/// but an in-range id minted by another graph cannot be told apart from
/// this graph's own, so ids must stay with the graph that issued them.
///
/// Mutation takes `&mut self` and resolution takes `&self`, so a resolver
/// can never observe a graph mid-update.
#[derive(Debug, Default)]
pub struct FrameGraph {
    pub(crate) frames: Vec<FrameNode>,
    /// Poses recorded against the universal frame; bookkeeping, not edges.
    pub(crate) roots: Vec<Transform>,
}

impl FrameGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a frame, returning its handle.
    ///
    /// Names are for display and debugging only; duplicates are allowed.
    /// Frames are never removed and ids stay dense in creation order.
    pub fn add_frame(&mut self, name: &str) -> FrameId {
        let id = FrameId::new(self.frames.len() as u32);
        self.frames.push(FrameNode {
            name: name.to_string(),
            edges: HashMap::new(),
        });
        id
    }

    /// Number of registered frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the graph holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Whether `id` indexes a frame of this graph.
    ///
    /// Only the range is checked; an in-range id issued by another graph is
    /// indistinguishable from one of this graph's own.
    pub fn contains(&self, id: FrameId) -> bool {
        (id.index() as usize) < self.frames.len()
    }

    /// Name of a frame, or `None` for a foreign id.
    pub fn name(&self, id: FrameId) -> Option<&str> {
        self.frames.get(id.index() as usize).map(|f| f.name.as_str())
    }

    /// All frame ids, in registration order.
    pub fn frames(&self) -> impl Iterator<Item = FrameId> {
        (0..self.frames.len() as u32).map(FrameId::new)
    }

    /// Register `transform` as the direct edge out of `frame`.
    ///
    /// `frame` must be the transform's declared source and both endpoints
    /// must belong to this graph.  A root pose (no destination) lands in the
    /// root list instead of becoming an edge.  When an edge for the same
    /// source→destination pair already exists the new transform replaces it:
    /// last write wins.
    pub fn register_edge(&mut self, frame: FrameId, transform: Transform) -> Result<(), FrameError> {
        if !self.contains(frame) {
            return Err(FrameError::UnknownFrame(frame));
        }
        if transform.source() != frame {
            return Err(FrameError::SourceMismatch {
                frame,
                transform_source: transform.source(),
            });
        }
        match transform.dest() {
            None => self.roots.push(transform),
            Some(dest) => {
                if !self.contains(dest) {
                    return Err(FrameError::UnknownFrame(dest));
                }
                let node = &mut self.frames[frame.index() as usize];
                if node.edges.insert(dest, transform).is_some() {
                    warn!(
                        source = frame.index(),
                        dest = dest.index(),
                        "replacing an existing direct transform"
                    );
                }
            }
        }
        Ok(())
    }

    /// Register a transform against its own source frame.
    pub fn register(&mut self, transform: Transform) -> Result<(), FrameError> {
        self.register_edge(transform.source(), transform)
    }

    /// The direct edge from `source` to `dest`, if one is registered.
    pub fn transform(&self, source: FrameId, dest: FrameId) -> Option<&Transform> {
        self.frames.get(source.index() as usize)?.edges.get(&dest)
    }

    /// Frames directly reachable from `frame`, in unspecified order.
    ///
    /// Empty for a foreign id.
    pub fn destinations(&self, frame: FrameId) -> impl Iterator<Item = FrameId> {
        self.frames
            .get(frame.index() as usize)
            .into_iter()
            .flat_map(|f| f.edges.keys().copied())
    }

    /// Poses recorded against the universal frame, in registration order.
    pub fn root_transforms(&self) -> &[Transform] {
        &self.roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use framekit_spatial::{Rotation, Vector};

    fn edge(source: FrameId, dest: FrameId) -> Transform {
        Transform::new(
            Rotation::identity(),
            Vector::in_frame(1.0, 0.0, 0.0, dest),
            source,
        )
    }

    // ── Frame registry ──────────────────────────────────────────────────────

    #[test]
    fn add_frame_assigns_dense_ids() {
        let mut graph = FrameGraph::new();
        let a = graph.add_frame("A");
        let b = graph.add_frame("B");
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(graph.len(), 2);
        assert!(!graph.is_empty());
        assert_eq!(graph.name(a), Some("A"));
        assert_eq!(graph.name(b), Some("B"));
    }

    #[test]
    fn frames_iterate_in_registration_order() {
        let mut graph = FrameGraph::new();
        let a = graph.add_frame("A");
        let b = graph.add_frame("B");
        let c = graph.add_frame("C");
        let ids: Vec<FrameId> = graph.frames().collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn foreign_ids_are_rejected() {
        let mut graph = FrameGraph::new();
        graph.add_frame("A");
        let foreign = FrameId::new(99);
        assert!(!graph.contains(foreign));
        assert_eq!(graph.name(foreign), None);
        assert_eq!(graph.destinations(foreign).count(), 0);
    }

    #[test]
    fn in_range_ids_alias_across_graphs() {
        // Ids are plain indices: a graph accepts an id minted by another
        // graph whenever it is in range.  Keeping ids with their graph is
        // the caller's job.
        let mut first = FrameGraph::new();
        let from_first = first.add_frame("A");

        let mut second = FrameGraph::new();
        let native = second.add_frame("X");
        assert_eq!(from_first, native);
        assert!(second.contains(from_first));
        assert_eq!(second.name(from_first), Some("X"));
    }

    // ── Edge registration ───────────────────────────────────────────────────

    #[test]
    fn register_stores_a_direct_edge() {
        let mut graph = FrameGraph::new();
        let o = graph.add_frame("O");
        let a = graph.add_frame("A");
        graph.register(edge(a, o)).unwrap();

        let stored = graph.transform(a, o).unwrap();
        assert_eq!(stored.source(), a);
        assert_eq!(stored.dest(), Some(o));
        assert_eq!(graph.destinations(a).collect::<Vec<_>>(), vec![o]);
        assert_eq!(graph.transform(o, a), None);
    }

    #[test]
    fn register_edge_rejects_source_mismatch() {
        let mut graph = FrameGraph::new();
        let o = graph.add_frame("O");
        let a = graph.add_frame("A");
        let b = graph.add_frame("B");
        match graph.register_edge(b, edge(a, o)) {
            Err(FrameError::SourceMismatch {
                frame,
                transform_source,
            }) => {
                assert_eq!(frame, b);
                assert_eq!(transform_source, a);
            }
            _ => panic!("expected SourceMismatch"),
        }
        assert_eq!(graph.transform(a, o), None);
    }

    #[test]
    fn register_edge_rejects_unknown_host_frame() {
        let mut graph = FrameGraph::new();
        let o = graph.add_frame("O");
        let foreign = FrameId::new(42);
        match graph.register_edge(foreign, edge(foreign, o)) {
            Err(FrameError::UnknownFrame(id)) => assert_eq!(id, foreign),
            _ => panic!("expected UnknownFrame"),
        }
    }

    #[test]
    fn register_rejects_unknown_destination() {
        let mut graph = FrameGraph::new();
        let a = graph.add_frame("A");
        let foreign = FrameId::new(42);
        match graph.register(edge(a, foreign)) {
            Err(FrameError::UnknownFrame(id)) => assert_eq!(id, foreign),
            _ => panic!("expected UnknownFrame"),
        }
        assert_eq!(graph.destinations(a).count(), 0);
    }

    #[test]
    fn register_replaces_existing_edge() {
        // Last write wins for a repeated source→destination pair.
        let mut graph = FrameGraph::new();
        let o = graph.add_frame("O");
        let a = graph.add_frame("A");
        graph.register(edge(a, o)).unwrap();

        let replacement = Transform::new(
            Rotation::identity(),
            Vector::in_frame(5.0, 0.0, 0.0, o),
            a,
        );
        graph.register(replacement).unwrap();

        let stored = graph.transform(a, o).unwrap();
        assert!((stored.origin().components[0] - 5.0).abs() < 1e-9);
        assert_eq!(graph.destinations(a).count(), 1);
    }

    #[test]
    fn root_pose_is_recorded_but_not_edged() {
        let mut graph = FrameGraph::new();
        let o = graph.add_frame("O");
        let root = Transform::new(
            Rotation::identity(),
            Vector::universal(0.0, 0.0, 0.0),
            o,
        );
        graph.register(root).unwrap();

        assert_eq!(graph.root_transforms().len(), 1);
        assert_eq!(graph.root_transforms()[0].source(), o);
        assert_eq!(graph.destinations(o).count(), 0);
    }

    #[test]
    fn composing_values_leaves_the_graph_unchanged() {
        let mut graph = FrameGraph::new();
        let o = graph.add_frame("O");
        let a = graph.add_frame("A");
        let b = graph.add_frame("B");
        graph.register(edge(a, o)).unwrap();
        graph.register(edge(b, a)).unwrap();

        let t_ao = *graph.transform(a, o).unwrap();
        let t_ba = *graph.transform(b, a).unwrap();
        let composite = t_ao.compose(t_ba).unwrap();
        assert_eq!(composite.source(), b);
        assert_eq!(composite.dest(), Some(o));

        // The composite is a plain value until someone registers it.
        assert_eq!(graph.transform(b, o), None);
        let inverse = t_ao.invert().unwrap();
        assert_eq!(inverse.source(), o);
        assert_eq!(graph.transform(o, a), None);
    }
}
