//! Cheapest-path resolution over the frame graph.
//!
//! A registered transform is free to follow in its own direction; following
//! it backward stands for computing its inverse and costs 1.  Resolution
//! therefore minimizes the number of inversions along the composition chain,
//! not the hop count.

use tracing::debug;

use framekit_spatial::{Rotation, Vector};
use framekit_types::{FrameError, FrameId};

use crate::graph::FrameGraph;
use crate::transform::Transform;

/// Distance value for frames no relaxation has reached.
const UNREACHED: u32 = u32::MAX;

/// How a registered transform is used along a resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeUse {
    /// The transform applies as registered (cost 0).
    Direct,
    /// The transform runs backward and must be inverted (cost 1).
    Inverted,
}

/// One step of a resolved path: the predecessor frame and how its connecting
/// transform is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub prev: FrameId,
    pub via: EdgeUse,
}

/// Cheapest-path tables from one start frame to every frame of a graph.
///
/// Produced by [`FrameGraph::resolve_paths`]; owns its data and stays valid
/// after the graph changes (it simply describes the graph as it was).
#[derive(Debug)]
pub struct ResolvedPaths {
    start: FrameId,
    dist: Vec<u32>,
    pred: Vec<Option<PathStep>>,
}

impl ResolvedPaths {
    /// The frame resolution started from.
    pub fn start(&self) -> FrameId {
        self.start
    }

    /// Minimum number of inversions needed to reach `frame` from the start,
    /// or `None` when no transform chain connects them (or the id is
    /// foreign).
    pub fn distance(&self, frame: FrameId) -> Option<u32> {
        match self.dist.get(frame.index() as usize) {
            Some(&d) if d != UNREACHED => Some(d),
            _ => None,
        }
    }

    /// Whether any transform chain connects the start to `frame`.
    pub fn is_reachable(&self, frame: FrameId) -> bool {
        self.distance(frame).is_some()
    }

    /// The step leading into `frame` on a cheapest path.  `None` at the
    /// start frame and for unreachable frames.
    pub fn predecessor(&self, frame: FrameId) -> Option<PathStep> {
        self.pred.get(frame.index() as usize).copied().flatten()
    }

    /// Frame sequence from the start to `goal`, inclusive, or `None` when
    /// `goal` is unreachable.
    pub fn path_to(&self, goal: FrameId) -> Option<Vec<FrameId>> {
        if !self.is_reachable(goal) {
            return None;
        }
        let mut path = vec![goal];
        let mut cursor = goal;
        while let Some(step) = self.predecessor(cursor) {
            cursor = step.prev;
            path.push(cursor);
        }
        path.reverse();
        Some(path)
    }
}

impl FrameGraph {
    /// Compute cheapest paths from `start` to every frame in the graph.
    ///
    /// Costs count inversions: following a registered transform forward is
    /// free, following it backward costs 1.  The relaxation works a
    /// last-in-first-out list, so frames may be revisited; distances come
    /// out optimal regardless, but which of several equally cheap
    /// predecessors wins depends on registration order.
    pub fn resolve_paths(&self, start: FrameId) -> Result<ResolvedPaths, FrameError> {
        if !self.contains(start) {
            return Err(FrameError::UnknownFrame(start));
        }
        let n = self.frames.len();

        // Forward adjacencies apply the registered transform; backward ones
        // stand for its inverse.
        let mut adjacency: Vec<Vec<(usize, u32, EdgeUse)>> = vec![Vec::new(); n];
        for (v, node) in self.frames.iter().enumerate() {
            for dest in node.edges.keys() {
                let w = dest.index() as usize;
                adjacency[v].push((w, 0, EdgeUse::Direct));
                adjacency[w].push((v, 1, EdgeUse::Inverted));
            }
        }

        let mut dist = vec![UNREACHED; n];
        let mut pred: Vec<Option<PathStep>> = vec![None; n];
        let mut on_stack = vec![false; n];
        let mut stack = Vec::new();

        let s = start.index() as usize;
        dist[s] = 0;
        stack.push(s);
        on_stack[s] = true;

        let mut relaxations: u64 = 0;
        while let Some(v) = stack.pop() {
            on_stack[v] = false;
            for &(w, cost, via) in &adjacency[v] {
                let candidate = dist[v] + cost;
                if candidate < dist[w] {
                    dist[w] = candidate;
                    pred[w] = Some(PathStep {
                        prev: FrameId::new(v as u32),
                        via,
                    });
                    relaxations += 1;
                    if !on_stack[w] {
                        stack.push(w);
                        on_stack[w] = true;
                    }
                }
            }
        }
        debug!(start = start.index(), frames = n, relaxations, "resolved paths");

        Ok(ResolvedPaths { start, dist, pred })
    }

    /// Build the composite transform mapping `from` into `to` along a
    /// cheapest resolved path.
    ///
    /// The result is a plain value; register it explicitly to make it a
    /// shortcut edge.  `from == to` yields the identity transform; a pair
    /// with no connecting chain is a [`FrameError::Unreachable`].
    pub fn transform_between(&self, from: FrameId, to: FrameId) -> Result<Transform, FrameError> {
        if !self.contains(to) {
            return Err(FrameError::UnknownFrame(to));
        }
        let resolved = self.resolve_paths(from)?;
        let Some(path) = resolved.path_to(to) else {
            return Err(FrameError::Unreachable { from, to });
        };
        if from == to {
            return Ok(Transform::new(
                Rotation::identity(),
                Vector::in_frame(0.0, 0.0, 0.0, to),
                from,
            ));
        }

        let mut composite: Option<Transform> = None;
        for pair in path.windows(2) {
            let (cur, next) = (pair[0], pair[1]);
            let step = match resolved.predecessor(next) {
                Some(step) => step,
                None => unreachable!("path nodes beyond the start always have a predecessor"),
            };
            let leg = match step.via {
                EdgeUse::Direct => match self.transform(cur, next) {
                    Some(t) => *t,
                    None => unreachable!("resolved edge missing from the graph"),
                },
                EdgeUse::Inverted => match self.transform(next, cur) {
                    Some(t) => t.invert()?,
                    None => unreachable!("resolved edge missing from the graph"),
                },
            };
            composite = Some(match composite {
                None => leg,
                Some(acc) => leg.compose(acc)?,
            });
        }
        match composite {
            Some(t) => Ok(t),
            None => unreachable!("non-trivial path has at least one leg"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    /// The reference chain: O ← A ← B ← C, each hop a quarter turn about
    /// x, y, z respectively with a unit offset along the same axis.
    fn reference_chain(graph: &mut FrameGraph) -> (FrameId, FrameId, FrameId, FrameId) {
        let o = graph.add_frame("O");
        let a = graph.add_frame("A");
        let b = graph.add_frame("B");
        let c = graph.add_frame("C");

        let xhat = Vector::in_frame(1.0, 0.0, 0.0, o);
        let rx = Rotation::from_axis_angle(xhat, FRAC_PI_2).unwrap();
        graph.register(Transform::new(rx, xhat, a)).unwrap();

        let yhat = Vector::in_frame(0.0, 1.0, 0.0, a);
        let ry = Rotation::from_axis_angle(yhat, FRAC_PI_2).unwrap();
        graph.register(Transform::new(ry, yhat, b)).unwrap();

        let zhat = Vector::in_frame(0.0, 0.0, 1.0, b);
        let rz = Rotation::from_axis_angle(zhat, FRAC_PI_2).unwrap();
        graph.register(Transform::new(rz, zhat, c)).unwrap();

        (o, a, b, c)
    }

    fn assert_vec_close(v: Vector, expected: [f64; 3]) {
        for i in 0..3 {
            assert!(
                (v.components[i] - expected[i]).abs() < 1e-9,
                "component {}: {} vs {}",
                i,
                v.components[i],
                expected[i]
            );
        }
    }

    // ── Distances ───────────────────────────────────────────────────────────

    #[test]
    fn chain_distances_count_inversions() {
        let mut graph = FrameGraph::new();
        let (o, a, b, c) = reference_chain(&mut graph);

        let from_o = graph.resolve_paths(o).unwrap();
        assert_eq!(from_o.distance(o), Some(0));
        assert_eq!(from_o.distance(a), Some(1));
        assert_eq!(from_o.distance(b), Some(2));
        assert_eq!(from_o.distance(c), Some(3));

        // Every hop from C follows a registered transform forward.
        let from_c = graph.resolve_paths(c).unwrap();
        assert_eq!(from_c.distance(o), Some(0));
        assert_eq!(from_c.distance(a), Some(0));
        assert_eq!(from_c.distance(b), Some(0));
        assert_eq!(from_c.distance(c), Some(0));
    }

    #[test]
    fn start_has_distance_zero_and_no_predecessor() {
        let mut graph = FrameGraph::new();
        let (o, ..) = reference_chain(&mut graph);
        let resolved = graph.resolve_paths(o).unwrap();
        assert_eq!(resolved.start(), o);
        assert_eq!(resolved.distance(o), Some(0));
        assert_eq!(resolved.predecessor(o), None);
        assert_eq!(resolved.path_to(o), Some(vec![o]));
    }

    #[test]
    fn resolve_rejects_foreign_start() {
        let graph = FrameGraph::new();
        assert!(matches!(
            graph.resolve_paths(FrameId::new(0)),
            Err(FrameError::UnknownFrame(_))
        ));
    }

    #[test]
    fn isolated_frame_is_unreachable() {
        let mut graph = FrameGraph::new();
        let (o, .., c) = reference_chain(&mut graph);
        let island = graph.add_frame("island");

        let resolved = graph.resolve_paths(o).unwrap();
        assert_eq!(resolved.distance(island), None);
        assert!(!resolved.is_reachable(island));
        assert_eq!(resolved.path_to(island), None);

        // From the island nothing else is reachable, itself at cost 0.
        let from_island = graph.resolve_paths(island).unwrap();
        assert_eq!(from_island.distance(island), Some(0));
        assert_eq!(from_island.distance(o), None);
        assert_eq!(from_island.distance(c), None);
    }

    #[test]
    fn distance_of_foreign_id_is_none() {
        let mut graph = FrameGraph::new();
        let (o, ..) = reference_chain(&mut graph);
        let resolved = graph.resolve_paths(o).unwrap();
        assert_eq!(resolved.distance(FrameId::new(99)), None);
        assert_eq!(resolved.predecessor(FrameId::new(99)), None);
    }

    #[test]
    fn path_walks_the_chain() {
        let mut graph = FrameGraph::new();
        let (o, a, b, c) = reference_chain(&mut graph);

        let from_c = graph.resolve_paths(c).unwrap();
        assert_eq!(from_c.path_to(o), Some(vec![c, b, a, o]));

        let from_o = graph.resolve_paths(o).unwrap();
        assert_eq!(from_o.path_to(c), Some(vec![o, a, b, c]));
        match from_o.predecessor(a) {
            Some(step) => {
                assert_eq!(step.prev, o);
                assert_eq!(step.via, EdgeUse::Inverted);
            }
            None => panic!("A must be reachable from O"),
        }
    }

    #[test]
    fn cheaper_route_beats_shorter_route() {
        // Two routes from S to G: over X with one inverted hop, or over Y
        // and Z following registered transforms only.  The inversion-free
        // detour must win even though it has more hops.
        let mut graph = FrameGraph::new();
        let s = graph.add_frame("S");
        let x = graph.add_frame("X");
        let y = graph.add_frame("Y");
        let z = graph.add_frame("Z");
        let g = graph.add_frame("G");

        let edge = |source: FrameId, dest: FrameId| {
            Transform::new(
                Rotation::identity(),
                Vector::in_frame(1.0, 0.0, 0.0, dest),
                source,
            )
        };
        graph.register(edge(s, x)).unwrap();
        graph.register(edge(g, x)).unwrap();
        graph.register(edge(s, y)).unwrap();
        graph.register(edge(y, z)).unwrap();
        graph.register(edge(z, g)).unwrap();

        let resolved = graph.resolve_paths(s).unwrap();
        assert_eq!(resolved.distance(g), Some(0));
        assert_eq!(resolved.path_to(g), Some(vec![s, y, z, g]));
    }

    // ── Composite construction ──────────────────────────────────────────────

    #[test]
    fn transform_between_same_frame_is_identity() {
        let mut graph = FrameGraph::new();
        let (_, a, ..) = reference_chain(&mut graph);
        let t = graph.transform_between(a, a).unwrap();
        assert_eq!(t.source(), a);
        assert_eq!(t.dest(), Some(a));

        let p = Vector::in_frame(1.0, -2.0, 3.0, a);
        assert_vec_close(t.apply_to_vector(p).unwrap(), [1.0, -2.0, 3.0]);
    }

    #[test]
    fn composite_matches_stepwise_application() {
        let mut graph = FrameGraph::new();
        let (o, a, b, c) = reference_chain(&mut graph);

        let p_c = Vector::in_frame(1.0, 1.0, 1.0, c);
        let p_b = graph.transform(c, b).unwrap().apply_to_vector(p_c).unwrap();
        let p_a = graph.transform(b, a).unwrap().apply_to_vector(p_b).unwrap();
        let p_o = graph.transform(a, o).unwrap().apply_to_vector(p_a).unwrap();
        assert_vec_close(p_b, [-1.0, 1.0, 2.0]);
        assert_vec_close(p_a, [2.0, 2.0, 1.0]);
        assert_vec_close(p_o, [3.0, -1.0, 2.0]);

        let composite = graph.transform_between(c, o).unwrap();
        assert_eq!(composite.source(), c);
        assert_eq!(composite.dest(), Some(o));
        assert_vec_close(composite.apply_to_vector(p_c).unwrap(), [3.0, -1.0, 2.0]);
    }

    #[test]
    fn composite_against_the_grain_inverts_each_hop() {
        let mut graph = FrameGraph::new();
        let (o, .., c) = reference_chain(&mut graph);

        // C→O follows registered transforms; O→C must invert all three.
        let down = graph.transform_between(c, o).unwrap();
        let up = graph.transform_between(o, c).unwrap();
        assert_eq!(up.source(), o);
        assert_eq!(up.dest(), Some(c));

        let p_c = Vector::in_frame(1.0, 1.0, 1.0, c);
        let p_o = down.apply_to_vector(p_c).unwrap();
        let back = up.apply_to_vector(p_o).unwrap();
        assert_vec_close(back, [1.0, 1.0, 1.0]);
        assert_eq!(back.frame, Some(c));
    }

    #[test]
    fn transform_between_unreachable_pair_fails() {
        let mut graph = FrameGraph::new();
        let (o, ..) = reference_chain(&mut graph);
        let island = graph.add_frame("island");
        match graph.transform_between(o, island) {
            Err(FrameError::Unreachable { from, to }) => {
                assert_eq!(from, o);
                assert_eq!(to, island);
            }
            _ => panic!("expected Unreachable"),
        }
    }

    #[test]
    fn transform_between_rejects_foreign_goal() {
        let mut graph = FrameGraph::new();
        let (o, ..) = reference_chain(&mut graph);
        assert!(matches!(
            graph.transform_between(o, FrameId::new(99)),
            Err(FrameError::UnknownFrame(_))
        ));
    }

    #[test]
    fn registered_shortcuts_lower_distances() {
        let mut graph = FrameGraph::new();
        let (o, a, b, c) = reference_chain(&mut graph);

        let composite = graph.transform_between(c, o).unwrap();
        let inverse = composite.invert().unwrap();
        graph.register(composite).unwrap();
        graph.register(inverse).unwrap();

        // O→C is now a registered edge, and from C every frame was already
        // forward-reachable, so everything costs zero from O.
        let resolved = graph.resolve_paths(o).unwrap();
        assert_eq!(resolved.distance(a), Some(0));
        assert_eq!(resolved.distance(b), Some(0));
        assert_eq!(resolved.distance(c), Some(0));

        // The shortcut must agree with walking the chain.
        let p_c = Vector::in_frame(1.0, 1.0, 1.0, c);
        let via_shortcut = graph
            .transform(c, o)
            .copied()
            .unwrap()
            .apply_to_vector(p_c)
            .unwrap();
        assert_vec_close(via_shortcut, [3.0, -1.0, 2.0]);
    }
}
