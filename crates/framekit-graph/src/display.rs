//! Human-readable rendering of vectors, transforms, and resolved paths.
//!
//! Frame ids mean nothing without the graph that issued them, so rendering
//! goes through adapter values borrowed from a [`FrameGraph`]:
//!
//! | Adapter | Notation |
//! |---|---|
//! | [`display_vector`][FrameGraph::display_vector] | `^{F}[x, y, z]` |
//! | [`display_transform`][FrameGraph::display_transform] | `_{S}^{D}T` |
//! | [`display_paths`][FrameGraph::display_paths] | one `name distance prev` line per frame |
//!
//! The universal frame renders as `O`; ids the graph does not know render
//! as `?`.  Numeric precision honors the formatter (`{:.5}` etc., default
//! 3 decimal places).

use std::fmt;

use framekit_spatial::Vector;
use framekit_types::FrameId;

use crate::graph::FrameGraph;
use crate::resolver::ResolvedPaths;
use crate::transform::Transform;

/// Label for the universal frame.
const UNIVERSAL_LABEL: &str = "O";
/// Label for ids the graph does not know.
const UNKNOWN_LABEL: &str = "?";

impl FrameGraph {
    /// Displayable view of a vector: `^{frame}[x, y, z]`.
    pub fn display_vector<'a>(&'a self, vector: &'a Vector) -> DisplayVector<'a> {
        DisplayVector {
            graph: self,
            vector,
        }
    }

    /// Displayable view of a transform: `_{source}^{dest}T`.  A root pose
    /// renders as its source name alone.
    pub fn display_transform<'a>(&'a self, transform: &'a Transform) -> DisplayTransform<'a> {
        DisplayTransform {
            graph: self,
            transform,
        }
    }

    /// Displayable table of resolved paths: one line per frame with its
    /// distance and, past the start, the predecessor frame.
    pub fn display_paths<'a>(&'a self, resolved: &'a ResolvedPaths) -> DisplayPaths<'a> {
        DisplayPaths {
            graph: self,
            resolved,
        }
    }

    fn frame_label(&self, frame: Option<FrameId>) -> &str {
        match frame {
            None => UNIVERSAL_LABEL,
            Some(id) => self.name(id).unwrap_or(UNKNOWN_LABEL),
        }
    }
}

/// Renders a vector with its frame tag, e.g. `^{B}[1.000, 0.000, 2.500]`.
pub struct DisplayVector<'a> {
    graph: &'a FrameGraph,
    vector: &'a Vector,
}

impl fmt::Display for DisplayVector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(3);
        let [x, y, z] = self.vector.components;
        write!(
            f,
            "^{{{}}}[{:.prec$}, {:.prec$}, {:.prec$}]",
            self.graph.frame_label(self.vector.frame),
            x,
            y,
            z,
            prec = prec,
        )
    }
}

/// Renders a transform's endpoints, e.g. `_{A}^{O}T`.
pub struct DisplayTransform<'a> {
    graph: &'a FrameGraph,
    transform: &'a Transform,
}

impl fmt::Display for DisplayTransform<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = self.graph.frame_label(Some(self.transform.source()));
        match self.transform.dest() {
            Some(dest) => write!(
                f,
                "_{{{}}}^{{{}}}T",
                source,
                self.graph.frame_label(Some(dest))
            ),
            None => write!(f, "{}", source),
        }
    }
}

/// Renders one line per frame: `name distance prev`, where unreachable
/// frames show `unreachable` and the start and unreachable frames omit
/// `prev`.
pub struct DisplayPaths<'a> {
    graph: &'a FrameGraph,
    resolved: &'a ResolvedPaths,
}

impl fmt::Display for DisplayPaths<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.graph.frames() {
            let name = self.graph.frame_label(Some(id));
            match self.resolved.distance(id) {
                None => writeln!(f, "{} unreachable", name)?,
                Some(dist) => match self.resolved.predecessor(id) {
                    Some(step) => writeln!(
                        f,
                        "{} {} {}",
                        name,
                        dist,
                        self.graph.frame_label(Some(step.prev))
                    )?,
                    None => writeln!(f, "{} {}", name, dist)?,
                },
            }
        }
        Ok(())
    }
}
