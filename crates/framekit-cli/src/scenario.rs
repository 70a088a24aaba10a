//! The reference scenario: a chain of four frames exercised end to end.

use colored::Colorize;
use tracing::info;

use framekit_graph::{FrameGraph, Transform};
use framekit_spatial::{Rotation, Vector};
use framekit_types::{FrameError, FrameId};

use crate::config::Config;

/// Handles for the frames of the reference chain.
pub struct ChainFrames {
    pub o: FrameId,
    pub a: FrameId,
    pub b: FrameId,
    pub c: FrameId,
}

/// Build the reference chain O ← A ← B ← C.
///
/// Each hop rotates by `theta` radians about the x, y, z axis respectively
/// and shifts one unit along the same axis.  O's pose against the universal
/// frame is recorded as a root transform.
pub fn build_chain(graph: &mut FrameGraph, theta: f64) -> Result<ChainFrames, FrameError> {
    let o = graph.add_frame("O");
    let a = graph.add_frame("A");
    let b = graph.add_frame("B");
    let c = graph.add_frame("C");

    graph.register(Transform::new(
        Rotation::identity(),
        Vector::universal(0.0, 0.0, 0.0),
        o,
    ))?;

    let xhat = Vector::in_frame(1.0, 0.0, 0.0, o);
    let rx = Rotation::from_axis_angle(xhat, theta)?;
    graph.register(Transform::new(rx, xhat, a))?;

    let yhat = Vector::in_frame(0.0, 1.0, 0.0, a);
    let ry = Rotation::from_axis_angle(yhat, theta)?;
    graph.register(Transform::new(ry, yhat, b))?;

    let zhat = Vector::in_frame(0.0, 0.0, 1.0, b);
    let rz = Rotation::from_axis_angle(zhat, theta)?;
    graph.register(Transform::new(rz, zhat, c))?;

    Ok(ChainFrames { o, a, b, c })
}

/// Run the demo: walk a point down the chain, resolve paths from `O`, build
/// the composite `C→O` and its inverse, register both as shortcut edges,
/// and resolve again to show the improved distances.
pub fn run(cfg: &Config) -> Result<(), FrameError> {
    let theta = cfg.theta_deg.to_radians();
    let prec = cfg.precision;

    let mut graph = FrameGraph::new();
    let frames = build_chain(&mut graph, theta)?;
    info!(
        theta_deg = cfg.theta_deg,
        frames = graph.len(),
        "reference chain built"
    );

    println!("{}", "Walking a point down the chain:".bold());
    let p_c = Vector::in_frame(1.0, 1.0, 1.0, frames.c);
    println!("  {:.prec$}", graph.display_vector(&p_c), prec = prec);

    let mut p = p_c;
    for (from, to) in [
        (frames.c, frames.b),
        (frames.b, frames.a),
        (frames.a, frames.o),
    ] {
        let hop = graph.transform_between(from, to)?;
        p = hop.apply_to_vector(p)?;
        println!("  {:.prec$}", graph.display_vector(&p), prec = prec);
    }

    println!();
    println!("{}", "Cheapest paths from O (cost = inversions):".bold());
    let resolved = graph.resolve_paths(frames.o)?;
    print!("{}", graph.display_paths(&resolved));

    println!();
    let composite = graph.transform_between(frames.c, frames.o)?;
    println!(
        "{} {} applied in one step:",
        "Composite".bold(),
        graph.display_transform(&composite)
    );
    let direct = composite.apply_to_vector(p_c)?;
    println!(
        "  {:.prec$} -> {:.prec$}",
        graph.display_vector(&p_c),
        graph.display_vector(&direct),
        prec = prec,
    );

    let inverse = composite.invert()?;
    let back = inverse.apply_to_vector(direct)?;
    println!(
        "{} {} recovers the original:",
        "Inverse".bold(),
        graph.display_transform(&inverse)
    );
    println!(
        "  {:.prec$} -> {:.prec$}",
        graph.display_vector(&direct),
        graph.display_vector(&back),
        prec = prec,
    );

    graph.register(composite)?;
    graph.register(inverse)?;

    println!();
    println!(
        "{}",
        "After registering the composite and its inverse as shortcuts:".bold()
    );
    let resolved = graph.resolve_paths(frames.o)?;
    print!("{}", graph.display_paths(&resolved));

    Ok(())
}
