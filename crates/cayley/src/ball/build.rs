//! BFS construction of the metric ball.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::algebra::{Algebra, Generator};
use crate::config::BallCfg;
use crate::error::ConfigError;

use super::types::{Ball, BallOf, Edge, VertexId};

/// Declared generators, followed (when `symmetrize` is set) by the formal
/// inverses the algebra documents, skipping steps already present.
pub fn effective_generators<A: Algebra>(
    algebra: &A,
    generators: &[Generator<A::Step>],
    symmetrize: bool,
) -> Vec<Generator<A::Step>> {
    let mut out = generators.to_vec();
    if !symmetrize {
        return out;
    }
    for gen in generators {
        let Some(inv) = algebra.inverse_generator(gen) else {
            continue;
        };
        if out.iter().all(|g| g.step != inv.step) {
            out.push(inv);
        }
    }
    out
}

/// Build `B_R` by BFS from the identity.
///
/// Vertices with `dist < radius` are expanded under every generator in list
/// order; a state's id, distance and discovering edge are fixed at first
/// discovery. Edges are recorded from expanded vertices only.
pub fn build_ball<A: Algebra>(
    algebra: &A,
    generators: &[Generator<A::Step>],
    cfg: BallCfg,
) -> Result<BallOf<A>, ConfigError> {
    if generators.is_empty() {
        return Err(ConfigError::EmptyGenerators);
    }
    let gens = effective_generators(algebra, generators, cfg.symmetrize);
    let g = gens.len();
    let radius = cfg.radius;

    let root = algebra.identity();
    let mut ball = Ball {
        states: vec![root.clone()],
        index: HashMap::from([(root, VertexId(0))]),
        dist: vec![0],
        parent: vec![None],
        succ: Vec::new(),
        edges: Vec::new(),
        generators: Vec::new(),
        radius,
    };
    let mut queue = VecDeque::from([VertexId(0)]);

    while let Some(u) = queue.pop_front() {
        let du = ball.dist[u.0];
        if du >= radius {
            continue;
        }
        if ball.succ.len() < (u.0 + 1) * g {
            ball.succ.resize((u.0 + 1) * g, None);
        }
        for (gi, gen) in gens.iter().enumerate() {
            let child = algebra.apply(&gen.step, &ball.states[u.0]);
            let v = match ball.index.get(&child) {
                Some(&v) => v,
                None => {
                    let v = VertexId(ball.states.len());
                    ball.index.insert(child.clone(), v);
                    ball.states.push(child);
                    ball.dist.push(du + 1);
                    ball.parent.push(Some((u, gi)));
                    queue.push_back(v);
                    v
                }
            };
            ball.succ[u.0 * g + gi] = Some(v);
            ball.edges.push(Edge {
                from: u,
                to: v,
                generator: gi,
            });
        }
    }
    ball.succ.resize(ball.states.len() * g, None);
    ball.generators = gens;

    debug!(
        algebra = %algebra.label(),
        radius,
        generators = g,
        vertices = ball.len(),
        edges = ball.edges.len(),
        "ball built"
    );
    Ok(ball)
}

/// `build_ball` over the algebra's default generators.
pub fn build_default_ball<A: Algebra>(algebra: &A, cfg: BallCfg) -> Result<BallOf<A>, ConfigError> {
    build_ball(algebra, &algebra.default_generators(), cfg)
}
