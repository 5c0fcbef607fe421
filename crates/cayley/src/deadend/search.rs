//! Classification and escape-depth search over a prebuilt ball.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::algebra::{Algebra, Generator};
use crate::ball::{build_ball, BallOf, VertexId};
use crate::config::{BallCfg, DeadEndCfg};
use crate::error::ConfigError;

use super::types::{DeadEndRecord, DeadEndReport, EscapeDepth, Witness};

/// Neighbor of `v` under generator `gi`: the successor table first, then a
/// direct application looked up in the ball. `None` means the neighbor lies
/// outside the ball.
fn neighbor<A: Algebra>(
    algebra: &A,
    ball: &BallOf<A>,
    v: VertexId,
    gi: usize,
) -> Option<VertexId> {
    if let Some(w) = ball.successor(v, gi) {
        return Some(w);
    }
    let next = algebra.apply(&ball.generators()[gi].step, ball.state(v));
    ball.id_of(&next)
}

/// True iff no generator takes `v` to a strictly larger distance.
pub fn is_dead_end<A: Algebra>(algebra: &A, ball: &BallOf<A>, v: VertexId) -> bool {
    let dv = ball.dist(v);
    (0..ball.generators().len()).all(|gi| match neighbor(algebra, ball, v, gi) {
        Some(w) => ball.dist(w) <= dv,
        None => false,
    })
}

/// Shortest word from `v` reaching distance `>= target`, first in generator
/// order among words of that length. Searches lengths `1..=depth_cap`.
///
/// A breadth-first search with first-visit deduplication yields that word: a
/// minimal escaping word never revisits a state, and the first word to reach
/// a state in this order is the smallest of its length.
pub fn escape_word<A: Algebra>(
    algebra: &A,
    ball: &BallOf<A>,
    v: VertexId,
    target: usize,
    depth_cap: usize,
) -> Option<Vec<usize>> {
    let g = ball.generators().len();
    let mut came_from: HashMap<VertexId, (VertexId, usize)> = HashMap::new();
    let mut frontier = vec![v];
    let path = |came_from: &HashMap<VertexId, (VertexId, usize)>, end: VertexId, last: usize| {
        let mut word = vec![last];
        let mut cur = end;
        while cur != v {
            let (prev, gi) = came_from[&cur];
            word.push(gi);
            cur = prev;
        }
        word.reverse();
        word
    };

    for _depth in 1..=depth_cap {
        let mut next = Vec::new();
        for &u in &frontier {
            for gi in 0..g {
                let w = match neighbor(algebra, ball, u, gi) {
                    Some(w) if ball.dist(w) < target => w,
                    _ => return Some(path(&came_from, u, gi)),
                };
                if w != v && !came_from.contains_key(&w) {
                    came_from.insert(w, (u, gi));
                    next.push(w);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }
    None
}

/// Scan the sphere `S_R` of a ball built to at least `R + depth_cap`.
pub fn analyze_dead_ends<A: Algebra>(
    algebra: &A,
    ball: &BallOf<A>,
    cfg: DeadEndCfg,
) -> Result<DeadEndReport, ConfigError> {
    cfg.validate()?;
    let required = cfg.ball_radius();
    if ball.radius() < required {
        return Err(ConfigError::BallTooSmall {
            built: ball.radius(),
            required,
        });
    }
    let r = cfg.radius;
    let labels = ball.labels();

    let mut boundary_count = 0;
    let mut dead_ends = Vec::new();
    for v in ball.sphere(r) {
        boundary_count += 1;
        if !is_dead_end(algebra, ball, v) {
            continue;
        }
        let word = escape_word(algebra, ball, v, r + 1, cfg.depth_cap);
        let (depth, witness) = match word {
            Some(word) => {
                let names = word.iter().map(|&gi| labels[gi].to_string()).collect();
                (
                    EscapeDepth::Exact(word.len()),
                    Some(Witness {
                        generators: word,
                        names,
                    }),
                )
            }
            None => {
                trace!(vertex = v.0, depth_cap = cfg.depth_cap, "escape depth censored");
                (EscapeDepth::AtLeast(cfg.depth_cap + 1), None)
            }
        };
        dead_ends.push(DeadEndRecord {
            vertex: v,
            distance: r,
            depth,
            pretty: algebra.pretty(ball.state(v)),
            witness,
        });
    }

    let exact = dead_ends.iter().filter_map(|d| d.depth.exact());
    let depth_range = exact.fold(None, |acc: Option<(usize, usize)>, d| match acc {
        None => Some((d, d)),
        Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
    });
    let censored = dead_ends.iter().filter(|d| d.depth.is_censored()).count();

    debug!(
        algebra = %algebra.label(),
        radius = r,
        boundary = boundary_count,
        dead_ends = dead_ends.len(),
        censored,
        "dead-end scan finished"
    );
    Ok(DeadEndReport {
        radius: r,
        depth_cap: cfg.depth_cap,
        ball_size: ball.len(),
        boundary_count,
        dead_ends,
        depth_range,
        censored,
    })
}

/// Build the supporting ball to `R + depth_cap` and scan it.
pub fn find_dead_ends<A: Algebra>(
    algebra: &A,
    generators: &[Generator<A::Step>],
    cfg: DeadEndCfg,
) -> Result<(BallOf<A>, DeadEndReport), ConfigError> {
    cfg.validate()?;
    let ball = build_ball(algebra, generators, BallCfg::new(cfg.ball_radius()))?;
    let report = analyze_dead_ends(algebra, &ball, cfg)?;
    Ok((ball, report))
}
