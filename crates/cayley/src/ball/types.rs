//! The finished ball: dense vertex table plus distance, edge and successor
//! tables indexed by `VertexId`.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::algebra::{Algebra, Generator};

/// Index into the ball's vertex table, assigned at first discovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VertexId(pub usize);

/// Directed Cayley edge `from → from·gens[generator]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub generator: usize,
}

/// Metric ball `B_R` of a Cayley graph. Immutable once built.
#[derive(Clone, Debug)]
pub struct Ball<S, T> {
    pub(crate) states: Vec<S>,
    pub(crate) index: HashMap<S, VertexId>,
    pub(crate) dist: Vec<usize>,
    /// Discovering edge `(parent, generator)`; `None` for the root.
    pub(crate) parent: Vec<Option<(VertexId, usize)>>,
    /// Row-major `[vertex][generator]`; filled only for vertices with
    /// `dist < radius`.
    pub(crate) succ: Vec<Option<VertexId>>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) generators: Vec<Generator<T>>,
    pub(crate) radius: usize,
}

pub type BallOf<A> = Ball<<A as Algebra>::State, <A as Algebra>::Step>;

impl<S: Clone + Eq + Hash, T> Ball<S, T> {
    pub const ROOT: VertexId = VertexId(0);

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// A ball always holds at least the identity.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Effective generator list (declared order, then appended inverses).
    pub fn generators(&self) -> &[Generator<T>] {
        &self.generators
    }

    pub fn labels(&self) -> Vec<&str> {
        self.generators.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.states.len()).map(VertexId)
    }

    pub fn state(&self, v: VertexId) -> &S {
        &self.states[v.0]
    }

    pub fn dist(&self, v: VertexId) -> usize {
        self.dist[v.0]
    }

    pub fn id_of(&self, state: &S) -> Option<VertexId> {
        self.index.get(state).copied()
    }

    pub fn distance_of(&self, state: &S) -> Option<usize> {
        self.id_of(state).map(|v| self.dist(v))
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether BFS expanded `v` (i.e. `dist(v) < radius`).
    pub fn is_expanded(&self, v: VertexId) -> bool {
        self.dist(v) < self.radius
    }

    /// Target of generator `gi` from `v`, if recorded.
    pub fn successor(&self, v: VertexId, gi: usize) -> Option<VertexId> {
        let g = self.generators.len();
        if gi >= g {
            return None;
        }
        self.succ.get(v.0 * g + gi).copied().flatten()
    }

    pub fn parent(&self, v: VertexId) -> Option<(VertexId, usize)> {
        self.parent[v.0]
    }

    /// Shortest word (generator indices) along the first-discovery path.
    pub fn word(&self, v: VertexId) -> Vec<usize> {
        let mut word = Vec::with_capacity(self.dist(v));
        let mut cur = v;
        while let Some((p, gi)) = self.parent[cur.0] {
            word.push(gi);
            cur = p;
        }
        word.reverse();
        word
    }

    pub fn word_names(&self, v: VertexId) -> Vec<&str> {
        self.word(v)
            .into_iter()
            .map(|gi| self.generators[gi].name.as_str())
            .collect()
    }

    /// Space-separated word, `e` for the root.
    pub fn word_label(&self, v: VertexId) -> String {
        let names = self.word_names(v);
        if names.is_empty() {
            "e".to_string()
        } else {
            names.join(" ")
        }
    }

    /// Vertices at exactly distance `r`, in discovery order.
    pub fn sphere(&self, r: usize) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices().filter(move |&v| self.dist(v) == r)
    }

    /// `σ_r` for `r = 0..=radius`.
    pub fn sphere_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.radius + 1];
        for &d in &self.dist {
            sizes[d] += 1;
        }
        sizes
    }
}
