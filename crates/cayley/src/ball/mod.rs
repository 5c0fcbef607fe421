//! Ball builder: BFS over a Cayley graph up to radius `R`.
//!
//! Purpose
//! - Given any `Algebra` and an ordered generator list, discover every state
//!   within word distance `R` of the identity, with edges, distances and one
//!   shortest word per vertex.
//!
//! Invariants
//! - Ids are assigned at first discovery; by BFS layering that discovery
//!   distance is the word-metric distance.
//! - Every vertex at distance `k > 0` has a discovering edge from distance
//!   `k − 1`; its stored word is that first-discovery path, which is not
//!   necessarily the lexicographically smallest geodesic.
//! - Generators are tried in list order, inverses appended by `symmetrize`
//!   last.
//!
//! Layout
//! - `types.rs` (Ball, VertexId, Edge), `build.rs` (BFS).

mod build;
mod types;

pub use build::{build_ball, build_default_ball, effective_generators};
pub use types::{Ball, BallOf, Edge, VertexId};
