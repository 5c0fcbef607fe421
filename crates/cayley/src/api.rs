//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI,
//!   benches and experiments. Breaking changes are allowed and expected.
//! - Prefer these re-exports for consistency across callers.

// Algebras
pub use crate::algebra::{
    inverse_name, AbelianProduct, Algebra, Cyclic, Dihedral, DihedralElem, Factor, FactorElem,
    FactorSpec, FreeGroup, FreeWord, Generator, Group, InfiniteDihedral, IntegerLine, Lattice2,
    Point2,
};
pub use crate::registry::{AlgebraOptions, AlgebraVisitor, AnyAlgebra, Registry, RegistryEntry};
pub use crate::wreath::{Tape, Wreath, WreathSpec, WreathState, WreathStep};
// BFS and dead ends
pub use crate::ball::{build_ball, build_default_ball, effective_generators, Ball, BallOf, Edge, VertexId};
pub use crate::config::{checked_radius, BallCfg, DeadEndCfg};
pub use crate::deadend::{
    analyze_dead_ends, escape_word, find_dead_ends, is_dead_end, DeadEndRecord, DeadEndReport,
    EscapeDepth, Witness,
};
// Analysis and I/O
pub use crate::export::{render_dot, NodeLabel};
pub use crate::growth::{classify, known_growth, polynomial_degree, GrowthClass, GrowthProfile};
pub use crate::verify::{check_canonical_random, check_layering, exhaustive_distances};
pub use crate::word::{evaluate, geodesic, parse_word, select_generators, Geodesic};
