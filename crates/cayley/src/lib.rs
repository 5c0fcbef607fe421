//! Cayley-graph explorer: group algebras, wreath products, BFS balls and
//! dead-end analysis.
//!
//! Layout
//! - `algebra`: the `Group` and `Algebra` traits and the simple variants.
//! - `wreath`: `C wr D` composed from two groups.
//! - `ball`: breadth-first ball `B_n` with canonical shortest words.
//! - `deadend`: dead ends on the sphere `S_R` and their escape depths.
//! - `registry`: named algebras behind `AnyAlgebra`.
//! - `growth`, `verify`, `word`, `export`: analysis and I/O helpers.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - `api` and `prelude` are convenience surfaces; breaking changes are fine.

pub mod algebra;
pub mod api;
pub mod ball;
pub mod config;
pub mod deadend;
pub mod error;
pub mod export;
pub mod growth;
pub mod registry;
pub mod verify;
pub mod word;
pub mod wreath;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::{BallCfg, DeadEndCfg};
pub use error::{ConfigError, SpecError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algebra::{Algebra, Factor, FactorSpec, Generator, Group};
    pub use crate::ball::{build_ball, build_default_ball, Ball, BallOf, VertexId};
    pub use crate::config::{BallCfg, DeadEndCfg};
    pub use crate::deadend::{analyze_dead_ends, find_dead_ends, DeadEndReport, EscapeDepth};
    pub use crate::error::{ConfigError, SpecError};
    pub use crate::registry::{AlgebraOptions, AlgebraVisitor, AnyAlgebra, Registry};
    pub use crate::wreath::{Wreath, WreathSpec};
}
