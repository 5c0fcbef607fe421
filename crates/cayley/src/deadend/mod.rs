//! Dead-end analyzer: trapped vertices on the sphere `S_R` and their escape
//! depths, answered from one prebuilt ball.
//!
//! Purpose
//! - A vertex `v` with `dist(v) = R` is a dead end iff no generator edge leads
//!   to distance `R + 1`.
//! - Its escape depth is the length of the shortest word from `v` that reaches
//!   distance `>= R + 1`, searched up to `depth_cap`; the witness is the first
//!   such word in generator order. Depth 1 is impossible for a dead end.
//!
//! Invariants
//! - The ball must be built to `R + depth_cap`, so every state the escape
//!   search can touch below `R + 1` has a known distance. States outside the
//!   ball are farther than `R + depth_cap` and count as escaped.
//! - Records come out in vertex-id order; censored depths carry no witness.

mod search;
mod types;

pub use search::{analyze_dead_ends, escape_word, find_dead_ends, is_dead_end};
pub use types::{DeadEndRecord, DeadEndReport, EscapeDepth, Witness};
