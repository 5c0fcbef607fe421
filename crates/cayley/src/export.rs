//! Graphviz DOT rendering of a ball.

use std::fmt::Write as _;

use crate::algebra::Algebra;
use crate::ball::BallOf;

/// What a node label shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeLabel {
    /// Canonical shortest word (`e` for the root).
    #[default]
    Word,
    /// The algebra's `pretty` rendering of the state.
    State,
    /// Vertex id only.
    Id,
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Directed DOT graph: one node per vertex (with `dist`), one edge per
/// recorded Cayley edge labelled by generator name.
pub fn render_dot<A: Algebra>(algebra: &A, ball: &BallOf<A>, label: NodeLabel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "digraph {} {{", quote(&algebra.label()));
    let _ = writeln!(out, "  node [shape=circle];");
    for v in ball.vertices() {
        let text = match label {
            NodeLabel::Word => ball.word_label(v),
            NodeLabel::State => algebra.pretty(ball.state(v)),
            NodeLabel::Id => v.0.to_string(),
        };
        let _ = writeln!(
            out,
            "  {} [label={}, dist={}];",
            v.0,
            quote(&text),
            ball.dist(v)
        );
    }
    let labels = ball.labels();
    for e in ball.edges() {
        let _ = writeln!(
            out,
            "  {} -> {} [label={}];",
            e.from.0,
            e.to.0,
            quote(labels[e.generator])
        );
    }
    out.push_str("}\n");
    out
}
