//! Report types of the dead-end scan.

use std::fmt;

use serde::Serialize;

use crate::ball::VertexId;

/// Escape depth of a dead end: exact, or right-censored at `depth_cap + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapeDepth {
    Exact(usize),
    /// No escaping word of length `<= depth_cap`; the value is `depth_cap + 1`.
    AtLeast(usize),
}

impl EscapeDepth {
    pub fn is_censored(&self) -> bool {
        matches!(self, Self::AtLeast(_))
    }

    pub fn exact(&self) -> Option<usize> {
        match self {
            Self::Exact(d) => Some(*d),
            Self::AtLeast(_) => None,
        }
    }
}

impl fmt::Display for EscapeDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(d) => write!(f, "{d}"),
            Self::AtLeast(d) => write!(f, "≥{d}"),
        }
    }
}

/// Escaping word, as generator indices and names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Witness {
    pub generators: Vec<usize>,
    pub names: Vec<String>,
}

impl fmt::Display for Witness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(" "))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeadEndRecord {
    pub vertex: VertexId,
    pub distance: usize,
    pub depth: EscapeDepth,
    pub pretty: String,
    /// `None` iff the depth is censored.
    pub witness: Option<Witness>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeadEndReport {
    pub radius: usize,
    pub depth_cap: usize,
    pub ball_size: usize,
    /// `|S_R|`.
    pub boundary_count: usize,
    /// Increasing vertex id.
    pub dead_ends: Vec<DeadEndRecord>,
    /// Min and max of the exact depths; `None` if there are none.
    pub depth_range: Option<(usize, usize)>,
    pub censored: usize,
}

impl DeadEndReport {
    pub fn count(&self) -> usize {
        self.dead_ends.len()
    }

    /// First `max_examples` records (`0` = all).
    pub fn examples(&self, max_examples: usize) -> &[DeadEndRecord] {
        if max_examples == 0 {
            &self.dead_ends
        } else {
            &self.dead_ends[..max_examples.min(self.dead_ends.len())]
        }
    }

    /// Plain-text summary with at most `max_examples` records (`0` = all).
    pub fn render(&self, max_examples: usize) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Ball size |B_{}| = {}\n",
            self.radius + self.depth_cap,
            self.ball_size
        ));
        out.push_str(&format!(
            "Sphere size |S_{}| = {}\n",
            self.radius, self.boundary_count
        ));
        out.push_str(&format!("Dead ends found: {}\n", self.count()));
        if self.dead_ends.is_empty() {
            out.push_str(&format!("No dead ends on S_{}.\n", self.radius));
            return out;
        }
        match self.depth_range {
            Some((lo, hi)) => out.push_str(&format!("Escape depths: {lo}..={hi}\n")),
            None => out.push_str("Escape depths: all censored\n"),
        }
        if self.censored > 0 {
            out.push_str(&format!(
                "Censored (no escape within {}): {}\n",
                self.depth_cap, self.censored
            ));
        }
        let shown = self.examples(max_examples);
        out.push_str(&format!(
            "Showing {} of {} dead end(s):\n",
            shown.len(),
            self.count()
        ));
        for rec in shown {
            let witness = rec
                .witness
                .as_ref()
                .map(|w| w.to_string())
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!(
                "[vid={}] distance={} depth={} state={} witness={}\n",
                rec.vertex.0, rec.distance, rec.depth, rec.pretty, witness
            ));
        }
        out
    }
}
