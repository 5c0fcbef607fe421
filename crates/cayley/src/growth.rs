//! Growth profile of a Cayley graph from a single ball.
//!
//! Purpose
//! - Sphere sizes `σ_r`, ball sizes `b_r` and `r`-th roots `σ_r^(1/r)` for
//!   `r = 0..=R`, read off one ball (no rebuild per radius).
//! - Exact rates where they are known (free groups `ω = 2k − 1`, `Z`, `Z²`,
//!   `D∞`, finite groups) and the spectral radius of a word-acceptor
//!   transition matrix.
//! - A coarse classification for everything else.
//!
//! Heuristics
//! - `polynomial_degree`: least-squares slope of `ln b_r` against `ln r` over
//!   the last four radii (`r >= 2`).
//! - Unknown groups: the local log-log slope stays flat for polynomial growth
//!   and keeps rising for exponential growth. A rise of more than 10% between
//!   windows ending at `R − 2` and `R` is read as exponential.

use nalgebra::{DMatrix, DVector};

use crate::algebra::{Factor, Group};
use crate::ball::Ball;

/// `σ_r` and `b_r` for `r = 0..=R`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrowthProfile {
    pub sphere: Vec<usize>,
    pub ball: Vec<usize>,
}

impl GrowthProfile {
    pub fn from_ball<S: Clone + Eq + std::hash::Hash, T>(ball: &Ball<S, T>) -> Self {
        Self::from_spheres(ball.sphere_sizes())
    }

    pub fn from_spheres(sphere: Vec<usize>) -> Self {
        let ball = sphere
            .iter()
            .scan(0usize, |acc, &s| {
                *acc += s;
                Some(*acc)
            })
            .collect();
        Self { sphere, ball }
    }

    pub fn radius(&self) -> usize {
        self.sphere.len().saturating_sub(1)
    }

    /// `σ_r^(1/r)` for `r >= 1`; `None` once the sphere is empty.
    pub fn roots(&self) -> Vec<Option<f64>> {
        self.sphere
            .iter()
            .enumerate()
            .skip(1)
            .map(|(r, &s)| (s > 0).then(|| (s as f64).powf(1.0 / r as f64)))
            .collect()
    }

    /// The whole group fits inside the ball (last sphere empty).
    pub fn is_saturated(&self) -> bool {
        self.radius() > 0 && self.sphere.last() == Some(&0)
    }

    /// Plain-text table `r, σ_r, b_r, σ_r^(1/r)`.
    pub fn table(&self) -> String {
        let header = format!("{:<5} {:<12} {:<12} {:<12}", "r", "σ_r", "b_r", "σ_r^(1/r)");
        let mut lines = vec![header];
        let roots = self.roots();
        for r in 0..self.sphere.len() {
            let root = match r.checked_sub(1).and_then(|i| roots[i]) {
                Some(x) => format!("{x:.6}"),
                None => "-".to_string(),
            };
            lines.push(format!(
                "{:<5} {:<12} {:<12} {:<12}",
                r, self.sphere[r], self.ball[r], root
            ));
        }
        lines.join("\n")
    }
}

/// Closed-form growth of a simple group with its default generators.
#[derive(Clone, Debug, PartialEq)]
pub enum KnownGrowth {
    Finite { order: u64 },
    Polynomial { degree: u32 },
    Exponential { rate: f64 },
}

/// Exact growth for the simple variants; `None` if the order overflows.
pub fn known_growth(factor: &Factor) -> Option<KnownGrowth> {
    match factor {
        Factor::Line(_) | Factor::InfiniteDihedral(_) => {
            Some(KnownGrowth::Polynomial { degree: 1 })
        }
        Factor::Lattice(_) => Some(KnownGrowth::Polynomial { degree: 2 }),
        Factor::Free(g) => Some(KnownGrowth::Exponential {
            rate: (2 * g.rank() - 1) as f64,
        }),
        Factor::Cyclic(_) | Factor::Dihedral(_) | Factor::Abelian(_) => {
            factor.order().map(|order| KnownGrowth::Finite { order })
        }
    }
}

/// Spectral radius of a non-negative matrix by power iteration.
pub fn automaton_growth(matrix: &DMatrix<f64>) -> f64 {
    let n = matrix.nrows();
    if n == 0 || n != matrix.ncols() {
        return 0.0;
    }
    let mut v = DVector::from_element(n, 1.0);
    let mut norm = 0.0;
    for _ in 0..100 {
        let w = matrix * &v;
        norm = w.norm();
        if norm < 1e-12 {
            return 0.0;
        }
        v = w / norm;
    }
    norm
}

/// Transition matrix of the reduced-word acceptor of `F_k`: one state per
/// letter, every letter may follow except its own inverse.
pub fn free_reduction_automaton(rank: usize) -> DMatrix<f64> {
    let n = 2 * rank;
    // Letters 2i and 2i+1 are mutually inverse.
    DMatrix::from_fn(n, n, |i, j| if j == (i ^ 1) { 0.0 } else { 1.0 })
}

fn log_log_slope(ball: &[usize], last: usize) -> Option<f64> {
    let first = last.saturating_sub(3).max(2);
    let pairs: Vec<(f64, f64)> = (first..=last)
        .filter(|&r| ball[r] > 0)
        .map(|r| ((r as f64).ln(), (ball[r] as f64).ln()))
        .collect();
    if pairs.len() < 3 {
        return None;
    }
    let n = pairs.len() as f64;
    let sx: f64 = pairs.iter().map(|p| p.0).sum();
    let sy: f64 = pairs.iter().map(|p| p.1).sum();
    let sxx: f64 = pairs.iter().map(|p| p.0 * p.0).sum();
    let sxy: f64 = pairs.iter().map(|p| p.0 * p.1).sum();
    let denom = n * sxx - sx * sx;
    if denom.abs() < 1e-10 {
        return None;
    }
    Some((n * sxy - sx * sy) / denom)
}

/// Degree estimate from the last radii; needs `R >= 4`.
pub fn polynomial_degree(profile: &GrowthProfile) -> Option<f64> {
    let r = profile.radius();
    if r < 4 {
        return None;
    }
    log_log_slope(&profile.ball, r)
}

#[derive(Clone, Debug, PartialEq)]
pub enum GrowthClass {
    Finite { order: u64 },
    Polynomial { degree: f64 },
    Exponential { rate: f64 },
    Undetermined,
}

impl std::fmt::Display for GrowthClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite { order } => write!(f, "finite (order {order})"),
            Self::Polynomial { degree } => write!(f, "polynomial (degree ≈ {degree:.1})"),
            Self::Exponential { rate } => write!(f, "exponential (ω ≈ {rate:.4})"),
            Self::Undetermined => write!(f, "undetermined"),
        }
    }
}

/// Classify from a known closed form when given, otherwise from the profile.
pub fn classify(profile: &GrowthProfile, known: Option<&KnownGrowth>) -> GrowthClass {
    match known {
        Some(KnownGrowth::Finite { order }) => return GrowthClass::Finite { order: *order },
        Some(KnownGrowth::Polynomial { degree }) => {
            return GrowthClass::Polynomial {
                degree: f64::from(*degree),
            }
        }
        Some(KnownGrowth::Exponential { rate }) => return GrowthClass::Exponential { rate: *rate },
        None => {}
    }
    if profile.is_saturated() {
        let order = profile.ball.last().copied().unwrap_or(0) as u64;
        return GrowthClass::Finite { order };
    }
    let r = profile.radius();
    if r < 6 {
        return GrowthClass::Undetermined;
    }
    let (Some(early), Some(late)) = (
        log_log_slope(&profile.ball, r - 2),
        log_log_slope(&profile.ball, r),
    ) else {
        return GrowthClass::Undetermined;
    };
    if late > early * 1.1 {
        let rate = profile.sphere[r] as f64 / profile.sphere[r - 1] as f64;
        GrowthClass::Exponential { rate }
    } else {
        GrowthClass::Polynomial { degree: late }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{Cyclic, FactorSpec, IntegerLine, Lattice2};
    use crate::ball::build_default_ball;
    use crate::config::BallCfg;
    use crate::wreath::Wreath;

    #[test]
    fn profile_from_lamplighter_ball() {
        let w = Wreath::new(Cyclic::new(2).unwrap(), IntegerLine);
        let ball = build_default_ball(&w, BallCfg::new(5)).unwrap();
        let p = GrowthProfile::from_ball(&ball);
        assert_eq!(p.sphere, vec![1, 3, 6, 12, 22, 40]);
        assert_eq!(p.ball, vec![1, 4, 10, 22, 44, 84]);
        let roots = p.roots();
        assert_eq!(roots.len(), 5);
        assert!((roots[0].unwrap() - 3.0).abs() < 1e-12);
        assert_eq!(p.table().lines().count(), 7);
    }

    #[test]
    fn free_group_automaton_matches_closed_form() {
        for rank in 1..4 {
            let m = free_reduction_automaton(rank);
            let omega = automaton_growth(&m);
            assert!((omega - (2 * rank - 1) as f64).abs() < 1e-9, "rank {rank}");
        }
        let f3 = FactorSpec::Free(3).build().unwrap();
        assert_eq!(known_growth(&f3), Some(KnownGrowth::Exponential { rate: 5.0 }));
    }

    #[test]
    fn lattice_profile_reads_as_quadratic() {
        let ball = build_default_ball(&Lattice2, BallCfg::new(10)).unwrap();
        let p = GrowthProfile::from_ball(&ball);
        let d = polynomial_degree(&p).unwrap();
        assert!((1.6..2.2).contains(&d), "degree {d}");
        match classify(&p, None) {
            GrowthClass::Polynomial { degree } => assert!((1.6..2.2).contains(&degree)),
            other => panic!("expected polynomial, got {other:?}"),
        }
        let known = known_growth(&FactorSpec::Lattice.build().unwrap());
        assert_eq!(
            classify(&p, known.as_ref()),
            GrowthClass::Polynomial { degree: 2.0 }
        );
    }

    #[test]
    fn lamplighter_profile_reads_as_exponential() {
        let w = Wreath::new(Cyclic::new(2).unwrap(), IntegerLine);
        let ball = build_default_ball(&w, BallCfg::new(12)).unwrap();
        match classify(&GrowthProfile::from_ball(&ball), None) {
            GrowthClass::Exponential { rate } => assert!(rate > 1.3 && rate < 2.0, "rate {rate}"),
            other => panic!("expected exponential, got {other:?}"),
        }
    }

    #[test]
    fn saturated_profile_is_finite() {
        let w = Wreath::new(Cyclic::new(2).unwrap(), Cyclic::new(5).unwrap());
        let ball = build_default_ball(&w, BallCfg::new(12)).unwrap();
        let p = GrowthProfile::from_ball(&ball);
        assert!(p.is_saturated());
        assert_eq!(classify(&p, None), GrowthClass::Finite { order: 160 });
        let short = GrowthProfile::from_spheres(vec![1, 3]);
        assert_eq!(classify(&short, None), GrowthClass::Undetermined);
    }
}
