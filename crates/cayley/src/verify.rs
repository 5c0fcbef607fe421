//! Independent checks of a built ball.
//!
//! - `check_layering`: root at distance 0, no edge climbs more than one layer,
//!   every non-root vertex has an incoming edge from the layer below.
//! - `known_ball_size`: closed forms and tabulated counts for `Z²`, `D∞` and
//!   the binary lamplighter.
//! - `exhaustive_distances`: shortest words by iterative deepening over all
//!   words, without BFS bookkeeping.
//! - `check_canonical_random`: random words compared with the same word with
//!   a generator/inverse pair spliced in; both must encode identically.

use std::collections::HashMap;
use std::hash::Hash;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algebra::{Algebra, Generator};
use crate::ball::Ball;

/// Layering violations as messages; empty means the ball passes.
pub fn check_layering<S: Clone + Eq + Hash, T>(ball: &Ball<S, T>) -> Vec<String> {
    let mut errors = Vec::new();
    if ball.is_empty() {
        errors.push("empty vertex set".to_string());
        return errors;
    }
    let root = Ball::<S, T>::ROOT;
    if ball.dist(root) != 0 {
        errors.push(format!("root has distance {}, expected 0", ball.dist(root)));
    }
    let mut has_parent_edge = vec![false; ball.len()];
    has_parent_edge[root.0] = true;
    for e in ball.edges() {
        let (du, dv) = (ball.dist(e.from), ball.dist(e.to));
        if dv > du + 1 {
            errors.push(format!(
                "edge {}->{} (gen {}) jumps from distance {du} to {dv}",
                e.from.0, e.to.0, e.generator
            ));
        }
        if dv == du + 1 {
            has_parent_edge[e.to.0] = true;
        }
    }
    for v in ball.vertices() {
        if !has_parent_edge[v.0] {
            errors.push(format!(
                "vertex {} at distance {} has no incoming edge from distance {}",
                v.0,
                ball.dist(v),
                ball.dist(v).saturating_sub(1)
            ));
        }
    }
    errors
}

/// Families with a tabulated ball size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KnownFamily {
    /// `Z²` with `x, X, y, Y`: `2n(n+1) + 1`.
    Lattice,
    /// `D∞` with `r, R, s`: `4n` for `n >= 1`.
    InfiniteDihedral,
    /// `Z/2 wr Z` with `t, T, a`; tabulated for `n <= 5`.
    Lamplighter,
}

pub fn known_ball_size(family: KnownFamily, n: usize) -> Option<usize> {
    match family {
        KnownFamily::Lattice => Some(2 * n * (n + 1) + 1),
        KnownFamily::InfiniteDihedral => Some(if n == 0 { 1 } else { 4 * n }),
        KnownFamily::Lamplighter => [1, 4, 10, 22, 44, 84].get(n).copied(),
    }
}

/// Word-length distance of every state reachable within `radius`, found by
/// enumerating all words of length `0, 1, ..., radius`.
pub fn exhaustive_distances<A: Algebra>(
    algebra: &A,
    generators: &[Generator<A::Step>],
    radius: usize,
) -> HashMap<A::State, usize> {
    fn descend<A: Algebra>(
        algebra: &A,
        generators: &[Generator<A::Step>],
        state: &A::State,
        len: usize,
        limit: usize,
        out: &mut HashMap<A::State, usize>,
    ) {
        if len == limit {
            out.entry(state.clone()).or_insert(len);
            return;
        }
        for gen in generators {
            let next = algebra.apply(&gen.step, state);
            descend(algebra, generators, &next, len + 1, limit, out);
        }
    }

    let mut out = HashMap::new();
    for limit in 0..=radius {
        descend(algebra, generators, &algebra.identity(), 0, limit, &mut out);
    }
    out
}

/// Compare `w` against `w` with `g g⁻¹` spliced in at a random point, for
/// `walks` random words of length `length`. Returns the number of mismatches.
pub fn check_canonical_random<A: Algebra>(
    algebra: &A,
    generators: &[Generator<A::Step>],
    walks: usize,
    length: usize,
    seed: u64,
) -> usize {
    let pairs: Vec<(A::Step, A::Step)> = generators
        .iter()
        .filter_map(|g| {
            algebra
                .inverse_generator(g)
                .map(|inv| (g.step.clone(), inv.step))
        })
        .collect();
    if generators.is_empty() || pairs.is_empty() {
        return 0;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut mismatches = 0;
    for _ in 0..walks {
        let word: Vec<usize> = (0..length)
            .map(|_| rng.gen_range(0..generators.len()))
            .collect();
        let (fwd, inv) = &pairs[rng.gen_range(0..pairs.len())];
        let cut = rng.gen_range(0..=length);

        let plain = algebra.apply_word(
            &algebra.identity(),
            word.iter().map(|&i| &generators[i].step),
        );
        let prefix = algebra.apply_word(
            &algebra.identity(),
            word[..cut].iter().map(|&i| &generators[i].step),
        );
        let spliced = algebra.apply(inv, &algebra.apply(fwd, &prefix));
        let spliced = algebra.apply_word(
            &spliced,
            word[cut..].iter().map(|&i| &generators[i].step),
        );
        if plain != spliced {
            mismatches += 1;
        }
    }
    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{Cyclic, FreeGroup, InfiniteDihedral, IntegerLine, Lattice2};
    use crate::ball::{build_default_ball, VertexId};
    use crate::config::BallCfg;
    use crate::wreath::Wreath;

    #[test]
    fn built_balls_pass_layering_and_known_sizes() {
        for n in 0..6 {
            let z2 = build_default_ball(&Lattice2, BallCfg::new(n)).unwrap();
            assert!(check_layering(&z2).is_empty());
            assert_eq!(Some(z2.len()), known_ball_size(KnownFamily::Lattice, n));

            let dinf = build_default_ball(&InfiniteDihedral, BallCfg::new(n)).unwrap();
            assert!(check_layering(&dinf).is_empty());
            assert_eq!(
                Some(dinf.len()),
                known_ball_size(KnownFamily::InfiniteDihedral, n)
            );

            let l2 = Wreath::new(Cyclic::new(2).unwrap(), IntegerLine);
            let ball = build_default_ball(&l2, BallCfg::new(n)).unwrap();
            assert!(check_layering(&ball).is_empty());
            assert_eq!(Some(ball.len()), known_ball_size(KnownFamily::Lamplighter, n));
        }
        assert_eq!(known_ball_size(KnownFamily::Lamplighter, 6), None);
    }

    #[test]
    fn layering_reports_broken_distances() {
        let mut ball = build_default_ball(&IntegerLine, BallCfg::new(2)).unwrap();
        ball.dist[3] = 0;
        let errors = check_layering(&ball);
        assert!(!errors.is_empty());
        assert!(errors.iter().any(|e| e.contains("vertex 3")), "{errors:?}");
        assert_eq!(ball.dist(VertexId(3)), 0);
    }

    #[test]
    fn exhaustive_search_agrees_with_bfs() {
        let w = Wreath::new(Cyclic::new(3).unwrap(), IntegerLine);
        let gens = w.default_generators();
        let radius = 4;
        let ball = build_default_ball(&w, BallCfg::new(radius)).unwrap();
        let brute = exhaustive_distances(&w, &gens, radius);
        assert_eq!(brute.len(), ball.len());
        for v in ball.vertices() {
            assert_eq!(brute.get(ball.state(v)), Some(&ball.dist(v)));
        }
    }

    #[test]
    fn random_words_encode_canonically() {
        let w = Wreath::new(Cyclic::new(4).unwrap(), Lattice2);
        let gens = w.default_generators();
        assert_eq!(check_canonical_random(&w, &gens, 200, 25, 7), 0);
        let f2 = FreeGroup::new(2).unwrap();
        let gens = Algebra::default_generators(&f2);
        assert_eq!(check_canonical_random(&f2, &gens, 200, 25, 11), 0);
    }
}
