//! Group algebras: canonical state spaces with named generators.
//!
//! Purpose
//! - `Group`: a group with canonical, totally ordered elements (the simple
//!   variants and the runtime `Factor` menu).
//! - `Algebra`: what BFS needs: an identity state, generator application,
//!   `pretty`, default generators and, optionally, formal inverses.
//!
//! Every `Group` is an `Algebra` whose generators act by right multiplication.
//! The wreath composer (`crate::wreath`) implements `Algebra` directly, since
//! its generators (moves and toggles) are not elements of one group type.
//!
//! Invariants
//! - `apply` returns a canonical state: equal data iff equal group element.
//! - `default_generators` order is significant; it fixes BFS tie-breaking.

mod abelian;
mod dihedral;
mod factor;
mod free;
mod group;

use std::fmt::Debug;
use std::hash::Hash;

pub use abelian::{AbelianProduct, Cyclic, IntegerLine, Lattice2, Point2};
pub use dihedral::{Dihedral, DihedralElem, InfiniteDihedral};
pub use factor::{Factor, FactorElem, FactorSpec};
pub use free::{FreeGroup, FreeWord, Letter};
pub use group::{inverse_name, Family, Group};

pub(crate) use group::family_letter;

/// A named generator bound to one algebra instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator<T> {
    pub name: String,
    pub step: T,
}

impl<T> Generator<T> {
    pub fn new(name: impl Into<String>, step: T) -> Self {
        Self {
            name: name.into(),
            step,
        }
    }
}

/// State space plus generator action, as consumed by the ball builder.
pub trait Algebra {
    type State: Clone + Eq + Hash + Debug;
    type Step: Clone + PartialEq + Debug;

    /// Human-readable name (`Z/2 wr Z`, `Free(2)`, ...).
    fn label(&self) -> String;

    fn identity(&self) -> Self::State;

    /// Canonical encoding of `state · step`.
    fn apply(&self, step: &Self::Step, state: &Self::State) -> Self::State;

    /// Deterministic rendering; never used for equality.
    fn pretty(&self, state: &Self::State) -> String;

    fn default_generators(&self) -> Vec<Generator<Self::Step>>;

    /// Formal inverse of `gen`, when this algebra documents one.
    fn inverse_generator(&self, gen: &Generator<Self::Step>) -> Option<Generator<Self::Step>> {
        let _ = gen;
        None
    }

    /// Apply a word of generator steps left to right starting at `state`.
    fn apply_word<'a, I>(&self, state: &Self::State, steps: I) -> Self::State
    where
        I: IntoIterator<Item = &'a Self::Step>,
        Self::Step: 'a,
    {
        steps
            .into_iter()
            .fold(state.clone(), |s, step| self.apply(step, &s))
    }
}

impl<G: Group> Algebra for G {
    type State = G::Elem;
    type Step = G::Elem;

    fn label(&self) -> String {
        self.name()
    }

    fn identity(&self) -> G::Elem {
        self.one()
    }

    fn apply(&self, step: &G::Elem, state: &G::Elem) -> G::Elem {
        self.multiply(state, step)
    }

    fn pretty(&self, state: &G::Elem) -> String {
        self.show(state)
    }

    fn default_generators(&self) -> Vec<Generator<G::Elem>> {
        self.named_generators()
            .into_iter()
            .map(|(name, elem)| Generator::new(name, elem))
            .collect()
    }

    fn inverse_generator(&self, gen: &Generator<G::Elem>) -> Option<Generator<G::Elem>> {
        Some(Generator::new(inverse_name(&gen.name), self.inverse(&gen.step)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_generators_act_on_the_right() {
        let g = InfiniteDihedral;
        let gens = Algebra::default_generators(&g);
        let names: Vec<&str> = gens.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["r", "R", "s"]);
        // e · r · s = r s, pretty "r^1s"
        let s = g.apply_word(&Algebra::identity(&g), [&gens[0].step, &gens[2].step]);
        assert_eq!(Algebra::pretty(&g, &s), "r^1s");
    }

    #[test]
    fn inverse_generator_swaps_case() {
        let f = FreeGroup::new(2).unwrap();
        let gens = Algebra::default_generators(&f);
        let inv = f.inverse_generator(&gens[2]).unwrap();
        assert_eq!(inv.name, "B");
        assert_eq!(inv.step, gens[3].step);
        assert_eq!(inverse_name("a2"), "A2");
        assert_eq!(inverse_name("7"), "7^-1");
    }
}
