//! The `Group` trait: canonical elements with multiplication.
//!
//! Every implementor keeps `Elem` canonical: two values are equal iff they
//! denote the same group element. `Elem: Ord` gives a total, deterministic
//! order, which the wreath composer relies on for tape addresses.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::SpecError;

/// A forward generator and, unless it is self-inverse, its inverse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Family<E> {
    pub letter: char,
    pub forward: E,
    pub inverse: Option<E>,
}

pub trait Group {
    type Elem: Clone + Eq + Hash + Ord + Debug;

    /// Short spec-style name (`Z`, `Z/5`, `Dn(4)`, `Free(2)`, ...).
    fn name(&self) -> String;

    fn one(&self) -> Self::Elem;

    fn multiply(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    fn inverse(&self, a: &Self::Elem) -> Self::Elem;

    fn show(&self, a: &Self::Elem) -> String;

    /// Group order; `None` for infinite groups.
    fn order(&self) -> Option<u64>;

    /// Forward generators with their naming letter, in declaration order.
    fn forward_generators(&self) -> Vec<(char, Self::Elem)>;

    fn is_one(&self, a: &Self::Elem) -> bool {
        *a == self.one()
    }

    /// Forward generators paired with their inverses (omitted when self-inverse).
    fn families(&self) -> Vec<Family<Self::Elem>> {
        self.forward_generators()
            .into_iter()
            .map(|(letter, forward)| {
                let inv = self.inverse(&forward);
                let inverse = if inv == forward { None } else { Some(inv) };
                Family {
                    letter,
                    forward,
                    inverse,
                }
            })
            .collect()
    }

    /// Default generator names: lowercase letter, uppercase for the inverse.
    fn named_generators(&self) -> Vec<(String, Self::Elem)> {
        let mut out = Vec::new();
        for fam in self.families() {
            out.push((fam.letter.to_string(), fam.forward));
            if let Some(inv) = fam.inverse {
                out.push((fam.letter.to_ascii_uppercase().to_string(), inv));
            }
        }
        out
    }

    /// Evaluate a whitespace-separated word over the default generator names.
    /// `e` and the empty word denote the identity.
    fn parse_word(&self, word: &str) -> Result<Self::Elem, SpecError> {
        let named = self.named_generators();
        let mut acc = self.one();
        for tok in word.split_whitespace() {
            if tok == "e" {
                continue;
            }
            let (_, elem) = named
                .iter()
                .find(|(name, _)| name == tok)
                .ok_or_else(|| SpecError::UnknownGenerator {
                    name: tok.to_string(),
                })?;
            acc = self.multiply(&acc, elem);
        }
        Ok(acc)
    }
}

/// Name of the formal inverse: swap the case of the leading letter.
pub fn inverse_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_lowercase() => c.to_uppercase().chain(chars).collect(),
        Some(c) if c.is_uppercase() => c.to_lowercase().chain(chars).collect(),
        _ => format!("{name}^-1"),
    }
}

/// Letter for the `i`-th generator family (`a`, `b`, ...).
pub(crate) fn family_letter(i: usize) -> char {
    u8::try_from(i)
        .ok()
        .filter(|&k| k < 26)
        .map(|k| char::from(b'a' + k))
        .unwrap_or('z')
}
