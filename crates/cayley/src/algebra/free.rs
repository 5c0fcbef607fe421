//! Free group `F_k` on letters `a, b, ...` (inverses `A, B, ...`).
//!
//! Elements are freely reduced words. Multiplication appends letters one at a
//! time and cancels a letter against the last kept letter when they are
//! mutually inverse, so reduction is active on every product.

use std::fmt;

use crate::error::SpecError;

use super::group::{family_letter, Group};

/// One letter of a free word: generator index plus orientation.
///
/// Letters order by their character, so inverses sort first (`A < B < a < b`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Letter {
    pub index: u8,
    pub inverted: bool,
}

impl Letter {
    pub fn new(index: u8, inverted: bool) -> Self {
        Self { index, inverted }
    }

    pub fn inverse(self) -> Self {
        Self {
            index: self.index,
            inverted: !self.inverted,
        }
    }

    pub fn to_char(self) -> char {
        let c = family_letter(usize::from(self.index));
        if self.inverted {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl Ord for Letter {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_char().cmp(&other.to_char())
    }
}

impl PartialOrd for Letter {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Freely reduced word; the empty word is the identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FreeWord(Vec<Letter>);

impl FreeWord {
    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append one letter, cancelling against the tail when inverse.
    pub fn push_reduced(&mut self, letter: Letter) {
        if self.0.last() == Some(&letter.inverse()) {
            self.0.pop();
        } else {
            self.0.push(letter);
        }
    }

    /// Reduce an arbitrary letter sequence.
    pub fn reduce(letters: impl IntoIterator<Item = Letter>) -> Self {
        let mut out = Self::default();
        for l in letters {
            out.push_reduced(l);
        }
        out
    }

    /// True iff no two adjacent letters cancel.
    pub fn is_reduced(&self) -> bool {
        self.0.windows(2).all(|w| w[0] != w[1].inverse())
    }
}

impl fmt::Display for FreeWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "e");
        }
        for l in &self.0 {
            write!(f, "{}", l.to_char())?;
        }
        Ok(())
    }
}

/// Free group of rank `k` (1..=26).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FreeGroup {
    rank: u8,
}

impl FreeGroup {
    pub fn new(rank: usize) -> Result<Self, SpecError> {
        match u8::try_from(rank) {
            Ok(r) if (1..=26).contains(&r) => Ok(Self { rank: r }),
            _ => Err(SpecError::invalid(
                &format!("Free({rank})"),
                "rank must be in 1..=26",
            )),
        }
    }

    pub fn rank(&self) -> usize {
        usize::from(self.rank)
    }
}

impl Group for FreeGroup {
    type Elem = FreeWord;

    fn name(&self) -> String {
        format!("Free({})", self.rank)
    }
    fn one(&self) -> FreeWord {
        FreeWord::default()
    }
    fn multiply(&self, a: &FreeWord, b: &FreeWord) -> FreeWord {
        let mut out = a.clone();
        for &l in b.letters() {
            out.push_reduced(l);
        }
        out
    }
    fn inverse(&self, a: &FreeWord) -> FreeWord {
        FreeWord(a.letters().iter().rev().map(|l| l.inverse()).collect())
    }
    fn show(&self, a: &FreeWord) -> String {
        a.to_string()
    }
    fn order(&self) -> Option<u64> {
        None
    }
    fn forward_generators(&self) -> Vec<(char, FreeWord)> {
        (0..self.rank)
            .map(|i| {
                (
                    family_letter(usize::from(i)),
                    FreeWord(vec![Letter::new(i, false)]),
                )
            })
            .collect()
    }
}
