//! Abelian variants: integer line, rank-2 lattice, cyclic groups and finite
//! abelian products.
//!
//! Canonical forms
//! - `Z`: the integer itself. `Z2`: the coordinate pair.
//! - `Z/n`: the residue in `0..n`. Products: one residue per factor.

use crate::error::SpecError;

use super::group::{family_letter, Group};

/// The integer line `Z` with generator `t = +1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntegerLine;

impl Group for IntegerLine {
    type Elem = i64;

    fn name(&self) -> String {
        "Z".to_string()
    }
    fn one(&self) -> i64 {
        0
    }
    fn multiply(&self, a: &i64, b: &i64) -> i64 {
        a + b
    }
    fn inverse(&self, a: &i64) -> i64 {
        -a
    }
    fn show(&self, a: &i64) -> String {
        a.to_string()
    }
    fn order(&self) -> Option<u64> {
        None
    }
    fn forward_generators(&self) -> Vec<(char, i64)> {
        vec![('t', 1)]
    }
}

/// Point of the lattice `Z²`; ordered lexicographically by `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point2 {
    pub x: i64,
    pub y: i64,
}

impl Point2 {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// The lattice `Z²` with generators `x = (1,0)` and `y = (0,1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lattice2;

impl Group for Lattice2 {
    type Elem = Point2;

    fn name(&self) -> String {
        "Z2".to_string()
    }
    fn one(&self) -> Point2 {
        Point2::default()
    }
    fn multiply(&self, a: &Point2, b: &Point2) -> Point2 {
        Point2::new(a.x + b.x, a.y + b.y)
    }
    fn inverse(&self, a: &Point2) -> Point2 {
        Point2::new(-a.x, -a.y)
    }
    fn show(&self, a: &Point2) -> String {
        format!("({},{})", a.x, a.y)
    }
    fn order(&self) -> Option<u64> {
        None
    }
    fn forward_generators(&self) -> Vec<(char, Point2)> {
        vec![('x', Point2::new(1, 0)), ('y', Point2::new(0, 1))]
    }
}

/// `(a + b) mod n` without overflow for any modulus.
fn add_mod(a: u64, b: u64, n: u64) -> u64 {
    let sum = (u128::from(a) + u128::from(b)) % u128::from(n);
    // sum < n <= u64::MAX
    sum as u64
}

/// Cyclic group `Z/n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cyclic {
    n: u64,
}

impl Cyclic {
    pub fn new(n: u64) -> Result<Self, SpecError> {
        if n == 0 {
            return Err(SpecError::invalid("Z/0", "modulus must be >= 1"));
        }
        Ok(Self { n })
    }

    pub fn modulus(&self) -> u64 {
        self.n
    }
}

impl Group for Cyclic {
    type Elem = u64;

    fn name(&self) -> String {
        format!("Z/{}", self.n)
    }
    fn one(&self) -> u64 {
        0
    }
    fn multiply(&self, a: &u64, b: &u64) -> u64 {
        add_mod(*a, *b, self.n)
    }
    fn inverse(&self, a: &u64) -> u64 {
        (self.n - a % self.n) % self.n
    }
    fn show(&self, a: &u64) -> String {
        a.to_string()
    }
    fn order(&self) -> Option<u64> {
        Some(self.n)
    }
    fn forward_generators(&self) -> Vec<(char, u64)> {
        vec![('t', 1 % self.n)]
    }
}

/// Finite abelian product `Z/m1 × Z/m2 × ...`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbelianProduct {
    moduli: Vec<u64>,
}

impl AbelianProduct {
    pub fn new(moduli: Vec<u64>) -> Result<Self, SpecError> {
        let spec = format!("abelian({moduli:?})");
        if moduli.is_empty() {
            return Err(SpecError::invalid(&spec, "need at least one factor"));
        }
        if moduli.len() > 26 {
            return Err(SpecError::invalid(&spec, "at most 26 factors"));
        }
        if moduli.contains(&0) {
            return Err(SpecError::invalid(&spec, "every modulus must be >= 1"));
        }
        Ok(Self { moduli })
    }

    pub fn moduli(&self) -> &[u64] {
        &self.moduli
    }
}

impl Group for AbelianProduct {
    type Elem = Vec<u64>;

    fn name(&self) -> String {
        let parts: Vec<String> = self.moduli.iter().map(u64::to_string).collect();
        format!("abelian([{}])", parts.join(","))
    }
    fn one(&self) -> Vec<u64> {
        vec![0; self.moduli.len()]
    }
    fn multiply(&self, a: &Vec<u64>, b: &Vec<u64>) -> Vec<u64> {
        self.moduli
            .iter()
            .zip(a.iter().zip(b))
            .map(|(&m, (&x, &y))| add_mod(x, y, m))
            .collect()
    }
    fn inverse(&self, a: &Vec<u64>) -> Vec<u64> {
        self.moduli
            .iter()
            .zip(a)
            .map(|(m, x)| (m - x % m) % m)
            .collect()
    }
    fn show(&self, a: &Vec<u64>) -> String {
        let parts: Vec<String> = a.iter().map(u64::to_string).collect();
        format!("({})", parts.join(","))
    }
    fn order(&self) -> Option<u64> {
        self.moduli
            .iter()
            .try_fold(1u64, |acc, &m| acc.checked_mul(m))
    }
    fn forward_generators(&self) -> Vec<(char, Vec<u64>)> {
        (0..self.moduli.len())
            .map(|i| {
                let mut unit = vec![0; self.moduli.len()];
                unit[i] = 1 % self.moduli[i];
                (family_letter(i), unit)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_two_has_no_uppercase_generator() {
        let z2 = Cyclic::new(2).unwrap();
        let names: Vec<String> = z2.named_generators().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["t"]);
        let z5 = Cyclic::new(5).unwrap();
        assert_eq!(z5.named_generators(), vec![("t".to_string(), 1u64), ("T".to_string(), 4u64)]);
        assert!(Cyclic::new(0).is_err());
    }

    #[test]
    fn abelian_product_families_follow_factor_order() {
        let g = AbelianProduct::new(vec![2, 3]).unwrap();
        let names: Vec<String> = g.named_generators().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b", "B"]);
        assert_eq!(g.order(), Some(6));
        let b = g.parse_word("b b b a").unwrap();
        assert_eq!(b, vec![1, 0]);
        assert_eq!(g.name(), "abelian([2,3])");
    }

    #[test]
    fn huge_moduli_wrap_without_overflow() {
        let z = Cyclic::new(u64::MAX).unwrap();
        let top = u64::MAX - 1;
        assert_eq!(z.multiply(&top, &top), u64::MAX - 2);
        assert_eq!(z.multiply(&top, &1), 0);
        assert_eq!(z.inverse(&1), top);

        let g = AbelianProduct::new(vec![u64::MAX, 3]).unwrap();
        assert_eq!(g.multiply(&vec![top, 2], &vec![top, 2]), vec![u64::MAX - 2, 1]);
        assert_eq!(g.inverse(&vec![1, 1]), vec![top, 2]);
    }

    #[test]
    fn lattice_words_commute() {
        let g = Lattice2;
        assert_eq!(g.parse_word("x y X").unwrap(), Point2::new(0, 1));
        assert_eq!(g.parse_word("y x X").unwrap(), Point2::new(0, 1));
        assert_eq!(g.parse_word("e").unwrap(), Point2::default());
        assert!(g.parse_word("q").is_err());
    }
}
