//! Dihedral groups: `D∞ = Z ⋊ Z/2` and the finite `Dn` of order `2n`.
//!
//! An element is `r^k s^flip`; relations `s² = 1`, `s r s = r⁻¹`.
//! For `Dn` the rotation index is kept in `0..n`.

use crate::error::SpecError;

use super::group::Group;

/// Canonical dihedral element `r^k s^flip`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DihedralElem {
    pub k: i64,
    pub flip: bool,
}

impl DihedralElem {
    pub const IDENTITY: Self = Self { k: 0, flip: false };

    pub fn rotation(k: i64) -> Self {
        Self { k, flip: false }
    }

    pub fn reflection(k: i64) -> Self {
        Self { k, flip: true }
    }

    fn compose(&self, other: &Self) -> Self {
        if self.flip {
            Self {
                k: self.k - other.k,
                flip: !other.flip,
            }
        } else {
            Self {
                k: self.k + other.k,
                flip: other.flip,
            }
        }
    }

    fn invert(&self) -> Self {
        if self.flip {
            *self
        } else {
            Self::rotation(-self.k)
        }
    }

    fn render(&self) -> String {
        match (self.k, self.flip) {
            (0, false) => "e".to_string(),
            (0, true) => "s".to_string(),
            (k, false) => format!("r^{k}"),
            (k, true) => format!("r^{k}s"),
        }
    }
}

/// Infinite dihedral group with generators `r`, `R`, `s`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InfiniteDihedral;

impl Group for InfiniteDihedral {
    type Elem = DihedralElem;

    fn name(&self) -> String {
        "Dinf".to_string()
    }
    fn one(&self) -> DihedralElem {
        DihedralElem::IDENTITY
    }
    fn multiply(&self, a: &DihedralElem, b: &DihedralElem) -> DihedralElem {
        a.compose(b)
    }
    fn inverse(&self, a: &DihedralElem) -> DihedralElem {
        a.invert()
    }
    fn show(&self, a: &DihedralElem) -> String {
        a.render()
    }
    fn order(&self) -> Option<u64> {
        None
    }
    fn forward_generators(&self) -> Vec<(char, DihedralElem)> {
        vec![
            ('r', DihedralElem::rotation(1)),
            ('s', DihedralElem::reflection(0)),
        ]
    }
}

/// Finite dihedral group `Dn` of order `2n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dihedral {
    n: u64,
}

impl Dihedral {
    pub fn new(n: u64) -> Result<Self, SpecError> {
        if n == 0 || i64::try_from(n).is_err() {
            return Err(SpecError::invalid(
                &format!("Dn({n})"),
                "rotation order must be in 1..=i64::MAX",
            ));
        }
        Ok(Self { n })
    }

    pub fn rotation_order(&self) -> u64 {
        self.n
    }

    fn reduce(&self, e: DihedralElem) -> DihedralElem {
        // n fits in i64 by construction.
        let n = self.n as i64;
        DihedralElem {
            k: e.k.rem_euclid(n),
            flip: e.flip,
        }
    }
}

impl Group for Dihedral {
    type Elem = DihedralElem;

    fn name(&self) -> String {
        format!("Dn({})", self.n)
    }
    fn one(&self) -> DihedralElem {
        DihedralElem::IDENTITY
    }
    fn multiply(&self, a: &DihedralElem, b: &DihedralElem) -> DihedralElem {
        self.reduce(a.compose(b))
    }
    fn inverse(&self, a: &DihedralElem) -> DihedralElem {
        self.reduce(a.invert())
    }
    fn show(&self, a: &DihedralElem) -> String {
        a.render()
    }
    fn order(&self) -> Option<u64> {
        self.n.checked_mul(2)
    }
    fn forward_generators(&self) -> Vec<(char, DihedralElem)> {
        vec![
            ('r', self.reduce(DihedralElem::rotation(1))),
            ('s', DihedralElem::reflection(0)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflection_conjugates_rotation_to_inverse() {
        let g = InfiniteDihedral;
        // s r s = r^-1
        assert_eq!(g.parse_word("s r s").unwrap(), DihedralElem::rotation(-1));
        assert_eq!(g.parse_word("s s").unwrap(), DihedralElem::IDENTITY);
        assert_eq!(g.show(&g.parse_word("r r s").unwrap()), "r^2s");
    }

    #[test]
    fn finite_dihedral_wraps_rotations() {
        let g = Dihedral::new(4).unwrap();
        assert_eq!(g.parse_word("r r r r").unwrap(), DihedralElem::IDENTITY);
        assert_eq!(g.parse_word("R").unwrap(), DihedralElem::rotation(3));
        assert_eq!(g.order(), Some(8));
        let names: Vec<String> = g.named_generators().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["r", "R", "s"]);
        // D2: the rotation is an involution, so no `R`.
        let d2 = Dihedral::new(2).unwrap();
        assert_eq!(d2.named_generators().len(), 2);
    }

    #[test]
    fn every_element_times_inverse_is_identity() {
        let g = Dihedral::new(5).unwrap();
        for k in 0..5 {
            for flip in [false, true] {
                let e = DihedralElem { k, flip };
                assert_eq!(g.multiply(&e, &g.inverse(&e)), g.one());
            }
        }
    }
}
