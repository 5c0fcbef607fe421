//! Runtime-selected simple group (`Factor`) and its spec grammar.
//!
//! `Factor` is the closed menu of simple variants. It is what the registry
//! hands out for plain groups and what the wreath composer uses for both its
//! base and top side. Dispatch is a `match` over the variants.
//!
//! Grammar (`FactorSpec::parse`)
//! - `Z`, `Z2` (also `Z^2`), `Z/n`, `Dinf` (also `D∞`), `Dn(n)`, `Free(k)`,
//!   `abelian([m1,m2,...])`.

use std::fmt;
use std::str::FromStr;

use crate::error::SpecError;

use super::abelian::{AbelianProduct, Cyclic, IntegerLine, Lattice2, Point2};
use super::dihedral::{Dihedral, DihedralElem, InfiniteDihedral};
use super::free::{FreeGroup, FreeWord};
use super::group::Group;

/// One of the simple group variants, chosen at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Factor {
    Line(IntegerLine),
    Lattice(Lattice2),
    Cyclic(Cyclic),
    InfiniteDihedral(InfiniteDihedral),
    Dihedral(Dihedral),
    Free(FreeGroup),
    Abelian(AbelianProduct),
}

/// Element of a `Factor`. The variant always matches the owning factor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FactorElem {
    Int(i64),
    Point(Point2),
    Residue(u64),
    Dihedral(DihedralElem),
    Word(FreeWord),
    Tuple(Vec<u64>),
}

/// Conversion between a variant's element type and `FactorElem`.
trait Embed: Sized {
    fn wrap(self) -> FactorElem;
    fn peel(e: &FactorElem) -> &Self;
}

fn foreign(e: &FactorElem) -> ! {
    panic!("element {e:?} does not belong to this factor")
}

macro_rules! embed {
    ($ty:ty, $variant:ident) => {
        impl Embed for $ty {
            fn wrap(self) -> FactorElem {
                FactorElem::$variant(self)
            }
            fn peel(e: &FactorElem) -> &Self {
                match e {
                    FactorElem::$variant(x) => x,
                    other => foreign(other),
                }
            }
        }
    };
}

embed!(i64, Int);
embed!(Point2, Point);
embed!(u64, Residue);
embed!(DihedralElem, Dihedral);
embed!(FreeWord, Word);
embed!(Vec<u64>, Tuple);

fn peel<T: Embed>(e: &FactorElem) -> &T {
    T::peel(e)
}

/// Run `$body` with `$g` bound to the inner variant.
macro_rules! with_factor {
    ($factor:expr, |$g:ident| $body:expr) => {
        match $factor {
            Factor::Line($g) => $body,
            Factor::Lattice($g) => $body,
            Factor::Cyclic($g) => $body,
            Factor::InfiniteDihedral($g) => $body,
            Factor::Dihedral($g) => $body,
            Factor::Free($g) => $body,
            Factor::Abelian($g) => $body,
        }
    };
}

impl Group for Factor {
    type Elem = FactorElem;

    fn name(&self) -> String {
        with_factor!(self, |g| g.name())
    }
    fn one(&self) -> FactorElem {
        with_factor!(self, |g| g.one().wrap())
    }
    fn multiply(&self, a: &FactorElem, b: &FactorElem) -> FactorElem {
        with_factor!(self, |g| g.multiply(peel(a), peel(b)).wrap())
    }
    fn inverse(&self, a: &FactorElem) -> FactorElem {
        with_factor!(self, |g| g.inverse(peel(a)).wrap())
    }
    fn show(&self, a: &FactorElem) -> String {
        with_factor!(self, |g| g.show(peel(a)))
    }
    fn order(&self) -> Option<u64> {
        with_factor!(self, |g| g.order())
    }
    fn forward_generators(&self) -> Vec<(char, FactorElem)> {
        with_factor!(self, |g| g
            .forward_generators()
            .into_iter()
            .map(|(c, e)| (c, e.wrap()))
            .collect())
    }
}

impl Factor {
    /// Spec this factor was (or could have been) parsed from.
    pub fn spec(&self) -> FactorSpec {
        match self {
            Factor::Line(_) => FactorSpec::Line,
            Factor::Lattice(_) => FactorSpec::Lattice,
            Factor::Cyclic(g) => FactorSpec::Cyclic(g.modulus()),
            Factor::InfiniteDihedral(_) => FactorSpec::InfiniteDihedral,
            Factor::Dihedral(g) => FactorSpec::Dihedral(g.rotation_order()),
            Factor::Free(g) => FactorSpec::Free(g.rank()),
            Factor::Abelian(g) => FactorSpec::Abelian(g.moduli().to_vec()),
        }
    }
}

/// Parsed name of a simple group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FactorSpec {
    Line,
    Lattice,
    Cyclic(u64),
    InfiniteDihedral,
    Dihedral(u64),
    Free(usize),
    Abelian(Vec<u64>),
}

impl FactorSpec {
    pub fn parse(text: &str) -> Result<Self, SpecError> {
        let s = text.trim();
        if s.contains(" wr ") {
            return Err(SpecError::invalid(
                s,
                "wreath products cannot be nested as a factor",
            ));
        }
        match s {
            "Z" => return Ok(Self::Line),
            "Z2" | "Z^2" => return Ok(Self::Lattice),
            "Dinf" | "D∞" => return Ok(Self::InfiniteDihedral),
            _ => {}
        }
        if let Some(n) = s.strip_prefix("Z/") {
            return parse_number(s, n).map(Self::Cyclic);
        }
        if let Some(inner) = wrapped(s, "Dn(", ")") {
            return parse_number(s, inner).map(Self::Dihedral);
        }
        if let Some(inner) = wrapped(s, "Free(", ")") {
            let k = parse_number(s, inner)?;
            let k = usize::try_from(k).map_err(|_| SpecError::invalid(s, "rank too large"))?;
            return Ok(Self::Free(k));
        }
        if let Some(inner) = wrapped(s, "abelian(", ")") {
            let inner = inner.trim();
            let inner = wrapped(inner, "[", "]").unwrap_or(inner);
            let moduli = inner
                .split(',')
                .map(|part| parse_number(s, part))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Self::Abelian(moduli));
        }
        Err(SpecError::UnknownFactor {
            spec: s.to_string(),
        })
    }

    /// Instantiate the group; parameter ranges are checked here.
    pub fn build(&self) -> Result<Factor, SpecError> {
        Ok(match self {
            Self::Line => Factor::Line(IntegerLine),
            Self::Lattice => Factor::Lattice(Lattice2),
            Self::Cyclic(n) => Factor::Cyclic(Cyclic::new(*n)?),
            Self::InfiniteDihedral => Factor::InfiniteDihedral(InfiniteDihedral),
            Self::Dihedral(n) => Factor::Dihedral(Dihedral::new(*n)?),
            Self::Free(k) => Factor::Free(FreeGroup::new(*k)?),
            Self::Abelian(moduli) => Factor::Abelian(AbelianProduct::new(moduli.clone())?),
        })
    }
}

fn wrapped<'a>(s: &'a str, open: &str, close: &str) -> Option<&'a str> {
    s.strip_prefix(open)?.strip_suffix(close)
}

fn parse_number(spec: &str, digits: &str) -> Result<u64, SpecError> {
    digits
        .trim()
        .parse::<u64>()
        .map_err(|_| SpecError::invalid(spec, format!("'{}' is not a number", digits.trim())))
}

impl FromStr for FactorSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FactorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line => write!(f, "Z"),
            Self::Lattice => write!(f, "Z2"),
            Self::Cyclic(n) => write!(f, "Z/{n}"),
            Self::InfiniteDihedral => write!(f, "Dinf"),
            Self::Dihedral(n) => write!(f, "Dn({n})"),
            Self::Free(k) => write!(f, "Free({k})"),
            Self::Abelian(moduli) => {
                let parts: Vec<String> = moduli.iter().map(u64::to_string).collect();
                write!(f, "abelian([{}])", parts.join(","))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_variant() {
        let cases = [
            ("Z", FactorSpec::Line),
            ("Z^2", FactorSpec::Lattice),
            ("Z/5", FactorSpec::Cyclic(5)),
            ("D∞", FactorSpec::InfiniteDihedral),
            ("Dn(8)", FactorSpec::Dihedral(8)),
            ("Free(3)", FactorSpec::Free(3)),
            ("abelian([2, 4])", FactorSpec::Abelian(vec![2, 4])),
            ("abelian(2,3)", FactorSpec::Abelian(vec![2, 3])),
        ];
        for (text, want) in cases {
            assert_eq!(FactorSpec::parse(text).unwrap(), want, "{text}");
        }
        assert_eq!(FactorSpec::Abelian(vec![2, 4]).to_string(), "abelian([2,4])");
    }

    #[test]
    fn rejects_malformed_specs() {
        assert!(matches!(
            FactorSpec::parse("Q8"),
            Err(SpecError::UnknownFactor { .. })
        ));
        assert!(FactorSpec::parse("Z/x").is_err());
        assert!(FactorSpec::parse("Z/2 wr Z").is_err());
        assert!(FactorSpec::Cyclic(0).build().is_err());
        assert!(FactorSpec::Free(0).build().is_err());
    }

    #[test]
    fn factor_dispatch_matches_inner_group() {
        let f = FactorSpec::Dihedral(3).build().unwrap();
        let r = f.parse_word("r r r").unwrap();
        assert_eq!(r, f.one());
        assert_eq!(f.name(), "Dn(3)");
        assert_eq!(f.spec(), FactorSpec::Dihedral(3));
        let z = FactorSpec::Line.build().unwrap();
        assert_eq!(z.show(&z.parse_word("t t T t").unwrap()), "2");
    }
}
