//! Immutable factory table of named algebras.
//!
//! `Registry::standard()` is built once by the caller and passed by reference;
//! nothing registers itself. Each entry turns `AlgebraOptions` into an
//! `AnyAlgebra`, the closed sum of plain groups and wreath composites.
//! Generic code runs on an `AnyAlgebra` through `AlgebraVisitor`.

use crate::algebra::{
    AbelianProduct, Algebra, Cyclic, Dihedral, Factor, FreeGroup, Generator, InfiniteDihedral,
    IntegerLine, Lattice2,
};
use crate::error::ConfigError;
use crate::wreath::{Wreath, WreathSpec};

/// Named options a registry constructor may read. Unused fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlgebraOptions {
    /// `n` for `Z/n` and `Dn`.
    pub order: Option<u64>,
    /// Rank of a free group (default 2).
    pub rank: Option<usize>,
    /// Factor orders of an abelian product.
    pub moduli: Option<Vec<u64>>,
    /// Wreath spec `"<Base> wr <Top>"` (default `Z/2 wr Z`).
    pub spec: Option<String>,
    /// Toggle offsets as top-group words (default: identity only).
    pub offsets: Vec<String>,
    /// Subset of top-group move names (default: all).
    pub top_generators: Vec<String>,
    /// Lamp group for `lamplighter` (default `Z/2`).
    pub base: Option<String>,
}

/// A selected algebra: a plain group or a wreath composite.
#[derive(Clone, Debug)]
pub enum AnyAlgebra {
    Group(Factor),
    Wreath(Wreath<Factor, Factor>),
}

/// Generic operation over whichever algebra an `AnyAlgebra` holds.
pub trait AlgebraVisitor {
    type Output;

    fn visit<A: Algebra>(self, algebra: &A) -> Self::Output;
}

impl AnyAlgebra {
    pub fn visit<V: AlgebraVisitor>(&self, visitor: V) -> V::Output {
        match self {
            Self::Group(g) => visitor.visit(g),
            Self::Wreath(w) => visitor.visit(w),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Group(g) => g.label(),
            Self::Wreath(w) => w.label(),
        }
    }

    pub fn generator_names(&self) -> Vec<String> {
        struct Names;
        impl AlgebraVisitor for Names {
            type Output = Vec<String>;
            fn visit<A: Algebra>(self, algebra: &A) -> Vec<String> {
                algebra
                    .default_generators()
                    .into_iter()
                    .map(|g: Generator<A::Step>| g.name)
                    .collect()
            }
        }
        self.visit(Names)
    }

    /// The plain group, if this is not a composite.
    pub fn as_factor(&self) -> Option<&Factor> {
        match self {
            Self::Group(g) => Some(g),
            Self::Wreath(_) => None,
        }
    }
}

type Constructor = fn(&AlgebraOptions) -> Result<AnyAlgebra, ConfigError>;

pub struct RegistryEntry {
    pub name: &'static str,
    pub summary: &'static str,
    /// Options this entry reads.
    pub options: &'static [&'static str],
    build: Constructor,
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("name", &self.name)
            .field("options", &self.options)
            .finish()
    }
}

#[derive(Debug)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

fn required<T: Clone>(
    algebra: &str,
    option: &'static str,
    value: &Option<T>,
) -> Result<T, ConfigError> {
    value.clone().ok_or_else(|| ConfigError::MissingOption {
        algebra: algebra.to_string(),
        option,
    })
}

fn wreath_from(spec: &str, opts: &AlgebraOptions) -> Result<AnyAlgebra, ConfigError> {
    let wreath = WreathSpec::parse(spec)?
        .build()?
        .with_offset_words(&opts.offsets)?;
    let wreath = if opts.top_generators.is_empty() {
        wreath
    } else {
        wreath.with_top_generators(&opts.top_generators)?
    };
    Ok(AnyAlgebra::Wreath(wreath))
}

fn entry(
    name: &'static str,
    summary: &'static str,
    options: &'static [&'static str],
    build: Constructor,
) -> RegistryEntry {
    RegistryEntry {
        name,
        summary,
        options,
        build,
    }
}

impl Registry {
    /// The built-in menu, in display order.
    pub fn standard() -> Self {
        let entries = vec![
            entry("line", "integer line Z (t, T)", &[], |_| {
                Ok(AnyAlgebra::Group(Factor::Line(IntegerLine)))
            }),
            entry("lattice", "lattice Z² (x, X, y, Y)", &[], |_| {
                Ok(AnyAlgebra::Group(Factor::Lattice(Lattice2)))
            }),
            entry("cyclic", "cyclic group Z/n", &["order"], |o| {
                let n = required("cyclic", "order", &o.order)?;
                Ok(AnyAlgebra::Group(Factor::Cyclic(Cyclic::new(n)?)))
            }),
            entry("dinf", "infinite dihedral D∞ (r, R, s)", &[], |_| {
                Ok(AnyAlgebra::Group(Factor::InfiniteDihedral(InfiniteDihedral)))
            }),
            entry("dihedral", "dihedral group Dn of order 2n", &["order"], |o| {
                let n = required("dihedral", "order", &o.order)?;
                Ok(AnyAlgebra::Group(Factor::Dihedral(Dihedral::new(n)?)))
            }),
            entry("free", "free group F_k (a, A, b, B, ...)", &["rank"], |o| {
                let k = o.rank.unwrap_or(2);
                Ok(AnyAlgebra::Group(Factor::Free(FreeGroup::new(k)?)))
            }),
            entry("abelian", "finite abelian product Z/m1 × Z/m2 × ...", &["moduli"], |o| {
                let moduli = required("abelian", "moduli", &o.moduli)?;
                Ok(AnyAlgebra::Group(Factor::Abelian(AbelianProduct::new(moduli)?)))
            }),
            entry(
                "wreath",
                "wreath product C wr D",
                &["spec", "offsets", "top_generators"],
                |o| wreath_from(o.spec.as_deref().unwrap_or("Z/2 wr Z"), o),
            ),
            entry(
                "lamplighter",
                "lamplighter <base> wr Z",
                &["base", "offsets"],
                |o| {
                    let base = o.base.as_deref().unwrap_or("Z/2");
                    wreath_from(&format!("{base} wr Z"), o)
                },
            ),
            entry(
                "lamplighter-z2",
                "planar lamplighter Z/2 wr Z²",
                &["offsets", "top_generators"],
                |o| wreath_from("Z/2 wr Z2", o),
            ),
        ];
        Self { entries }
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn build(&self, name: &str, opts: &AlgebraOptions) -> Result<AnyAlgebra, ConfigError> {
        let entry = self.get(name).ok_or_else(|| ConfigError::UnknownAlgebra {
            name: name.to_string(),
        })?;
        (entry.build)(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::build_default_ball;
    use crate::config::BallCfg;
    use crate::error::SpecError;

    struct BallSize(usize);

    impl AlgebraVisitor for BallSize {
        type Output = usize;

        fn visit<A: Algebra>(self, algebra: &A) -> usize {
            build_default_ball(algebra, BallCfg::new(self.0)).unwrap().len()
        }
    }

    #[test]
    fn standard_menu_builds_every_entry() {
        let reg = Registry::standard();
        let names: Vec<&str> = reg.names().collect();
        assert_eq!(
            names,
            vec![
                "line",
                "lattice",
                "cyclic",
                "dinf",
                "dihedral",
                "free",
                "abelian",
                "wreath",
                "lamplighter",
                "lamplighter-z2"
            ]
        );
        let opts = AlgebraOptions {
            order: Some(4),
            moduli: Some(vec![2, 3]),
            ..AlgebraOptions::default()
        };
        for name in names {
            let algebra = reg.build(name, &opts).unwrap();
            assert!(algebra.visit(BallSize(2)) >= 1, "{name}");
        }
    }

    #[test]
    fn labels_and_generator_names() {
        let reg = Registry::standard();
        let opts = AlgebraOptions::default();
        let l2 = reg.build("lamplighter", &opts).unwrap();
        assert_eq!(l2.label(), "Z/2 wr Z");
        assert_eq!(l2.generator_names(), vec!["t", "T", "a"]);
        assert_eq!(l2.visit(BallSize(5)), 84);
        assert!(l2.as_factor().is_none());

        let z2 = reg.build("lamplighter-z2", &opts).unwrap();
        assert_eq!(z2.generator_names(), vec!["x", "X", "y", "Y", "a"]);

        let f2 = reg.build("free", &opts).unwrap();
        assert_eq!(f2.label(), "Free(2)");
        assert_eq!(f2.visit(BallSize(3)), 53);
    }

    #[test]
    fn options_flow_into_constructors() {
        let reg = Registry::standard();
        let opts = AlgebraOptions {
            spec: Some("Z/3 wr Z/5".to_string()),
            offsets: vec!["e".to_string(), "t".to_string()],
            ..AlgebraOptions::default()
        };
        let w = reg.build("wreath", &opts).unwrap();
        assert_eq!(w.label(), "Z/3 wr Z/5");
        assert_eq!(w.generator_names(), vec!["t", "T", "a", "A", "b", "B"]);

        let opts = AlgebraOptions {
            base: Some("Z/3".to_string()),
            ..AlgebraOptions::default()
        };
        let l3 = reg.build("lamplighter", &opts).unwrap();
        assert_eq!(l3.generator_names(), vec!["t", "T", "a", "A"]);

        let opts = AlgebraOptions {
            top_generators: vec!["x".to_string()],
            ..AlgebraOptions::default()
        };
        let strip = reg.build("lamplighter-z2", &opts).unwrap();
        assert_eq!(strip.generator_names(), vec!["x", "a"]);
    }

    struct DistinctPretty(usize);

    impl AlgebraVisitor for DistinctPretty {
        type Output = (usize, usize);

        fn visit<A: Algebra>(self, algebra: &A) -> (usize, usize) {
            let ball = build_default_ball(algebra, BallCfg::new(self.0)).unwrap();
            let shown: std::collections::HashSet<String> = ball
                .vertices()
                .map(|v| algebra.pretty(ball.state(v)))
                .collect();
            (shown.len(), ball.len())
        }
    }

    #[test]
    fn pretty_is_injective_on_every_entry() {
        let reg = Registry::standard();
        let opts = AlgebraOptions {
            order: Some(4),
            moduli: Some(vec![2, 3]),
            ..AlgebraOptions::default()
        };
        for name in reg.names() {
            let algebra = reg.build(name, &opts).unwrap();
            let (distinct, states) = algebra.visit(DistinctPretty(3));
            assert_eq!(distinct, states, "{name}");
        }
        let free_top = AlgebraOptions {
            spec: Some("Z/3 wr Free(2)".to_string()),
            ..AlgebraOptions::default()
        };
        let (distinct, states) = reg.build("wreath", &free_top).unwrap().visit(DistinctPretty(3));
        assert_eq!(distinct, states);
    }

    #[test]
    fn huge_cyclic_modulus_builds_a_ball() {
        let reg = Registry::standard();
        let opts = AlgebraOptions {
            spec: Some(format!("Z/{} wr Z", u64::MAX)),
            ..AlgebraOptions::default()
        };
        let w = reg.build("wreath", &opts).unwrap();
        assert_eq!(w.generator_names(), vec!["t", "T", "a", "A"]);
        assert!(w.visit(BallSize(2)) > 1);

        let opts = AlgebraOptions {
            order: Some(u64::MAX),
            ..AlgebraOptions::default()
        };
        // 0, ±1, ±2
        assert_eq!(reg.build("cyclic", &opts).unwrap().visit(BallSize(2)), 5);
    }

    #[test]
    fn bad_requests_are_config_errors() {
        let reg = Registry::standard();
        let opts = AlgebraOptions::default();
        assert!(matches!(
            reg.build("quaternion", &opts),
            Err(ConfigError::UnknownAlgebra { .. })
        ));
        assert!(matches!(
            reg.build("cyclic", &opts),
            Err(ConfigError::MissingOption {
                option: "order",
                ..
            })
        ));
        let bad_spec = AlgebraOptions {
            spec: Some("Z/2 Z".to_string()),
            ..AlgebraOptions::default()
        };
        assert!(matches!(
            reg.build("wreath", &bad_spec),
            Err(ConfigError::Spec(SpecError::MissingSeparator { .. }))
        ));
        let bad_gen = AlgebraOptions {
            top_generators: vec!["q".to_string()],
            ..AlgebraOptions::default()
        };
        assert!(reg.build("wreath", &bad_gen).is_err());
    }
}
