//! Wreath composer: `C ≀ D` from a base group `C` and a top group `D`.
//!
//! Purpose
//! - Compose two already-instantiated groups into an algebra whose state is a
//!   head position `d ∈ D` plus a sparse tape `D → C` of finite support.
//! - Generators: moves (`d ↦ d·g` for top generators `g`) and toggles (bound
//!   to an offset `o ∈ D` and a base increment `δ ∈ C`).
//!
//! Addressing
//! - Tape keys are absolute top-group elements. A toggle writes at
//!   `a = d·o`; moving the head never rewrites keys. Canonical order of the
//!   tape comes from `D::Elem: Ord`, which every `Group` provides.
//!
//! Naming
//! - Moves keep the top group's names (`t,T` for `Z`, `x,X,y,Y` for `Z²`).
//! - Toggles are named per base generator family: `a, b, ...` with one offset;
//!   with several offsets the letter is the offset's (`a`, `b`, ...) and extra
//!   families get a numeric suffix (`a2`, `A2`). An uppercase inverse exists
//!   only when the increment is not self-inverse.
//! - Toggle names are not disambiguated against move names; over a free top
//!   group `a` names both a move and a toggle, and name lookup finds the move.

mod spec;
mod tape;

use crate::algebra::{family_letter, inverse_name, Algebra, Generator, Group};
use crate::error::SpecError;

pub use spec::WreathSpec;
pub use tape::Tape;

/// Composite state `(head, tape)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WreathState<D: Ord, C> {
    pub head: D,
    pub tape: Tape<D, C>,
}

/// Generator action of the composite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WreathStep<D, C> {
    /// Right-multiply the head.
    Move(D),
    /// Multiply the cell at `head · offset` by `delta`.
    Toggle { offset: D, delta: C },
}

/// The composite algebra `base ≀ top`.
#[derive(Clone, Debug)]
pub struct Wreath<C: Group, D: Group> {
    base: C,
    top: D,
    moves: Vec<Generator<D::Elem>>,
    offsets: Vec<D::Elem>,
}

pub type WreathStateOf<C, D> = WreathState<<D as Group>::Elem, <C as Group>::Elem>;
pub type WreathStepOf<C, D> = WreathStep<<D as Group>::Elem, <C as Group>::Elem>;

impl<C: Group, D: Group> Wreath<C, D> {
    /// All top generators as moves, one toggle offset at the identity.
    pub fn new(base: C, top: D) -> Self {
        let moves = top
            .named_generators()
            .into_iter()
            .map(|(name, elem)| Generator::new(name, elem))
            .collect();
        let offsets = vec![top.one()];
        Self {
            base,
            top,
            moves,
            offsets,
        }
    }

    pub fn base(&self) -> &C {
        &self.base
    }

    pub fn top(&self) -> &D {
        &self.top
    }

    pub fn offsets(&self) -> &[D::Elem] {
        &self.offsets
    }

    pub fn moves(&self) -> &[Generator<D::Elem>] {
        &self.moves
    }

    /// Replace the toggle offsets with the given top-group words
    /// (`e` for the identity). An empty list keeps the identity offset; at
    /// most 26 offsets, one toggle letter each.
    pub fn with_offset_words<S: AsRef<str>>(mut self, words: &[S]) -> Result<Self, SpecError> {
        if words.is_empty() {
            return Ok(self);
        }
        if words.len() > 26 {
            let listed: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
            return Err(SpecError::invalid(
                &listed.join(","),
                format!("at most 26 offsets, got {}", words.len()),
            ));
        }
        self.offsets = words
            .iter()
            .map(|w| self.top.parse_word(w.as_ref()))
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    /// Keep only the named top moves, in the given order.
    pub fn with_top_generators<S: AsRef<str>>(mut self, names: &[S]) -> Result<Self, SpecError> {
        let mut picked = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let gen = self
                .moves
                .iter()
                .find(|g| g.name == name)
                .ok_or_else(|| SpecError::UnknownGenerator {
                    name: name.to_string(),
                })?;
            picked.push(gen.clone());
        }
        self.moves = picked;
        Ok(self)
    }

    /// Toggle generators in naming order: offsets outer, base families inner.
    pub fn toggles(&self) -> Vec<Generator<WreathStepOf<C, D>>> {
        let families = self.base.families();
        let several = self.offsets.len() > 1;
        let mut out = Vec::new();
        for (j, offset) in self.offsets.iter().enumerate() {
            for (i, fam) in families.iter().enumerate() {
                let name = match (several, i) {
                    (false, _) => family_letter(i).to_string(),
                    (true, 0) => family_letter(j).to_string(),
                    (true, _) => format!("{}{}", family_letter(j), i + 1),
                };
                if let Some(inv) = &fam.inverse {
                    out.push(Generator::new(
                        name.clone(),
                        WreathStep::Toggle {
                            offset: offset.clone(),
                            delta: fam.forward.clone(),
                        },
                    ));
                    out.push(Generator::new(
                        inverse_name(&name),
                        WreathStep::Toggle {
                            offset: offset.clone(),
                            delta: inv.clone(),
                        },
                    ));
                } else {
                    out.push(Generator::new(
                        name,
                        WreathStep::Toggle {
                            offset: offset.clone(),
                            delta: fam.forward.clone(),
                        },
                    ));
                }
            }
        }
        out
    }

    /// Build a state directly from a head and `(address, value)` cells.
    pub fn state(
        &self,
        head: D::Elem,
        cells: impl IntoIterator<Item = (D::Elem, C::Elem)>,
    ) -> WreathStateOf<C, D> {
        WreathState {
            head,
            tape: Tape::from_cells(&self.base, cells),
        }
    }
}

impl<C: Group, D: Group> Algebra for Wreath<C, D> {
    type State = WreathStateOf<C, D>;
    type Step = WreathStepOf<C, D>;

    fn label(&self) -> String {
        format!("{} wr {}", self.base.name(), self.top.name())
    }

    fn identity(&self) -> Self::State {
        WreathState {
            head: self.top.one(),
            tape: Tape::new(),
        }
    }

    fn apply(&self, step: &Self::Step, state: &Self::State) -> Self::State {
        match step {
            WreathStep::Move(g) => WreathState {
                head: self.top.multiply(&state.head, g),
                tape: state.tape.clone(),
            },
            WreathStep::Toggle { offset, delta } => {
                let addr = self.top.multiply(&state.head, offset);
                let mut tape = state.tape.clone();
                tape.multiply_at(addr, delta, &self.base);
                WreathState {
                    head: state.head.clone(),
                    tape,
                }
            }
        }
    }

    fn pretty(&self, state: &Self::State) -> String {
        let head = self.top.show(&state.head);
        if state.tape.is_empty() {
            return format!("d={head}");
        }
        let cells: Vec<String> = state
            .tape
            .iter()
            .map(|(a, v)| format!("{}:{}", self.top.show(a), self.base.show(v)))
            .collect();
        format!("d={head}|{}", cells.join(";"))
    }

    fn default_generators(&self) -> Vec<Generator<Self::Step>> {
        let mut gens: Vec<Generator<Self::Step>> = self
            .moves
            .iter()
            .map(|g| Generator::new(g.name.clone(), WreathStep::Move(g.step.clone())))
            .collect();
        gens.extend(self.toggles());
        gens
    }

    fn inverse_generator(&self, gen: &Generator<Self::Step>) -> Option<Generator<Self::Step>> {
        let step = match &gen.step {
            WreathStep::Move(g) => WreathStep::Move(self.top.inverse(g)),
            WreathStep::Toggle { offset, delta } => WreathStep::Toggle {
                offset: offset.clone(),
                delta: self.base.inverse(delta),
            },
        };
        Some(Generator::new(inverse_name(&gen.name), step))
    }
}
