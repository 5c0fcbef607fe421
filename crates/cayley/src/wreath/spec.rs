//! Grammar `<BaseSpec> wr <TopSpec>`; each side is a simple `FactorSpec`.

use std::fmt;
use std::str::FromStr;

use crate::algebra::{Factor, FactorSpec};
use crate::error::SpecError;

use super::Wreath;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WreathSpec {
    pub base: FactorSpec,
    pub top: FactorSpec,
}

impl WreathSpec {
    /// Parse `"<Base> wr <Top>"`. Nested composites are rejected by the
    /// factor grammar (`Z/2 wr Z wr Z` fails on its top side).
    pub fn parse(text: &str) -> Result<Self, SpecError> {
        let s = text.trim();
        let (base, top) = s
            .split_once(" wr ")
            .ok_or_else(|| SpecError::MissingSeparator {
                spec: s.to_string(),
            })?;
        Ok(Self {
            base: FactorSpec::parse(base)?,
            top: FactorSpec::parse(top)?,
        })
    }

    /// Instantiate both factors and compose them with default generators.
    pub fn build(&self) -> Result<Wreath<Factor, Factor>, SpecError> {
        Ok(Wreath::new(self.base.build()?, self.top.build()?))
    }
}

impl FromStr for WreathSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WreathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wr {}", self.base, self.top)
    }
}
