//! Error types shared by the algebra parsers, the registry and the analyses.
//!
//! Two families:
//! - `SpecError`: a textual specification (wreath spec, factor spec, word) did
//!   not parse. Fatal for that configuration attempt; no partial algebra exists.
//! - `ConfigError`: parameters rejected before any BFS starts.

use std::fmt;

/// Parse failure for factor specs (`Z/5`, `Dn(4)`, ...), wreath specs
/// (`<Base> wr <Top>`) and generator words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpecError {
    MissingSeparator { spec: String },
    UnknownFactor { spec: String },
    InvalidParameter { spec: String, reason: String },
    UnknownGenerator { name: String },
}

impl SpecError {
    pub(crate) fn invalid(spec: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator { spec } => {
                write!(f, "wreath spec '{spec}' must have the form '<Base> wr <Top>'")
            }
            Self::UnknownFactor { spec } => write!(f, "unknown group spec '{spec}'"),
            Self::InvalidParameter { spec, reason } => {
                write!(f, "invalid parameter in '{spec}': {reason}")
            }
            Self::UnknownGenerator { name } => write!(f, "unknown generator '{name}'"),
        }
    }
}

impl std::error::Error for SpecError {}

/// Configuration rejected before BFS (or before the dead-end scan) begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    NegativeRadius { radius: i64 },
    EmptyGenerators,
    ZeroDepthCap,
    DepthCapTooLarge { radius: usize, depth_cap: usize },
    BallTooSmall { built: usize, required: usize },
    UnknownAlgebra { name: String },
    MissingOption { algebra: String, option: &'static str },
    Spec(SpecError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeRadius { radius } => write!(f, "radius must be >= 0, got {radius}"),
            Self::EmptyGenerators => write!(f, "generator list is empty"),
            Self::ZeroDepthCap => write!(f, "depth_cap must be >= 1"),
            Self::DepthCapTooLarge { radius, depth_cap } => write!(
                f,
                "radius {radius} + depth_cap {depth_cap} exceeds the largest supported radius"
            ),
            Self::BallTooSmall { built, required } => write!(
                f,
                "ball was built to radius {built}, dead-end scan needs radius {required}"
            ),
            Self::UnknownAlgebra { name } => write!(f, "no algebra registered as '{name}'"),
            Self::MissingOption { algebra, option } => {
                write!(f, "algebra '{algebra}' requires option '{option}'")
            }
            Self::Spec(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spec(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SpecError> for ConfigError {
    fn from(err: SpecError) -> Self {
        Self::Spec(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_error_wraps_into_config_error() {
        let err: ConfigError = SpecError::UnknownFactor {
            spec: "Q8".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "unknown group spec 'Q8'");
        assert!(std::error::Error::source(&err).is_some());
    }
}
