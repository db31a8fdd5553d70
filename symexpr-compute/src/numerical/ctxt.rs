use levenshtein::levenshtein;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The trigonometric mode of a context. This affects how the arguments of trigonometric functions
/// are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u8)]
pub enum TrigMode {
    /// Use radians.
    #[default]
    Radians,

    /// Use degrees.
    Degrees,
}

impl TrigMode {
    /// Converts an angle in this mode to radians.
    pub fn to_radians(&self, angle: f64) -> f64 {
        match self {
            Self::Radians => angle,
            Self::Degrees => angle.to_radians(),
        }
    }
}

impl std::fmt::Display for TrigMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrigMode::Radians => write!(f, "radians"),
            TrigMode::Degrees => write!(f, "degrees"),
        }
    }
}

/// A context to use when evaluating an expression, containing the values bound to variables.
///
/// The default context binds no variables and uses [`TrigMode::Radians`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,

    /// The trigonometric mode of the context.
    pub trig_mode: TrigMode,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Creates a new empty context with the given trigonometric mode.
    pub fn with_trig_mode(trig_mode: TrigMode) -> Ctxt {
        Ctxt {
            trig_mode,
            ..Default::default()
        }
    }

    /// Add a variable to the context, replacing any previous value bound to the same name.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Returns all variables in the context with a name similar to the given name, sorted by name.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        let mut similar = self.vars
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(|n| n.as_str())
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Ctxt {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Ctxt {
            vars: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
            ..Default::default()
        }
    }
}

impl<S: Into<String>> Extend<(S, f64)> for Ctxt {
    fn extend<I: IntoIterator<Item = (S, f64)>>(&mut self, iter: I) {
        self.vars.extend(iter.into_iter().map(|(name, value)| (name.into(), value)));
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn trig_mode_is_repr() {
        assert_eq!(serde_json::to_string(&TrigMode::Degrees).unwrap(), "1");
        assert_eq!(serde_json::from_str::<TrigMode>("0").unwrap(), TrigMode::Radians);
    }

    #[test]
    fn ctxt_round_trip() {
        let mut ctxt = [("x", 2.5), ("theta", -1.0)].into_iter().collect::<Ctxt>();
        ctxt.trig_mode = TrigMode::Degrees;
        let json = serde_json::to_string(&ctxt).unwrap();
        assert_eq!(serde_json::from_str::<Ctxt>(&json).unwrap(), ctxt);
    }
}
