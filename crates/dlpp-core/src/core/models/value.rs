use std::fmt;

/// A single tabulated quantity from one sampled timestep.
///
/// DL_POLY legitimately emits a run of `*` characters in place of a value
/// that exceeded its display width, so a token that fails numeric parsing is
/// retained verbatim as [`PropertyValue::Text`] rather than treated as an
/// error.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// The step counter, the only integer column.
    Step(i64),
    /// Any other tabulated quantity.
    Number(f64),
    /// A token that did not parse numerically, kept verbatim.
    Text(String),
}

impl PropertyValue {
    /// Parses a token from the step column, falling back to raw text.
    pub fn step(token: &str) -> Self {
        token
            .parse::<i64>()
            .map(Self::Step)
            .unwrap_or_else(|_| Self::Text(token.to_string()))
    }

    /// Parses a token from any non-step column, falling back to raw text.
    pub fn number(token: &str) -> Self {
        token
            .parse::<f64>()
            .map(Self::Number)
            .unwrap_or_else(|_| Self::Text(token.to_string()))
    }

    /// Numeric view of the value, `None` for retained raw text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Step(step) => Some(*step as f64),
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so that width and alignment specifiers apply to the whole
        // rendered token when the table writer formats fields.
        match self {
            Self::Step(step) => f.pad(&step.to_string()),
            Self::Number(value) => f.pad(&value.to_string()),
            Self::Text(text) => f.pad(text),
        }
    }
}
