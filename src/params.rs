//! Caller-supplied arguments for a call.
//!
//! [`Params`] is an ordered list of name/value pairs. Values keep the type the
//! caller gave them; coercion to the kind an endpoint declares happens when
//! the request is prepared.
//!
//! ```
//! use superchief::Params;
//!
//! let params = Params::new()
//!     .with("to", "fr")
//!     .with("text", "good morning");
//! assert_eq!(params.get("to").and_then(|v| v.as_text()), Some("fr"));
//! ```

use std::{fmt, num::FpCategory};

/// A single argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Free text.
    Text(String),
    /// A whole number.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
}

impl ParamValue {
    /// Returns the text if this is a [`ParamValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// An empty string counts as not provided.
    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, ParamValue::Text(text) if text.is_empty())
    }

    /// Numeric zero, or a float that is not a number.
    pub(crate) fn is_zero(&self) -> bool {
        match self {
            ParamValue::Int(n) => *n == 0,
            ParamValue::Float(f) => matches!(f.classify(), FpCategory::Zero | FpCategory::Nan),
            ParamValue::Text(_) | ParamValue::Bool(_) => false,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(text) => f.write_str(text),
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::Float(n) => write!(f, "{n}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

macro_rules! int_param {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self {
                    ParamValue::Int(i64::from(value))
                }
            }
        )*
    };
}

int_param!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        // ids beyond i64 are kept verbatim as text
        i64::try_from(value).map_or_else(|_| ParamValue::Text(value.to_string()), ParamValue::Int)
    }
}

/// Ordered arguments for a single call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: Vec<(String, ParamValue)>,
}

impl Params {
    /// Returns an empty set of arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) an argument and returns `self`.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds an argument only when `value` is `Some`.
    #[must_use]
    pub fn with_opt<V: Into<ParamValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    /// Adds (or replaces) an argument.
    pub fn insert(&mut self, name: &str, value: impl Into<ParamValue>) {
        let value = value.into();
        match self.values.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((name.to_string(), value)),
        }
    }

    /// Returns the argument called `name`.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Returns the argument called `name` unless it is missing or blank.
    pub(crate) fn provided(&self, name: &str) -> Option<&ParamValue> {
        self.get(name).filter(|value| !value.is_blank())
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no arguments were given.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name.as_ref(), value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_existing_value() {
        let mut params = Params::new().with("type", "both");
        params.insert("type", "Vanity");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("type"), Some(&ParamValue::Text("Vanity".into())));
    }

    #[test]
    fn blank_text_is_not_provided() {
        let params = Params::new().with("id", "").with("count", 0u32);
        assert!(params.provided("id").is_none());
        assert_eq!(params.provided("count"), Some(&ParamValue::Int(0)));
        assert!(params.provided("missing").is_none());
    }

    #[test]
    fn with_opt_skips_none() {
        let params = Params::new().with_opt::<&str>("title", None).with_opt("priv", Some(true));
        assert!(params.get("title").is_none());
        assert_eq!(params.get("priv"), Some(&ParamValue::Bool(true)));
    }

    #[test]
    fn huge_ids_stay_exact() {
        assert_eq!(ParamValue::from(u64::MAX).to_string(), u64::MAX.to_string());
        assert_eq!(ParamValue::from(42u64), ParamValue::Int(42));
    }

    #[test]
    fn collects_from_pairs() {
        let params: Params = [("user", "ninja"), ("platform", "xbl")].into_iter().collect();
        assert_eq!(params.get("platform").and_then(ParamValue::as_text), Some("xbl"));
    }
}
