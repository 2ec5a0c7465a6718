//! Typed automaton document and its decode step.
//!
//! The input schema is a JSON object with five required keys:
//!
//! ```json
//! {
//!   "States": ["q0", "q1"],
//!   "Alphabet": ["a"],
//!   "Transitions": [["q0", "a", ["q1"]]],
//!   "Start State": ["q0"],
//!   "Accept States": ["q1"]
//! }
//! ```
//!
//! Decoding is split in two so callers can tell "not JSON" apart from
//! "JSON with missing or misshapen keys". Semantic checks live in
//! [`crate::validator`].

use crate::error::{Error, SchemaError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const STATES_KEY: &str = "States";
pub const ALPHABET_KEY: &str = "Alphabet";
pub const TRANSITIONS_KEY: &str = "Transitions";
pub const START_KEY: &str = "Start State";
pub const ACCEPTS_KEY: &str = "Accept States";

const REQUIRED_KEYS: [&str; 5] = [STATES_KEY, ALPHABET_KEY, TRANSITIONS_KEY, START_KEY, ACCEPTS_KEY];

/// One entry of the transition relation: `[from, symbol, [to...]]`.
///
/// `to` keeps the order it was given in; two transitions are equal only if
/// their `to` lists are equal element by element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    from = "(String, String, Vec<String>)",
    into = "(String, String, Vec<String>)"
)]
pub struct Transition {
    pub from: String,
    pub symbol: String,
    pub to: Vec<String>,
}

impl Transition {
    pub fn new(
        from: impl Into<String>,
        symbol: impl Into<String>,
        to: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            from: from.into(),
            symbol: symbol.into(),
            to: to.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<(String, String, Vec<String>)> for Transition {
    fn from((from, symbol, to): (String, String, Vec<String>)) -> Self {
        Self { from, symbol, to }
    }
}

impl From<Transition> for (String, String, Vec<String>) {
    fn from(t: Transition) -> Self {
        (t.from, t.symbol, t.to)
    }
}

/// Compact JSON form, e.g. `["q0","a",["q1"]]`.
impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = serde_json::to_string(&(&self.from, &self.symbol, &self.to))
            .map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

/// A parsed (but not yet validated) automaton description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonDoc {
    #[serde(rename = "States")]
    pub states: Vec<String>,

    #[serde(rename = "Alphabet")]
    pub alphabet: Vec<String>,

    #[serde(rename = "Transitions")]
    pub transitions: Vec<Transition>,

    /// Raw start-state list; a valid document has exactly one entry.
    #[serde(rename = "Start State")]
    pub start: Vec<String>,

    #[serde(rename = "Accept States")]
    pub accepts: Vec<String>,
}

impl AutomatonDoc {
    pub fn new(
        states: impl IntoIterator<Item = impl Into<String>>,
        alphabet: impl IntoIterator<Item = impl Into<String>>,
        transitions: impl IntoIterator<Item = Transition>,
        start: impl IntoIterator<Item = impl Into<String>>,
        accepts: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            states: states.into_iter().map(Into::into).collect(),
            alphabet: alphabet.into_iter().map(Into::into).collect(),
            transitions: transitions.into_iter().collect(),
            start: start.into_iter().map(Into::into).collect(),
            accepts: accepts.into_iter().map(Into::into).collect(),
        }
    }

    /// Decode a document from JSON text.
    ///
    /// Text that is not JSON yields [`Error::ParseMalformed`]; JSON that does
    /// not follow the schema yields [`Error::Schema`].
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(value)?)
    }

    /// Decode a document from an already-parsed JSON value.
    ///
    /// All five keys are checked for presence before any is decoded, so a
    /// missing key is reported even when an earlier key is misshapen.
    /// Unknown keys are ignored.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(SchemaError::NotAnObject {
                    found: json_kind(&other).to_string(),
                })
            }
        };

        if let Some(field) = REQUIRED_KEYS.into_iter().find(|k| !map.contains_key(*k)) {
            return Err(SchemaError::MissingField { field });
        }

        Ok(Self {
            states: take_field(&mut map, STATES_KEY)?,
            alphabet: take_field(&mut map, ALPHABET_KEY)?,
            transitions: take_field(&mut map, TRANSITIONS_KEY)?,
            start: take_field(&mut map, START_KEY)?,
            accepts: take_field(&mut map, ACCEPTS_KEY)?,
        })
    }

    /// The start state, if exactly one is declared.
    pub fn start_state(&self) -> Option<&str> {
        match self.start.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

fn take_field<T: DeserializeOwned>(
    map: &mut Map<String, Value>,
    field: &'static str,
) -> Result<T, SchemaError> {
    let value = map.remove(field).ok_or(SchemaError::MissingField { field })?;
    serde_json::from_value(value).map_err(|e| SchemaError::WrongShape {
        field,
        reason: e.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "States": ["q0", "q1"],
            "Alphabet": ["a"],
            "Transitions": [["q0", "a", ["q1"]]],
            "Start State": ["q0"],
            "Accept States": ["q1"]
        })
    }

    #[test]
    fn decodes_all_fields() {
        let doc = AutomatonDoc::from_value(sample()).unwrap();
        assert_eq!(doc.states, vec!["q0", "q1"]);
        assert_eq!(doc.alphabet, vec!["a"]);
        assert_eq!(doc.transitions, vec![Transition::new("q0", "a", ["q1"])]);
        assert_eq!(doc.start_state(), Some("q0"));
        assert_eq!(doc.accepts, vec!["q1"]);
    }

    #[test]
    fn missing_key_is_reported_by_name() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("Start State");
        let err = AutomatonDoc::from_value(value).unwrap_err();
        assert_eq!(err, SchemaError::MissingField { field: "Start State" });
    }

    #[test]
    fn misnamed_key_counts_as_missing() {
        let mut value = sample();
        let map = value.as_object_mut().unwrap();
        let accepts = map.remove("Accept States").unwrap();
        map.insert("AcceptStates".into(), accepts);
        let err = AutomatonDoc::from_value(value).unwrap_err();
        assert_eq!(err, SchemaError::MissingField { field: "Accept States" });
    }

    #[test]
    fn missing_key_wins_over_wrong_shape() {
        let mut value = sample();
        let map = value.as_object_mut().unwrap();
        map.insert("States".into(), json!("q0"));
        map.remove("Alphabet");
        let err = AutomatonDoc::from_value(value).unwrap_err();
        assert_eq!(err, SchemaError::MissingField { field: "Alphabet" });
    }

    #[test]
    fn non_array_field_is_wrong_shape() {
        let mut value = sample();
        value["States"] = json!("q0");
        let err = AutomatonDoc::from_value(value).unwrap_err();
        assert!(matches!(err, SchemaError::WrongShape { field: "States", .. }));
    }

    #[test]
    fn short_transition_is_wrong_shape() {
        let mut value = sample();
        value["Transitions"] = json!([["q0", "a"]]);
        let err = AutomatonDoc::from_value(value).unwrap_err();
        assert!(matches!(err, SchemaError::WrongShape { field: "Transitions", .. }));
    }

    #[test]
    fn non_string_symbol_is_wrong_shape() {
        let mut value = sample();
        value["Alphabet"] = json!([1]);
        let err = AutomatonDoc::from_value(value).unwrap_err();
        assert!(matches!(err, SchemaError::WrongShape { field: "Alphabet", .. }));
    }

    #[test]
    fn top_level_array_is_not_an_object() {
        let err = AutomatonDoc::from_value(json!([1, 2])).unwrap_err();
        assert_eq!(err, SchemaError::NotAnObject { found: "array".into() });
    }

    #[test]
    fn extra_keys_are_ignored() {
        let mut value = sample();
        value["Comment"] = json!("hello");
        assert!(AutomatonDoc::from_value(value).is_ok());
    }

    #[test]
    fn garbage_text_is_parse_malformed() {
        let err = AutomatonDoc::from_json_str("{ States: ").unwrap_err();
        assert!(matches!(err, Error::ParseMalformed(_)));
    }

    #[test]
    fn transition_displays_as_compact_json() {
        let t = Transition::new("q0", "a", ["q1", "q2"]);
        assert_eq!(t.to_string(), r#"["q0","a",["q1","q2"]]"#);
        assert_eq!(Transition::new("q0", "a", Vec::<String>::new()).to_string(), r#"["q0","a",[]]"#);
    }

    #[test]
    fn start_state_requires_exactly_one() {
        let mut doc = AutomatonDoc::from_value(sample()).unwrap();
        doc.start.push("q1".into());
        assert_eq!(doc.start_state(), None);
        doc.start.clear();
        assert_eq!(doc.start_state(), None);
    }

    #[test]
    fn serializes_with_schema_key_names() {
        let doc = AutomatonDoc::from_value(sample()).unwrap();
        assert_eq!(serde_json::to_value(&doc).unwrap(), sample());
    }
}
