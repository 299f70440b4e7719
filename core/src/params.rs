//! Named request parameters and their wire serializations.
//!
//! # Design
//! `Params` is an ordered name → value mapping with a small closed set of
//! value kinds: string, integer, or list of strings. The same mapping
//! serializes two ways depending on the verb: form-encoded into the query
//! string for get/delete, or as a JSON object body for post/put/patch.
//! Names are unique within one mapping; setting a name twice overwrites.

use serde_json::Value;
use url::form_urlencoded;

/// One parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    List(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v.into())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(v: Vec<String>) -> Self {
        ParamValue::List(v)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(v: Vec<&str>) -> Self {
        ParamValue::List(v.into_iter().map(str::to_string).collect())
    }
}

/// Ordered mapping of parameter name to value.
///
/// ```
/// use api_core::Params;
///
/// let params = Params::new()
///     .set("x", "string")
///     .set("y", 123)
///     .set("z", vec!["string in array"]);
/// assert_eq!(params.to_query(), "x=string&y=123&z%5B%5D=string+in+array");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a parameter, keeping insertion order.
    pub fn set(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        let value = value.into();
        if let Some(entry) = self.0.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.0.push((name.to_string(), value));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Serialize as an `application/x-www-form-urlencoded` query string.
    ///
    /// List values repeat the key with a `[]` suffix, one pair per element,
    /// so a server can reassemble the array. An empty list contributes no
    /// pairs at all.
    pub fn to_query(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.0 {
            match value {
                ParamValue::Str(s) => {
                    ser.append_pair(name, s);
                }
                ParamValue::Int(i) => {
                    ser.append_pair(name, &i.to_string());
                }
                ParamValue::List(items) => {
                    let key = format!("{name}[]");
                    for item in items {
                        ser.append_pair(&key, item);
                    }
                }
            }
        }
        ser.finish()
    }

    /// Serialize as a JSON object, one member per parameter.
    pub fn to_json(&self) -> serde_json::Map<String, Value> {
        let mut map = serde_json::Map::new();
        for (name, value) in &self.0 {
            let json = match value {
                ParamValue::Str(s) => Value::String(s.clone()),
                ParamValue::Int(i) => Value::from(*i),
                ParamValue::List(items) => {
                    Value::Array(items.iter().cloned().map(Value::String).collect())
                }
            };
            map.insert(name.clone(), json);
        }
        map
    }
}
