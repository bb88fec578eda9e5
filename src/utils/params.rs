use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;
use crate::Error;

/// A scalar identifier of a record (class, student, ...)
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Text(String),
}

impl Id {
    /// `false` for `0` and the empty string. Optional ids that aren't present are left out of requests
    pub fn is_present(&self) -> bool {
        match self {
            Id::Number(n) => *n != 0,
            Id::Text(s) => !s.is_empty(),
        }
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{n}"),
            Id::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

impl From<i32> for Id {
    fn from(n: i32) -> Self {
        Id::Number(n as i64)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_owned())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Text(s)
    }
}

/// Flat, insertion ordered record of form fields
///
/// Inserting a key that already exists replaces the value but keeps the original position
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Params {
    fields: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(field) => field.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Builder flavour of [Params::insert]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts `id` only if it is [present](Id::is_present)
    pub fn with_id(mut self, key: impl Into<String>, id: Option<&Id>) -> Self {
        if let Some(id) = id.filter(|id| id.is_present()) {
            self.insert(key, id);
        }
        self
    }

    /// Inserts every field of `other`, later values win
    pub fn merge(mut self, other: Params) -> Self {
        for (key, value) in other.fields {
            self.insert(key, value);
        }
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(index).1)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Builds [Params] from a JSON object of scalars, keeping the key order of the object
    ///
    /// Values are written the way a browser form would: `null` becomes `"null"` and whole floats lose their fraction (`1.0` is `"1"`)
    pub fn from_json(value: &Value) -> Result<Self, Error> {
        let object = value.as_object().ok_or_else(|| Error::InvalidParams(format!("expected a JSON object, got '{}'", value)))?;
        let mut params = Params::new();
        for (key, value) in object {
            match value {
                Value::Null => params.insert(key.as_str(), "null"),
                Value::String(s) => params.insert(key.as_str(), s),
                Value::Number(n) => params.insert(key.as_str(), number_to_string(n)),
                Value::Bool(b) => params.insert(key.as_str(), b),
                Value::Array(_) | Value::Object(_) => {
                    return Err(Error::InvalidParams(format!("field '{}' is not a scalar", key)))
                }
            }
        }
        Ok(params)
    }
}

fn number_to_string(n: &serde_json::Number) -> String {
    match n.as_f64() {
        // f64's Display never prints a trailing ".0"
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Params {
    fn from(fields: [(K, V); N]) -> Self {
        let mut params = Params::new();
        for (key, value) in fields {
            params.insert(key, value);
        }
        params
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
