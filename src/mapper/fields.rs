use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::MappingError;

/// Read access to one JSON object of a payload, remembering where in the
/// item it sits so errors can name the full field path.
///
/// `null` is treated the same as an absent key everywhere.
pub(crate) struct Fields<'a> {
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(path: impl Into<String>, value: &'a Value) -> Result<Fields<'a>, MappingError> {
        let path = path.into();
        match value {
            Value::Object(map) => Ok(Fields { path, map }),
            other => Err(MappingError::TypeMismatch {
                field: path,
                expected: "an object",
                found: kind_of(other),
            }),
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.map.iter().filter(|(_, value)| !value.is_null())
    }

    pub(crate) fn field_path(&self, key: &str) -> String {
        format!("{}.{}", self.path, key)
    }

    pub(crate) fn missing(&self, key: &str) -> MappingError {
        MappingError::MissingField {
            object: self.path.clone(),
            field: key.to_string(),
        }
    }

    pub(crate) fn mismatch(&self, key: &str, expected: &'static str, found: &Value) -> MappingError {
        MappingError::TypeMismatch {
            field: self.field_path(key),
            expected,
            found: kind_of(found),
        }
    }

    fn invalid(&self, key: &str, value: impl ToString, reason: impl ToString) -> MappingError {
        MappingError::InvalidValue {
            field: self.field_path(key),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn object(&self, key: &str) -> Result<Option<Fields<'a>>, MappingError> {
        self.get(key)
            .map(|value| Fields::new(self.field_path(key), value))
            .transpose()
    }

    pub(crate) fn str(&self, key: &str) -> Result<Option<&'a str>, MappingError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => Err(self.mismatch(key, "a string", other)),
        }
    }

    pub(crate) fn required_str(&self, key: &str) -> Result<&'a str, MappingError> {
        self.str(key)?.ok_or_else(|| self.missing(key))
    }

    pub(crate) fn string(&self, key: &str) -> Result<Option<String>, MappingError> {
        Ok(self.str(key)?.map(str::to_string))
    }

    pub(crate) fn required_string(&self, key: &str) -> Result<String, MappingError> {
        self.required_str(key).map(str::to_string)
    }

    pub(crate) fn bool(&self, key: &str) -> Result<Option<bool>, MappingError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Bool(value)) => Ok(Some(*value)),
            Some(other) => Err(self.mismatch(key, "a boolean", other)),
        }
    }

    /// Unsigned counter. The API sends these as decimal strings, fixtures
    /// and older payloads as numbers; both are accepted.
    pub(crate) fn u64(&self, key: &str) -> Result<Option<u64>, MappingError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Number(number)) => number
                .as_u64()
                .map(Some)
                .ok_or_else(|| self.invalid(key, number, "not an unsigned integer")),
            Some(Value::String(text)) => text
                .parse::<u64>()
                .map(Some)
                .map_err(|e| self.invalid(key, text, e)),
            Some(other) => Err(self.mismatch(key, "an unsigned integer", other)),
        }
    }

    pub(crate) fn u32(&self, key: &str) -> Result<Option<u32>, MappingError> {
        self.u64(key)?
            .map(|value| u32::try_from(value).map_err(|e| self.invalid(key, value, e)))
            .transpose()
    }

    /// Ordered list of strings; absent means empty.
    pub(crate) fn strings(&self, key: &str) -> Result<Vec<String>, MappingError> {
        match self.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Array(values)) => values
                .iter()
                .enumerate()
                .map(|(index, value)| match value {
                    Value::String(text) => Ok(text.clone()),
                    other => Err(self.mismatch(&format!("{}[{}]", key, index), "a string", other)),
                })
                .collect(),
            Some(other) => Err(self.mismatch(key, "an array", other)),
        }
    }

    pub(crate) fn timestamp(&self, key: &str) -> Result<Option<DateTime<Utc>>, MappingError> {
        self.str(key)?
            .map(|text| {
                DateTime::parse_from_rfc3339(text)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| self.invalid(key, text, e))
            })
            .transpose()
    }

    pub(crate) fn required_timestamp(&self, key: &str) -> Result<DateTime<Utc>, MappingError> {
        self.timestamp(key)?.ok_or_else(|| self.missing(key))
    }

    pub(crate) fn parsed<T>(&self, key: &str) -> Result<Option<T>, MappingError>
    where
        T: std::str::FromStr,
        T::Err: ToString,
    {
        self.str(key)?
            .map(|text| text.parse::<T>().map_err(|e| self.invalid(key, text, e)))
            .transpose()
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
