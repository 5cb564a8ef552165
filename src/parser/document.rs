use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{OptionsError, Result};

/// Typed view over one JSON object of an options document.
///
/// Every option is read through one of the population strategies below, so the
/// rules deciding whether a field is touched stay visible at the call site.
pub(crate) struct Document<'a> {
    path: Option<&'a str>,
    object: &'a Map<String, Value>,
}

impl<'a> Document<'a> {
    pub fn new(value: &'a Value, path: Option<&'a str>) -> Result<Self> {
        match value {
            Value::Object(object) => Ok(Self { path, object }),
            other => Err(OptionsError::malformed(
                path.unwrap_or("<document>"),
                format!("expected an object, found {}", kind(other)),
            )),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.object.keys().map(String::as_str)
    }

    /// Reads `key` as `T` if it exists. A present key of the wrong shape is an error.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.object.get(key) {
            Some(value) => T::deserialize(value)
                .map(Some)
                .map_err(|err| OptionsError::malformed(&self.key_path(key), err)),
            None => Ok(None),
        }
    }

    /// Assign-with-fallback: `target` always receives either the document value or `default`.
    pub fn assign_with_fallback<T: DeserializeOwned>(
        &self,
        key: &str,
        target: &mut T,
        default: T,
    ) -> Result<()> {
        *target = self.get(key)?.unwrap_or(default);
        Ok(())
    }

    /// Assign-with-fallback for an `f32`. Numbers beyond the `f32` range are rejected.
    pub fn assign_number_with_fallback(
        &self,
        key: &str,
        target: &mut f32,
        default: f32,
    ) -> Result<()> {
        let value = self.get::<f32>(key)?.unwrap_or(default);
        if !value.is_finite() {
            return Err(OptionsError::malformed(
                &self.key_path(key),
                "number is out of range for f32",
            ));
        }

        *target = value;
        Ok(())
    }

    /// Assign-if-present: `target` keeps its current value when `key` is missing.
    /// Otherwise the first `N` numbers of the sequence are taken in order and any
    /// further elements are ignored. A shorter sequence, or one whose first `N`
    /// numbers overflow `f32`, leaves `target` as it was.
    pub fn assign_sequence_if_present<const N: usize>(
        &self,
        key: &str,
        target: &mut [f32; N],
    ) -> Result<()> {
        let Some(values) = self.get::<Vec<f32>>(key)? else {
            return Ok(());
        };

        let Some(head) = values.get(..N) else {
            return Err(OptionsError::malformed(
                &self.key_path(key),
                format!("expected at least {} numbers, found {}", N, values.len()),
            ));
        };

        if head.iter().any(|value| !value.is_finite()) {
            return Err(OptionsError::malformed(
                &self.key_path(key),
                "number is out of range for f32",
            ));
        }

        target.copy_from_slice(head);
        Ok(())
    }

    /// Group-if-present: runs `populate` on the nested object at `key`. When the
    /// key is missing none of the group's fields are touched.
    pub fn group_if_present(
        &self,
        key: &'a str,
        populate: impl FnOnce(&Document<'a>) -> Result<()>,
    ) -> Result<()> {
        match self.object.get(key) {
            Some(value) => populate(&Document::new(value, Some(key))?),
            None => Ok(()),
        }
    }

    fn key_path(&self, key: &str) -> String {
        match self.path {
            Some(path) => format!("{}.{}", path, key),
            None => key.to_owned(),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
