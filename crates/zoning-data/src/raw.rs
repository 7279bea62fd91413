//! Untyped source rows and the field accessors that validate them.

use std::collections::HashMap;

use zoning_core::errors::DataError;

/// One source row keyed by column name. Values are kept as text until a
/// typed accessor validates them.
pub(crate) struct RawRow<'a> {
    pub path: &'a str,
    /// 1-based data row number (header excluded).
    pub row: usize,
    fields: HashMap<String, String>,
}

impl<'a> RawRow<'a> {
    pub fn new(path: &'a str, row: usize, fields: HashMap<String, String>) -> Self {
        Self { path, row, fields }
    }

    /// Build from a JSON object; scalars are rendered to text, null becomes empty.
    pub fn from_json(
        path: &'a str,
        row: usize,
        object: &serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        let fields = object
            .iter()
            .map(|(k, v)| {
                let text = match v {
                    serde_json::Value::Null => String::new(),
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), text)
            })
            .collect();
        Self::new(path, row, fields)
    }

    /// First non-empty value among `columns`, trimmed.
    pub fn text(&self, columns: &[&str]) -> Option<&str> {
        columns
            .iter()
            .filter_map(|c| self.fields.get(*c))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
    }

    pub fn required_text(&self, field: &'static str, columns: &[&str]) -> Result<&str, DataError> {
        self.text(columns)
            .ok_or_else(|| self.invalid(field, "missing value".to_string()))
    }

    /// Optional finite number. Empty means `None`; anything unparseable or
    /// non-finite is an error.
    pub fn number(&self, field: &'static str, columns: &[&str]) -> Result<Option<f64>, DataError> {
        let Some(text) = self.text(columns) else {
            return Ok(None);
        };
        let value: f64 = text
            .parse()
            .map_err(|_| self.invalid(field, format!("not a number: {text:?}")))?;
        if !value.is_finite() {
            return Err(self.invalid(field, format!("not finite: {text:?}")));
        }
        Ok(Some(value))
    }

    pub fn required_number(&self, field: &'static str, columns: &[&str]) -> Result<f64, DataError> {
        self.number(field, columns)?
            .ok_or_else(|| self.invalid(field, "missing value".to_string()))
    }

    pub fn invalid(&self, field: &'static str, message: String) -> DataError {
        DataError::InvalidField {
            path: self.path.to_string(),
            row: self.row,
            field,
            message,
        }
    }
}
