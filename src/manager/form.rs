use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::Entity;
use crate::common::FormError;
use crate::store::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText { rows: u8 },
    Url,
    Date,
    Number { min: i64, max: i64 },
    Select(&'static [(&'static str, &'static str)]),
    Checkbox,
    /// Comma-separated in the form, an array in the store.
    List,
}

/// One form control, described once and rendered by the generic form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
    pub default: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: "",
            default: "",
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub const fn default_value(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }
}

/// Controlled form state: every field held as the text shown in its control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults from the entity's schema.
    pub fn blank<E: Entity>() -> Self {
        let mut values = Self::new();
        for field in E::fields() {
            values.set(field.name, field.default);
        }
        values
    }

    pub fn with(mut self, name: &str, value: impl ToString) -> Self {
        self.set(name, value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn flag(&self, name: &str) -> bool {
        self.get(name) == "true"
    }

    pub fn set_flag(&mut self, name: &str, on: bool) {
        self.set(name, if on { "true" } else { "false" });
    }
}

/// Splits a comma-separated field: items trimmed, empties dropped.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Required fields must be non-blank; checkboxes are never blank.
pub fn validate<E: Entity>(values: &FormValues) -> Result<(), FormError> {
    for field in E::fields() {
        let blank = field.kind != FieldKind::Checkbox && values.get(field.name).trim().is_empty();
        if field.required && blank {
            return Err(FormError::Required {
                field: field.name,
                label: field.label,
            });
        }
    }
    Ok(())
}

/// Validates and converts form text into a store row.
pub fn build_payload<E: Entity>(values: &FormValues, now: DateTime<Utc>) -> Result<Row, FormError> {
    validate::<E>(values)?;

    let mut row = Row::new();
    for field in E::fields() {
        let raw = values.get(field.name);
        let value = match field.kind {
            FieldKind::Checkbox => Value::Bool(values.flag(field.name)),
            FieldKind::List => Value::from(split_list(raw)),
            FieldKind::Number { .. } if raw.trim().is_empty() => Value::Null,
            FieldKind::Number { .. } => {
                let number: i64 = raw.trim().parse().map_err(|_| FormError::NotANumber {
                    field: field.name,
                    label: field.label,
                })?;
                Value::from(number)
            }
            FieldKind::Date | FieldKind::Url if raw.trim().is_empty() && !field.required => {
                Value::Null
            }
            _ => Value::from(raw),
        };
        row.insert(field.name.to_string(), value);
    }

    E::finalize(&mut row, now);
    Ok(row)
}
