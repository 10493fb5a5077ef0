//! Column configuration and row identity for the data table.
//!
//! Rows are opaque JSON records supplied by the presentation shell. The
//! engine never interprets them beyond extracting cell values and a
//! stable per-row key.

use crate::types::RowKey;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Parse a JSON array payload into table rows
///
/// Convenience for shells that receive row data as a serialized array.
pub fn rows_from_json(payload: &str) -> Result<Vec<Value>> {
    let rows: Vec<Value> = serde_json::from_str(payload)?;
    Ok(rows)
}

/// Derives a cell value from a row
pub type ValueFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// Derives a row key from a row
pub type KeyFn = Arc<dyn Fn(&Value) -> RowKey + Send + Sync>;

/// Turns a raw cell value into display text
pub type CellTransform = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Horizontal alignment hint for a column
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// How a column reads its value out of a row
#[derive(Clone)]
pub enum ColumnAccessor {
    /// Read a named property of the row object
    Field(String),
    /// Derive the value with a caller-supplied function
    Computed(ValueFn),
}

impl fmt::Debug for ColumnAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnAccessor::Field(name) => f.debug_tuple("Field").field(name).finish(),
            ColumnAccessor::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// One column of the table, immutable for the table's configuration
/// lifetime
#[derive(Clone)]
pub struct ColumnSpec {
    pub id: String,
    pub header: String,
    pub accessor: ColumnAccessor,
    /// Optional display transform; without one, [`Self::display_value`]
    /// stringifies the raw value
    pub transform: Option<CellTransform>,
    pub sortable: bool,
    pub width: Option<String>,
    pub align: Alignment,
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("transform", &self.transform.as_ref().map(|_| "..").unwrap_or("none"))
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("align", &self.align)
            .finish()
    }
}

impl ColumnSpec {
    /// Column reading the row property named by its id
    pub fn field(id: impl Into<String>, header: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            accessor: ColumnAccessor::Field(id.clone()),
            id,
            header: header.into(),
            transform: None,
            sortable: false,
            width: None,
            align: Alignment::Left,
        }
    }

    /// Column deriving its value with a function
    pub fn computed(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: ValueFn,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: ColumnAccessor::Computed(accessor),
            transform: None,
            sortable: false,
            width: None,
            align: Alignment::Left,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn with_transform(mut self, transform: CellTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Extract this column's value from a row (Null when absent)
    pub fn cell_value(&self, row: &Value) -> Value {
        match &self.accessor {
            ColumnAccessor::Field(name) => row.get(name).cloned().unwrap_or(Value::Null),
            ColumnAccessor::Computed(f) => f(row),
        }
    }

    /// Display text for a cell, applying the transform when present
    pub fn display_value(&self, row: &Value) -> String {
        let value = self.cell_value(row);
        match &self.transform {
            Some(transform) => transform(&value),
            None => match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                other => other.to_string(),
            },
        }
    }
}

/// How rows are keyed across renders
///
/// The default reads the row's "id" property. When neither the spec nor
/// the row yields a usable value the row index stands in, which is
/// stable for the lifetime of one data set.
#[derive(Clone, Default)]
pub enum KeySpec {
    /// Fall back to the row's "id" property
    #[default]
    IdField,
    /// Read a named property of the row object
    Field(String),
    /// Derive the key with a caller-supplied function
    Computed(KeyFn),
}

impl fmt::Debug for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySpec::IdField => f.write_str("IdField"),
            KeySpec::Field(name) => f.debug_tuple("Field").field(name).finish(),
            KeySpec::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl KeySpec {
    /// Resolve the key for one row
    pub fn row_key(&self, row: &Value, index: usize) -> RowKey {
        let raw = match self {
            KeySpec::IdField => row.get("id"),
            KeySpec::Field(name) => row.get(name),
            KeySpec::Computed(f) => return f(row),
        };

        match raw {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => {
                tracing::debug!("Row {} has no usable key, falling back to index", index);
                index.to_string()
            }
        }
    }
}
