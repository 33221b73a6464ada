// src/record.rs

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

use crate::error::{Result, ScrapeError};

/// One output cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Date(NaiveDate),
    /// Explicit "no value" marker; serialized as `null`.
    Missing,
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl From<Option<String>> for Value {
    fn from(cell: Option<String>) -> Self {
        cell.map_or(Value::Missing, Value::Text)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Missing => Ok(()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Text(s) => serializer.serialize_str(s),
            Value::Date(d) => serializer.collect_str(&d.format("%Y-%m-%d")),
            Value::Missing => serializer.serialize_none(),
        }
    }
}

/// Normalized output: a fixed column list and rows of exactly that width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl RecordSet {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (`row`, column `name`).
    pub fn get(&self, row: usize, name: &str) -> Option<&Value> {
        let col = self.column_index(name)?;
        self.rows.get(row).map(|r| &r[col])
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let col = self.column_index(name)?;
        Some(self.rows.iter().map(|r| &r[col]).collect())
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(move |values| Record {
            columns: &self.columns,
            values,
        })
    }

    /// Stack several sets vertically. Columns are the union in first-seen
    /// order; cells a set does not have become [`Value::Missing`].
    pub fn concat<I: IntoIterator<Item = RecordSet>>(sets: I) -> RecordSet {
        let mut columns: Vec<String> = Vec::new();
        let sets: Vec<RecordSet> = sets.into_iter().collect();
        for set in &sets {
            for c in &set.columns {
                if !columns.contains(c) {
                    columns.push(c.clone());
                }
            }
        }

        let mut rows = Vec::with_capacity(sets.iter().map(RecordSet::len).sum());
        for set in sets {
            let mapping: Vec<Option<usize>> =
                columns.iter().map(|c| set.column_index(c)).collect();
            for row in set.rows {
                rows.push(
                    mapping
                        .iter()
                        .map(|m| m.map_or(Value::Missing, |i| row[i].clone()))
                        .collect(),
                );
            }
        }
        RecordSet { columns, rows }
    }
}

/// Borrowed view of one row, serialized as an ordered map.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    columns: &'a [String],
    values: &'a [Value],
}

impl<'a> Record<'a> {
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        let i = self.columns.iter().position(|c| c == name)?;
        self.values.get(i)
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (k, v) in self.columns.iter().zip(self.values) {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Accumulates rows and checks their width; materialized once by `finish`.
#[derive(Debug)]
pub struct RecordSetBuilder {
    view: String,
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl RecordSetBuilder {
    pub fn new(view: impl ToString, columns: Vec<String>) -> Self {
        Self {
            view: view.to_string(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn push(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(ScrapeError::mismatch(
                &self.view,
                format!(
                    "row {} has {} cells, schema has {} columns",
                    self.rows.len(),
                    row.len(),
                    self.columns.len()
                ),
            ));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn finish(self) -> RecordSet {
        RecordSet {
            columns: self.columns,
            rows: self.rows,
        }
    }
}
