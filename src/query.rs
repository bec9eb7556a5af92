use crate::{FieldMap, Value};
use std::{
    fmt::{self, Display},
    sync::Arc,
};

/// A parameterized statement ready to be consumed by an [`crate::Executor`].
///
/// Transient artifact: the SQL text holds `:name` placeholders and `params`
/// carries the corresponding values, bound by the driver out-of-band.
#[derive(Debug, Clone)]
pub struct Statement {
    pub sql: String,
    pub params: FieldMap,
}

impl Statement {
    pub fn new(sql: impl Into<String>, params: FieldMap) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// A statement with no bound parameters.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::new(sql, FieldMap::new())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl From<&str> for Statement {
    fn from(sql: &str) -> Self {
        Statement::raw(sql)
    }
}

impl From<String> for Statement {
    fn from(sql: String) -> Self {
        Statement::raw(sql)
    }
}

/// Shared reference-counted column name list.
pub type RowNames = Arc<[String]>;
/// Owned row value slice matching `RowNames` length.
pub type Row = Box<[Value]>;

/// A result row with its corresponding column labels.
#[derive(Debug, Clone)]
pub struct RowLabeled {
    /// Column names.
    pub labels: RowNames,
    /// Data values (aligned by index with `labels`).
    pub values: Row,
}

impl RowLabeled {
    pub fn new(labels: RowNames, values: Row) -> Self {
        Self { labels, values }
    }
    pub fn names(&self) -> &[String] {
        &self.labels
    }
    pub fn values(&self) -> &[Value] {
        &self.values
    }
    pub fn get_column(&self, name: &str) -> Option<&Value> {
        self.labels
            .iter()
            .position(|v| v == name)
            .map(|i| &self.values[i])
    }
}

impl From<RowLabeled> for FieldMap {
    fn from(row: RowLabeled) -> Self {
        row.labels
            .iter()
            .cloned()
            .zip(row.values.into_iter())
            .collect()
    }
}

/// Metadata about modify operations (INSERT/UPDATE/DELETE).
#[derive(Default, Debug, Clone, Copy)]
pub struct RowsAffected {
    /// Total number of rows impacted.
    pub rows_affected: u64,
    /// Backend-assigned identifier of the most recent insert, when available.
    pub last_insert_id: Option<i64>,
}
