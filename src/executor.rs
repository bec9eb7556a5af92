use crate::{Result, RowLabeled, RowsAffected, SqlWriter, Statement, TableRef, Value};

/// The prepared-statement execute/fetch capability a backend provides.
///
/// Operations are synchronous and blocking: each call waits for the backend
/// round-trip to complete before returning.
pub trait Executor {
    type Writer: SqlWriter;

    /// The writer producing this backend's SQL dialect.
    fn sql_writer(&self) -> Self::Writer;

    /// Runs a statement that returns no rows and reports the modify effect.
    fn execute(&mut self, statement: &Statement) -> Result<RowsAffected>;

    /// Runs a statement and returns all matching rows.
    fn fetch(&mut self, statement: &Statement) -> Result<Vec<RowLabeled>>;

    /// Runs a statement and returns the first matching row, if any.
    fn fetch_one(&mut self, statement: &Statement) -> Result<Option<RowLabeled>> {
        Ok(self.fetch(statement)?.into_iter().next())
    }
}

/// A live backend connection: an [`Executor`] plus the connection-scoped
/// capabilities (last insert id, raw statements, schema introspection).
pub trait Connection: Executor {
    /// Executes pre-built SQL without binding parameters and returns the
    /// affected row count. Used for transaction control and DDL.
    fn execute_sql(&mut self, sql: &str) -> Result<u64>;

    /// The backend-assigned identifier of the most recent insert.
    fn last_insert_id(&mut self) -> Result<i64>;

    /// The ordered column names of `table`.
    ///
    /// Backend failures degrade to a warning and an empty list rather than
    /// aborting the caller.
    fn column_names(&mut self, table: &TableRef) -> Vec<String> {
        let (sql, label) = self.sql_writer().columns_statement(table);
        match self.fetch(&Statement::raw(sql)) {
            Ok(rows) => rows
                .iter()
                .filter_map(|row| row.get_column(label).and_then(Value::as_str))
                .map(str::to_owned)
                .collect(),
            Err(e) => {
                log::warn!("could not read the columns of `{}`: {:#}", table.name, e);
                Vec::new()
            }
        }
    }
}
