use crate::{
    Config, Connection, Driver, Error, Executor, FieldMap, Result, Row, RowLabeled, RowNames,
    RowsAffected, SqlWriter, Statement, TableRef, Value,
};
use crate::sql_writer::{separated_by, write_assignment};
use rusqlite::types::{ToSqlOutput, ValueRef};

/// Embedded SQLite backend over `rusqlite`.
///
/// The `database` setting is the file path (or `:memory:`); `host`, `user`
/// and `password` are still required by the configuration contract even
/// though the embedded engine has no use for them.
pub struct SqliteDriver;

impl Driver for SqliteDriver {
    type Connection = SqliteConnection;

    fn connect(config: &Config) -> Result<SqliteConnection> {
        config.validate()?;
        let database = config.required("database")?;
        let connection = if database == ":memory:" {
            rusqlite::Connection::open_in_memory()
        } else {
            rusqlite::Connection::open(database)
        }
        .map_err(|e| Error::Connection(Box::new(e)))?;
        connection
            .busy_timeout(Config::CONNECT_TIMEOUT)
            .map_err(|e| Error::Connection(Box::new(e)))?;
        Ok(SqliteConnection { connection })
    }
}

pub struct SqliteConnection {
    connection: rusqlite::Connection,
}

impl Executor for SqliteConnection {
    type Writer = SqliteSqlWriter;

    fn sql_writer(&self) -> SqliteSqlWriter {
        SqliteSqlWriter::new()
    }

    fn execute(&mut self, statement: &Statement) -> Result<RowsAffected> {
        log::debug!("{}", statement);
        let mut prepared = self.connection.prepare(&statement.sql).map_err(|e| {
            log::error!("{:#}", e);
            Error::from(e)
        })?;
        bind_params(&mut prepared, &statement.params)?;
        let rows_affected = prepared.raw_execute()? as u64;
        Ok(RowsAffected {
            rows_affected,
            last_insert_id: Some(self.connection.last_insert_rowid()),
        })
    }

    fn fetch(&mut self, statement: &Statement) -> Result<Vec<RowLabeled>> {
        log::debug!("{}", statement);
        let mut prepared = self.connection.prepare(&statement.sql).map_err(|e| {
            log::error!("{:#}", e);
            Error::from(e)
        })?;
        bind_params(&mut prepared, &statement.params)?;
        let labels: RowNames = prepared
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>()
            .into();
        let mut rows = prepared.raw_query();
        let mut result = Vec::new();
        while let Some(row) = rows.next()? {
            let values: Row = (0..labels.len())
                .map(|i| Ok(decode_value(row.get_ref(i)?)))
                .collect::<Result<_>>()?;
            result.push(RowLabeled::new(labels.clone(), values));
        }
        Ok(result)
    }
}

impl Connection for SqliteConnection {
    fn execute_sql(&mut self, sql: &str) -> Result<u64> {
        log::debug!("{}", sql);
        Ok(self.connection.execute(sql, [])? as u64)
    }

    fn last_insert_id(&mut self) -> Result<i64> {
        Ok(self.connection.last_insert_rowid())
    }
}

fn bind_params(prepared: &mut rusqlite::Statement<'_>, params: &FieldMap) -> Result<()> {
    for (name, value) in params.iter() {
        let placeholder = format!(":{}", name);
        let Some(index) = prepared.parameter_index(&placeholder)? else {
            return Err(Error::backend(format!(
                "statement has no parameter `{}`",
                placeholder
            )));
        };
        prepared.raw_bind_parameter(index, value)?;
    }
    Ok(())
}

fn decode_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::Integer(Some(v)),
        ValueRef::Real(v) => Value::Float(Some(v)),
        ValueRef::Text(v) => Value::Varchar(Some(String::from_utf8_lossy(v).into_owned())),
        ValueRef::Blob(v) => {
            log::warn!("decoding a {}-byte blob column as text", v.len());
            Value::Varchar(Some(String::from_utf8_lossy(v).into_owned()))
        }
    }
}

impl rusqlite::ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Boolean(Some(v)) => ToSqlOutput::Owned((*v).into()),
            Value::Integer(Some(v)) => ToSqlOutput::Owned((*v).into()),
            Value::Float(Some(v)) => ToSqlOutput::Owned((*v).into()),
            Value::Varchar(Some(v)) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            _ => ToSqlOutput::Owned(rusqlite::types::Value::Null),
        })
    }
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Error::Backend {
            message: e.to_string(),
            source: Some(Box::new(e)),
        }
    }
}

/// SQLite spelling of the statements the generic dialect writes differently.
#[derive(Default, Debug, Clone, Copy)]
pub struct SqliteSqlWriter;

impl SqliteSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for SqliteSqlWriter {
    // No USE INDEX hint: SQLite always serves COUNT over the rowid/pk.
    fn write_count(&self, out: &mut String, table: &TableRef) {
        out.push_str("SELECT COUNT(");
        out.push_str(table.primary_key);
        out.push_str(") AS total FROM ");
        out.push_str(table.name);
    }

    // LIMIT on UPDATE/DELETE needs a compile-time flag in SQLite, bound the
    // statement through a primary key subselect instead.
    fn write_update_where<'a>(
        &self,
        out: &mut String,
        table: &TableRef,
        columns: impl Iterator<Item = &'a str>,
        where_sql: &str,
        limit: Option<u32>,
    ) {
        out.push_str("UPDATE ");
        out.push_str(table.name);
        out.push_str(" SET ");
        separated_by(out, columns, write_assignment, ",");
        out.push_str(" WHERE ");
        self.write_limited_condition(out, table, where_sql, limit);
    }

    fn write_delete_where(
        &self,
        out: &mut String,
        table: &TableRef,
        where_sql: &str,
        limit: Option<u32>,
    ) {
        out.push_str("DELETE FROM ");
        out.push_str(table.name);
        out.push_str(" WHERE ");
        self.write_limited_condition(out, table, where_sql, limit);
    }

    fn columns_statement(&self, table: &TableRef) -> (String, &'static str) {
        (format!("PRAGMA table_info({})", table.name), "name")
    }

    fn begin_statement(&self) -> &'static str {
        "BEGIN"
    }
}

impl SqliteSqlWriter {
    fn write_limited_condition(
        &self,
        out: &mut String,
        table: &TableRef,
        where_sql: &str,
        limit: Option<u32>,
    ) {
        let Some(limit) = limit else {
            out.push_str(where_sql);
            return;
        };
        out.push_str(table.primary_key);
        out.push_str(" IN (SELECT ");
        out.push_str(table.primary_key);
        out.push_str(" FROM ");
        out.push_str(table.name);
        out.push_str(" WHERE ");
        out.push_str(where_sql);
        out.push_str(" LIMIT ");
        let mut buffer = itoa::Buffer::new();
        out.push_str(buffer.format(limit));
        out.push(')');
    }
}
