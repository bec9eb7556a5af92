use crate::{
    Clause, ClauseBuilder, Condition, Connection, Connector, FieldMap, Result, RowLabeled,
    SqlWriter, Statement, Value,
};

/// The table metadata a concrete entity type supplies: table name plus
/// primary key column. Both are trusted identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRef {
    pub name: &'static str,
    pub primary_key: &'static str,
}

impl TableRef {
    pub const fn new(name: &'static str, primary_key: &'static str) -> Self {
        Self { name, primary_key }
    }
}

/// The generic CRUD and filtered-query executor bound to one table.
///
/// A gateway is constructed once per entity type and reused; it holds no
/// connection, every operation takes the [`Connection`] to run against. Two
/// result conventions apply throughout:
///
/// * reads return `None` when zero rows match (the empty-result sentinel,
///   distinct from an error),
/// * `insert` returns `None` when the execution did not succeed (the
///   failure sentinel), while backend errors on reads propagate.
///
/// The `*_where` operations splice their `where_sql` fragment verbatim: it
/// is caller-trusted and must never carry untrusted input. Use [`find_by`]
/// with a [`FieldMap`] condition for fully parameterized filtering.
///
/// [`find_by`]: Gateway::find_by
#[derive(Debug, Clone, Copy)]
pub struct Gateway {
    table: TableRef,
}

impl Gateway {
    pub const fn new(table: TableRef) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }

    /// Returns the record whose primary key equals `id`.
    pub fn find(
        &self,
        connection: &mut impl Connection,
        id: impl Into<Value>,
    ) -> Result<Option<FieldMap>> {
        let mut sql = String::with_capacity(64);
        connection.sql_writer().write_select_pk(&mut sql, &self.table);
        let mut params = FieldMap::with_capacity(1);
        params.insert("id", id);
        let statement = Statement::new(sql, params);
        Ok(connection.fetch_one(&statement)?.map(FieldMap::from))
    }

    /// Returns every record of the table, primary key descending unless an
    /// `order` fragment is given (e.g. `name ASC`).
    pub fn find_all(
        &self,
        connection: &mut impl Connection,
        order: Option<&str>,
    ) -> Result<Option<Vec<FieldMap>>> {
        let mut sql = String::with_capacity(64);
        connection
            .sql_writer()
            .write_select_all(&mut sql, &self.table, order);
        let rows = connection.fetch(&Statement::raw(sql))?;
        Ok(decode_rows(rows))
    }

    /// Returns the records matching the caller-trusted `where_sql` fragment.
    ///
    /// This path does not parameterize the fragment: pre-sanitize it.
    pub fn find_where(
        &self,
        connection: &mut impl Connection,
        where_sql: &str,
        order: Option<&str>,
        limit: Option<u32>,
        offset: Option<u64>,
    ) -> Result<Option<Vec<FieldMap>>> {
        let mut sql = String::with_capacity(96);
        connection
            .sql_writer()
            .write_select_where(&mut sql, &self.table, where_sql, order, limit, offset);
        let rows = connection.fetch(&Statement::raw(sql))?;
        Ok(decode_rows(rows))
    }

    /// Returns the records matching a structured condition, every value
    /// bound as a parameter.
    pub fn find_by(
        &self,
        connection: &mut impl Connection,
        condition: impl Into<Condition>,
        connector: Connector,
        order: Option<&str>,
        limit: Option<u32>,
        offset: Option<u64>,
    ) -> Result<Option<Vec<FieldMap>>> {
        let Clause { text, params } = ClauseBuilder::new(connector).build(condition);
        let mut sql = String::with_capacity(96);
        connection
            .sql_writer()
            .write_select_where(&mut sql, &self.table, &text, order, limit, offset);
        let rows = connection.fetch(&Statement::new(sql, params))?;
        Ok(decode_rows(rows))
    }

    /// Returns the most recent record by descending primary key.
    pub fn last(&self, connection: &mut impl Connection) -> Result<Option<FieldMap>> {
        let mut sql = String::with_capacity(64);
        connection
            .sql_writer()
            .write_select_last(&mut sql, &self.table);
        Ok(connection.fetch_one(&Statement::raw(sql))?.map(FieldMap::from))
    }

    /// Counts the records of the table over the primary key.
    pub fn total(&self, connection: &mut impl Connection) -> Result<u64> {
        let mut sql = String::with_capacity(64);
        connection.sql_writer().write_count(&mut sql, &self.table);
        let count = connection
            .fetch_one(&Statement::raw(sql))?
            .and_then(|row| row.get_column("total").and_then(Value::as_i64))
            .unwrap_or(0);
        Ok(count.max(0) as u64)
    }

    /// Inserts `data` and returns the newly assigned primary key.
    ///
    /// An execution failure is swallowed into the `None` sentinel (logged),
    /// it does not raise.
    pub fn insert(
        &self,
        connection: &mut impl Connection,
        data: FieldMap,
    ) -> Result<Option<i64>> {
        let mut sql = String::with_capacity(96);
        connection
            .sql_writer()
            .write_insert(&mut sql, &self.table, data.keys());
        let statement = Statement::new(sql, data);
        match connection.execute(&statement) {
            Ok(result) => match result.last_insert_id {
                Some(id) => Ok(Some(id)),
                None => connection.last_insert_id().map(Some),
            },
            Err(e) => {
                log::warn!("insert into `{}` failed: {:#}", self.table.name, e);
                Ok(None)
            }
        }
    }

    /// Updates the record whose primary key equals `id` with the columns in
    /// `data`; unspecified columns keep their values.
    pub fn update(
        &self,
        connection: &mut impl Connection,
        data: FieldMap,
        id: impl Into<Value>,
    ) -> Result<bool> {
        let mut sql = String::with_capacity(96);
        connection
            .sql_writer()
            .write_update(&mut sql, &self.table, data.keys());
        let mut params = data;
        params.insert("id", id);
        connection.execute(&Statement::new(sql, params))?;
        Ok(true)
    }

    /// Updates the records matching the caller-trusted `where_sql` fragment
    /// and returns the affected row count. Only the SET values are bound.
    pub fn update_where(
        &self,
        connection: &mut impl Connection,
        data: FieldMap,
        where_sql: &str,
        limit: Option<u32>,
    ) -> Result<u64> {
        let mut sql = String::with_capacity(96);
        connection
            .sql_writer()
            .write_update_where(&mut sql, &self.table, data.keys(), where_sql, limit);
        let statement = Statement::new(sql, data);
        Ok(connection.execute(&statement)?.rows_affected)
    }

    /// Deletes the record whose primary key equals `id`.
    pub fn delete(&self, connection: &mut impl Connection, id: impl Into<Value>) -> Result<bool> {
        let mut sql = String::with_capacity(64);
        connection.sql_writer().write_delete(&mut sql, &self.table);
        let mut params = FieldMap::with_capacity(1);
        params.insert("id", id);
        connection.execute(&Statement::new(sql, params))?;
        Ok(true)
    }

    /// Deletes the records matching the caller-trusted `where_sql` fragment
    /// and returns the affected row count.
    ///
    /// A blank fragment returns the `None` sentinel and deletes nothing: an
    /// unconditioned delete is refused. The guard limit defaults to 1.
    pub fn delete_where(
        &self,
        connection: &mut impl Connection,
        where_sql: &str,
        limit: Option<u32>,
    ) -> Result<Option<u64>> {
        if where_sql.trim().is_empty() {
            log::warn!(
                "refusing to delete from `{}` without a condition",
                self.table.name
            );
            return Ok(None);
        }
        let mut sql = String::with_capacity(64);
        connection.sql_writer().write_delete_where(
            &mut sql,
            &self.table,
            where_sql,
            limit.or(Some(1)),
        );
        let result = connection.execute(&Statement::raw(sql))?;
        Ok(Some(result.rows_affected))
    }

    /// The ordered column names of the table. Introspection failures degrade
    /// to a warning and an empty list.
    pub fn column_names(&self, connection: &mut impl Connection) -> Vec<String> {
        connection.column_names(&self.table)
    }
}

fn decode_rows(rows: Vec<RowLabeled>) -> Option<Vec<FieldMap>> {
    if rows.is_empty() {
        return None;
    }
    Some(rows.into_iter().map(FieldMap::from).collect())
}
