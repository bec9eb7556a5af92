use crate::{Connection, Driver, Executor, Result, RowLabeled, RowsAffected, SqlWriter, Statement};

/// An in-flight transaction on the shared connection.
///
/// Lifecycle is strictly begin, zero or more statements, then [`commit`] or
/// [`rollback`]; both consume the guard, so finalizing a transaction twice
/// or without one active is unrepresentable. A guard dropped unresolved
/// rolls back.
///
/// [`commit`]: Transaction::commit
/// [`rollback`]: Transaction::rollback
pub struct Transaction<'m, D: Driver> {
    connection: &'m mut D::Connection,
    open: bool,
}

impl<'m, D: Driver> Transaction<'m, D> {
    pub(crate) fn begin(connection: &'m mut D::Connection) -> Result<Self> {
        let sql = connection.sql_writer().begin_statement();
        connection.execute_sql(sql)?;
        Ok(Self {
            connection,
            open: true,
        })
    }

    pub fn commit(mut self) -> Result<()> {
        let sql = self.connection.sql_writer().commit_statement();
        self.connection.execute_sql(sql)?;
        self.open = false;
        Ok(())
    }

    pub fn rollback(mut self) -> Result<()> {
        let sql = self.connection.sql_writer().rollback_statement();
        self.connection.execute_sql(sql)?;
        self.open = false;
        Ok(())
    }
}

impl<D: Driver> Executor for Transaction<'_, D> {
    type Writer = <D::Connection as Executor>::Writer;

    fn sql_writer(&self) -> Self::Writer {
        self.connection.sql_writer()
    }

    fn execute(&mut self, statement: &Statement) -> Result<RowsAffected> {
        self.connection.execute(statement)
    }

    fn fetch(&mut self, statement: &Statement) -> Result<Vec<RowLabeled>> {
        self.connection.fetch(statement)
    }
}

impl<D: Driver> Connection for Transaction<'_, D> {
    fn execute_sql(&mut self, sql: &str) -> Result<u64> {
        self.connection.execute_sql(sql)
    }

    fn last_insert_id(&mut self) -> Result<i64> {
        self.connection.last_insert_id()
    }
}

impl<D: Driver> Drop for Transaction<'_, D> {
    fn drop(&mut self) {
        if self.open {
            log::warn!("transaction dropped without commit, rolling back");
            let sql = self.connection.sql_writer().rollback_statement();
            if let Err(e) = self.connection.execute_sql(sql) {
                log::error!("implicit rollback failed: {:#}", e);
            }
        }
    }
}
