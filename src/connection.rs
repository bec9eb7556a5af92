use crate::{Connection, Driver, Error, Result, Statement, Transaction};
use std::time::Duration;

/// Connection settings required before the first connection is made.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: Option<String>,
    pub database: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub charset: String,
}

impl Config {
    /// How long a driver waits while establishing the connection.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Returns the named setting or [`Error::Configuration`] when absent.
    pub fn required(&self, setting: &'static str) -> Result<&str> {
        let value = match setting {
            "host" => &self.host,
            "database" => &self.database,
            "user" => &self.user,
            "password" => &self.password,
            _ => &None,
        };
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(Error::Configuration(setting))
    }

    pub fn validate(&self) -> Result<()> {
        for setting in ["host", "database", "user", "password"] {
            self.required(setting)?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: None,
            database: None,
            user: None,
            password: None,
            charset: "utf8".to_owned(),
        }
    }
}

/// Owns one lazily created backend connection and hands out at most one
/// in-flight [`Transaction`] on it.
///
/// A manager is caller-owned and carries no internal synchronization: create
/// one per concurrent execution context and thread it through calls.
pub struct ConnectionManager<D: Driver> {
    config: Config,
    connection: Option<D::Connection>,
}

impl<D: Driver> ConnectionManager<D> {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            connection: None,
        }
    }

    /// The shared connection, created on first demand.
    pub fn connection(&mut self) -> Result<&mut D::Connection> {
        let connection = match self.connection.take() {
            Some(connection) => connection,
            None => D::connect(&self.config)?,
        };
        Ok(self.connection.insert(connection))
    }

    /// Builds a [`Statement`] for later execution, connecting first so a
    /// missing configuration surfaces here rather than at run time.
    pub fn prepare(&mut self, sql: impl Into<String>) -> Result<Statement> {
        self.connection()?;
        Ok(Statement::raw(sql))
    }

    /// Executes pre-built SQL on the shared connection and returns the
    /// affected row count.
    pub fn execute(&mut self, sql: &str) -> Result<u64> {
        self.connection()?.execute_sql(sql)
    }

    pub fn last_insert_id(&mut self) -> Result<i64> {
        self.connection()?.last_insert_id()
    }

    /// Starts a transaction on the shared connection.
    ///
    /// The guard mutably borrows the manager, so beginning a second
    /// transaction while one is in flight does not compile: the single
    /// transaction slot is enforced statically instead of by convention.
    pub fn begin(&mut self) -> Result<Transaction<'_, D>> {
        Transaction::begin(self.connection()?)
    }
}
