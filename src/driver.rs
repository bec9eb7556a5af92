use crate::{Config, Connection, Result};

pub trait Driver {
    type Connection: Connection;

    /// Open one physical connection to the backend described by `config`.
    fn connect(config: &Config) -> Result<Self::Connection>;
}
