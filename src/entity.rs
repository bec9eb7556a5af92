use crate::{Connection, Error, FieldMap, Gateway, Result, TableRef, Value};

/// The static capability an entity type provides: which table it maps to
/// and which column is the primary key.
pub trait TableBinding {
    fn table_name() -> &'static str;
    fn primary_key() -> &'static str;

    fn table_ref() -> TableRef {
        TableRef::new(Self::table_name(), Self::primary_key())
    }

    /// The gateway bound to this type's table metadata.
    fn gateway() -> Gateway {
        Gateway::new(Self::table_ref())
    }
}

/// Typed convenience surface over [`Gateway`], blanket-implemented for every
/// [`TableBinding`]. Mutations validate their inputs up front and fail with
/// [`Error::Validation`] before touching the backend.
pub trait Entity: TableBinding {
    /// Alias for [`Gateway::find`].
    fn get(connection: &mut impl Connection, id: impl Into<Value>) -> Result<Option<FieldMap>> {
        Self::gateway().find(connection, id)
    }

    /// Alias for [`Gateway::find_all`].
    fn get_all(
        connection: &mut impl Connection,
        order: Option<&str>,
    ) -> Result<Option<Vec<FieldMap>>> {
        Self::gateway().find_all(connection, order)
    }

    /// Inserts a new record and returns its primary key.
    fn create(connection: &mut impl Connection, data: FieldMap) -> Result<Option<i64>> {
        if data.is_empty() {
            return Err(Error::Validation("uninformed data"));
        }
        Self::gateway().insert(connection, data)
    }

    /// Updates the record identified by `id`.
    fn update_record(
        connection: &mut impl Connection,
        data: FieldMap,
        id: impl Into<Value>,
    ) -> Result<bool> {
        if data.is_empty() {
            return Err(Error::Validation("uninformed data"));
        }
        let id = id.into();
        if id.is_empty() {
            return Err(Error::Validation("id not given"));
        }
        Self::gateway().update(connection, data, id)
    }

    /// Updates the records matching the caller-trusted `where_sql` fragment.
    fn update_where(
        connection: &mut impl Connection,
        data: FieldMap,
        where_sql: &str,
        limit: Option<u32>,
    ) -> Result<u64> {
        if data.is_empty() {
            return Err(Error::Validation("uninformed data"));
        }
        Self::gateway().update_where(connection, data, where_sql, limit)
    }

    /// Deletes the record identified by `id`.
    fn delete_record(connection: &mut impl Connection, id: impl Into<Value>) -> Result<bool> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::Validation("id not given"));
        }
        Self::gateway().delete(connection, id)
    }
}

impl<T: TableBinding> Entity for T {}
