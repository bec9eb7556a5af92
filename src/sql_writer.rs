use crate::TableRef;

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}

/// Assembles the SQL text of every statement the gateway runs.
///
/// The provided methods emit the minimal MySQL-flavored dialect; a driver
/// overrides the few statements its backend spells differently. Identifiers
/// (table, primary key, column names) are trusted metadata and are spliced
/// verbatim, values are always referenced through `:name` placeholders.
pub trait SqlWriter {
    fn write_select_pk(&self, out: &mut String, table: &TableRef) {
        out.push_str("SELECT * FROM ");
        out.push_str(table.name);
        out.push_str(" WHERE ");
        out.push_str(table.primary_key);
        out.push_str(" = :id");
    }

    fn write_select_all(&self, out: &mut String, table: &TableRef, order: Option<&str>) {
        out.push_str("SELECT * FROM ");
        out.push_str(table.name);
        out.push_str(" ORDER BY ");
        self.write_order(out, table, order);
    }

    /// `where_sql` is a caller-trusted fragment, spliced verbatim after the
    /// `1=1` anchor. Blank fragments are skipped.
    fn write_select_where(
        &self,
        out: &mut String,
        table: &TableRef,
        where_sql: &str,
        order: Option<&str>,
        limit: Option<u32>,
        offset: Option<u64>,
    ) {
        out.push_str("SELECT * FROM ");
        out.push_str(table.name);
        out.push_str(" WHERE 1=1");
        if !where_sql.trim().is_empty() {
            out.push_str(" AND ");
            out.push_str(where_sql);
        }
        out.push_str(" ORDER BY ");
        self.write_order(out, table, order);
        if let Some(limit) = limit {
            out.push_str(" LIMIT ");
            write_integer!(out, limit);
        }
        if let Some(offset) = offset {
            out.push_str(" OFFSET ");
            write_integer!(out, offset);
        }
    }

    fn write_select_last(&self, out: &mut String, table: &TableRef) {
        out.push_str("SELECT * FROM ");
        out.push_str(table.name);
        out.push_str(" ORDER BY ");
        out.push_str(table.primary_key);
        out.push_str(" DESC LIMIT 1");
    }

    fn write_count(&self, out: &mut String, table: &TableRef) {
        out.push_str("SELECT COUNT(");
        out.push_str(table.primary_key);
        out.push_str(") AS total FROM ");
        out.push_str(table.name);
        out.push_str(" USE INDEX(PRIMARY)");
    }

    fn write_insert<'a>(
        &self,
        out: &mut String,
        table: &TableRef,
        columns: impl Iterator<Item = &'a str> + Clone,
    ) {
        out.push_str("INSERT INTO ");
        out.push_str(table.name);
        out.push_str(" (");
        separated_by(out, columns.clone(), |out, column| out.push_str(column), ",");
        out.push_str(") VALUES (");
        separated_by(
            out,
            columns,
            |out, column| {
                out.push(':');
                out.push_str(column);
            },
            ",",
        );
        out.push(')');
    }

    fn write_update<'a>(
        &self,
        out: &mut String,
        table: &TableRef,
        columns: impl Iterator<Item = &'a str>,
    ) {
        out.push_str("UPDATE ");
        out.push_str(table.name);
        out.push_str(" SET ");
        separated_by(out, columns, write_assignment, ", ");
        out.push_str(" WHERE ");
        out.push_str(table.primary_key);
        out.push_str(" = :id");
    }

    /// `where_sql` is a caller-trusted fragment.
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
        out.push_str(where_sql);
        if let Some(limit) = limit {
            out.push_str(" LIMIT ");
            write_integer!(out, limit);
        }
    }

    fn write_delete(&self, out: &mut String, table: &TableRef) {
        out.push_str("DELETE FROM ");
        out.push_str(table.name);
        out.push_str(" WHERE ");
        out.push_str(table.primary_key);
        out.push_str(" = :id");
    }

    /// `where_sql` is a caller-trusted fragment.
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
        out.push_str(where_sql);
        if let Some(limit) = limit {
            out.push_str(" LIMIT ");
            write_integer!(out, limit);
        }
    }

    /// The introspection statement listing the table's columns and the label
    /// of the result column holding each name.
    fn columns_statement(&self, table: &TableRef) -> (String, &'static str) {
        (format!("SHOW COLUMNS FROM {}", table.name), "Field")
    }

    fn begin_statement(&self) -> &'static str {
        "START TRANSACTION"
    }

    fn commit_statement(&self) -> &'static str {
        "COMMIT"
    }

    fn rollback_statement(&self) -> &'static str {
        "ROLLBACK"
    }

    /// Default ordering is the primary key descending.
    fn write_order(&self, out: &mut String, table: &TableRef, order: Option<&str>) {
        match order {
            Some(order) if !order.trim().is_empty() => out.push_str(order),
            _ => {
                out.push_str(table.primary_key);
                out.push_str(" DESC");
            }
        }
    }
}

/// The MySQL-flavored dialect with no overrides.
#[derive(Default, Debug, Clone, Copy)]
pub struct GenericSqlWriter;

impl GenericSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for GenericSqlWriter {}

pub(crate) fn write_assignment(out: &mut String, column: &str) {
    out.push_str(column);
    out.push_str(" = :");
    out.push_str(column);
}

pub(crate) fn separated_by<T, F>(out: &mut String, values: impl IntoIterator<Item = T>, mut f: F, separator: &str)
where
    F: FnMut(&mut String, T),
{
    let mut len = out.len();
    for v in values {
        if out.len() > len {
            out.push_str(separator);
        }
        len = out.len();
        f(out, v);
    }
}
