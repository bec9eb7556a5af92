//! Vat: the smallest Rust record layer.
//!
//! Vat maps one table (name plus primary key column) onto generic records and
//! turns associative data into parameterized SQL. It is not a query builder
//! DSL, not a relationship-mapping ORM and not a connection pool: the layers
//! are a [`ClauseBuilder`] that assembles boolean expressions from column to
//! value mappings, a [`Gateway`] that exposes generic CRUD and filtered
//! queries against one table, an [`Entity`] facade bound to a concrete type's
//! [`TableBinding`], and a [`ConnectionManager`] owning one lazily created
//! backend connection and at most one in-flight [`Transaction`].
//!
//! # Trust boundary
//!
//! Table and column identifiers come from the entity type and are spliced
//! into SQL verbatim: they are trusted. Every *value* always travels as a
//! named bound parameter. The raw fragment paths ([`Gateway::find_where`],
//! [`Gateway::update_where`], [`Gateway::delete_where`], [`Condition::Raw`])
//! interpolate the given condition text as-is and must never carry untrusted
//! input.

mod clause;
mod connection;
mod driver;
mod entity;
mod error;
mod executor;
mod field_map;
mod gateway;
mod query;
mod sql_writer;
mod sqlite;
mod transaction;
mod value;

pub use clause::*;
pub use connection::*;
pub use driver::*;
pub use entity::*;
pub use error::*;
pub use executor::*;
pub use field_map::*;
pub use gateway::*;
pub use query::*;
pub use sql_writer::*;
pub use sqlite::*;
pub use transaction::*;
pub use value::*;

pub type Result<T> = std::result::Result<T, Error>;
