use crate::FieldMap;
use std::fmt::{self, Display};

/// Logical connective joining the terms of a built clause.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    #[default]
    And,
    Or,
}

impl Connector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

impl Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter accepted wherever a condition can be passed.
///
/// `Raw` is a trusted SQL fragment used verbatim with no bound parameters:
/// it must never carry untrusted input. `Fields` is the safe path, each
/// column to value pair becomes a `column = :param` term with the value
/// bound out-of-band.
#[derive(Debug, Clone)]
pub enum Condition {
    Raw(String),
    Fields(FieldMap),
}

impl Condition {
    pub fn is_blank(&self) -> bool {
        match self {
            Condition::Raw(sql) => sql.trim().is_empty(),
            Condition::Fields(fields) => fields.is_empty(),
        }
    }
}

impl From<&str> for Condition {
    fn from(sql: &str) -> Self {
        Condition::Raw(sql.to_owned())
    }
}

impl From<String> for Condition {
    fn from(sql: String) -> Self {
        Condition::Raw(sql)
    }
}

impl From<FieldMap> for Condition {
    fn from(fields: FieldMap) -> Self {
        Condition::Fields(fields)
    }
}

/// A built boolean expression plus the parameters it binds.
#[derive(Default, Debug, Clone)]
pub struct Clause {
    pub text: String,
    pub params: FieldMap,
}

/// Turns a [`Condition`] into a parameterized boolean expression.
///
/// For the `Fields` branch the parameter name of each term is the column
/// name with `.` stripped, so qualified `table.column` keys still produce a
/// legal bind identifier while the column reference keeps its qualifier.
/// Two qualified columns that only differ by their prefix therefore collide
/// on the same parameter name; the last value wins and a warning is logged.
pub struct ClauseBuilder {
    connector: Connector,
}

impl ClauseBuilder {
    pub fn new(connector: Connector) -> Self {
        Self { connector }
    }

    pub fn build(&self, condition: impl Into<Condition>) -> Clause {
        match condition.into() {
            Condition::Raw(text) => Clause {
                text,
                params: FieldMap::new(),
            },
            Condition::Fields(fields) => {
                let mut text = String::with_capacity(fields.len() * 24);
                let mut params = FieldMap::with_capacity(fields.len());
                for (column, value) in fields {
                    // Blank keys would produce empty terms, filter them out.
                    if column.trim().is_empty() {
                        continue;
                    }
                    let param: String = column.chars().filter(|c| *c != '.').collect();
                    if params.contains_key(&param) {
                        log::warn!(
                            "bind parameter `{}` collides after qualifier stripping, last value wins",
                            param
                        );
                    }
                    if !text.is_empty() {
                        text.push(' ');
                        text.push_str(self.connector.as_str());
                        text.push(' ');
                    }
                    text.push_str(&column);
                    text.push_str(" = :");
                    text.push_str(&param);
                    params.insert(param, value);
                }
                Clause { text, params }
            }
        }
    }
}

impl Default for ClauseBuilder {
    fn default() -> Self {
        Self::new(Connector::And)
    }
}
