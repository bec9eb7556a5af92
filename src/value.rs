use std::fmt::{self, Display};

/// A dynamically typed scalar moving between the caller and the backend.
///
/// Each variant carries an `Option` so a NULL can keep its column type, the
/// plain [`Value::Null`] is what rows decode untyped NULLs into.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Integer(Option<i64>),
    Float(Option<f64>),
    Varchar(Option<String>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(
            self,
            Value::Null
                | Value::Boolean(None)
                | Value::Integer(None)
                | Value::Float(None)
                | Value::Varchar(None)
        )
    }

    /// PHP-style emptiness: NULL, `false`, `0`, `0.0` and the blank string
    /// all count as empty. This is the notion the [`crate::Entity`] facade
    /// uses to validate required data and ids.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Boolean(Some(v)) => !v,
            Value::Integer(Some(v)) => *v == 0,
            Value::Float(Some(v)) => *v == 0.0,
            Value::Varchar(Some(v)) => v.is_empty(),
            _ => true,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => *v,
            Value::Integer(v) => v.map(|v| v != 0),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => *v,
            Value::Boolean(v) => v.map(i64::from),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => *v,
            Value::Integer(v) => v.map(|v| v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Varchar(v) => v.as_deref(),
            _ => None,
        }
    }
}

/// Renders a SQL-ish literal for diagnostics. Never used to assemble
/// statements, values reach the backend as bound parameters only.
impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            v if v.is_null() => f.write_str("NULL"),
            Value::Boolean(Some(v)) => f.write_str(if *v { "TRUE" } else { "FALSE" }),
            Value::Integer(Some(v)) => write!(f, "{}", v),
            Value::Float(Some(v)) => write!(f, "{}", v),
            Value::Varchar(Some(v)) => write!(f, "'{}'", v.replace('\'', "''")),
            _ => unreachable!(),
        }
    }
}

macro_rules! value_from_integer {
    ($($t:ty),+) => {$(
        impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Value::Integer(Some(value as i64))
            }
        }
    )+};
}
value_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(Some(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(Some(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(Some(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Varchar(Some(value.to_owned()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Varchar(Some(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
