use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error kinds surfaced by this crate.
///
/// Two outcomes deliberately are *not* errors: a read that matches zero rows
/// and a write that did not go through are reported as `None` sentinels by
/// the [`crate::Gateway`] operations, so callers must branch on them
/// explicitly instead of catching.
#[derive(Debug, Error)]
pub enum Error {
    /// A required connection setting is absent.
    #[error("connection setting `{0}` is not set")]
    Configuration(&'static str),
    /// The backend could not be reached, wraps the driver's native error.
    #[error("could not connect to the database")]
    Connection(#[source] BoxError),
    /// The caller passed empty required data or id to a facade mutation.
    #[error("{0}")]
    Validation(&'static str),
    /// A statement failed to prepare, bind or execute.
    #[error("{message}")]
    Backend {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl Error {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
            source: None,
        }
    }
}
