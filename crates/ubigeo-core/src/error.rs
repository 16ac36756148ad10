// crates/ubigeo-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while validating input, loading resources or resolving
/// ubigeo lookups.
///
/// The variants split into three families:
/// - input validation (`Type`, `Format`, `Range`, `Value`, `InvalidLevel`,
///   `InvalidKey`, `InvalidOption`): always surfaced, never coerced;
/// - lookup misses (`NotFound`): the only family whose visibility the
///   [`OnError`](crate::normalize::OnError) policy controls, and only for
///   name validation;
/// - resource failures (`Resource`, `Io`, `Json`, `Bincode`): fatal for the
///   load attempt that raised them.
#[derive(Debug, Error)]
pub enum UbigeoError {
    #[error("unsupported input type: {0}")]
    Type(String),

    #[error("invalid code format: {0}")]
    Format(String),

    #[error("code out of range: {0}")]
    Range(String),

    #[error("invalid value: {0}")]
    Value(String),

    #[error("invalid level '{0}': expected \"departamentos\", \"provincias\" or \"distritos\"")]
    InvalidLevel(String),

    #[error("invalid metadata key '{0}': expected \"altitud\", \"capital\", \"latitud\", \"longitud\" or \"superficie\"")]
    InvalidKey(String),

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("resource '{name}' not found at {}", path.display())]
    Resource { name: &'static str, path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "cache")]
    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),
}

impl UbigeoError {
    /// `true` for lookup misses, the errors an `on_error` policy may absorb.
    pub fn is_not_found(&self) -> bool {
        matches!(self, UbigeoError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, UbigeoError>;
