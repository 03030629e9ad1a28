//! Conversions from external infrastructure errors into domain errors.

use ical::parser::ParserError as IcalError;
use serde_json::Error as JsonError;
use std::io::{Error as IoError, ErrorKind};
use toml::de::Error as TomlError;
use tripscope_domain::TripscopeError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TripscopeError);

impl From<InfraError> for TripscopeError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TripscopeError> for InfraError {
    fn from(value: TripscopeError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoTripscopeError {
    fn into_tripscope(self) -> TripscopeError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → TripscopeError */
/* -------------------------------------------------------------------------- */

impl IntoTripscopeError for IoError {
    fn into_tripscope(self) -> TripscopeError {
        match self.kind() {
            ErrorKind::NotFound => TripscopeError::NotFound(self.to_string()),
            ErrorKind::PermissionDenied => {
                TripscopeError::Storage(format!("permission denied: {self}"))
            }
            ErrorKind::InvalidData => TripscopeError::InvalidInput(self.to_string()),
            _ => TripscopeError::Storage(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_tripscope())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → TripscopeError */
/* -------------------------------------------------------------------------- */

impl IntoTripscopeError for JsonError {
    fn into_tripscope(self) -> TripscopeError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Io => TripscopeError::Storage(format!("json io failure: {self}")),
            Category::Syntax | Category::Eof => {
                TripscopeError::Storage(format!("malformed json: {self}"))
            }
            Category::Data => TripscopeError::Storage(format!("unexpected json shape: {self}")),
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_tripscope())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → TripscopeError */
/* -------------------------------------------------------------------------- */

impl IntoTripscopeError for TomlError {
    fn into_tripscope(self) -> TripscopeError {
        TripscopeError::Config(format!("invalid toml: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_tripscope())
    }
}

/* -------------------------------------------------------------------------- */
/* ical::parser::ParserError → TripscopeError */
/* -------------------------------------------------------------------------- */

impl IntoTripscopeError for IcalError {
    fn into_tripscope(self) -> TripscopeError {
        TripscopeError::Feed(format!("malformed calendar: {self}"))
    }
}

impl From<IcalError> for InfraError {
    fn from(value: IcalError) -> Self {
        InfraError(value.into_tripscope())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
