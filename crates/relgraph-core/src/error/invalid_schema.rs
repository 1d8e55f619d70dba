use super::Error;

/// Error when a schema definition is invalid.
///
/// This occurs when:
/// - A field references a model that was not registered with the schema
/// - Two models share an id, or a model declares the same field name twice
/// - A model declares more than one `BelongsTo` target
/// - A relation annotation is placed on a field of the wrong shape
///
/// Relation rules with their own kind (missing `BelongsTo`, cycles, asymmetric
/// many-to-many) are reported through those kinds instead.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an invalid
    /// schema error.
    pub fn is_invalid_schema(&self) -> bool {
        self.find(|kind| match kind {
            super::ErrorKind::InvalidSchema(err) => Some(err),
            _ => None,
        })
        .is_some()
    }
}
