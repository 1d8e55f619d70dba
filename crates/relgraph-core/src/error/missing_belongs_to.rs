use super::Error;

/// A `HasMany` target does not declare which model it belongs to.
#[derive(Debug)]
pub struct MissingBelongsTo {
    model: Box<str>,
    field: Box<str>,
    target: Box<str>,
}

impl MissingBelongsTo {
    /// The model declaring the `HasMany` field.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// The child model missing its `BelongsTo` declaration.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl std::error::Error for MissingBelongsTo {}

impl core::fmt::Display for MissingBelongsTo {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}::{}` is a `HasMany` relation, but `{}` does not declare `BelongsTo`",
            self.model, self.field, self.target
        )
    }
}

impl Error {
    pub fn missing_belongs_to(model: &str, field: &str, target: &str) -> Error {
        Error::from(super::ErrorKind::MissingBelongsTo(MissingBelongsTo {
            model: model.into(),
            field: field.into(),
            target: target.into(),
        }))
    }

    pub fn is_missing_belongs_to(&self) -> bool {
        self.as_missing_belongs_to().is_some()
    }

    pub fn as_missing_belongs_to(&self) -> Option<&MissingBelongsTo> {
        self.find(|kind| match kind {
            super::ErrorKind::MissingBelongsTo(err) => Some(err),
            _ => None,
        })
    }
}
