use super::Error;

/// Two models declare `HasMany`/`BelongsTo` against each other.
#[derive(Debug)]
pub struct CyclicHasMany {
    model: Box<str>,
    field: Box<str>,
    target: Box<str>,
}

impl CyclicHasMany {
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl std::error::Error for CyclicHasMany {}

impl core::fmt::Display for CyclicHasMany {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cyclic has-many relation on field `{}::{}`: `{}` belongs to `{}` and vice versa; \
             use a many-to-many relation instead",
            self.model, self.field, self.target, self.model
        )
    }
}

impl Error {
    pub fn cyclic_has_many(model: &str, field: &str, target: &str) -> Error {
        Error::from(super::ErrorKind::CyclicHasMany(CyclicHasMany {
            model: model.into(),
            field: field.into(),
            target: target.into(),
        }))
    }

    pub fn is_cyclic_has_many(&self) -> bool {
        self.as_cyclic_has_many().is_some()
    }

    pub fn as_cyclic_has_many(&self) -> Option<&CyclicHasMany> {
        self.find(|kind| match kind {
            super::ErrorKind::CyclicHasMany(err) => Some(err),
            _ => None,
        })
    }
}
