use super::Error;

/// A `ManyToMany` field targets its own model while self-referential
/// many-to-many relations are disabled.
#[derive(Debug)]
pub struct SelfReferentialManyToMany {
    model: Box<str>,
    field: Box<str>,
}

impl SelfReferentialManyToMany {
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl std::error::Error for SelfReferentialManyToMany {}

impl core::fmt::Display for SelfReferentialManyToMany {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}::{}` is a self-referential `ManyToMany` relation; enable \
             `Builder::allow_self_referential_many_to_many` to accept it",
            self.model, self.field
        )
    }
}

impl Error {
    pub fn self_referential_many_to_many(model: &str, field: &str) -> Error {
        Error::from(super::ErrorKind::SelfReferentialManyToMany(
            SelfReferentialManyToMany {
                model: model.into(),
                field: field.into(),
            },
        ))
    }

    pub fn is_self_referential_many_to_many(&self) -> bool {
        self.as_self_referential_many_to_many().is_some()
    }

    pub fn as_self_referential_many_to_many(&self) -> Option<&SelfReferentialManyToMany> {
        self.find(|kind| match kind {
            super::ErrorKind::SelfReferentialManyToMany(err) => Some(err),
            _ => None,
        })
    }
}
