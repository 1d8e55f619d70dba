use super::Error;

/// Only one side of a many-to-many pair declares the relation.
#[derive(Debug)]
pub struct AsymmetricManyToMany {
    model: Box<str>,
    field: Box<str>,
    target: Box<str>,
}

impl AsymmetricManyToMany {
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// The model missing the reciprocal `ManyToMany` field.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl std::error::Error for AsymmetricManyToMany {}

impl core::fmt::Display for AsymmetricManyToMany {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}::{}` is a `ManyToMany` relation, but `{}` declares no `ManyToMany` \
             list of `{}`; both models must declare the relation",
            self.model, self.field, self.target, self.model
        )
    }
}

impl Error {
    pub fn asymmetric_many_to_many(model: &str, field: &str, target: &str) -> Error {
        Error::from(super::ErrorKind::AsymmetricManyToMany(AsymmetricManyToMany {
            model: model.into(),
            field: field.into(),
            target: target.into(),
        }))
    }

    pub fn is_asymmetric_many_to_many(&self) -> bool {
        self.as_asymmetric_many_to_many().is_some()
    }

    pub fn as_asymmetric_many_to_many(&self) -> Option<&AsymmetricManyToMany> {
        self.find(|kind| match kind {
            super::ErrorKind::AsymmetricManyToMany(err) => Some(err),
            _ => None,
        })
    }
}
