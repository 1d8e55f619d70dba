use super::Error;

/// A `HasMany` target declares `BelongsTo` for a different model than the one
/// referencing it.
#[derive(Debug)]
pub struct BelongsToMismatch {
    field: Box<str>,
    target: Box<str>,
    expected: Box<str>,
    actual: Box<str>,
}

impl BelongsToMismatch {
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The child model whose `BelongsTo` declaration is wrong.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The model declaring the `HasMany` field.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The model the child actually belongs to.
    pub fn actual(&self) -> &str {
        &self.actual
    }
}

impl std::error::Error for BelongsToMismatch {}

impl core::fmt::Display for BelongsToMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}::{}` is a `HasMany` relation, but `{}` belongs to `{}`; expected `{}`",
            self.expected, self.field, self.target, self.actual, self.expected
        )
    }
}

impl Error {
    pub fn belongs_to_mismatch(expected: &str, field: &str, target: &str, actual: &str) -> Error {
        Error::from(super::ErrorKind::BelongsToMismatch(BelongsToMismatch {
            field: field.into(),
            target: target.into(),
            expected: expected.into(),
            actual: actual.into(),
        }))
    }

    pub fn is_belongs_to_mismatch(&self) -> bool {
        self.as_belongs_to_mismatch().is_some()
    }

    pub fn as_belongs_to_mismatch(&self) -> Option<&BelongsToMismatch> {
        self.find(|kind| match kind {
            super::ErrorKind::BelongsToMismatch(err) => Some(err),
            _ => None,
        })
    }
}
