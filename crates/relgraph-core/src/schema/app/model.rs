use super::{Field, FieldId, Name};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: Name,

    /// Fields contained by the model, in declaration order
    pub fields: Vec<Field>,

    /// Model-level `BelongsTo` declaration
    pub belongs_to: Option<BelongsTo>,
}

/// Declares the model that owns instances of this one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BelongsTo {
    pub target: ModelId,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelId(pub usize);

impl Model {
    pub fn new(id: ModelId, name: &str) -> Self {
        Self {
            id,
            name: Name::new(name),
            fields: vec![],
            belongs_to: None,
        }
    }

    /// The model's effective `BelongsTo` declaration: the model-level one, or
    /// else the first field annotated with `BelongsTo`.
    pub fn belongs_to(&self) -> Option<BelongsTo> {
        self.belongs_to.or_else(|| {
            self.fields
                .iter()
                .find_map(Field::belongs_to)
                .map(|target| BelongsTo { target })
        })
    }

    /// Every `BelongsTo` target the model declares, model-level first.
    pub(crate) fn belongs_to_targets(&self) -> impl Iterator<Item = ModelId> + '_ {
        self.belongs_to
            .map(|belongs_to| belongs_to.target)
            .into_iter()
            .chain(self.fields.iter().filter_map(Field::belongs_to))
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
