use super::{ModelId, Type};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Uniquely identifies the field within the containing model.
    pub id: FieldId,

    /// The field name
    pub name: String,

    /// The declared value type
    pub ty: Type,

    /// Relation annotations attached to the field
    pub relations: Vec<Relation>,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

/// A relation annotation on a field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Relation {
    /// The field is a list of child models that each belong to the field's
    /// model.
    HasMany,

    /// The field is one side of a symmetric association.
    ManyToMany,

    /// The field's model belongs to `target`.
    BelongsTo(ModelId),
}

impl Field {
    pub fn new(id: FieldId, name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            id,
            name: name.into(),
            ty: ty.into(),
            relations: vec![],
        }
    }

    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    pub fn is_has_many(&self) -> bool {
        self.relations.contains(&Relation::HasMany)
    }

    pub fn is_many_to_many(&self) -> bool {
        self.relations.contains(&Relation::ManyToMany)
    }

    /// The target of a field-level `BelongsTo` annotation.
    pub fn belongs_to(&self) -> Option<ModelId> {
        self.relations.iter().find_map(|relation| match relation {
            Relation::BelongsTo(target) => Some(*target),
            _ => None,
        })
    }

    /// Returns true if the field is a `ManyToMany` list holding `model`.
    pub fn is_many_to_many_of(&self, model: ModelId) -> bool {
        self.is_many_to_many() && self.ty.list_model() == Some(model)
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}
