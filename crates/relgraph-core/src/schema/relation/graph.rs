use super::{HasManySpec, ManyToManySpec};
use crate::schema::app::ModelId;

/// Every resolved relation of a schema, ready for storage-schema generation.
///
/// Specs are grouped by the model that declares them, in model declaration
/// order. Many-to-many pairs are declared on both sides, so each pair appears
/// once from each side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationGraph {
    pub has_many: Vec<HasManySpec>,
    pub many_to_many: Vec<ManyToManySpec>,
}

impl RelationGraph {
    pub fn is_empty(&self) -> bool {
        self.has_many.is_empty() && self.many_to_many.is_empty()
    }

    pub fn extend(
        &mut self,
        has_many: impl IntoIterator<Item = HasManySpec>,
        many_to_many: impl IntoIterator<Item = ManyToManySpec>,
    ) {
        self.has_many.extend(has_many);
        self.many_to_many.extend(many_to_many);
    }

    /// Has-many relations declared by `owner`.
    pub fn has_many_for(&self, owner: ModelId) -> impl Iterator<Item = &HasManySpec> + '_ {
        self.has_many.iter().filter(move |spec| spec.owner == owner)
    }

    /// Many-to-many relations declared by `left`.
    pub fn many_to_many_for(&self, left: ModelId) -> impl Iterator<Item = &ManyToManySpec> + '_ {
        self.many_to_many.iter().filter(move |spec| spec.left == left)
    }

    /// Has-many relations whose child is `child`.
    pub fn owners_of(&self, child: ModelId) -> impl Iterator<Item = &HasManySpec> + '_ {
        self.has_many.iter().filter(move |spec| spec.child == child)
    }
}
