use super::{HasManySpec, ManyToManySpec};
use crate::schema::{app::ModelId, Name};

/// The resolved relations of one model.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Descriptor {
    pub model: ModelId,

    pub name: Name,

    pub has_many: Vec<HasManySpec>,

    /// Many-to-many relations, each carrying the target's own descriptor
    pub many_to_many: Vec<ManyToManySpec>,
}

impl Descriptor {
    pub fn has_many_field(&self, name: &str) -> Option<&HasManySpec> {
        self.has_many.iter().find(|spec| spec.field == name)
    }

    pub fn many_to_many_field(&self, name: &str) -> Option<&ManyToManySpec> {
        self.many_to_many.iter().find(|spec| spec.field == name)
    }

    /// Every many-to-many spec in the tree rooted at this descriptor,
    /// depth-first in declaration order.
    pub fn walk_many_to_many(&self) -> impl Iterator<Item = &ManyToManySpec> + '_ {
        let mut stack: Vec<&ManyToManySpec> = self.many_to_many.iter().rev().collect();

        std::iter::from_fn(move || {
            let spec = stack.pop()?;
            stack.extend(spec.right.many_to_many.iter().rev());
            Some(spec)
        })
    }

    /// Every model appearing in the tree, this one first.
    pub fn models(&self) -> impl Iterator<Item = ModelId> + '_ {
        std::iter::once(self.model).chain(self.walk_many_to_many().map(|spec| spec.right.model))
    }
}
