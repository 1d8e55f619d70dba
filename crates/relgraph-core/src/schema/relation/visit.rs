use crate::schema::app::ModelId;
use indexmap::IndexSet;

/// Models entered during one many-to-many resolution pass.
///
/// A set is scoped to a single top-level call. Callers can only create an
/// empty set and inspect it; entering models is reserved to the resolver.
#[derive(Debug, Default)]
pub struct VisitSet {
    entered: IndexSet<ModelId>,
}

impl VisitSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, model: ModelId) -> bool {
        self.entered.contains(&model)
    }

    pub fn len(&self) -> usize {
        self.entered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entered.is_empty()
    }

    /// Entered models, in the order they were entered.
    pub fn iter(&self) -> impl Iterator<Item = ModelId> + '_ {
        self.entered.iter().copied()
    }

    /// Returns `false` if `model` was already entered.
    pub(crate) fn enter(&mut self, model: ModelId) -> bool {
        self.entered.insert(model)
    }
}
