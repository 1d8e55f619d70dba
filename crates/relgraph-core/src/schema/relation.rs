//! Relation resolution.
//!
//! Given a model and its fields, the [`Resolver`] validates `HasMany` and
//! `ManyToMany` declarations and produces the specs the storage layer consumes.
//! Any violation aborts resolution; partial results are never returned.

mod descriptor;
pub use descriptor::Descriptor;

mod graph;
pub use graph::RelationGraph;

mod has_many;
pub use has_many::HasManySpec;

mod many_to_many;
pub use many_to_many::ManyToManySpec;

mod visit;
pub use visit::VisitSet;

use super::app::{Introspect, Model, ModelId};
use crate::{Error, Result};

/// Resolves relation specs for models exposed through [`Introspect`].
///
/// The resolver holds no traversal state of its own. Many-to-many traversal
/// state lives in a [`VisitSet`] owned by each top-level call, so one
/// resolver may be shared by concurrent resolution passes.
pub struct Resolver<'a, S: ?Sized> {
    schema: &'a S,

    /// When set, a `ManyToMany` field may target its own model.
    allow_self_referential_many_to_many: bool,
}

impl<'a, S: Introspect + ?Sized> Resolver<'a, S> {
    pub fn new(schema: &'a S) -> Self {
        Self {
            schema,
            allow_self_referential_many_to_many: false,
        }
    }

    pub fn allow_self_referential_many_to_many(mut self, allow: bool) -> Self {
        self.allow_self_referential_many_to_many = allow;
        self
    }

    /// Resolves the full relation sub-graph of `model` with a fresh
    /// [`VisitSet`].
    pub fn resolve(&self, model: ModelId) -> Result<Descriptor> {
        let mut visited = VisitSet::new();
        self.descriptor(model, &mut visited)
    }

    /// Materializes the descriptor of `model`, threading `visited` through
    /// every nested many-to-many expansion.
    pub fn descriptor(&self, model: ModelId, visited: &mut VisitSet) -> Result<Descriptor> {
        let node = self.model(model)?;

        Ok(Descriptor {
            model,
            name: node.name.clone(),
            has_many: self.has_many(model, &node.fields)?,
            many_to_many: self.many_to_many(model, visited, &node.fields)?,
        })
    }

    /// A descriptor whose many-to-many relations are not expanded.
    fn leaf(&self, model: ModelId) -> Result<Descriptor> {
        let node = self.model(model)?;

        Ok(Descriptor {
            model,
            name: node.name.clone(),
            has_many: self.has_many(model, &node.fields)?,
            many_to_many: vec![],
        })
    }

    fn model(&self, id: ModelId) -> Result<&'a Model> {
        let schema: &'a S = self.schema;

        schema.find_model(id).ok_or_else(|| {
            Error::invalid_schema(format!(
                "{id:?} references a model that was not registered with the schema"
            ))
        })
    }

    /// The display name of a model, falling back to its id.
    fn name_of(&self, id: ModelId) -> String {
        match self.schema.find_model(id) {
            Some(model) => model.name.upper_camel_case(),
            None => format!("{id:?}"),
        }
    }
}
