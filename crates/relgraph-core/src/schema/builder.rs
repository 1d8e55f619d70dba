use super::{app, Result, Schema};
use crate::schema::relation::{RelationGraph, Resolver, VisitSet};
use log::debug;

#[derive(Debug, Default)]
pub struct Builder {
    /// If set, a `ManyToMany` field may hold its own model
    allow_self_referential_many_to_many: bool,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_self_referential_many_to_many(&mut self, allow: bool) -> &mut Self {
        self.allow_self_referential_many_to_many = allow;
        self
    }

    /// A resolver configured with these options.
    pub fn resolver<'a, S: app::Introspect + ?Sized>(&self, schema: &'a S) -> Resolver<'a, S> {
        Resolver::new(schema)
            .allow_self_referential_many_to_many(self.allow_self_referential_many_to_many)
    }

    /// Resolves the relations of every model, in declaration order.
    ///
    /// The first invalid relation aborts the build.
    pub fn build(&self, app: app::Schema) -> Result<Schema> {
        let resolver = self.resolver(&app);
        let mut relations = RelationGraph::default();

        for model in app.models() {
            let has_many = resolver
                .has_many(model.id, &model.fields)
                .map_err(|e| e.context(err!("failed to resolve relations of `{}`", model.name)))?;

            // Each model starts its own traversal
            let mut visited = VisitSet::new();
            let many_to_many = resolver
                .many_to_many(model.id, &mut visited, &model.fields)
                .map_err(|e| e.context(err!("failed to resolve relations of `{}`", model.name)))?;

            debug!(
                "`{}`: {} has-many, {} many-to-many relation(s); visited {}",
                model.name,
                has_many.len(),
                many_to_many.len(),
                visited.len()
            );

            relations.extend(has_many, many_to_many);
        }

        Ok(Schema { app, relations })
    }
}
