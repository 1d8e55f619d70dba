use super::{Field, Model, ModelId, Relation};

use crate::{Error, Result};
use indexmap::IndexMap;
use std::collections::HashSet;

#[derive(Debug, Default, Clone)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

#[derive(Default)]
struct Builder {
    models: IndexMap<ModelId, Model>,
}

impl Schema {
    /// Registers the given models, keeping declaration order, and verifies
    /// that they form a well-formed schema.
    pub fn from_models(models: impl IntoIterator<Item = Model>) -> Result<Self> {
        Builder::from_models(models)
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        self.models()
            .find(|model| model.name.upper_camel_case() == name)
    }
}

impl Builder {
    fn from_models(models: impl IntoIterator<Item = Model>) -> Result<Schema> {
        let mut builder = Self::default();

        for model in models {
            if let Some(existing) = builder.models.get(&model.id) {
                return Err(Error::invalid_schema(format!(
                    "models `{}` and `{}` share the id {:?}",
                    existing.name,
                    model.name,
                    model.id,
                )));
            }

            builder.models.insert(model.id, model);
        }

        builder.verify()?;
        builder.into_schema()
    }

    fn into_schema(self) -> Result<Schema> {
        Ok(Schema {
            models: self.models,
        })
    }

    fn verify(&self) -> Result<()> {
        let mut names = HashSet::new();

        for model in self.models.values() {
            if !names.insert(model.name.upper_camel_case()) {
                return Err(Error::invalid_schema(format!(
                    "model `{}` is declared more than once",
                    model.name
                )));
            }

            self.verify_belongs_to(model)?;

            let mut field_names = HashSet::new();

            for (index, field) in model.fields.iter().enumerate() {
                if field.id != model.id.field(index) {
                    return Err(Error::invalid_schema(format!(
                        "field `{}::{}` has id {:?}, but is declared at {:?}",
                        model.name,
                        field.name,
                        field.id,
                        model.id.field(index),
                    )));
                }

                if !field_names.insert(field.name.as_str()) {
                    return Err(Error::invalid_schema(format!(
                        "field `{}::{}` is declared more than once",
                        model.name, field.name,
                    )));
                }

                self.verify_field(model, field)?;
            }
        }

        Ok(())
    }

    fn verify_belongs_to(&self, model: &Model) -> Result<()> {
        let mut targets = model.belongs_to_targets();

        if let Some(target) = targets.next() {
            self.verify_registered(target, || format!("`BelongsTo` of model `{}`", model.name))?;
        }

        if targets.next().is_some() {
            return Err(Error::invalid_schema(format!(
                "model `{}` declares `BelongsTo` more than once",
                model.name
            )));
        }

        Ok(())
    }

    fn verify_field(&self, model: &Model, field: &Field) -> Result<()> {
        let full_name = || format!("field `{}::{}`", model.name, field.name);

        if let Some(target) = field.ty.referenced_model() {
            self.verify_registered(target, full_name)?;
        }

        for relation in &field.relations {
            match relation {
                Relation::HasMany | Relation::ManyToMany if field.ty.list_model().is_none() => {
                    return Err(Error::invalid_schema(format!(
                        "{} is annotated `{:?}`, but is not a list of models",
                        full_name(),
                        relation,
                    )));
                }
                Relation::BelongsTo(target) => {
                    self.verify_registered(*target, full_name)?;
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn verify_registered(&self, target: ModelId, what: impl FnOnce() -> String) -> Result<()> {
        if self.models.contains_key(&target) {
            return Ok(());
        }

        Err(Error::invalid_schema(format!(
            "{} references a model that was not registered with the schema",
            what()
        )))
    }
}
