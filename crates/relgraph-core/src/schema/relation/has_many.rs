use super::{Introspect, Resolver};
use crate::schema::app::{Field, ModelId};
use crate::{Error, Result};
use log::{debug, trace};

/// `owner` has many `child`, stored and retrieved through `field`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HasManySpec {
    pub owner: ModelId,

    /// Name of the list field on the owner
    pub field: String,

    pub child: ModelId,
}

impl<S: Introspect + ?Sized> Resolver<'_, S> {
    /// Validates every `HasMany` field of `owner`, in declaration order.
    ///
    /// The child model must declare `BelongsTo` pointing exactly at `owner`,
    /// and `owner` must not in turn belong to the child.
    pub fn has_many(&self, owner: ModelId, fields: &[Field]) -> Result<Vec<HasManySpec>> {
        let owner_model = self.model(owner)?;
        let owner_name = owner_model.name.upper_camel_case();
        let mut specs = vec![];

        for field in fields {
            if !field.is_has_many() {
                continue;
            }

            let Some(child) = field.ty.list_model() else {
                return Err(Error::invalid_schema(format!(
                    "field `{owner_name}::{}` is annotated `HasMany`, but is not a list of models",
                    field.name
                )));
            };

            let child_model = self.model(child)?;
            let child_name = child_model.name.upper_camel_case();

            let Some(belongs_to) = child_model.belongs_to() else {
                return Err(Error::missing_belongs_to(
                    &owner_name,
                    &field.name,
                    &child_name,
                ));
            };

            if belongs_to.target != owner {
                return Err(Error::belongs_to_mismatch(
                    &owner_name,
                    &field.name,
                    &child_name,
                    &self.name_of(belongs_to.target),
                ));
            }

            if owner_model
                .belongs_to()
                .is_some_and(|belongs_to| belongs_to.target == child)
            {
                return Err(Error::cyclic_has_many(
                    &owner_name,
                    &field.name,
                    &child_name,
                ));
            }

            debug!("resolved has-many `{owner_name}::{}` -> `{child_name}`", field.name);

            specs.push(HasManySpec {
                owner,
                field: field.name.clone(),
                child,
            });
        }

        trace!("`{owner_name}` has {} has-many relation(s)", specs.len());

        Ok(specs)
    }
}
