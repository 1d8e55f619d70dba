use super::{Descriptor, Introspect, Resolver, VisitSet};
use crate::schema::app::{Field, ModelId};
use crate::{Error, Result};
use log::{debug, trace};

/// A symmetric association between `left` and `right.model`, held by the
/// list field `field` on the left side.
///
/// `right` carries the target's own resolved relations, so a spec is the root
/// of a small owned tree rather than a flat edge. The left side is the
/// [`Descriptor`] that owns this spec.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManyToManySpec {
    pub left: ModelId,

    /// Name of the list field on the left model
    pub field: String,

    pub right: Descriptor,
}

impl ManyToManySpec {
    /// The model on the right side of the association.
    pub fn right_model(&self) -> ModelId {
        self.right.model
    }
}

/// How a claimed target is materialized.
enum Target {
    /// Entered by this call; its own relations are expanded.
    Expand(ModelId),

    /// The owner itself. It is already being expanded.
    SelfReference(ModelId),
}

impl<S: Introspect + ?Sized> Resolver<'_, S> {
    /// Validates every `ManyToMany` list field of `owner`, in declaration
    /// order, and materializes each target's descriptor.
    ///
    /// `owner` is entered into `visited`. All targets are validated and
    /// claimed before any of them is expanded, so every direct relation of
    /// `owner` is emitted. A target that was already entered, here or higher
    /// in the traversal, is skipped: it is expanded elsewhere in the tree.
    /// Each model is therefore expanded at most once per `visited` set.
    pub fn many_to_many(
        &self,
        owner: ModelId,
        visited: &mut VisitSet,
        fields: &[Field],
    ) -> Result<Vec<ManyToManySpec>> {
        let owner_model = self.model(owner)?;
        let owner_name = owner_model.name.upper_camel_case();

        visited.enter(owner);

        let mut claimed = vec![];

        for field in fields {
            if !field.is_many_to_many() {
                continue;
            }

            let Some(right) = field.ty.list_model() else {
                trace!("skipping `{owner_name}::{}`: not a list of models", field.name);
                continue;
            };

            if right == owner && !self.allow_self_referential_many_to_many {
                return Err(Error::self_referential_many_to_many(
                    &owner_name,
                    &field.name,
                ));
            }

            let right_model = self.model(right)?;

            // Both sides must declare the relation
            if !right_model
                .fields
                .iter()
                .any(|other| other.is_many_to_many_of(owner))
            {
                return Err(Error::asymmetric_many_to_many(
                    &owner_name,
                    &field.name,
                    &right_model.name.upper_camel_case(),
                ));
            }

            if right == owner {
                claimed.push((field, Target::SelfReference(right)));
            } else if visited.enter(right) {
                claimed.push((field, Target::Expand(right)));
            } else {
                trace!(
                    "skipping `{owner_name}::{}`: `{}` already visited",
                    field.name,
                    right_model.name.upper_camel_case()
                );
            }
        }

        let mut specs = Vec::with_capacity(claimed.len());

        for (field, target) in claimed {
            let right = match target {
                Target::Expand(right) => self.descriptor(right, visited)?,
                Target::SelfReference(right) => self.leaf(right)?,
            };

            debug!(
                "resolved many-to-many `{owner_name}::{}` -> `{}`",
                field.name,
                right.name.upper_camel_case()
            );

            specs.push(ManyToManySpec {
                left: owner,
                field: field.name.clone(),
                right,
            });
        }

        Ok(specs)
    }
}
