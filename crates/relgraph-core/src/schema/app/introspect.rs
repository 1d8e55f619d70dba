use super::{Model, ModelId, Schema};

/// Read-only access to declared models.
///
/// Relation resolution only ever inspects models through this trait. Lookups
/// must be deterministic: asking twice for the same id within one resolution
/// pass yields the same model.
pub trait Introspect {
    /// Returns the model with the given id, if it was declared.
    fn find_model(&self, id: ModelId) -> Option<&Model>;
}

impl Introspect for Schema {
    fn find_model(&self, id: ModelId) -> Option<&Model> {
        self.models.get(&id)
    }
}

impl Introspect for [Model] {
    fn find_model(&self, id: ModelId) -> Option<&Model> {
        self.iter().find(|model| model.id == id)
    }
}

impl Introspect for Vec<Model> {
    fn find_model(&self, id: ModelId) -> Option<&Model> {
        self.as_slice().find_model(id)
    }
}
