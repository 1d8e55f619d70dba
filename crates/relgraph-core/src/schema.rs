pub mod app;

mod builder;
pub use builder::Builder;

mod name;
pub use name::Name;

pub mod relation;
use relation::RelationGraph;

use crate::Result;
use app::ModelId;

#[derive(Debug)]
pub struct Schema {
    /// Declared models
    pub app: app::Schema,

    /// Resolved relations of every declared model
    pub relations: RelationGraph,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Verifies the given models and resolves their relations with the
    /// default options.
    pub fn from_models(models: impl IntoIterator<Item = app::Model>) -> Result<Self> {
        Self::builder().build(app::Schema::from_models(models)?)
    }

    pub fn model_id(&self, name: &str) -> Option<ModelId> {
        self.app.model_by_name(name).map(|model| model.id)
    }
}
