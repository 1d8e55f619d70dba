//! Application-level schema: the declared models, their fields and the
//! relation annotations attached to them.

mod field;
pub use field::{Field, FieldId, Relation};

mod introspect;
pub use introspect::Introspect;

mod model;
pub use model::{BelongsTo, Model, ModelId};

mod schema;
pub use schema::Schema;

mod ty;
pub use ty::Type;

use super::Name;
