#[macro_use]
mod macros;

mod error;
pub use error::{
    AsymmetricManyToMany, BelongsToMismatch, CyclicHasMany, Error, IntoError, MissingBelongsTo,
    SelfReferentialManyToMany,
};

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses Relgraph's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
