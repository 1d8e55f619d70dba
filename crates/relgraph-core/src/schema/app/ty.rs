use super::ModelId;

/// The declared value type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Bool,
    I64,
    String,

    /// A reference to another model
    Model(ModelId),

    /// A list-like collection. Relation fields are always lists.
    List(Box<Type>),

    /// A nullable value
    Option(Box<Type>),
}

impl Type {
    pub fn list(item: impl Into<Self>) -> Self {
        Self::List(Box::new(item.into()))
    }

    pub fn option(item: impl Into<Self>) -> Self {
        Self::Option(Box::new(item.into()))
    }

    /// The element type of a list.
    pub fn list_item(&self) -> Option<&Self> {
        match self {
            Self::List(item) => Some(item),
            _ => None,
        }
    }

    /// The model a list of models holds, e.g. `Book` for `[Book]`.
    pub fn list_model(&self) -> Option<ModelId> {
        match self.list_item()? {
            Self::Model(id) => Some(*id),
            _ => None,
        }
    }

    /// The model referenced by a single, possibly optional, value.
    pub fn as_model(&self) -> Option<ModelId> {
        match self {
            Self::Model(id) => Some(*id),
            Self::Option(ty) => ty.as_model(),
            _ => None,
        }
    }

    /// Any model referenced anywhere in the type.
    pub(crate) fn referenced_model(&self) -> Option<ModelId> {
        match self {
            Self::Model(id) => Some(*id),
            Self::List(ty) | Self::Option(ty) => ty.referenced_model(),
            _ => None,
        }
    }
}

impl From<ModelId> for Type {
    fn from(value: ModelId) -> Self {
        Self::Model(value)
    }
}
