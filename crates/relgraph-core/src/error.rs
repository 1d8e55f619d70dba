mod adhoc;
mod asymmetric_many_to_many;
mod belongs_to_mismatch;
mod cyclic_has_many;
mod invalid_schema;
mod missing_belongs_to;
mod self_referential_many_to_many;

use adhoc::AdhocError;
pub use asymmetric_many_to_many::AsymmetricManyToMany;
pub use belongs_to_mismatch::BelongsToMismatch;
pub use cyclic_has_many::CyclicHasMany;
use invalid_schema::InvalidSchema;
pub use missing_belongs_to::MissingBelongsTo;
pub use self_referential_many_to_many::SelfReferentialManyToMany;
use std::sync::Arc;

/// An error that can occur while loading a schema or resolving its relations.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        let inner = err.inner.take().map(|inner| match Arc::try_unwrap(inner) {
            Ok(mut inner) => {
                debug_assert!(
                    inner.cause.is_none(),
                    "consequent error must not already have a cause"
                );
                inner.cause = Some(self);
                inner
            }
            // A shared consequent cannot be mutated in place, so it is wrapped
            Err(shared) => ErrorInner {
                kind: ErrorKind::Shared(Error {
                    inner: Some(shared),
                }),
                cause: Some(self),
            },
        });

        Error { inner: inner.map(Arc::new) }
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        let mut root = self;
        for err in self.chain() {
            root = err;
        }
        root
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        match self.inner.as_ref().map(|inner| &inner.kind) {
            Some(ErrorKind::Shared(err)) => err.kind(),
            Some(kind) => kind,
            None => &ErrorKind::Unknown,
        }
    }

    /// Finds the first error in the chain matching `f`.
    fn find<'a, T>(&'a self, f: impl Fn(&'a ErrorKind) -> Option<&'a T>) -> Option<&'a T> {
        self.chain().find_map(|err| f(err.kind()))
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    InvalidSchema(InvalidSchema),
    MissingBelongsTo(MissingBelongsTo),
    BelongsToMismatch(BelongsToMismatch),
    CyclicHasMany(CyclicHasMany),
    AsymmetricManyToMany(AsymmetricManyToMany),
    SelfReferentialManyToMany(SelfReferentialManyToMany),
    Shared(Error),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            MissingBelongsTo(err) => core::fmt::Display::fmt(err, f),
            BelongsToMismatch(err) => core::fmt::Display::fmt(err, f),
            CyclicHasMany(err) => core::fmt::Display::fmt(err, f),
            AsymmetricManyToMany(err) => core::fmt::Display::fmt(err, f),
            SelfReferentialManyToMany(err) => core::fmt::Display::fmt(err, f),
            Shared(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown relgraph error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
