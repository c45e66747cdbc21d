//! Error types for uasniff.
//!
//! Classification itself never fails: every predicate is a total function
//! of the captured User-Agent string. Errors only show up at the edges,
//! e.g. when parsing a predicate name coming from configuration or user input.
//!
//! Those edges report failures as an [`OpaqueError`], a type-erased error
//! that still allows downcasting to the concrete error in case a caller
//! cares about it.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use std::fmt::{self, Debug, Display};

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[repr(transparent)]
/// A type-erased error type that can be used as a trait object.
///
/// Used by the uasniff crates to report parse failures
/// without committing to a concrete error type in the public API.
pub struct OpaqueError(BoxError);

impl OpaqueError {
    /// create an [`OpaqueError`] from an std error
    pub fn from_std(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(error))
    }

    /// create an [`OpaqueError`] from a display object
    pub fn from_display(msg: impl Display + Debug + Send + Sync + 'static) -> Self {
        Self::from_std(MessageError(msg))
    }

    /// create an [`OpaqueError`] from a boxed error
    #[must_use]
    pub fn from_boxed(inner: BoxError) -> Self {
        Self(inner)
    }

    /// Returns true if the underlying error is of type `T`.
    #[must_use]
    pub fn is<T>(&self) -> bool
    where
        T: std::error::Error + 'static,
    {
        self.0.is::<T>()
    }

    /// Consumes the [`OpaqueError`] and returns it as a [`BoxError`].
    #[must_use]
    pub fn into_boxed(self) -> BoxError {
        self.0
    }

    /// Attempts to downcast the error to the concrete type `T`.
    pub fn downcast<T>(self) -> Result<T, Self>
    where
        T: std::error::Error + 'static,
    {
        match self.0.downcast::<T>() {
            Ok(error) => Ok(*error),
            Err(inner) => Err(Self(inner)),
        }
    }

    /// Attempts to downcast the error to a shared reference
    /// of the concrete type `T`.
    #[must_use]
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: std::error::Error + 'static,
    {
        self.0.downcast_ref()
    }
}

impl Debug for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl std::error::Error for OpaqueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<BoxError> for OpaqueError {
    fn from(error: BoxError) -> Self {
        Self(error)
    }
}

#[repr(transparent)]
/// An error type that wraps a message.
struct MessageError<M>(M);

impl<M> Debug for MessageError<M>
where
    M: Display + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<M> Display for MessageError<M>
where
    M: Display + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<M> std::error::Error for MessageError<M> where M: Display + Debug + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct UnknownToken(&'static str);

    impl Display for UnknownToken {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "unknown token: {}", self.0)
        }
    }

    impl std::error::Error for UnknownToken {}

    #[test]
    fn opaque_error_display_is_transparent() {
        let error = OpaqueError::from_display("invalid predicate: isFoo");
        assert_eq!(error.to_string(), "invalid predicate: isFoo");

        let error = OpaqueError::from_std(UnknownToken("bar"));
        assert_eq!(error.to_string(), "unknown token: bar");
    }

    #[test]
    fn opaque_error_is() {
        let error = OpaqueError::from_std(UnknownToken("webkit"));
        assert!(error.is::<UnknownToken>());

        let error = OpaqueError::from_display("hello");
        assert!(!error.is::<UnknownToken>());
    }

    #[test]
    fn opaque_error_downcast() {
        let error = OpaqueError::from_std(UnknownToken("gecko"));
        let inner = error.downcast::<UnknownToken>().unwrap();
        assert_eq!(inner.0, "gecko");

        let error = OpaqueError::from_display("hello");
        assert!(error.downcast::<UnknownToken>().is_err());
    }

    #[test]
    fn opaque_error_downcast_ref() {
        let error = OpaqueError::from_std(UnknownToken("presto"));
        assert_eq!(error.downcast_ref::<UnknownToken>().unwrap().0, "presto");

        let error = OpaqueError::from_display("hello");
        assert!(error.downcast_ref::<UnknownToken>().is_none());
    }

    #[test]
    fn opaque_error_from_boxed_roundtrip() {
        let boxed: BoxError = Box::new(UnknownToken("trident"));
        let error = OpaqueError::from(boxed);
        let boxed = error.into_boxed();
        assert!(boxed.is::<UnknownToken>());
    }
}
