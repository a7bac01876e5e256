//! Identity wrapper - the trivial container.
//!
//! [`Identity<A>`] wraps a single value and adds no structure at all. It is
//! the reference instance for every capability contract in this crate: the
//! functor that does nothing but hold its value, the monad whose `flat_map`
//! is plain function application, and the simplest possible comonad.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Functor, Identity};
//!
//! let wrapped = Identity::new(21);
//! assert_eq!(wrapped.fmap(|n| n * 2), Identity::new(42));
//! ```

use super::higher::TypeConstructor;

/// A wrapper holding exactly one value of type `A`.
///
/// `Identity` adds no computational context; it exists so that generic code
/// written against the capability contracts has a degenerate instance, and
/// so that laws can be validated against the simplest case.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Identity;
///
/// let wrapped = Identity::new("hello");
/// assert_eq!(wrapped.into_inner(), "hello");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps a value.
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the wrapped value.
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}
