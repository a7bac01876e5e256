//! Comonad type class - extracting values and extending context-aware
//! functions.
//!
//! A comonad is the dual of a monad. Where a monad lets a function *put*
//! a value into a context (`pure`) and sequence context-producing steps
//! (`flat_map`), a comonad lets a function *take* the focused value out of
//! a context (`extract`) and run whole-context queries at every position
//! (`extend`).
//!
//! # Laws
//!
//! All `Comonad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Extending with `extract` rebuilds the original structure:
//!
//! ```text
//! w.extend(|w| w.extract()) == w
//! ```
//!
//! ## Right Identity Law
//!
//! Extracting after extending yields the function applied to the whole:
//!
//! ```text
//! w.clone().extend(f).extract() == f(w)
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! w.extend(f).extend(g) == w.extend(|w| g(w.extend(f)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Comonad, Identity};
//!
//! let wrapped = Identity::new(21);
//! assert_eq!(wrapped.extend(|w| w.extract() * 2), Identity::new(42));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for contexts that carry a distinguished, extractable value.
///
/// `Comonad` extends `Functor` with `extract`, which removes the value from
/// its context, and `extend`, which applies a function that reads the whole
/// context.
///
/// # Laws
///
/// See the [module documentation](self) for the identity and associativity
/// laws.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{Comonad, Identity};
///
/// assert_eq!(Identity::new(42).extract(), 42);
/// ```
pub trait Comonad: Functor {
    /// Extracts the focused value from the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Comonad;
    ///
    /// assert_eq!(Box::new(5).extract(), 5);
    /// ```
    fn extract(self) -> Self::Inner;

    /// Applies a whole-context function and rebuilds the structure around
    /// its result.
    ///
    /// The function receives the entire comonadic value, not just the
    /// focused element, so it can inspect any surrounding context the type
    /// provides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Comonad, Identity};
    ///
    /// let doubled = Identity::new(21).extend(|w| w.extract() * 2);
    /// assert_eq!(doubled, Identity::new(42));
    /// ```
    fn extend<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self) -> B;

    /// Wraps the context within itself.
    ///
    /// Equivalent to `extend(|w| w)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Comonad, Identity};
    ///
    /// let nested = Identity::new(1).duplicate();
    /// assert_eq!(nested, Identity::new(Identity::new(1)));
    /// ```
    #[inline]
    fn duplicate(self) -> Self::WithType<Self>
    where
        Self: Sized,
    {
        self.extend(|w| w)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Comonad for Identity<A> {
    #[inline]
    fn extract(self) -> A {
        self.into_inner()
    }

    #[inline]
    fn extend<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(Self) -> B,
    {
        Identity(function(self))
    }
}

// =============================================================================
// Box<A> Implementation
// =============================================================================

impl<A> Comonad for Box<A> {
    #[inline]
    fn extract(self) -> A {
        *self
    }

    #[inline]
    fn extend<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(Self) -> B,
    {
        Box::new(function(self))
    }
}
