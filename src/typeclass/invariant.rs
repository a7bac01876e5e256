//! Invariant type class - mapping in both directions.
//!
//! An invariant functor sits between covariant and contravariant functors:
//! transforming the element type requires conversion functions in *both*
//! directions, because the implementing type may use its element in input
//! position, output position, or both.
//!
//! Every covariant functor is trivially invariant: its `imap` applies the
//! forward function and ignores the backward one. The backward direction
//! matters for types that consume their element, such as predicates or
//! encoders.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.imap(|x| x, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.imap(f1, g1).imap(f2, g2) == fa.imap(|x| f2(f1(x)), |x| g1(g2(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Invariant;
//!
//! let celsius: Option<f64> = Some(100.0);
//! let fahrenheit: Option<f64> = celsius.imap(
//!     |c| c * 9.0 / 5.0 + 32.0,
//!     |f: f64| (f - 32.0) * 5.0 / 9.0,
//! );
//! assert_eq!(fahrenheit, Some(212.0));
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for types whose element can be converted via a pair of
/// inverse functions.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.imap(|x| x, |x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.imap(f1, g1).imap(f2, g2) == fa.imap(|x| f2(f1(x)), |x| g1(g2(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Invariant;
///
/// let numeric: Option<i32> = Some(42);
/// let textual: Option<String> = numeric.imap(
///     |n| n.to_string(),
///     |s: String| s.parse().unwrap_or_default(),
/// );
/// assert_eq!(textual, Some("42".to_string()));
/// ```
pub trait Invariant: TypeConstructor {
    /// Converts the element type using a forward and a backward function.
    ///
    /// # Arguments
    ///
    /// * `forward` - Converts the current element type to the new one
    /// * `backward` - Converts the new element type back to the current one
    fn imap<B, F, G>(self, forward: F, backward: G) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        G: Fn(B) -> Self::Inner + 'static,
        B: 'static;
}

// =============================================================================
// Covariant instances: imap applies forward and ignores backward
// =============================================================================

impl<A> Invariant for Option<A> {
    #[inline]
    fn imap<B, F, G>(self, forward: F, _backward: G) -> Option<B>
    where
        F: FnOnce(A) -> B,
        G: Fn(B) -> A,
    {
        self.map(forward)
    }
}

impl<T, E> Invariant for Result<T, E> {
    #[inline]
    fn imap<B, F, G>(self, forward: F, _backward: G) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
        G: Fn(B) -> T,
    {
        self.map(forward)
    }
}

impl<T> Invariant for Box<T> {
    #[inline]
    fn imap<B, F, G>(self, forward: F, _backward: G) -> Box<B>
    where
        F: FnOnce(T) -> B,
        G: Fn(B) -> T,
    {
        Box::new(forward(*self))
    }
}

impl<A> Invariant for Identity<A> {
    #[inline]
    fn imap<B, F, G>(self, forward: F, _backward: G) -> Identity<B>
    where
        F: FnOnce(A) -> B,
        G: Fn(B) -> A,
    {
        Identity(forward(self.0))
    }
}
