//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step can depend on the
//! result of the previous step.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for types that support sequencing of computations.
///
/// `Monad` extends `Applicative` with `flat_map`, which allows the result
/// of one computation to determine what computation to perform next.
///
/// # Laws
///
/// See the [module documentation](self) for the left-identity,
/// right-identity, and associativity laws.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Monad;
///
/// let halved = Some(10).flat_map(|n| if n > 0 { Some(n / 2) } else { None });
/// assert_eq!(halved, Some(5));
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the
    /// result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Monad;
    ///
    /// let y = Some(5).flat_map(|n| Some(n * 2));
    /// assert_eq!(y, Some(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Monad;
    ///
    /// let y = Some(5).and_then(|n| Some(n * 2));
    /// assert_eq!(y, Some(10));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` represents a failure, the failure propagates and `next`
    /// is not returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Vec<A> Implementation
//
// Note: Vec requires FnMut for flat_map because the function is called for
// each element. This is expressed through a separate trait to keep the
// Monad interface clean with FnOnce.
// =============================================================================

/// Extension trait for Vec to provide Monad-like operations.
///
/// Vec's Monad instance represents non-deterministic computation:
/// `flat_map` applies a function to each element and concatenates all
/// results.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::MonadVec;
///
/// let expanded = vec![1, 2, 3].flat_map(|n| vec![n, n * 10]);
/// assert_eq!(expanded, vec![1, 10, 2, 20, 3, 30]);
/// ```
pub trait MonadVec: Sized {
    /// The inner type of the Vec.
    type VecInner;

    /// Applies a function to each element and flattens the results.
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::VecInner) -> Vec<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::VecInner) -> Vec<B>,
    {
        self.flat_map(function)
    }

    /// Repeats `next` once per element of `self`, discarding the elements.
    fn then<B: Clone>(self, next: Vec<B>) -> Vec<B>;

    /// Flattens one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::MonadVec;
    ///
    /// let nested = vec![vec![1, 2], vec![3, 4]];
    /// let flat: Vec<i32> = nested.flatten();
    /// assert_eq!(flat, vec![1, 2, 3, 4]);
    /// ```
    fn flatten<B>(self) -> Vec<B>
    where
        Self::VecInner: IntoIterator<Item = B>;
}

impl<A> MonadVec for Vec<A> {
    type VecInner = A;

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }

    #[inline]
    fn then<B: Clone>(self, next: Vec<B>) -> Vec<B> {
        let capacity = self.len().saturating_mul(next.len());
        let mut result = Vec::with_capacity(capacity);
        for _ in self {
            result.extend(next.iter().cloned());
        }
        result
    }

    fn flatten<B>(self) -> Vec<B>
    where
        A: IntoIterator<Item = B>,
    {
        self.into_iter().flat_map(IntoIterator::into_iter).collect()
    }
}

// =============================================================================
// Box<A> Implementation
// =============================================================================

impl<A> Monad for Box<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(A) -> Box<B>,
    {
        function(*self)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.into_inner())
    }
}
