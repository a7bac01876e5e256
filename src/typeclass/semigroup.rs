//! Semigroup type class - associative combination of values.
//!
//! This module provides the `Semigroup` trait for types whose values can be
//! combined with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity Law
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Semigroup;
//!
//! let combined = "Hello, ".to_string().combine("world!".to_string());
//! assert_eq!(combined, "Hello, world!");
//!
//! let merged = vec![1, 2].combine(vec![3, 4]);
//! assert_eq!(merged, vec![1, 2, 3, 4]);
//! ```

use std::cmp;
use std::ops::{Add, Mul};

use super::identity::Identity;
use super::wrappers::{Max, Min, Product, Sum};

/// A type class for values that combine associatively.
///
/// # Laws
///
/// ## Associativity Law
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Semigroup;
///
/// let combined = vec![1].combine(vec![2, 3]);
/// assert_eq!(combined, vec![1, 2, 3]);
/// ```
pub trait Semigroup {
    /// Combines two values associatively, consuming both.
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, cloning as needed.
    ///
    /// Implementations may override this to avoid cloning intermediate
    /// structures.
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// `combine_n(0)` returns the value unchanged; `combine_n(n)` combines
    /// `n + 1` copies.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Semigroup;
    ///
    /// assert_eq!("ab".to_string().combine_n(2), "ababab");
    /// ```
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone + Sized,
    {
        let mut result = self.clone();
        for _ in 0..count {
            result = result.combine(self.clone());
        }
        result
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = String::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Vec::with_capacity(self.len() + other.len());
        result.extend_from_slice(self);
        result.extend_from_slice(other);
        result
    }
}

/// Option combines inner values when both are present, otherwise keeps
/// whichever side has one.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(left), None) => Some(left),
            (None, right) => right,
        }
    }
}

/// Result keeps the first error; two successes combine their values.
impl<T: Semigroup, E> Semigroup for Result<T, E> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Ok(left), Ok(right)) => Ok(left.combine(right)),
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Identity(self.into_inner().combine(other.into_inner()))
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        Self(cmp::max(self.0, other.0))
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        Self(cmp::min(self.0, other.0))
    }
}

// =============================================================================
// Tuple Implementations
// =============================================================================

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}
