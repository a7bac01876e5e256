//! Monoid type class - semigroups with an identity element.
//!
//! This module provides the `Monoid` trait, which extends `Semigroup` with
//! an `empty` value that is neutral for `combine`.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! M::empty().combine(a) == a
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! a.combine(M::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Monoid;
//!
//! let total: String = Monoid::combine_all(vec![
//!     "a".to_string(),
//!     "b".to_string(),
//!     "c".to_string(),
//! ]);
//! assert_eq!(total, "abc");
//! ```

use std::ops::{Add, Mul};

use super::identity::Identity;
use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, One, Product, Sum};

/// A type class for semigroups with a neutral element.
///
/// # Laws
///
/// ## Identity Laws
///
/// ```text
/// M::empty().combine(a) == a
/// a.combine(M::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{Monoid, Semigroup};
///
/// let empty = String::empty();
/// assert_eq!(empty.combine("hello".to_string()), "hello");
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for `combine`.
    fn empty() -> Self;

    /// Combines every element of an iterator, starting from `empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Monoid, Sum};
    ///
    /// let total: Sum<i32> = Monoid::combine_all(vec![Sum(1), Sum(2), Sum(3)]);
    /// assert_eq!(total, Sum(6));
    ///
    /// let none: Sum<i32> = Monoid::combine_all(Vec::new());
    /// assert_eq!(none, Sum(0));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), Semigroup::combine)
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// `None` is neutral: combining with it keeps the other side.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Identity(T::empty())
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

impl<A: Mul<Output = A> + One> Monoid for Product<A> {
    fn empty() -> Self {
        Self(A::one())
    }
}

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::min_value())
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::max_value())
    }
}

// =============================================================================
// Tuple Implementations
// =============================================================================

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_empty_is_neutral() {
        assert_eq!(String::empty().combine("hello".to_string()), "hello");
        assert_eq!("hello".to_string().combine(String::empty()), "hello");
    }

    #[rstest]
    fn vec_empty_is_neutral() {
        let empty: Vec<i32> = Monoid::empty();
        assert_eq!(empty.combine(vec![1, 2]), vec![1, 2]);
    }

    #[rstest]
    fn option_empty_is_none() {
        let empty: Option<String> = Monoid::empty();
        assert_eq!(empty.combine(Some("a".to_string())), Some("a".to_string()));
    }

    #[rstest]
    fn sum_empty_is_zero() {
        assert_eq!(Sum::<i32>::empty(), Sum(0));
        assert_eq!(Sum::<i32>::empty().combine(Sum(7)), Sum(7));
    }

    #[rstest]
    fn product_empty_is_one() {
        assert_eq!(Product::<i32>::empty(), Product(1));
        assert_eq!(Product::<i32>::empty().combine(Product(7)), Product(7));
    }

    #[rstest]
    fn max_and_min_empties_are_bounds() {
        assert_eq!(Max::<i32>::empty(), Max(i32::MIN));
        assert_eq!(Min::<i32>::empty(), Min(i32::MAX));
        assert_eq!(Max::<i32>::empty().combine(Max(3)), Max(3));
        assert_eq!(Min::<i32>::empty().combine(Min(3)), Min(3));
    }

    #[rstest]
    fn combine_all_over_values() {
        let total: Sum<i32> = Monoid::combine_all(vec![Sum(1), Sum(2), Sum(3)]);
        assert_eq!(total, Sum(6));

        let product: Product<i32> = Monoid::combine_all(vec![Product(2), Product(3)]);
        assert_eq!(product, Product(6));
    }

    #[rstest]
    fn combine_all_empty_returns_identity() {
        let total: String = Monoid::combine_all(Vec::new());
        assert_eq!(total, "");
    }

    #[rstest]
    fn tuple_empty_is_componentwise() {
        let empty: (Sum<i32>, String) = Monoid::empty();
        assert_eq!(empty, (Sum(0), String::new()));
    }
}
