//! Foldable type class - folding over data structures.
//!
//! This module provides the `Foldable` trait, which represents types that
//! can have their elements reduced (folded) into a single value.
//!
//! # Laws
//!
//! While `Foldable` does not have formal laws as strict as other type
//! classes, implementations should satisfy these properties:
//!
//! ## Consistency between `fold_left` and `fold_right`
//!
//! For associative operations, `fold_left` and `fold_right` should produce
//! the same result:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))  // when f is associative
//! ```
//!
//! ## Consistency with `to_list`
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().fold_left(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Foldable;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! let none_value: Option<i32> = None;
//! let result = none_value.fold_left(5, |accumulator, element| accumulator + element);
//! assert_eq!(result, 5);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;
use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Provided Methods
///
/// All other methods have default implementations based on `fold_left`:
///
/// - `fold_map`: Map each element to a `Monoid` and combine results
/// - `fold_left_nested`: Fold through one extra layer of structure
/// - `fold_left_option` / `fold_left_result`: Fold with a fallible step
/// - `intercalate`: Combine monoidal elements with a separator between
/// - `is_empty`, `length`, `to_list`, `find`, `exists`, `for_all`
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{Foldable, Sum};
///
/// let values = vec![1, 2, 3, 4, 5];
/// let sum: Sum<i32> = values.fold_map(Sum);
/// assert_eq!(sum.0, 15);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// This is equivalent to Rust's `Iterator::fold` method.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// let sum = vec![1, 2, 3].fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B,
        Self: Sized;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// let joined = vec!["a", "b", "c"]
    ///     .fold_right(String::new(), |element, accumulator| {
    ///         format!("{element}{accumulator}")
    ///     });
    /// assert_eq!(joined, "abc");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B,
        Self: Sized;

    /// Maps each element to a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Foldable, Product};
    ///
    /// let product: Product<i32> = vec![1, 2, 3, 4].fold_map(Product);
    /// assert_eq!(product.0, 24);
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Folds through one extra layer of foldable structure.
    ///
    /// Given a structure of structures (`F<G<A>>` where `G` is itself
    /// foldable), folds over every innermost element in outer-then-inner
    /// order, as if the two layers were a single flattened structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// let nested = vec![Some(1), None, Some(3)];
    /// let sum = nested.fold_left_nested(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 4);
    /// ```
    fn fold_left_nested<B, F>(self, init: B, mut function: F) -> B
    where
        Self: Sized,
        Self::Inner: Foldable,
        F: FnMut(B, <Self::Inner as TypeConstructor>::Inner) -> B,
    {
        self.fold_left(init, |accumulator, inner| {
            inner.fold_left(accumulator, &mut function)
        })
    }

    /// Folds with a step that may fail with `None`.
    ///
    /// Once a step returns `None`, every later element still gets visited
    /// but the accumulator stays `None`; the final result is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// let checked_sum = vec![1, 2, 3].fold_left_option(0, |accumulator: i32, element| {
    ///     accumulator.checked_add(element)
    /// });
    /// assert_eq!(checked_sum, Some(6));
    ///
    /// let overflowed = vec![i32::MAX, 1].fold_left_option(0, |accumulator: i32, element| {
    ///     accumulator.checked_add(element)
    /// });
    /// assert_eq!(overflowed, None);
    /// ```
    fn fold_left_option<B, F>(self, init: B, mut function: F) -> Option<B>
    where
        Self: Sized,
        F: FnMut(B, Self::Inner) -> Option<B>,
    {
        self.fold_left(Some(init), |accumulator, element| {
            accumulator.and_then(|acc| function(acc, element))
        })
    }

    /// Folds with a step that may fail with an error.
    ///
    /// Once a step returns `Err`, every later element still gets visited
    /// but the accumulator stays `Err`; the first error is the final
    /// result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// let parsed = vec!["1", "2", "x"].fold_left_result(0, |accumulator, element| {
    ///     element
    ///         .parse::<i32>()
    ///         .map(|n| accumulator + n)
    ///         .map_err(|_| element)
    /// });
    /// assert_eq!(parsed, Err("x"));
    /// ```
    fn fold_left_result<B, E, F>(self, init: B, mut function: F) -> Result<B, E>
    where
        Self: Sized,
        F: FnMut(B, Self::Inner) -> Result<B, E>,
    {
        self.fold_left(Ok(init), |accumulator, element| {
            accumulator.and_then(|acc| function(acc, element))
        })
    }

    /// Combines monoidal elements, inserting a separator strictly between
    /// consecutive elements.
    ///
    /// No separator appears before the first element or after the last, and
    /// an empty structure yields the monoid's empty value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// let joined = vec!["a".to_string(), "b".to_string(), "c".to_string()]
    ///     .intercalate(", ".to_string());
    /// assert_eq!(joined, "a, b, c");
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(empty.intercalate(", ".to_string()), "");
    /// ```
    fn intercalate(self, separator: Self::Inner) -> Self::Inner
    where
        Self: Sized,
        Self::Inner: Monoid + Clone,
    {
        let (_, result) = self.fold_left(
            (true, Self::Inner::empty()),
            |(first, accumulator), element| {
                if first {
                    (false, accumulator.combine(element))
                } else {
                    (false, accumulator.combine(separator.clone()).combine(element))
                }
            },
        );
        result
    }

    /// Returns whether the structure contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// assert!(!Some(5).is_empty());
    /// assert!(None::<i32>.is_empty());
    /// ```
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// assert_eq!(vec![1, 2, 3].length(), 3);
    /// assert_eq!(None::<i32>.length(), 0);
    /// ```
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` containing all elements.
    ///
    /// The order of elements is the fold order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// assert_eq!(Some(42).to_list(), vec![42]);
    /// assert_eq!(None::<i32>.to_list(), Vec::<i32>::new());
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3, 4, 5];
    /// assert_eq!(values.clone().find(|element| *element > 3), Some(4));
    /// assert_eq!(values.find(|element| *element > 10), None);
    /// ```
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// assert!(values.exists(|element| *element > 2));
    /// assert!(!values.exists(|element| *element > 10));
    /// ```
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// Returns `true` for an empty structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// let values = vec![2, 4, 6, 8];
    /// assert!(values.for_all(|element| *element % 2 == 0));
    /// assert!(!values.for_all(|element| *element > 5));
    /// ```
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    fn is_empty(&self) -> bool {
        self.is_none()
    }

    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Foldable for Result<T, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Ok(element) => function(init, element),
            Err(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Ok(element) => function(element, init),
            Err(_) => init,
        }
    }

    fn is_empty(&self) -> bool {
        self.is_err()
    }

    fn length(&self) -> usize {
        usize::from(self.is_ok())
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Foldable for Vec<A> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn to_list(self) -> Self {
        self
    }
}

// =============================================================================
// Box<A> Implementation
// =============================================================================

impl<A> Foldable for Box<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, *self)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(*self, init)
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn length(&self) -> usize {
        1
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Foldable for Identity<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.into_inner())
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.into_inner(), init)
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn length(&self) -> usize {
        1
    }
}
