//! Traversable type class - mapping with effects and collecting results.
//!
//! This module provides the `Traversable` trait, which represents types
//! that can have an effectful function applied to each element while
//! collecting the results inside the effect, and
//! [`TraversableWithIndex`], which additionally hands each element's
//! position to the function.
//!
//! # Motivation
//!
//! Consider a `Vec<String>` where you want to parse each string as an
//! integer. The parsing function returns `Option<i32>` (or
//! `Result<i32, E>`). You want:
//! - If all parses succeed: `Some(Vec<i32>)` containing all results
//! - If any parse fails: `None` (or the first error)
//!
//! This is exactly what `traverse` does.
//!
//! # Limitations in Rust
//!
//! Rust lacks Higher-Kinded Types (HKT), which would allow a single
//! generic `traverse` method for any `Applicative`. Instead, specialized
//! methods cover the most common effect types:
//!
//! - `traverse_option`: For functions returning `Option<B>`
//! - `traverse_result`: For functions returning `Result<B, E>`
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Traversable;
//!
//! let strings = vec!["1", "2", "3"];
//! let numbers: Option<Vec<i32>> = strings.traverse_option(|s| s.parse().ok());
//! assert_eq!(numbers, Some(vec![1, 2, 3]));
//!
//! let with_error = vec!["1", "not a number", "3"];
//! let result: Option<Vec<i32>> = with_error.traverse_option(|s| s.parse().ok());
//! assert_eq!(result, None);
//! ```

use super::foldable::Foldable;
use super::functor::{Functor, FunctorWithIndex};
use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for structures that can be traversed with effects.
///
/// # Laws
///
/// Expressed informally, since Rust cannot state them generically:
///
/// ## Identity
///
/// ```text
/// traverse(Identity) == fmap(Identity)
/// ```
///
/// ## Naturality
///
/// ```text
/// transform(traverse(f)) == traverse(transform . f)
/// ```
///
/// ## Composition
///
/// ```text
/// traverse(Compose . fmap(g) . f) == Compose . fmap(traverse(g)) . traverse(f)
/// ```
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Traversable;
///
/// fn validate_positive(number: i32) -> Result<i32, &'static str> {
///     if number > 0 { Ok(number) } else { Err("not positive") }
/// }
///
/// let all_positive = vec![1, 2, 3].traverse_result(validate_positive);
/// assert_eq!(all_positive, Ok(vec![1, 2, 3]));
///
/// let with_negative = vec![1, -2, 3].traverse_result(validate_positive);
/// assert_eq!(with_negative, Err("not positive"));
/// ```
pub trait Traversable: Functor + Foldable {
    /// Applies a fallible function to each element, collecting results.
    ///
    /// Returns `None` if the function fails on any element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Traversable;
    ///
    /// let numbers: Option<Vec<i32>> =
    ///     vec!["1", "2"].traverse_option(|s| s.parse().ok());
    /// assert_eq!(numbers, Some(vec![1, 2]));
    /// ```
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Option<B>;

    /// Applies a function returning `Result` to each element, collecting
    /// results.
    ///
    /// Returns the first error if the function fails on any element.
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Result<B, E>;

    /// Turns a structure of `Option`s inside out.
    ///
    /// Converts `Self<Option<A>>` to `Option<Self<A>>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Traversable;
    ///
    /// let values: Vec<Option<i32>> = vec![Some(1), Some(2)];
    /// assert_eq!(values.sequence_option(), Some(vec![1, 2]));
    ///
    /// let broken: Vec<Option<i32>> = vec![Some(1), None];
    /// assert_eq!(broken.sequence_option(), None);
    /// ```
    fn sequence_option(self) -> Option<Self::WithType<<Self::Inner as TypeConstructor>::Inner>>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Option<<Self::Inner as TypeConstructor>::Inner>>,
    {
        self.traverse_option(Into::into)
    }

    /// Turns a structure of `Result`s inside out.
    ///
    /// Converts `Self<Result<A, E>>` to `Result<Self<A>, E>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Traversable;
    ///
    /// let values: Vec<Result<i32, &str>> = vec![Ok(1), Err("error")];
    /// let result: Result<Vec<i32>, _> = values.sequence_result();
    /// assert_eq!(result, Err("error"));
    /// ```
    fn sequence_result<E>(
        self,
    ) -> Result<Self::WithType<<Self::Inner as TypeConstructor>::Inner>, E>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Result<<Self::Inner as TypeConstructor>::Inner, E>>,
    {
        self.traverse_result(Into::into)
    }

    /// Applies an effectful function for its effects only, discarding
    /// results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Traversable;
    ///
    /// let all_positive = vec![1, 2, 3]
    ///     .for_each_option(|element| (element > 0).then_some(()));
    /// assert_eq!(all_positive, Some(()));
    /// ```
    fn for_each_option<F>(self, mut function: F) -> Option<()>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Option<()>,
    {
        self.traverse_option(&mut function).map(|_| ())
    }

    /// Applies a `Result`-returning function for its effects only,
    /// discarding results.
    fn for_each_result<E, F>(self, mut function: F) -> Result<(), E>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Result<(), E>,
    {
        self.traverse_result(&mut function).map(|_| ())
    }
}

/// A type class for structures traversable with access to each element's
/// index.
///
/// The index type comes from [`FunctorWithIndex`], so the same positions
/// seen by `fmap_with_index` are handed to the effectful function here.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::TraversableWithIndex;
///
/// let labelled = vec!["a", "b"]
///     .traverse_option_with_index(|index, element| Some(format!("{index}:{element}")));
/// assert_eq!(labelled, Some(vec!["0:a".to_string(), "1:b".to_string()]));
/// ```
pub trait TraversableWithIndex: FunctorWithIndex + Traversable {
    /// Applies a fallible function to each element together with its
    /// index.
    ///
    /// Returns `None` on the first failing element.
    fn traverse_option_with_index<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        Self: Sized,
        F: FnMut(Self::Index, Self::Inner) -> Option<B>;

    /// Applies a `Result`-returning function to each element together
    /// with its index.
    ///
    /// Returns the first error encountered.
    fn traverse_result_with_index<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        Self: Sized,
        F: FnMut(Self::Index, Self::Inner) -> Result<B, E>;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Traversable for Option<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Some(None),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Ok(None),
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Traversable for Result<T, E> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Result<B, E>>
    where
        F: FnMut(T) -> Option<B>,
    {
        match self {
            Ok(element) => function(element).map(Ok),
            Err(error) => Some(Err(error)),
        }
    }

    fn traverse_result<B, E2, F>(self, mut function: F) -> Result<Result<B, E>, E2>
    where
        F: FnMut(T) -> Result<B, E2>,
    {
        match self {
            Ok(element) => function(element).map(Ok),
            Err(error) => Ok(Err(error)),
        }
    }
}

// =============================================================================
// Vec<A> Implementation
//
// The loops are deliberate: traversal walks the elements iteratively, so
// long inputs never grow the call stack.
// =============================================================================

impl<A> Traversable for Vec<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Vec<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        let mut result = Vec::with_capacity(self.len());
        for element in self {
            match function(element) {
                Some(value) => result.push(value),
                None => return None,
            }
        }
        Some(result)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        let mut result = Vec::with_capacity(self.len());
        for element in self {
            match function(element) {
                Ok(value) => result.push(value),
                Err(error) => return Err(error),
            }
        }
        Ok(result)
    }
}

impl<A> TraversableWithIndex for Vec<A> {
    fn traverse_option_with_index<B, F>(self, mut function: F) -> Option<Vec<B>>
    where
        F: FnMut(usize, A) -> Option<B>,
    {
        let mut result = Vec::with_capacity(self.len());
        for (index, element) in self.into_iter().enumerate() {
            match function(index, element) {
                Some(value) => result.push(value),
                None => return None,
            }
        }
        Some(result)
    }

    fn traverse_result_with_index<B, E, F>(self, mut function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(usize, A) -> Result<B, E>,
    {
        let mut result = Vec::with_capacity(self.len());
        for (index, element) in self.into_iter().enumerate() {
            match function(index, element) {
                Ok(value) => result.push(value),
                Err(error) => return Err(error),
            }
        }
        Ok(result)
    }
}

// =============================================================================
// Box<A> Implementation
// =============================================================================

impl<A> Traversable for Box<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Box<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        function(*self).map(Box::new)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Box<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        function(*self).map(Box::new)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Traversable for Identity<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Identity<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        function(self.0).map(Identity)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Identity<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        function(self.0).map(Identity)
    }
}
