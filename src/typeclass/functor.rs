//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value(s) while preserving the
//! structure, plus two refinements:
//!
//! - [`FunctorMut`] for multi-element containers whose mapping function must
//!   be callable more than once, and
//! - [`FunctorWithIndex`] for containers whose elements carry a position,
//!   where the mapping function also receives that position.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor returns an equivalent functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence equals mapping their composition:
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! `FunctorWithIndex` obeys the same two laws with the index argument
//! ignored by the identity function.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! let transformed: Option<String> = some_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for types that can have a function mapped over their contents.
///
/// `Functor` represents the ability to apply a function to the value(s)
/// inside a container while preserving the container's structure.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// let y: Option<i32> = x.fmap(|n| n * 2);
    /// assert_eq!(y, Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor should not be consumed, or when the inner
    /// type does not implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Functor;
    ///
    /// let x: Option<String> = Some("hello".to_string());
    /// let y: Option<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Some(5));
    /// // x is still available here
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// Equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.replace("replaced"), Some("replaced"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.void(), Some(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }

    /// Applies a wrapped function to a plain argument.
    ///
    /// The dual reading of `fmap`: instead of mapping a function over a
    /// wrapped value, `flap` maps "apply to `argument`" over a wrapped
    /// function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Functor;
    ///
    /// let wrapped_function: Option<fn(i32) -> i32> = Some(|n| n + 1);
    /// assert_eq!(wrapped_function.flap(41), Some(42));
    /// ```
    #[inline]
    fn flap<B, C>(self, argument: B) -> Self::WithType<C>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> C,
        B: 'static,
        C: 'static,
    {
        self.fmap(move |function| function(argument))
    }
}

/// An extension of `Functor` for containers with multiple elements.
///
/// `Functor::fmap` takes a `FnOnce`, which can only be called once;
/// containers like `Vec` need to apply the function to every element. This
/// trait provides `fmap_mut` which takes a `FnMut`.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::FunctorMut;
///
/// let numbers = vec![1, 2, 3];
/// let doubled: Vec<i32> = numbers.fmap_mut(|n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub trait FunctorMut: Functor {
    /// Applies a reusable function to each element in the functor.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a reusable function to references of each element.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

/// A functor whose elements carry a position, exposed to the mapping
/// function.
///
/// # Laws
///
/// 1. Identity: `fa.fmap_with_index(|_i, a| a) == fa`
/// 2. Composition: mapping `g(f)` with the index equals mapping `f` then
///    `g`, each receiving the same index.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::FunctorWithIndex;
///
/// let letters = vec!["a", "b", "c"];
/// let labeled: Vec<String> = letters.fmap_with_index(|index, letter| {
///     format!("{index}:{letter}")
/// });
/// assert_eq!(labeled, vec!["0:a", "1:b", "2:c"]);
/// ```
pub trait FunctorWithIndex: FunctorMut {
    /// The position type supplied to the mapping function.
    type Index;

    /// Applies a function to each element together with its position.
    fn fmap_with_index<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Index, Self::Inner) -> B;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Functor for Vec<T> {
    /// Maps a function over a single-element Vec.
    ///
    /// Note: for multi-element Vecs, use `fmap_mut` instead, as `FnOnce`
    /// can only be called once.
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnOnce(T) -> B,
    {
        let mut iter = self.into_iter();
        iter.next().map_or_else(Vec::new, |first| {
            let mut result = Vec::with_capacity(iter.len() + 1);
            result.push(function(first));
            // Remaining elements are dropped as FnOnce cannot be reused.
            result
        })
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnOnce(&T) -> B,
    {
        let mut iter = self.iter();
        iter.next().map_or_else(Vec::new, |first| {
            let mut result = Vec::with_capacity(self.len());
            result.push(function(first));
            result
        })
    }
}

impl<T> FunctorMut for Vec<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

impl<T> FunctorWithIndex for Vec<T> {
    type Index = usize;

    #[inline]
    fn fmap_with_index<B, F>(self, mut function: F) -> Vec<B>
    where
        F: FnMut(usize, T) -> B,
    {
        self.into_iter()
            .enumerate()
            .map(|(index, element)| function(index, element))
            .collect()
    }
}

// =============================================================================
// Box<T> Implementation
// =============================================================================

impl<T> Functor for Box<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(T) -> B,
    {
        Box::new(function(*self))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Box<B>
    where
        F: FnOnce(&T) -> B,
    {
        Box::new(function(self.as_ref()))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity(function(&self.0))
    }
}
