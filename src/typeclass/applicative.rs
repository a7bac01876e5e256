//! Applicative type class - applying functions within contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor`
//! with the ability to:
//!
//! - Lift pure values into the context (`pure`)
//! - Combine multiple independent values in the context (`map2`, `map3`)
//! - Apply a wrapped function to a wrapped argument (`apply`)
//! - Combine two *nested* contexts at once (`map2_nested`)
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Associative Composition Law
//!
//! Applying a lifted composition equals applying argument by argument:
//!
//! ```text
//! fbc.fmap(|bc| |ab| |a| bc(ab(a))).apply(fab).apply(fa)
//!     == fbc.apply(fab.apply(fa))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Applicative;
//!
//! let a = Some(1);
//! let b = Some(2);
//! assert_eq!(a.map2(b, |x, y| x + y), Some(3));
//!
//! let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
//! assert_eq!(function.apply(Some(41)), Some(42));
//! ```

use super::functor::Functor;
use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for types that support lifting values and combining
/// contexts.
///
/// `Applicative` extends `Functor` with `pure` and `map2`; all other
/// operations derive from those two.
///
/// # Laws
///
/// See the [module documentation](self) for the identity, homomorphism,
/// interchange, and associative-composition laws.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Applicative;
///
/// let x: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(x, Some(42));
///
/// let sum = Some(3).map2(Some(4), |x, y| x + y);
/// assert_eq!(sum, Some(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// Both computations are independent of each other; only their results
    /// are combined. If either fails (in the sense appropriate to the
    /// instance), the combination fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    /// assert_eq!(Some(1).map2(None::<i32>, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Applicative;
    ///
    /// let sum = Some(1).map3(Some(2), Some(3), |x, y, z| x + y + z);
    /// assert_eq!(sum, Some(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// Equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("hello")), Some((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both applicatives and keeps only the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_left(Some(2)), Some(1));
    /// assert_eq!(Some(1).product_left(None::<i32>), None);
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both applicatives and keeps only the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_right(Some(2)), Some(2));
    /// assert_eq!(None::<i32>.product_right(Some(2)), None);
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// Available when `Self` contains a function type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.apply(Some(5)), Some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;

    /// Combines two nested applicative values, level by level.
    ///
    /// Given `F<G<A>>` and `F<G<B>>` where the inner shape `G` is itself
    /// applicative, combines at both levels and yields `F<G<C>>`. This is
    /// the composed instance for the nested shape: the outer structure is
    /// combined first, then each pair of inner structures, preserving
    /// outer-then-inner order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Applicative;
    ///
    /// let left: Option<Option<i32>> = Some(Some(2));
    /// let right: Option<Option<i32>> = Some(Some(3));
    /// assert_eq!(left.map2_nested(right, |a, b| a * b), Some(Some(6)));
    ///
    /// let inner_missing: Option<Option<i32>> = Some(None);
    /// assert_eq!(
    ///     inner_missing.map2_nested(Some(Some(3)), |a: i32, b| a * b),
    ///     Some(None)
    /// );
    /// ```
    #[inline]
    fn map2_nested<B, C, F>(
        self,
        other: Self::WithType<<Self::Inner as TypeConstructor>::WithType<B>>,
        function: F,
    ) -> Self::WithType<<Self::Inner as TypeConstructor>::WithType<C>>
    where
        Self: Sized,
        Self::Inner: Applicative,
        F: FnOnce(<Self::Inner as TypeConstructor>::Inner, B) -> C,
    {
        self.map2(other, |inner_left, inner_right| {
            inner_left.map2(inner_right, function)
        })
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Ok(a), Ok(b), Ok(c)) => Ok(function(a, b, c)),
            (Err(error), _, _) | (_, Err(error), _) | (_, _, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Ok(function), Ok(b)) => Ok(function(b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Vec<A> Implementation
//
// Note: Vec requires Clone bounds for map2/map3/apply because the instance
// is the cartesian product of all elements. This is expressed through a
// separate trait to keep the Applicative interface clean with FnOnce.
// =============================================================================

/// Extension trait for Vec to provide Applicative-like operations.
///
/// Vec's Applicative instance represents non-deterministic computation:
/// combining two Vecs produces all possible combinations (cartesian
/// product).
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::ApplicativeVec;
///
/// let pairs = vec![1, 2].map2(vec![10, 20], |a, b| a + b);
/// assert_eq!(pairs, vec![11, 21, 12, 22]);
/// ```
pub trait ApplicativeVec: Sized {
    /// The inner type of the Vec.
    type VecInner;

    /// Lifts a value into a single-element Vec.
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    /// Combines every pair of elements from both Vecs.
    fn map2<B: Clone, C, F>(self, other: Vec<B>, function: F) -> Vec<C>
    where
        F: FnMut(Self::VecInner, B) -> C;

    /// Applies every function in `self` to every element in `other`.
    fn apply<B: Clone, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        Self::VecInner: Fn(B) -> Output;
}

impl<A: Clone> ApplicativeVec for Vec<A> {
    type VecInner = A;

    fn map2<B: Clone, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        F: FnMut(A, B) -> C,
    {
        let mut result = Vec::with_capacity(self.len() * other.len());
        for a in self {
            for b in &other {
                result.push(function(a.clone(), b.clone()));
            }
        }
        result
    }

    fn apply<B: Clone, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        A: Fn(B) -> Output,
    {
        let mut result = Vec::with_capacity(self.len() * other.len());
        for function in &self {
            for b in &other {
                result.push(function(b.clone()));
            }
        }
        result
    }
}

// =============================================================================
// Box<T> Implementation
// =============================================================================

impl<T> Applicative for Box<T> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Box<B>, function: F) -> Box<C>
    where
        F: FnOnce(T, B) -> C,
    {
        Box::new(function(*self, *other))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Box<B>, third: Box<C>, function: F) -> Box<D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        Box::new(function(*self, *second, *third))
    }

    #[inline]
    fn apply<B, Output>(self, other: Box<B>) -> Box<Output>
    where
        T: FnOnce(B) -> Output,
    {
        Box::new((*self)(*other))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Identity<B>,
        third: Identity<C>,
        function: F,
    ) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity((self.0)(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Option<A> Tests
    // =========================================================================

    #[rstest]
    fn option_pure_wraps_value() {
        let x: Option<i32> = <Option<()>>::pure(42);
        assert_eq!(x, Some(42));
    }

    #[rstest]
    fn option_map2_combines_values() {
        assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    }

    #[rstest]
    fn option_map2_propagates_none() {
        assert_eq!(Some(1).map2(None::<i32>, |x, y| x + y), None);
        assert_eq!(None::<i32>.map2(Some(2), |x, y| x + y), None);
    }

    #[rstest]
    fn option_map3_combines_values() {
        assert_eq!(Some(1).map3(Some(2), Some(3), |x, y, z| x + y + z), Some(6));
    }

    #[rstest]
    fn option_product_and_projections() {
        assert_eq!(Some(1).product(Some("hello")), Some((1, "hello")));
        assert_eq!(Some(1).product_left(Some(2)), Some(1));
        assert_eq!(Some(1).product_right(Some(2)), Some(2));
    }

    #[rstest]
    fn option_apply_applies_wrapped_function() {
        let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
        assert_eq!(function.apply(Some(5)), Some(6));

        let missing: Option<fn(i32) -> i32> = None;
        assert_eq!(missing.apply(Some(5)), None);
    }

    // =========================================================================
    // Nested composition Tests
    // =========================================================================

    #[rstest]
    fn option_map2_nested_combines_both_levels() {
        let left: Option<Option<i32>> = Some(Some(2));
        let right: Option<Option<i32>> = Some(Some(3));
        assert_eq!(left.map2_nested(right, |a, b| a * b), Some(Some(6)));
    }

    #[rstest]
    fn option_map2_nested_inner_failure_stays_inner() {
        let inner_missing: Option<Option<i32>> = Some(None);
        assert_eq!(
            inner_missing.map2_nested(Some(Some(3)), |a: i32, b| a * b),
            Some(None)
        );
    }

    #[rstest]
    fn option_map2_nested_outer_failure_wins() {
        let outer_missing: Option<Option<i32>> = None;
        assert_eq!(
            outer_missing.map2_nested(Some(Some(3)), |a: i32, b| a * b),
            None
        );
    }

    #[rstest]
    fn result_of_option_map2_nested() {
        let left: Result<Option<i32>, &str> = Ok(Some(2));
        let right: Result<Option<i32>, &str> = Ok(Some(3));
        assert_eq!(left.map2_nested(right, |a, b| a + b), Ok(Some(5)));

        let failed: Result<Option<i32>, &str> = Err("boom");
        assert_eq!(
            failed.map2_nested(Ok(Some(3)), |a: i32, b| a + b),
            Err("boom")
        );
    }

    // =========================================================================
    // Vec<A> Tests (ApplicativeVec)
    // =========================================================================

    #[rstest]
    fn vec_map2_is_cartesian() {
        let result = vec![1, 2].map2(vec![10, 20], |a, b| a + b);
        assert_eq!(result, vec![11, 21, 12, 22]);
    }

    #[rstest]
    fn vec_apply_applies_all_functions() {
        let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x * 10];
        let result = ApplicativeVec::apply(functions, vec![1, 2]);
        assert_eq!(result, vec![2, 3, 10, 20]);
    }

    // =========================================================================
    // Law Tests
    // =========================================================================

    /// Homomorphism: pure(f).apply(pure(x)) == pure(f(x))
    #[rstest]
    fn option_homomorphism_law() {
        let function = |x: i32| x + 1;
        let left: Option<i32> = <Option<()>>::pure(function).apply(<Option<()>>::pure(5));
        let right: Option<i32> = <Option<()>>::pure(function(5));
        assert_eq!(left, right);
    }

    /// Identity: pure(|x| x).apply(v) == v
    #[rstest]
    fn option_identity_law() {
        let value = Some(42);
        let identity_function: Option<fn(i32) -> i32> = <Option<()>>::pure(|x| x);
        assert_eq!(identity_function.apply(value), value);
    }

    /// Associative composition, applied three ways on concrete values.
    #[rstest]
    fn option_associative_composition_law() {
        let fa = Some(5);
        let fab: Option<fn(i32) -> i32> = Some(|x| x + 1);
        let fbc: Option<fn(i32) -> i32> = Some(|x| x * 2);

        // fbc.fmap(compose).apply(fab).apply(fa)
        let left = fbc
            .fmap(|bc: fn(i32) -> i32| {
                move |ab: fn(i32) -> i32| move |a: i32| bc(ab(a))
            })
            .apply(fab)
            .apply(fa);
        // fbc.apply(fab.apply(fa))
        let right = fbc.apply(fab.apply(fa));

        assert_eq!(left, right);
        assert_eq!(left, Some(12));
    }

    #[rstest]
    fn identity_applicative_behaves_like_function_application() {
        let result = Identity::new(3).map2(Identity::new(4), |a, b| a * b);
        assert_eq!(result, Identity::new(12));
    }
}
