//! Predicate - a composable boolean test with a contravariant algebra.
//!
//! A `Predicate<A>` wraps a total function `&A -> bool`. Predicates combine
//! with [`Predicate::and`], [`Predicate::or`], and [`Predicate::not`], and
//! adapt to new input types with [`Predicate::contramap`]: a predicate is a
//! consumer of `A`, so a function `B -> A` turns a `Predicate<A>` into a
//! `Predicate<B>`.
//!
//! The [`Any`] and [`All`] wrappers lift predicates into the
//! [`Semigroup`]/[`Monoid`] algebra, so collections of predicates fold with
//! `combine_all`: `Any` folds with logical OR (identity: the constant-false
//! predicate), `All` with logical AND (identity: the constant-true
//! predicate).
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::Predicate;
//!
//! let positive = Predicate::new(|value: &i32| *value > 0);
//! let even = Predicate::new(|value: &i32| value % 2 == 0);
//!
//! let positive_and_even = positive.clone().and(even);
//! assert!(positive_and_even.test(&4));
//! assert!(!positive_and_even.test(&3));
//! assert!(!positive_and_even.test(&-2));
//!
//! let negative_or_zero = positive.not();
//! assert!(negative_or_zero.test(&0));
//! ```

use std::rc::Rc;

use crate::typeclass::{Monoid, Semigroup};

/// A total boolean test over values of type `A`.
pub struct Predicate<A>
where
    A: 'static,
{
    /// The wrapped test. Uses Rc so combinators can share it.
    test_function: Rc<dyn Fn(&A) -> bool>,
}

impl<A> Predicate<A>
where
    A: 'static,
{
    /// Creates a new predicate from a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Predicate;
    ///
    /// let non_empty = Predicate::new(|text: &String| !text.is_empty());
    /// assert!(non_empty.test(&"hello".to_string()));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&A) -> bool + 'static,
    {
        Self {
            test_function: Rc::new(function),
        }
    }

    /// A predicate that accepts every value.
    #[must_use]
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// A predicate that rejects every value.
    #[must_use]
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    /// Applies the predicate to a value.
    pub fn test(&self, value: &A) -> bool {
        (self.test_function)(value)
    }

    /// Logical negation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Predicate;
    ///
    /// let positive = Predicate::new(|value: &i32| *value > 0);
    /// assert!(positive.not().test(&-1));
    /// ```
    #[must_use]
    pub fn not(self) -> Self {
        Self::new(move |value| !self.test(value))
    }

    /// Logical conjunction. The result accepts only values both
    /// predicates accept.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |value| self.test(value) && other.test(value))
    }

    /// Logical disjunction. The result accepts values either predicate
    /// accepts.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(move |value| self.test(value) || other.test(value))
    }

    /// Adapts the predicate to a new input type.
    ///
    /// A predicate consumes its input, so mapping runs in the opposite
    /// direction of `fmap`: a function `B -> A` produces a
    /// `Predicate<B>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Predicate;
    ///
    /// let positive = Predicate::new(|value: &i32| *value > 0);
    /// let non_empty = positive.contramap(|text: &String| text.len() as i32);
    /// assert!(non_empty.test(&"hello".to_string()));
    /// assert!(!non_empty.test(&String::new()));
    /// ```
    pub fn contramap<B, F>(self, function: F) -> Predicate<B>
    where
        F: Fn(&B) -> A + 'static,
        B: 'static,
    {
        Predicate::new(move |value: &B| self.test(&function(value)))
    }
}

impl<A> Clone for Predicate<A>
where
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            test_function: Rc::clone(&self.test_function),
        }
    }
}

// =============================================================================
// Semigroup / Monoid Wrappers
// =============================================================================

/// Lifts predicates into the OR semigroup.
///
/// `combine` is logical disjunction; the monoid identity is the
/// constant-false predicate.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::{Any, Predicate};
/// use kindred::typeclass::Monoid;
///
/// let checks = vec![
///     Any::new(Predicate::new(|value: &i32| *value < 0)),
///     Any::new(Predicate::new(|value: &i32| *value > 100)),
/// ];
/// let out_of_range = Any::combine_all(checks).into_inner();
/// assert!(out_of_range.test(&-5));
/// assert!(out_of_range.test(&200));
/// assert!(!out_of_range.test(&50));
/// ```
pub struct Any<A>(Predicate<A>)
where
    A: 'static;

/// Lifts predicates into the AND semigroup.
///
/// `combine` is logical conjunction; the monoid identity is the
/// constant-true predicate.
pub struct All<A>(Predicate<A>)
where
    A: 'static;

impl<A> Any<A>
where
    A: 'static,
{
    /// Wraps a predicate.
    #[must_use]
    pub const fn new(predicate: Predicate<A>) -> Self {
        Self(predicate)
    }

    /// Unwraps the predicate.
    #[must_use]
    pub fn into_inner(self) -> Predicate<A> {
        self.0
    }
}

impl<A> All<A>
where
    A: 'static,
{
    /// Wraps a predicate.
    #[must_use]
    pub const fn new(predicate: Predicate<A>) -> Self {
        Self(predicate)
    }

    /// Unwraps the predicate.
    #[must_use]
    pub fn into_inner(self) -> Predicate<A> {
        self.0
    }
}

impl<A> Clone for Any<A>
where
    A: 'static,
{
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<A> Clone for All<A>
where
    A: 'static,
{
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<A> Semigroup for Any<A>
where
    A: 'static,
{
    fn combine(self, other: Self) -> Self {
        Self(self.0.or(other.0))
    }
}

impl<A> Monoid for Any<A>
where
    A: 'static,
{
    fn empty() -> Self {
        Self(Predicate::never())
    }
}

impl<A> Semigroup for All<A>
where
    A: 'static,
{
    fn combine(self, other: Self) -> Self {
        Self(self.0.and(other.0))
    }
}

impl<A> Monoid for All<A>
where
    A: 'static,
{
    fn empty() -> Self {
        Self(Predicate::always())
    }
}
