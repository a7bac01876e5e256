//! Newtype wrappers selecting a combination strategy.
//!
//! A numeric type has more than one lawful way to combine: addition,
//! multiplication, maximum, minimum. Rather than privileging one, this
//! module provides zero-cost wrappers that each pick a single strategy for
//! their `Semigroup`/`Monoid` instances:
//!
//! - [`Sum`]: combine by addition, empty is zero
//! - [`Product`]: combine by multiplication, empty is one
//! - [`Max`]: combine by maximum, empty is the minimum bound
//! - [`Min`]: combine by minimum, empty is the maximum bound
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Foldable, Max, Sum};
//!
//! let values = vec![3, 1, 4, 1, 5];
//! let total: Sum<i32> = values.clone().fold_map(Sum);
//! let largest: Max<i32> = values.fold_map(Max);
//! assert_eq!(total.0, 14);
//! assert_eq!(largest.0, 5);
//! ```

/// Wrapper whose instances combine by addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Wraps a value.
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

/// Wrapper whose instances combine by multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Wraps a value.
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

/// Wrapper whose instances combine by taking the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Max<A>(pub A);

impl<A> Max<A> {
    /// Wraps a value.
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Max<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

/// Wrapper whose instances combine by taking the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Min<A>(pub A);

impl<A> Min<A> {
    /// Wraps a value.
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Min<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

/// Types with a minimum and maximum value.
///
/// Used as the source of identity elements for [`Max`] and [`Min`]: the
/// empty `Max` is the minimum bound and the empty `Min` is the maximum
/// bound.
pub trait Bounded {
    /// The smallest value of the type.
    fn min_value() -> Self;

    /// The largest value of the type.
    fn max_value() -> Self;
}

macro_rules! impl_bounded {
    ($($type:ty),*) => {
        $(
            impl Bounded for $type {
                fn min_value() -> Self {
                    <$type>::MIN
                }

                fn max_value() -> Self {
                    <$type>::MAX
                }
            }
        )*
    };
}

impl_bounded!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for char {
    fn min_value() -> Self {
        '\0'
    }

    fn max_value() -> Self {
        char::MAX
    }
}

impl Bounded for bool {
    fn min_value() -> Self {
        false
    }

    fn max_value() -> Self {
        true
    }
}

/// Types with a multiplicative identity.
///
/// Used as the source of the empty element for [`Product`].
pub trait One {
    /// The multiplicative identity of the type.
    fn one() -> Self;
}

macro_rules! impl_one {
    ($($type:ty => $one:expr),*) => {
        $(
            impl One for $type {
                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_one!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0
);
