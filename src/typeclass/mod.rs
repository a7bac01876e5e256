//! Type class traits for functional programming abstractions.
//!
//! This module provides the fundamental type classes (traits) that form
//! the foundation of functional programming in Rust:
//!
//! - [`Functor`]: Mapping over container values
//! - [`FunctorMut`]: Mapping with mutable functions for multi-element containers
//! - [`FunctorWithIndex`]: Mapping with access to each element's position
//! - [`Invariant`]: Mapping with conversion functions in both directions
//! - [`Applicative`]: Applying functions within containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Comonad`]: Extracting values and extending whole-context functions
//! - [`Foldable`]: Folding over structures to produce summary values
//! - [`Traversable`]: Traversing structures with effects
//! - [`TraversableWithIndex`]: Traversing with access to each position
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing traits like Functor and Monad to be defined
//! generically over the container.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Identity`]: Identity wrapper type (identity functor)
//! - [`Sum`], [`Product`]: Numeric wrappers for different monoid operations
//! - [`Max`], [`Min`]: Bounded numeric wrappers
//! - [`Bounded`]: Trait for types with minimum and maximum values
//! - [`One`]: Trait for types with a multiplicative identity
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use kindred::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//! ```
//!
//! ## Using Monoid
//!
//! ```rust
//! use kindred::typeclass::{Monoid, Sum};
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```
//!
//! ## Using Applicative
//!
//! ```rust
//! use kindred::typeclass::Applicative;
//!
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```

mod applicative;
mod comonad;
mod foldable;
mod functor;
mod higher;
mod identity;
mod invariant;
mod monad;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;

pub use applicative::{Applicative, ApplicativeVec};
pub use comonad::Comonad;
pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut, FunctorWithIndex};
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use invariant::Invariant;
pub use monad::{Monad, MonadVec};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::{Traversable, TraversableWithIndex};
pub use wrappers::{Bounded, Max, Min, One, Product, Sum};
