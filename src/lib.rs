//! # kindred
//!
//! Algebraic type classes and pure effect types for Rust.
//!
//! ## Overview
//!
//! This library provides the core abstractions of typed functional
//! programming as they are usually factored in a standard library:
//!
//! - **Capability contracts**: Functor, Applicative, Monad, Foldable,
//!   Traversable, Invariant, Comonad — traits any data type may satisfy,
//!   each carrying algebraic laws its instances must obey.
//! - **Generic combinators**: operations derived once from the contracts
//!   (nested composition of applicatives and foldables, `intercalate`,
//!   effectful folds) rather than per data type.
//! - **Concrete data types**: `State`, `Store`, `Predicate`, `Writer`,
//!   `Reader`, `IO`, `ReaderIO` — each a pure value describing a deferred
//!   computation, wired to the contracts above.
//! - **Monad transformers**: `WriterT` and `ReaderT` lift a base monad into
//!   a composite that also carries an accumulator or an environment.
//!
//! Every operation is a total, synchronous, pure function over immutable
//! values. Nothing here panics, blocks, or performs I/O on its own; `IO`
//! and `ReaderIO` merely *describe* deferred effects, which run only when
//! the caller invokes an explicit runner.
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits and generic combinators
//! - `effect`: concrete effect types and monad transformers
//!
//! ## Example
//!
//! ```rust
//! use kindred::effect::State;
//!
//! let computation: State<i32, i32> = State::get()
//!     .flat_map(|current| State::put(current + 1).then(State::pure(current)));
//!
//! let (result, final_state) = computation.run(10);
//! assert_eq!(result, 10);
//! assert_eq!(final_state, 11);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kindred::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;
