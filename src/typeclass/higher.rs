//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust has no native notion of "a type parametrized by a type
//! constructor": there is no way to write a trait abstracting over
//! `Option<_>` and `Vec<_>` as constructors rather than as fully applied
//! types. This module provides the [`TypeConstructor`] trait, a GAT-based
//! encoding of that idea, which every capability contract in this crate
//! (Functor, Applicative, Monad, ...) builds on.
//!
//! # Example
//!
//! ```rust
//! use kindred::typeclass::TypeConstructor;
//!
//! // Abstract over the container while swapping its element type.
//! fn rebuild<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = rebuild(Some(42));
//! assert_eq!(none, None);
//! ```

/// A trait representing a type constructor.
///
/// `TypeConstructor` emulates higher-kinded types using Generic Associated
/// Types. An implementing type is a constructor applied to some element
/// type `A` — for example `Option<A>` or `Vec<A>` — and exposes both the
/// current element type and the same constructor reapplied to any other
/// element type.
///
/// # Associated Types
///
/// - `Inner`: the element type this constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B` instead.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is the
///    same type as `F`.
///
/// # Example
///
/// ```rust
/// use kindred::typeclass::TypeConstructor;
///
/// fn expects_ints<T: TypeConstructor<Inner = i32>>() {}
/// expects_ints::<Vec<i32>>();
/// ```
pub trait TypeConstructor {
    /// The element type this type constructor is applied to.
    ///
    /// For `Option<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different element type `B`.
    ///
    /// For `Option<i32>`, `WithType<String>` is `Option<String>`. The
    /// `TypeConstructor<Inner = B>` bound keeps the result usable for
    /// further transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}
