//! ReaderT - Reader Monad Transformer.
//!
//! ReaderT adds environment-reading capability to any monad. It transforms
//! a monad M into a monad whose computations also see a shared environment
//! R.
//!
//! # Overview
//!
//! `ReaderT<R, M>` encapsulates a function `R -> M<A>`. Composed
//! computations all see the same environment, while the inner monad
//! contributes its own effect (absence, failure, deferred execution).
//!
//! # Design Note
//!
//! Due to Rust's lack of Higher-Kinded Types (HKT), a single generic
//! implementation over all inner monads is not expressible. Instead,
//! specific methods cover the common inner monads (Option, Result, IO)
//! using the naming convention `method_option`, `method_result`,
//! `method_io`.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::ReaderT;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//! }
//!
//! fn get_port() -> ReaderT<Config, Option<u16>> {
//!     ReaderT::new(|config: Config| Some(config.port))
//! }
//!
//! assert_eq!(get_port().run(Config { port: 8080 }), Some(8080));
//! ```

use std::rc::Rc;

use super::IO;

/// A monad transformer that adds environment-reading capability.
///
/// `ReaderT<R, M>` represents a computation that, given an environment of
/// type `R`, produces a result wrapped in the inner monad `M`.
///
/// # Type Parameters
///
/// - `R`: The environment type (read-only context)
/// - `M`: The inner monad type (e.g., `Option<A>`, `Result<A, E>`, `IO<A>`)
pub struct ReaderT<R, M>
where
    R: 'static,
{
    /// The wrapped function from environment to inner monad.
    /// Uses Rc to allow cloning of the `ReaderT` for `flat_map`.
    run_function: Rc<dyn Fn(R) -> M>,
}

impl<R, M> ReaderT<R, M>
where
    R: 'static,
    M: 'static,
{
    /// Creates a new `ReaderT` from a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::ReaderT;
    ///
    /// let reader: ReaderT<i32, Option<i32>> =
    ///     ReaderT::new(|environment| Some(environment * 2));
    /// assert_eq!(reader.run(21), Some(42));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> M + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the `ReaderT` computation with the given environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::ReaderT;
    ///
    /// let reader: ReaderT<i32, Option<i32>> =
    ///     ReaderT::new(|environment| Some(environment + 1));
    /// assert_eq!(reader.run(41), Some(42));
    /// // ReaderT can be run multiple times
    /// assert_eq!(reader.run(0), Some(1));
    /// ```
    pub fn run(&self, environment: R) -> M {
        (self.run_function)(environment)
    }
}

impl<R, M> Clone for ReaderT<R, M>
where
    R: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

// =============================================================================
// Option-specific Methods
// =============================================================================

impl<R, A> ReaderT<R, Option<A>>
where
    R: 'static,
    A: 'static,
{
    /// Lifts a value into a present computation that ignores the
    /// environment.
    pub fn pure_option(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| Some(value.clone()))
    }

    /// Lifts an `Option` into `ReaderT`, ignoring the environment.
    pub fn lift_option(inner: Option<A>) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| inner.clone())
    }

    /// Maps a function over the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::ReaderT;
    ///
    /// let reader: ReaderT<i32, Option<i32>> =
    ///     ReaderT::new(|environment| Some(environment));
    /// assert_eq!(reader.fmap_option(|value| value * 2).run(21), Some(42));
    /// ```
    pub fn fmap_option<B, F>(self, function: F) -> ReaderT<R, Option<B>>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        ReaderT::new(move |environment| (original)(environment).map(&function))
    }

    /// Chains `ReaderT` computations over Option, sharing the
    /// environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::ReaderT;
    ///
    /// let reader: ReaderT<i32, Option<i32>> =
    ///     ReaderT::new(|environment| Some(environment));
    /// let chained = reader.flat_map_option(|value| {
    ///     ReaderT::new(move |environment| Some(value + environment))
    /// });
    /// assert_eq!(chained.run(10), Some(20));
    /// ```
    pub fn flat_map_option<B, F>(self, function: F) -> ReaderT<R, Option<B>>
    where
        F: Fn(A) -> ReaderT<R, Option<B>> + 'static,
        B: 'static,
        R: Clone,
    {
        let original = self.run_function;
        ReaderT::new(move |environment: R| {
            (original)(environment.clone()).and_then(|value| function(value).run(environment))
        })
    }

    /// Builds a computation from a projection of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::ReaderT;
    ///
    /// struct Config {
    ///     port: u16,
    /// }
    ///
    /// let get_port: ReaderT<Config, Option<u16>> =
    ///     ReaderT::asks_option(|config: &Config| config.port);
    /// assert_eq!(get_port.run(Config { port: 8080 }), Some(8080));
    /// ```
    pub fn asks_option<F>(projection: F) -> Self
    where
        F: Fn(&R) -> A + 'static,
    {
        Self::new(move |environment: R| Some(projection(&environment)))
    }

    /// Runs a computation with a modified environment.
    pub fn local_option<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let computation_function = computation.run_function;
        Self::new(move |environment| {
            let modified_environment = modifier(environment);
            (computation_function)(modified_environment)
        })
    }
}

impl<R> ReaderT<R, Option<R>>
where
    R: Clone + 'static,
{
    /// Returns the environment wrapped in `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::ReaderT;
    ///
    /// let reader: ReaderT<i32, Option<i32>> = ReaderT::ask_option();
    /// assert_eq!(reader.run(42), Some(42));
    /// ```
    #[must_use]
    pub fn ask_option() -> Self {
        Self::new(|environment: R| Some(environment))
    }
}

// =============================================================================
// Result-specific Methods
// =============================================================================

impl<R, A, E> ReaderT<R, Result<A, E>>
where
    R: 'static,
    A: 'static,
    E: 'static,
{
    /// Lifts a value into a successful computation that ignores the
    /// environment.
    pub fn pure_result(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| Ok(value.clone()))
    }

    /// Lifts a `Result` into `ReaderT`, ignoring the environment.
    pub fn lift_result(inner: Result<A, E>) -> Self
    where
        A: Clone,
        E: Clone,
    {
        Self::new(move |_| inner.clone())
    }

    /// Maps a function over the inner value, leaving errors untouched.
    pub fn fmap_result<B, F>(self, function: F) -> ReaderT<R, Result<B, E>>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        ReaderT::new(move |environment| (original)(environment).map(&function))
    }

    /// Chains `ReaderT` computations over Result, sharing the
    /// environment. The first error short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::ReaderT;
    ///
    /// let reader: ReaderT<i32, Result<i32, String>> =
    ///     ReaderT::new(|environment| Ok(environment));
    /// let chained = reader.flat_map_result(|value| {
    ///     ReaderT::new(move |environment| Ok(value + environment))
    /// });
    /// assert_eq!(chained.run(10), Ok(20));
    /// ```
    pub fn flat_map_result<B, F>(self, function: F) -> ReaderT<R, Result<B, E>>
    where
        F: Fn(A) -> ReaderT<R, Result<B, E>> + 'static,
        B: 'static,
        R: Clone,
    {
        let original = self.run_function;
        ReaderT::new(move |environment: R| {
            (original)(environment.clone()).and_then(|value| function(value).run(environment))
        })
    }

    /// Builds a successful computation from a projection of the
    /// environment.
    pub fn asks_result<F>(projection: F) -> Self
    where
        F: Fn(&R) -> A + 'static,
    {
        Self::new(move |environment: R| Ok(projection(&environment)))
    }

    /// Runs a computation with a modified environment.
    pub fn local_result<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let computation_function = computation.run_function;
        Self::new(move |environment| {
            let modified_environment = modifier(environment);
            (computation_function)(modified_environment)
        })
    }
}

impl<R, E> ReaderT<R, Result<R, E>>
where
    R: Clone + 'static,
    E: 'static,
{
    /// Returns the environment wrapped in `Ok`.
    #[must_use]
    pub fn ask_result() -> Self {
        Self::new(|environment: R| Ok(environment))
    }
}

// =============================================================================
// IO-specific Methods
// =============================================================================

impl<R, A> ReaderT<R, IO<A>>
where
    R: 'static,
    A: 'static,
{
    /// Lifts a value into a deferred computation that ignores the
    /// environment.
    pub fn pure_io(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| {
            let value = value.clone();
            IO::new(move || value)
        })
    }

    /// Lifts an `IO` action into `ReaderT`, ignoring the environment.
    ///
    /// The action is deferred per run, so the `ReaderT` stays reusable.
    pub fn lift_io<F>(action: F) -> Self
    where
        F: Fn() -> A + Clone + 'static,
    {
        Self::new(move |_| {
            let action = action.clone();
            IO::new(action)
        })
    }

    /// Maps a function over the eventual value.
    pub fn fmap_io<B, F>(self, function: F) -> ReaderT<R, IO<B>>
    where
        F: Fn(A) -> B + Clone + 'static,
        B: 'static,
    {
        let original = self.run_function;
        ReaderT::new(move |environment| {
            let function = function.clone();
            (original)(environment).fmap(move |value| function(value))
        })
    }

    /// Chains deferred `ReaderT` computations, sharing the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::{IO, ReaderT};
    ///
    /// let reader: ReaderT<i32, IO<i32>> =
    ///     ReaderT::new(|environment| IO::pure(environment));
    /// let chained = reader.flat_map_io(|value| {
    ///     ReaderT::new(move |environment| IO::pure(value + environment))
    /// });
    /// assert_eq!(chained.run(10).run_unsafe(), 20);
    /// ```
    pub fn flat_map_io<B, F>(self, function: F) -> ReaderT<R, IO<B>>
    where
        F: Fn(A) -> ReaderT<R, IO<B>> + 'static,
        B: 'static,
        R: Clone,
    {
        let original = self.run_function;
        let function = Rc::new(function);
        ReaderT::new(move |environment: R| {
            let environment_clone = environment.clone();
            let function = Rc::clone(&function);
            (original)(environment)
                .flat_map(move |value| function(value).run(environment_clone))
        })
    }

    /// Builds a deferred computation from a projection of the
    /// environment.
    pub fn asks_io<F>(projection: F) -> Self
    where
        F: Fn(&R) -> A + 'static,
    {
        let projection = Rc::new(projection);
        Self::new(move |environment: R| {
            let projection = Rc::clone(&projection);
            IO::new(move || projection(&environment))
        })
    }

    /// Runs a computation with a modified environment.
    pub fn local_io<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let computation_function = computation.run_function;
        Self::new(move |environment| {
            let modified_environment = modifier(environment);
            (computation_function)(modified_environment)
        })
    }
}

impl<R> ReaderT<R, IO<R>>
where
    R: Clone + 'static,
{
    /// Returns the environment wrapped in a pure `IO`.
    #[must_use]
    pub fn ask_io() -> Self {
        Self::new(|environment: R| IO::pure(environment))
    }
}
