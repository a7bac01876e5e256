//! Reader Monad - computation with a shared environment.
//!
//! The Reader monad represents computations that read from a shared,
//! immutable environment. It is useful for dependency injection and
//! threading configuration through a program without passing it
//! explicitly everywhere.
//!
//! # Overview
//!
//! A `Reader<R, A>` encapsulates a function `R -> A`, where `R` is the
//! environment type and `A` is the result type. Composed readers all see
//! the same environment.
//!
//! # Note on Type Classes
//!
//! Reader provides its own `fmap`, `flat_map`, `map2`, etc. methods
//! directly on the type, rather than implementing the
//! Functor/Applicative/Monad traits. This is because Rust's type system
//! requires 'static bounds on trait implementations when using
//! `Rc<dyn Fn>`, and the standard type class traits don't have these
//! bounds. The methods work identically to their type class counterparts.
//!
//! # Laws
//!
//! Reader satisfies all Functor, Applicative, and Monad laws, plus the
//! `MonadReader` laws:
//!
//! - Ask Idempotence: `ask().then(ask()) == ask()`
//! - Local Ask: `local(f, ask()) == ask().fmap(f)`
//! - Local Composition: `local(f, local(g, m)) == local(|r| g(f(r)), m)`
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     greeting: String,
//! }
//!
//! let greet: Reader<Config, String> =
//!     Reader::asks(|config: Config| config.greeting)
//!         .fmap(|greeting| format!("{greeting}, world"));
//!
//! let config = Config { greeting: "hello".to_string() };
//! assert_eq!(greet.run(config), "hello, world");
//! ```

use std::rc::Rc;

/// A monad for computations that read from a shared environment.
///
/// `Reader<R, A>` represents a computation that, given an environment of
/// type `R`, produces a value of type `A`. The environment is immutable
/// and shared across all composed computations.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::Reader;
///
/// let computation: Reader<i32, i32> = Reader::ask()
///     .flat_map(|environment| Reader::pure(environment * 2));
///
/// assert_eq!(computation.run(21), 42);
/// ```
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// The wrapped function from environment to result.
    /// Uses Rc to allow cloning of the Reader for `flat_map`.
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a new Reader from a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// assert_eq!(reader.run(21), 42);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the Reader computation with the given environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment + 1);
    /// assert_eq!(reader.run(41), 42);
    /// // Reader can be run multiple times
    /// assert_eq!(reader.run(0), 1);
    /// ```
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// Creates a Reader that returns a constant value, ignoring the
    /// environment.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Maps a function over the result of this Reader.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment);
    /// assert_eq!(reader.fmap(|value| value * 2).run(21), 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment| {
            let result = (original_function)(environment);
            function(result)
        })
    }

    /// Chains this Reader with a function that produces another Reader.
    ///
    /// Both computations see the same environment, which requires
    /// `R: Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment);
    /// let chained = reader.flat_map(|value| {
    ///     Reader::new(move |environment| value + environment)
    /// });
    /// assert_eq!(chained.run(10), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let original_function = self.run_function;
        Reader::new(move |environment: R| {
            let result = (original_function)(environment.clone());
            function(result).run(environment)
        })
    }

    /// Alias for `flat_map` to match Rust's naming conventions.
    pub fn and_then<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        self.flat_map(function)
    }

    /// Sequences two Readers, discarding the first result.
    #[must_use]
    pub fn then<B>(self, next: Reader<R, B>) -> Reader<R, B>
    where
        B: 'static,
        R: Clone,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two Readers using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Reader;
    ///
    /// let double: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let triple: Reader<i32, i32> = Reader::new(|environment| environment * 3);
    /// assert_eq!(double.map2(triple, |a, b| a + b).run(10), 50);
    /// ```
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        Reader::new(move |environment: R| {
            let result_a = (self_function)(environment.clone());
            let result_b = (other_function)(environment);
            function(result_a, result_b)
        })
    }

    /// Combines three Readers using a ternary function.
    pub fn map3<B, C, D, F>(
        self,
        second: Reader<R, B>,
        third: Reader<R, C>,
        function: F,
    ) -> Reader<R, D>
    where
        F: Fn(A, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static,
        R: Clone,
    {
        let self_function = self.run_function;
        let second_function = second.run_function;
        let third_function = third.run_function;
        Reader::new(move |environment: R| {
            let result_a = (self_function)(environment.clone());
            let result_b = (second_function)(environment.clone());
            let result_c = (third_function)(environment);
            function(result_a, result_b, result_c)
        })
    }

    /// Combines two Readers into a tuple.
    #[must_use]
    pub fn product<B>(self, other: Reader<R, B>) -> Reader<R, (A, B)>
    where
        B: 'static,
        R: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a Reader-wrapped function to a Reader-wrapped argument.
    pub fn apply<B, Output>(self, other: Reader<R, B>) -> Reader<R, Output>
    where
        A: FnOnce(B) -> Output,
        B: 'static,
        Output: 'static,
        R: Clone,
    {
        self.map2(other, |function, argument| function(argument))
    }
}

// =============================================================================
// MonadReader Operations (as inherent methods)
// =============================================================================

impl<Env> Reader<Env, Env>
where
    Env: Clone + 'static,
{
    /// Creates a Reader that returns the entire environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::ask();
    /// assert_eq!(reader.run(42), 42);
    /// ```
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a Reader that projects a value from the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Reader;
    ///
    /// #[derive(Clone)]
    /// struct Config { port: u16 }
    ///
    /// let reader: Reader<Config, u16> = Reader::asks(|config: Config| config.port);
    /// assert_eq!(reader.run(Config { port: 8080 }), 8080);
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs a computation with a modified environment.
    ///
    /// The modifier transforms the outer environment into the environment
    /// seen by the inner computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let adjusted = Reader::local(|environment| environment + 10, reader);
    /// assert_eq!(adjusted.run(5), 30); // (5 + 10) * 2
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
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

// =============================================================================
// Clone Implementation
// =============================================================================

impl<R, A> Clone for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<R, A> std::fmt::Display for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Reader>")
    }
}
