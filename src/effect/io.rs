//! IO Monad - deferred side-effecting computation.
//!
//! The IO monad describes a side-effecting computation as a value. Nothing
//! happens when an `IO` is built or composed; the effects run only when
//! `run_unsafe` is called, ideally once, at the program's edge.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::IO;
//!
//! let program = IO::new(|| 21).fmap(|x| x * 2);
//! // Nothing has run yet.
//! assert_eq!(program.run_unsafe(), 42);
//! ```

use std::time::Duration;

/// A deferred computation that produces a value of type `A` when run.
///
/// The wrapped closure is not executed until [`IO::run_unsafe`] is called.
///
/// # Monad Laws
///
/// `IO` satisfies the monad laws:
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    /// The wrapped computation that produces a value of type `A`.
    run_io: Box<dyn FnOnce() -> A>,
}

impl<A: 'static> IO<A> {
    /// Creates a new IO action from a closure.
    ///
    /// The closure will not be executed until `run_unsafe` is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IO;
    ///
    /// let io = IO::new(|| {
    ///     println!("Side effect!");
    ///     42
    /// });
    /// // Nothing is printed yet
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            run_io: Box::new(action),
        }
    }

    /// Wraps a pure value in an IO action with no side effects.
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Executes the IO action and returns the result.
    ///
    /// This is the only way to extract a value from an IO action. It
    /// should be called at the program's "edge" (e.g., in `main`).
    ///
    /// The name marks the boundary where referential transparency ends;
    /// the method is memory-safe.
    pub fn run_unsafe(self) -> A {
        (self.run_io)()
    }

    /// Transforms the result of an IO action using a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IO;
    ///
    /// let io = IO::pure(21).fmap(|x| x * 2);
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || {
            let a = self.run_unsafe();
            function(a)
        })
    }

    /// Chains IO actions, passing the result of the first to a function
    /// that produces the second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IO;
    ///
    /// let io = IO::pure(10).flat_map(|x| IO::pure(x * 2));
    /// assert_eq!(io.run_unsafe(), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || {
            let a = self.run_unsafe();
            function(a).run_unsafe()
        })
    }

    /// Alias for `flat_map`.
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two IO actions, discarding the result of the first.
    ///
    /// The first action is still executed for its side effects.
    #[must_use]
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Combines two IO actions using a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IO;
    ///
    /// let io = IO::pure(10).map2(IO::pure(20), |a, b| a + b);
    /// assert_eq!(io.run_unsafe(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.flat_map(move |a| other.fmap(move |b| function(a, b)))
    }

    /// Combines two IO actions into a tuple.
    #[must_use]
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Convenience Constructors
// =============================================================================

impl IO<()> {
    /// Creates an IO action that prints a line to standard output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IO;
    ///
    /// let io = IO::print_line("hello");
    /// io.run_unsafe();
    /// ```
    pub fn print_line<S: std::fmt::Display + 'static>(message: S) -> Self {
        Self::new(move || println!("{message}"))
    }

    /// Creates an IO action that sleeps for the given duration.
    #[must_use]
    pub fn delay(duration: Duration) -> Self {
        Self::new(move || std::thread::sleep(duration))
    }
}
