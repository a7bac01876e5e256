//! Writer Monad - computation with accumulated output.
//!
//! The Writer monad represents computations that produce a value together
//! with an accumulated output, such as a log. The output type must be a
//! [`Monoid`] so that outputs from sequenced computations can be combined.
//!
//! # Overview
//!
//! A `Writer<W, A>` holds a result of type `A` and an output of type `W`.
//! Chaining computations concatenates their outputs: the earlier
//! computation's output comes first, the later computation's second.
//!
//! # Laws
//!
//! Writer satisfies all Functor, Applicative, and Monad laws, plus the
//! `MonadWriter` laws:
//!
//! - `listen(tell(w))` returns `((), w)` with output `w`
//! - `pass(m.fmap(|a| (a, |w| w))) == m`
//! - `censor(f, m) == pass(m.fmap(|a| (a, f)))`
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::Writer;
//!
//! let computation: Writer<Vec<String>, i32> =
//!     Writer::tell(vec!["start".to_string()])
//!         .then(Writer::new(21, vec!["doubling".to_string()]))
//!         .fmap(|value| value * 2);
//!
//! let (result, output) = computation.run();
//! assert_eq!(result, 42);
//! assert_eq!(output, vec!["start", "doubling"]);
//! ```

use crate::typeclass::Monoid;

/// A monad pairing a result with accumulated monoidal output.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::Writer;
///
/// let writer: Writer<String, i32> = Writer::new(42, "log".to_string());
/// let (result, output) = writer.run();
/// assert_eq!(result, 42);
/// assert_eq!(output, "log");
/// ```
#[derive(Debug)]
pub struct Writer<W, A>
where
    W: Monoid + 'static,
    A: 'static,
{
    /// The result value.
    result: A,
    /// The accumulated output.
    output: W,
}

impl<W, A> Writer<W, A>
where
    W: Monoid + 'static,
    A: 'static,
{
    /// Creates a new Writer with the given result and output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> =
    ///     Writer::new(42, vec!["initial".to_string()]);
    /// let (result, output) = writer.run();
    /// assert_eq!(result, 42);
    /// assert_eq!(output, vec!["initial"]);
    /// ```
    pub const fn new(result: A, output: W) -> Self {
        Self { result, output }
    }

    /// Returns the result and the accumulated output.
    pub fn run(&self) -> (A, W)
    where
        A: Clone,
        W: Clone,
    {
        (self.result.clone(), self.output.clone())
    }

    /// Returns only the result, discarding the output.
    pub fn eval(&self) -> A
    where
        A: Clone,
    {
        self.result.clone()
    }

    /// Returns only the accumulated output, discarding the result.
    pub fn exec(&self) -> W
    where
        W: Clone,
    {
        self.output.clone()
    }

    /// Creates a Writer with the given result and an empty output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::pure(42);
    /// let (result, output) = writer.run();
    /// assert_eq!(result, 42);
    /// assert!(output.is_empty());
    /// ```
    pub fn pure(value: A) -> Self {
        Self {
            result: value,
            output: W::empty(),
        }
    }

    /// Maps a function over the result, leaving the output untouched.
    pub fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
        B: 'static,
    {
        Writer {
            result: function(self.result),
            output: self.output,
        }
    }

    /// Maps a function over the output, leaving the result untouched.
    ///
    /// The output may change monoid along the way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> =
    ///     Writer::new(42, vec!["a".to_string(), "b".to_string()]);
    /// let joined: Writer<String, i32> =
    ///     writer.map_output(|output| output.join(","));
    /// assert_eq!(joined.run(), (42, "a,b".to_string()));
    /// ```
    pub fn map_output<W2, F>(self, function: F) -> Writer<W2, A>
    where
        W2: Monoid + 'static,
        F: FnOnce(W) -> W2,
    {
        Writer {
            result: self.result,
            output: function(self.output),
        }
    }

    /// Maps over the output and the result at once.
    pub fn bimap<W2, B, F, G>(self, output_function: F, result_function: G) -> Writer<W2, B>
    where
        W2: Monoid + 'static,
        B: 'static,
        F: FnOnce(W) -> W2,
        G: FnOnce(A) -> B,
    {
        Writer {
            result: result_function(self.result),
            output: output_function(self.output),
        }
    }

    /// Chains this Writer with a function that produces another Writer.
    ///
    /// The outputs concatenate in sequence order: this computation's
    /// output first, the new computation's second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> =
    ///     Writer::new(10, vec!["first".to_string()]);
    /// let chained = writer.flat_map(|value| {
    ///     Writer::new(value * 2, vec!["second".to_string()])
    /// });
    /// let (result, output) = chained.run();
    /// assert_eq!(result, 20);
    /// assert_eq!(output, vec!["first", "second"]);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
        B: 'static,
    {
        let next = function(self.result);
        Writer {
            result: next.result,
            output: self.output.combine(next.output),
        }
    }

    /// Alias for `flat_map` to match Rust's naming conventions.
    pub fn and_then<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two Writers, discarding the first result but keeping
    /// both outputs.
    pub fn then<B>(self, next: Writer<W, B>) -> Writer<W, B>
    where
        B: 'static,
    {
        Writer {
            result: next.result,
            output: self.output.combine(next.output),
        }
    }

    /// Combines two Writers using a binary function; outputs concatenate
    /// left to right.
    pub fn map2<B, C, F>(self, other: Writer<W, B>, function: F) -> Writer<W, C>
    where
        F: FnOnce(A, B) -> C,
        B: 'static,
        C: 'static,
    {
        Writer {
            result: function(self.result, other.result),
            output: self.output.combine(other.output),
        }
    }

    /// Combines two Writers into a tuple.
    pub fn product<B>(self, other: Writer<W, B>) -> Writer<W, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a Writer-wrapped function to a Writer-wrapped argument.
    ///
    /// The function side's output comes before the argument side's.
    pub fn apply<B, Output>(self, other: Writer<W, B>) -> Writer<W, Output>
    where
        A: FnOnce(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        self.map2(other, |function, argument| function(argument))
    }
}

// =============================================================================
// MonadWriter Operations (as inherent methods)
// =============================================================================

impl<W> Writer<W, ()>
where
    W: Monoid + 'static,
{
    /// Creates a Writer that records output without producing a result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, ()> = Writer::tell(vec!["log".to_string()]);
    /// let ((), output) = writer.run();
    /// assert_eq!(output, vec!["log"]);
    /// ```
    pub fn tell(output: W) -> Self {
        Self { result: (), output }
    }
}

impl<W, A> Writer<W, A>
where
    W: Monoid + Clone + 'static,
    A: 'static,
{
    /// Exposes the accumulated output alongside the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> =
    ///     Writer::new(42, vec!["log".to_string()]);
    /// let ((result, captured), output) = Writer::listen(writer).run();
    /// assert_eq!(result, 42);
    /// assert_eq!(captured, vec!["log"]);
    /// assert_eq!(output, vec!["log"]);
    /// ```
    pub fn listen(computation: Self) -> Writer<W, (A, W)> {
        Writer {
            result: (computation.result, computation.output.clone()),
            output: computation.output,
        }
    }

    /// Exposes a projection of the accumulated output alongside the
    /// result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> =
    ///     Writer::new(42, vec!["a".to_string(), "b".to_string()]);
    /// let ((result, entries), _) = Writer::listens(|output: &Vec<String>| output.len(), writer).run();
    /// assert_eq!(result, 42);
    /// assert_eq!(entries, 2);
    /// ```
    pub fn listens<B, F>(projection: F, computation: Self) -> Writer<W, (A, B)>
    where
        F: FnOnce(&W) -> B,
        B: 'static,
    {
        let projected = projection(&computation.output);
        Writer {
            result: (computation.result, projected),
            output: computation.output,
        }
    }
}

impl<W, A> Writer<W, A>
where
    W: Monoid + 'static,
    A: 'static,
{
    /// Executes a computation whose result carries an output modifier,
    /// applying the modifier to the accumulated output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, (i32, fn(Vec<String>) -> Vec<String>)> =
    ///     Writer::new(
    ///         (42, (|output: Vec<String>| {
    ///             output.into_iter().map(|s| s.to_uppercase()).collect()
    ///         }) as fn(Vec<String>) -> Vec<String>),
    ///         vec!["hello".to_string()],
    ///     );
    /// let (result, output) = Writer::pass(writer).run();
    /// assert_eq!(result, 42);
    /// assert_eq!(output, vec!["HELLO"]);
    /// ```
    pub fn pass<F>(computation: Writer<W, (A, F)>) -> Self
    where
        F: FnOnce(W) -> W,
    {
        let (result, modifier) = computation.result;
        Self {
            result,
            output: modifier(computation.output),
        }
    }

    /// Modifies the output of a computation with a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> =
    ///     Writer::new(42, vec!["hello".to_string()]);
    /// let censored = Writer::censor(
    ///     |output: Vec<String>| output.into_iter().map(|s| s.to_uppercase()).collect(),
    ///     writer,
    /// );
    /// let (result, output) = censored.run();
    /// assert_eq!(result, 42);
    /// assert_eq!(output, vec!["HELLO"]);
    /// ```
    pub fn censor<F>(modifier: F, computation: Self) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Self {
            result: computation.result,
            output: modifier(computation.output),
        }
    }
}

// =============================================================================
// Clone / PartialEq Implementations
// =============================================================================

impl<W, A> Clone for Writer<W, A>
where
    W: Monoid + Clone + 'static,
    A: Clone + 'static,
{
    fn clone(&self) -> Self {
        Self {
            result: self.result.clone(),
            output: self.output.clone(),
        }
    }
}

impl<W, A> PartialEq for Writer<W, A>
where
    W: Monoid + PartialEq + 'static,
    A: PartialEq + 'static,
{
    fn eq(&self, other: &Self) -> bool {
        self.result == other.result && self.output == other.output
    }
}
