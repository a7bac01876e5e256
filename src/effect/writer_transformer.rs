//! WriterT - Writer Monad Transformer.
//!
//! WriterT adds output accumulation capability to any monad. It transforms
//! a monad M into a monad that can accumulate output W.
//!
//! # Overview
//!
//! `WriterT<W, M>` encapsulates `M<(A, W)>` where `W` is the output type
//! (must be a Monoid for combining outputs) and `M` is the inner monad.
//! Chaining concatenates outputs in sequence order: the earlier
//! computation's output first, the later one's second.
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
//! use kindred::effect::WriterT;
//!
//! fn log(msg: &str) -> WriterT<Vec<String>, Option<((), Vec<String>)>> {
//!     WriterT::<Vec<String>, Option<((), Vec<String>)>>::tell_option(vec![msg.to_string()])
//! }
//!
//! let computation = log("step 1")
//!     .flat_map_option(|_| log("step 2"))
//!     .flat_map_option(|_| {
//!         WriterT::<Vec<String>, Option<(i32, Vec<String>)>>::pure_option(42)
//!     });
//!
//! assert_eq!(
//!     computation.run(),
//!     Some((42, vec!["step 1".to_string(), "step 2".to_string()]))
//! );
//! ```

use crate::typeclass::Monoid;

use super::IO;

/// A monad transformer that adds output accumulation capability.
///
/// `WriterT<W, M>` represents a computation that produces a value and
/// output wrapped in monad `M`. The output type `W` must be a `Monoid` to
/// support combining outputs from sequential computations.
///
/// # Type Parameters
///
/// - `W`: The output type (must implement `Monoid`)
/// - `M`: The inner monad type (e.g., `Option<(A, W)>`, `Result<(A, W), E>`,
///   `IO<(A, W)>`)
pub struct WriterT<W, M>
where
    W: Monoid + 'static,
{
    /// The wrapped monad containing (value, output).
    inner: M,
    /// Phantom data to hold the output type.
    _marker: std::marker::PhantomData<W>,
}

impl<W, M> WriterT<W, M>
where
    W: Monoid + 'static,
{
    /// Creates a new WriterT from an inner monad.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::WriterT;
    ///
    /// let writer: WriterT<Vec<String>, Option<(i32, Vec<String>)>> =
    ///     WriterT::new(Some((42, vec!["log".to_string()])));
    /// assert_eq!(writer.run(), Some((42, vec!["log".to_string()])));
    /// ```
    pub const fn new(inner: M) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }

    /// Runs the WriterT computation, returning the inner monad.
    pub fn run(self) -> M {
        self.inner
    }
}

impl<W, M> Clone for WriterT<W, M>
where
    W: Monoid + 'static,
    M: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: std::marker::PhantomData,
        }
    }
}

// =============================================================================
// Option-specific Methods
// =============================================================================

impl<W, A> WriterT<W, Option<(A, W)>>
where
    W: Monoid + Clone + 'static,
    A: 'static,
{
    /// Lifts a value into a present computation with empty output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::WriterT;
    ///
    /// let writer: WriterT<Vec<String>, Option<(i32, Vec<String>)>> =
    ///     WriterT::pure_option(42);
    /// assert_eq!(writer.run(), Some((42, Vec::new())));
    /// ```
    pub fn pure_option(value: A) -> Self {
        Self::new(Some((value, W::empty())))
    }

    /// Lifts an `Option` into WriterT with empty output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::WriterT;
    ///
    /// let present: WriterT<Vec<String>, Option<(i32, Vec<String>)>> =
    ///     WriterT::lift_option(Some(42));
    /// assert_eq!(present.run(), Some((42, Vec::new())));
    ///
    /// let missing: WriterT<Vec<String>, Option<(i32, Vec<String>)>> =
    ///     WriterT::lift_option(None);
    /// assert_eq!(missing.run(), None);
    /// ```
    pub fn lift_option(inner: Option<A>) -> Self {
        Self::new(inner.map(|value| (value, W::empty())))
    }

    /// Lifts a plain [`Writer`](super::Writer) into the transformer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::{Writer, WriterT};
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::new(42, vec!["log".to_string()]);
    /// let lifted: WriterT<Vec<String>, Option<(i32, Vec<String>)>> =
    ///     WriterT::from_writer_option(writer);
    /// assert_eq!(lifted.run(), Some((42, vec!["log".to_string()])));
    /// ```
    pub fn from_writer_option(writer: super::Writer<W, A>) -> Self
    where
        A: Clone,
    {
        Self::new(Some(writer.run()))
    }

    /// Records output without producing a meaningful result.
    pub fn tell_option(output: W) -> WriterT<W, Option<((), W)>> {
        WriterT::new(Some(((), output)))
    }

    /// Runs the computation, keeping only the value.
    pub fn eval_option(self) -> Option<A> {
        self.inner.map(|(value, _)| value)
    }

    /// Runs the computation, keeping only the output.
    pub fn exec_option(self) -> Option<W> {
        self.inner.map(|(_, output)| output)
    }

    /// Maps a function over the value, keeping the output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::WriterT;
    ///
    /// let writer: WriterT<Vec<String>, Option<(i32, Vec<String>)>> =
    ///     WriterT::new(Some((21, vec!["log".to_string()])));
    /// assert_eq!(
    ///     writer.fmap_option(|v| v * 2).run(),
    ///     Some((42, vec!["log".to_string()]))
    /// );
    /// ```
    pub fn fmap_option<B, F>(self, function: F) -> WriterT<W, Option<(B, W)>>
    where
        F: FnOnce(A) -> B,
        B: 'static,
    {
        WriterT::new(self.inner.map(|(value, output)| (function(value), output)))
    }

    /// Chains WriterT computations over Option, concatenating outputs
    /// previous-first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::WriterT;
    ///
    /// let writer: WriterT<Vec<String>, Option<(i32, Vec<String>)>> =
    ///     WriterT::new(Some((10, vec!["first".to_string()])));
    /// let chained = writer.flat_map_option(|v| {
    ///     WriterT::new(Some((v * 2, vec!["second".to_string()])))
    /// });
    /// assert_eq!(
    ///     chained.run(),
    ///     Some((20, vec!["first".to_string(), "second".to_string()]))
    /// );
    /// ```
    pub fn flat_map_option<B, F>(self, function: F) -> WriterT<W, Option<(B, W)>>
    where
        F: FnOnce(A) -> WriterT<W, Option<(B, W)>>,
        B: 'static,
    {
        match self.inner {
            Some((value, previous_output)) => match function(value).inner {
                Some((result, new_output)) => {
                    WriterT::new(Some((result, previous_output.combine(new_output))))
                }
                None => WriterT::new(None),
            },
            None => WriterT::new(None),
        }
    }

    /// Executes a computation and also returns its output.
    pub fn listen_option(computation: Self) -> WriterT<W, Option<((A, W), W)>> {
        match computation.inner {
            Some((value, output)) => WriterT::new(Some(((value, output.clone()), output))),
            None => WriterT::new(None),
        }
    }

    /// Executes a computation whose value carries an output modifier,
    /// applying the modifier to the output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::WriterT;
    ///
    /// let writer: WriterT<Vec<String>, Option<((i32, fn(Vec<String>) -> Vec<String>), Vec<String>)>> =
    ///     WriterT::new(Some((
    ///         (42, (|mut output: Vec<String>| { output.reverse(); output })
    ///             as fn(Vec<String>) -> Vec<String>),
    ///         vec!["a".to_string(), "b".to_string()],
    ///     )));
    /// assert_eq!(
    ///     WriterT::pass_option(writer).run(),
    ///     Some((42, vec!["b".to_string(), "a".to_string()]))
    /// );
    /// ```
    pub fn pass_option<F>(computation: WriterT<W, Option<((A, F), W)>>) -> Self
    where
        F: FnOnce(W) -> W,
    {
        match computation.inner {
            Some(((value, modifier), output)) => Self::new(Some((value, modifier(output)))),
            None => Self::new(None),
        }
    }

    /// Modifies the output of a computation with a function.
    pub fn censor_option<F>(modifier: F, computation: Self) -> Self
    where
        F: FnOnce(W) -> W,
    {
        match computation.inner {
            Some((value, output)) => Self::new(Some((value, modifier(output)))),
            None => Self::new(None),
        }
    }
}

// =============================================================================
// Result-specific Methods
// =============================================================================

impl<W, A, E> WriterT<W, Result<(A, W), E>>
where
    W: Monoid + Clone + 'static,
    A: 'static,
    E: 'static,
{
    /// Lifts a value into a successful computation with empty output.
    pub fn pure_result(value: A) -> Self {
        Self::new(Ok((value, W::empty())))
    }

    /// Lifts a `Result` into WriterT with empty output.
    pub fn lift_result(inner: Result<A, E>) -> Self {
        Self::new(inner.map(|value| (value, W::empty())))
    }

    /// Lifts a plain [`Writer`](super::Writer) into the transformer.
    pub fn from_writer_result(writer: super::Writer<W, A>) -> Self
    where
        A: Clone,
    {
        Self::new(Ok(writer.run()))
    }

    /// Records output without producing a meaningful result.
    pub fn tell_result(output: W) -> WriterT<W, Result<((), W), E>> {
        WriterT::new(Ok(((), output)))
    }

    /// Runs the computation, keeping only the value.
    pub fn eval_result(self) -> Result<A, E> {
        self.inner.map(|(value, _)| value)
    }

    /// Runs the computation, keeping only the output.
    pub fn exec_result(self) -> Result<W, E> {
        self.inner.map(|(_, output)| output)
    }

    /// Maps a function over the value, keeping the output.
    pub fn fmap_result<B, F>(self, function: F) -> WriterT<W, Result<(B, W), E>>
    where
        F: FnOnce(A) -> B,
        B: 'static,
    {
        WriterT::new(self.inner.map(|(value, output)| (function(value), output)))
    }

    /// Chains WriterT computations over Result, concatenating outputs
    /// previous-first. An error discards the accumulated output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::WriterT;
    ///
    /// let writer: WriterT<Vec<String>, Result<(i32, Vec<String>), &str>> =
    ///     WriterT::new(Ok((10, vec!["first".to_string()])));
    /// let chained = writer.flat_map_result(|v| {
    ///     WriterT::new(Ok((v * 2, vec!["second".to_string()])))
    /// });
    /// assert_eq!(
    ///     chained.run(),
    ///     Ok((20, vec!["first".to_string(), "second".to_string()]))
    /// );
    /// ```
    pub fn flat_map_result<B, F>(self, function: F) -> WriterT<W, Result<(B, W), E>>
    where
        F: FnOnce(A) -> WriterT<W, Result<(B, W), E>>,
        B: 'static,
    {
        match self.inner {
            Ok((value, previous_output)) => match function(value).inner {
                Ok((result, new_output)) => {
                    WriterT::new(Ok((result, previous_output.combine(new_output))))
                }
                Err(error) => WriterT::new(Err(error)),
            },
            Err(error) => WriterT::new(Err(error)),
        }
    }

    /// Executes a computation and also returns its output.
    pub fn listen_result(computation: Self) -> WriterT<W, Result<((A, W), W), E>> {
        match computation.inner {
            Ok((value, output)) => WriterT::new(Ok(((value, output.clone()), output))),
            Err(error) => WriterT::new(Err(error)),
        }
    }

    /// Executes a computation whose value carries an output modifier,
    /// applying the modifier to the output.
    pub fn pass_result<F>(computation: WriterT<W, Result<((A, F), W), E>>) -> Self
    where
        F: FnOnce(W) -> W,
    {
        match computation.inner {
            Ok(((value, modifier), output)) => Self::new(Ok((value, modifier(output)))),
            Err(error) => Self::new(Err(error)),
        }
    }

    /// Modifies the output of a computation with a function.
    pub fn censor_result<F>(modifier: F, computation: Self) -> Self
    where
        F: FnOnce(W) -> W,
    {
        match computation.inner {
            Ok((value, output)) => Self::new(Ok((value, modifier(output)))),
            Err(error) => Self::new(Err(error)),
        }
    }
}

// =============================================================================
// IO-specific Methods
// =============================================================================

impl<W, A> WriterT<W, IO<(A, W)>>
where
    W: Monoid + Clone + 'static,
    A: 'static,
{
    /// Lifts a value into a deferred computation with empty output.
    pub fn pure_io(value: A) -> Self {
        Self::new(IO::pure((value, W::empty())))
    }

    /// Lifts an `IO` into WriterT with empty output.
    pub fn lift_io(inner: IO<A>) -> Self {
        Self::new(inner.fmap(|value| (value, W::empty())))
    }

    /// Lifts a plain [`Writer`](super::Writer) into the transformer.
    pub fn from_writer_io(writer: super::Writer<W, A>) -> Self
    where
        A: Clone,
    {
        Self::new(IO::pure(writer.run()))
    }

    /// Records output without producing a meaningful result.
    pub fn tell_io(output: W) -> WriterT<W, IO<((), W)>> {
        WriterT::new(IO::pure(((), output)))
    }

    /// Runs the computation, keeping only the eventual value.
    pub fn eval_io(self) -> IO<A> {
        self.inner.fmap(|(value, _)| value)
    }

    /// Runs the computation, keeping only the eventual output.
    pub fn exec_io(self) -> IO<W> {
        self.inner.fmap(|(_, output)| output)
    }

    /// Maps a function over the eventual value, keeping the output.
    pub fn fmap_io<B, F>(self, function: F) -> WriterT<W, IO<(B, W)>>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        WriterT::new(self.inner.fmap(|(value, output)| (function(value), output)))
    }

    /// Chains deferred WriterT computations, concatenating outputs
    /// previous-first when the actions eventually run.
    pub fn flat_map_io<B, F>(self, function: F) -> WriterT<W, IO<(B, W)>>
    where
        F: FnOnce(A) -> WriterT<W, IO<(B, W)>> + 'static,
        B: 'static,
    {
        WriterT::new(self.inner.flat_map(|(value, previous_output)| {
            function(value)
                .inner
                .fmap(move |(result, new_output)| (result, previous_output.combine(new_output)))
        }))
    }

    /// Executes a computation and also returns its output.
    pub fn listen_io(computation: Self) -> WriterT<W, IO<((A, W), W)>> {
        WriterT::new(
            computation
                .inner
                .fmap(|(value, output)| ((value, output.clone()), output)),
        )
    }

    /// Executes a deferred computation whose value carries an output
    /// modifier, applying the modifier when the action eventually runs.
    pub fn pass_io<F>(computation: WriterT<W, IO<((A, F), W)>>) -> Self
    where
        F: FnOnce(W) -> W + 'static,
    {
        Self::new(
            computation
                .inner
                .fmap(|((value, modifier), output)| (value, modifier(output))),
        )
    }

    /// Modifies the eventual output of a computation with a function.
    pub fn censor_io<F>(modifier: F, computation: Self) -> Self
    where
        F: FnOnce(W) -> W + 'static,
    {
        Self::new(
            computation
                .inner
                .fmap(|(value, output)| (value, modifier(output))),
        )
    }
}
