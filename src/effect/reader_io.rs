//! ReaderIO - an environment-reading, deferred side-effecting computation.
//!
//! `ReaderIO<R, A>` composes [`Reader`](super::Reader) and [`IO`]: a
//! function from an environment `R` to a deferred effect producing `A`.
//! Composition delegates to the `IO` layer while the environment is
//! threaded by direct function application, so every step of a chained
//! computation sees the same environment and nothing executes until the
//! resulting `IO` is run.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::ReaderIO;
//!
//! #[derive(Clone)]
//! struct Config {
//!     greeting: String,
//! }
//!
//! let program: ReaderIO<Config, String> = ReaderIO::asks(|config: &Config| {
//!     config.greeting.clone()
//! })
//! .fmap(|greeting| format!("{greeting}, world"));
//!
//! let config = Config { greeting: "hello".to_string() };
//! assert_eq!(program.run(config).run_unsafe(), "hello, world");
//! ```

use std::rc::Rc;

use super::{IO, Reader};

/// A computation that reads an environment and defers its effects.
///
/// Running a `ReaderIO` with an environment yields an [`IO`]; the effects
/// run only when that `IO` is executed.
pub struct ReaderIO<R, A>
where
    R: 'static,
    A: 'static,
{
    /// The wrapped function from environment to deferred effect.
    run_function: Rc<dyn Fn(R) -> IO<A>>,
}

impl<R, A> ReaderIO<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a new `ReaderIO` from a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::{IO, ReaderIO};
    ///
    /// let computation = ReaderIO::new(|environment: i32| IO::pure(environment * 2));
    /// assert_eq!(computation.run(21).run_unsafe(), 42);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> IO<A> + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Applies the environment, yielding the deferred effect.
    ///
    /// The effect has not run yet; call
    /// [`run_unsafe`](IO::run_unsafe) on the result to execute it.
    pub fn run(&self, environment: R) -> IO<A> {
        (self.run_function)(environment)
    }

    /// Lifts a value into a computation that ignores the environment and
    /// performs no effects.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| IO::pure(value.clone()))
    }

    /// Lifts an effect into `ReaderIO`, ignoring the environment.
    ///
    /// The action runs afresh on every `run`, keeping the `ReaderIO`
    /// reusable.
    pub fn lift_io<F>(action: F) -> Self
    where
        F: Fn() -> A + Clone + 'static,
    {
        Self::new(move |_| {
            let action = action.clone();
            IO::new(action)
        })
    }

    /// Lifts an effect-free [`Reader`] into `ReaderIO`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::{Reader, ReaderIO};
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment + 1);
    /// let computation = ReaderIO::lift_reader(reader);
    /// assert_eq!(computation.run(41).run_unsafe(), 42);
    /// ```
    pub fn lift_reader(reader: Reader<R, A>) -> Self {
        Self::new(move |environment| {
            let value = reader.run(environment);
            IO::pure(value)
        })
    }

    /// Transforms the eventual result using a function.
    pub fn fmap<B, F>(self, function: F) -> ReaderIO<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        let function = Rc::new(function);
        ReaderIO::new(move |environment| {
            let function = Rc::clone(&function);
            (original)(environment).fmap(move |value| function(value))
        })
    }

    /// Chains `ReaderIO` computations, sharing the environment.
    ///
    /// The environment is cloned so both the head and the tail of the
    /// chain see it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::{IO, ReaderIO};
    ///
    /// let computation = ReaderIO::new(|environment: i32| IO::pure(environment))
    ///     .flat_map(|value| ReaderIO::new(move |environment: i32| {
    ///         IO::pure(value + environment)
    ///     }));
    /// assert_eq!(computation.run(10).run_unsafe(), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> ReaderIO<R, B>
    where
        F: Fn(A) -> ReaderIO<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let original = self.run_function;
        let function = Rc::new(function);
        ReaderIO::new(move |environment: R| {
            let environment_clone = environment.clone();
            let function = Rc::clone(&function);
            (original)(environment)
                .flat_map(move |value| function(value).run(environment_clone))
        })
    }

    /// Alias for `flat_map`.
    pub fn and_then<B, F>(self, function: F) -> ReaderIO<R, B>
    where
        F: Fn(A) -> ReaderIO<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// The first computation's effects still run.
    #[must_use]
    pub fn then<B>(self, next: ReaderIO<R, B>) -> ReaderIO<R, B>
    where
        B: 'static,
        R: Clone,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two computations using a function, running this one's
    /// effects first.
    pub fn map2<B, C, F>(self, other: ReaderIO<R, B>, function: F) -> ReaderIO<R, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        let first_function = self.run_function;
        let second_function = other.run_function;
        let function = Rc::new(function);
        ReaderIO::new(move |environment: R| {
            let first_io = (first_function)(environment.clone());
            let second_io = (second_function)(environment);
            let function = Rc::clone(&function);
            first_io.flat_map(move |first| second_io.fmap(move |second| function(first, second)))
        })
    }

    /// Combines two computations into a tuple, running this one's effects
    /// first.
    #[must_use]
    pub fn product<B>(self, other: ReaderIO<R, B>) -> ReaderIO<R, (A, B)>
    where
        B: 'static,
        R: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a wrapped function to a wrapped argument, running the
    /// function computation's effects first.
    pub fn apply<B, Output>(self, argument: ReaderIO<R, B>) -> ReaderIO<R, Output>
    where
        A: FnOnce(B) -> Output,
        B: 'static,
        Output: 'static,
        R: Clone,
    {
        self.map2(argument, |function, value| function(value))
    }

    /// Runs a computation with a modified environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::{IO, ReaderIO};
    ///
    /// let computation = ReaderIO::new(|environment: i32| IO::pure(environment * 2));
    /// let modified = ReaderIO::local(|environment| environment + 10, computation);
    /// assert_eq!(modified.run(5).run_unsafe(), 30);
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

impl<R, A> ReaderIO<R, A>
where
    R: Clone + 'static,
    A: 'static,
{
    /// Retrieves a projection of the environment without effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::ReaderIO;
    ///
    /// #[derive(Clone)]
    /// struct Config {
    ///     port: u16,
    /// }
    ///
    /// let get_port: ReaderIO<Config, u16> = ReaderIO::asks(|config: &Config| config.port);
    /// assert_eq!(get_port.run(Config { port: 8080 }).run_unsafe(), 8080);
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(&R) -> A + 'static,
    {
        Self::new(move |environment: R| {
            let value = projection(&environment);
            IO::pure(value)
        })
    }

    /// Builds a computation from the environment and runs it against that
    /// same environment.
    ///
    /// This covers the cases where the shape of a computation itself
    /// depends on the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::{IO, ReaderIO};
    ///
    /// let computation: ReaderIO<i32, i32> = ReaderIO::asks_reader_io(|environment: &i32| {
    ///     if *environment > 0 {
    ///         ReaderIO::new(|environment: i32| IO::pure(environment * 2))
    ///     } else {
    ///         ReaderIO::pure(0)
    ///     }
    /// });
    /// assert_eq!(computation.run(21).run_unsafe(), 42);
    /// assert_eq!(computation.run(-5).run_unsafe(), 0);
    /// ```
    pub fn asks_reader_io<F>(builder: F) -> Self
    where
        F: Fn(&R) -> Self + 'static,
    {
        Self::new(move |environment: R| builder(&environment).run(environment))
    }
}

impl<Env> ReaderIO<Env, Env>
where
    Env: Clone + 'static,
{
    /// Retrieves the whole environment.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment: Env| IO::pure(environment))
    }
}

impl<R, A> ReaderIO<R, ReaderIO<R, A>>
where
    R: Clone + 'static,
    A: 'static,
{
    /// Collapses a nested computation, feeding both layers the same
    /// environment.
    #[must_use]
    pub fn flatten(self) -> ReaderIO<R, A> {
        self.flat_map(|inner| inner)
    }
}

impl<R, A> Clone for ReaderIO<R, A>
where
    R: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;

    #[derive(Clone)]
    struct Config {
        base: i32,
        factor: i32,
    }

    #[rstest]
    fn pure_ignores_environment() {
        let computation: ReaderIO<i32, &str> = ReaderIO::pure("constant");
        assert_eq!(computation.run(0).run_unsafe(), "constant");
        assert_eq!(computation.run(99).run_unsafe(), "constant");
    }

    #[rstest]
    fn fmap_transforms_result() {
        let computation = ReaderIO::new(|environment: i32| IO::pure(environment)).fmap(|x| x * 2);
        assert_eq!(computation.run(21).run_unsafe(), 42);
    }

    #[rstest]
    fn flat_map_shares_environment() {
        let computation = ReaderIO::new(|environment: i32| IO::pure(environment))
            .flat_map(|value| ReaderIO::new(move |environment: i32| IO::pure(value + environment)));
        assert_eq!(computation.run(10).run_unsafe(), 20);
    }

    #[rstest]
    fn effects_are_deferred_until_io_runs() {
        thread_local! {
            static EXECUTED: RefCell<bool> = const { RefCell::new(false) };
        }

        let computation: ReaderIO<i32, i32> = ReaderIO::lift_io(|| {
            EXECUTED.with(|flag| *flag.borrow_mut() = true);
            42
        });

        let deferred = computation.run(0);
        assert!(!EXECUTED.with(|flag| *flag.borrow()));
        assert_eq!(deferred.run_unsafe(), 42);
        assert!(EXECUTED.with(|flag| *flag.borrow()));
    }

    #[rstest]
    fn ask_returns_environment() {
        let computation: ReaderIO<i32, i32> = ReaderIO::ask();
        assert_eq!(computation.run(42).run_unsafe(), 42);
    }

    #[rstest]
    fn asks_projects_environment() {
        let get_base: ReaderIO<Config, i32> = ReaderIO::asks(|config: &Config| config.base);
        assert_eq!(get_base.run(Config { base: 7, factor: 3 }).run_unsafe(), 7);
    }

    #[rstest]
    fn lift_reader_preserves_value() {
        let reader: Reader<i32, i32> = Reader::new(|environment| environment + 1);
        let computation = ReaderIO::lift_reader(reader);
        assert_eq!(computation.run(41).run_unsafe(), 42);
    }

    #[rstest]
    fn local_modifies_environment() {
        let computation = ReaderIO::new(|environment: i32| IO::pure(environment * 2));
        let modified = ReaderIO::local(|environment| environment + 10, computation);
        assert_eq!(modified.run(5).run_unsafe(), 30);
    }

    #[rstest]
    fn map2_combines_in_order() {
        thread_local! {
            static LOG: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
        }

        let first: ReaderIO<i32, i32> = ReaderIO::lift_io(|| {
            LOG.with(|log| log.borrow_mut().push("first"));
            10
        });
        let second: ReaderIO<i32, i32> = ReaderIO::lift_io(|| {
            LOG.with(|log| log.borrow_mut().push("second"));
            20
        });

        let combined = first.map2(second, |a, b| a + b);
        assert_eq!(combined.run(0).run_unsafe(), 30);
        assert_eq!(LOG.with(|log| log.borrow().clone()), vec!["first", "second"]);
    }

    #[rstest]
    fn apply_runs_function_side_first() {
        let function: ReaderIO<i32, _> = ReaderIO::asks(|environment: &i32| {
            let base = *environment;
            move |value: i32| value + base
        });
        let argument: ReaderIO<i32, i32> = ReaderIO::pure(5);
        assert_eq!(function.apply(argument).run(10).run_unsafe(), 15);
    }

    #[rstest]
    fn apply_associative_composition_law() {
        let environment = 3;

        let u: ReaderIO<i32, fn(i32) -> i32> = ReaderIO::pure((|x| x + 1) as fn(i32) -> i32);
        let v: ReaderIO<i32, fn(i32) -> i32> = ReaderIO::pure((|x| x * 2) as fn(i32) -> i32);
        let w: ReaderIO<i32, i32> = ReaderIO::pure(5);

        let left = u
            .clone()
            .map2(v.clone(), |f, g| move |x| f(g(x)))
            .apply(w.clone())
            .run(environment)
            .run_unsafe();
        let right = u.apply(v.apply(w)).run(environment).run_unsafe();
        assert_eq!(left, right);
    }

    #[rstest]
    fn left_identity_law() {
        let function = |x: i32| ReaderIO::new(move |environment: i32| IO::pure(x + environment));
        let left = ReaderIO::pure(5).flat_map(function).run(10).run_unsafe();
        let right = function(5).run(10).run_unsafe();
        assert_eq!(left, right);
    }

    #[rstest]
    fn associativity_law() {
        let f = |x: i32| ReaderIO::new(move |environment: i32| IO::pure(x + environment));
        let g = |x: i32| ReaderIO::new(move |_: i32| IO::pure(x * 2));

        let base = || ReaderIO::new(|environment: i32| IO::pure(environment));
        let left = base().flat_map(f).flat_map(g).run(10).run_unsafe();
        let right = base()
            .flat_map(move |x| f(x).flat_map(g))
            .run(10)
            .run_unsafe();
        assert_eq!(left, right);
    }
}
