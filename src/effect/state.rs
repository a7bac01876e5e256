//! State Monad - stateful computation.
//!
//! The State monad represents computations that thread a state through a
//! sequence of operations. It is useful for maintaining mutable state in a
//! pure functional way.
//!
//! # Overview
//!
//! A `State<S, A>` encapsulates a function `S -> (A, S)`, where `S` is the
//! state type and `A` is the result type. The function takes the current
//! state, produces a result, and returns a potentially modified state.
//!
//! # Note on Type Classes
//!
//! State provides its own `fmap`, `flat_map`, `map2`, etc. methods directly
//! on the type, rather than implementing the Functor/Applicative/Monad
//! traits. This is because Rust's type system requires 'static bounds on
//! trait implementations when using `Rc<dyn Fn>`, and the standard type
//! class traits don't have these bounds. The methods work identically to
//! their type class counterparts.
//!
//! # Laws
//!
//! State satisfies all Functor, Applicative, and Monad laws, plus the
//! MonadState-specific laws:
//!
//! ## Functor Laws
//!
//! - Identity: `state.fmap(|x| x) == state`
//! - Composition: `state.fmap(f).fmap(g) == state.fmap(|x| g(f(x)))`
//!
//! ## Monad Laws
//!
//! - Left Identity: `State::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(State::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! ## `MonadState` Laws
//!
//! - Get Put Law: `get().flat_map(|s| put(s)) == pure(())`
//! - Put Get Law: `put(s).then(get())` returns `s`
//! - Put Put Law: `put(s1).then(put(s2)) == put(s2)`
//! - Modify Composition: `modify(f).then(modify(g)) == modify(|s| g(f(s)))`
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```rust
//! use kindred::effect::State;
//!
//! let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
//! let (result, final_state) = state.run(10);
//! assert_eq!(result, 20);
//! assert_eq!(final_state, 11);
//! ```
//!
//! Counter pattern:
//!
//! ```rust
//! use kindred::effect::State;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(increment())
//!     .then(State::get());
//!
//! let (count, _) = computation.run(0);
//! assert_eq!(count, 3);
//! ```

use std::rc::Rc;

/// A monad for computations that thread state through a sequence of
/// operations.
///
/// `State<S, A>` represents a computation that, given an initial state of
/// type `S`, produces a result of type `A` and a new state of type `S`.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::State;
///
/// let computation: State<i32, i32> = State::get()
///     .flat_map(|current| {
///         State::put(current + 1).then(State::pure(current))
///     });
///
/// let (result, final_state) = computation.run(10);
/// assert_eq!(result, 10);
/// assert_eq!(final_state, 11);
/// ```
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// The wrapped state transition function.
    /// Uses Rc to allow cloning of the State for `flat_map`.
    run_function: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a new State from a state transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// let (result, final_state) = state.run(10);
    /// assert_eq!(result, 20);
    /// assert_eq!(final_state, 11);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the State computation with the given initial state.
    ///
    /// Returns both the result and the final state.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and returns only the result, discarding the
    /// final state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s + 1, s * 2));
    /// assert_eq!(state.eval(10), 11);
    /// ```
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the computation and returns only the final state, discarding
    /// the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s + 1, s * 2));
    /// assert_eq!(state.exec(10), 20);
    /// ```
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// Creates a State that returns the given value without touching the
    /// state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let state: State<i32, &str> = State::pure("constant");
    /// let (result, final_state) = state.run(42);
    /// assert_eq!(result, "constant");
    /// assert_eq!(final_state, 42);
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Maps a function over the result of this State.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s));
    /// let mapped = state.fmap(|value| value * 2);
    /// let (result, final_state) = mapped.run(21);
    /// assert_eq!(result, 42);
    /// assert_eq!(final_state, 21);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, new_state) = (original_function)(state);
            (function(result), new_state)
        })
    }

    /// Chains this State with a function that produces another State.
    ///
    /// The state produced by `self` is fed into the computation returned
    /// by `function`, whose final state becomes the final state of the
    /// whole chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let chained = state.flat_map(|value| {
    ///     State::new(move |s: i32| (value + s, s * 2))
    /// });
    /// let (result, final_state) = chained.run(10);
    /// // First: (10, 11), then with state 11: (10 + 11, 22)
    /// assert_eq!(result, 21);
    /// assert_eq!(final_state, 22);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, intermediate_state) = (original_function)(state);
            let next_state = function(result);
            next_state.run(intermediate_state)
        })
    }

    /// Alias for `flat_map` to match Rust's naming conventions.
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two States, discarding the first result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let first: State<i32, i32> = State::new(|s: i32| (s, s + 10));
    /// let second: State<i32, &str> = State::pure("result");
    /// let (result, final_state) = first.then(second).run(42);
    /// assert_eq!(result, "result");
    /// assert_eq!(final_state, 52);
    /// ```
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two States using a binary function.
    ///
    /// `self` runs first; `other` runs on the state `self` leaves behind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let first: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let second: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// let combined = first.map2(second, |a, b| a + b);
    /// let (result, final_state) = combined.run(10);
    /// // first: (10, 11), second with 11: (22, 12)
    /// assert_eq!(result, 32);
    /// assert_eq!(final_state, 12);
    /// ```
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        State::new(move |state| {
            let (result_a, intermediate_state) = (self_function)(state);
            let (result_b, final_state) = (other_function)(intermediate_state);
            (function(result_a, result_b), final_state)
        })
    }

    /// Combines two States into a tuple.
    #[must_use]
    pub fn product<B>(self, other: State<S, B>) -> State<S, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Sequences two States, keeping the first result.
    ///
    /// Both computations still thread the state.
    #[must_use]
    pub fn product_left<B>(self, other: State<S, B>) -> Self
    where
        B: 'static,
    {
        self.map2(other, |a, _| a)
    }

    /// Sequences two States, keeping the second result.
    #[must_use]
    pub fn product_right<B>(self, other: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a State-wrapped function to a State-wrapped argument.
    ///
    /// The function computation runs first and its resulting state feeds
    /// the argument computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let function: State<i32, fn(i32) -> i32> =
    ///     State::new(|s: i32| ((|x: i32| x + 1) as fn(i32) -> i32, s + 1));
    /// let argument: State<i32, i32> = State::new(|s: i32| (s * 10, s));
    /// let (result, final_state) = function.apply(argument).run(1);
    /// // function: (f, 2), argument with 2: (20, 2), result f(20)
    /// assert_eq!(result, 21);
    /// assert_eq!(final_state, 2);
    /// ```
    pub fn apply<B, Output>(self, other: State<S, B>) -> State<S, Output>
    where
        A: FnOnce(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        self.map2(other, |function, argument| function(argument))
    }
}

// =============================================================================
// MonadState Operations (as inherent methods)
// =============================================================================

impl<St> State<St, St>
where
    St: Clone + 'static,
{
    /// Creates a State that returns the current state without modifying
    /// it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let state: State<i32, i32> = State::get();
    /// let (result, final_state) = state.run(42);
    /// assert_eq!(result, 42);
    /// assert_eq!(final_state, 42);
    /// ```
    pub fn get() -> Self {
        Self::new(|state: St| (state.clone(), state))
    }
}

impl<S, A> State<S, State<S, A>>
where
    S: 'static,
    A: 'static,
{
    /// Collapses a nested State computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let nested: State<i32, State<i32, i32>> =
    ///     State::new(|s: i32| (State::new(|s: i32| (s * 2, s + 1)), s + 10));
    /// let (result, final_state) = nested.flatten().run(1);
    /// assert_eq!(result, 22);
    /// assert_eq!(final_state, 12);
    /// ```
    #[must_use]
    pub fn flatten(self) -> State<S, A> {
        self.flat_map(|inner| inner)
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Creates a State that replaces the current state with a new one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let state: State<i32, ()> = State::put(100);
    /// let ((), final_state) = state.run(42);
    /// assert_eq!(final_state, 100);
    /// ```
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Creates a State that transforms the current state with a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let state: State<i32, ()> = State::modify(|s| s * 2);
    /// let ((), final_state) = state.run(21);
    /// assert_eq!(final_state, 42);
    /// ```
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a State that returns a projection of the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let state: State<Vec<i32>, usize> = State::gets(|items: &Vec<i32>| items.len());
    /// let (length, _) = state.run(vec![1, 2, 3]);
    /// assert_eq!(length, 3);
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let result = projection(&state);
            (result, state)
        })
    }

    /// Runs a stateful computation for each element of a `Vec`, threading
    /// the state left to right and collecting the results.
    ///
    /// The walk is an explicit loop, so long inputs never grow the call
    /// stack regardless of how many computations are sequenced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// // Number each item while counting them in the state.
    /// let numbered: State<i32, Vec<String>> =
    ///     State::traverse_vec(vec!["a", "b"], |item| {
    ///         State::new(move |count: i32| (format!("{count}:{item}"), count + 1))
    ///     });
    /// let (results, total) = numbered.run(0);
    /// assert_eq!(results, vec!["0:a".to_string(), "1:b".to_string()]);
    /// assert_eq!(total, 2);
    /// ```
    pub fn traverse_vec<T, F>(items: Vec<T>, function: F) -> State<S, Vec<A>>
    where
        T: Clone + 'static,
        F: Fn(T) -> Self + 'static,
    {
        Self::traverse_vec_with_index(items, move |_, item| function(item))
    }

    /// Like [`State::traverse_vec`], but the function also receives each
    /// element's position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let tagged: State<u32, Vec<usize>> =
    ///     State::traverse_vec_with_index(vec!["a", "b", "c"], |index, _| {
    ///         State::new(move |seen: u32| (index, seen + 1))
    ///     });
    /// let (indices, seen) = tagged.run(0);
    /// assert_eq!(indices, vec![0, 1, 2]);
    /// assert_eq!(seen, 3);
    /// ```
    pub fn traverse_vec_with_index<T, F>(items: Vec<T>, function: F) -> State<S, Vec<A>>
    where
        T: Clone + 'static,
        F: Fn(usize, T) -> Self + 'static,
    {
        State::new(move |mut state| {
            let mut results = Vec::with_capacity(items.len());
            for (index, item) in items.iter().cloned().enumerate() {
                let (value, next_state) = function(index, item).run(state);
                results.push(value);
                state = next_state;
            }
            (results, state)
        })
    }

    /// Threads the state through a `Vec` of computations, collecting
    /// their results in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::State;
    ///
    /// let steps: Vec<State<i32, i32>> = vec![
    ///     State::new(|s: i32| (s, s + 1)),
    ///     State::new(|s: i32| (s * 10, s + 1)),
    /// ];
    /// let (results, final_state) = State::sequence_vec(steps).run(1);
    /// assert_eq!(results, vec![1, 20]);
    /// assert_eq!(final_state, 3);
    /// ```
    pub fn sequence_vec(computations: Vec<Self>) -> State<S, Vec<A>> {
        Self::traverse_vec_with_index(computations, |_, computation| computation)
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<S, A> Clone for State<S, A>
where
    S: 'static,
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

impl<S, A> std::fmt::Display for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<State>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_is_opaque() {
        let state: State<i32, i32> = State::pure(1);
        assert_eq!(state.to_string(), "<State>");
    }

    // =========================================================================
    // Core Operations
    // =========================================================================

    #[rstest]
    fn new_and_run() {
        let state: State<i32, i32> = State::new(|s| (s * 2, s + 1));
        assert_eq!(state.run(10), (20, 11));
    }

    #[rstest]
    fn eval_discards_state_and_exec_discards_result() {
        let state: State<i32, i32> = State::new(|s| (s + 1, s * 2));
        assert_eq!(state.eval(10), 11);
        assert_eq!(state.exec(10), 20);
    }

    #[rstest]
    fn pure_leaves_state_untouched() {
        let state: State<i32, &str> = State::pure("value");
        assert_eq!(state.run(7), ("value", 7));
    }

    #[rstest]
    fn fmap_transforms_only_the_result() {
        let state: State<i32, i32> = State::new(|s| (s, s));
        let (result, final_state) = state.fmap(|value| value * 2).run(21);
        assert_eq!(result, 42);
        assert_eq!(final_state, 21);
    }

    #[rstest]
    fn flat_map_tail_determines_final_state() {
        let state: State<i32, i32> = State::new(|s| (s, s + 1));
        let chained = state.flat_map(|value| State::new(move |s: i32| (value + s, s * 2)));
        assert_eq!(chained.run(10), (21, 22));
    }

    #[rstest]
    fn then_sequences_and_discards_first_result() {
        let first: State<i32, i32> = State::new(|s| (s, s + 10));
        let sequenced = first.then(State::pure("result"));
        assert_eq!(sequenced.run(42), ("result", 52));
    }

    #[rstest]
    fn map2_threads_state_left_to_right() {
        let first: State<i32, i32> = State::new(|s| (s, s + 1));
        let second: State<i32, i32> = State::new(|s| (s * 2, s + 1));
        let combined = first.map2(second, |a, b| a + b);
        assert_eq!(combined.run(10), (32, 12));
    }

    #[rstest]
    fn apply_runs_function_computation_first() {
        let function: State<i32, fn(i32) -> i32> =
            State::new(|s: i32| ((|x: i32| x + 1) as fn(i32) -> i32, s + 1));
        let argument: State<i32, i32> = State::new(|s: i32| (s * 10, s));
        assert_eq!(function.apply(argument).run(1), (21, 2));
    }

    // =========================================================================
    // MonadState Operations
    // =========================================================================

    #[rstest]
    fn get_reads_without_modifying() {
        let state: State<i32, i32> = State::get();
        assert_eq!(state.run(42), (42, 42));
    }

    #[rstest]
    fn put_replaces_state() {
        let state: State<i32, ()> = State::put(100);
        assert_eq!(state.run(42), ((), 100));
    }

    #[rstest]
    fn modify_transforms_state() {
        let state: State<i32, ()> = State::modify(|s| s * 2);
        assert_eq!(state.run(21), ((), 42));
    }

    #[rstest]
    fn gets_projects_state() {
        let state: State<Vec<i32>, usize> = State::gets(|items: &Vec<i32>| items.len());
        let (length, untouched) = state.run(vec![1, 2, 3]);
        assert_eq!(length, 3);
        assert_eq!(untouched, vec![1, 2, 3]);
    }

    // =========================================================================
    // MonadState Laws
    // =========================================================================

    #[rstest]
    fn get_put_law() {
        let roundtrip: State<i32, ()> = State::get().flat_map(State::put);
        assert_eq!(roundtrip.run(42), ((), 42));
    }

    #[rstest]
    fn put_get_law() {
        let state: State<i32, i32> = State::put(7).then(State::get());
        assert_eq!(state.run(0), (7, 7));
    }

    #[rstest]
    fn put_put_law() {
        let state: State<i32, ()> = State::put(1).then(State::put(2));
        assert_eq!(state.run(0), ((), 2));
    }

    #[rstest]
    fn modify_composition_law() {
        let composed: State<i32, ()> = State::modify(|s| s + 1).then(State::modify(|s| s * 2));
        let fused: State<i32, ()> = State::modify(|s| (s + 1) * 2);
        assert_eq!(composed.run(5), fused.run(5));
    }

    // =========================================================================
    // Traversal Operations
    // =========================================================================

    #[rstest]
    fn traverse_vec_threads_state_in_order() {
        let numbered: State<i32, Vec<String>> =
            State::traverse_vec(vec!["a", "b", "c"], |item| {
                State::new(move |count: i32| (format!("{count}:{item}"), count + 1))
            });
        let (results, total) = numbered.run(0);
        assert_eq!(results, vec!["0:a", "1:b", "2:c"]);
        assert_eq!(total, 3);
    }

    #[rstest]
    fn traverse_vec_with_index_hands_out_positions() {
        let tagged: State<u32, Vec<usize>> =
            State::traverse_vec_with_index(vec!["x", "y"], |index, _| {
                State::new(move |seen: u32| (index, seen + 1))
            });
        assert_eq!(tagged.run(0), (vec![0, 1], 2));
    }

    #[rstest]
    fn traverse_vec_empty_input_keeps_state() {
        let empty: State<i32, Vec<i32>> =
            State::traverse_vec(Vec::<i32>::new(), State::pure);
        assert_eq!(empty.run(9), (vec![], 9));
    }

    #[rstest]
    fn traverse_vec_survives_long_input() {
        let items: Vec<i32> = (0..100_000).collect();
        let counted: State<u64, Vec<i32>> = State::traverse_vec(items, |item| {
            State::new(move |count: u64| (item, count + 1))
        });
        let (results, count) = counted.run(0);
        assert_eq!(results.len(), 100_000);
        assert_eq!(count, 100_000);
    }

    #[rstest]
    fn sequence_vec_collects_in_order() {
        let steps: Vec<State<i32, i32>> = vec![
            State::new(|s: i32| (s, s + 1)),
            State::new(|s: i32| (s * 10, s + 1)),
        ];
        assert_eq!(State::sequence_vec(steps).run(1), (vec![1, 20], 3));
    }

    // =========================================================================
    // Monad Laws
    // =========================================================================

    #[rstest]
    fn left_identity_law() {
        let function = |n: i32| State::new(move |s: i32| (n * 2, s + 1));
        let lifted: State<i32, i32> = State::pure(5).flat_map(function);
        assert_eq!(lifted.run(0), function(5).run(0));
    }

    #[rstest]
    fn right_identity_law() {
        let state: State<i32, i32> = State::new(|s| (s * 2, s + 1));
        let rebound = state.clone().flat_map(State::pure);
        assert_eq!(rebound.run(10), state.run(10));
    }

    #[rstest]
    fn associativity_law() {
        let state = || State::new(|s: i32| (s, s + 1));
        let f = |n: i32| State::new(move |s: i32| (n + s, s));
        let g = |n: i32| State::new(move |s: i32| (n * 2, s));

        let left = state().flat_map(f).flat_map(g);
        let right = state().flat_map(move |x| f(x).flat_map(g));
        assert_eq!(left.run(10), right.run(10));
    }
}
