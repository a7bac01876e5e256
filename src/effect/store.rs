//! Store Comonad - a focused position inside a total lookup function.
//!
//! A `Store<S, A>` pairs a total peek function `S -> A` with a current
//! position of type `S`. Where a monad builds a computation forward, the
//! `Store` comonad extracts a value from a context and lets neighbouring
//! positions be inspected without losing the focus.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::Store;
//!
//! let store = Store::new(|position: i32| position * 2, 5);
//! assert_eq!(store.extract(), 10);
//! assert_eq!(store.peek(8), 16);
//! assert_eq!(store.seek(3).extract(), 6);
//! ```

use std::rc::Rc;

/// A comonadic pair of a total lookup function and a focused position.
///
/// The peek function is shared across every `Store` derived by
/// [`Store::seek`], [`Store::seeks`], or [`Store::extend`]; repositioning
/// produces a new `Store` and never mutates the original.
///
/// # Comonad Laws
///
/// `Store` satisfies the comonad laws:
///
/// 1. **Left Identity**: `store.extend(Store::extract) == store`
/// 2. **Right Identity**: `store.extend(f).extract() == f(store)`
/// 3. **Associativity**: `store.extend(f).extend(g) == store.extend(|w| g(w.extend(f)))`
pub struct Store<S, A>
where
    S: 'static,
    A: 'static,
{
    /// The total lookup function, shared by every derived `Store`.
    peek_function: Rc<dyn Fn(S) -> A>,
    /// The focused position.
    position: S,
}

impl<S, A> Store<S, A>
where
    S: Clone + 'static,
    A: 'static,
{
    /// Creates a new `Store` from a lookup function and an initial
    /// position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Store;
    ///
    /// let store = Store::new(|position: i32| position + 1, 0);
    /// assert_eq!(store.extract(), 1);
    /// ```
    pub fn new<F>(peek_function: F, position: S) -> Self
    where
        F: Fn(S) -> A + 'static,
    {
        Self {
            peek_function: Rc::new(peek_function),
            position,
        }
    }

    /// Returns the focused position.
    pub fn position(&self) -> &S {
        &self.position
    }

    /// Looks up the value at an arbitrary position, leaving the focus
    /// untouched.
    pub fn peek(&self, position: S) -> A {
        (self.peek_function)(position)
    }

    /// Looks up the value at a position derived from the current focus.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Store;
    ///
    /// let store = Store::new(|position: i32| position * 2, 5);
    /// assert_eq!(store.peeks(|position| position + 1), 12);
    /// ```
    pub fn peeks<F>(&self, modifier: F) -> A
    where
        F: FnOnce(S) -> S,
    {
        self.peek(modifier(self.position.clone()))
    }

    /// Returns a new `Store` focused at the given position, sharing the
    /// lookup function.
    #[must_use]
    pub fn seek(&self, position: S) -> Self {
        Self {
            peek_function: Rc::clone(&self.peek_function),
            position,
        }
    }

    /// Returns a new `Store` focused at a position derived from the
    /// current one.
    #[must_use]
    pub fn seeks<F>(&self, modifier: F) -> Self
    where
        F: FnOnce(S) -> S,
    {
        self.seek(modifier(self.position.clone()))
    }

    /// Extracts the value at the focused position.
    ///
    /// `extract` always equals `peek` applied to the current position.
    pub fn extract(&self) -> A {
        self.peek(self.position.clone())
    }

    /// Extends a context-aware function over every position.
    ///
    /// The resulting `Store`'s lookup function, given any position,
    /// refocuses the original `Store` there and applies `function` to it.
    /// The focused position is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Store;
    ///
    /// // Average of the focused value and its right neighbour.
    /// let store = Store::new(|position: i32| position * position, 3);
    /// let smoothed = store.extend(|window| {
    ///     (window.extract() + window.peeks(|position| position + 1)) / 2
    /// });
    /// assert_eq!(smoothed.extract(), (9 + 16) / 2);
    /// ```
    pub fn extend<B, F>(&self, function: F) -> Store<S, B>
    where
        F: Fn(Store<S, A>) -> B + 'static,
        B: 'static,
    {
        let peek_function = Rc::clone(&self.peek_function);
        Store {
            peek_function: Rc::new(move |position: S| {
                function(Store {
                    peek_function: Rc::clone(&peek_function),
                    position,
                })
            }),
            position: self.position.clone(),
        }
    }

    /// Wraps every position's view of the whole `Store` into a
    /// `Store`-of-`Store`s.
    #[must_use]
    pub fn duplicate(&self) -> Store<S, Store<S, A>> {
        self.extend(|window| window)
    }

    /// Transforms every looked-up value with a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Store;
    ///
    /// let store = Store::new(|position: i32| position + 1, 5).fmap(|value| value * 10);
    /// assert_eq!(store.extract(), 60);
    /// ```
    pub fn fmap<B, F>(&self, function: F) -> Store<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let peek_function = Rc::clone(&self.peek_function);
        Store {
            peek_function: Rc::new(move |position: S| function((peek_function)(position))),
            position: self.position.clone(),
        }
    }

    /// Explores a hypothetical position inside `Option`, collecting the
    /// looked-up value if the position is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Store;
    ///
    /// let store = Store::new(|position: i32| position * 2, 5);
    /// assert_eq!(store.experiment_option(|position| Some(position + 1)), Some(12));
    /// assert_eq!(store.experiment_option(|_| None), None);
    /// ```
    pub fn experiment_option<F>(&self, function: F) -> Option<A>
    where
        F: FnOnce(S) -> Option<S>,
    {
        function(self.position.clone()).map(|position| self.peek(position))
    }

    /// Explores a set of hypothetical positions, collecting the value at
    /// each one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Store;
    ///
    /// let store = Store::new(|position: i32| position * 2, 5);
    /// let neighbourhood =
    ///     store.experiment_vec(|position| vec![position - 1, position, position + 1]);
    /// assert_eq!(neighbourhood, vec![8, 10, 12]);
    /// ```
    pub fn experiment_vec<F>(&self, function: F) -> Vec<A>
    where
        F: FnOnce(S) -> Vec<S>,
    {
        function(self.position.clone())
            .into_iter()
            .map(|position| self.peek(position))
            .collect()
    }
}

impl<S, A> Clone for Store<S, A>
where
    S: Clone + 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            peek_function: Rc::clone(&self.peek_function),
            position: self.position.clone(),
        }
    }
}

impl<S, A> std::fmt::Debug for Store<S, A>
where
    S: Clone + std::fmt::Debug + 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Store")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
