//! Concrete computational contexts and their transformers.
//!
//! This module provides the data types that put the algebra of
//! [`typeclass`](crate::typeclass) to work: each one wires `fmap`,
//! `flat_map`, and friends to its own notion of context.
//!
//! # Base Types
//!
//! - [`State`]: Computations that thread a state value
//! - [`Store`]: A focused position inside a total lookup function (comonad)
//! - [`Reader`]: Computations that read from a shared environment
//! - [`Writer`]: Computations that accumulate output alongside a result
//! - [`IO`]: Computations with deferred side effects
//! - [`Predicate`]: Composable boolean tests with AND/OR monoids
//!   ([`Any`], [`All`])
//!
//! # Compositions and Transformers
//!
//! - [`ReaderIO`]: Environment-reading, deferred side-effecting
//!   computations (`Reader` composed with `IO`)
//! - [`ReaderT`]: Adds environment reading to an inner monad
//! - [`WriterT`]: Adds output accumulation to an inner monad
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{IO, State};
//!
//! // State threads a value through a chain of steps.
//! let counter: State<i32, i32> = State::new(|count| (count, count + 1));
//! let program = counter.clone().flat_map(move |first| {
//!     counter.clone().fmap(move |second| (first, second))
//! });
//! assert_eq!(program.run(0), ((0, 1), 2));
//!
//! // IO defers side effects until run_unsafe is called.
//! let io = IO::pure(10).fmap(|x| x * 2).flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.run_unsafe(), 21);
//! ```

// =============================================================================
// Base Types
// =============================================================================

mod io;
mod predicate;
mod reader;
mod state;
mod store;
mod writer;

pub use io::IO;
pub use predicate::{All, Any, Predicate};
pub use reader::Reader;
pub use state::State;
pub use store::Store;
pub use writer::Writer;

// =============================================================================
// Compositions and Transformers
// =============================================================================

mod reader_io;
mod reader_transformer;
mod writer_transformer;

pub use reader_io::ReaderIO;
pub use reader_transformer::ReaderT;
pub use writer_transformer::WriterT;
