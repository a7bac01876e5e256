//! Property-based tests for Writer Monad laws.
//!
//! Tests the following laws using proptest:
//!
//! ## Functor Laws
//! - Identity: writer.fmap(|x| x) == writer
//! - Composition: writer.fmap(f).fmap(g) == writer.fmap(|x| g(f(x)))
//!
//! ## Monad Laws
//! - Left Identity: pure(a).flat_map(f) == f(a)
//! - Right Identity: m.flat_map(pure) == m
//! - Associativity: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//!
//! ## MonadWriter Laws
//! - tell(w1).then(tell(w2)) == tell(w1.combine(w2))
//! - listen exposes the output without changing it
//! - pass applied to an identity modifier is a no-op
//! - censor(f, m) == pass(m.fmap(|a| (a, f)))

use kindred::effect::Writer;
use kindred::typeclass::Semigroup;
use proptest::prelude::*;

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Functor Identity Law: writer.fmap(|x| x) == writer
    #[test]
    fn prop_writer_functor_identity(value in -1000i32..1000i32, log in ".{0,20}") {
        let writer: Writer<String, i32> = Writer::new(value, log.clone());
        let mapped = Writer::new(value, log).fmap(|x| x);

        prop_assert_eq!(writer, mapped);
    }

    /// Functor Composition Law: writer.fmap(f).fmap(g) == writer.fmap(|x| g(f(x)))
    #[test]
    fn prop_writer_functor_composition(value in -100i32..100i32, log in ".{0,20}") {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);

        let left = Writer::<String, i32>::new(value, log.clone())
            .fmap(function1)
            .fmap(function2);
        let right = Writer::<String, i32>::new(value, log)
            .fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Monad Left Identity Law: pure(a).flat_map(f) == f(a)
    #[test]
    fn prop_writer_monad_left_identity(value in -1000i32..1000i32) {
        let function = |a: i32| Writer::<String, i32>::new(a.wrapping_mul(2), format!("doubled {a};"));

        let left = Writer::<String, i32>::pure(value).flat_map(function);
        let right = function(value);

        prop_assert_eq!(left, right);
    }

    /// Monad Right Identity Law: m.flat_map(pure) == m
    #[test]
    fn prop_writer_monad_right_identity(value in -1000i32..1000i32, log in ".{0,20}") {
        let writer: Writer<String, i32> = Writer::new(value, log.clone());
        let right_identity = Writer::<String, i32>::new(value, log).flat_map(Writer::pure);

        prop_assert_eq!(writer, right_identity);
    }

    /// Monad Associativity Law: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
    #[test]
    fn prop_writer_monad_associativity(value in -100i32..100i32) {
        let function1 = |a: i32| Writer::<String, i32>::new(a.wrapping_add(1), "f;".to_string());
        let function2 = |b: i32| Writer::<String, i32>::new(b.wrapping_mul(2), "g;".to_string());

        let left = Writer::<String, i32>::new(value, "start;".to_string())
            .flat_map(function1)
            .flat_map(function2);
        let right = Writer::<String, i32>::new(value, "start;".to_string())
            .flat_map(move |x| function1(x).flat_map(function2));

        prop_assert_eq!(left, right);
    }

    /// flat_map accumulates the previous output before the new one.
    #[test]
    fn prop_writer_flat_map_accumulates_in_order(value in -100i32..100i32) {
        let chained = Writer::<Vec<&'static str>, i32>::new(value, vec!["first"])
            .flat_map(|x| Writer::new(x, vec!["second"]))
            .flat_map(|x| Writer::new(x, vec!["third"]));

        let (result, output) = chained.run();
        prop_assert_eq!(result, value);
        prop_assert_eq!(output, vec!["first", "second", "third"]);
    }
}

// =============================================================================
// MonadWriter Laws
// =============================================================================

proptest! {
    /// Two tells equal one tell of the combined output.
    #[test]
    fn prop_writer_tell_combines(log1 in ".{0,10}", log2 in ".{0,10}") {
        let sequential: Writer<String, ()> =
            Writer::tell(log1.clone()).then(Writer::tell(log2.clone()));
        let combined: Writer<String, ()> = Writer::tell(log1.combine(log2));

        prop_assert_eq!(sequential, combined);
    }

    /// listen pairs the result with the output, leaving the output as is.
    #[test]
    fn prop_writer_listen_exposes_output(value in -1000i32..1000i32, log in ".{0,20}") {
        let writer: Writer<String, i32> = Writer::new(value, log.clone());
        let listened = Writer::listen(writer);

        let ((result, heard), output) = listened.run();
        prop_assert_eq!(result, value);
        prop_assert_eq!(heard, log.clone());
        prop_assert_eq!(output, log);
    }

    /// pass with an identity modifier changes nothing.
    #[test]
    fn prop_writer_pass_identity_is_noop(value in -1000i32..1000i32, log in ".{0,20}") {
        let with_modifier: Writer<String, (i32, fn(String) -> String)> =
            Writer::new((value, |output: String| output), log.clone());
        let passed = Writer::pass(with_modifier);

        prop_assert_eq!(passed, Writer::new(value, log));
    }

    /// censor(f, m) rewrites the output with f.
    #[test]
    fn prop_writer_censor_rewrites_output(value in -1000i32..1000i32, log in "[a-z]{0,20}") {
        let writer: Writer<String, i32> = Writer::new(value, log.clone());
        let censored = Writer::censor(|output: String| output.to_uppercase(), writer);

        let (result, output) = censored.run();
        prop_assert_eq!(result, value);
        prop_assert_eq!(output, log.to_uppercase());
    }
}

// =============================================================================
// Unit Tests for Edge Cases
// =============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn writer_apply_combines_function_output_first() {
        let function: Writer<Vec<&'static str>, fn(i32) -> i32> =
            Writer::new(|x: i32| x + 1, vec!["function"]);
        let argument: Writer<Vec<&'static str>, i32> = Writer::new(41, vec!["argument"]);

        let (result, output) = function.apply(argument).run();
        assert_eq!(result, 42);
        assert_eq!(output, vec!["function", "argument"]);
    }

    #[rstest]
    fn writer_logging_pipeline() {
        fn step(label: &'static str, apply: fn(i32) -> i32) -> impl Fn(i32) -> Writer<Vec<String>, i32> {
            move |input| Writer::new(apply(input), vec![format!("{label}: {input}")])
        }

        let program = Writer::<Vec<String>, i32>::pure(10)
            .flat_map(step("add", |x| x + 5))
            .flat_map(step("double", |x| x * 2));

        let (result, output) = program.run();
        assert_eq!(result, 30);
        assert_eq!(output, vec!["add: 10".to_string(), "double: 15".to_string()]);
    }
}
