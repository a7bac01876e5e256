//! Property-based tests for Store Comonad laws.
//!
//! Tests the following laws using proptest:
//!
//! ## Functor Laws
//! - Identity: store.fmap(|x| x) == store
//! - Composition: store.fmap(f).fmap(g) == store.fmap(|x| g(f(x)))
//!
//! ## Comonad Laws
//! - Left Identity: store.extend(extract) == store
//! - Right Identity: store.extend(f).extract() == f(store)
//! - Associativity: store.extend(f).extend(g) == store.extend(|w| g(w.extend(f)))
//!
//! ## Extract Contract
//! - extract(store) == store.peek(store.pos) for arbitrary peek functions
//!   and positions

use kindred::effect::Store;
use proptest::prelude::*;

// Structural equality for stores over i32: same position, same lookup on
// a sample of probe positions.
fn assert_store_equivalent(
    left: &Store<i32, i32>,
    right: &Store<i32, i32>,
) -> Result<(), TestCaseError> {
    prop_assert_eq!(*left.position(), *right.position());
    for probe in [-100, -1, 0, 1, 7, 100] {
        prop_assert_eq!(left.peek(probe), right.peek(probe));
    }
    Ok(())
}

// =============================================================================
// Extract Contract
// =============================================================================

proptest! {
    /// extract always equals peek applied to the current position.
    #[test]
    fn prop_store_extract_equals_peek_at_position(position in -1000i32..1000i32, factor in -50i32..50i32) {
        let store = Store::new(move |p: i32| p.wrapping_mul(factor), position);
        prop_assert_eq!(store.extract(), store.peek(position));
        prop_assert_eq!(store.extract(), position.wrapping_mul(factor));
    }

    /// seek repositions; the original focus is untouched.
    #[test]
    fn prop_store_seek_repositions(position in -1000i32..1000i32, target in -1000i32..1000i32) {
        let store = Store::new(|p: i32| p.wrapping_mul(2), position);
        let moved = store.seek(target);

        prop_assert_eq!(moved.extract(), target.wrapping_mul(2));
        prop_assert_eq!(*store.position(), position);
    }

    /// peeks observes a derived position without moving the focus.
    #[test]
    fn prop_store_peeks_is_peek_after_modifier(position in -1000i32..1000i32, offset in -100i32..100i32) {
        let store = Store::new(|p: i32| p.wrapping_add(1), position);
        prop_assert_eq!(
            store.peeks(move |p| p.wrapping_add(offset)),
            store.peek(position.wrapping_add(offset))
        );
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Functor Identity Law: store.fmap(|x| x) == store
    #[test]
    fn prop_store_functor_identity(position in -1000i32..1000i32) {
        let store = Store::new(|p: i32| p.wrapping_mul(3), position);
        let mapped = store.fmap(|x| x);
        assert_store_equivalent(&store, &mapped)?;
    }

    /// Functor Composition Law: store.fmap(f).fmap(g) == store.fmap(|x| g(f(x)))
    #[test]
    fn prop_store_functor_composition(position in -100i32..100i32) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);

        let store = Store::new(|p: i32| p, position);
        let left = store.fmap(function1).fmap(function2);
        let right = store.fmap(move |x| function2(function1(x)));

        assert_store_equivalent(&left, &right)?;
    }
}

// =============================================================================
// Comonad Laws
// =============================================================================

proptest! {
    /// Left Identity Law: extending with extract rebuilds the same store.
    #[test]
    fn prop_store_comonad_left_identity(position in -1000i32..1000i32) {
        let store = Store::new(|p: i32| p.wrapping_mul(2), position);
        let extended = store.extend(|window| window.extract());
        assert_store_equivalent(&store, &extended)?;
    }

    /// Right Identity Law: store.extend(f).extract() == f(store)
    #[test]
    fn prop_store_comonad_right_identity(position in -1000i32..1000i32) {
        let store = Store::new(|p: i32| p.wrapping_mul(2), position);
        let function = |window: Store<i32, i32>| window.extract().wrapping_add(1);

        prop_assert_eq!(store.extend(function).extract(), function(store.clone()));
    }

    /// Associativity Law: extend(f) then extend(g) equals a single extend
    /// of their composition.
    #[test]
    fn prop_store_comonad_associativity(position in -100i32..100i32) {
        let store = Store::new(|p: i32| p, position);
        let f = |window: Store<i32, i32>| window.extract().wrapping_add(1);
        let g = |window: Store<i32, i32>| window.extract().wrapping_mul(3);

        let left = store.extend(f).extend(g);
        let right = store.extend(move |window| g(window.extend(f)));

        assert_store_equivalent(&left, &right)?;
    }

    /// extract after duplicate is the identity, both directly and via fmap.
    #[test]
    fn prop_store_duplicate_then_extract_is_identity(position in -1000i32..1000i32) {
        let store = Store::new(|p: i32| p.wrapping_mul(2), position);

        let via_extract = store.duplicate().extract();
        assert_store_equivalent(&store, &via_extract)?;

        let via_fmap = store.duplicate().fmap(|window| window.extract());
        assert_store_equivalent(&store, &via_fmap)?;
    }

    /// The position of an extended store is unchanged, and its lookup at
    /// any position sees the original store refocused there.
    #[test]
    fn prop_store_extend_contract(position in -100i32..100i32, probe in -100i32..100i32) {
        let store = Store::new(|p: i32| p.wrapping_mul(2), position);
        let extended = store.extend(|window| {
            window.extract().wrapping_add(window.peeks(|p| p.wrapping_add(1)))
        });

        prop_assert_eq!(*extended.position(), position);
        prop_assert_eq!(
            extended.peek(probe),
            probe.wrapping_mul(2).wrapping_add(probe.wrapping_add(1).wrapping_mul(2))
        );
    }
}

// =============================================================================
// Experiment
// =============================================================================

proptest! {
    /// experiment over Option maps peek inside the functor.
    #[test]
    fn prop_store_experiment_option(position in -1000i32..1000i32, offset in -100i32..100i32) {
        let store = Store::new(|p: i32| p.wrapping_mul(2), position);

        prop_assert_eq!(
            store.experiment_option(move |p| Some(p.wrapping_add(offset))),
            Some(position.wrapping_add(offset).wrapping_mul(2))
        );
        prop_assert_eq!(store.experiment_option(|_| None), None);
    }

    /// experiment over Vec peeks every candidate position in order.
    #[test]
    fn prop_store_experiment_vec(position in -100i32..100i32, offsets in proptest::collection::vec(-50i32..50i32, 0..10)) {
        let store = Store::new(|p: i32| p.wrapping_mul(2), position);

        let candidates = offsets.clone();
        let observed = store.experiment_vec(move |p| {
            candidates.into_iter().map(|offset| p.wrapping_add(offset)).collect()
        });

        let expected: Vec<i32> = offsets
            .into_iter()
            .map(|offset| position.wrapping_add(offset).wrapping_mul(2))
            .collect();
        prop_assert_eq!(observed, expected);
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
    fn moving_average_over_a_sequence() {
        let samples = [3, 1, 4, 1, 5, 9, 2, 6];
        let store = Store::new(
            move |index: usize| samples.get(index).copied().unwrap_or(0),
            0,
        );

        let smoothed = store.extend(|window| {
            (window.extract() + window.peeks(|index| index + 1)) / 2
        });

        assert_eq!(smoothed.extract(), 2);
        assert_eq!(smoothed.peek(4), 7);
        // Past the end the lookup falls back to zero.
        assert_eq!(smoothed.peek(7), 3);
    }

    #[rstest]
    fn duplicate_inner_stores_share_the_lookup() {
        let store = Store::new(|p: i32| p * 2, 5);
        let doubled = store.duplicate();

        let refocused = doubled.peek(9);
        assert_eq!(*refocused.position(), 9);
        assert_eq!(refocused.peek(1), 2);
    }
}
