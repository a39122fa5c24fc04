//! Property-based tests for `Try` and `Either`

use proptest::prelude::*;
use std::cell::Cell;
use tryout::either::partition;
use tryout::{Cause, Either, Try};

/// `Try` holds an uncloneable cause, so properties generate a seed and build
/// as many equal outcomes from it as they need.
fn any_seed() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Ok),
        "[a-z]{1,12}".prop_map(Err),
    ]
}

fn any_either() -> impl Strategy<Value = Either<u8, i32>> {
    prop_oneof![
        any::<u8>().prop_map(Either::failure),
        any::<i32>().prop_map(Either::success),
    ]
}

fn build(seed: &Result<i32, String>) -> Try<i32> {
    match seed {
        Ok(value) => Try::success(*value),
        Err(message) => Try::failure(Cause::msg(message.clone())),
    }
}

/// Compare outcomes by value, or by cause message for failures.
fn observe(outcome: Try<i32>) -> Either<String, i32> {
    outcome.into_either().map_failure(|cause| cause.to_string())
}

fn half(v: i32) -> Try<i32> {
    if v % 2 == 0 {
        Try::success(v / 2)
    } else {
        Try::failure(Cause::msg("odd"))
    }
}

fn decrement(v: i32) -> Try<i32> {
    Try::attempt(|| v.checked_sub(1).ok_or_else(|| Cause::msg("underflow")))
}

proptest! {
    #[test]
    fn prop_right_identity(seed in any_seed()) {
        prop_assert_eq!(observe(build(&seed).and_then(Try::success)), observe(build(&seed)));
    }

    #[test]
    fn prop_associativity(seed in any_seed()) {
        prop_assert_eq!(
            observe(build(&seed).and_then(half).and_then(decrement)),
            observe(build(&seed).and_then(|v| half(v).and_then(decrement)))
        );
    }

    #[test]
    fn prop_map_runs_once_on_success_never_on_failure(seed in any_seed()) {
        let calls = Cell::new(0);
        let _ = build(&seed).map(|v| {
            calls.set(calls.get() + 1);
            v
        });
        prop_assert_eq!(calls.get(), usize::from(seed.is_ok()));
    }

    #[test]
    fn prop_and_then_runs_once_on_success_never_on_failure(seed in any_seed()) {
        let calls = Cell::new(0);
        let _ = build(&seed).and_then(|v| {
            calls.set(calls.get() + 1);
            Try::success(v)
        });
        prop_assert_eq!(calls.get(), usize::from(seed.is_ok()));
    }

    #[test]
    fn prop_or_prefers_first_success(x: i32, seed in any_seed()) {
        prop_assert_eq!(Try::success(x).or(build(&seed)).into_option(), Some(x));
    }

    #[test]
    fn prop_or_after_failure_yields_alternative(msg in "[a-z]{1,12}", seed in any_seed()) {
        let failed = Try::<i32>::failure(Cause::msg(msg));
        prop_assert_eq!(observe(failed.or(build(&seed))), observe(build(&seed)));
    }

    #[test]
    fn prop_or_else_is_lazy_on_success(x: i32) {
        let called = Cell::new(false);
        let result = Try::success(x).or_else(|| {
            called.set(true);
            Try::success(0)
        });
        prop_assert_eq!(result.into_option(), Some(x));
        prop_assert!(!called.get());
    }

    #[test]
    fn prop_conversions_agree(seed in any_seed()) {
        let either = build(&seed).into_either();
        prop_assert_eq!(either.is_success(), seed.is_ok());
        prop_assert_eq!(either.into_success(), build(&seed).into_option());
        prop_assert_eq!(build(&seed).into_option(), seed.clone().ok());
    }

    #[test]
    fn prop_filter_failure_uses_new_cause(seed in any_seed(), keep: bool) {
        let filtered = build(&seed).filter(|_| keep, || Cause::msg("filtered"));
        if seed.is_ok() && keep {
            prop_assert_eq!(filtered.into_option(), seed.ok());
        } else {
            prop_assert_eq!(observe(filtered), Either::failure("filtered".to_string()));
        }
    }

    #[test]
    fn prop_unwrap_or_else_matches_unwrap_or(seed in any_seed(), default: i32) {
        prop_assert_eq!(
            build(&seed).unwrap_or_else(|| default),
            build(&seed).unwrap_or(default)
        );
    }

    #[test]
    fn prop_either_left_identity(x: i32) {
        let f = |v: i32| -> Either<String, i32> {
            v.checked_mul(2)
                .map_or_else(|| Either::failure("overflow".to_string()), Either::success)
        };
        prop_assert_eq!(Either::success(x).and_then(f), f(x));
    }

    #[test]
    fn prop_either_map_failure_leaves_success(e in any_either()) {
        let mapped = e.map_failure(|f| u16::from(f) + 1);
        prop_assert_eq!(mapped.into_success(), e.into_success());
    }

    #[test]
    fn prop_either_success_or(e in any_either(), default: i32) {
        let expected = match e {
            Either::Success(v) => v,
            Either::Failure(_) => default,
        };
        prop_assert_eq!(e.success_or(default), expected);
    }

    #[test]
    fn prop_partition_preserves_counts(items in prop::collection::vec(any_either(), 0..50)) {
        let failures = items.iter().filter(|e| e.is_failure()).count();
        let (left, right) = partition(items.clone());
        prop_assert_eq!(left.len(), failures);
        prop_assert_eq!(right.len(), items.len() - failures);
    }
}
