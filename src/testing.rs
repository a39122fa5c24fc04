//! Testing utilities for code built on `Try`, `Either` and resource chains.
//!
//! - [`SpyLog`] / [`SpyResource`]: resources that record when they are
//!   acquired, used and released, so tests can assert ordering and counts
//! - [`assert_success!`](crate::assert_success),
//!   [`assert_failure!`](crate::assert_failure),
//!   [`assert_cause!`](crate::assert_cause): assertion macros for `Try`
//! - with the `proptest` feature, `Arbitrary` for `Either` and a strategy for
//!   `Try`
//!
//! # Example
//!
//! ```rust
//! use tryout::testing::{SpyEvent, SpyLog};
//! use tryout::{assert_success, Cause, Try};
//!
//! let log = SpyLog::new();
//! let result = Try::with_resource(log.resource("a"))
//!     .with_resource(log.resource("b"))
//!     .of(|a, b| {
//!         a.touch();
//!         b.touch();
//!         Ok::<_, Cause>(a.name().len() + b.name().len())
//!     });
//!
//! assert_success!(result);
//! assert_eq!(
//!     log.events(),
//!     vec![
//!         SpyEvent::Acquired("a"),
//!         SpyEvent::Acquired("b"),
//!         SpyEvent::Used("a"),
//!         SpyEvent::Used("b"),
//!         SpyEvent::Released("b"),
//!         SpyEvent::Released("a"),
//!     ]
//! );
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use crate::{Cause, Release};

/// Something that happened to a spy resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpyEvent {
    /// The resource was acquired.
    Acquired(&'static str),
    /// Acquiring the resource failed.
    AcquireFailed(&'static str),
    /// Work called [`SpyResource::touch`].
    Used(&'static str),
    /// The resource's release ran (whether or not it failed).
    Released(&'static str),
}

/// Shared, ordered record of [`SpyEvent`]s.
///
/// Cloning a `SpyLog` shares the same record. Its methods hand out
/// acquisition functions that can be passed straight to
/// [`Try::with_resource`](crate::Try::with_resource).
#[derive(Debug, Clone, Default)]
pub struct SpyLog {
    events: Arc<Mutex<Vec<SpyEvent>>>,
}

impl SpyLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// An acquisition function for a resource that releases cleanly.
    pub fn resource(&self, name: &'static str) -> impl Fn() -> Result<SpyResource, Cause> + Clone {
        let log = self.clone();
        move || Ok(log.acquired(name, None))
    }

    /// An acquisition function that always fails with `message`.
    pub fn failing_acquire(
        &self,
        name: &'static str,
        message: &'static str,
    ) -> impl Fn() -> Result<SpyResource, Cause> + Clone {
        let log = self.clone();
        move || {
            log.record(SpyEvent::AcquireFailed(name));
            Err(Cause::msg(message))
        }
    }

    /// An acquisition function for a resource whose release fails with
    /// `message`.
    pub fn failing_release(
        &self,
        name: &'static str,
        message: &'static str,
    ) -> impl Fn() -> Result<SpyResource, Cause> + Clone {
        let log = self.clone();
        move || Ok(log.acquired(name, Some(message)))
    }

    /// Every recorded event, oldest first.
    pub fn events(&self) -> Vec<SpyEvent> {
        self.lock().clone()
    }

    /// Names of acquired resources, in acquisition order.
    pub fn acquired_names(&self) -> Vec<&'static str> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SpyEvent::Acquired(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    /// Names of released resources, in release order.
    pub fn released(&self) -> Vec<&'static str> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SpyEvent::Released(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    /// How many times a resource called `name` was acquired.
    pub fn acquire_count(&self, name: &str) -> usize {
        self.count(|event| matches!(event, SpyEvent::Acquired(n) if *n == name))
    }

    /// How many times a resource called `name` was released.
    pub fn release_count(&self, name: &str) -> usize {
        self.count(|event| matches!(event, SpyEvent::Released(n) if *n == name))
    }

    fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(&SpyEvent) -> bool,
    {
        self.lock().iter().filter(|event| predicate(event)).count()
    }

    fn acquired(&self, name: &'static str, release_failure: Option<&'static str>) -> SpyResource {
        self.record(SpyEvent::Acquired(name));
        SpyResource {
            name,
            release_failure,
            log: self.clone(),
        }
    }

    fn record(&self, event: SpyEvent) {
        self.lock().push(event);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SpyEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A resource handed out by a [`SpyLog`].
#[derive(Debug)]
pub struct SpyResource {
    name: &'static str,
    release_failure: Option<&'static str>,
    log: SpyLog,
}

impl SpyResource {
    /// The name the resource was created with.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Record a [`SpyEvent::Used`] for this resource.
    pub fn touch(&mut self) {
        self.log.record(SpyEvent::Used(self.name));
    }
}

impl Release for SpyResource {
    type Error = Cause;

    fn release(self) -> Result<(), Cause> {
        self.log.record(SpyEvent::Released(self.name));
        match self.release_failure {
            Some(message) => Err(Cause::msg(message)),
            None => Ok(()),
        }
    }
}

/// Assert that a `Try` succeeded.
///
/// # Example
///
/// ```rust
/// use tryout::{assert_success, Try};
///
/// assert_success!(Try::success(42));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Try::Success(_) => {}
            $crate::Try::Failure(cause) => {
                panic!("Expected Success, got Failure: {:#}", cause);
            }
        }
    };
}

/// Assert that a `Try` failed.
///
/// # Example
///
/// ```rust
/// use tryout::{assert_failure, Cause, Try};
///
/// assert_failure!(Try::<i32>::failure(Cause::msg("boom")));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Try::Failure(_) => {}
            $crate::Try::Success(value) => {
                panic!("Expected Failure, got Success: {:?}", value);
            }
        }
    };
}

/// Assert that a `Try` failed with a cause whose message is `expected`.
///
/// # Example
///
/// ```rust
/// use tryout::{assert_cause, Cause, Try};
///
/// assert_cause!(Try::<i32>::failure(Cause::msg("boom")), "boom");
/// ```
#[macro_export]
macro_rules! assert_cause {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Try::Failure(cause) => {
                assert_eq!(cause.to_string(), $expected);
            }
            $crate::Try::Success(value) => {
                panic!(
                    "Expected Failure with cause {:?}, got Success: {:?}",
                    $expected, value
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<E, A> Arbitrary for crate::Either<E, A>
where
    E: Arbitrary + 'static,
    A: Arbitrary + 'static,
    E::Strategy: 'static,
    A::Strategy: 'static,
{
    type Parameters = (E::Parameters, A::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (e_params, a_params) = args;
        prop_oneof![
            any_with::<E>(e_params).prop_map(crate::Either::failure),
            any_with::<A>(a_params).prop_map(crate::Either::success),
        ]
        .boxed()
    }
}

/// A strategy producing `Try<T>` values: successes from `value`, failures
/// with a short generated message.
#[cfg(feature = "proptest")]
pub fn arb_try<T, S>(value: S) -> impl Strategy<Value = crate::Try<T>>
where
    T: std::fmt::Debug,
    S: Strategy<Value = T>,
{
    prop_oneof![
        value.prop_map(crate::Try::success),
        "[a-z]{1,12}".prop_map(|message| crate::Try::failure(Cause::msg(message))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Try;

    #[test]
    fn spy_records_acquire_and_release() {
        let log = SpyLog::new();
        let acquire = log.resource("a");
        let resource = acquire().unwrap();
        assert_eq!(resource.name(), "a");
        resource.release().unwrap();

        assert_eq!(
            log.events(),
            vec![SpyEvent::Acquired("a"), SpyEvent::Released("a")]
        );
        assert_eq!(log.acquire_count("a"), 1);
        assert_eq!(log.release_count("a"), 1);
        assert_eq!(log.release_count("b"), 0);
    }

    #[test]
    fn failing_release_still_records() {
        let log = SpyLog::new();
        let resource = log.failing_release("a", "nope")().unwrap();
        let err = resource.release().unwrap_err();
        assert_eq!(err.to_string(), "nope");
        assert_eq!(log.released(), vec!["a"]);
    }

    #[test]
    fn failing_acquire_records_attempt() {
        let log = SpyLog::new();
        assert!(log.failing_acquire("a", "down")().is_err());
        assert_eq!(log.events(), vec![SpyEvent::AcquireFailed("a")]);
        assert_eq!(log.acquire_count("a"), 0);
    }

    #[test]
    fn clones_share_the_record() {
        let log = SpyLog::new();
        let other = log.clone();
        let _ = other.resource("x")().unwrap();
        assert_eq!(log.acquired_names(), vec!["x"]);
    }

    #[test]
    fn assert_success_macro() {
        assert_success!(Try::success(42));
    }

    #[test]
    fn assert_failure_macro() {
        assert_failure!(Try::<i32>::failure(Cause::msg("x")));
    }

    #[test]
    fn assert_cause_macro() {
        assert_cause!(Try::<i32>::failure(Cause::msg("x")), "x");
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        assert_success!(Try::<i32>::failure(Cause::msg("x")));
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        assert_failure!(Try::success(42));
    }

    #[test]
    #[should_panic(expected = "Expected Failure with cause")]
    fn assert_cause_panics_on_success() {
        assert_cause!(Try::success(42), "x");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use crate::Either;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn either_arbitrary_generates_valid_instances(e in any::<Either<String, i32>>()) {
                prop_assert!(e.is_failure() != e.is_success());
            }

            #[test]
            fn either_arbitrary_nests_in_collections(
                items in proptest::collection::vec(any::<Either<u8, String>>(), 0..8)
            ) {
                prop_assert!(items.iter().all(|e| e.is_failure() != e.is_success()));
            }

            #[test]
            fn arb_try_generates_both_variants(t in arb_try(any::<i32>())) {
                prop_assert!(t.is_failure() != t.is_success());
            }
        }
    }
}
