//! The `Try` type: the captured outcome of a fallible computation.
//!
//! A [`Try<T>`] is either `Success(T)` or `Failure(Cause)`. Fallible callbacks
//! return `Result<_, E>` with `E: Into<Cause>`; every constructor and
//! combinator that runs a callback captures its failure instead of
//! propagating it.
//!
//! # Examples
//!
//! ```
//! use tryout::Try;
//!
//! let port = Try::attempt(|| "8080".parse::<u16>())
//!     .filter(|p| *p >= 1024, || tryout::Cause::msg("privileged port"))
//!     .map(|p| p + 1);
//!
//! assert_eq!(port.unwrap_or(0), 8081);
//!
//! let broken = Try::attempt(|| "eighty".parse::<u16>());
//! assert!(broken.is_failure());
//! assert_eq!(broken.unwrap_or(80), 80);
//! ```
//!
//! ## Resources
//!
//! ```
//! use tryout::testing::SpyLog;
//! use tryout::{Cause, Try};
//!
//! let log = SpyLog::new();
//! let result = Try::with_resource(log.resource("input"))
//!     .with_resource(log.failing_acquire("output", "permission denied"))
//!     .of_consumer(|_input, _output| Ok::<_, Cause>(()));
//!
//! assert_eq!(result.cause().map(|c| c.to_string()), Some("permission denied".to_string()));
//! assert_eq!(log.released(), vec!["input"]);
//! ```

use crate::resource::{self, Acquire, WithResource1, WithResource2};
use crate::{Cause, Either};

/// The outcome of a fallible computation.
///
/// Exactly one of a success value or a failure [`Cause`]. All combinators
/// consume `self`; an outcome never changes after construction.
#[derive(Debug)]
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(Cause),
}

impl<T> Try<T> {
    // ========== Constructors ==========

    /// Create a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::Try;
    ///
    /// let t = Try::success(42);
    /// assert!(t.is_success());
    /// assert_eq!(t.unwrap_or(0), 42);
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Try::Success(value)
    }

    /// Create a failed outcome from anything convertible into a [`Cause`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::{Cause, Try};
    ///
    /// let t = Try::<i32>::failure(Cause::msg("boom"));
    /// assert!(t.is_failure());
    /// ```
    #[inline]
    pub fn failure<C>(cause: C) -> Self
    where
        C: Into<Cause>,
    {
        Try::Failure(cause.into())
    }

    /// Run `supplier` once and capture its result.
    ///
    /// `Ok(v)` becomes `Success(v)`; `Err(e)` becomes `Failure` holding exactly
    /// `e`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::Try;
    ///
    /// assert!(Try::attempt(|| "42".parse::<i32>()).is_success());
    /// assert!(Try::attempt(|| "x".parse::<i32>()).is_failure());
    /// ```
    pub fn attempt<E, F>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<Cause>,
    {
        match supplier() {
            Ok(value) => Try::Success(value),
            Err(error) => Try::Failure(error.into()),
        }
    }

    /// Create an outcome from a `Result`.
    #[inline]
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Into<Cause>,
    {
        match result {
            Ok(value) => Try::Success(value),
            Err(error) => Try::Failure(error.into()),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` for `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Try::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Try::Failure(_))
    }

    /// Borrow the failure cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        match self {
            Try::Success(_) => None,
            Try::Failure(cause) => Some(cause),
        }
    }

    /// Borrow the success value, if any.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Try::Success(value) => Some(value),
            Try::Failure(_) => None,
        }
    }

    /// Borrow both sides as a `Result`, leaving the outcome in place.
    #[inline]
    pub fn as_ref(&self) -> Result<&T, &Cause> {
        match self {
            Try::Success(value) => Ok(value),
            Try::Failure(cause) => Err(cause),
        }
    }

    // ========== Transformations ==========

    /// Transform the success value.
    ///
    /// A `Failure` passes through with its cause untouched and `f` is not
    /// called.
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::Try;
    ///
    /// let t = Try::success("success").map(str::to_uppercase);
    /// assert_eq!(t.unwrap_or_default(), "SUCCESS");
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Try::Success(value) => Try::Success(f(value)),
            Try::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Transform the success value with a fallible function.
    ///
    /// On `Success(v)` this is `Try::attempt(|| f(v))`. A `Failure` passes
    /// through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::Try;
    ///
    /// let parsed = Try::success("12").try_map(|s| s.parse::<u8>());
    /// assert_eq!(parsed.unwrap_or(0), 12);
    ///
    /// let overflow = Try::success("1200").try_map(|s| s.parse::<u8>());
    /// assert!(overflow.is_failure());
    /// ```
    pub fn try_map<U, E, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<Cause>,
    {
        match self {
            Try::Success(value) => Try::attempt(|| f(value)),
            Try::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Chain a computation that itself returns a `Try` (flatMap).
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::{Cause, Try};
    ///
    /// fn second_half(s: &str) -> Try<&str> {
    ///     match s.split_once('&') {
    ///         Some((_, rest)) => Try::success(rest),
    ///         None => Try::failure(Cause::msg("no separator")),
    ///     }
    /// }
    ///
    /// assert_eq!(Try::success("suc&cess").and_then(second_half).unwrap_or("?"), "cess");
    /// assert!(Try::success("success").and_then(second_half).is_failure());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Try::Success(value) => f(value),
            Try::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Keep a success only if it satisfies `predicate`.
    ///
    /// - `Success(v)` and `predicate(&v)` holds: the original success
    /// - `Success(v)` and it does not: `Failure(cause())`
    /// - `Failure(_)`: `Failure(cause())`, replacing the earlier cause
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::{Cause, Try};
    ///
    /// let kept = Try::success("success").filter(|s| !s.is_empty(), || Cause::msg("empty"));
    /// assert_eq!(kept.unwrap_or("FAILURE"), "success");
    ///
    /// let dropped = Try::success("success").filter(|s| s.is_empty(), || Cause::msg("boom!"));
    /// assert_eq!(dropped.cause().unwrap().to_string(), "boom!");
    /// ```
    pub fn filter<P, C, G>(self, predicate: P, cause: G) -> Self
    where
        P: FnOnce(&T) -> bool,
        G: FnOnce() -> C,
        C: Into<Cause>,
    {
        match self {
            Try::Success(value) if predicate(&value) => Try::Success(value),
            // An existing failure is replaced, not kept.
            // TODO: keep the original cause once callers stop relying on replacement.
            _ => Try::Failure(cause().into()),
        }
    }

    /// Transform the failure cause.
    #[inline]
    pub fn map_cause<F>(self, f: F) -> Self
    where
        F: FnOnce(Cause) -> Cause,
    {
        match self {
            Try::Success(value) => Try::Success(value),
            Try::Failure(cause) => Try::Failure(f(cause)),
        }
    }

    /// Run `f` on the success value without changing the outcome.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Try::Success(ref value) = self {
            f(value);
        }
        self
    }

    /// Run `f` on the failure cause without changing the outcome.
    #[inline]
    pub fn inspect_cause<F>(self, f: F) -> Self
    where
        F: FnOnce(&Cause),
    {
        if let Try::Failure(ref cause) = self {
            f(cause);
        }
        self
    }

    // ========== Alternatives ==========

    /// Return `self` if it succeeded, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::{Cause, Try};
    ///
    /// let failed = Try::<&str>::failure(Cause::msg("fai&lure"));
    /// assert_eq!(failed.or(Try::success("success")).unwrap_or("default"), "success");
    /// ```
    #[inline]
    pub fn or(self, other: Try<T>) -> Self {
        match self {
            Try::Success(value) => Try::Success(value),
            Try::Failure(_) => other,
        }
    }

    /// Return `self` if it succeeded, otherwise the outcome produced by
    /// `other`. `other` runs only on failure.
    #[inline]
    pub fn or_else<F>(self, other: F) -> Self
    where
        F: FnOnce() -> Try<T>,
    {
        match self {
            Try::Success(value) => Try::Success(value),
            Try::Failure(_) => other(),
        }
    }

    /// Turn a failure into a success value computed from its cause.
    #[inline]
    pub fn recover<F>(self, f: F) -> T
    where
        F: FnOnce(Cause) -> T,
    {
        match self {
            Try::Success(value) => value,
            Try::Failure(cause) => f(cause),
        }
    }

    // ========== Extractors ==========

    /// Return the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Try::Success(value) => value,
            Try::Failure(_) => default,
        }
    }

    /// Return the success value or compute one. `default` runs only on
    /// failure.
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Try::Success(value) => value,
            Try::Failure(_) => default(),
        }
    }

    /// Return the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Take the failure cause, discarding a success value.
    #[inline]
    pub fn into_cause(self) -> Option<Cause> {
        match self {
            Try::Success(_) => None,
            Try::Failure(cause) => Some(cause),
        }
    }

    // ========== Conversions ==========

    /// Convert to an [`Either`] with the cause on the failure side.
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::{Either, Try};
    ///
    /// let e = Try::success(1).into_either();
    /// assert!(matches!(e, Either::Success(1)));
    /// ```
    #[inline]
    pub fn into_either(self) -> Either<Cause, T> {
        match self {
            Try::Success(value) => Either::Success(value),
            Try::Failure(cause) => Either::Failure(cause),
        }
    }

    /// Convert to an `Option`, dropping the cause.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Try::Success(value) => Some(value),
            Try::Failure(_) => None,
        }
    }

    /// Convert to a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, Cause> {
        match self {
            Try::Success(value) => Ok(value),
            Try::Failure(cause) => Err(cause),
        }
    }
}

impl Try<()> {
    /// Run a procedure once and capture its failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Write;
    /// use tryout::Try;
    ///
    /// let mut sink: Vec<u8> = Vec::new();
    /// assert!(Try::attempt_run(|| sink.write_all(b"ok")).is_success());
    /// ```
    pub fn attempt_run<E, F>(procedure: F) -> Self
    where
        F: FnOnce() -> Result<(), E>,
        E: Into<Cause>,
    {
        Try::attempt(procedure)
    }
}

// `Try::with_resource(..)` must resolve without a type annotation; `of` fixes
// the outcome's value type.
impl Try<()> {
    /// Start a resource chain from its first acquisition function.
    ///
    /// The value type of the final outcome is decided by the work passed to
    /// `of`, so `Try::with_resource(..).of(..)` can yield any `Try<T>`. See
    /// [`WithResource1`] and the [`resource`](crate::resource) module.
    pub fn with_resource<A1>(acquire1: A1) -> WithResource1<A1>
    where
        A1: Acquire,
    {
        resource::with_resource(acquire1)
    }

    /// Start a resource chain from two acquisition functions.
    pub fn with_resources<A1, A2>(acquire1: A1, acquire2: A2) -> WithResource2<A1, A2>
    where
        A1: Acquire,
        A2: Acquire,
    {
        resource::with_resources(acquire1, acquire2)
    }
}

impl<T> Try<Try<T>> {
    /// Flatten a nested outcome.
    #[inline]
    pub fn flatten(self) -> Try<T> {
        self.and_then(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<T, E> From<Result<T, E>> for Try<T>
where
    E: Into<Cause>,
{
    fn from(result: Result<T, E>) -> Self {
        Try::from_result(result)
    }
}

impl<T> From<Try<T>> for Result<T, Cause> {
    fn from(outcome: Try<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> From<Try<T>> for Option<T> {
    fn from(outcome: Try<T>) -> Self {
        outcome.into_option()
    }
}

impl<T> From<Try<T>> for Either<Cause, T> {
    fn from(outcome: Try<T>) -> Self {
        outcome.into_either()
    }
}

impl<T> IntoIterator for Try<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}
