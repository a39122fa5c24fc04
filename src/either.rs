//! A disjoint failure-value / success-value pair.
//!
//! # Either vs Try
//!
//! [`Try<T>`](crate::Try) records the outcome of running something: its
//! failure side is always a captured [`Cause`](crate::Cause). `Either<E, A>`
//! is plain data: the failure side is any typed value (a validation message,
//! an error code) and nothing is ever run or caught on your behalf.
//!
//! `Either` is success-biased: `map`, `and_then`, `or` and friends operate on
//! the `Success` variant and pass `Failure` through.
//!
//! # Examples
//!
//! ```rust
//! use tryout::Either;
//!
//! fn lookup(id: u32) -> Either<&'static str, &'static str> {
//!     Either::from_option((id == 7).then_some("bond"), "unknown agent")
//! }
//!
//! assert_eq!(lookup(7).map(str::len), Either::success(4));
//! assert_eq!(lookup(8).success_or("nobody"), "nobody");
//! ```

/// A value that is either `Failure(E)` or `Success(A)`.
///
/// # Example
///
/// ```rust
/// use tryout::Either;
///
/// let ok: Either<String, i32> = Either::success(21);
/// let bad: Either<String, i32> = Either::failure("too small".to_string());
///
/// assert_eq!(ok.map(|x| x * 2), Either::success(42));
/// assert_eq!(bad.map_failure(|e| e.len()), Either::failure(9));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<E, A> {
    /// The failure value.
    Failure(E),
    /// The success value.
    Success(A),
}

impl<E, A> Either<E, A> {
    // ========== Constructors ==========

    /// Create a failure value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let e: Either<&str, i32> = Either::failure("bad");
    /// assert!(e.is_failure());
    /// ```
    #[inline]
    pub fn failure(value: E) -> Self {
        Either::Failure(value)
    }

    /// Create a success value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let e: Either<&str, i32> = Either::success(42);
    /// assert_eq!(e.into_success(), Some(42));
    /// ```
    #[inline]
    pub fn success(value: A) -> Self {
        Either::Success(value)
    }

    /// Create from an `Option`: `Some(v)` becomes `Success(v)`, `None`
    /// becomes `Failure(failure)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// assert_eq!(Either::from_option(Some(1), "missing"), Either::success(1));
    /// assert_eq!(Either::from_option(None::<i32>, "missing"), Either::failure("missing"));
    /// ```
    #[inline]
    pub fn from_option(option: Option<A>, failure: E) -> Self {
        match option {
            Some(value) => Either::Success(value),
            None => Either::Failure(failure),
        }
    }

    /// Create from a `Result`: `Ok` becomes `Success`, `Err` becomes
    /// `Failure`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let e = Either::from_result("12".parse::<i32>());
    /// assert_eq!(e.map_failure(|_| ()), Either::success(12));
    /// ```
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Either::Success(value),
            Err(error) => Either::Failure(error),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` for `Failure`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// assert!(Either::<&str, i32>::failure("no").is_failure());
    /// assert!(!Either::<&str, i32>::success(1).is_failure());
    /// ```
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Either::Failure(_))
    }

    /// Returns `true` for `Success`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// assert!(Either::<&str, i32>::success(1).is_success());
    /// assert!(!Either::<&str, i32>::failure("no").is_success());
    /// ```
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Either::Success(_))
    }

    // ========== Extractors ==========

    /// The success value, if present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// assert_eq!(Either::<&str, i32>::success(3).into_success(), Some(3));
    /// assert_eq!(Either::<&str, i32>::failure("no").into_success(), None);
    /// ```
    #[inline]
    pub fn into_success(self) -> Option<A> {
        match self {
            Either::Failure(_) => None,
            Either::Success(value) => Some(value),
        }
    }

    /// The failure value, if present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// assert_eq!(Either::<&str, i32>::failure("no").into_failure(), Some("no"));
    /// assert_eq!(Either::<&str, i32>::success(3).into_failure(), None);
    /// ```
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Either::Failure(value) => Some(value),
            Either::Success(_) => None,
        }
    }

    /// Convert to `Either<&E, &A>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let e: Either<String, String> = Either::success("kept".to_string());
    /// let lengths = e.as_ref().map(|s| s.len());
    /// assert_eq!(lengths, Either::success(4));
    /// assert!(e.is_success());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Either<&E, &A> {
        match self {
            Either::Failure(e) => Either::Failure(e),
            Either::Success(a) => Either::Success(a),
        }
    }

    /// Convert to `Either<&mut E, &mut A>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let mut e: Either<&str, i32> = Either::success(1);
    /// if let Either::Success(n) = e.as_mut() {
    ///     *n += 1;
    /// }
    /// assert_eq!(e, Either::success(2));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut E, &mut A> {
        match self {
            Either::Failure(e) => Either::Failure(e),
            Either::Success(a) => Either::Success(a),
        }
    }

    /// Return the success value or `default`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let bad: Either<&str, i32> = Either::failure("error");
    /// assert_eq!(bad.success_or(0), 0);
    /// ```
    #[inline]
    pub fn success_or(self, default: A) -> A {
        match self {
            Either::Failure(_) => default,
            Either::Success(value) => value,
        }
    }

    /// Return the success value or compute one from the failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let e: Either<&str, usize> = Either::failure("four");
    /// assert_eq!(e.success_or_else(str::len), 4);
    /// ```
    #[inline]
    pub fn success_or_else<F>(self, f: F) -> A
    where
        F: FnOnce(E) -> A,
    {
        match self {
            Either::Failure(e) => f(e),
            Either::Success(value) => value,
        }
    }

    // ========== Transformations ==========

    /// Transform the success value, passing failures through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let ok: Either<&str, i32> = Either::success(2);
    /// assert_eq!(ok.map(|n| n * 10), Either::success(20));
    ///
    /// let bad: Either<&str, i32> = Either::failure("bad");
    /// assert_eq!(bad.map(|n| n * 10), Either::failure("bad"));
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Either::Failure(e) => Either::Failure(e),
            Either::Success(a) => Either::Success(f(a)),
        }
    }

    /// Transform the failure value, passing successes through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let e: Either<&str, i32> = Either::failure("bad input");
    /// assert_eq!(e.map_failure(|m| m.to_uppercase()), Either::failure("BAD INPUT".to_string()));
    /// ```
    #[inline]
    pub fn map_failure<F2, F>(self, f: F) -> Either<F2, A>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Either::Failure(e) => Either::Failure(f(e)),
            Either::Success(a) => Either::Success(a),
        }
    }

    /// Transform both variants.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let ok: Either<&str, i32> = Either::success(2);
    /// assert_eq!(ok.bimap(str::len, |n| n + 1), Either::success(3));
    ///
    /// let bad: Either<&str, i32> = Either::failure("bad");
    /// assert_eq!(bad.bimap(str::len, |n| n + 1), Either::failure(3));
    /// ```
    #[inline]
    pub fn bimap<F2, B, F, G>(self, on_failure: F, on_success: G) -> Either<F2, B>
    where
        F: FnOnce(E) -> F2,
        G: FnOnce(A) -> B,
    {
        match self {
            Either::Failure(e) => Either::Failure(on_failure(e)),
            Either::Success(a) => Either::Success(on_success(a)),
        }
    }

    /// Swap the variants.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let e: Either<&str, i32> = Either::failure("left");
    /// assert_eq!(e.swap(), Either::success("left"));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<A, E> {
        match self {
            Either::Failure(e) => Either::Success(e),
            Either::Success(a) => Either::Failure(a),
        }
    }

    /// Fold both variants into a single value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let e: Either<i32, &str> = Either::failure(42);
    /// assert_eq!(e.fold(|n| n.to_string(), |s| s.to_string()), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_failure: F, on_success: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Either::Failure(e) => on_failure(e),
            Either::Success(a) => on_success(a),
        }
    }

    // ========== Monadic Operations ==========

    /// Chain a computation on the success value (flatMap).
    ///
    /// The result of `f` is returned as is; a failure is passed through
    /// without calling `f`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Either::success(n / 2) } else { Either::failure("odd") };
    ///
    /// assert_eq!(Either::success(8).and_then(half), Either::success(4));
    /// assert_eq!(Either::success(7).and_then(half), Either::failure("odd"));
    /// assert_eq!(Either::failure("earlier").and_then(half), Either::failure("earlier"));
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        match self {
            Either::Failure(e) => Either::Failure(e),
            Either::Success(a) => f(a),
        }
    }

    /// Return `self` if it is a success, otherwise `other`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let first: Either<&str, i32> = Either::success(1);
    /// assert_eq!(first.or(Either::success(2)), Either::success(1));
    ///
    /// let failed: Either<&str, i32> = Either::failure("no");
    /// assert_eq!(failed.or(Either::success(2)), Either::success(2));
    /// ```
    #[inline]
    pub fn or(self, other: Either<E, A>) -> Self {
        match self {
            Either::Failure(_) => other,
            success => success,
        }
    }

    /// Return `self` if it is a success, otherwise the value produced by
    /// `other`. `other` runs only on failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let failed: Either<&str, i32> = Either::failure("cache miss");
    /// assert_eq!(failed.or_else(|| Either::success(7)), Either::success(7));
    /// ```
    #[inline]
    pub fn or_else<F>(self, other: F) -> Self
    where
        F: FnOnce() -> Either<E, A>,
    {
        match self {
            Either::Failure(_) => other(),
            success => success,
        }
    }

    /// Run `consumer` with the success value; do nothing on failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let mut seen = Vec::new();
    /// Either::<&str, i32>::success(1).if_success(|v| seen.push(v));
    /// Either::<&str, i32>::failure("no").if_success(|v| seen.push(v));
    /// assert_eq!(seen, vec![1]);
    /// ```
    #[inline]
    pub fn if_success<F>(self, consumer: F)
    where
        F: FnOnce(A),
    {
        if let Either::Success(value) = self {
            consumer(value);
        }
    }

    // ========== Conversions ==========

    /// Convert to `Result` (`Success` becomes `Ok`, `Failure` becomes `Err`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let e: Either<&str, i32> = Either::failure("bad");
    /// assert_eq!(e.into_result(), Err("bad"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Either::Failure(e) => Err(e),
            Either::Success(a) => Ok(a),
        }
    }

    /// Iterate over the success value, if present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let e: Either<&str, i32> = Either::success(5);
    /// assert_eq!(e.iter().sum::<i32>(), 5);
    /// assert_eq!(Either::<&str, i32>::failure("no").iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.as_ref().into_success().into_iter()
    }
}

impl<E, A> Either<E, Either<E, A>> {
    /// Flatten a nested `Either`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::Either;
    ///
    /// let nested: Either<&str, Either<&str, i32>> = Either::success(Either::failure("inner"));
    /// assert_eq!(nested.flatten(), Either::failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<E, A> {
        match self {
            Either::Failure(e) => Either::Failure(e),
            Either::Success(inner) => inner,
        }
    }
}

// ========== Trait Implementations ==========

impl<E, A> From<Result<A, E>> for Either<E, A> {
    fn from(result: Result<A, E>) -> Self {
        Either::from_result(result)
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    fn from(either: Either<E, A>) -> Self {
        either.into_result()
    }
}

impl<E, A> IntoIterator for Either<E, A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_success().into_iter()
    }
}

impl<'a, E, A> IntoIterator for &'a Either<E, A> {
    type Item = &'a A;
    type IntoIter = std::option::IntoIter<&'a A>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_success().into_iter()
    }
}

// ========== Collection Utilities ==========

/// Split an iterator of `Either` into failures and successes.
///
/// # Example
///
/// ```rust
/// use tryout::either::{partition, Either};
///
/// let items = vec![Either::failure("a"), Either::success(1), Either::success(2)];
/// let (failures, successes) = partition(items);
///
/// assert_eq!(failures, vec!["a"]);
/// assert_eq!(successes, vec![1, 2]);
/// ```
pub fn partition<E, A, I>(iter: I) -> (Vec<E>, Vec<A>)
where
    I: IntoIterator<Item = Either<E, A>>,
{
    let mut failures = Vec::new();
    let mut successes = Vec::new();

    for item in iter {
        match item {
            Either::Failure(e) => failures.push(e),
            Either::Success(a) => successes.push(a),
        }
    }

    (failures, successes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_constructors() {
        assert!(Either::<i32, &str>::failure(42).is_failure());
        assert!(Either::<i32, &str>::success("hello").is_success());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Either::from_option(Some(5), "none"), Either::success(5));
        assert_eq!(
            Either::from_option(None::<i32>, "none"),
            Either::failure("none")
        );
    }

    #[test]
    fn test_map_leaves_failure_unchanged() {
        let e: Either<&str, i32> = Either::failure("error");
        assert_eq!(e.map(|x| x * 2), Either::failure("error"));
    }

    #[test]
    fn test_map_failure_leaves_success_unchanged() {
        let e: Either<&str, i32> = Either::success(3);
        assert_eq!(e.map_failure(str::len), Either::success(3));
    }

    #[test]
    fn test_map_does_not_call_function_on_failure() {
        let called = Cell::new(false);
        let _ = Either::<&str, i32>::failure("x").map(|v| {
            called.set(true);
            v
        });
        assert!(!called.get());
    }

    #[test]
    fn test_and_then_returns_inner_result_directly() {
        let e: Either<&str, i32> = Either::success(1);
        assert_eq!(
            e.and_then(|_| Either::<&str, i32>::failure("inner")),
            Either::failure("inner")
        );
    }

    #[test]
    fn test_or() {
        let bad: Either<&str, i32> = Either::failure("x");
        assert_eq!(bad.or(Either::success(2)), Either::success(2));

        let good: Either<&str, i32> = Either::success(1);
        assert_eq!(good.or(Either::success(2)), Either::success(1));
    }

    #[test]
    fn test_or_else_short_circuits() {
        let called = Cell::new(false);
        let good: Either<&str, i32> = Either::success(1);
        let result = good.or_else(|| {
            called.set(true);
            Either::success(2)
        });
        assert_eq!(result, Either::success(1));
        assert!(!called.get());
    }

    #[test]
    fn test_success_or_else() {
        let bad: Either<&str, usize> = Either::failure("four");
        assert_eq!(bad.success_or_else(str::len), 4);
    }

    #[test]
    fn test_into_success_into_failure() {
        let good: Either<&str, i32> = Either::success(1);
        assert_eq!(good.into_success(), Some(1));
        assert_eq!(good.into_failure(), None);

        let bad: Either<&str, i32> = Either::failure("x");
        assert_eq!(bad.into_success(), None);
        assert_eq!(bad.into_failure(), Some("x"));
    }

    #[test]
    fn test_if_success_only_on_success() {
        let count = Cell::new(0);
        Either::<&str, i32>::success(1).if_success(|v| count.set(count.get() + v));
        Either::<&str, i32>::failure("x").if_success(|v| count.set(count.get() + v));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_as_mut() {
        let mut e: Either<&str, i32> = Either::success(1);
        if let Either::Success(v) = e.as_mut() {
            *v = 10;
        }
        assert_eq!(e, Either::success(10));
    }

    #[test]
    fn test_flatten() {
        let nested: Either<&str, Either<&str, i32>> = Either::success(Either::failure("inner"));
        assert_eq!(nested.flatten(), Either::failure("inner"));
    }

    #[test]
    fn test_iteration() {
        let good: Either<&str, i32> = Either::success(1);
        assert_eq!(good.iter().collect::<Vec<_>>(), vec![&1]);
        assert_eq!(good.into_iter().count(), 1);

        let bad: Either<&str, i32> = Either::failure("x");
        assert_eq!((&bad).into_iter().count(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let e: Either<String, i32> = Either::success(5);
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"Success":5}"#);
        let back: Either<String, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
