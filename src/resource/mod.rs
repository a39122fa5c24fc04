//! Scoped acquisition of one to five releasable resources.
//!
//! This module generalizes the single-resource bracket (acquire, use,
//! release) to a fixed chain of up to five resources:
//!
//! - [`Acquire`] - a zero-argument acquisition function
//! - [`Release`] - the capability to give a resource back, which may fail
//! - [`Releasable`] - pairs any value with a release closure
//! - [`WithResource1`] .. [`WithResource5`] - the builder chain, started by
//!   [`with_resource`] / [`with_resources`] or the same functions on `Try`
//!
//! # Protocol
//!
//! For resources `R1..Rn` and work `W`, a terminal call (`of` or
//! `of_consumer`):
//!
//! 1. acquires `R1..Rn` in declared order, stopping at the first failure;
//! 2. runs `W` with `&mut R1, .., &mut Rn` when every acquisition succeeded;
//! 3. releases every acquired resource in reverse order, attempting each
//!    release even if a later-acquired one failed to release;
//! 4. reports the work's failure first, then an acquisition failure, then the
//!    first release failure, otherwise the work's value.
//!
//! Release failures that lose to an earlier failure are logged (see the
//! `tracing` feature) instead of being dropped.
//!
//! # Example
//!
//! ```rust
//! use tryout::{releasable, Cause, Try};
//!
//! let total = Try::with_resource(|| Ok::<_, Cause>(releasable(vec![1, 2], |_| Ok::<_, Cause>(()))))
//!     .with_resource(|| Ok::<_, Cause>(releasable(vec![3], |_| Ok::<_, Cause>(()))))
//!     .of(|a, b| Ok::<_, Cause>(a.iter().chain(b.iter()).sum::<i32>()));
//!
//! assert_eq!(total.unwrap_or(0), 6);
//! ```
//!
//! # Arity
//!
//! Rust has no variadic generics, so each chain length is its own type with
//! its own `of` / `of_consumer` signature. Five is the ceiling.

pub mod builder;
pub(crate) mod scope;


use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::Cause;

pub use builder::{WithResource1, WithResource2, WithResource3, WithResource4, WithResource5};

/// A resource that must be given back once it is no longer needed.
///
/// `release` consumes the resource, so it can run at most once per instance.
/// A failing release is captured like any other failure.
///
/// # Example
///
/// ```rust
/// use std::io::{self, Write};
/// use tryout::{Release, Try};
///
/// struct Journal(Vec<u8>);
///
/// impl Release for Journal {
///     type Error = io::Error;
///
///     fn release(mut self) -> io::Result<()> {
///         self.0.flush()
///     }
/// }
///
/// let written = Try::with_resource(|| Ok::<_, io::Error>(Journal(Vec::new())))
///     .of(|journal| journal.0.write(b"entry"));
/// assert_eq!(written.unwrap_or(0), 5);
/// ```
pub trait Release {
    /// The failure a release can produce.
    type Error: Into<Cause>;

    /// Give the resource back.
    fn release(self) -> Result<(), Self::Error>;
}

impl<R: Release> Release for Box<R> {
    type Error = R::Error;

    fn release(self) -> Result<(), Self::Error> {
        (*self).release()
    }
}

/// A zero-argument function that acquires a fresh [`Release`] resource.
///
/// Implemented for every `Fn() -> Result<R, E>` where `R: Release` and
/// `E: Into<Cause>`. The function is called once per terminal operation, so a
/// chain can be run repeatedly.
pub trait Acquire {
    /// The acquired resource.
    type Resource: Release;

    /// Acquire a new instance of the resource.
    fn acquire(&self) -> Result<Self::Resource, Cause>;
}

impl<F, R, E> Acquire for F
where
    F: Fn() -> Result<R, E>,
    R: Release,
    E: Into<Cause>,
{
    type Resource = R;

    fn acquire(&self) -> Result<R, Cause> {
        self().map_err(Into::into)
    }
}

/// Start a resource chain from its first acquisition function.
///
/// Same as [`Try::with_resource`](crate::Try::with_resource), without naming
/// `Try`.
///
/// # Example
///
/// ```rust
/// use tryout::testing::SpyLog;
/// use tryout::{with_resource, Cause};
///
/// let log = SpyLog::new();
/// let name = with_resource(log.resource("db")).of(|db| Ok::<_, Cause>(db.name()));
///
/// assert_eq!(name.unwrap_or("none"), "db");
/// ```
pub fn with_resource<A1>(acquire1: A1) -> WithResource1<A1>
where
    A1: Acquire,
{
    WithResource1::new(acquire1)
}

/// Start a resource chain from two acquisition functions.
pub fn with_resources<A1, A2>(acquire1: A1, acquire2: A2) -> WithResource2<A1, A2>
where
    A1: Acquire,
    A2: Acquire,
{
    WithResource2::new(acquire1, acquire2)
}

/// A value paired with the closure that releases it.
///
/// Derefs to the wrapped value, so work functions can use it directly.
pub struct Releasable<T, F> {
    value: T,
    release: F,
}

/// Pair `value` with the closure that releases it.
///
/// # Example
///
/// ```rust
/// use std::io::{BufWriter, Write};
/// use tryout::{releasable, Try};
///
/// let result = Try::with_resource(|| {
///     Ok::<_, std::io::Error>(releasable(BufWriter::new(Vec::new()), |mut w| w.flush()))
/// })
/// .of_consumer(|w| w.write_all(b"hello"));
///
/// assert!(result.is_success());
/// ```
pub fn releasable<T, F, E>(value: T, release: F) -> Releasable<T, F>
where
    F: FnOnce(T) -> Result<(), E>,
    E: Into<Cause>,
{
    Releasable { value, release }
}

impl<T, F> Releasable<T, F> {
    /// Take the value back without running the release closure.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, F, E> Release for Releasable<T, F>
where
    F: FnOnce(T) -> Result<(), E>,
    E: Into<Cause>,
{
    type Error = E;

    fn release(self) -> Result<(), E> {
        (self.release)(self.value)
    }
}

impl<T, F> Deref for Releasable<T, F> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, F> DerefMut for Releasable<T, F> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Releasable<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Releasable")
            .field("value", &self.value)
            .field("release", &"<function>")
            .finish()
    }
}
