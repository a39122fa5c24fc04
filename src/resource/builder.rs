//! The `WithResource1` .. `WithResource5` builder chain.
//!
//! Each stage stores acquisition functions, never resources. `with_resource`
//! moves the stored functions into the next stage; `of` and `of_consumer`
//! borrow the chain and run one full acquire, run, release cycle, so a chain
//! can be run any number of times.
//!
//! ```rust
//! use tryout::testing::SpyLog;
//! use tryout::Try;
//!
//! let log = SpyLog::new();
//! let chain = Try::with_resource(log.resource("config"))
//!     .with_resource(log.resource("db"))
//!     .with_resource(log.resource("cache"));
//!
//! assert!(chain.of_consumer(|_, _, _| Ok::<_, tryout::Cause>(())).is_success());
//! assert_eq!(log.released(), vec!["cache", "db", "config"]);
//! ```

use std::fmt;

use super::scope::scoped;
use super::Acquire;
use crate::{Cause, Try};

/// A chain holding one acquisition function.
///
/// Created by [`Try::with_resource`] or [`WithResource1::new`].
#[derive(Clone)]
pub struct WithResource1<A1> {
    acquire1: A1,
}

/// A chain holding two acquisition functions.
#[derive(Clone)]
pub struct WithResource2<A1, A2> {
    acquire1: A1,
    acquire2: A2,
}

/// A chain holding three acquisition functions.
#[derive(Clone)]
pub struct WithResource3<A1, A2, A3> {
    acquire1: A1,
    acquire2: A2,
    acquire3: A3,
}

/// A chain holding four acquisition functions.
#[derive(Clone)]
pub struct WithResource4<A1, A2, A3, A4> {
    acquire1: A1,
    acquire2: A2,
    acquire3: A3,
    acquire4: A4,
}

/// A chain holding five acquisition functions, the longest chain supported.
#[derive(Clone)]
pub struct WithResource5<A1, A2, A3, A4, A5> {
    acquire1: A1,
    acquire2: A2,
    acquire3: A3,
    acquire4: A4,
    acquire5: A5,
}

// ============================================================================
// Arity 1
// ============================================================================

impl<A1> WithResource1<A1>
where
    A1: Acquire,
{
    /// Start a chain from its first acquisition function.
    pub fn new(acquire1: A1) -> Self {
        WithResource1 { acquire1 }
    }

    /// Append a second acquisition function.
    pub fn with_resource<A2>(self, acquire2: A2) -> WithResource2<A1, A2>
    where
        A2: Acquire,
    {
        WithResource2 {
            acquire1: self.acquire1,
            acquire2,
        }
    }

    /// Acquire the resource, run `work` with it and release it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryout::testing::SpyLog;
    /// use tryout::{Cause, Try};
    ///
    /// let log = SpyLog::new();
    /// let name = Try::with_resource(log.resource("db")).of(|db| Ok::<_, Cause>(db.name()));
    ///
    /// assert_eq!(name.unwrap_or("none"), "db");
    /// assert_eq!(log.release_count("db"), 1);
    /// ```
    pub fn of<T, E, W>(&self, work: W) -> Try<T>
    where
        W: FnOnce(&mut A1::Resource) -> Result<T, E>,
        E: Into<Cause>,
    {
        Try::from_result(scoped(1, &self.acquire1, |r1| work(r1).map_err(Into::into)))
    }

    /// Like [`of`](Self::of) for work that produces no value.
    pub fn of_consumer<E, W>(&self, work: W) -> Try<()>
    where
        W: FnOnce(&mut A1::Resource) -> Result<(), E>,
        E: Into<Cause>,
    {
        self.of(work)
    }
}

// ============================================================================
// Arity 2
// ============================================================================

impl<A1, A2> WithResource2<A1, A2>
where
    A1: Acquire,
    A2: Acquire,
{
    /// Build a two-resource chain directly.
    pub fn new(acquire1: A1, acquire2: A2) -> Self {
        WithResource2 { acquire1, acquire2 }
    }

    /// Append a third acquisition function.
    pub fn with_resource<A3>(self, acquire3: A3) -> WithResource3<A1, A2, A3>
    where
        A3: Acquire,
    {
        WithResource3 {
            acquire1: self.acquire1,
            acquire2: self.acquire2,
            acquire3,
        }
    }

    /// Acquire both resources, run `work` and release them in reverse order.
    ///
    /// If the second acquisition fails, the first resource is released and
    /// the acquisition failure is returned.
    pub fn of<T, E, W>(&self, work: W) -> Try<T>
    where
        W: FnOnce(&mut A1::Resource, &mut A2::Resource) -> Result<T, E>,
        E: Into<Cause>,
    {
        Try::from_result(scoped(1, &self.acquire1, |r1| {
            scoped(2, &self.acquire2, |r2| work(r1, r2).map_err(Into::into))
        }))
    }

    /// Like [`of`](Self::of) for work that produces no value.
    pub fn of_consumer<E, W>(&self, work: W) -> Try<()>
    where
        W: FnOnce(&mut A1::Resource, &mut A2::Resource) -> Result<(), E>,
        E: Into<Cause>,
    {
        self.of(work)
    }
}

// ============================================================================
// Arity 3
// ============================================================================

impl<A1, A2, A3> WithResource3<A1, A2, A3>
where
    A1: Acquire,
    A2: Acquire,
    A3: Acquire,
{
    /// Append a fourth acquisition function.
    pub fn with_resource<A4>(self, acquire4: A4) -> WithResource4<A1, A2, A3, A4>
    where
        A4: Acquire,
    {
        WithResource4 {
            acquire1: self.acquire1,
            acquire2: self.acquire2,
            acquire3: self.acquire3,
            acquire4,
        }
    }

    /// Acquire three resources, run `work` and release them in reverse order.
    pub fn of<T, E, W>(&self, work: W) -> Try<T>
    where
        W: FnOnce(&mut A1::Resource, &mut A2::Resource, &mut A3::Resource) -> Result<T, E>,
        E: Into<Cause>,
    {
        Try::from_result(scoped(1, &self.acquire1, |r1| {
            scoped(2, &self.acquire2, |r2| {
                scoped(3, &self.acquire3, |r3| work(r1, r2, r3).map_err(Into::into))
            })
        }))
    }

    /// Like [`of`](Self::of) for work that produces no value.
    pub fn of_consumer<E, W>(&self, work: W) -> Try<()>
    where
        W: FnOnce(&mut A1::Resource, &mut A2::Resource, &mut A3::Resource) -> Result<(), E>,
        E: Into<Cause>,
    {
        self.of(work)
    }
}

// ============================================================================
// Arity 4
// ============================================================================

impl<A1, A2, A3, A4> WithResource4<A1, A2, A3, A4>
where
    A1: Acquire,
    A2: Acquire,
    A3: Acquire,
    A4: Acquire,
{
    /// Append the fifth and last acquisition function.
    pub fn with_resource<A5>(self, acquire5: A5) -> WithResource5<A1, A2, A3, A4, A5>
    where
        A5: Acquire,
    {
        WithResource5 {
            acquire1: self.acquire1,
            acquire2: self.acquire2,
            acquire3: self.acquire3,
            acquire4: self.acquire4,
            acquire5,
        }
    }

    /// Acquire four resources, run `work` and release them in reverse order.
    pub fn of<T, E, W>(&self, work: W) -> Try<T>
    where
        W: FnOnce(
            &mut A1::Resource,
            &mut A2::Resource,
            &mut A3::Resource,
            &mut A4::Resource,
        ) -> Result<T, E>,
        E: Into<Cause>,
    {
        Try::from_result(scoped(1, &self.acquire1, |r1| {
            scoped(2, &self.acquire2, |r2| {
                scoped(3, &self.acquire3, |r3| {
                    scoped(4, &self.acquire4, |r4| {
                        work(r1, r2, r3, r4).map_err(Into::into)
                    })
                })
            })
        }))
    }

    /// Like [`of`](Self::of) for work that produces no value.
    pub fn of_consumer<E, W>(&self, work: W) -> Try<()>
    where
        W: FnOnce(
            &mut A1::Resource,
            &mut A2::Resource,
            &mut A3::Resource,
            &mut A4::Resource,
        ) -> Result<(), E>,
        E: Into<Cause>,
    {
        self.of(work)
    }
}

// ============================================================================
// Arity 5
// ============================================================================

impl<A1, A2, A3, A4, A5> WithResource5<A1, A2, A3, A4, A5>
where
    A1: Acquire,
    A2: Acquire,
    A3: Acquire,
    A4: Acquire,
    A5: Acquire,
{
    /// Acquire five resources, run `work` and release them in reverse order.
    pub fn of<T, E, W>(&self, work: W) -> Try<T>
    where
        W: FnOnce(
            &mut A1::Resource,
            &mut A2::Resource,
            &mut A3::Resource,
            &mut A4::Resource,
            &mut A5::Resource,
        ) -> Result<T, E>,
        E: Into<Cause>,
    {
        Try::from_result(scoped(1, &self.acquire1, |r1| {
            scoped(2, &self.acquire2, |r2| {
                scoped(3, &self.acquire3, |r3| {
                    scoped(4, &self.acquire4, |r4| {
                        scoped(5, &self.acquire5, |r5| {
                            work(r1, r2, r3, r4, r5).map_err(Into::into)
                        })
                    })
                })
            })
        }))
    }

    /// Like [`of`](Self::of) for work that produces no value.
    pub fn of_consumer<E, W>(&self, work: W) -> Try<()>
    where
        W: FnOnce(
            &mut A1::Resource,
            &mut A2::Resource,
            &mut A3::Resource,
            &mut A4::Resource,
            &mut A5::Resource,
        ) -> Result<(), E>,
        E: Into<Cause>,
    {
        self.of(work)
    }
}

// ============================================================================
// Debug
// ============================================================================

impl<A1> fmt::Debug for WithResource1<A1> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithResource1")
            .field("acquire1", &"<function>")
            .finish()
    }
}

impl<A1, A2> fmt::Debug for WithResource2<A1, A2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithResource2")
            .field("acquire1", &"<function>")
            .field("acquire2", &"<function>")
            .finish()
    }
}

impl<A1, A2, A3> fmt::Debug for WithResource3<A1, A2, A3> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithResource3")
            .field("acquire1", &"<function>")
            .field("acquire2", &"<function>")
            .field("acquire3", &"<function>")
            .finish()
    }
}

impl<A1, A2, A3, A4> fmt::Debug for WithResource4<A1, A2, A3, A4> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithResource4")
            .field("acquire1", &"<function>")
            .field("acquire2", &"<function>")
            .field("acquire3", &"<function>")
            .field("acquire4", &"<function>")
            .finish()
    }
}

impl<A1, A2, A3, A4, A5> fmt::Debug for WithResource5<A1, A2, A3, A4, A5> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithResource5")
            .field("acquire1", &"<function>")
            .field("acquire2", &"<function>")
            .field("acquire3", &"<function>")
            .field("acquire4", &"<function>")
            .field("acquire5", &"<function>")
            .finish()
    }
}
