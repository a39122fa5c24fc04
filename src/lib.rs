//! # Tryout
//!
//! Algebraic error handling for code that runs against fallible resources.
//!
//! - [`Try`] - the outcome of a computation: a value, or the [`Cause`] of its
//!   failure
//! - [`Either`] - a value that is one of two cases, conventionally
//!   `Failure` (left) or `Success` (right)
//! - [`WithResource1`] .. [`WithResource5`] - scoped acquisition of up to
//!   five resources, released in reverse order no matter how the work ends
//!
//! ## Quick Example
//!
//! ```rust
//! use std::num::ParseIntError;
//! use tryout::{Cause, Try};
//!
//! fn parse(input: &str) -> Try<i32> {
//!     Try::attempt(|| input.trim().parse::<i32>())
//! }
//!
//! let doubled = parse(" 21 ").map(|n| n * 2);
//! assert_eq!(doubled.unwrap_or(0), 42);
//!
//! let failed = parse("twenty-one");
//! assert!(failed.cause().is_some_and(|cause: &Cause| cause.is::<ParseIntError>()));
//! ```
//!
//! ## Resources
//!
//! ```rust
//! use tryout::testing::SpyLog;
//! use tryout::{Cause, Try};
//!
//! let log = SpyLog::new();
//! let result = Try::with_resource(log.resource("input"))
//!     .with_resource(log.failing_acquire("output", "disk full"))
//!     .of(|_, _| Ok::<_, Cause>("copied"));
//!
//! assert!(result.is_failure());
//! assert_eq!(log.released(), vec!["input"]);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod cause;
pub mod either;
pub mod outcome;
pub mod resource;
pub mod testing;

// Re-exports
pub use cause::Cause;
pub use either::Either;
pub use outcome::Try;
pub use resource::{
    releasable, with_resource, with_resources, Acquire, Releasable, Release, WithResource1,
    WithResource2, WithResource3, WithResource4, WithResource5,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cause::Cause;
    pub use crate::either::Either;
    pub use crate::outcome::Try;
    pub use crate::resource::{releasable, with_resource, with_resources, Acquire, Release};
}
