//! Acquire, run and release for a single resource.
//!
//! Chains of several resources nest [`scoped`] calls: each level's work is
//! the next level's acquisition, so the call stack is the teardown stack and
//! release happens innermost (last acquired) first.

use std::panic::{self, AssertUnwindSafe};

use super::{Acquire, Release};
use crate::Cause;

/// Acquire one resource, run `work` with it and release it.
///
/// `position` is the 1-based position of the resource in its chain and is
/// only used for logging.
///
/// Result precedence:
/// - acquisition failure: returned as is, nothing to release
/// - work failure: returned; a release failure is logged and dropped
/// - release failure after successful work: returned
///
/// If `work` panics the resource is released before the panic resumes.
pub(crate) fn scoped<A, T, W>(position: usize, acquire: &A, work: W) -> Result<T, Cause>
where
    A: Acquire,
    W: FnOnce(&mut A::Resource) -> Result<T, Cause>,
{
    let mut resource = match acquire.acquire() {
        Ok(resource) => resource,
        Err(cause) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(resource = position, error = %cause, "resource acquisition failed");
            return Err(cause);
        }
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(resource = position, "resource acquired");

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| work(&mut resource)));
    let released = resource.release().map_err(Into::into);

    match outcome {
        Ok(result) => settle(position, result, released),
        Err(payload) => {
            if let Err(ref cause) = released {
                #[cfg(feature = "tracing")]
                tracing::error!(resource = position, error = %cause, "resource release failed after panic");
                #[cfg(not(feature = "tracing"))]
                eprintln!(
                    "resource {} release failed after panic: {}",
                    position, cause
                );
            }
            panic::resume_unwind(payload)
        }
    }
}

fn settle<T>(
    position: usize,
    result: Result<T, Cause>,
    released: Result<(), Cause>,
) -> Result<T, Cause> {
    match (result, released) {
        (Ok(value), Ok(())) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(resource = position, "resource released");
            Ok(value)
        }
        (Ok(_), Err(cause)) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(resource = position, error = %cause, "resource release failed");
            Err(cause)
        }
        (Err(cause), Ok(())) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(resource = position, "resource released after failure");
            Err(cause)
        }
        (Err(cause), Err(suppressed)) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                resource = position,
                error = %suppressed,
                kept = %cause,
                "resource release failed, keeping earlier failure"
            );
            #[cfg(not(feature = "tracing"))]
            eprintln!(
                "resource {} release failed: {} (keeping earlier failure: {})",
                position, suppressed, cause
            );
            Err(cause)
        }
    }
}
