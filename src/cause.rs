//! The opaque failure carried by a failed [`Try`](crate::Try).
//!
//! A [`Cause`] owns any `std::error::Error + Send + Sync + 'static`. Every
//! callback accepted by this crate returns `Result<_, E>` with `E: Into<Cause>`,
//! so ordinary error types (`std::io::Error`, `ParseIntError`, your own enums)
//! can be returned as they are and `?` works inside closures returning
//! `Result<_, Cause>`.
//!
//! # Example
//!
//! ```rust
//! use tryout::Cause;
//!
//! let cause: Cause = "x".parse::<i32>().unwrap_err().into();
//! assert!(cause.is::<std::num::ParseIntError>());
//!
//! let message = Cause::msg("connection refused");
//! assert_eq!(message.to_string(), "connection refused");
//! ```

use std::error::Error as StdError;
use std::fmt;

/// A captured, type-erased failure.
///
/// `Cause` does not implement `std::error::Error` itself, which would collide
/// with the blanket `From<E: Error>` conversion. Use
/// [`Cause::as_error`] or convert it into `Box<dyn Error + Send + Sync>` when
/// an `Error` trait object is needed.
pub struct Cause {
    inner: Box<dyn StdError + Send + Sync + 'static>,
}

impl Cause {
    /// Wrap an error value.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Cause {
            inner: Box::new(error),
        }
    }

    /// Create a cause from a plain message.
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Cause::new(Message(message))
    }

    /// Wrap an already boxed error.
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Cause { inner: error }
    }

    /// Returns `true` if the underlying error is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.inner.is::<E>()
    }

    /// Borrow the underlying error as `E`, if it is one.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Recover the underlying error as `E`, giving the cause back on mismatch.
    pub fn downcast<E>(self) -> Result<E, Cause>
    where
        E: StdError + 'static,
    {
        match self.inner.downcast::<E>() {
            Ok(error) => Ok(*error),
            Err(inner) => Err(Cause { inner }),
        }
    }

    /// Borrow the underlying error as a trait object.
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }

    /// Unwrap into the boxed error.
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.inner
    }

    /// Iterate over this error and its `source()` chain, outermost first.
    pub fn chain(&self) -> Chain<'_> {
        let outermost: &(dyn StdError + 'static) = self.as_error();
        Chain {
            next: Some(outermost),
        }
    }
}

impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Cause::new(error)
    }
}

impl From<Cause> for Box<dyn StdError + Send + Sync + 'static> {
    fn from(cause: Cause) -> Self {
        cause.inner
    }
}

impl AsRef<dyn StdError + Send + Sync + 'static> for Cause {
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.as_error()
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for Cause {
    /// `{}` prints the outermost error; `{:#}` appends every source.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)?;
        if f.alternate() {
            for source in self.chain().skip(1) {
                write!(f, ": {}", source)?;
            }
        }
        Ok(())
    }
}

/// Iterator over a [`Cause`] and its sources.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

struct Message<M>(M);

impl<M: fmt::Debug> fmt::Debug for Message<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<M: fmt::Display> fmt::Display for Message<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<M: fmt::Display + fmt::Debug> StdError for Message<M> {}
