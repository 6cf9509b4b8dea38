//! The error payload carried by a failed [`Outcome`](crate::Outcome).
//!
//! An [`Error`] is a human-readable message plus the [`SourceLocation`] where
//! it was built. Unless a location is passed explicitly, the construction
//! site is captured automatically, so re-propagating an error that was
//! created elsewhere keeps its original site:
//!
//! ```
//! use feer::{Error, Outcome};
//!
//! fn lower() -> Outcome<u8> {
//!     Outcome::err(Error::new("disk full"))
//! }
//!
//! fn upper() -> Outcome<u16> {
//!     let inner = lower();
//!     if inner.is_err() {
//!         let original = inner.into_error();
//!         return Outcome::err(Error::at("flush failed", original.location()));
//!     }
//!     Outcome::<u16>::ok(1)
//! }
//!
//! let err = upper().into_error();
//! assert_eq!(err.message(), "flush failed");
//! ```
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::alloc_type::String;
use crate::types::SourceLocation;

/// Immutable failure description: message and construction site.
///
/// Fields are read-only; the only way to change an `Error` is to replace it
/// wholesale.
///
/// # Examples
///
/// ```
/// use feer::Error;
///
/// let err = Error::new("connection refused");
/// assert_eq!(err.message(), "connection refused");
/// assert_eq!(err.to_string(), "connection refused");
/// assert!(format!("{err:#}").contains("(at "));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    message: String,
    location: SourceLocation,
}

impl Error {
    /// Creates an error, capturing the caller's location.
    ///
    /// `#[track_caller]` yields file, line and column only, so
    /// [`SourceLocation::function`] stays `None`. Use [`fail!`](crate::fail)
    /// to record the enclosing function as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use feer::Error;
    ///
    /// let line = line!() + 1;
    /// let err = Error::new("boom");
    /// assert_eq!(err.location().line(), line);
    /// ```
    #[inline]
    #[track_caller]
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self::at(message, SourceLocation::caller())
    }

    /// Creates an error with an explicit location.
    ///
    /// The given location is kept as-is; nothing is recaptured.
    ///
    /// # Examples
    ///
    /// ```
    /// use feer::{Error, SourceLocation};
    ///
    /// let site = SourceLocation::new("upstream.rs", 40, 1);
    /// let err = Error::at("forwarded", site);
    /// assert_eq!(err.location(), site);
    /// ```
    #[inline]
    pub fn at<M: Into<String>>(message: M, location: SourceLocation) -> Self {
        Self { message: message.into(), location }
    }

    /// Returns the message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the construction site.
    #[must_use]
    #[inline]
    pub fn location(&self) -> SourceLocation {
        self.location
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.write_str(&self.message);
        }
        write!(f, "{} (at {})", self.message, self.location)
    }
}

impl core::error::Error for Error {}
