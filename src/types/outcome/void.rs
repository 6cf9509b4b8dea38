use crate::types::storage::Void;
use crate::types::Error;

use super::{Outcome, State, Status};

/// Shorthand for a successful [`Status`].
///
/// # Examples
///
/// ```
/// fn flush() -> feer::Status {
///     feer::ok()
/// }
///
/// assert!(flush().is_ok());
/// ```
#[inline]
pub fn ok() -> Status {
    Status::ok()
}

impl Outcome<(), Void> {
    /// Creates a successful outcome without payload.
    #[inline]
    pub fn ok() -> Self {
        Self::from_slot(())
    }

    /// Dispatches to exactly one handler, leaving the outcome intact.
    ///
    /// The success handler takes no arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use feer::{Error, Status};
    ///
    /// let done = feer::ok();
    /// let failed: Status = Status::err(Error::new("void-failed"));
    ///
    /// assert_eq!(done.match_with(|| 1, |_| 0), 1);
    /// assert_eq!(failed.match_with(|| 1, |err| err.message().len()), 11);
    /// ```
    #[inline]
    pub fn match_with<F, G, R>(&self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce() -> R,
        G: FnOnce(&Error) -> R,
    {
        match &self.state {
            State::Ok(()) => on_ok(),
            State::Err(error) => on_err(error),
        }
    }

    /// Consumes the outcome and moves the error, if any, into `on_err`.
    #[inline]
    pub fn into_match<F, G, R>(self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce() -> R,
        G: FnOnce(Error) -> R,
    {
        match self.state {
            State::Ok(()) => on_ok(),
            State::Err(error) => on_err(error),
        }
    }
}

impl Default for Outcome<(), Void> {
    #[inline]
    fn default() -> Self {
        Self::ok()
    }
}
