//! Accessors for outcomes that alias caller-owned storage.
//!
//! Both shapes hand out the referent itself, never the stored reference, so
//! an alias cannot be rebound after construction.
use crate::traits::NotError;
use crate::types::invalid_state::value_on_error;
use crate::types::storage::{Exclusive, Shared};
use crate::types::Error;

use super::{Outcome, State};

impl<'a, T: ?Sized + 'a> Outcome<T, Shared<'a>> {
    /// Creates a successful outcome aliasing `referent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use feer::RefOutcome;
    ///
    /// let source = String::from("feer");
    /// let alias = RefOutcome::ok(&source);
    /// assert!(core::ptr::eq(alias.value(), &source));
    /// ```
    #[inline]
    pub fn ok<M>(referent: &'a T) -> Self
    where
        T: NotError<M>,
    {
        Self::from_slot(referent)
    }

    /// Creates a read-only alias from an exclusive borrow.
    ///
    /// The borrow is downgraded for `'a`; the referent stays frozen while the
    /// outcome lives.
    #[inline]
    pub fn ok_from_mut<M>(referent: &'a mut T) -> Self
    where
        T: NotError<M>,
    {
        Self::from_slot(referent)
    }

    /// Returns the aliased referent.
    ///
    /// The returned reference carries the full lifetime `'a`, not the
    /// lifetime of the borrow of `self`.
    ///
    /// # Panics
    ///
    /// Panics with an `invalid state access` message if the outcome holds an
    /// error.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &'a T {
        match self.state {
            State::Ok(referent) => referent,
            State::Err(ref error) => value_on_error(error),
        }
    }

    /// Consumes the outcome and returns the aliased referent.
    ///
    /// # Panics
    ///
    /// Panics with an `invalid state access` message if the outcome holds an
    /// error.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> &'a T {
        match self.state {
            State::Ok(referent) => referent,
            State::Err(error) => value_on_error(&error),
        }
    }

    /// Dispatches to exactly one handler, leaving the outcome intact.
    #[inline]
    pub fn match_with<F, G, R>(&self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(&T) -> R,
        G: FnOnce(&Error) -> R,
    {
        match &self.state {
            State::Ok(referent) => on_ok(*referent),
            State::Err(error) => on_err(error),
        }
    }

    /// Consumes the outcome; the success handler receives the referent for `'a`.
    #[inline]
    pub fn into_match<F, G, R>(self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(&'a T) -> R,
        G: FnOnce(Error) -> R,
    {
        match self.state {
            State::Ok(referent) => on_ok(referent),
            State::Err(error) => on_err(error),
        }
    }
}

impl<'a, T: ?Sized + 'a> Outcome<T, Exclusive<'a>> {
    /// Creates a successful outcome exclusively aliasing `referent`.
    ///
    /// Writes through [`value_mut`](Self::value_mut) land in `referent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use feer::MutOutcome;
    ///
    /// let mut source = 7;
    /// let mut alias = MutOutcome::ok(&mut source);
    /// *alias.value_mut() = 11;
    /// drop(alias);
    /// assert_eq!(source, 11);
    /// ```
    #[inline]
    pub fn ok<M>(referent: &'a mut T) -> Self
    where
        T: NotError<M>,
    {
        Self::from_slot(referent)
    }

    /// Returns the aliased referent.
    ///
    /// # Panics
    ///
    /// Panics with an `invalid state access` message if the outcome holds an
    /// error.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.state {
            State::Ok(referent) => referent,
            State::Err(error) => value_on_error(error),
        }
    }

    /// Returns the aliased referent mutably.
    ///
    /// # Panics
    ///
    /// Panics with an `invalid state access` message if the outcome holds an
    /// error.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match &mut self.state {
            State::Ok(referent) => referent,
            State::Err(error) => value_on_error(error),
        }
    }

    /// Consumes the outcome and returns the exclusive borrow for `'a`.
    ///
    /// # Panics
    ///
    /// Panics with an `invalid state access` message if the outcome holds an
    /// error.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> &'a mut T {
        match self.state {
            State::Ok(referent) => referent,
            State::Err(error) => value_on_error(&error),
        }
    }

    /// Dispatches to exactly one handler, leaving the outcome intact.
    #[inline]
    pub fn match_with<F, G, R>(&self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(&T) -> R,
        G: FnOnce(&Error) -> R,
    {
        match &self.state {
            State::Ok(referent) => on_ok(&**referent),
            State::Err(error) => on_err(error),
        }
    }

    /// Consumes the outcome; the success handler receives the exclusive
    /// borrow for `'a`.
    #[inline]
    pub fn into_match<F, G, R>(self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(&'a mut T) -> R,
        G: FnOnce(Error) -> R,
    {
        match self.state {
            State::Ok(referent) => on_ok(referent),
            State::Err(error) => on_err(error),
        }
    }
}
