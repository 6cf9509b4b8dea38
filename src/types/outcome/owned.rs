use crate::traits::NotError;
use crate::types::invalid_state::value_on_error;
use crate::types::storage::Owned;
use crate::types::Error;

use super::{Outcome, State};

impl<T> Outcome<T, Owned> {
    /// Creates a successful outcome that owns `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use feer::Outcome;
    ///
    /// let answer = Outcome::<i32>::ok(42);
    /// assert!(answer.is_ok());
    /// assert_eq!(*answer.value(), 42);
    /// ```
    ///
    /// A reference payload such as `Outcome<&mut i32>` is an ordinary owned
    /// value: [`value_mut`](Self::value_mut) can re-point it. Use
    /// [`RefOutcome`](crate::RefOutcome) or [`MutOutcome`](crate::MutOutcome)
    /// for an alias that stays fixed.
    #[inline]
    pub fn ok<M>(value: T) -> Self
    where
        T: NotError<M>,
    {
        Self::from_slot(value)
    }

    /// Returns the success payload.
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
            State::Ok(value) => value,
            State::Err(error) => value_on_error(error),
        }
    }

    /// Returns the success payload mutably.
    ///
    /// # Panics
    ///
    /// Panics with an `invalid state access` message if the outcome holds an
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use feer::Outcome;
    ///
    /// let mut names = Outcome::<Vec<&str>>::ok(vec!["ada"]);
    /// names.value_mut().push("grace");
    /// assert_eq!(names.value().len(), 2);
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match &mut self.state {
            State::Ok(value) => value,
            State::Err(error) => value_on_error(error),
        }
    }

    /// Consumes the outcome and moves the success payload out.
    ///
    /// # Panics
    ///
    /// Panics with an `invalid state access` message if the outcome holds an
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use feer::Outcome;
    ///
    /// let text = Outcome::<String>::ok(String::from("feer"));
    /// let moved: String = text.into_value();
    /// assert_eq!(moved, "feer");
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.state {
            State::Ok(value) => value,
            State::Err(error) => value_on_error(&error),
        }
    }

    /// Returns a clone of the success payload, or `fallback` converted into `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use feer::{Error, Outcome};
    ///
    /// let missing: Outcome<String> = Outcome::err(Error::new("no-string"));
    /// assert_eq!(missing.value_or("default"), "default");
    /// assert_eq!(Outcome::<i32>::ok(42).value_or(7), 42);
    /// ```
    #[must_use]
    #[inline]
    pub fn value_or<U>(&self, fallback: U) -> T
    where
        T: Clone,
        U: Into<T>,
    {
        match &self.state {
            State::Ok(value) => value.clone(),
            State::Err(_) => fallback.into(),
        }
    }

    /// Consuming form of [`value_or`](Self::value_or); moves the payload
    /// instead of cloning it.
    #[must_use]
    #[inline]
    pub fn into_value_or<U>(self, fallback: U) -> T
    where
        U: Into<T>,
    {
        match self.state {
            State::Ok(value) => value,
            State::Err(_) => fallback.into(),
        }
    }

    /// Dispatches to exactly one handler by reference, leaving the outcome
    /// intact.
    ///
    /// Both handlers return the same `R`; a mismatch does not compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use feer::Outcome;
    ///
    /// let result = Outcome::<i32>::ok(21);
    /// let out = result.match_with(|value| value * 2, |_| -1);
    /// assert_eq!(out, 42);
    /// assert!(result.is_ok());
    /// ```
    #[inline]
    pub fn match_with<F, G, R>(&self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(&T) -> R,
        G: FnOnce(&Error) -> R,
    {
        match &self.state {
            State::Ok(value) => on_ok(value),
            State::Err(error) => on_err(error),
        }
    }

    /// Consumes the outcome and moves its payload into exactly one handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use feer::Outcome;
    ///
    /// let text = Outcome::<String>::ok(String::from("feer"));
    /// let len = text.into_match(|owned: String| owned.len(), |err| err.message().len());
    /// assert_eq!(len, 4);
    /// ```
    #[inline]
    pub fn into_match<F, G, R>(self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(Error) -> R,
    {
        match self.state {
            State::Ok(value) => on_ok(value),
            State::Err(error) => on_err(error),
        }
    }
}
