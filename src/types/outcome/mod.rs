//! The success-or-failure container.
//!
//! [`Outcome<T, S>`] holds exactly one of a success payload or an [`Error`].
//! Which branch is active is fixed when the value is built; the fields are
//! private, so the only ways to observe the state are the predicates, the
//! accessors and the two dispatch operations.
//!
//! The storage shape `S` is chosen at the type level (see
//! [`crate::types::storage`]) and each shape gets its own set of accessors:
//!
//! - `Outcome<T>` owns a `T`.
//! - [`RefOutcome<'a, T>`] aliases a `&'a T`.
//! - [`MutOutcome<'a, T>`] aliases a `&'a mut T`.
//! - [`Status`] carries no payload.
//!
//! # Examples
//!
//! ```
//! use feer::{Error, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     match raw.parse() {
//!         Ok(port) => Outcome::<u16>::ok(port),
//!         Err(_) => Outcome::err(Error::new(format!("not a port: {raw}"))),
//!     }
//! }
//!
//! let port = parse_port("8080");
//! assert!(port.is_ok());
//! assert_eq!(*port.value(), 8080);
//!
//! let described = parse_port("http").match_with(
//!     |port| format!("port {port}"),
//!     |err| format!("rejected: {}", err.message()),
//! );
//! assert_eq!(described, "rejected: not a port: http");
//! ```
//!
//! # Rejected at compile time
//!
//! Both handlers of a dispatch must return the same type:
//!
//! ```compile_fail
//! use feer::Outcome;
//!
//! let value = Outcome::<i32>::ok(7);
//! let out = value.match_with(|v| *v, |_err| false);
//! ```
//!
//! The error handler always takes the error:
//!
//! ```compile_fail
//! use feer::{Error, Outcome};
//!
//! let value: Outcome<i32> = Outcome::err(Error::new("boom"));
//! let out = value.match_with(|v| *v, || -1);
//! ```
//!
//! A payload-free outcome dispatches to a zero-argument success handler:
//!
//! ```compile_fail
//! let value = feer::ok();
//! let out = value.match_with(|_: i32| 1, |_err| 0);
//! ```
//!
//! An aliasing outcome cannot outlive a temporary referent:
//!
//! ```compile_fail
//! use feer::MutOutcome;
//!
//! let alias = MutOutcome::ok(&mut String::from("temporary"));
//! assert!(alias.is_ok());
//! ```
//!
//! The success type can never be [`Error`] itself:
//!
//! ```compile_fail
//! use feer::{Error, Outcome};
//!
//! let confused = Outcome::<Error>::ok(Error::new("success or failure?"));
//! ```
//!
//! # Aliases stay fixed
//!
//! Aliasing outcomes hand out the referent, never the stored reference, so
//! assigning through [`MutOutcome::value_mut`] writes into the referent and
//! cannot re-point the alias:
//!
//! ```
//! use feer::MutOutcome;
//!
//! let (mut first, second) = (1, 2);
//! let mut alias = MutOutcome::ok(&mut first);
//! *alias.value_mut() = second;
//! drop(alias);
//! assert_eq!((first, second), (2, 2));
//! ```
//!
//! An owned reference payload such as `Outcome<&mut i32>` is a plain value
//! and can be replaced like any other.
//!
//! A consumed outcome cannot be queried again:
//!
//! ```compile_fail
//! use feer::Outcome;
//!
//! let text = Outcome::<String>::ok(String::from("feer"));
//! let len = text.into_match(|s| s.len(), |err| err.message().len());
//! assert!(text.is_ok());
//! ```
use core::fmt;
use core::hash::{Hash, Hasher};
#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::traits::{NotError, Storage};
use crate::types::invalid_state::error_on_success;
use crate::types::storage::{Exclusive, Owned, Shared, Void};
use crate::types::Error;

mod alias;
mod owned;
mod void;

pub use void::ok;

/// Outcome aliasing caller storage through a shared reference.
pub type RefOutcome<'a, T> = Outcome<T, Shared<'a>>;

/// Outcome aliasing caller storage through an exclusive reference.
pub type MutOutcome<'a, T> = Outcome<T, Exclusive<'a>>;

/// Outcome without a success payload.
pub type Status = Outcome<(), Void>;

/// Either a success payload stored according to `S`, or an [`Error`].
///
/// # Type Parameters
///
/// * `T` - The success type
/// * `S` - The storage shape, [`Owned`] unless stated otherwise
#[must_use]
pub struct Outcome<T: ?Sized, S: Storage<T> = Owned> {
    state: State<S::Slot>,
}

#[derive(Clone, PartialEq, Eq, Hash)]
enum State<V> {
    Ok(V),
    Err(Error),
}

impl<T: ?Sized, S: Storage<T>> Outcome<T, S> {
    /// Creates an outcome in the error state.
    ///
    /// Available for every storage shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use feer::{Error, Outcome, Status};
    ///
    /// let owned: Outcome<String> = Outcome::err(Error::new("missing"));
    /// let unit: Status = Outcome::err(Error::new("refused"));
    /// assert!(owned.is_err() && unit.is_err());
    /// ```
    #[inline]
    pub fn err<M>(error: Error) -> Self
    where
        T: NotError<M>,
    {
        Self { state: State::Err(error) }
    }

    #[inline]
    fn from_slot(slot: S::Slot) -> Self {
        Self { state: State::Ok(slot) }
    }

    /// Returns `true` if the outcome holds a success payload.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self.state, State::Ok(_))
    }

    /// Returns `true` if the outcome holds an [`Error`].
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics with an `invalid state access` message if the outcome is a
    /// success.
    ///
    /// # Examples
    ///
    /// ```
    /// use feer::{Error, Outcome};
    ///
    /// let failed: Outcome<i32> = Outcome::err(Error::new("boom"));
    /// assert_eq!(failed.error().message(), "boom");
    /// ```
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &Error {
        match &self.state {
            State::Err(error) => error,
            State::Ok(_) => error_on_success(),
        }
    }

    /// Returns the error mutably, for whole-value replacement.
    ///
    /// # Panics
    ///
    /// Panics with an `invalid state access` message if the outcome is a
    /// success.
    ///
    /// # Examples
    ///
    /// ```
    /// use feer::{Error, Outcome};
    ///
    /// let mut failed: Outcome<i32> = Outcome::err(Error::new("first"));
    /// *failed.error_mut() = Error::new("second");
    /// assert_eq!(failed.error().message(), "second");
    /// ```
    #[inline]
    #[track_caller]
    pub fn error_mut(&mut self) -> &mut Error {
        match &mut self.state {
            State::Err(error) => error,
            State::Ok(_) => error_on_success(),
        }
    }

    /// Consumes the outcome and returns the error.
    ///
    /// # Panics
    ///
    /// Panics with an `invalid state access` message if the outcome is a
    /// success.
    #[inline]
    #[track_caller]
    pub fn into_error(self) -> Error {
        match self.state {
            State::Err(error) => error,
            State::Ok(_) => error_on_success(),
        }
    }
}

/// Truthiness of an outcome, equal to [`Outcome::is_ok`].
///
/// ```
/// use feer::{Error, Outcome};
///
/// let fine = Outcome::<u8>::ok(1);
/// let broken: Outcome<u8> = Outcome::err(Error::new("x"));
/// assert!(bool::from(&fine));
/// assert!(!bool::from(&broken));
/// ```
impl<T: ?Sized, S: Storage<T>> From<&Outcome<T, S>> for bool {
    #[inline]
    fn from(outcome: &Outcome<T, S>) -> Self {
        outcome.is_ok()
    }
}

impl<T: ?Sized, S: Storage<T>> Clone for Outcome<T, S>
where
    S::Slot: Clone,
{
    fn clone(&self) -> Self {
        Self { state: self.state.clone() }
    }
}

impl<T: ?Sized, S: Storage<T>> PartialEq for Outcome<T, S>
where
    S::Slot: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<T: ?Sized, S: Storage<T>> Eq for Outcome<T, S> where S::Slot: Eq {}

impl<T: ?Sized, S: Storage<T>> Hash for Outcome<T, S>
where
    S::Slot: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

impl<T: ?Sized, S: Storage<T>> fmt::Debug for Outcome<T, S>
where
    S::Slot: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Ok(value) => f.debug_tuple("Ok").field(value).finish(),
            State::Err(error) => f.debug_tuple("Err").field(error).finish(),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: ?Sized, S: Storage<T>> Serialize for Outcome<T, S>
where
    S::Slot: Serialize,
{
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        match &self.state {
            State::Ok(value) => serializer.serialize_newtype_variant("Outcome", 0, "Ok", value),
            State::Err(error) => serializer.serialize_newtype_variant("Outcome", 1, "Err", error),
        }
    }
}
