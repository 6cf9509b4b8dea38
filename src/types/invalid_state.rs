//! Contract violations: reading the branch an [`Outcome`](crate::Outcome) does not hold.
//!
//! These are programming mistakes, not failures of the computation, so they
//! never travel through the [`Error`] channel. They panic, pointing at the
//! misuse site through `#[track_caller]`. Every panic message starts with
//! `invalid state access:` so test suites can tell the two tiers apart.
//!
//! ```should_panic
//! use feer::{Error, Outcome};
//!
//! let failed: Outcome<i32> = Outcome::err(Error::new("no value"));
//! let _ = failed.value(); // panics: invalid state access
//! ```
use core::fmt::{self, Display};

use crate::types::Error;

/// The two ways an accessor can be called on the wrong branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidState {
    /// A success accessor was called on an error outcome.
    ValueOnError,
    /// An error accessor was called on a successful outcome.
    ErrorOnSuccess,
}

impl Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueOnError => {
                f.write_str("invalid state access: value requested from an error outcome")
            },
            Self::ErrorOnSuccess => {
                f.write_str("invalid state access: error requested from a successful outcome")
            },
        }
    }
}

// Kept out of line so the accessors stay small enough to inline.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn value_on_error(error: &Error) -> ! {
    panic!("{}: {:#}", InvalidState::ValueOnError, error)
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn error_on_success() -> ! {
    panic!("{}", InvalidState::ErrorOnSuccess)
}
