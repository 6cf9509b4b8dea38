//! Explicit success-or-failure values without unwinding.
//!
//! The crate is built around [`Outcome`], a closed two-state container that
//! holds either a success payload or an [`Error`]. Each module re-exports its
//! public surface from here, so consumers can depend on `feer::*` or pick
//! focused pieces as needed.
//!
//! Two failure tiers are kept apart:
//!
//! - **Represented errors** live in the error state of an [`Outcome`] and are
//!   consumed through [`Outcome::error`] or a dispatch handler.
//! - **Contract violations** (reading the branch that is not held) panic
//!   with an `invalid state access` message; see [`InvalidState`].
//!
//! # Examples
//!
//! ## Owned payload
//!
//! ```
//! use feer::{Error, Outcome};
//!
//! let answer = Outcome::<i32>::ok(42);
//! assert!(answer.is_ok());
//! assert_eq!(*answer.value(), 42);
//!
//! let failed: Outcome<i32> = Outcome::err(Error::new("boom"));
//! assert!(failed.is_err());
//! assert_eq!(failed.error().message(), "boom");
//! ```
//!
//! ## Aliasing payload
//!
//! ```
//! use feer::MutOutcome;
//!
//! let mut source = 7;
//! let mut alias = MutOutcome::ok(&mut source);
//! *alias.value_mut() = 11;
//! assert_eq!(source, 11);
//! ```
//!
//! ## No payload
//!
//! ```
//! let done = feer::ok();
//! assert_eq!(done.match_with(|| 1, |_err| 0), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Call-site capturing macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Storage-shape trait
pub mod traits;
/// Outcome, Error and SourceLocation
pub mod types;

#[cfg(feature = "tracing")]
mod tracing_ext;

#[doc(hidden)]
pub mod __private {
    pub use crate::types::alloc_type::format;
}

pub use traits::{NotError, Storage};
pub use types::{
    ok, Error, Exclusive, InvalidState, MutOutcome, Outcome, Owned, RefOutcome, Shared,
    SourceLocation, Status, Void,
};
