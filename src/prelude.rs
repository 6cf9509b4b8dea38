//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use feer::prelude::*;
//!
//! fn checked_div(a: i32, b: i32) -> Outcome<i32> {
//!     if b == 0 {
//!         return Outcome::err(fail!("division of {} by zero", a));
//!     }
//!     Outcome::<i32>::ok(a / b)
//! }
//!
//! assert_eq!(checked_div(10, 2).value_or(0), 5);
//! assert_eq!(checked_div(1, 0).value_or(0), 0);
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail!`], [`here!`]
//! - **Types**: [`Outcome`], [`RefOutcome`], [`MutOutcome`], [`Status`], [`Error`],
//!   [`SourceLocation`]
//! - **Functions**: [`ok`]

// Macros
pub use crate::{fail, here};

// Core types
pub use crate::types::{Error, MutOutcome, Outcome, RefOutcome, SourceLocation, Status};

// Status shorthand
pub use crate::types::ok;
