//! Data types: the [`Outcome`] container, its [`Error`] payload and the
//! call-site [`SourceLocation`].
//!
//! # Examples
//!
//! ```
//! use feer::types::{Error, Outcome, SourceLocation};
//!
//! let site = SourceLocation::new("loader.rs", 42, 7);
//! let outcome: Outcome<Vec<u8>> = Outcome::err(Error::at("truncated frame", site));
//!
//! println!("{:#}", outcome.error());
//! // Output: truncated frame (at loader.rs:42:7)
//! ```
pub(crate) mod alloc_type;
pub mod error;
pub mod invalid_state;
pub mod location;
pub mod outcome;
pub mod storage;

pub use error::*;
pub use invalid_state::InvalidState;
pub use location::SourceLocation;
pub use outcome::{ok, MutOutcome, Outcome, RefOutcome, Status};
pub use storage::{Exclusive, Owned, Shared, Void};
