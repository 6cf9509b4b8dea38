//! Traits behind the container's type-level shape selection.
//!
//! - [`Storage`]: maps a storage marker and a success type to the slot stored
//!   in the success branch of an [`Outcome`](crate::Outcome).
//! - [`NotError`]: rejects [`Error`](crate::Error) as a success type at build
//!   time.

pub mod payload;
pub mod storage;

pub use payload::NotError;
pub use storage::Storage;
