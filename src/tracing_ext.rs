//! Tracing integration for feer.
//!
//! Nothing in this crate logs on its own. With the `tracing` feature the
//! caller can opt in to emitting one `ERROR` event per failure, with the
//! construction site recorded as structured fields.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! feer = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use feer::{Error, Outcome};
//!
//! fn load() -> Outcome<String> {
//!     let missing: Outcome<String> = Outcome::err(Error::new("config missing"));
//!     missing.trace_err()
//! }
//!
//! assert!(load().is_err());
//! ```

use crate::traits::Storage;
use crate::types::{Error, Outcome};

impl Error {
    /// Emits this error as a `tracing` event at `ERROR` level.
    ///
    /// The event message is the error message; `file`, `line`, `column` and
    /// `function` are recorded as fields.
    pub fn trace(&self) {
        let location = self.location();
        tracing::error!(
            file = location.file(),
            line = location.line(),
            column = location.column(),
            function = location.function().unwrap_or("<unknown>"),
            "{}",
            self.message()
        );
    }
}

impl<T: ?Sized, S: Storage<T>> Outcome<T, S> {
    /// Emits the error through [`Error::trace`] when in the error state, then
    /// returns the outcome unchanged.
    #[inline]
    pub fn trace_err(self) -> Self {
        if self.is_err() {
            self.error().trace();
        }
        self
    }
}
