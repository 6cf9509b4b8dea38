//! Call-site descriptors attached to every [`Error`](crate::Error).
//!
//! A [`SourceLocation`] is captured in one of two ways:
//!
//! - [`SourceLocation::caller`] relies on `#[track_caller]` and records the
//!   file, line and column of whoever called the outermost tracked function.
//! - The [`here!`](crate::here) macro expands in place and additionally
//!   records the path of the enclosing function.
//!
//! # Examples
//!
//! ```
//! use feer::{here, SourceLocation};
//!
//! fn load() -> SourceLocation {
//!     here!()
//! }
//!
//! let location = load();
//! assert!(location.function().unwrap().ends_with("load"));
//! assert!(location.line() > 0);
//! ```
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::Serialize;

/// File, line, column and (when known) function of a construction site.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
    column: u32,
    function: Option<&'static str>,
}

impl SourceLocation {
    /// Builds a location from explicit coordinates, without a function name.
    ///
    /// # Examples
    ///
    /// ```
    /// use feer::SourceLocation;
    ///
    /// let location = SourceLocation::new("src/io.rs", 12, 5);
    /// assert_eq!(location.to_string(), "src/io.rs:12:5");
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column, function: None }
    }

    /// Captures the location of the caller.
    ///
    /// Because the capture goes through `#[track_caller]`, calling this from
    /// a function that is itself `#[track_caller]` reports *that* function's
    /// caller. The function name is never available on this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use feer::SourceLocation;
    ///
    /// let expected = line!() + 1;
    /// let location = SourceLocation::caller();
    /// assert_eq!(location.line(), expected);
    /// assert_eq!(location.function(), None);
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn caller() -> Self {
        let location = core::panic::Location::caller();
        Self::new(location.file(), location.line(), location.column())
    }

    /// Returns a copy of this location carrying the given function path.
    #[must_use]
    #[inline]
    pub const fn with_function(self, function: &'static str) -> Self {
        Self { function: Some(function), ..self }
    }

    /// Source file as reported by the compiler.
    #[must_use]
    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// 1-based line number.
    #[must_use]
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column number.
    #[must_use]
    #[inline]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Path of the enclosing function, if it was captured.
    #[must_use]
    #[inline]
    pub const fn function(&self) -> Option<&'static str> {
        self.function
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)?;
        if let Some(function) = self.function {
            write!(f, " in {}", function)?;
        }
        Ok(())
    }
}

/// Strips the probe item and any closure frames from a `type_name` path.
///
/// Used by [`here!`](crate::here); not part of the public API.
#[doc(hidden)]
#[must_use]
pub fn enclosing_function(raw: &'static str) -> &'static str {
    let mut path = raw.strip_suffix("::__feer_probe").unwrap_or(raw);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path
}

