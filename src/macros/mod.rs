//! Macros that capture the construction site in place.
//!
//! [`Error::new`](crate::Error::new) already records file, line and column
//! through `#[track_caller]`. The macros below expand at the call site and
//! therefore also know the enclosing function:
//!
//! - [`macro@crate::here`] - Builds a [`SourceLocation`](crate::SourceLocation)
//!   from `file!()`, `line!()`, `column!()` and the enclosing function path.
//! - [`macro@crate::fail`] - Formats a message like `format!` and wraps it in an
//!   [`Error`](crate::Error) located with `here!()`.
//!
//! # Examples
//!
//! ```
//! use feer::{fail, Outcome};
//!
//! fn open(path: &str) -> Outcome<u32> {
//!     Outcome::err(fail!("cannot open {}", path))
//! }
//!
//! let err = open("/etc/feer.toml").into_error();
//! assert_eq!(err.message(), "cannot open /etc/feer.toml");
//! assert!(err.location().function().unwrap().ends_with("open"));
//! ```

/// Captures the current file, line, column and enclosing function.
///
/// Closures are transparent: inside a closure the location names the
/// function that defines it.
///
/// # Examples
///
/// ```
/// use feer::here;
///
/// fn connect() -> feer::SourceLocation {
///     here!()
/// }
///
/// let location = connect();
/// assert!(location.function().unwrap().ends_with("connect"));
/// ```
#[macro_export]
macro_rules! here {
    () => {
        $crate::SourceLocation::new(file!(), line!(), column!()).with_function({
            fn __feer_probe() {}
            $crate::types::location::enclosing_function(::core::any::type_name_of_val(
                &__feer_probe,
            ))
        })
    };
}

/// Creates an [`Error`](crate::Error) from a format string, located with
/// [`here!`](crate::here).
///
/// # Arguments
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use feer::fail;
///
/// let attempts = 3;
/// let err = fail!("gave up after {} attempts", attempts);
/// assert_eq!(err.message(), "gave up after 3 attempts");
/// assert!(err.location().function().is_some());
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::Error::at($crate::__private::format!($($arg)*), $crate::here!())
    };
}
