//! Build-time guard keeping [`Error`] out of the success branch.
//!
//! Every type implements [`NotError<M>`] for one marker `M`, except
//! [`Error`], which implements it for two. Constructors leave `M` to
//! inference, so with `T = Error` the compiler cannot pick a marker and the
//! call is rejected. The markers live in a private module and cannot be
//! named to break the tie.
//!
//! ```compile_fail
//! use feer::{Error, Outcome};
//!
//! let confused = Outcome::<Error>::ok(Error::new("success or failure?"));
//! ```
//!
//! ```compile_fail
//! use feer::{Error, RefOutcome};
//!
//! let source = Error::new("aliased");
//! let confused = RefOutcome::ok(&source);
//! ```
//!
//! ```compile_fail
//! use feer::{Error, Outcome};
//!
//! let confused: Outcome<Error> = Outcome::err(Error::new("which branch?"));
//! ```
//!
//! Inside a generic function `T` is still abstract, so the guard holds for
//! any `T`. Wrappers carry the bound themselves to push the check out to
//! their callers:
//!
//! ```
//! use feer::traits::NotError;
//! use feer::Outcome;
//!
//! fn wrap<T, M>(value: T) -> Outcome<T>
//! where
//!     T: NotError<M>,
//! {
//!     Outcome::<T>::ok(value)
//! }
//!
//! assert!(wrap(3_u8).is_ok());
//! ```
//!
//! ```compile_fail
//! use feer::traits::NotError;
//! use feer::{Error, Outcome};
//!
//! fn wrap<T, M>(value: T) -> Outcome<T>
//! where
//!     T: NotError<M>,
//! {
//!     Outcome::<T>::ok(value)
//! }
//!
//! let confused = wrap(Error::new("wrapped"));
//! ```
use crate::types::Error;

mod sealed {
    pub trait Sealed<M> {}

    #[doc(hidden)]
    pub enum Payload {}

    #[doc(hidden)]
    pub enum Collision {}

    impl<T: ?Sized> Sealed<Payload> for T {}
    impl Sealed<Collision> for super::Error {}
}

/// Implemented by every success type that is not [`Error`].
///
/// `M` is an inference-only marker. Name it as a free type parameter in
/// generic code and let the compiler fill it in.
pub trait NotError<M>: sealed::Sealed<M> {}

impl<T: ?Sized> NotError<sealed::Payload> for T {}

impl NotError<sealed::Collision> for Error {}
