//! Type-level selection of the success-payload slot.
//!
//! [`Storage`] maps a shape marker and a success type to the concrete type
//! stored in the success branch of an [`Outcome`](crate::Outcome). The trait
//! is sealed: the four shapes in [`crate::types::storage`] are the only ones,
//! which keeps aliasing shapes from ever exposing their reference slot.
//!
//! # Examples
//!
//! ```
//! use feer::traits::Storage;
//! use feer::types::{Exclusive, Owned, Shared, Void};
//!
//! fn slot_of<T: ?Sized, S: Storage<T>>() -> &'static str {
//!     core::any::type_name::<S::Slot>()
//! }
//!
//! assert_eq!(slot_of::<u8, Owned>(), "u8");
//! assert_eq!(slot_of::<u8, Shared<'static>>(), "&u8");
//! assert_eq!(slot_of::<u8, Exclusive<'static>>(), "&mut u8");
//! assert_eq!(slot_of::<(), Void>(), "()");
//! ```
use crate::types::storage::{Exclusive, Owned, Shared, Void};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Owned {}
    impl Sealed for super::Shared<'_> {}
    impl Sealed for super::Exclusive<'_> {}
    impl Sealed for super::Void {}
}

/// Picks the slot type holding a success payload of type `T`.
pub trait Storage<T: ?Sized>: sealed::Sealed {
    /// What the success branch actually stores.
    type Slot;
}

impl<T> Storage<T> for Owned {
    type Slot = T;
}

impl<'a, T: ?Sized + 'a> Storage<T> for Shared<'a> {
    type Slot = &'a T;
}

impl<'a, T: ?Sized + 'a> Storage<T> for Exclusive<'a> {
    type Slot = &'a mut T;
}

impl Storage<()> for Void {
    type Slot = ();
}
