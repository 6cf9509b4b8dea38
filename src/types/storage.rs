//! Storage-shape markers for [`Outcome`](crate::Outcome).
//!
//! The second type parameter of `Outcome<T, S>` selects how the success
//! payload is held. The markers are never instantiated; they only pick a
//! [`Storage`](crate::traits::Storage) implementation at compile time.
//!
//! | Marker | Slot | Alias |
//! |--------|------|-------|
//! | [`Owned`] | `T` | [`Outcome<T>`](crate::Outcome) |
//! | [`Shared<'a>`](Shared) | `&'a T` | [`RefOutcome<'a, T>`](crate::RefOutcome) |
//! | [`Exclusive<'a>`](Exclusive) | `&'a mut T` | [`MutOutcome<'a, T>`](crate::MutOutcome) |
//! | [`Void`] | `()` | [`Status`](crate::Status) |
use core::marker::PhantomData;

/// The container owns its success payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owned {}

/// The container aliases caller-owned storage through a shared reference.
///
/// The referent must outlive `'a`; the container never extends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shared<'a>(PhantomData<&'a ()>, Never);

/// The container aliases caller-owned storage through an exclusive
/// reference, so writes through the container reach the referent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Exclusive<'a>(PhantomData<&'a mut ()>, Never);

/// The container carries no success payload, only the success marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Void {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Never {}
