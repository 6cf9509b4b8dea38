use core::any::type_name;

use feer::traits::Storage;
use feer::{Exclusive, MutOutcome, Outcome, Owned, RefOutcome, Shared, Status, Void};

fn slot<T: ?Sized, S: Storage<T>>() -> &'static str {
    type_name::<S::Slot>()
}

#[test]
fn owned_slot_is_the_payload_itself() {
    assert_eq!(slot::<String, Owned>(), type_name::<String>());
    assert_eq!(slot::<Vec<u8>, Owned>(), type_name::<Vec<u8>>());
}

#[test]
fn alias_slots_are_references() {
    assert_eq!(slot::<i32, Shared<'static>>(), "&i32");
    assert_eq!(slot::<i32, Exclusive<'static>>(), "&mut i32");
    assert_eq!(slot::<str, Shared<'static>>(), "&str");
}

#[test]
fn void_slot_is_unit() {
    assert_eq!(slot::<(), Void>(), "()");
}

#[test]
fn default_shape_is_owned() {
    fn same<A: 'static, B: 'static>() -> bool {
        core::any::TypeId::of::<A>() == core::any::TypeId::of::<B>()
    }

    assert!(same::<Outcome<u8>, Outcome<u8, Owned>>());
    assert!(same::<RefOutcome<'static, u8>, Outcome<u8, Shared<'static>>>());
    assert!(same::<MutOutcome<'static, u8>, Outcome<u8, Exclusive<'static>>>());
    assert!(same::<Status, Outcome<(), Void>>());
}

#[test]
fn shape_generic_code_sees_only_the_common_surface() {
    fn describe<T: ?Sized, S: Storage<T>>(outcome: &Outcome<T, S>) -> &'static str {
        if outcome.is_ok() {
            "ok"
        } else {
            "err"
        }
    }

    let source = 1;
    assert_eq!(describe(&Outcome::<i32>::ok(1)), "ok");
    assert_eq!(describe(&RefOutcome::ok(&source)), "ok");
    assert_eq!(describe(&feer::ok()), "ok");
    assert_eq!(describe(&Outcome::<i32>::err(feer::Error::new("e"))), "err");
}

#[test]
fn payload_guard_accepts_every_non_error_type() {
    use feer::traits::NotError;

    fn wrap<T, M>(value: T) -> Outcome<T>
    where
        T: NotError<M>,
    {
        Outcome::<T>::ok(value)
    }

    assert_eq!(*wrap(5_u8).value(), 5);
    assert_eq!(wrap(String::from("text")).value(), "text");
    assert!(wrap(feer::SourceLocation::new("a.rs", 1, 1)).is_ok());
    assert!(wrap(Some(feer::Error::new("nested"))).is_ok());
}
