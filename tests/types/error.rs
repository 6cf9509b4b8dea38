use feer::{Error, Outcome, SourceLocation};

#[test]
fn default_location_points_to_construction_site() {
    let before = line!();
    let err = Error::new("location-check");

    assert_eq!(err.message(), "location-check");
    assert_eq!(err.location().line(), before + 1);
    assert!(!err.location().file().is_empty());
    assert!(err.location().file().replace('\\', "/").ends_with("tests/types/error.rs"));
}

#[test]
fn multi_line_construction_stays_within_its_span() {
    let before = line!();
    let err = Error::new(
        "spread over lines",
    );
    let after = line!();

    assert!(err.location().line() > before);
    assert!(err.location().line() < after);
}

#[test]
fn explicit_location_is_preserved() {
    let call_site = SourceLocation::caller();
    let err = Error::at("explicit-location", call_site);

    assert_eq!(err.message(), "explicit-location");
    assert_eq!(err.location().line(), call_site.line());
    assert_eq!(err.location().file(), call_site.file());
    assert_eq!(err.location(), call_site);
}

#[test]
fn outcome_preserves_explicit_location() {
    let call_site = SourceLocation::caller();
    let err = Error::at("explicit", call_site);
    let result: Outcome<i32> = Outcome::err(err.clone());

    assert!(result.is_err());
    assert_eq!(result.error().message(), "explicit");
    assert_eq!(result.error().location().line(), call_site.line());
    assert_eq!(result.error(), &err);
}

#[test]
fn repropagation_keeps_original_site_and_new_message() {
    let original = Error::new("low-level failure");
    let forwarded = Error::at("high-level failure", original.location());

    assert_eq!(forwarded.location(), original.location());
    assert_eq!(forwarded.message(), "high-level failure");
}

#[test]
fn overriding_location_never_touches_message() {
    let site = SourceLocation::new("elsewhere.rs", 1, 1);
    let err = Error::at(String::from("same text"), site);

    assert_eq!(err.message(), "same text");
    assert_eq!(err.location().file(), "elsewhere.rs");
}

#[test]
fn errors_are_plain_values() {
    let err = Error::new("copyable");
    let copy = err.clone();
    let moved = err;

    assert_eq!(copy, moved);

    let mut slot = Error::new("first");
    assert_eq!(slot.message(), "first");
    slot = Error::new("second");
    assert_eq!(slot.message(), "second");
}

#[test]
fn track_caller_helpers_report_their_caller() {
    #[track_caller]
    fn build() -> Error {
        Error::new("from helper")
    }

    let line = line!() + 1;
    let err = build();

    assert_eq!(err.location().line(), line);
}

#[test]
fn new_leaves_function_unknown_while_fail_fills_it() {
    let plain = Error::new("no function");
    let named = feer::fail!("with function");

    assert_eq!(plain.location().function(), None);
    assert!(named
        .location()
        .function()
        .unwrap()
        .ends_with("new_leaves_function_unknown_while_fail_fills_it"));
}
