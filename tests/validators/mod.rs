use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use form_rail::prelude::*;

fn record(log: &Rc<RefCell<Vec<String>>>, tag: &'static str) -> form_rail::traits::ChangeListener {
    let log = log.clone();
    Box::new(move |validation: &Validation| log.borrow_mut().push(format!("{tag}:{validation}")))
}

#[test]
fn every_listener_runs_on_each_change_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let code = CountValidator::equal(2).message("two");
    code.observe_change(record(&log, "a"));
    code.observe_change(record(&log, "b"));

    code.set_value("ok".to_string());
    code.set_value("nope".to_string());

    assert_eq!(
        *log.borrow(),
        ["a:valid", "b:valid", "a:invalid: two", "b:invalid: two"]
    );
}

#[test]
fn setting_the_same_value_still_notifies() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let title = PrefixValidator::new("Dr");
    title.observe_change(record(&log, "t"));

    title.set_value("Dr. No".to_string());
    title.set_value("Dr. No".to_string());
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn with_value_does_not_notify() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let email = InlineValidator::new(|v| v.contains('@')).with_value("a@b");
    email.observe_change(record(&log, "e"));

    assert!(log.borrow().is_empty());
    assert_eq!(email.value(), "a@b");
}

#[test]
fn emptiness_ignores_validity() {
    let code = CountValidator::equal(5).with_value("hi");
    assert!(!code.is_empty());
    assert!(code.validate().is_failure());

    let blank = InlineValidator::new(|_| true).with_value("   ");
    assert!(blank.is_empty());
    assert!(blank.validate().is_success());
}

#[test]
fn validate_is_repeatable() {
    let title = PrefixValidator::new("Mr").with_value("Mrs. Robinson");
    assert_eq!(title.validate(), title.validate());
}

#[test]
fn clones_share_value_and_display_state() {
    let original = CountValidator::at_most(3);
    let handle = original.clone();

    handle.set_value("toolong".to_string());
    assert_eq!(original.value(), "toolong");

    handle.trigger_validation(false, true);
    assert!(original.should_display_error());
}

#[test]
fn trigger_clears_a_previously_shown_error_when_disabled() {
    let date = DateRangeValidator::new(None, NaiveDate::from_ymd_opt(2000, 1, 1));
    date.trigger_validation(false, true);
    assert!(date.should_display_error());

    date.trigger_validation(true, true);
    assert!(!date.should_display_error());
}

#[test]
fn providers_supply_default_messages() {
    struct Shouty;
    impl ValidationMessages for Shouty {
        fn required(&self) -> String {
            "REQUIRED".into()
        }
        fn invalid(&self) -> String {
            "NOPE".into()
        }
    }

    let date = DateRangeValidator::new(None, None).messages(&Shouty);
    assert_eq!(date.validate().message(), Some("REQUIRED"));

    let inline = InlineValidator::new(|_| false).messages(&Shouty);
    assert_eq!(inline.validate().message(), Some("NOPE"));

    let count = CountValidator::at_least(3).messages(&Shouty);
    assert_eq!(count.validate().message(), Some("Must be at least 3 characters."));
}

#[test]
fn explicit_message_overrides_provider() {
    let title = PrefixValidator::new("Mr").messages(&DefaultMessages).message("custom");
    assert_eq!(title.validate().message(), Some("custom"));
}
