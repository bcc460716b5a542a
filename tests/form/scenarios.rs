//! End-to-end scenarios with the bundled validators.

use chrono::NaiveDate;
use form_rail::prelude::*;

use crate::support::Stub;

#[test]
fn count_equals_five() {
    let code = CountValidator::equal(5).message("Enter five characters.");

    code.set_value("hello".to_string());
    assert_eq!(code.validate(), Validation::success());

    code.set_value("hi".to_string());
    assert_eq!(code.validate(), Validation::failure("Enter five characters."));
}

#[test]
fn prefix_ignoring_case() {
    let title = PrefixValidator::new("Mr").ignore_case(true);

    title.set_value("mr. smith".to_string());
    assert!(title.validate().is_success());

    title.set_value("Ms. Smith".to_string());
    assert!(title.validate().is_failure());
}

#[test]
fn failing_prefix_and_disabled_count() {
    let queue = TaskQueue::new();
    let form = FormValidation::builder(ValidationType::Immediate).scheduler(queue).build();

    let title = PrefixValidator::new("Mr").ignore_case(true).message("Use Mr.").with_value("Ms. Smith");
    let code = CountValidator::equal(5).with_value("hi");

    form.append_validator(title.clone());
    form.append(ValidatorContainer::new(code.clone()).disabled_when(|| true));

    assert!(!form.is_all_valid());
    assert_eq!(form.all_validation_messages(), ["Use Mr."]);
}

#[test]
fn silent_trigger_hides_errors_but_reports_validity() {
    let form = FormValidation::builder(ValidationType::Silent).scheduler(TaskQueue::new()).build();
    let failing = Stub::failing("bad");
    let passing = Stub::passing();
    form.append_validator(failing.clone());
    form.append_validator(passing.clone());

    assert!(!form.trigger_validation());
    assert_eq!(failing.triggers(), [(false, false)]);
    assert_eq!(passing.triggers(), [(false, false)]);

    let valid = FormValidation::builder(ValidationType::Silent).scheduler(TaskQueue::new()).build();
    valid.append_validator(Stub::passing());
    assert!(valid.trigger_validation());
}

#[test]
fn trigger_drives_each_validators_error_display() {
    let form = FormValidation::builder(ValidationType::Immediate).scheduler(TaskQueue::new()).build();
    let name = CountValidator::at_least(2);
    let nickname = CountValidator::at_least(2);
    form.append_validator(name.clone());
    form.append(ValidatorContainer::new(nickname.clone()).disabled_when(|| true));

    assert!(!form.trigger_validation());
    assert!(name.should_display_error());
    assert!(!nickname.should_display_error());

    name.set_value("Jo".to_string());
    assert!(form.trigger_validation());
    assert!(!name.should_display_error());
}

#[test]
fn conditional_company_field() {
    use std::cell::Cell;
    use std::rc::Rc;

    let queue = TaskQueue::new();
    let form = FormValidation::builder(ValidationType::Deferred).scheduler(queue.clone()).build();

    let is_business = Rc::new(Cell::new(false));
    let name = CountValidator::at_least(1).message("Name is required.");
    let company = CountValidator::at_least(1).message("Company is required.");
    let start = DateRangeValidator::on_or_after(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
        .required_message("Start date is required.");

    let flag = is_business.clone();
    form!(form;
        name.clone(),
        company.clone() => move || !flag.get(),
        start.clone(),
    );

    name.set_value("Ada".to_string());
    start.set_value(NaiveDate::from_ymd_opt(2021, 5, 1));
    queue.run_pending();
    assert!(form.all_valid());
    assert!(!form.all_filled(), "the disabled, empty company field is not filled");

    is_business.set(true);
    form.refresh();
    assert!(!form.all_valid());
    assert_eq!(form.errors_description(), "Company is required.");

    company.set_value("Analytical Engines Ltd".to_string());
    assert!(form.all_valid());
    assert!(form.all_filled());
    assert_eq!(form.errors_description(), "");
}
