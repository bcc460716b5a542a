use form_rail::prelude::*;

use crate::support::{Stub, Switch};

#[test]
fn form_macro_appends_in_order() {
    let form = FormValidation::builder(ValidationType::Immediate).scheduler(TaskQueue::new()).build();
    form!(form; Stub::failing("a"), Stub::failing("b"), Stub::failing("c"));

    assert_eq!(form.len(), 3);
    assert_eq!(form.all_validation_messages(), ["a", "b", "c"]);
}

#[test]
fn form_macro_attaches_disable_predicates() {
    let form = FormValidation::builder(ValidationType::Immediate).scheduler(TaskQueue::new()).build();
    let switch = Switch::new(true);
    form!(form;
        Stub::passing(),
        Stub::failing("optional") => switch.predicate(),
    );

    assert!(form.is_all_valid());
    switch.set(false);
    assert_eq!(form.all_validation_messages(), ["optional"]);
}

#[test]
fn form_macro_accepts_a_reference() {
    let form = FormValidation::builder(ValidationType::Immediate).scheduler(TaskQueue::new()).build();
    let handle = &form;
    form!(*handle; Stub::passing());
    assert_eq!(form.len(), 1);
}
