use criterion::Criterion;
use form_rail::prelude::*;
use std::time::Duration;

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}

/// A form of `size` count validators, every fifth one failing.
pub fn build_form(size: usize, queue: &TaskQueue) -> (FormValidation, Vec<CountValidator>) {
    let form = FormValidation::builder(ValidationType::Immediate)
        .scheduler(queue.clone())
        .build();
    let fields: Vec<CountValidator> = (0..size)
        .map(|i| {
            let value = if i % 5 == 0 { "" } else { "filled" };
            CountValidator::at_least(1).message(format!("Field {i} is required.")).with_value(value)
        })
        .collect();
    for field in &fields {
        form.append_validator(field.clone());
    }
    (form, fields)
}
