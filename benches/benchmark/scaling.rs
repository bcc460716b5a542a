use crate::common::{build_form, configure_criterion};
use criterion::{criterion_group, BenchmarkId, Criterion, Throughput};
use form_rail::prelude::*;
use std::hint::black_box;

pub fn bench_recompute_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/recompute");

    for size in [1, 10, 100, 1000] {
        let queue = TaskQueue::new();
        let (_form, fields) = build_form(size, &queue);
        let mut toggle = false;

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                toggle = !toggle;
                fields[size - 1].set_value(if toggle { "" } else { "filled" }.to_string());
                black_box(queue.run_pending());
            })
        });
    }

    group.finish();
}

pub fn bench_conditional_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/conditional");

    for size in [10, 100, 1000] {
        let form = FormValidation::builder(ValidationType::Deferred)
            .scheduler(TaskQueue::new())
            .build();
        for i in 0..size {
            let field = InlineValidator::new(|value| !value.is_empty());
            form.append(ValidatorContainer::new(field).disabled_when(move || i % 2 == 0));
        }

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(form.all_validation_messages()))
        });
    }

    group.finish();
}

criterion_group! {
    name = scaling_benches;
    config = configure_criterion();
    targets = bench_recompute_scaling, bench_conditional_scaling
}
