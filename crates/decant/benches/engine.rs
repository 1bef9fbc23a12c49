//! Hot-path benchmarks: guard dispatch, field navigation and alternation,
//! on both the success and the exhausted-failure path.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use decant::{any_of, prelude::*};
use serde_json::json;

fn bench_guards(c: &mut Criterion) {
    let input = json!(12_345);
    c.bench_function("guard_int_hit", |b| {
        b.iter(|| is_int().parse(black_box(&input)))
    });

    let miss = json!("12345");
    c.bench_function("guard_int_miss", |b| {
        b.iter(|| is_int().parse(black_box(&miss)))
    });
}

fn bench_navigation(c: &mut Criterion) {
    let input = json!({"a": {"b": {"c": 7}}});
    let parser = has_field("a", has_field("b", has_field("c", is_int())));
    c.bench_function("nested_fields_hit", |b| {
        b.iter(|| parser.parse(black_box(&input)))
    });
}

fn bench_alternation(c: &mut Criterion) {
    let parser = any_of![
        has_field("sender_chat", has_field("id", is_int())),
        has_field("from", has_field("id", is_int())),
    ];

    let second_branch = json!({"from": {"id": 11_111}});
    c.bench_function("alternation_second_branch", |b| {
        b.iter(|| parser.parse(black_box(&second_branch)))
    });

    let exhausted = json!({"text": "no sender here"});
    c.bench_function("alternation_exhausted", |b| {
        b.iter(|| parser.parse(black_box(&exhausted)))
    });
}

criterion_group!(benches, bench_guards, bench_navigation, bench_alternation);
criterion_main!(benches);
