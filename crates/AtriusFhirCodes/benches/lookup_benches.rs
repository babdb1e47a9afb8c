use atrius_fhir_codes::code_systems::{BundleType, EncounterStatus, ObservationStatus};
use atrius_fhir_codes::{registry, BoundCode, Extension, Vocabulary};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_code_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup/code");

    group.bench_function("first_literal", |b| {
        b.iter(|| BundleType::from_code(black_box("document")))
    });

    group.bench_function("last_literal", |b| {
        b.iter(|| BundleType::from_code(black_box("collection")))
    });

    group.bench_function("miss", |b| {
        b.iter(|| BundleType::from_code(black_box("Document")))
    });

    group.bench_function("interned_bound_code", |b| {
        b.iter(|| BoundCode::<EncounterStatus>::from_code(black_box("in-progress")))
    });

    group.bench_function("literal_of", |b| {
        b.iter(|| black_box(EncounterStatus::Onleave).as_code())
    });

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup/registry");

    group.bench_function("by_system", |b| {
        b.iter(|| registry::by_system(black_box("http://hl7.org/fhir/observation-status")))
    });

    group.bench_function("by_name", |b| {
        b.iter(|| registry::by_name(black_box("ObservationStatus")))
    });

    group.finish();
}

fn bench_builder(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder");

    group.bench_function("value_only", |b| {
        b.iter(|| {
            BoundCode::builder()
                .value(black_box(ObservationStatus::Final))
                .build()
        })
    });

    group.bench_function("with_metadata", |b| {
        b.iter(|| {
            BoundCode::builder()
                .id("obs-status")
                .extension(Extension::new("http://example.org/fhir/source"))
                .value(black_box(ObservationStatus::Amended))
                .build()
        })
    });

    group.bench_function("serialize_plain", |b| {
        let code = ObservationStatus::Final.canonical();
        b.iter(|| serde_json::to_string(black_box(code)))
    });

    group.finish();
}

criterion_group!(benches, bench_code_lookup, bench_registry, bench_builder);
criterion_main!(benches);
