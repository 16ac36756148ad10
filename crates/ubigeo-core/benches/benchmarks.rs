use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use ubigeo_core::{
    DepartmentOptions, Institution, Level, LookupOptions, NameOptions, ResourceStore, Ubigeo,
};

fn resolver() -> Ubigeo {
    let store = Arc::new(ResourceStore::new(ResourceStore::default_data_dir()));
    let ubigeo = Ubigeo::with_store(store);
    ubigeo.store().load_all().expect("bundled data loads");
    ubigeo
}

fn bench_code_lookups(c: &mut Criterion) {
    let ubigeo = resolver();
    let codes: Vec<String> = ["010101", "150101", "150132", "080101", "250101"]
        .iter()
        .cycle()
        .take(1_000)
        .map(|s| s.to_string())
        .collect();

    c.bench_function("resolver.get_departamento.batch_1000", |b| {
        b.iter(|| {
            let out: Vec<String> = ubigeo
                .get_departamento_many(black_box(&codes), &DepartmentOptions::default())
                .unwrap();
            black_box(out)
        });
    });

    c.bench_function("resolver.get_distrito.scalar", |b| {
        b.iter(|| ubigeo.get_distrito(black_box("150116"), &LookupOptions::default()))
    });
}

fn bench_names(c: &mut Criterion) {
    let ubigeo = resolver();

    c.bench_function("normalizer.exact", |b| {
        b.iter(|| ubigeo.validate_departamento(black_box("HUANUCO"), &NameOptions::default()))
    });

    c.bench_function("normalizer.fuzzy_fallback", |b| {
        b.iter(|| ubigeo.validate_ubicacion(black_box("SAN JUAN DE LURIGANCHOO"), &NameOptions::default()))
    });

    c.bench_function("resolver.get_ubigeo", |b| {
        b.iter(|| ubigeo.get_ubigeo(black_box("Lince"), Level::Distritos, Institution::Inei))
    });
}

criterion_group!(benches, bench_code_lookups, bench_names);
criterion_main!(benches);
