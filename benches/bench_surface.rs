use inheritance::{Genders, InheritanceModel};
use surface::{Axis, Figures, SurfaceGrid};
use indicatif::ProgressBar;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("model");
    let model = InheritanceModel::default();

    group.bench_function("family_success_probability", |b| b.iter(|| {
        model.family_success_probability(black_box(160.0), black_box(3u32), black_box(150.0), Genders::Both)
    }));

    group.bench_function("rarity_weighted_probability", |b| b.iter(|| {
        model.rarity_weighted_probability(black_box(130.0), black_box(2.5), black_box(145.0))
    }));
}

fn bench_grids(c: &mut Criterion) {
    let mut group = c.benchmark_group("grids");
    let model    = InheritanceModel::default();
    let progress = ProgressBar::hidden();

    let x = Axis::new(70.0, 180.0, 0.25).unwrap();
    let y = Axis::new(0.0, 10.0, 1.0 / 32.0).unwrap();
    group.bench_function("rarity_grid_full_resolution", |b| b.iter(|| {
        SurfaceGrid::evaluate(x, y, |cp, kids| model.rarity_weighted_probability(cp, kids, 145.0), &progress).unwrap()
    }));

    let figures = Figures::new(model, 2.0, 0.25);
    group.bench_function("attainment_by_target", |b| b.iter(|| {
        figures.attainment_by_target(&progress).unwrap()
    }));
}

criterion_group!(benches, bench_model, bench_grids);
criterion_main!(benches);
