use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::{detect_aspects, AspectCalculator, AspectTable, MotionPolicy};
use urania::points::CATALOGUE;
use urania::ChartPoint;

fn catalogue_points() -> Vec<ChartPoint> {
    CATALOGUE
        .iter()
        .enumerate()
        .map(|(i, def)| ChartPoint::new(def.id, (i as f64) * 27.5, Some(1.0 - i as f64 * 0.1), 0))
        .collect()
}

fn bench_calculate_aspect(c: &mut Criterion) {
    let calculator = AspectCalculator::default();
    let points = catalogue_points();

    c.bench_function("calculate_aspect", |b| {
        b.iter(|| calculator.calculate_aspect(black_box(&points[0]), black_box(&points[4])))
    });
}

fn bench_compute_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::default();
    let points = catalogue_points();

    c.bench_function("compute_aspects", |b| {
        b.iter(|| calculator.compute_aspects(black_box(&points)))
    });
}

fn bench_detect_aspects_motion(c: &mut Criterion) {
    let table = AspectTable::reference();
    let policy = MotionPolicy::default();
    let points = catalogue_points();

    c.bench_function("detect_aspects_motion", |b| {
        b.iter(|| detect_aspects(black_box(&points), &table, &policy))
    });
}

criterion_group!(
    benches,
    bench_calculate_aspect,
    bench_compute_aspects,
    bench_detect_aspects_motion
);
criterion_main!(benches);
