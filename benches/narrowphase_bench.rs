use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sat_narrowphase::{
    BodyHandle, Capsule, Circle, ContactManifold, NarrowPhase, Polygon, RigidBody, Vec2,
};

fn polygon_body(sides: usize, position: Vec2, rotation: f64) -> RigidBody {
    let polygon = Polygon::regular(sides, 1.0).expect("valid regular polygon");
    RigidBody::new(polygon, position, rotation)
}

// Overlapping polygon pairs of growing vertex count
fn bench_polygon_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_polygon");
    let phase = NarrowPhase::default();

    for sides in [3, 8, 16].iter() {
        let a = polygon_body(*sides, Vec2::ZERO, 0.0);
        let b = polygon_body(*sides, Vec2::new(1.2, 0.3), 0.35);

        group.bench_with_input(BenchmarkId::new("test", sides), sides, |bench, _| {
            let mut manifold = ContactManifold::new(BodyHandle(0), BodyHandle(1));
            bench.iter(|| phase.test(black_box(&a), black_box(&b), &mut manifold));
        });
        group.bench_with_input(BenchmarkId::new("collide", sides), sides, |bench, _| {
            let mut manifold = ContactManifold::new(BodyHandle(0), BodyHandle(1));
            bench.iter(|| phase.collide(black_box(&a), black_box(&b), &mut manifold));
        });
    }
    group.finish();
}

// One overlapping pair per remaining shape combination
fn bench_mixed_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_pairs");
    let phase = NarrowPhase::default();

    let circle = RigidBody::new(Circle::new(0.8).expect("valid radius"), Vec2::new(1.1, 0.4), 0.0);
    let other_circle = RigidBody::new(Circle::new(0.5).expect("valid radius"), Vec2::new(1.9, 0.6), 0.0);
    let capsule = RigidBody::new(
        Capsule::new(Vec2::new(-1.5, 0.0), Vec2::new(1.5, 0.0), 0.3).expect("valid capsule"),
        Vec2::new(0.2, 0.9),
        0.2,
    );
    let other_capsule = RigidBody::new(
        Capsule::new(Vec2::new(0.0, -1.0), Vec2::new(0.0, 1.0), 0.2).expect("valid capsule"),
        Vec2::new(0.5, 1.2),
        0.0,
    );
    let polygon = polygon_body(8, Vec2::ZERO, 0.0);

    let pairs: [(&str, &RigidBody, &RigidBody); 5] = [
        ("circle_circle", &circle, &other_circle),
        ("circle_polygon", &circle, &polygon),
        ("capsule_circle", &capsule, &circle),
        ("capsule_polygon", &capsule, &polygon),
        ("capsule_capsule", &capsule, &other_capsule),
    ];

    for (name, a, b) in pairs {
        group.bench_function(name, |bench| {
            let mut manifold = ContactManifold::new(BodyHandle(0), BodyHandle(1));
            bench.iter(|| phase.collide(black_box(a), black_box(b), &mut manifold));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polygon_polygon, bench_mixed_pairs);
criterion_main!(benches);
