use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use portfolio3d::config::{PortfolioConfig, ScenesConfig};
use portfolio3d::core::{SceneName, SceneRng, SurfaceSize};
use portfolio3d::scenes::{build_scene, NodeGraph, ParticleField, ShapeField};
use portfolio3d::Portfolio;

const SURFACE: SurfaceSize = SurfaceSize { width: 1280, height: 720 };

/// Benchmark: shape field animation step
fn bench_shape_field_update(c: &mut Criterion) {
    let mut field = ShapeField::build(12, &mut SceneRng::seeded(1));
    let mut elapsed = 0.0f32;

    c.bench_function("shape_field_update", |b| {
        b.iter(|| {
            elapsed += 1.0 / 60.0;
            field.update(black_box(elapsed));
        })
    });
}

/// Benchmark: node bobbing plus edge buffer rewrite at several node counts
fn bench_node_graph_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("node_graph_update");

    for count in [20usize, 100, 400] {
        let mut graph = NodeGraph::build(count, 3.0, &mut SceneRng::seeded(2));
        let mut elapsed = 0.0f32;

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                elapsed += 1.0 / 60.0;
                graph.update(black_box(elapsed));
            })
        });
    }

    group.finish();
}

/// Benchmark: particle fall and respawn
fn bench_particle_field_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_field_update");

    for count in [1_000usize, 10_000] {
        let mut field = ParticleField::build(count, &mut SceneRng::seeded(3));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                field.update();
                black_box(field.positions());
            })
        });
    }

    group.finish();
}

/// Benchmark: update plus rasterization for each scene
fn bench_scene_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_frame");
    group.sample_size(30);
    let config = ScenesConfig::default();

    for name in SceneName::ALL {
        let mut scene = build_scene(name, SURFACE, &config, &mut SceneRng::seeded(4));
        let mut elapsed = 0.0f32;

        group.bench_function(name.as_str(), |b| {
            b.iter(|| {
                elapsed += 1.0 / 60.0;
                scene.update(elapsed);
                scene.render();
                black_box(scene.viewport().draw_calls());
            })
        });
    }

    group.finish();
}

/// Benchmark: composing all scene canvases into one page frame
fn bench_compose(c: &mut Criterion) {
    let config = PortfolioConfig {
        seed: Some(5),
        ..PortfolioConfig::default()
    };
    let mut portfolio = Portfolio::new(&config, SURFACE, &[]);

    c.bench_function("compose_page_frame", |b| {
        b.iter(|| black_box(portfolio.compose().coverage()))
    });
}

criterion_group!(
    benches,
    bench_shape_field_update,
    bench_node_graph_update,
    bench_particle_field_update,
    bench_scene_frame,
    bench_compose,
);
criterion_main!(benches);
