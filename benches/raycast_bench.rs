//! Ray casting cost of pivot resolution and cursor zoom.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Vec2, Vec3};
use viewcam::camera::{
    pick_or_project, Camera, PivotResolver, ScreenCenterPivot,
};
use viewcam::math::{Aabb, Ray};
use viewcam::scene::{Scene, SceneIntersect, Shape};

/// Grid of spheres and boxes plus a two-triangle floor.
fn grid_scene(side: usize) -> Scene {
    let mut scene = Scene::new();
    for i in 0..side {
        for j in 0..side {
            let center = Vec3::new(i as f32 * 3.0, 0.0, j as f32 * -3.0);
            let shape = if (i + j) % 2 == 0 {
                Shape::Sphere {
                    center,
                    radius: 1.0,
                }
            } else {
                Shape::Box(Aabb::new(center - Vec3::ONE, center + Vec3::ONE))
            };
            let _ = scene.add(format!("node-{i}-{j}"), shape);
        }
    }
    let extent = side as f32 * 3.0;
    scene.with(
        "floor",
        Shape::Mesh {
            vertices: vec![
                Vec3::new(-extent, -2.0, extent),
                Vec3::new(extent, -2.0, extent),
                Vec3::new(extent, -2.0, -extent),
                Vec3::new(-extent, -2.0, -extent),
            ],
            indices: vec![0, 1, 2, 0, 2, 3],
        },
    )
}

fn viewing_camera() -> Camera {
    let mut camera = Camera::perspective(60.0, 16.0 / 9.0, 0.01, 1000.0);
    camera.position = Vec3::new(10.0, 12.0, 25.0);
    camera.look_at(Vec3::new(10.0, 0.0, -10.0));
    camera
}

fn bench_scene_ray(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_intersect");
    let camera = viewing_camera();
    for side in [4, 16, 32] {
        let scene = grid_scene(side);
        let id = BenchmarkId::from_parameter(side * side);
        let _ = group.bench_with_input(id, &scene, |b, scene| {
            let ray = camera.ray_from_ndc(Vec2::new(0.1, -0.2));
            b.iter(|| black_box(scene.intersect_ray(black_box(&ray))));
        });
    }
    group.finish();
}

fn bench_pivot_resolution(c: &mut Criterion) {
    let scene = grid_scene(16);
    let camera = viewing_camera();
    let target = Vec3::new(10.0, 0.0, -10.0);
    let _ = c.bench_function("screen_center_pivot", |b| {
        let mut resolver = ScreenCenterPivot;
        b.iter(|| {
            black_box(resolver.resolve_pivot(
                &camera,
                &scene,
                black_box(target),
            ))
        });
    });
}

fn bench_zoom_pick_miss(c: &mut Criterion) {
    let scene = grid_scene(16);
    let ray = Ray::new(Vec3::new(0.0, 50.0, 0.0), Vec3::Y);
    let _ = c.bench_function("pick_or_project_miss", |b| {
        b.iter(|| black_box(pick_or_project(black_box(&ray), &scene, 20.0)));
    });
}

criterion_group!(
    benches,
    bench_scene_ray,
    bench_pivot_resolution,
    bench_zoom_pick_miss
);
criterion_main!(benches);
