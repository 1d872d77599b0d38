use std::hint::black_box;
use std::time::Instant;

use orrery_math::{Mat3, Mat4, Vec3};

fn model(i: usize) -> Mat4 {
    let t = i as f32 * 0.01;
    Mat4::from_uniform_scale(0.5)
        .rotate_y(t)
        .translate(0.0, 0.0, 5.0)
        .rotate_y(t / 365.25)
}

fn bench_multiply(iterations: usize) {
    let a = model(1);
    let b = model(2);
    let start = Instant::now();
    let mut acc = Mat4::IDENTITY;
    for _ in 0..iterations {
        acc = black_box(a) * black_box(b) * acc;
    }
    black_box(acc);
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  multiply ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_inverse(iterations: usize) {
    let start = Instant::now();
    let mut singular = 0usize;
    for i in 0..iterations {
        if black_box(model(i)).inverse().is_err() {
            singular += 1;
        }
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  inverse ({iterations} iters, {singular} singular): {per_iter:?}/iter, total {elapsed:?}"
    );
}

fn bench_normal_matrix(iterations: usize) {
    let start = Instant::now();
    for i in 0..iterations {
        let _ = black_box(Mat3::model_to_normal(&model(i)));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  model_to_normal ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_view(iterations: usize) {
    let start = Instant::now();
    for i in 0..iterations {
        let yaw = i as f32 * 0.001;
        black_box(Mat4::look_at_rpy(Vec3::new(0.0, 0.0, 10.0), 0.0, 1.2, yaw));
        black_box(Mat4::look_at(
            Vec3::new(yaw.sin(), 1.0, yaw.cos()),
            Vec3::ZERO,
            Vec3::Y,
        ));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  look_at + look_at_rpy ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn main() {
    println!("=== orrery-math benchmarks ===");
    for n in [10_000, 100_000] {
        bench_multiply(n);
        bench_inverse(n);
        bench_normal_matrix(n);
        bench_view(n);
    }
}
