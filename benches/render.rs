#[macro_use]
extern crate criterion;
extern crate mandelbrot;
extern crate num_cpus;

use criterion::Criterion;
use mandelbrot::{IterationCap, Renderer, Resolution, Viewport};

fn renderer() -> Renderer {
    Renderer::new(
        Viewport::default(),
        Resolution::new(320, 200),
        IterationCap::default(),
    )
}

fn single_worker(c: &mut Criterion) {
    c.bench_function("render 320x200, 1 worker", |b| b.iter(|| renderer().render(1)));
}

fn all_workers(c: &mut Criterion) {
    let workers = num_cpus::get();
    c.bench_function("render 320x200, all workers", move |b| {
        b.iter(|| renderer().render(workers))
    });
}

criterion_group!(benches, single_worker, all_workers);
criterion_main!(benches);
