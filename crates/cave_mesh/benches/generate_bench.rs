//! Cave generation benchmarks.
//!
//! Stages are timed in isolation on a fixed smoothed grid, then the full
//! pipeline is timed per grid size and as a rayon batch.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cave_mesh::{
  extract_outlines, extrude_walls, generate, generate_batch, hash_seed, random_fill, smooth, triangulate,
  CaveConfig, Grid, SquareGrid,
};

const SIZES: [usize; 3] = [64, 128, 256];
const FILL_PERCENT: u32 = 47;
const SMOOTH_ITERATIONS: u32 = 5;

fn smoothed_grid(size: usize) -> Grid {
  let grid = random_fill(size, size, FILL_PERCENT, hash_seed("bench")).unwrap();
  smooth(&grid, SMOOTH_ITERATIONS)
}

// =============================================================================
// Isolated stages
// =============================================================================

fn bench_smoothing(c: &mut Criterion) {
  let mut group = c.benchmark_group("smooth_pass");

  for size in SIZES {
    let grid = random_fill(size, size, FILL_PERCENT, hash_seed("bench")).unwrap();
    group.throughput(Throughput::Elements((size * size) as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
      b.iter(|| black_box(smooth(grid, 1)))
    });
  }

  group.finish();
}

fn bench_triangulate(c: &mut Criterion) {
  let mut group = c.benchmark_group("triangulate");

  for size in SIZES {
    let grid = smoothed_grid(size);
    group.throughput(Throughput::Elements((size * size) as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
      b.iter(|| {
        let mut squares = SquareGrid::build(grid, 1.0).unwrap();
        black_box(triangulate(&mut squares).unwrap().triangle_count())
      })
    });
  }

  group.finish();
}

fn bench_outlines_and_walls(c: &mut Criterion) {
  let mut group = c.benchmark_group("outlines_walls");

  for size in SIZES {
    let mut squares = SquareGrid::build(&smoothed_grid(size), 1.0).unwrap();
    let floor = triangulate(&mut squares).unwrap();

    group.bench_with_input(BenchmarkId::from_parameter(size), &floor, |b, floor| {
      b.iter(|| {
        let mut checked = floor.checked.clone();
        let outlines = extract_outlines(&floor.adjacency, &mut checked).unwrap();
        let walls = extrude_walls(&outlines, &floor.vertices, 5.0).unwrap();
        black_box(walls.triangle_count())
      })
    });
  }

  group.finish();
}

// =============================================================================
// Full pipeline
// =============================================================================

fn bench_generate(c: &mut Criterion) {
  let mut group = c.benchmark_group("generate");

  for size in SIZES {
    let config = CaveConfig::new()
      .with_size(size, size)
      .with_fill_percent(FILL_PERCENT)
      .with_seed("bench");
    group.throughput(Throughput::Elements((size * size) as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, config| {
      b.iter(|| black_box(generate(config).unwrap().stats.floor_triangles))
    });
  }

  group.finish();
}

fn bench_generate_batch(c: &mut Criterion) {
  let mut group = c.benchmark_group("generate_batch");
  group.sample_size(20);

  for count in [4, 16] {
    let configs: Vec<CaveConfig> = (0..count)
      .map(|i| CaveConfig::new().with_size(96, 96).with_seed(format!("batch-{i}")))
      .collect();
    group.bench_with_input(BenchmarkId::from_parameter(count), &configs, |b, configs| {
      b.iter(|| black_box(generate_batch(configs).len()))
    });
  }

  group.finish();
}

criterion_group!(stages, bench_smoothing, bench_triangulate, bench_outlines_and_walls);

criterion_group!(pipeline, bench_generate, bench_generate_batch);

criterion_main!(stages, pipeline);
