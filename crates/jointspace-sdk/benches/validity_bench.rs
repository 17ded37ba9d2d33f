//! 验证器性能基准测试
//!
//! 对比线性快速路径与通用路径在参考平面机械臂上的单次查询开销。

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jointspace_sdk::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::PI;
use std::sync::Arc;

const DOF: usize = 6;

fn arm() -> PlanarArm {
    let env = Arc::new(
        SimEnvironment::new("bench")
            .with_circle(2.0, 2.0, 0.5)
            .with_circle(-1.5, 2.5, 0.4)
            .with_circle(0.0, -3.0, 0.8),
    );
    PlanarArm::new(env, vec![0.6; DOF])
}

fn bounded_space() -> Arc<ConfigurationSpace> {
    let mut space = ConfigurationSpace::new((0..DOF).collect(), vec![false; DOF]).unwrap();
    let mut bounds = JointBounds::new(DOF);
    bounds.set_all(-PI, PI);
    space.set_bounds(bounds).unwrap();
    space.setup().unwrap();
    Arc::new(space)
}

fn samples(space: &ConfigurationSpace, n: usize) -> Vec<JointState> {
    let mut sampler = space.sampler(StdRng::seed_from_u64(42)).unwrap();
    (0..n)
        .map(|_| {
            let mut s = space.alloc_state();
            sampler.sample_uniform(&mut s);
            s
        })
        .collect()
}

fn bench_is_valid(c: &mut Criterion) {
    let space = bounded_space();
    let states = samples(&space, 1024);

    let mut group = c.benchmark_group("is_valid");

    let mut fast = ValidityOracle::for_space(space.clone(), arm());
    let mut i = 0;
    group.bench_function("linear_fast_path", |b| {
        b.iter(|| {
            i = (i + 1) % states.len();
            black_box(fast.is_valid(black_box(&states[i])))
        })
    });

    let mut generic = ValidityOracle::for_space(space.clone(), arm()).with_linear_fast_path(false);
    let mut j = 0;
    group.bench_function("generic_path", |b| {
        b.iter(|| {
            j = (j + 1) % states.len();
            black_box(generic.is_valid(black_box(&states[j])))
        })
    });

    group.finish();
}

fn bench_space_ops(c: &mut Criterion) {
    let space = bounded_space();
    let states = samples(&space, 2);
    let (a, b) = (&states[0], &states[1]);
    let mut out = space.alloc_state();

    c.bench_function("distance", |bench| {
        bench.iter(|| black_box(space.distance(black_box(a), black_box(b))))
    });

    c.bench_function("interpolate", |bench| {
        bench.iter(|| space.interpolate(black_box(a), black_box(b), black_box(0.37), &mut out))
    });

    let projection = space.default_projection().unwrap();
    let mut projected = vec![0.0; projection.dimension()];
    c.bench_function("project", |bench| {
        bench.iter(|| projection.project(black_box(a), &mut projected))
    });
}

criterion_group!(benches, bench_is_valid, bench_space_ops);
criterion_main!(benches);
