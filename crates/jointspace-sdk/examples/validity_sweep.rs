//! 随机采样验证示例
//!
//! 在带障碍物的平面机械臂上均匀采样构型，统计合法率和平均查询耗时。
//!
//! ```bash
//! RUST_LOG=debug cargo run -p jointspace-sdk --example validity_sweep -- 5000
//! ```

use anyhow::Result;
use jointspace_sdk::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::info;

const CONFIG: &str = r#"
[[joints]]
index = 0
periodic = true

[[joints]]
index = 1
lower = -2.6
upper = 2.6

[[joints]]
index = 2
lower = -2.6
upper = 2.6

[oracle]
check_limits = 1
"#;

fn main() -> Result<()> {
    jointspace_sdk::init_logger();

    let samples: usize = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(2000);

    let env = Arc::new(
        SimEnvironment::new("workcell")
            .with_circle(1.5, 1.0, 0.4)
            .with_circle(-1.0, -1.2, 0.5),
    );
    let arm = PlanarArm::new(env, vec![1.0, 0.8, 0.5])
        .with_limits(1, -2.4, 2.4)
        .with_limits(2, -2.4, 2.4);

    let config = SpaceConfig::from_toml_str(CONFIG)?;
    let PlanningSetup { space, mut oracle } = PlanningSetup::from_config(&config, arm)?;

    let mut sampler = space.sampler(StdRng::seed_from_u64(1))?;
    let mut state = space.alloc_state();
    for _ in 0..samples {
        sampler.sample_uniform(&mut state);
        oracle.is_valid(&state);
    }

    let stats = oracle.statistics();
    info!(
        checks = stats.num_collision_checks,
        valid = stats.num_valid,
        "sweep finished"
    );
    println!(
        "{} checks, {:.1}% valid, mean {:.2} µs per check",
        stats.num_collision_checks,
        stats.valid_rate(),
        stats.mean_check_time() * 1e6
    );

    if let Some(projection) = space.default_projection() {
        let cell = projection.cell_of(&projection.project_to_vec(&state));
        println!("last sample falls in projection cell {:?}", cell);
    }
    Ok(())
}
