//! Jointspace SDK - 采样规划器的构型空间与合法性验证
//!
//! # 架构设计
//!
//! 从底层到高层：
//!
//! - **类型层** (`types`): 关节拓扑、上下限、限位检查模式、错误
//! - **空间层** (`space`): 复合构型空间、采样、投影、TOML 配置
//! - **验证层** (`validity`): 机器人模型接口、验证器、查询统计
//! - **仿真层** (`sim`, 可选): 平面机械臂参考模型
//!
//! # 数据流
//!
//! ```text
//! 规划器 → ConfigurationSpace（采样 / 插值）→ ValidityOracle::is_valid(state)
//!        → [写关节值 → 正运动学 → 碰撞查询] → bool
//! ```
//!
//! # 快速开始
//!
//! ```rust
//! use jointspace_sdk::prelude::*;
//! use std::sync::Arc;
//!
//! let mut space = ConfigurationSpace::new(vec![0, 1], vec![false, false]).unwrap();
//! space.set_bounds(JointBounds::from_pairs(&[(-1.5, 1.5), (-1.5, 1.5)])).unwrap();
//! space.setup().unwrap();
//! let space = Arc::new(space);
//!
//! let env = Arc::new(SimEnvironment::new("demo").with_circle(0.0, 3.0, 0.5));
//! let arm = PlanarArm::new(env, vec![1.0, 1.0]);
//!
//! let mut oracle = ValidityOracle::new_linear(space.clone(), arm, vec![0, 1]).unwrap();
//! assert!(oracle.is_valid(&JointState::from([0.0, 0.0])));
//! assert_eq!(oracle.num_collision_checks(), 1);
//! ```

pub mod logging;
pub mod prelude;
mod setup;

pub use jointspace_space as space;
pub use jointspace_types as types;
pub use jointspace_validity as validity;

#[cfg(feature = "sim")]
pub use jointspace_sim as sim;

// --- 常用类型 ---
pub use jointspace_space::{ConfigurationSpace, JointState, SpaceConfig};
pub use jointspace_types::{CheckLimitsMode, JointBounds};
pub use jointspace_validity::{QueryStatistics, RobotModel, ValidityOracle};
pub use logging::init_logger;
pub use setup::PlanningSetup;
