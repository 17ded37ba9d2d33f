//! # Jointspace Sim - 参考机器人模型
//!
//! 平面串联机械臂 + 圆形障碍物环境，实现 [`RobotModel`](jointspace_validity::RobotModel)，
//! 用于测试、基准和示例，不依赖外部仿真引擎。
//!
//! ## 使用示例
//!
//! ```rust
//! use jointspace_sim::{PlanarArm, SimEnvironment};
//! use jointspace_types::CheckLimitsMode;
//! use jointspace_validity::RobotModel;
//! use std::sync::Arc;
//!
//! let env = Arc::new(SimEnvironment::new("table").with_circle(1.5, 1.0, 0.3));
//! let mut arm = PlanarArm::new(env, vec![1.0, 1.0]).with_limits(1, -2.5, 2.5);
//!
//! arm.set_dof_values(&[0.0, 0.0], CheckLimitsMode::NOTHING, &[0, 1]).unwrap();
//! arm.compute_forward_kinematics().unwrap();
//! assert_eq!(arm.check_collision(), Ok(false));
//! ```

pub mod arm;
pub mod environment;
pub mod geometry;

pub use arm::PlanarArm;
pub use environment::{Obstacle, SimEnvironment};
pub use geometry::Segment;
