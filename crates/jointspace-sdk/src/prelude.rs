//! Prelude - 常用类型的便捷导入
//!
//! ```rust
//! use jointspace_sdk::prelude::*;
//! ```

// 基础类型
pub use jointspace_types::{
    CheckLimitsMode, DofIndex, JointBounds, JointIndexSet, JointTopology, SpaceError,
};

// 构型空间
pub use jointspace_space::{
    ConfigError, ConfigurationSpace, DistanceMetric, JointState, ProjectionEvaluator,
    SpaceConfig, StateSampler,
};

// 验证器
pub use jointspace_validity::{
    OracleError, QueryStatistics, RobotError, RobotModel, ValidityOracle,
};

pub use crate::setup::PlanningSetup;

// 参考机器人模型
#[cfg(feature = "sim")]
pub use jointspace_sim::{PlanarArm, SimEnvironment};
