//! # Jointspace Space - 关节构型空间
//!
//! **依赖原则**: 只依赖 `jointspace-types`，不依赖机器人模型或碰撞检测
//!
//! ## 包含模块
//!
//! - `space` - 复合构型空间（距离、插值、上下限、setup）
//! - `state` - 构型（扁平数值缓冲区）
//! - `sampler` - 均匀 / 邻域 / 高斯采样
//! - `projection` - 投影矩阵与投影评估器
//! - `config` - TOML 配置
//!
//! ## 使用示例
//!
//! ```rust
//! use jointspace_space::{ConfigurationSpace, JointState};
//! use jointspace_types::JointBounds;
//!
//! let mut space = ConfigurationSpace::new(vec![0, 1, 2], vec![false, false, true]).unwrap();
//! space.set_bounds(JointBounds::from_pairs(&[(0.0, 1.0), (-1.0, 1.0), (0.0, 0.0)])).unwrap();
//! space.setup().unwrap();
//!
//! let from = JointState::from([0.0, 0.0, 3.0]);
//! let to = JointState::from([1.0, 0.0, -3.0]);
//! let mut mid = space.alloc_state();
//! space.interpolate(&from, &to, 0.5, &mut mid);
//! assert!(space.satisfies_bounds(&mid));
//!
//! let projection = space.default_projection().unwrap();
//! assert_eq!(projection.dimension(), 2);
//! ```

pub mod config;
pub mod projection;
pub mod sampler;
pub mod space;
pub mod state;

// 重新导出常用类型
pub use config::{ConfigError, JointConfig, OracleConfig, ProjectionConfig, SpaceConfig};
pub use projection::{
    DEFAULT_CELL_SPLITS, DEFAULT_PROJECTION_SEED, ProjectionEvaluator, ProjectionMatrix,
    ProjectionParams, default_projection_dimension,
};
pub use sampler::StateSampler;
pub use space::{ConfigurationSpace, DistanceMetric};
pub use state::{JointState, StateBuffer};
