//! # Jointspace Types
//!
//! 机器人构型空间的基础类型定义（无规划器、无仿真依赖）
//!
//! ## 模块
//!
//! - `joint`: 关节索引集合与关节拓扑（有界 / 周期）
//! - `angle`: 周期关节的角度环绕工具函数
//! - `bounds`: 有界坐标的上下限
//! - `mode`: 正运动学写入时的关节限位检查模式
//! - `error`: 构造期错误类型
//!
//! ## 坐标顺序
//!
//! 关节索引集合的顺序在空间生命周期内固定不变，它定义了
//! "坐标 i ↔ 机器人关节 indices[i]" 的映射，下游所有组件都依赖这一映射。

pub mod angle;
pub mod bounds;
pub mod error;
pub mod joint;
pub mod mode;

// 重新导出常用类型
pub use angle::{PERIOD, angle_diff, angle_distance, wrap_angle};
pub use bounds::JointBounds;
pub use error::SpaceError;
pub use joint::{DofIndex, JointIndexSet, JointTopology};
pub use mode::CheckLimitsMode;
