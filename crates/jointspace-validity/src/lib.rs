//! # Jointspace Validity - 构型合法性验证
//!
//! **依赖原则**: 只通过 [`RobotModel`] trait 访问机器人，不依赖任何具体仿真引擎
//!
//! ## 包含模块
//!
//! - `robot` - 机器人模型接口（写关节值、正运动学、碰撞查询）
//! - `oracle` - 验证器（通用路径 + 线性快速路径）
//! - `statistics` - 查询次数与累计耗时
//! - `error` - 机器人错误与验证器构造错误
//!
//! ## 错误传播
//!
//! - 构造期错误（关节索引不一致、线性验证器遇到周期关节）以 `Result::Err` 返回
//! - 查询期错误（维度不一致、NaN、正运动学失败、碰撞检测失败）记录日志后折叠为 `false`
//!
//! 查询没有重试逻辑：验证本身是幂等的，调用方可以直接重新查询。

mod error;
pub mod oracle;
pub mod robot;
pub mod statistics;

pub use error::{OracleError, RobotError};
pub use oracle::ValidityOracle;
pub use robot::RobotModel;
pub use statistics::QueryStatistics;
