//! 验证层错误类型定义

use jointspace_types::{DofIndex, SpaceError};
use thiserror::Error;

/// 机器人模型报告的错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RobotError {
    /// 关节值超出限位（仅在限位检查模式要求拒绝时出现）
    #[error("Joint {joint} value {value} outside limits [{lower}, {upper}]")]
    JointLimit {
        joint: DofIndex,
        value: f64,
        lower: f64,
        upper: f64,
    },

    /// 机器人上不存在的关节索引
    #[error("Unknown joint index: {0}")]
    UnknownJoint(DofIndex),

    /// 正运动学计算失败
    #[error("Forward kinematics failed: {0}")]
    Kinematics(String),

    /// 碰撞检测失败
    #[error("Collision check failed: {0}")]
    CollisionCheck(String),
}

/// 验证器构造错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OracleError {
    /// 线性验证器不接受周期关节
    #[error("Coordinate {coordinate} (joint {joint}) is periodic; linear oracle requires bounded joints only")]
    PeriodicJointInLinearSpace { coordinate: usize, joint: DofIndex },

    /// 关节索引列表与构型空间不一致
    #[error("Joint indices {actual:?} do not match configuration space indices {expected:?}")]
    IndicesMismatch {
        expected: Vec<DofIndex>,
        actual: Vec<DofIndex>,
    },

    /// 构型空间错误
    #[error("Configuration space error: {0}")]
    Space(#[from] SpaceError),
}
