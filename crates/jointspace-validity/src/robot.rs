//! 机器人模型接口
//!
//! 验证器只通过这个 trait 访问机器人：写关节值、重算正运动学、查询碰撞。
//! 碰撞检测本身的实现完全由模型负责。

use crate::error::RobotError;
use jointspace_types::{CheckLimitsMode, DofIndex};

/// 机器人运动学 / 碰撞模型
///
/// 所有写操作都需要 `&mut self`：验证查询会改变模型的关节状态和运动学缓存，
/// 调用方不能假设查询之后位姿保持不变。
pub trait RobotModel {
    /// 模型所属的环境（场景）
    type Environment: ?Sized;

    fn environment(&self) -> &Self::Environment;

    /// 按 `indices` 顺序写入关节值
    ///
    /// `mode` 原样决定超限值是钳位、拒绝还是直接通过。
    fn set_dof_values(
        &mut self,
        values: &[f64],
        mode: CheckLimitsMode,
        indices: &[DofIndex],
    ) -> Result<(), RobotError>;

    /// 根据当前关节值同步重算正运动学
    fn compute_forward_kinematics(&mut self) -> Result<(), RobotError>;

    /// 当前位姿是否与环境碰撞
    fn check_collision(&self) -> Result<bool, RobotError>;

    /// 当前位姿是否自碰撞
    fn check_self_collision(&self) -> Result<bool, RobotError> {
        Ok(false)
    }
}

impl<R: RobotModel + ?Sized> RobotModel for &mut R {
    type Environment = R::Environment;

    fn environment(&self) -> &Self::Environment {
        (**self).environment()
    }

    fn set_dof_values(
        &mut self,
        values: &[f64],
        mode: CheckLimitsMode,
        indices: &[DofIndex],
    ) -> Result<(), RobotError> {
        (**self).set_dof_values(values, mode, indices)
    }

    fn compute_forward_kinematics(&mut self) -> Result<(), RobotError> {
        (**self).compute_forward_kinematics()
    }

    fn check_collision(&self) -> Result<bool, RobotError> {
        (**self).check_collision()
    }

    fn check_self_collision(&self) -> Result<bool, RobotError> {
        (**self).check_self_collision()
    }
}

impl<R: RobotModel + ?Sized> RobotModel for Box<R> {
    type Environment = R::Environment;

    fn environment(&self) -> &Self::Environment {
        (**self).environment()
    }

    fn set_dof_values(
        &mut self,
        values: &[f64],
        mode: CheckLimitsMode,
        indices: &[DofIndex],
    ) -> Result<(), RobotError> {
        (**self).set_dof_values(values, mode, indices)
    }

    fn compute_forward_kinematics(&mut self) -> Result<(), RobotError> {
        (**self).compute_forward_kinematics()
    }

    fn check_collision(&self) -> Result<bool, RobotError> {
        (**self).check_collision()
    }

    fn check_self_collision(&self) -> Result<bool, RobotError> {
        (**self).check_self_collision()
    }
}
