//! 平面串联机械臂
//!
//! N 个转动关节串联，每个关节后接一节直杆。正运动学为
//!
//! ```text
//! T_i = base · R(q_0) · X(l_0) · R(q_1) · X(l_1) · … · R(q_i)
//! ```
//!
//! 其中 `R(q)` 为绕 z 轴旋转，`X(l)` 为沿 x 轴平移。每节连杆缓存为一条线段，
//! 供碰撞查询使用。

use crate::environment::SimEnvironment;
use crate::geometry::Segment;
use jointspace_types::{CheckLimitsMode, DofIndex};
use jointspace_validity::{RobotError, RobotModel};
use nalgebra::{Isometry2, Point2, Vector2};
use std::sync::Arc;
use tracing::warn;

/// 平面串联机械臂
#[derive(Debug, Clone)]
pub struct PlanarArm {
    environment: Arc<SimEnvironment>,
    link_lengths: Vec<f64>,
    limits: Vec<Option<(f64, f64)>>,
    base: Isometry2<f64>,
    joint_values: Vec<f64>,
    /// 正运动学缓存：每节连杆一条线段
    segments: Vec<Segment>,
    fk_valid: bool,
}

impl PlanarArm {
    /// 创建机械臂，所有关节为无限位的连续转动关节
    pub fn new(environment: Arc<SimEnvironment>, link_lengths: Vec<f64>) -> Self {
        let dof = link_lengths.len();
        Self {
            environment,
            link_lengths,
            limits: vec![None; dof],
            base: Isometry2::identity(),
            joint_values: vec![0.0; dof],
            segments: Vec::with_capacity(dof),
            fk_valid: false,
        }
    }

    /// 设置关节限位
    ///
    /// # 注意
    ///
    /// 构建器不返回错误，以下输入会被静默修正：
    ///
    /// - `lower > upper` 时交换上下限
    /// - `joint >= dof()` 时忽略该调用，可用 [`limits`](Self::limits) 确认是否生效
    pub fn with_limits(mut self, joint: DofIndex, lower: f64, upper: f64) -> Self {
        if let Some(limit) = self.limits.get_mut(joint) {
            *limit = Some((lower.min(upper), lower.max(upper)));
        }
        self
    }

    /// 设置底座位姿
    pub fn with_base(mut self, x: f64, y: f64, angle: f64) -> Self {
        self.base = Isometry2::new(Vector2::new(x, y), angle);
        self.fk_valid = false;
        self
    }

    /// 关节数
    pub fn dof(&self) -> usize {
        self.link_lengths.len()
    }

    pub fn link_lengths(&self) -> &[f64] {
        &self.link_lengths
    }

    pub fn limits(&self, joint: DofIndex) -> Option<(f64, f64)> {
        self.limits.get(joint).copied().flatten()
    }

    /// 当前关节值（按关节索引顺序）
    pub fn joint_values(&self) -> &[f64] {
        &self.joint_values
    }

    /// 正运动学是否与当前关节值一致
    pub fn is_fk_current(&self) -> bool {
        self.fk_valid
    }

    /// 连杆线段（最近一次正运动学结果）
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// 末端位置（最近一次正运动学结果）
    pub fn end_effector(&self) -> Option<Point2<f64>> {
        if !self.fk_valid {
            return None;
        }
        Some(self.segments.last().map_or_else(
            || self.base * Point2::origin(),
            |s| s.end,
        ))
    }

    fn check_limit(&self, joint: DofIndex, value: f64) -> Result<(), RobotError> {
        match self.limits[joint] {
            Some((lower, upper)) if value < lower || value > upper => Err(RobotError::JointLimit {
                joint,
                value,
                lower,
                upper,
            }),
            _ => Ok(()),
        }
    }

    fn clamp(&self, joint: DofIndex, value: f64, silent: bool) -> f64 {
        match self.limits[joint] {
            Some((lower, upper)) => {
                let clamped = value.clamp(lower, upper);
                if !silent && clamped != value {
                    warn!(joint, value, lower, upper, "joint value clamped to limits");
                }
                clamped
            }
            None => value,
        }
    }
}

impl RobotModel for PlanarArm {
    type Environment = SimEnvironment;

    fn environment(&self) -> &SimEnvironment {
        &self.environment
    }

    fn set_dof_values(
        &mut self,
        values: &[f64],
        mode: CheckLimitsMode,
        indices: &[DofIndex],
    ) -> Result<(), RobotError> {
        if values.len() != indices.len() {
            return Err(RobotError::Kinematics(format!(
                "{} values supplied for {} joints",
                values.len(),
                indices.len()
            )));
        }
        if let Some(&joint) = indices.iter().find(|&&j| j >= self.dof()) {
            return Err(RobotError::UnknownJoint(joint));
        }

        // 拒绝模式下先整体校验，失败时不改变任何关节
        if mode == CheckLimitsMode::CHECK_LIMITS_THROW {
            for (&joint, &value) in indices.iter().zip(values) {
                self.check_limit(joint, value)?;
            }
        }

        for (&joint, &value) in indices.iter().zip(values) {
            self.joint_values[joint] = match mode {
                CheckLimitsMode::CHECK_LIMITS => self.clamp(joint, value, false),
                CheckLimitsMode::CHECK_LIMITS_SILENT => self.clamp(joint, value, true),
                _ => value,
            };
        }
        self.fk_valid = false;
        Ok(())
    }

    fn compute_forward_kinematics(&mut self) -> Result<(), RobotError> {
        if let Some(joint) = self.joint_values.iter().position(|q| !q.is_finite()) {
            return Err(RobotError::Kinematics(format!(
                "joint {} has non-finite value {}",
                joint, self.joint_values[joint]
            )));
        }

        self.segments.clear();
        let mut pose = self.base;
        for (&q, &length) in self.joint_values.iter().zip(&self.link_lengths) {
            pose *= Isometry2::rotation(q);
            let start = pose * Point2::origin();
            pose *= Isometry2::translation(length, 0.0);
            self.segments.push(Segment::new(start, pose * Point2::origin()));
        }
        self.fk_valid = true;
        Ok(())
    }

    fn check_collision(&self) -> Result<bool, RobotError> {
        if !self.fk_valid {
            return Err(RobotError::CollisionCheck(
                "forward kinematics not computed for current joint values".to_string(),
            ));
        }
        Ok(self.segments.iter().any(|s| self.environment.collides(s)))
    }

    fn check_self_collision(&self) -> Result<bool, RobotError> {
        if !self.fk_valid {
            return Err(RobotError::CollisionCheck(
                "forward kinematics not computed for current joint values".to_string(),
            ));
        }
        // 相邻连杆共享关节点，只检查不相邻的连杆
        let n = self.segments.len();
        Ok((0..n).any(|i| {
            ((i + 2)..n).any(|j| self.segments[i].intersects(&self.segments[j]))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn arm(env: SimEnvironment) -> PlanarArm {
        PlanarArm::new(Arc::new(env), vec![1.0, 1.0, 1.0])
    }

    fn apply(arm: &mut PlanarArm, values: &[f64], mode: CheckLimitsMode) -> Result<(), RobotError> {
        let indices: Vec<DofIndex> = (0..values.len()).collect();
        arm.set_dof_values(values, mode, &indices)?;
        arm.compute_forward_kinematics()
    }

    #[test]
    fn test_straight_arm_fk() {
        let mut arm = arm(SimEnvironment::new("empty"));
        apply(&mut arm, &[0.0, 0.0, 0.0], CheckLimitsMode::NOTHING).unwrap();
        let tip = arm.end_effector().unwrap();
        assert_relative_eq!(tip.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(tip.y, 0.0, epsilon = 1e-12);
        assert_eq!(arm.segments().len(), 3);
    }

    #[test]
    fn test_bent_arm_fk() {
        let mut arm = arm(SimEnvironment::new("empty"));
        apply(&mut arm, &[FRAC_PI_2, -FRAC_PI_2, 0.0], CheckLimitsMode::NOTHING).unwrap();
        let tip = arm.end_effector().unwrap();
        assert_relative_eq!(tip.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(tip.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_base_pose() {
        let mut arm = PlanarArm::new(Arc::new(SimEnvironment::default()), vec![2.0])
            .with_base(1.0, 1.0, FRAC_PI_2);
        apply(&mut arm, &[0.0], CheckLimitsMode::NOTHING).unwrap();
        let tip = arm.end_effector().unwrap();
        assert_relative_eq!(tip.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(tip.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_write_invalidates_fk() {
        let mut arm = arm(SimEnvironment::new("empty"));
        apply(&mut arm, &[0.0, 0.0, 0.0], CheckLimitsMode::NOTHING).unwrap();
        arm.set_dof_values(&[0.3], CheckLimitsMode::NOTHING, &[1])
            .unwrap();
        assert!(!arm.is_fk_current());
        assert!(arm.end_effector().is_none());
        assert!(arm.check_collision().is_err());
    }

    #[test]
    fn test_partial_write_by_index() {
        let mut arm = arm(SimEnvironment::new("empty"));
        arm.set_dof_values(&[0.5, -0.5], CheckLimitsMode::NOTHING, &[2, 0])
            .unwrap();
        assert_eq!(arm.joint_values(), &[-0.5, 0.0, 0.5]);
    }

    #[test]
    fn test_unknown_joint() {
        let mut arm = arm(SimEnvironment::new("empty"));
        assert_eq!(
            arm.set_dof_values(&[0.0], CheckLimitsMode::NOTHING, &[7]),
            Err(RobotError::UnknownJoint(7))
        );
    }

    #[test]
    fn test_with_limits_normalizes_input() {
        let a = arm(SimEnvironment::new("empty"))
            .with_limits(1, 0.5, -0.5)
            .with_limits(9, -1.0, 1.0);
        assert_eq!(a.limits(1), Some((-0.5, 0.5)));
        assert_eq!(a.limits(0), None);
        assert_eq!(a.limits(9), None);
    }

    #[test]
    fn test_limit_modes() {
        let make = || arm(SimEnvironment::new("empty")).with_limits(0, -1.0, 1.0);

        let mut a = make();
        apply(&mut a, &[2.0], CheckLimitsMode::NOTHING).unwrap();
        assert_eq!(a.joint_values()[0], 2.0);

        let mut a = make();
        apply(&mut a, &[2.0], CheckLimitsMode::CHECK_LIMITS).unwrap();
        assert_eq!(a.joint_values()[0], 1.0);

        let mut a = make();
        apply(&mut a, &[-2.0], CheckLimitsMode::CHECK_LIMITS_SILENT).unwrap();
        assert_eq!(a.joint_values()[0], -1.0);

        let mut a = make();
        let err = a
            .set_dof_values(&[0.5, 2.0], CheckLimitsMode::CHECK_LIMITS_THROW, &[1, 0])
            .unwrap_err();
        assert!(matches!(err, RobotError::JointLimit { joint: 0, .. }));
        // 拒绝时不写入任何关节
        assert_eq!(a.joint_values(), &[0.0, 0.0, 0.0]);

        // 未知模式值按直接通过处理
        let mut a = make();
        apply(&mut a, &[2.0], CheckLimitsMode(99)).unwrap();
        assert_eq!(a.joint_values()[0], 2.0);
    }

    #[test]
    fn test_non_finite_fk_fails() {
        let mut arm = arm(SimEnvironment::new("empty"));
        let err = apply(&mut arm, &[f64::INFINITY], CheckLimitsMode::NOTHING).unwrap_err();
        assert!(matches!(err, RobotError::Kinematics(_)));
    }

    #[test]
    fn test_environment_collision() {
        let mut arm = arm(SimEnvironment::new("wall").with_circle(2.0, 0.0, 0.2));
        apply(&mut arm, &[0.0, 0.0, 0.0], CheckLimitsMode::NOTHING).unwrap();
        assert_eq!(arm.check_collision(), Ok(true));

        apply(&mut arm, &[FRAC_PI_2, 0.0, 0.0], CheckLimitsMode::NOTHING).unwrap();
        assert_eq!(arm.check_collision(), Ok(false));
        assert_eq!(arm.environment().name(), "wall");
    }

    #[test]
    fn test_self_collision() {
        let mut arm = PlanarArm::new(Arc::new(SimEnvironment::default()), vec![2.0, 1.0, 2.0]);

        // 第三节折回并穿过第一节
        apply(&mut arm, &[0.0, FRAC_PI_2, FRAC_PI_2 + 0.8], CheckLimitsMode::NOTHING).unwrap();
        assert_eq!(arm.check_self_collision(), Ok(true));

        apply(&mut arm, &[0.0, 0.3, 0.3], CheckLimitsMode::NOTHING).unwrap();
        assert_eq!(arm.check_self_collision(), Ok(false));

        // 相邻连杆完全折叠不算自碰撞
        let mut two = PlanarArm::new(Arc::new(SimEnvironment::default()), vec![1.0, 1.0]);
        apply(&mut two, &[0.0, PI], CheckLimitsMode::NOTHING).unwrap();
        assert_eq!(two.check_self_collision(), Ok(false));
    }
}
