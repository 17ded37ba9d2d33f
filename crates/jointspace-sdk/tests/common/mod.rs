//! 测试公共设施：手写机器人模型 mock 与常用构型空间

#![allow(dead_code)]

use jointspace_sdk::prelude::*;
use std::sync::Arc;

/// 坐标 0 超过阈值即判定碰撞的机器人模型
#[derive(Debug, Default)]
pub struct MockRobot {
    pub threshold: f64,
    pub values: Vec<f64>,
    pub indices: Vec<DofIndex>,
    pub modes: Vec<CheckLimitsMode>,
    pub fk_calls: usize,
}

impl MockRobot {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }
}

impl RobotModel for MockRobot {
    type Environment = ();

    fn environment(&self) -> &() {
        &()
    }

    fn set_dof_values(
        &mut self,
        values: &[f64],
        mode: CheckLimitsMode,
        indices: &[DofIndex],
    ) -> Result<(), RobotError> {
        self.values = values.to_vec();
        self.indices = indices.to_vec();
        self.modes.push(mode);
        Ok(())
    }

    fn compute_forward_kinematics(&mut self) -> Result<(), RobotError> {
        self.fk_calls += 1;
        Ok(())
    }

    fn check_collision(&self) -> Result<bool, RobotError> {
        Ok(self.values[0] > self.threshold)
    }
}

/// 两个有界关节：`[0, 1]` 与 `[-1, 1]`
pub fn two_bounded_space() -> Arc<ConfigurationSpace> {
    let mut space = ConfigurationSpace::new(vec![0, 1], vec![false, false]).unwrap();
    space
        .set_bounds(JointBounds::from_pairs(&[(0.0, 1.0), (-1.0, 1.0)]))
        .unwrap();
    space.setup().unwrap();
    Arc::new(space)
}

/// 有界 + 周期混合空间
pub fn mixed_space() -> ConfigurationSpace {
    let mut space =
        ConfigurationSpace::new(vec![0, 1, 2, 3], vec![false, true, false, true]).unwrap();
    space
        .set_bounds(JointBounds::from_pairs(&[
            (-2.0, 2.0),
            (0.0, 0.0),
            (0.0, 5.0),
            (0.0, 0.0),
        ]))
        .unwrap();
    space.setup().unwrap();
    space
}
