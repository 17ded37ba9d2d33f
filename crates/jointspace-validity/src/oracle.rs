//! 验证器
//!
//! 给定构型，先把关节值写入机器人模型并重算正运动学，再查询碰撞。
//!
//! # 两条路径
//!
//! - **通用路径**：周期坐标先归一化到 `[-π, π)`，写入内部复用的缓冲区后再交给模型
//! - **线性快速路径**：空间没有周期坐标时，直接把状态的扁平缓冲区交给模型
//!
//! 两条路径对外行为一致，由同一个 [`ValidityOracle`] 类型承载。
//!
//! # 副作用
//!
//! `compute_fk` / `is_valid` 会修改机器人模型的关节状态和运动学缓存，
//! 因此都需要 `&mut self`。多个规划线程必须各自持有独立的模型实例。
//!
//! # 示例
//!
//! ```rust,ignore
//! let mut oracle = ValidityOracle::new_linear(space.clone(), robot, space.indices().to_vec())?;
//! if oracle.is_valid(&state) {
//!     // ...
//! }
//! println!("{} checks", oracle.num_collision_checks());
//! ```

use crate::error::{OracleError, RobotError};
use crate::robot::RobotModel;
use crate::statistics::{QueryCounters, QueryStatistics};
use jointspace_space::{ConfigurationSpace, JointState, OracleConfig};
use jointspace_types::{CheckLimitsMode, DofIndex, JointTopology, wrap_angle};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// 构型合法性验证器
pub struct ValidityOracle<R: RobotModel> {
    space: Arc<ConfigurationSpace>,
    robot: R,
    indices: Vec<DofIndex>,
    check_limits: CheckLimitsMode,
    linear: bool,
    /// 通用路径的归一化缓冲区
    scratch: Vec<f64>,
    counters: QueryCounters,
}

impl<R: RobotModel> ValidityOracle<R> {
    /// 创建验证器
    ///
    /// 空间没有周期坐标时自动走线性快速路径。
    ///
    /// # 错误
    ///
    /// `indices` 与构型空间的关节索引不一致时返回 `IndicesMismatch`。
    pub fn new(
        space: Arc<ConfigurationSpace>,
        robot: R,
        indices: Vec<DofIndex>,
    ) -> Result<Self, OracleError> {
        if indices.as_slice() != space.indices() {
            return Err(OracleError::IndicesMismatch {
                expected: space.indices().to_vec(),
                actual: indices,
            });
        }

        Ok(Self::for_space(space, robot))
    }

    /// 创建只接受有界坐标的线性验证器
    ///
    /// # 错误
    ///
    /// - 任一坐标为周期坐标时返回 `PeriodicJointInLinearSpace`
    /// - `indices` 与构型空间不一致时返回 `IndicesMismatch`
    pub fn new_linear(
        space: Arc<ConfigurationSpace>,
        robot: R,
        indices: Vec<DofIndex>,
    ) -> Result<Self, OracleError> {
        if let Some((coordinate, joint)) = space.joints().first_periodic() {
            return Err(OracleError::PeriodicJointInLinearSpace { coordinate, joint });
        }
        Self::new(space, robot, indices)
    }

    /// 使用构型空间自身的关节索引创建
    pub fn for_space(space: Arc<ConfigurationSpace>, robot: R) -> Self {
        let indices = space.indices().to_vec();
        let linear = space.is_linear();
        let dim = space.dimension();
        debug!(dimension = dim, linear, "validity oracle created");
        Self {
            space,
            robot,
            indices,
            check_limits: CheckLimitsMode::NOTHING,
            linear,
            scratch: Vec::with_capacity(dim),
            counters: QueryCounters::default(),
        }
    }

    /// 按配置创建
    pub fn from_config(
        space: Arc<ConfigurationSpace>,
        robot: R,
        config: &OracleConfig,
    ) -> Self {
        Self::for_space(space, robot)
            .with_check_limits(config.check_limits_mode())
            .with_linear_fast_path(config.linear_fast_path)
    }

    /// 设置 `is_valid` 使用的限位检查模式（默认 `NOTHING`）
    pub fn with_check_limits(mut self, mode: CheckLimitsMode) -> Self {
        self.check_limits = mode;
        self
    }

    /// 开关线性快速路径
    ///
    /// 空间含周期坐标时快速路径始终关闭。
    pub fn with_linear_fast_path(mut self, enabled: bool) -> Self {
        self.linear = enabled && self.space.is_linear();
        self
    }

    // ---------------------------------------------------------------- 查询

    /// 写入关节值并重算正运动学
    ///
    /// `mode` 原样转发给机器人模型。以下情况返回 false：
    ///
    /// - 状态维度与关节索引列表不一致
    /// - 状态含 NaN（此时不会写入模型）
    /// - 模型拒绝写入或正运动学失败
    pub fn compute_fk(&mut self, state: &JointState, mode: CheckLimitsMode) -> bool {
        if state.len() != self.indices.len() {
            warn!(
                expected = self.indices.len(),
                actual = state.len(),
                "state dimension does not match joint indices"
            );
            return false;
        }
        if state.has_nan() {
            warn!("state contains NaN coordinates, refusing to set joint values");
            return false;
        }

        let written = if self.linear {
            self.robot
                .set_dof_values(state.as_slice(), mode, &self.indices)
        } else {
            self.scratch.clear();
            self.scratch.extend(
                state
                    .iter()
                    .zip(self.space.joints().topologies())
                    .map(|(&v, topology)| match topology {
                        JointTopology::Periodic => wrap_angle(v),
                        JointTopology::Bounded => v,
                    }),
            );
            self.robot.set_dof_values(&self.scratch, mode, &self.indices)
        };

        if let Err(e) = written.and_then(|()| self.robot.compute_forward_kinematics()) {
            warn!(error = %e, mode = %mode, "failed to apply joint values");
            return false;
        }
        true
    }

    /// 构型是否合法（正运动学成功且无碰撞）
    ///
    /// 每次调用（无论结果）都计入查询次数，耗时覆盖整个查询。
    pub fn is_valid(&mut self, state: &JointState) -> bool {
        let start = Instant::now();
        let valid = self.check(state);
        self.counters.record(start.elapsed(), valid);
        trace!(valid, "validity query");
        valid
    }

    fn check(&mut self, state: &JointState) -> bool {
        if !self.compute_fk(state, self.check_limits) {
            return false;
        }
        match self.in_collision() {
            Ok(colliding) => !colliding,
            Err(e) => {
                warn!(error = %e, "collision check failed, treating state as invalid");
                false
            }
        }
    }

    fn in_collision(&self) -> Result<bool, RobotError> {
        Ok(self.robot.check_collision()? || self.robot.check_self_collision()?)
    }

    // ---------------------------------------------------------------- 统计

    /// 同时清零查询次数和累计耗时
    pub fn reset_statistics(&mut self) {
        self.counters.reset();
    }

    /// 查询次数
    pub fn num_collision_checks(&self) -> u64 {
        self.counters.checks()
    }

    /// 累计耗时（秒）
    pub fn total_collision_time(&self) -> f64 {
        self.counters.elapsed().as_secs_f64()
    }

    /// 累计耗时
    pub fn total_collision_duration(&self) -> Duration {
        self.counters.elapsed()
    }

    /// 统计快照
    pub fn statistics(&self) -> QueryStatistics {
        self.counters.snapshot()
    }

    // ---------------------------------------------------------------- 访问器

    /// 关节索引列表
    pub fn indices(&self) -> &[DofIndex] {
        &self.indices
    }

    /// 构型空间
    pub fn space(&self) -> &Arc<ConfigurationSpace> {
        &self.space
    }

    /// 限位检查模式
    pub fn check_limits(&self) -> CheckLimitsMode {
        self.check_limits
    }

    /// 是否走线性快速路径
    pub fn is_linear(&self) -> bool {
        self.linear
    }

    /// 机器人模型（只读）
    pub fn robot(&self) -> &R {
        &self.robot
    }

    /// 机器人模型（可写）
    pub fn robot_mut(&mut self) -> &mut R {
        &mut self.robot
    }

    /// 机器人所属环境
    pub fn environment(&self) -> &R::Environment {
        self.robot.environment()
    }

    /// 取回机器人模型
    pub fn into_robot(self) -> R {
        self.robot
    }
}

impl<R: RobotModel> std::fmt::Debug for ValidityOracle<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidityOracle")
            .field("indices", &self.indices)
            .field("check_limits", &self.check_limits)
            .field("linear", &self.linear)
            .field("statistics", &self.counters.snapshot())
            .finish_non_exhaustive()
    }
}
