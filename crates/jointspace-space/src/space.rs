//! 构型空间
//!
//! N 个标量关节坐标组成的复合空间。每个坐标带一个拓扑标记：
//!
//! - **有界坐标**：线性距离、线性插值、在 `[lower, upper]` 内均匀采样
//! - **周期坐标**：最短弧距离、沿最短弧插值、在一个完整周期 `[-π, π)` 内均匀采样
//!
//! # 生命周期
//!
//! ```text
//! new(indices, periodic)  →  set_bounds(bounds)  →  setup()
//!      构造期校验               上下限（只能设置一次）    注册默认投影（幂等）
//! ```
//!
//! # 示例
//!
//! ```rust
//! use jointspace_space::{ConfigurationSpace, JointState};
//! use jointspace_types::JointBounds;
//!
//! let mut space = ConfigurationSpace::new(vec![0, 1], vec![false, true]).unwrap();
//! space.set_bounds(JointBounds::from_pairs(&[(0.0, 1.0), (0.0, 0.0)])).unwrap();
//! space.setup().unwrap();
//!
//! let a = JointState::from([0.2, 3.0]);
//! let b = JointState::from([0.2, -3.0]);
//! // 周期坐标走最短弧：3.0 → -3.0 只差 2π - 6
//! assert!((space.distance(&a, &b) - (std::f64::consts::TAU - 6.0)).abs() < 1e-12);
//! ```

use crate::projection::{
    DEFAULT_CELL_SPLITS, DEFAULT_PROJECTION_SEED, ProjectionEvaluator, ProjectionParams,
};
use crate::sampler::StateSampler;
use crate::state::JointState;
use jointspace_types::{
    DofIndex, JointBounds, JointIndexSet, JointTopology, PERIOD, SpaceError, angle_diff,
    angle_distance, wrap_angle,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// 距离度量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// 各坐标差值（周期坐标取最短弧）的欧氏范数
    #[default]
    Euclidean,
    /// 各坐标距离之和（复合空间的逐关节求和约定）
    Manhattan,
}

/// 机器人关节构型空间
#[derive(Debug, Clone)]
pub struct ConfigurationSpace {
    joints: JointIndexSet,
    bounds: Option<JointBounds>,
    metric: DistanceMetric,
    projection_seed: u64,
    cell_splits: u32,
    /// 已注册的默认投影
    default_projection: Option<ProjectionParams>,
}

impl ConfigurationSpace {
    /// 从关节索引和周期标志创建
    ///
    /// # 错误
    ///
    /// 两个序列长度不一致（或为空、有重复关节）时立即失败，不会截断。
    pub fn new(indices: Vec<DofIndex>, is_periodic: Vec<bool>) -> Result<Self, SpaceError> {
        Ok(Self::from_joints(JointIndexSet::new(indices, is_periodic)?))
    }

    /// 从已校验的关节索引集合创建
    pub fn from_joints(joints: JointIndexSet) -> Self {
        Self {
            joints,
            bounds: None,
            metric: DistanceMetric::default(),
            projection_seed: DEFAULT_PROJECTION_SEED,
            cell_splits: DEFAULT_CELL_SPLITS,
            default_projection: None,
        }
    }

    /// 设置距离度量
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// 设置默认投影的随机种子
    ///
    /// # 注意
    ///
    /// 在 `setup()` 之后修改会丢弃已注册的默认投影，需要重新 `setup()`。
    pub fn with_projection_seed(mut self, seed: u64) -> Self {
        if seed != self.projection_seed {
            self.projection_seed = seed;
            self.invalidate_projection();
        }
        self
    }

    /// 设置默认投影每个维度的网格划分数
    ///
    /// # 注意
    ///
    /// 同 [`with_projection_seed`](Self::with_projection_seed)：setup 之后修改需要重新 `setup()`。
    pub fn with_cell_splits(mut self, cell_splits: u32) -> Self {
        let cell_splits = cell_splits.max(1);
        if cell_splits != self.cell_splits {
            self.cell_splits = cell_splits;
            self.invalidate_projection();
        }
        self
    }

    /// 投影参数变化后丢弃已注册的投影，避免与当前配置不一致
    fn invalidate_projection(&mut self) {
        if self.default_projection.take().is_some() {
            debug!("projection settings changed, default projection dropped");
        }
    }

    // ---------------------------------------------------------------- 结构

    /// 坐标数量
    #[inline]
    pub fn dimension(&self) -> usize {
        self.joints.len()
    }

    /// 有序关节索引（坐标 i 对应关节 `indices()[i]`）
    #[inline]
    pub fn indices(&self) -> &[DofIndex] {
        self.joints.indices()
    }

    /// 关节索引集合
    #[inline]
    pub fn joints(&self) -> &JointIndexSet {
        &self.joints
    }

    /// 坐标拓扑
    #[inline]
    pub fn topology(&self, coordinate: usize) -> JointTopology {
        self.joints.topology(coordinate)
    }

    /// 是否不含周期坐标
    #[inline]
    pub fn is_linear(&self) -> bool {
        self.joints.is_linear()
    }

    /// 距离度量
    #[inline]
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// 默认投影的网格划分数
    #[inline]
    pub fn cell_splits(&self) -> u32 {
        self.cell_splits
    }

    // ---------------------------------------------------------------- 上下限

    /// 设置有界坐标的上下限
    ///
    /// 周期坐标对应的条目被忽略。上下限设置后在空间生命周期内不可变。
    ///
    /// # 错误
    ///
    /// - `BoundsAlreadySet`: 已经设置过
    /// - `BoundsDimension` / `InvalidBounds`: 校验失败
    pub fn set_bounds(&mut self, bounds: JointBounds) -> Result<(), SpaceError> {
        if self.bounds.is_some() {
            return Err(SpaceError::BoundsAlreadySet);
        }
        bounds.check(self.joints.topologies())?;
        self.bounds = Some(bounds);
        Ok(())
    }

    /// 上下限（未设置时为 None）
    pub fn bounds(&self) -> Option<&JointBounds> {
        self.bounds.as_ref()
    }

    /// 坐标取值范围
    ///
    /// 周期坐标为 `(-π, π)`；有界坐标为其上下限，未设置时为 None。
    pub fn coordinate_range(&self, coordinate: usize) -> Option<(f64, f64)> {
        match self.topology(coordinate) {
            JointTopology::Periodic => Some((-PI, PI)),
            JointTopology::Bounded => self
                .bounds
                .as_ref()
                .map(|b| (b.low[coordinate], b.high[coordinate])),
        }
    }

    /// 坐标区间宽度（周期坐标为一个周期）
    pub fn coordinate_extent(&self, coordinate: usize) -> Option<f64> {
        match self.topology(coordinate) {
            JointTopology::Periodic => Some(PERIOD),
            JointTopology::Bounded => self.bounds.as_ref().map(|b| b.extent(coordinate)),
        }
    }

    /// 空间中两点间的最大可能距离
    ///
    /// 周期坐标的最大最短弧为 π。有界坐标未设置上下限时为 None。
    pub fn maximum_extent(&self) -> Option<f64> {
        let per_coordinate = (0..self.dimension()).map(|c| match self.topology(c) {
            JointTopology::Periodic => Some(PI),
            JointTopology::Bounded => self.coordinate_extent(c),
        });

        match self.metric {
            DistanceMetric::Euclidean => per_coordinate
                .map(|e| e.map(|e| e * e))
                .sum::<Option<f64>>()
                .map(f64::sqrt),
            DistanceMetric::Manhattan => per_coordinate.sum(),
        }
    }

    // ---------------------------------------------------------------- setup

    /// 完成空间配置
    ///
    /// 校验所有有界坐标都有上下限，并注册默认投影。可重复调用。
    pub fn setup(&mut self) -> Result<(), SpaceError> {
        if let Some(coordinate) = (0..self.dimension()).find(|&c| self.coordinate_range(c).is_none())
        {
            return Err(SpaceError::BoundsNotSet { coordinate });
        }
        self.register_projections()
    }

    /// 是否已完成 setup（默认投影已注册）
    pub fn is_setup(&self) -> bool {
        self.default_projection.is_some()
    }

    /// 注册默认投影
    ///
    /// 幂等：重复调用不会重复注册，也不会改变已注册的投影矩阵。
    pub fn register_projections(&mut self) -> Result<(), SpaceError> {
        if self.default_projection.is_some() {
            debug!("default projection already registered, skipping");
            return Ok(());
        }

        let params = ProjectionParams::compute(self, self.projection_seed, self.cell_splits)?;
        debug!(
            dimension = self.dimension(),
            projection_dimension = params.matrix.rows(),
            "registered default projection"
        );
        self.default_projection = Some(params);
        Ok(())
    }

    /// 已注册的默认投影评估器
    pub fn default_projection(&self) -> Option<ProjectionEvaluator<'_>> {
        self.default_projection
            .as_ref()
            .map(|params| ProjectionEvaluator::borrowed(self, params))
    }

    // ---------------------------------------------------------------- 状态

    /// 分配一个全零状态
    pub fn alloc_state(&self) -> JointState {
        JointState::zeros(self.dimension())
    }

    /// 复制状态
    pub fn copy_state(&self, destination: &mut JointState, source: &JointState) {
        debug_assert_eq!(source.len(), self.dimension());
        destination.clone_from(source);
    }

    /// 校验状态维度
    pub fn check_state(&self, state: &JointState) -> Result<(), SpaceError> {
        if state.len() != self.dimension() {
            return Err(SpaceError::DimensionMismatch {
                expected: self.dimension(),
                actual: state.len(),
            });
        }
        Ok(())
    }

    /// 导出为实数数组
    pub fn copy_to_reals(&self, state: &JointState) -> Vec<f64> {
        state.as_slice().to_vec()
    }

    /// 从实数数组写入状态
    pub fn copy_from_reals(&self, reals: &[f64], state: &mut JointState) -> Result<(), SpaceError> {
        if reals.len() != self.dimension() {
            return Err(SpaceError::DimensionMismatch {
                expected: self.dimension(),
                actual: reals.len(),
            });
        }
        *state = JointState::from_slice(reals);
        Ok(())
    }

    // ---------------------------------------------------------------- 度量

    /// 单个坐标上的距离
    #[inline]
    pub fn coordinate_distance(&self, coordinate: usize, a: f64, b: f64) -> f64 {
        match self.topology(coordinate) {
            JointTopology::Bounded => (a - b).abs(),
            JointTopology::Periodic => angle_distance(a, b),
        }
    }

    /// 两个状态之间的距离
    ///
    /// 对称，且 `distance(s, s) == 0`。周期坐标上 `v` 与 `v + 2π` 距离为 0。
    pub fn distance(&self, a: &JointState, b: &JointState) -> f64 {
        debug_assert_eq!(a.len(), self.dimension());
        debug_assert_eq!(b.len(), self.dimension());

        let per_coordinate =
            (0..self.dimension()).map(|c| self.coordinate_distance(c, a[c], b[c]));
        match self.metric {
            DistanceMetric::Euclidean => per_coordinate.map(|d| d * d).sum::<f64>().sqrt(),
            DistanceMetric::Manhattan => per_coordinate.sum(),
        }
    }

    /// 两个状态是否相同（周期坐标按环绕比较）
    pub fn equal_states(&self, a: &JointState, b: &JointState) -> bool {
        a.len() == self.dimension()
            && b.len() == self.dimension()
            && (0..a.len()).all(|c| self.coordinate_distance(c, a[c], b[c]) <= 2.0 * f64::EPSILON)
    }

    /// 在 `from` 与 `to` 之间插值，`t ∈ [0, 1]`
    ///
    /// 有界坐标线性插值，周期坐标沿最短弧插值并归一化到 `[-π, π)`。
    /// `t <= 0` 精确返回 `from`，`t >= 1` 精确返回 `to`。
    pub fn interpolate(&self, from: &JointState, to: &JointState, t: f64, out: &mut JointState) {
        debug_assert_eq!(from.len(), self.dimension());
        debug_assert_eq!(to.len(), self.dimension());

        if t <= 0.0 {
            out.clone_from(from);
            return;
        }
        if t >= 1.0 {
            out.clone_from(to);
            return;
        }

        if out.len() != self.dimension() {
            *out = self.alloc_state();
        }
        for c in 0..self.dimension() {
            let (a, b) = (from[c], to[c]);
            out[c] = match self.topology(c) {
                JointTopology::Bounded => a + (b - a) * t,
                JointTopology::Periodic => wrap_angle(a + angle_diff(a, b) * t),
            };
        }
    }

    /// 状态是否满足上下限
    ///
    /// 非有限值总是不满足；周期坐标要求在 `[-π, π]` 内；
    /// 有界坐标在上下限已设置时检查区间。
    pub fn satisfies_bounds(&self, state: &JointState) -> bool {
        if state.len() != self.dimension() {
            return false;
        }
        (0..self.dimension()).all(|c| {
            let v = state[c];
            if !v.is_finite() {
                return false;
            }
            match self.coordinate_range(c) {
                Some((lower, upper)) => v >= lower && v <= upper,
                None => true,
            }
        })
    }

    /// 把状态拉回合法范围：有界坐标钳位，周期坐标归一化
    pub fn enforce_bounds(&self, state: &mut JointState) {
        for c in 0..self.dimension().min(state.len()) {
            state[c] = match self.topology(c) {
                JointTopology::Periodic => wrap_angle(state[c]),
                JointTopology::Bounded => match self.coordinate_range(c) {
                    Some((lower, upper)) => state[c].clamp(lower, upper),
                    None => state[c],
                },
            };
        }
    }

    // ---------------------------------------------------------------- 采样

    /// 创建状态采样器
    ///
    /// # 错误
    ///
    /// 有界坐标尚未设置上下限时返回 `BoundsNotSet`。
    pub fn sampler<R: Rng>(&self, rng: R) -> Result<StateSampler<'_, R>, SpaceError> {
        StateSampler::new(self, rng)
    }
}
