//! 投影评估器
//!
//! 把完整构型线性映射到低维投影空间，供规划器做基于网格（cell）的
//! 空间索引和启发式。
//!
//! # 算法
//!
//! - 坐标数 N ≤ 2：单位矩阵（不降维）
//! - 否则：`max(2, ceil(ln N))` 行的随机高斯矩阵，行向量做 Gram-Schmidt 正交归一化
//!
//! 矩阵只在 setup 时计算一次（种子固定，结果可复现），之后每次 `project`
//! 都是纯线性变换：不分配内存、无副作用、不访问机器人模型。
//!
//! # 生命周期约定
//!
//! [`ProjectionEvaluator`] 借用构型空间，空间必须比评估器活得更久。
//! 不再区分"裸指针"与"共享指针"两种构造方式。
//!
//! # 示例
//!
//! ```rust
//! use jointspace_space::{ConfigurationSpace, JointState, ProjectionEvaluator};
//! use jointspace_types::JointBounds;
//!
//! let mut space = ConfigurationSpace::new(vec![0, 1, 2, 3], vec![false, true, false, false]).unwrap();
//! space.set_bounds(JointBounds::from_pairs(&[(-1.0, 1.0), (0.0, 0.0), (0.0, 2.0), (-3.0, 3.0)])).unwrap();
//!
//! let evaluator = ProjectionEvaluator::new(&space, 7).unwrap();
//! assert_eq!(evaluator.dimension(), 2);
//!
//! let mut projection = [0.0; 2];
//! evaluator.project(&JointState::from([0.1, 0.2, 0.3, 0.4]), &mut projection);
//! ```

use crate::space::ConfigurationSpace;
use crate::state::JointState;
use jointspace_types::SpaceError;
use nalgebra::{DMatrix, DVector, RowDVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::borrow::Cow;

/// 默认每个投影维度划分的网格数
pub const DEFAULT_CELL_SPLITS: u32 = 20;

/// 默认投影矩阵随机种子
pub const DEFAULT_PROJECTION_SEED: u64 = 0x5EED_0F_5EED;

/// 默认投影维度
///
/// N ≤ 2 时不降维；否则 `max(2, ceil(ln N))`。
pub fn default_projection_dimension(space_dim: usize) -> usize {
    if space_dim <= 2 {
        space_dim
    } else {
        ((space_dim as f64).ln().ceil() as usize).max(2)
    }
}

/// 投影矩阵（行数 = 投影维度，列数 = 坐标数）
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionMatrix {
    mat: DMatrix<f64>,
}

impl ProjectionMatrix {
    /// 单位矩阵
    pub fn identity(dim: usize) -> Self {
        Self {
            mat: DMatrix::identity(dim, dim),
        }
    }

    /// 使用给定矩阵
    pub fn from_matrix(mat: DMatrix<f64>) -> Self {
        Self { mat }
    }

    /// 随机正交投影：`to` 行、`from` 列，行向量两两正交且单位长度
    ///
    /// # Panics
    ///
    /// `to == 0` 或 `to > from` 时 panic。
    pub fn compute_random<R: Rng>(from: usize, to: usize, rng: &mut R) -> Self {
        assert!(
            to > 0 && to <= from,
            "projection dimension must be in 1..={}, got: {}",
            from,
            to
        );

        let mut rows: Vec<DVector<f64>> = Vec::with_capacity(to);
        while rows.len() < to {
            let mut v = DVector::from_fn(from, |_, _| rng.sample::<f64, _>(StandardNormal));
            // Gram-Schmidt
            for u in &rows {
                let d = u.dot(&v);
                v -= u * d;
            }
            let norm = v.norm();
            // 与已有行几乎线性相关时重新采样
            if norm > 1e-6 {
                rows.push(v / norm);
            }
        }

        let rows: Vec<RowDVector<f64>> = rows.iter().map(|r| r.transpose()).collect();
        Self {
            mat: DMatrix::from_rows(&rows),
        }
    }

    /// 投影维度
    #[inline]
    pub fn rows(&self) -> usize {
        self.mat.nrows()
    }

    /// 输入坐标数
    #[inline]
    pub fn cols(&self) -> usize {
        self.mat.ncols()
    }

    /// 底层矩阵
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.mat
    }

    /// `to = M * from`
    #[inline]
    pub fn project(&self, from: &[f64], to: &mut [f64]) {
        debug_assert_eq!(from.len(), self.cols());
        debug_assert_eq!(to.len(), self.rows());
        for (i, out) in to.iter_mut().enumerate() {
            *out = self
                .mat
                .row(i)
                .iter()
                .zip(from)
                .map(|(m, v)| m * v)
                .sum();
        }
    }
}

/// 投影参数：矩阵 + 默认网格尺寸
///
/// setup 后固定，与任何单次查询的取值无关。
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionParams {
    /// 投影矩阵
    pub matrix: ProjectionMatrix,
    /// 每个投影维度的网格尺寸
    pub cell_sizes: Vec<f64>,
}

impl ProjectionParams {
    /// 根据空间结构计算投影参数
    ///
    /// 网格尺寸 = 该投影维度上的投影范围 / `cell_splits`，
    /// 投影范围由每个坐标的区间宽度（周期坐标为一个周期）推出，
    /// 区间越宽，默认网格越大。
    ///
    /// # 错误
    ///
    /// 有界坐标尚未设置上下限时返回 `BoundsNotSet`。
    pub fn compute(
        space: &ConfigurationSpace,
        seed: u64,
        cell_splits: u32,
    ) -> Result<Self, SpaceError> {
        let n = space.dimension();
        let k = default_projection_dimension(n);

        let extents = (0..n)
            .map(|c| {
                space
                    .coordinate_extent(c)
                    .ok_or(SpaceError::BoundsNotSet { coordinate: c })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let matrix = if k == n {
            ProjectionMatrix::identity(n)
        } else {
            let mut rng = StdRng::seed_from_u64(seed);
            ProjectionMatrix::compute_random(n, k, &mut rng)
        };

        let splits = f64::from(cell_splits.max(1));
        let cell_sizes = (0..k)
            .map(|i| {
                let extent: f64 = (0..n)
                    .map(|j| matrix.as_matrix()[(i, j)].abs() * extents[j])
                    .sum();
                // 退化区间（lower == upper）时使用单位网格
                if extent > 0.0 { extent / splits } else { 1.0 }
            })
            .collect();

        Ok(Self { matrix, cell_sizes })
    }
}

/// 构型空间的投影评估器
///
/// 借用构型空间；空间必须比评估器活得更久。
#[derive(Debug, Clone)]
pub struct ProjectionEvaluator<'a> {
    space: &'a ConfigurationSpace,
    params: Cow<'a, ProjectionParams>,
}

impl<'a> ProjectionEvaluator<'a> {
    /// 为 `space` 计算一个独立的投影
    ///
    /// 不依赖机器人模型或碰撞检测，可在它们就绪之前调用。
    pub fn new(space: &'a ConfigurationSpace, seed: u64) -> Result<Self, SpaceError> {
        let params = ProjectionParams::compute(space, seed, space.cell_splits())?;
        Ok(Self {
            space,
            params: Cow::Owned(params),
        })
    }

    /// 使用空间中已注册的投影参数（不复制）
    pub(crate) fn borrowed(space: &'a ConfigurationSpace, params: &'a ProjectionParams) -> Self {
        Self {
            space,
            params: Cow::Borrowed(params),
        }
    }

    /// 投影维度（≤ 坐标数）
    #[inline]
    pub fn dimension(&self) -> usize {
        self.params.matrix.rows()
    }

    /// 投影：纯线性变换，无副作用
    #[inline]
    pub fn project(&self, state: &JointState, projection: &mut [f64]) {
        self.params.matrix.project(state.as_slice(), projection);
    }

    /// 投影并返回新向量
    pub fn project_to_vec(&self, state: &JointState) -> Vec<f64> {
        let mut projection = vec![0.0; self.dimension()];
        self.project(state, &mut projection);
        projection
    }

    /// 默认网格尺寸
    pub fn cell_sizes(&self) -> &[f64] {
        &self.params.cell_sizes
    }

    /// 投影值所在的网格坐标
    pub fn cell_of(&self, projection: &[f64]) -> Vec<i64> {
        projection
            .iter()
            .zip(&self.params.cell_sizes)
            .map(|(p, size)| (p / size).floor() as i64)
            .collect()
    }

    /// 投影矩阵
    pub fn matrix(&self) -> &ProjectionMatrix {
        &self.params.matrix
    }

    /// 被投影的构型空间
    pub fn space(&self) -> &'a ConfigurationSpace {
        self.space
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use jointspace_types::{JointBounds, PERIOD};

    fn space(n: usize, periodic: &[usize]) -> ConfigurationSpace {
        let flags = (0..n).map(|i| periodic.contains(&i)).collect();
        let mut space = ConfigurationSpace::new((0..n).collect(), flags).unwrap();
        let mut bounds = JointBounds::new(n);
        bounds.set_all(-1.0, 1.0);
        space.set_bounds(bounds).unwrap();
        space
    }

    #[test]
    fn test_default_projection_dimension() {
        assert_eq!(default_projection_dimension(1), 1);
        assert_eq!(default_projection_dimension(2), 2);
        assert_eq!(default_projection_dimension(3), 2);
        assert_eq!(default_projection_dimension(7), 2);
        assert_eq!(default_projection_dimension(8), 3);
        assert_eq!(default_projection_dimension(30), 4);
    }

    #[test]
    fn test_random_matrix_rows_orthonormal() {
        let mut rng = StdRng::seed_from_u64(1);
        let m = ProjectionMatrix::compute_random(6, 3, &mut rng);
        let mat = m.as_matrix();
        for i in 0..3 {
            for j in 0..3 {
                let d = mat.row(i).dot(&mat.row(j));
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(d, expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_same_seed_same_matrix() {
        let s = space(6, &[]);
        let a = ProjectionEvaluator::new(&s, 11).unwrap();
        let b = ProjectionEvaluator::new(&s, 11).unwrap();
        assert_eq!(a.matrix(), b.matrix());
    }

    #[test]
    fn test_identity_for_small_space() {
        let s = space(2, &[1]);
        let e = ProjectionEvaluator::new(&s, 0).unwrap();
        assert_eq!(e.dimension(), 2);
        assert_eq!(e.project_to_vec(&JointState::from([0.3, -0.4])), vec![0.3, -0.4]);
    }

    #[test]
    fn test_project_is_linear() {
        let s = space(5, &[2]);
        let e = ProjectionEvaluator::new(&s, 3).unwrap();
        let a = JointState::from([0.1, 0.2, 0.3, 0.4, 0.5]);
        let b = JointState::from([-0.5, 0.0, 0.25, 0.1, 0.9]);
        let sum = JointState::from([-0.4, 0.2, 0.55, 0.5, 1.4]);

        let pa = e.project_to_vec(&a);
        let pb = e.project_to_vec(&b);
        let psum = e.project_to_vec(&sum);
        for i in 0..e.dimension() {
            assert_relative_eq!(psum[i], pa[i] + pb[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cell_sizes_scale_with_range() {
        let mut narrow = ConfigurationSpace::new(vec![0, 1], vec![false, false]).unwrap();
        narrow
            .set_bounds(JointBounds::from_pairs(&[(0.0, 1.0), (0.0, 1.0)]))
            .unwrap();
        let mut wide = ConfigurationSpace::new(vec![0, 1], vec![false, false]).unwrap();
        wide.set_bounds(JointBounds::from_pairs(&[(0.0, 10.0), (0.0, 1.0)]))
            .unwrap();

        let n = ProjectionEvaluator::new(&narrow, 0).unwrap();
        let w = ProjectionEvaluator::new(&wide, 0).unwrap();
        assert_relative_eq!(n.cell_sizes()[0], 1.0 / 20.0);
        assert_relative_eq!(w.cell_sizes()[0], 10.0 / 20.0);
        assert_relative_eq!(w.cell_sizes()[1], 1.0 / 20.0);
    }

    #[test]
    fn test_periodic_cell_size_uses_period() {
        let s = space(1, &[0]);
        let e = ProjectionEvaluator::new(&s, 0).unwrap();
        assert_relative_eq!(e.cell_sizes()[0], PERIOD / 20.0);
    }

    #[test]
    fn test_missing_bounds_rejected() {
        let s = ConfigurationSpace::new(vec![0, 1], vec![false, true]).unwrap();
        assert_eq!(
            ProjectionEvaluator::new(&s, 0).unwrap_err(),
            SpaceError::BoundsNotSet { coordinate: 0 }
        );
    }

    #[test]
    fn test_cell_of() {
        let s = space(2, &[]);
        let e = ProjectionEvaluator::new(&s, 0).unwrap();
        // 区间宽度 2.0 → 网格 0.1
        assert_eq!(e.cell_of(&[0.25, -0.05]), vec![2, -1]);
    }
}
