//! 构型（状态）
//!
//! 每个参与关节一个标量，顺序与关节索引集合一致。

use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// 状态缓冲区类型
///
/// 栈上预留 8 个坐标，覆盖常见的 6/7 轴机械臂（外加一个底座/导轨关节），
/// 采样和插值时不会触发堆分配。
pub type StateBuffer = SmallVec<[f64; 8]>;

/// 构型（状态）
///
/// 周期坐标的值隐含对周期取模。由构型空间按需分配，
/// 规划器或采样/插值例程写入，验证器读取。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JointState {
    values: StateBuffer,
}

impl JointState {
    /// 创建 `dim` 维全零状态
    #[inline]
    pub fn zeros(dim: usize) -> Self {
        Self {
            values: SmallVec::from_elem(0.0, dim),
        }
    }

    /// 从切片创建
    #[inline]
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            values: SmallVec::from_slice(values),
        }
    }

    /// 坐标数量
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 是否没有坐标
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 扁平数值缓冲区（只读）
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// 扁平数值缓冲区（可写）
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// 迭代器
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// 是否包含 NaN 坐标
    pub fn has_nan(&self) -> bool {
        self.values.iter().any(|v| v.is_nan())
    }
}

impl Index<usize> for JointState {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl IndexMut<usize> for JointState {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.values[index]
    }
}

impl From<Vec<f64>> for JointState {
    fn from(values: Vec<f64>) -> Self {
        Self {
            values: SmallVec::from_vec(values),
        }
    }
}

impl<const N: usize> From<[f64; N]> for JointState {
    fn from(values: [f64; N]) -> Self {
        Self::from_slice(&values)
    }
}

impl From<&[f64]> for JointState {
    fn from(values: &[f64]) -> Self {
        Self::from_slice(values)
    }
}
