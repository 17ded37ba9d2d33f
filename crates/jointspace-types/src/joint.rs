//! 关节索引集合与关节拓扑
//!
//! 构型空间由一组有序的机器人关节索引（DOF index）构成，每个关节附带一个
//! 拓扑标记：有界（线性区间）或周期（环绕角度）。
//!
//! # 示例
//!
//! ```rust
//! use jointspace_types::{JointIndexSet, JointTopology};
//!
//! let set = JointIndexSet::new(vec![0, 1, 3], vec![false, true, false]).unwrap();
//! assert_eq!(set.indices(), &[0, 1, 3]);
//! assert_eq!(set.topology(1), JointTopology::Periodic);
//! assert!(!set.is_linear());
//!
//! // 长度不一致在构造时直接失败
//! assert!(JointIndexSet::new(vec![0, 1, 2], vec![false, false]).is_err());
//! ```

use crate::error::SpaceError;
use std::collections::HashSet;
use std::fmt;

/// 机器人模型中的关节（自由度）索引
pub type DofIndex = usize;

/// 关节拓扑
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JointTopology {
    /// 有界关节：有限的线性区间 `[lower, upper]`
    #[default]
    Bounded,
    /// 周期关节：取值在 `[-π, π)` 上环绕（无限位旋转关节）
    Periodic,
}

impl JointTopology {
    /// 从周期标志创建
    #[inline]
    pub const fn from_periodic(is_periodic: bool) -> Self {
        if is_periodic {
            JointTopology::Periodic
        } else {
            JointTopology::Bounded
        }
    }

    /// 是否为周期关节
    #[inline]
    pub const fn is_periodic(self) -> bool {
        matches!(self, JointTopology::Periodic)
    }
}

impl fmt::Display for JointTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JointTopology::Bounded => write!(f, "bounded"),
            JointTopology::Periodic => write!(f, "periodic"),
        }
    }
}

/// 有序关节索引集合
///
/// 不变量：
/// - 索引与拓扑一一对应（长度相等）
/// - 顺序在整个生命周期内固定
/// - 同一个关节不会出现两次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JointIndexSet {
    indices: Vec<DofIndex>,
    topology: Vec<JointTopology>,
}

impl JointIndexSet {
    /// 从关节索引和周期标志创建
    ///
    /// # 错误
    ///
    /// - `LengthMismatch`: 两个序列长度不同（不会截断）
    /// - `EmptySpace`: 没有任何关节
    /// - `DuplicateIndex`: 同一关节出现多次
    pub fn new(indices: Vec<DofIndex>, is_periodic: Vec<bool>) -> Result<Self, SpaceError> {
        if indices.len() != is_periodic.len() {
            return Err(SpaceError::LengthMismatch {
                indices: indices.len(),
                periodic: is_periodic.len(),
            });
        }
        if indices.is_empty() {
            return Err(SpaceError::EmptySpace);
        }

        let mut seen = HashSet::with_capacity(indices.len());
        for &index in &indices {
            if !seen.insert(index) {
                return Err(SpaceError::DuplicateIndex(index));
            }
        }

        Ok(Self {
            indices,
            topology: is_periodic
                .into_iter()
                .map(JointTopology::from_periodic)
                .collect(),
        })
    }

    /// 所有关节均为有界关节的集合
    pub fn bounded(indices: Vec<DofIndex>) -> Result<Self, SpaceError> {
        let flags = vec![false; indices.len()];
        Self::new(indices, flags)
    }

    /// 有序关节索引
    #[inline]
    pub fn indices(&self) -> &[DofIndex] {
        &self.indices
    }

    /// 每个坐标的拓扑
    #[inline]
    pub fn topologies(&self) -> &[JointTopology] {
        &self.topology
    }

    /// 坐标 `coordinate` 的拓扑
    ///
    /// # Panics
    ///
    /// 坐标越界时 panic（与切片索引一致）。
    #[inline]
    pub fn topology(&self, coordinate: usize) -> JointTopology {
        self.topology[coordinate]
    }

    /// 坐标数量
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// 始终为 false（构造时已拒绝空集合）
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// 是否不含任何周期关节
    pub fn is_linear(&self) -> bool {
        self.topology.iter().all(|t| !t.is_periodic())
    }

    /// 第一个周期关节：`(坐标, 关节索引)`
    pub fn first_periodic(&self) -> Option<(usize, DofIndex)> {
        self.topology
            .iter()
            .position(|t| t.is_periodic())
            .map(|coordinate| (coordinate, self.indices[coordinate]))
    }

    /// 周期标志（与构造参数相同的形式）
    pub fn periodic_flags(&self) -> Vec<bool> {
        self.topology.iter().map(|t| t.is_periodic()).collect()
    }

    /// 迭代 `(关节索引, 拓扑)`
    pub fn iter(&self) -> impl Iterator<Item = (DofIndex, JointTopology)> + '_ {
        self.indices.iter().copied().zip(self.topology.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let set = JointIndexSet::new(vec![4, 2, 7], vec![false, true, false]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.indices(), &[4, 2, 7]);
        assert_eq!(
            set.topologies(),
            &[
                JointTopology::Bounded,
                JointTopology::Periodic,
                JointTopology::Bounded
            ]
        );
        assert_eq!(set.first_periodic(), Some((1, 2)));
        assert_eq!(set.periodic_flags(), vec![false, true, false]);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = JointIndexSet::new(vec![0, 1, 2], vec![false, false]).unwrap_err();
        assert_eq!(
            err,
            SpaceError::LengthMismatch {
                indices: 3,
                periodic: 2
            }
        );
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            JointIndexSet::new(vec![], vec![]).unwrap_err(),
            SpaceError::EmptySpace
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        assert_eq!(
            JointIndexSet::bounded(vec![1, 3, 1]).unwrap_err(),
            SpaceError::DuplicateIndex(1)
        );
    }

    #[test]
    fn test_is_linear() {
        assert!(JointIndexSet::bounded(vec![0, 1]).unwrap().is_linear());
        let mixed = JointIndexSet::new(vec![0, 1], vec![false, true]).unwrap();
        assert!(!mixed.is_linear());
    }

    #[test]
    fn test_iter_preserves_order() {
        let set = JointIndexSet::new(vec![9, 3], vec![true, false]).unwrap();
        let pairs: Vec<_> = set.iter().collect();
        assert_eq!(
            pairs,
            vec![(9, JointTopology::Periodic), (3, JointTopology::Bounded)]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_topology_serde_roundtrip() {
        let json = serde_json::to_string(&JointTopology::Periodic).unwrap();
        let back: JointTopology = serde_json::from_str(&json).unwrap();
        assert_eq!(back, JointTopology::Periodic);
    }
}
