//! 有界坐标的上下限
//!
//! 每个坐标一对 `(lower, upper)`。周期坐标的上下限会被忽略，
//! 它们使用周期环绕语义。

use crate::error::SpaceError;
use crate::joint::JointTopology;

/// 坐标上下限
///
/// 与构型空间的坐标一一对应。设置到空间后不可修改。
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointBounds {
    /// 下限
    pub low: Vec<f64>,
    /// 上限
    pub high: Vec<f64>,
}

impl JointBounds {
    /// 创建 `dim` 维上下限，全部初始化为 0
    pub fn new(dim: usize) -> Self {
        Self {
            low: vec![0.0; dim],
            high: vec![0.0; dim],
        }
    }

    /// 从 `(lower, upper)` 对创建
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            low: pairs.iter().map(|&(l, _)| l).collect(),
            high: pairs.iter().map(|&(_, h)| h).collect(),
        }
    }

    /// 设置坐标 `coordinate` 的上下限
    ///
    /// # Panics
    ///
    /// `coordinate >= self.dim()` 时 panic。
    pub fn set(&mut self, coordinate: usize, lower: f64, upper: f64) {
        self.low[coordinate] = lower;
        self.high[coordinate] = upper;
    }

    /// 所有坐标使用相同上下限
    pub fn set_all(&mut self, lower: f64, upper: f64) {
        self.low.iter_mut().for_each(|l| *l = lower);
        self.high.iter_mut().for_each(|h| *h = upper);
    }

    /// 维度
    #[inline]
    pub fn dim(&self) -> usize {
        self.low.len()
    }

    /// 坐标区间宽度
    ///
    /// # Panics
    ///
    /// `coordinate >= self.dim()` 时 panic。
    #[inline]
    pub fn extent(&self, coordinate: usize) -> f64 {
        self.high[coordinate] - self.low[coordinate]
    }

    /// 按拓扑校验
    ///
    /// 只检查有界坐标：必须是有限值且 `lower <= upper`，
    /// 区间宽度 `upper - lower` 也必须是有限值。
    pub fn check(&self, topology: &[JointTopology]) -> Result<(), SpaceError> {
        if self.low.len() != self.high.len() {
            return Err(SpaceError::BoundsDimension {
                expected: self.low.len(),
                actual: self.high.len(),
            });
        }
        if self.low.len() != topology.len() {
            return Err(SpaceError::BoundsDimension {
                expected: topology.len(),
                actual: self.low.len(),
            });
        }

        for (coordinate, t) in topology.iter().enumerate() {
            if t.is_periodic() {
                continue;
            }
            let (lower, upper) = (self.low[coordinate], self.high[coordinate]);
            if !lower.is_finite()
                || !upper.is_finite()
                || lower > upper
                || !(upper - lower).is_finite()
            {
                return Err(SpaceError::InvalidBounds {
                    coordinate,
                    lower,
                    upper,
                });
            }
        }
        Ok(())
    }
}
