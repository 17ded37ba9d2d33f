//! 状态采样器
//!
//! - 有界坐标：在 `[lower, upper]` 内均匀采样
//! - 周期坐标：在一个完整周期 `[-π, π)` 内均匀采样
//!
//! # 示例
//!
//! ```rust
//! use jointspace_space::ConfigurationSpace;
//! use jointspace_types::JointBounds;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut space = ConfigurationSpace::new(vec![0, 1], vec![false, true]).unwrap();
//! space.set_bounds(JointBounds::from_pairs(&[(0.0, 1.0), (0.0, 0.0)])).unwrap();
//!
//! let mut sampler = space.sampler(StdRng::seed_from_u64(1)).unwrap();
//! let mut state = space.alloc_state();
//! sampler.sample_uniform(&mut state);
//! assert!(space.satisfies_bounds(&state));
//! ```

use crate::space::ConfigurationSpace;
use crate::state::JointState;
use jointspace_types::{JointTopology, SpaceError, wrap_angle};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

/// 单个坐标的采样区间
#[derive(Debug, Clone, Copy)]
struct CoordinateRange {
    lower: f64,
    upper: f64,
    periodic: bool,
}

/// 构型空间采样器
///
/// 借用构型空间，持有自己的随机数生成器。
pub struct StateSampler<'a, R: Rng> {
    space: &'a ConfigurationSpace,
    ranges: Vec<CoordinateRange>,
    rng: R,
}

impl<'a, R: Rng> StateSampler<'a, R> {
    /// 创建采样器
    ///
    /// # 错误
    ///
    /// 有界坐标尚未设置上下限时返回 `BoundsNotSet`。
    pub fn new(space: &'a ConfigurationSpace, rng: R) -> Result<Self, SpaceError> {
        let ranges = (0..space.dimension())
            .map(|c| {
                let (lower, upper) = space
                    .coordinate_range(c)
                    .ok_or(SpaceError::BoundsNotSet { coordinate: c })?;
                Ok(CoordinateRange {
                    lower,
                    upper,
                    periodic: space.topology(c) == JointTopology::Periodic,
                })
            })
            .collect::<Result<Vec<_>, SpaceError>>()?;

        Ok(Self { space, ranges, rng })
    }

    /// 被采样的构型空间
    pub fn space(&self) -> &'a ConfigurationSpace {
        self.space
    }

    fn prepare(&self, out: &mut JointState) {
        if out.len() != self.ranges.len() {
            *out = JointState::zeros(self.ranges.len());
        }
    }

    /// 均匀采样
    pub fn sample_uniform(&mut self, out: &mut JointState) {
        self.prepare(out);
        for (c, range) in self.ranges.iter().enumerate() {
            out[c] = if range.periodic {
                self.rng.gen_range(-PI..PI)
            } else {
                self.rng.gen_range(range.lower..=range.upper)
            };
        }
    }

    /// 在 `near` 附近 `distance` 范围内均匀采样
    ///
    /// 有界坐标采样区间与上下限取交集；周期坐标结果归一化到 `[-π, π)`。
    /// `distance` 为 NaN 时退化为复制 `near`。
    pub fn sample_uniform_near(&mut self, out: &mut JointState, near: &JointState, distance: f64) {
        debug_assert_eq!(near.len(), self.ranges.len());
        self.prepare(out);
        if distance.is_nan() {
            out.clone_from(near);
            return;
        }
        let distance = distance.abs();

        for (c, range) in self.ranges.iter().enumerate() {
            out[c] = if range.periodic {
                if distance >= PI {
                    self.rng.gen_range(-PI..PI)
                } else {
                    wrap_angle(near[c] + self.rng.gen_range(-distance..=distance))
                }
            } else {
                let center = near[c].clamp(range.lower, range.upper);
                let lower = (center - distance).max(range.lower);
                let upper = (center + distance).min(range.upper);
                self.rng.gen_range(lower..=upper)
            };
        }
    }

    /// 以 `mean` 为中心、标准差 `std_dev` 的高斯采样
    ///
    /// 有界坐标结果钳位到上下限；周期坐标结果归一化到 `[-π, π)`。
    pub fn sample_gaussian(&mut self, out: &mut JointState, mean: &JointState, std_dev: f64) {
        debug_assert_eq!(mean.len(), self.ranges.len());
        self.prepare(out);

        let std_dev = std_dev.abs();
        let normal = match Normal::new(0.0, std_dev) {
            Ok(normal) => normal,
            // std_dev 非有限值时退化为原样复制
            Err(_) => {
                out.clone_from(mean);
                return;
            }
        };

        for (c, range) in self.ranges.iter().enumerate() {
            let v = mean[c] + normal.sample(&mut self.rng);
            out[c] = if range.periodic {
                wrap_angle(v)
            } else {
                v.clamp(range.lower, range.upper)
            };
        }
    }
}
