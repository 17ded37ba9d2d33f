//! 周期关节角度工具
//!
//! 周期关节（例如无限位的旋转关节）的取值在 `[-π, π)` 上环绕。
//! 距离取最短弧长，插值沿最短弧方向进行。
//!
//! # 示例
//!
//! ```rust
//! use jointspace_types::{angle_distance, wrap_angle, PERIOD};
//!
//! // v 与 v + 2π 是同一个构型
//! let v = 0.3;
//! assert!(angle_distance(v, v + PERIOD) < 1e-12);
//!
//! // 归一化到 [-π, π)
//! let w = wrap_angle(PERIOD + 0.5);
//! assert!((w - 0.5).abs() < 1e-12);
//! ```

use std::f64::consts::{PI, TAU};

/// 周期关节的周期（2π）
pub const PERIOD: f64 = TAU;

/// 归一化到 `[-π, π)` 范围
///
/// 已在范围内的值原样返回（保证幂等，不引入浮点误差）。
#[inline]
pub fn wrap_angle(value: f64) -> f64 {
    if (-PI..PI).contains(&value) {
        return value;
    }

    let wrapped = (value + PI).rem_euclid(TAU) - PI;
    // rem_euclid 对极小负数可能返回 TAU 本身
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}

/// 从 `from` 到 `to` 的有符号最短弧差值，范围 `[-π, π)`
#[inline]
pub fn angle_diff(from: f64, to: f64) -> f64 {
    wrap_angle(to - from)
}

/// 两个角度之间的最短弧长，范围 `[0, π]`
///
/// 只依赖 `|a - b|`，因此严格对称：`angle_distance(a, b) == angle_distance(b, a)`。
#[inline]
pub fn angle_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs().rem_euclid(TAU);
    d.min(TAU - d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wrap_angle_in_range_is_identity() {
        for v in [-PI, -1.0, 0.0, 0.1, 1.0, PI - 1e-9] {
            assert_eq!(wrap_angle(v), v);
        }
    }

    #[test]
    fn test_wrap_angle_out_of_range() {
        assert_relative_eq!(wrap_angle(PI), -PI, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(TAU + 0.5), 0.5, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(-TAU - 0.5), -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_wrap_angle_tiny_negative_stays_in_range() {
        let w = wrap_angle(-PI - 1e-15);
        assert!((-PI..PI).contains(&w));
    }

    #[test]
    fn test_angle_diff_takes_short_way() {
        // 从 170° 到 -170°，最短路径是 +20°
        let from = 170f64.to_radians();
        let to = (-170f64).to_radians();
        assert_relative_eq!(angle_diff(from, to), 20f64.to_radians(), epsilon = 1e-12);
        assert_relative_eq!(angle_diff(to, from), -20f64.to_radians(), epsilon = 1e-12);
    }

    #[test]
    fn test_angle_distance() {
        assert_eq!(angle_distance(1.0, 1.0), 0.0);
        assert_relative_eq!(angle_distance(-3.0, 3.0), TAU - 6.0, epsilon = 1e-12);
        assert_relative_eq!(angle_distance(0.0, PI), PI, epsilon = 1e-12);
        assert!(angle_distance(0.25, 0.25 + PERIOD) < 1e-12);
        assert!(angle_distance(0.25, 0.25 - 3.0 * PERIOD) < 1e-12);
    }
}
