//! 关节限位检查模式
//!
//! 写入关节值时，机器人模型如何处理超出限位的值（钳位 / 拒绝 / 直接通过）
//! 完全由机器人模型自己决定。本层只把模式值**原样转发**，不做任何解释。

use std::fmt;

/// 关节限位检查模式（不透明枚举值）
///
/// 内部保存原始 `u32`，任何值都会原样传给机器人模型，
/// 包括下面未列出的厂商自定义值。
///
/// # 常用取值
///
/// | 常量 | 值 | 典型语义 |
/// |------|----|----------|
/// | `NOTHING` | 0 | 不检查，直接通过 |
/// | `CHECK_LIMITS` | 1 | 钳位并告警 |
/// | `CHECK_LIMITS_SILENT` | 2 | 静默钳位 |
/// | `CHECK_LIMITS_THROW` | 3 | 超限即报错 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckLimitsMode(pub u32);

impl CheckLimitsMode {
    /// 不检查限位（默认，验证查询时使用）
    pub const NOTHING: Self = CheckLimitsMode(0);

    /// 检查限位（通常为钳位 + 告警）
    pub const CHECK_LIMITS: Self = CheckLimitsMode(1);

    /// 检查限位，不输出告警
    pub const CHECK_LIMITS_SILENT: Self = CheckLimitsMode(2);

    /// 检查限位，超限返回错误
    pub const CHECK_LIMITS_THROW: Self = CheckLimitsMode(3);

    /// 从 u32 转换（保留任意值）
    #[inline]
    pub const fn from_u32(value: u32) -> Self {
        CheckLimitsMode(value)
    }

    /// 转换为 u32
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for CheckLimitsMode {
    fn from(value: u32) -> Self {
        CheckLimitsMode(value)
    }
}

impl fmt::Display for CheckLimitsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NOTHING => write!(f, "nothing"),
            Self::CHECK_LIMITS => write!(f, "check_limits"),
            Self::CHECK_LIMITS_SILENT => write!(f, "check_limits_silent"),
            Self::CHECK_LIMITS_THROW => write!(f, "check_limits_throw"),
            CheckLimitsMode(raw) => write!(f, "custom({})", raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nothing() {
        assert_eq!(CheckLimitsMode::default(), CheckLimitsMode::NOTHING);
    }

    #[test]
    fn test_raw_value_preserved() {
        // 未知值不能被"纠正"为已知模式
        let mode = CheckLimitsMode::from_u32(42);
        assert_eq!(mode.as_u32(), 42);
        assert_eq!(CheckLimitsMode::from(3), CheckLimitsMode::CHECK_LIMITS_THROW);
    }

    #[test]
    fn test_display() {
        assert_eq!(CheckLimitsMode::CHECK_LIMITS.to_string(), "check_limits");
        assert_eq!(CheckLimitsMode(7).to_string(), "custom(7)");
    }
}
