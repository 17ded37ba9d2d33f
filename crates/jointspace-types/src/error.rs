//! 构型空间错误类型定义

use thiserror::Error;

/// 构型空间错误类型
///
/// 全部属于"配置错误"：在构造或 setup 阶段立即返回，不会被静默降级。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// 关节索引与周期标志数量不一致
    #[error("Joint index/periodicity length mismatch: {indices} indices, {periodic} flags")]
    LengthMismatch { indices: usize, periodic: usize },

    /// 空的关节索引集合
    #[error("Configuration space needs at least one joint")]
    EmptySpace,

    /// 同一个关节出现多次
    #[error("Joint index {0} appears more than once")]
    DuplicateIndex(usize),

    /// 上下限维度与坐标数不一致
    #[error("Bounds dimension mismatch: expected {expected}, got {actual}")]
    BoundsDimension { expected: usize, actual: usize },

    /// 上下限无效（非有限值、lower > upper 或区间宽度溢出）
    #[error("Invalid bounds for coordinate {coordinate}: [{lower}, {upper}]")]
    InvalidBounds {
        coordinate: usize,
        lower: f64,
        upper: f64,
    },

    /// 上下限一旦设置便不可修改
    #[error("Bounds are already set and immutable")]
    BoundsAlreadySet,

    /// 有界坐标缺少上下限
    #[error("Bounded coordinate {coordinate} has no bounds")]
    BoundsNotSet { coordinate: usize },

    /// 状态维度与坐标数不一致
    #[error("State dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
