//! # 构型空间配置
//!
//! 从 TOML 文件描述参与规划的关节、投影参数和验证器选项。
//!
//! ```toml
//! [[joints]]
//! index = 0
//! periodic = false
//! lower = -1.57
//! upper = 1.57
//!
//! [[joints]]
//! index = 3
//! periodic = true
//!
//! [projection]
//! seed = 42
//! cell_splits = 20
//!
//! [oracle]
//! check_limits = 0
//! linear_fast_path = true
//! ```

use crate::projection::{DEFAULT_CELL_SPLITS, DEFAULT_PROJECTION_SEED};
use crate::space::{ConfigurationSpace, DistanceMetric};
use jointspace_types::{CheckLimitsMode, DofIndex, JointBounds, SpaceError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 读取文件失败
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML 解析失败
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML 序列化失败
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// 配置内容无法构成合法的构型空间
    #[error("Invalid configuration space: {0}")]
    Space(#[from] SpaceError),
}

/// 构型空间配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceConfig {
    /// 距离度量
    #[serde(default)]
    pub metric: DistanceMetric,

    /// 参与规划的关节（顺序即坐标顺序）
    pub joints: Vec<JointConfig>,

    /// 默认投影参数
    #[serde(default)]
    pub projection: ProjectionConfig,

    /// 验证器选项
    #[serde(default)]
    pub oracle: OracleConfig,
}

/// 单个关节配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JointConfig {
    /// 机器人关节索引
    pub index: DofIndex,

    /// 是否为周期关节
    #[serde(default)]
    pub periodic: bool,

    /// 下限（周期关节忽略）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,

    /// 上限（周期关节忽略）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
}

/// 默认投影配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// 随机投影矩阵种子
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// 每个投影维度的网格划分数
    #[serde(default = "default_cell_splits")]
    pub cell_splits: u32,
}

fn default_seed() -> u64 {
    DEFAULT_PROJECTION_SEED
}

fn default_cell_splits() -> u32 {
    DEFAULT_CELL_SPLITS
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_PROJECTION_SEED,
            cell_splits: DEFAULT_CELL_SPLITS,
        }
    }
}

/// 验证器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// 限位检查模式（原始值，原样转发给机器人模型）
    #[serde(default)]
    pub check_limits: u32,

    /// 空间没有周期关节时是否走线性快速路径
    #[serde(default = "default_linear_fast_path")]
    pub linear_fast_path: bool,
}

fn default_linear_fast_path() -> bool {
    true
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            check_limits: 0,
            linear_fast_path: true,
        }
    }
}

impl OracleConfig {
    /// 限位检查模式
    pub fn check_limits_mode(&self) -> CheckLimitsMode {
        CheckLimitsMode::from_u32(self.check_limits)
    }
}

impl SpaceConfig {
    /// 从 TOML 字符串解析
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// 从文件加载
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 保存到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 构建已完成 setup 的构型空间
    ///
    /// # 错误
    ///
    /// - 关节为空或索引重复
    /// - 有界关节缺少上下限（`BoundsNotSet`）或上下限非法
    pub fn build_space(&self) -> Result<ConfigurationSpace, ConfigError> {
        let indices = self.joints.iter().map(|j| j.index).collect();
        let periodic = self.joints.iter().map(|j| j.periodic).collect();

        let mut space = ConfigurationSpace::new(indices, periodic)?
            .with_metric(self.metric)
            .with_projection_seed(self.projection.seed)
            .with_cell_splits(self.projection.cell_splits);

        let mut bounds = JointBounds::new(self.joints.len());
        for (coordinate, joint) in self.joints.iter().enumerate() {
            if joint.periodic {
                continue;
            }
            match (joint.lower, joint.upper) {
                (Some(lower), Some(upper)) => bounds.set(coordinate, lower, upper),
                _ => return Err(SpaceError::BoundsNotSet { coordinate }.into()),
            }
        }

        space.set_bounds(bounds)?;
        space.setup()?;
        Ok(space)
    }
}
