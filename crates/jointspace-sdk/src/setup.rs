//! 从配置一次性构建构型空间和验证器

use jointspace_space::{ConfigError, ConfigurationSpace, SpaceConfig};
use jointspace_validity::{RobotModel, ValidityOracle};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// 规划准备结果：已完成 setup 的构型空间 + 绑定机器人的验证器
pub struct PlanningSetup<R: RobotModel> {
    pub space: Arc<ConfigurationSpace>,
    pub oracle: ValidityOracle<R>,
}

impl<R: RobotModel> PlanningSetup<R> {
    /// 按配置构建
    pub fn from_config(config: &SpaceConfig, robot: R) -> Result<Self, ConfigError> {
        let space = Arc::new(config.build_space()?);
        let oracle = ValidityOracle::from_config(space.clone(), robot, &config.oracle);
        info!(
            dimension = space.dimension(),
            linear = oracle.is_linear(),
            check_limits = %oracle.check_limits(),
            "planning setup ready"
        );
        Ok(Self { space, oracle })
    }

    /// 从 TOML 文件构建
    pub fn from_file<P: AsRef<Path>>(path: P, robot: R) -> Result<Self, ConfigError> {
        Self::from_config(&SpaceConfig::load_from_file(path)?, robot)
    }
}
