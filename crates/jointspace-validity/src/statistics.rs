//! 验证查询统计
//!
//! 查询次数和累计耗时。由验证器独占持有，只在所属线程读写，
//! 因此不使用原子计数器。

use std::time::Duration;

/// 累计计数器（验证器内部使用）
#[derive(Debug, Default, Clone)]
pub(crate) struct QueryCounters {
    checks: u64,
    valid: u64,
    elapsed: Duration,
}

impl QueryCounters {
    /// 记录一次查询（无论结果）
    #[inline]
    pub(crate) fn record(&mut self, elapsed: Duration, valid: bool) {
        self.checks += 1;
        self.valid += u64::from(valid);
        self.elapsed += elapsed;
    }

    pub(crate) fn checks(&self) -> u64 {
        self.checks
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// 获取快照
    pub(crate) fn snapshot(&self) -> QueryStatistics {
        QueryStatistics {
            num_collision_checks: self.checks,
            total_collision_time: self.elapsed.as_secs_f64(),
            num_valid: self.valid,
        }
    }

    /// 同时清零所有计数器
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// 统计快照（不可变，用于读取）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QueryStatistics {
    /// 验证查询次数
    pub num_collision_checks: u64,
    /// 累计耗时（秒）
    pub total_collision_time: f64,
    /// 结果为合法的查询次数
    pub num_valid: u64,
}

impl QueryStatistics {
    /// 结果为非法的查询次数
    pub fn num_invalid(&self) -> u64 {
        self.num_collision_checks - self.num_valid
    }

    /// 平均每次查询耗时（秒）
    ///
    /// 没有查询时返回 0.0。
    pub fn mean_check_time(&self) -> f64 {
        if self.num_collision_checks == 0 {
            return 0.0;
        }
        self.total_collision_time / self.num_collision_checks as f64
    }

    /// 合法率（百分比）
    ///
    /// 返回 0.0 到 100.0 之间的值。没有查询时返回 0.0。
    pub fn valid_rate(&self) -> f64 {
        if self.num_collision_checks == 0 {
            return 0.0;
        }
        (self.num_valid as f64 / self.num_collision_checks as f64) * 100.0
    }
}
