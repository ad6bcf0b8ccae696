//! 驱动配置
//!
//! 支持从 TOML 加载，缺省字段使用默认值：
//!
//! ```toml
//! max_time_step = 0.08   # 相邻 servoj 的最大间隔（秒）
//! cycle_period = 0.008   # 控制器控制周期 / 减速尾段步长（秒）
//! min_payload = 0.0      # 负载下限（kg，开区间）
//! max_payload = 5.0      # 负载上限（kg，开区间）
//! joint_names = ["shoulder_pan_joint", "shoulder_lift_joint", "elbow_joint",
//!                "wrist_1_joint", "wrist_2_joint", "wrist_3_joint"]
//! ```

use crate::UR_JOINT_COUNT;
use crate::error::DriverError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use ur_trajectory::{DEFAULT_CYCLE_PERIOD, ResampleConfig};

/// UR 机械臂默认关节名称
pub const DEFAULT_JOINT_NAMES: [&str; UR_JOINT_COUNT] = [
    "shoulder_pan_joint",
    "shoulder_lift_joint",
    "elbow_joint",
    "wrist_1_joint",
    "wrist_2_joint",
    "wrist_3_joint",
];

/// 驱动配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    /// 相邻采样点的最大间隔（秒）
    ///
    /// 控制器实时循环等待下一条指令的时间上限。
    pub max_time_step: f64,

    /// 控制器固定控制周期（秒），用作减速尾段步长
    pub cycle_period: f64,

    /// 负载下限（kg，不含）
    pub min_payload: f64,

    /// 负载上限（kg，不含）
    pub max_payload: f64,

    /// 关节名称（用于上层消息映射）
    pub joint_names: Vec<String>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_time_step: 0.08,
            cycle_period: DEFAULT_CYCLE_PERIOD,
            min_payload: 0.0,
            // ⚠️ 应该根据实际机型调整（UR5: 5kg, UR10: 10kg）
            max_payload: 1.0,
            joint_names: DEFAULT_JOINT_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DriverConfig {
    /// 从 TOML 字符串解析并校验
    pub fn from_toml_str(content: &str) -> Result<Self, DriverError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载并校验
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DriverError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 序列化为 TOML
    pub fn to_toml_string(&self) -> Result<String, DriverError> {
        toml::to_string(self).map_err(|e| DriverError::Config(e.to_string()))
    }

    /// 校验配置
    ///
    /// - `max_time_step`、`cycle_period` 为有限正数
    /// - `min_payload < max_payload`
    /// - 关节名称为空或恰好 6 个
    pub fn validate(&self) -> Result<(), DriverError> {
        self.resample_config()?;

        if !(self.min_payload.is_finite() && self.max_payload.is_finite()) {
            return Err(DriverError::Config(
                "payload bounds must be finite".to_string(),
            ));
        }
        if self.min_payload >= self.max_payload {
            return Err(DriverError::Config(format!(
                "min_payload ({}) must be below max_payload ({})",
                self.min_payload, self.max_payload
            )));
        }
        if !self.joint_names.is_empty() && self.joint_names.len() != UR_JOINT_COUNT {
            return Err(DriverError::Config(format!(
                "expected {} joint names, got {}",
                UR_JOINT_COUNT,
                self.joint_names.len()
            )));
        }

        Ok(())
    }

    /// 构建重采样参数
    pub fn resample_config(&self) -> Result<ResampleConfig, DriverError> {
        Ok(ResampleConfig::new(self.max_time_step)?.with_cycle_period(self.cycle_period)?)
    }
}
