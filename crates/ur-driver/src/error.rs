//! 驱动层错误类型定义

use thiserror::Error;
use ur_trajectory::TrajectoryError;

/// 实时通道错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelError {
    /// 命令队列已满
    #[error("Realtime command queue full")]
    Full,

    /// 通道已关闭（发送线程退出）
    #[error("Realtime channel closed")]
    Closed,
}

/// 驱动层错误类型
#[derive(Error, Debug)]
pub enum DriverError {
    /// 轨迹输入校验失败
    #[error("Trajectory validation error: {0}")]
    Trajectory(#[from] TrajectoryError),

    /// 实时通道无法接收命令
    #[error("Transport error: {0}")]
    Channel(#[from] ChannelError),

    /// 关节数与控制器不符
    #[error("Unsupported joint count: expected {expected}, got {actual}")]
    UnsupportedJointCount { expected: usize, actual: usize },

    /// 配置无效
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// 配置文件读取失败
    #[error("Failed to read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// 配置文件解析失败
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// 控制器版本字符串无效
    #[error("Invalid controller version: {0:?}")]
    InvalidVersion(String),
}

impl DriverError {
    /// 是否为输入校验类错误（调用方修正输入后可重试）
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DriverError::Trajectory(_) | DriverError::UnsupportedJointCount { .. }
        )
    }

    /// 是否为传输类错误
    pub fn is_transport(&self) -> bool {
        matches!(self, DriverError::Channel(_))
    }
}
