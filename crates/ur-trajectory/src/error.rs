//! 轨迹校验错误类型定义

use thiserror::Error;

/// 轨迹层错误类型
///
/// 所有变体都在插值开始之前产生，出现错误时不会生成任何指令。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrajectoryError {
    /// 时间戳 / 位置 / 速度三列长度不一致
    #[error(
        "Column length mismatch: {timestamps} timestamps, {positions} positions, {velocities} velocities"
    )]
    LengthMismatch {
        timestamps: usize,
        positions: usize,
        velocities: usize,
    },

    /// 路点数量不足（至少需要 2 个才能构成一段）
    #[error("Trajectory needs at least 2 waypoints, got {count}")]
    TooFewWaypoints { count: usize },

    /// 时间戳未严格递增
    #[error("Timestamp at index {index} is not strictly increasing ({previous} -> {current})")]
    NonIncreasingTimestamp {
        index: usize,
        previous: f64,
        current: f64,
    },

    /// 关节数量与第一个路点不一致
    #[error("Waypoint {index} has {actual} joints, expected {expected}")]
    JointCountMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// 同一路点的速度向量长度与位置向量不一致
    #[error("Waypoint {index} has {position} positions but {velocity} velocities")]
    VelocityLengthMismatch {
        index: usize,
        position: usize,
        velocity: usize,
    },

    /// 出现 NaN 或无穷大
    #[error("Waypoint {index} contains a non-finite value")]
    NonFiniteValue { index: usize },

    /// 最大控制步长无效（必须为有限正数）
    #[error("Invalid max time step: {0} (must be finite and > 0)")]
    InvalidTimeStep(f64),

    /// 控制周期无效（必须为有限正数）
    #[error("Invalid cycle period: {0} (must be finite and > 0)")]
    InvalidCyclePeriod(f64),
}
