//! 路点与轨迹
//!
//! `Trajectory` 只能通过校验构造，持有它即意味着：
//! - 至少 2 个路点
//! - 时间戳有限且严格递增
//! - 所有位置 / 速度向量长度相同（关节数固定）
//! - 所有数值有限
//!
//! 重采样器依赖这些不变量，因此自身不再做边界检查以外的校验。

use crate::cubic::{interpolate, interpolate_velocity};
use crate::error::TrajectoryError;
use smallvec::SmallVec;

/// 关节向量
///
/// 栈上预留 6 个位置（UR 系列机械臂的关节数），超过时退化为堆分配。
pub type JointVector = SmallVec<[f64; 6]>;

/// 路点：某一时刻要求到达的关节位置与速度
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// 时间戳（秒）
    timestamp: f64,
    /// 关节位置（rad）
    position: JointVector,
    /// 关节速度（rad/s）
    velocity: JointVector,
}

impl Waypoint {
    /// 创建路点（不做校验，校验在 `Trajectory::new` 中统一进行）
    pub fn new(
        timestamp: f64,
        position: impl IntoIterator<Item = f64>,
        velocity: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            timestamp,
            position: position.into_iter().collect(),
            velocity: velocity.into_iter().collect(),
        }
    }

    /// 创建速度为零的路点
    pub fn at_rest(timestamp: f64, position: impl IntoIterator<Item = f64>) -> Self {
        let position: JointVector = position.into_iter().collect();
        let velocity = SmallVec::from_elem(0.0, position.len());
        Self {
            timestamp,
            position,
            velocity,
        }
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn position(&self) -> &[f64] {
        &self.position
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    pub fn joint_count(&self) -> usize {
        self.position.len()
    }

    fn is_finite(&self) -> bool {
        self.timestamp.is_finite()
            && self.position.iter().all(|v| v.is_finite())
            && self.velocity.iter().all(|v| v.is_finite())
    }
}

/// 经过校验的轨迹
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trajectory {
    waypoints: Vec<Waypoint>,
}

impl Trajectory {
    /// 从路点序列构造轨迹
    ///
    /// # 错误
    ///
    /// - `TooFewWaypoints`: 少于 2 个路点
    /// - `JointCountMismatch`: 某路点关节数与第一个路点不同
    /// - `VelocityLengthMismatch`: 某路点速度与位置长度不同
    /// - `NonFiniteValue`: 出现 NaN / 无穷大
    /// - `NonIncreasingTimestamp`: 时间戳未严格递增
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, TrajectoryError> {
        if waypoints.len() < 2 {
            return Err(TrajectoryError::TooFewWaypoints {
                count: waypoints.len(),
            });
        }

        let expected = waypoints[0].joint_count();
        for (index, waypoint) in waypoints.iter().enumerate() {
            if waypoint.position.len() != expected {
                return Err(TrajectoryError::JointCountMismatch {
                    index,
                    expected,
                    actual: waypoint.position.len(),
                });
            }
            if waypoint.velocity.len() != waypoint.position.len() {
                return Err(TrajectoryError::VelocityLengthMismatch {
                    index,
                    position: waypoint.position.len(),
                    velocity: waypoint.velocity.len(),
                });
            }
            if !waypoint.is_finite() {
                return Err(TrajectoryError::NonFiniteValue { index });
            }
        }

        for (offset, pair) in waypoints.windows(2).enumerate() {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(TrajectoryError::NonIncreasingTimestamp {
                    index: offset + 1,
                    previous: pair[0].timestamp,
                    current: pair[1].timestamp,
                });
            }
        }

        Ok(Self { waypoints })
    }

    /// 从三列数据构造轨迹（时间戳、位置、速度）
    ///
    /// 这是驱动入口 `add_trajectory` 使用的形式。
    pub fn from_columns<P, V>(
        timestamps: &[f64],
        positions: &[P],
        velocities: &[V],
    ) -> Result<Self, TrajectoryError>
    where
        P: AsRef<[f64]>,
        V: AsRef<[f64]>,
    {
        if timestamps.len() != positions.len() || timestamps.len() != velocities.len() {
            return Err(TrajectoryError::LengthMismatch {
                timestamps: timestamps.len(),
                positions: positions.len(),
                velocities: velocities.len(),
            });
        }

        let waypoints = timestamps
            .iter()
            .zip(positions)
            .zip(velocities)
            .map(|((&t, p), v)| {
                Waypoint::new(t, p.as_ref().iter().copied(), v.as_ref().iter().copied())
            })
            .collect();

        Self::new(waypoints)
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// 路点数量（至少为 2）
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// 校验保证轨迹非空，始终返回 `false`
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn joint_count(&self) -> usize {
        self.waypoints[0].joint_count()
    }

    pub fn first(&self) -> &Waypoint {
        &self.waypoints[0]
    }

    pub fn last(&self) -> &Waypoint {
        &self.waypoints[self.waypoints.len() - 1]
    }

    pub fn start_time(&self) -> f64 {
        self.first().timestamp
    }

    pub fn end_time(&self) -> f64 {
        self.last().timestamp
    }

    /// 轨迹总时长（秒）
    pub fn duration(&self) -> f64 {
        self.end_time() - self.start_time()
    }

    /// 第 `index` 段（路点 `index` 到 `index + 1`）
    pub fn segment(&self, index: usize) -> Option<Segment<'_>> {
        let start = self.waypoints.get(index)?;
        let end = self.waypoints.get(index + 1)?;
        Some(Segment { start, end })
    }

    /// 按顺序遍历所有段
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        self.waypoints.windows(2).map(|pair| Segment {
            start: &pair[0],
            end: &pair[1],
        })
    }
}

/// 段：两个相邻路点及其之间的三次插值
///
/// 按需派生，不单独存储。
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    start: &'a Waypoint,
    end: &'a Waypoint,
}

impl<'a> Segment<'a> {
    pub fn start(&self) -> &'a Waypoint {
        self.start
    }

    pub fn end(&self) -> &'a Waypoint {
        self.end
    }

    /// 段时长（秒），来自校验过的轨迹时恒为正
    pub fn duration(&self) -> f64 {
        self.end.timestamp - self.start.timestamp
    }

    /// 局部时间 `local_time ∈ [0, duration]` 处的关节位置
    pub fn position_at(&self, local_time: f64) -> JointVector {
        interpolate(
            local_time,
            self.duration(),
            &self.start.position,
            &self.end.position,
            &self.start.velocity,
            &self.end.velocity,
        )
    }

    /// 局部时间 `local_time` 处的关节速度（解析导数）
    pub fn velocity_at(&self, local_time: f64) -> JointVector {
        interpolate_velocity(
            local_time,
            self.duration(),
            &self.start.position,
            &self.end.position,
            &self.start.velocity,
            &self.end.velocity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_point() -> Trajectory {
        Trajectory::from_columns(
            &[0.0, 1.0],
            &[vec![0.0; 6], vec![1.0; 6]],
            &[vec![0.0; 6], vec![0.0; 6]],
        )
        .unwrap()
    }

    #[test]
    fn test_from_columns_valid() {
        let trajectory = two_point();
        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.joint_count(), 6);
        assert_eq!(trajectory.start_time(), 0.0);
        assert_eq!(trajectory.end_time(), 1.0);
        assert_eq!(trajectory.duration(), 1.0);
        assert!(!trajectory.is_empty());
    }

    #[test]
    fn test_column_length_mismatch() {
        let err = Trajectory::from_columns(
            &[0.0, 1.0, 2.0],
            &[vec![0.0; 6], vec![1.0; 6]],
            &[vec![0.0; 6], vec![0.0; 6], vec![0.0; 6]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            TrajectoryError::LengthMismatch {
                timestamps: 3,
                positions: 2,
                velocities: 3,
            }
        );
    }

    #[test]
    fn test_too_few_waypoints() {
        let err = Trajectory::new(vec![Waypoint::at_rest(0.0, [0.0; 6])]).unwrap_err();
        assert_eq!(err, TrajectoryError::TooFewWaypoints { count: 1 });

        let err = Trajectory::new(Vec::new()).unwrap_err();
        assert_eq!(err, TrajectoryError::TooFewWaypoints { count: 0 });
    }

    #[test]
    fn test_non_increasing_timestamps() {
        let err = Trajectory::from_columns(
            &[0.0, 1.0, 0.5],
            &[vec![0.0; 6], vec![1.0; 6], vec![2.0; 6]],
            &[vec![0.0; 6], vec![0.0; 6], vec![0.0; 6]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            TrajectoryError::NonIncreasingTimestamp {
                index: 2,
                previous: 1.0,
                current: 0.5,
            }
        );

        // 相等也不允许
        let err = Trajectory::new(vec![
            Waypoint::at_rest(1.0, [0.0; 6]),
            Waypoint::at_rest(1.0, [1.0; 6]),
        ])
        .unwrap_err();
        assert!(matches!(err, TrajectoryError::NonIncreasingTimestamp { index: 1, .. }));
    }

    #[test]
    fn test_joint_count_mismatch() {
        let err = Trajectory::new(vec![
            Waypoint::at_rest(0.0, [0.0; 6]),
            Waypoint::at_rest(1.0, [1.0; 5]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            TrajectoryError::JointCountMismatch {
                index: 1,
                expected: 6,
                actual: 5,
            }
        );
    }

    #[test]
    fn test_velocity_length_mismatch() {
        let err = Trajectory::new(vec![
            Waypoint::new(0.0, [0.0; 6], [0.0; 4]),
            Waypoint::at_rest(1.0, [1.0; 6]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            TrajectoryError::VelocityLengthMismatch {
                index: 0,
                position: 6,
                velocity: 4,
            }
        );
    }

    #[test]
    fn test_non_finite_value() {
        let err = Trajectory::new(vec![
            Waypoint::at_rest(0.0, [0.0; 6]),
            Waypoint::at_rest(1.0, [0.0, 0.0, f64::NAN, 0.0, 0.0, 0.0]),
        ])
        .unwrap_err();
        assert_eq!(err, TrajectoryError::NonFiniteValue { index: 1 });

        let err = Trajectory::new(vec![
            Waypoint::at_rest(0.0, [0.0; 6]),
            Waypoint::at_rest(f64::INFINITY, [0.0; 6]),
        ])
        .unwrap_err();
        assert_eq!(err, TrajectoryError::NonFiniteValue { index: 1 });
    }

    #[test]
    fn test_segments() {
        let trajectory = Trajectory::new(vec![
            Waypoint::at_rest(0.0, [0.0; 6]),
            Waypoint::at_rest(0.5, [1.0; 6]),
            Waypoint::at_rest(2.0, [2.0; 6]),
        ])
        .unwrap();

        let durations: Vec<f64> = trajectory.segments().map(|s| s.duration()).collect();
        assert_eq!(durations, vec![0.5, 1.5]);

        let segment = trajectory.segment(1).unwrap();
        assert_eq!(segment.start().timestamp(), 0.5);
        assert_eq!(segment.end().timestamp(), 2.0);
        assert!(trajectory.segment(2).is_none());
    }

    #[test]
    fn test_segment_endpoints() {
        let trajectory = two_point();
        let segment = trajectory.segment(0).unwrap();

        let start = segment.position_at(0.0);
        let end = segment.position_at(segment.duration());
        for joint in 0..6 {
            assert!((start[joint] - 0.0).abs() < 1e-12);
            assert!((end[joint] - 1.0).abs() < 1e-12);
        }

        let mid_velocity = segment.velocity_at(0.5);
        // v(t) = 6t - 6t², v(0.5) = 1.5
        assert!((mid_velocity[0] - 1.5).abs() < 1e-12);
    }
}
