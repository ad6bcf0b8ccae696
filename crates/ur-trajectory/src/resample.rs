//! 时间网格重采样
//!
//! 将稀疏路点展开为时间上近似均匀的密集采样，供实时控制循环逐条执行。
//!
//! # 算法
//!
//! 1. **主网格**：每段 `dt` 划分为 `steps = ceil(dt / max_time_step)` 等份（至少 1 份），
//!    输出 `t_{i-1} + step·k`（`k = 0..steps`，不含段终点）。相邻网格点间距 ≤ `max_time_step`。
//! 2. **减速尾段**：从最后一个网格点起按固定控制周期（默认 8ms）追加，直到下一个点
//!    会到达或越过终点为止，越过终点的那个点不保留。
//! 3. **逐点插值**：双指针线性扫描，路点索引只前进不回退，复杂度 O(网格数 + 路点数)。
//! 4. **精确到达**：最后追加终点路点本身（时间戳与位置原样拷贝，不重新计算）。

use crate::error::TrajectoryError;
use crate::trajectory::{JointVector, Segment, Trajectory};
use tracing::trace;

/// 控制器固定控制周期（秒）
pub const DEFAULT_CYCLE_PERIOD: f64 = 0.008;

/// 重采样参数
///
/// 只能通过校验构造：两个参数均为有限正数。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResampleConfig {
    max_time_step: f64,
    cycle_period: f64,
}

impl ResampleConfig {
    /// 使用默认控制周期（8ms）创建
    ///
    /// # 错误
    ///
    /// `max_time_step` 非有限或 ≤ 0 时返回 `TrajectoryError::InvalidTimeStep`。
    pub fn new(max_time_step: f64) -> Result<Self, TrajectoryError> {
        if !(max_time_step.is_finite() && max_time_step > 0.0) {
            return Err(TrajectoryError::InvalidTimeStep(max_time_step));
        }
        Ok(Self {
            max_time_step,
            cycle_period: DEFAULT_CYCLE_PERIOD,
        })
    }

    /// 替换减速尾段的控制周期
    pub fn with_cycle_period(mut self, cycle_period: f64) -> Result<Self, TrajectoryError> {
        if !(cycle_period.is_finite() && cycle_period > 0.0) {
            return Err(TrajectoryError::InvalidCyclePeriod(cycle_period));
        }
        self.cycle_period = cycle_period;
        Ok(self)
    }

    /// 相邻采样点之间允许的最大间隔（秒）
    pub fn max_time_step(&self) -> f64 {
        self.max_time_step
    }

    /// 减速尾段的步长（秒）
    pub fn cycle_period(&self) -> f64 {
        self.cycle_period
    }
}

/// 网格采样点
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSample {
    /// 绝对时间戳（秒）
    pub timestamp: f64,
    /// 关节目标位置
    pub position: JointVector,
}

/// 重采样结果
///
/// 至少包含 2 个采样点，最后一个恰好是轨迹终点路点。
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResampledTrajectory {
    samples: Vec<GridSample>,
}

impl ResampledTrajectory {
    pub fn samples(&self) -> &[GridSample] {
        &self.samples
    }

    /// 时间网格
    pub fn grid(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.timestamp)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&GridSample> {
        self.samples.last()
    }

    /// 遍历相邻采样点对：`(距上一点的时长, 目标位置)`
    ///
    /// 从第二个采样点开始，共 `len() - 1` 项，每项对应一条运动语句。
    pub fn intervals(&self) -> impl Iterator<Item = (f64, &[f64])> + '_ {
        self.samples
            .windows(2)
            .map(|pair| (pair[1].timestamp - pair[0].timestamp, pair[1].position.as_slice()))
    }

    pub fn into_samples(self) -> Vec<GridSample> {
        self.samples
    }
}

/// 重采样轨迹
///
/// 输入已由 `Trajectory` 校验，本函数不会失败。同样的输入总是产生完全相同的输出。
pub fn resample(trajectory: &Trajectory, config: &ResampleConfig) -> ResampledTrajectory {
    let waypoints = trajectory.waypoints();
    let end_time = trajectory.end_time();

    let mut grid = build_time_grid(trajectory, config.max_time_step);

    // 浮点舍入在极端时间戳下可能让主网格点落在终点上；终点由第 4 步单独追加
    let before_end = grid.partition_point(|&t| t < end_time);
    grid.truncate(before_end);

    append_stop_tail(&mut grid, end_time, config.cycle_period);

    let mut samples = Vec::with_capacity(grid.len() + 1);
    let last_index = waypoints.len() - 1;
    let mut j = 1;
    for &t in &grid {
        // grid 中所有点 < end_time，因此 j 不会越过 last_index
        while j < last_index && waypoints[j].timestamp() <= t {
            j += 1;
        }
        let segment = trajectory
            .segment(j - 1)
            .unwrap_or_else(|| unreachable!("segment index {} out of range", j - 1));
        samples.push(sample_segment(&segment, t));
    }

    let last = trajectory.last();
    samples.push(GridSample {
        timestamp: last.timestamp(),
        position: last.position().iter().copied().collect(),
    });

    trace!(
        waypoints = waypoints.len(),
        samples = samples.len(),
        "Resampled trajectory"
    );

    ResampledTrajectory { samples }
}

fn sample_segment(segment: &Segment<'_>, t: f64) -> GridSample {
    GridSample {
        timestamp: t,
        position: segment.position_at(t - segment.start().timestamp()),
    }
}

/// 构建主网格（不含轨迹终点）
fn build_time_grid(trajectory: &Trajectory, max_time_step: f64) -> Vec<f64> {
    let mut grid = Vec::new();

    for segment in trajectory.segments() {
        let start = segment.start().timestamp();
        let dt = segment.duration();
        let steps = ((dt / max_time_step).ceil() as usize).max(1);
        let step_size = dt / steps as f64;

        grid.extend((0..steps).map(|k| start + step_size * k as f64));
    }

    grid
}

/// 追加减速尾段
///
/// 以 `cycle_period` 为步长继续追加，下一个点到达或越过 `end_time` 时停止，
/// 该点不保留，给终点留出一个不足一个周期的最后一步。
///
/// 网格为空、或最后一点已不早于 `end_time` 时不追加也不删除任何点。
/// 若加上周期后数值不再增长（时间戳量级过大），同样停止。
pub(crate) fn append_stop_tail(grid: &mut Vec<f64>, end_time: f64, cycle_period: f64) {
    while let Some(&last) = grid.last() {
        let next = last + cycle_period;
        if next >= end_time || next <= last {
            break;
        }
        grid.push(next);
    }
}
