//! 指令生成
//!
//! 将重采样结果渲染为一个 `def traj():` 程序块：每对相邻采样点一条
//! `servoj`，携带后一个采样点的绝对关节目标以及两点之间的时长。

use ur_script::{ServoJ, TrajectoryProgram};
use ur_trajectory::ResampledTrajectory;

/// 渲染轨迹程序块
///
/// 输出恰好包含 `resampled.len() - 1` 条 `servoj` 语句。
pub fn emit(resampled: &ResampledTrajectory) -> String {
    let intervals = resampled.len().saturating_sub(1);
    let mut program = TrajectoryProgram::with_capacity(intervals);

    for (duration, target) in resampled.intervals() {
        program.push_servo(ServoJ::new(target, duration));
    }

    program.finish()
}
