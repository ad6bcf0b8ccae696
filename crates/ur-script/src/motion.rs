//! 运动语句

use crate::format::JointList;
use std::fmt;

/// 关节伺服语句：`servoj([q0, …, q5], t=dt)`
///
/// `target` 为绝对关节目标（rad），`time` 为距上一条语句的时长（秒）。
#[derive(Debug, Clone, Copy)]
pub struct ServoJ<'a> {
    pub target: &'a [f64],
    pub time: f64,
}

impl<'a> ServoJ<'a> {
    pub fn new(target: &'a [f64], time: f64) -> Self {
        Self { target, time }
    }
}

impl fmt::Display for ServoJ<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "servoj({}, t={:.5})",
            JointList::new(self.target, 5),
            self.time
        )
    }
}

/// 关节速度语句：`speedj([qd0, …, qd5], acc)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedJ {
    /// 关节速度（rad/s）
    pub speeds: [f64; 6],
    /// 关节加速度（rad/s²）
    pub acceleration: f64,
}

impl fmt::Display for SpeedJ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "speedj({}, {:.6})",
            JointList::new(&self.speeds, 5),
            self.acceleration
        )
    }
}

/// 关节减速停止语句：`stopj(a)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopJ {
    /// 减速度（rad/s²）
    pub deceleration: u32,
}

impl StopJ {
    pub const DEFAULT_DECELERATION: u32 = 10;
}

impl Default for StopJ {
    fn default() -> Self {
        Self {
            deceleration: Self::DEFAULT_DECELERATION,
        }
    }
}

impl fmt::Display for StopJ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stopj({})", self.deceleration)
    }
}
