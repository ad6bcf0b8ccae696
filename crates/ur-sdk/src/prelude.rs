//! Prelude - 常用类型的便捷导入
//!
//! ```rust
//! use ur_sdk::prelude::*;
//! ```

// 驱动层
pub use crate::driver::{DriverConfig, QueueChannel, RealtimeChannel, UrDriver};

// 轨迹层
pub use crate::trajectory::{ResampleConfig, Trajectory, Waypoint, resample};

// 错误类型
pub use crate::driver::{ChannelError, DriverError};
pub use crate::trajectory::TrajectoryError;
