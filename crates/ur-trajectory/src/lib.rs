//! # UR Trajectory
//!
//! 关节空间轨迹处理（纯函数，无 IO）
//!
//! ## 模块
//!
//! - `trajectory`: 路点（Waypoint）与经过校验的轨迹（Trajectory）
//! - `cubic`: 三次 Hermite 段插值
//! - `resample`: 时间网格重采样（最大步长约束 + 减速尾段 + 精确到达）
//! - `error`: 校验错误类型
//!
//! ## 数据流
//!
//! ```text
//! 稀疏路点 → 时间网格 → 逐点插值 → ResampledTrajectory
//! ```
//!
//! 指令文本的生成不在本 crate 中，见 `ur-script` 与 `ur-driver`。
//!
//! ## 示例
//!
//! ```rust
//! use ur_trajectory::{ResampleConfig, Trajectory, resample};
//!
//! let trajectory = Trajectory::from_columns(
//!     &[0.0, 1.0],
//!     &[vec![0.0; 6], vec![1.0; 6]],
//!     &[vec![0.0; 6], vec![0.0; 6]],
//! )
//! .unwrap();
//!
//! let config = ResampleConfig::new(0.5).unwrap();
//! let resampled = resample(&trajectory, &config);
//!
//! assert_eq!(resampled.last().unwrap().timestamp, 1.0);
//! ```

pub mod cubic;
pub mod error;
pub mod resample;
pub mod trajectory;

// 重新导出常用类型
pub use cubic::{interpolate, interpolate_velocity};
pub use error::TrajectoryError;
pub use resample::{DEFAULT_CYCLE_PERIOD, GridSample, ResampleConfig, ResampledTrajectory, resample};
pub use trajectory::{JointVector, Segment, Trajectory, Waypoint};
