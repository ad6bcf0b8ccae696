//! UR SDK - Universal Robots 轨迹指令生成 SDK
//!
//! 将稀疏关节轨迹转换为 URScript `servoj` 程序块，交给控制器的实时通道。
//!
//! # 架构设计
//!
//! 本 SDK 采用分层架构，从底层到高层：
//!
//! - **脚本层** (`script`): URScript 文本渲染，字段精度逐字节对齐控制器约定
//! - **轨迹层** (`trajectory`): 路点校验、三次 Hermite 插值、时间网格重采样
//! - **驱动层** (`driver`): 实时通道抽象、指令生成、IO / 负载等单条指令、配置
//!
//! # 快速开始
//!
//! ```rust
//! use ur_sdk::prelude::*;
//!
//! let (channel, rx) = QueueChannel::bounded(16);
//! let driver = UrDriver::new(channel, DriverConfig::default()).unwrap();
//!
//! driver
//!     .add_trajectory(
//!         &[0.0, 2.0],
//!         &[vec![0.0; 6], vec![0.5; 6]],
//!         &[vec![0.0; 6], vec![0.0; 6]],
//!     )
//!     .unwrap();
//!
//! assert!(rx.try_recv().unwrap().ends_with("end\n"));
//! ```

pub use ur_driver as driver;
pub use ur_script as script;
pub use ur_trajectory as trajectory;

pub mod logging;
pub mod prelude;

// --- 用户以此为界 ---
// 以下是通过 Facade Pattern 提供的公共 API

pub use driver::{
    ChannelError, ControllerVersion, DriverConfig, DriverError, QueueChannel, RealtimeChannel,
    UrDriver,
};
pub use logging::{init_logger, try_init_logger};
pub use trajectory::{Trajectory, TrajectoryError, Waypoint};
