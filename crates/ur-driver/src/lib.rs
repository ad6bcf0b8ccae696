//! 驱动层模块
//!
//! 本模块提供 UR 机械臂的运动指令生成功能，包括：
//! - 轨迹输入校验（委托 `ur-trajectory`）
//! - 重采样与 `servoj` 程序块生成
//! - 实时通道抽象（`RealtimeChannel`）与基于 crossbeam 的队列实现
//! - IO / 负载 / 速度 / 停止等单条指令
//! - TOML 配置加载
//!
//! # 不在本层范围内
//!
//! 实时通道的发送循环与 socket、状态通道、连接生命周期、遥测解析。
//! 这些由外部协作者实现，本层只依赖 `RealtimeChannel::enqueue`。

pub mod channel;
pub mod config;
mod driver;
pub mod emitter;
mod error;
pub mod version;

/// UR 机械臂关节数
pub const UR_JOINT_COUNT: usize = 6;

pub use channel::{QueueChannel, RealtimeChannel};
pub use config::{DEFAULT_JOINT_NAMES, DriverConfig};
pub use driver::UrDriver;
pub use emitter::emit;
pub use error::{ChannelError, DriverError};
pub use version::ControllerVersion;
