//! 实时通道抽象
//!
//! 实时通道持有命令队列，由独立的发送线程按固定周期推送给控制器。
//! 本层只依赖一个"入队"能力，要求：
//!
//! - 线程安全（`Send + Sync`）
//! - FIFO 交付
//! - 不重排、不合并已入队的命令块
//! - 不无限期阻塞调用方
//!
//! 驱动在构造时注入通道句柄，不访问任何全局状态。

use crate::error::ChannelError;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use std::sync::Arc;
use tracing::trace;

/// 实时通道的入队能力
pub trait RealtimeChannel: Send + Sync {
    /// 将一个完整的命令块入队
    ///
    /// 命令块作为一个不可分割的单元交付，实现不得拆分或与其他命令合并。
    fn enqueue(&self, command: String) -> Result<(), ChannelError>;
}

impl<T: RealtimeChannel + ?Sized> RealtimeChannel for Arc<T> {
    fn enqueue(&self, command: String) -> Result<(), ChannelError> {
        (**self).enqueue(command)
    }
}

impl<T: RealtimeChannel + ?Sized> RealtimeChannel for &T {
    fn enqueue(&self, command: String) -> Result<(), ChannelError> {
        (**self).enqueue(command)
    }
}

/// 基于 crossbeam 有界队列的实时通道
///
/// 使用非阻塞 `try_send`：队列满立即返回 `ChannelError::Full`，
/// 接收端（发送线程）退出后返回 `ChannelError::Closed`。
#[derive(Debug, Clone)]
pub struct QueueChannel {
    tx: Sender<String>,
}

impl QueueChannel {
    /// 创建容量为 `capacity` 的通道，返回 (通道, 接收端)
    ///
    /// 接收端交给发送线程消费。
    pub fn bounded(capacity: usize) -> (Self, Receiver<String>) {
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        (Self { tx }, rx)
    }

    /// 创建无界通道（用于离线渲染等不存在背压的场景）
    pub fn unbounded() -> (Self, Receiver<String>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }

    /// 当前排队的命令数
    pub fn len(&self) -> usize {
        self.tx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.is_empty()
    }
}

impl RealtimeChannel for QueueChannel {
    fn enqueue(&self, command: String) -> Result<(), ChannelError> {
        let bytes = command.len();
        self.tx.try_send(command).map_err(|e| match e {
            TrySendError::Full(_) => ChannelError::Full,
            TrySendError::Disconnected(_) => ChannelError::Closed,
        })?;
        trace!(bytes, "Command enqueued");
        Ok(())
    }
}
