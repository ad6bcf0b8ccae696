//! Mock 实时通道
//!
//! 记录每次入队的命令块，可切换为模拟传输失败。

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use ur_driver::{ChannelError, RealtimeChannel};

/// 记录型通道
#[derive(Default)]
pub struct RecordingChannel {
    commands: Mutex<Vec<String>>,
    enqueue_calls: AtomicUsize,
    fail: AtomicBool,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// 之后的入队全部返回 `ChannelError::Closed`
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// 入队调用次数（包括失败的调用）
    pub fn enqueue_calls(&self) -> usize {
        self.enqueue_calls.load(Ordering::SeqCst)
    }

    /// 成功入队的命令块
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

impl RealtimeChannel for RecordingChannel {
    fn enqueue(&self, command: String) -> Result<(), ChannelError> {
        self.enqueue_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(ChannelError::Closed);
        }
        self.commands.lock().unwrap().push(command);
        Ok(())
    }
}

/// 安装测试日志（多次调用安全）
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
