//! 轨迹渲染命令
//!
//! 读取 JSON 轨迹文件，经驱动生成 URScript 程序，输出到 stdout。
//!
//! 文件格式：
//!
//! ```json
//! {
//!   "timestamps": [0.0, 1.0],
//!   "positions": [[0, 0, 0, 0, 0, 0], [1, 1, 1, 1, 1, 1]],
//!   "velocities": [[0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0, 0]]
//! }
//! ```

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use ur_sdk::{DriverConfig, QueueChannel, UrDriver};

/// 轨迹文件（三列形式）
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrajectoryFile {
    pub timestamps: Vec<f64>,
    pub positions: Vec<Vec<f64>>,
    pub velocities: Vec<Vec<f64>>,
}

impl TrajectoryFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取轨迹文件失败: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("解析轨迹文件失败: {}", path.display()))
    }
}

/// 渲染命令参数
#[derive(Args, Debug)]
pub struct RenderCommand {
    /// 轨迹文件路径（JSON）
    pub trajectory: PathBuf,

    /// 驱动配置文件（TOML），缺省使用默认配置
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 覆盖配置中的最大时间步长（秒）
    #[arg(long)]
    pub max_time_step: Option<f64>,

    /// 在轨迹程序之后追加 `stopj`
    #[arg(long)]
    pub stop: bool,
}

impl RenderCommand {
    pub fn execute(self) -> Result<()> {
        let mut config = match &self.config {
            Some(path) => DriverConfig::load_from_file(path)
                .with_context(|| format!("加载配置失败: {}", path.display()))?,
            None => DriverConfig::default(),
        };
        if let Some(step) = self.max_time_step {
            config.max_time_step = step;
        }

        let file = TrajectoryFile::load(&self.trajectory)?;

        // 离线渲染：无界队列，渲染完成后一次性取出
        let (channel, rx) = QueueChannel::unbounded();
        let driver = UrDriver::new(channel, config).context("驱动配置无效")?;

        driver
            .add_trajectory(&file.timestamps, &file.positions, &file.velocities)
            .context("轨迹渲染失败")?;
        if self.stop {
            driver.stop_trajectory()?;
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let mut blocks = 0usize;
        for command in rx.try_iter() {
            out.write_all(command.as_bytes())?;
            blocks += 1;
        }
        out.flush()?;

        info!(
            waypoints = file.timestamps.len(),
            blocks,
            "Trajectory rendered"
        );
        Ok(())
    }
}
