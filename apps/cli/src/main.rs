//! # UR CLI
//!
//! 离线渲染 UR 轨迹程序（不连接机器人）。
//!
//! ```bash
//! # 渲染轨迹文件，输出 URScript 到 stdout
//! ur-cli render trajectory.json --config driver.toml
//!
//! # 覆盖最大控制步长
//! ur-cli render trajectory.json --max-time-step 0.02
//!
//! # 检查配置文件
//! ur-cli config check driver.toml
//!
//! # 输出默认配置
//! ur-cli config default > driver.toml
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{ConfigCommand, RenderCommand};

/// UR CLI - 轨迹程序渲染工具
#[derive(Parser, Debug)]
#[command(name = "ur-cli")]
#[command(about = "Render UR trajectory programs without a robot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 配置管理
    #[command(subcommand)]
    Config(ConfigCommand),

    /// 渲染轨迹文件为 URScript 程序
    Render {
        #[command(flatten)]
        args: RenderCommand,
    },
}

fn main() -> Result<()> {
    // 日志输出到 stderr，stdout 只留给程序文本
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ur_cli=info,warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Config(cmd) => cmd.execute(),
        Commands::Render { args } => args.execute(),
    }
}
