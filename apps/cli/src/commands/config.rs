//! 配置管理命令
//!
//! 检查驱动配置文件，或输出默认配置作为模板。

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::PathBuf;
use ur_sdk::DriverConfig;

/// 配置命令
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// 加载并校验配置文件，输出生效后的配置
    Check {
        /// 配置文件路径（TOML）
        path: PathBuf,
    },

    /// 输出默认配置
    Default,
}

impl ConfigCommand {
    pub fn execute(self) -> Result<()> {
        match self {
            ConfigCommand::Check { path } => Self::check_(path),

            ConfigCommand::Default => Self::default_(),
        }
    }

    fn check_(path: PathBuf) -> Result<()> {
        let config = DriverConfig::load_from_file(&path)
            .with_context(|| format!("配置无效: {}", path.display()))?;

        eprintln!("✅ 配置有效: {}", path.display());
        print!("{}", config.to_toml_string()?);
        Ok(())
    }

    fn default_() -> Result<()> {
        print!("{}", DriverConfig::default().to_toml_string()?);
        Ok(())
    }
}
