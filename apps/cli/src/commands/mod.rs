//! 命令定义和实现

pub mod config;
pub mod render;

pub use config::ConfigCommand;
pub use render::RenderCommand;
