//! # UR Script
//!
//! URScript 指令文本渲染（无 IO、无状态）
//!
//! ## 模块
//!
//! - `block`: 程序块（`def name():` / `sec name():` … `end`）
//! - `motion`: 运动语句（`servoj` / `speedj` / `stopj`）
//! - `output`: IO 输出语句（`set_tool_voltage` / `set_digital_out` / …）
//!
//! ## 格式约定
//!
//! 文本会被控制器脚本解释器直接执行，字段精度属于协议的一部分，必须逐字节一致：
//!
//! | 字段 | 精度 |
//! |------|------|
//! | `servoj` 关节目标 / `t=` | 5 位小数 |
//! | `speedj` 关节速度 | 5 位小数 |
//! | `speedj` 加速度 | 6 位小数 |
//! | `set_analog_out` 值 | 4 位小数 |
//! | `set_payload` 质量 | 3 位小数 |
//!
//! ## 示例
//!
//! ```rust
//! use ur_script::{ServoJ, TrajectoryProgram};
//!
//! let mut program = TrajectoryProgram::new();
//! program.push_servo(ServoJ::new(&[0.0, 0.1, 0.2, 0.3, 0.4, 0.5], 0.008));
//! assert_eq!(
//!     program.finish(),
//!     "def traj():\n\tservoj([0.00000, 0.10000, 0.20000, 0.30000, 0.40000, 0.50000], t=0.00800)\nend\n"
//! );
//! ```

pub mod block;
mod format;
pub mod motion;
pub mod output;

// 重新导出常用类型
pub use block::{BlockKind, ScriptBlock, TrajectoryProgram, line};
pub use motion::{ServoJ, SpeedJ, StopJ};
pub use output::OutputCommand;

/// 轨迹程序块名称
pub const TRAJECTORY_PROGRAM_NAME: &str = "traj";

/// IO 输出程序块名称
pub const OUTPUT_PROGRAM_NAME: &str = "setOut";
