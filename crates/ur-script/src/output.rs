//! IO 输出语句
//!
//! 每条输出语句都包裹在 `sec setOut():` 次级程序块中单独发送，
//! 不打断正在执行的主程序。

use crate::OUTPUT_PROGRAM_NAME;
use crate::block::ScriptBlock;
use crate::format::script_bool;
use std::fmt;

/// IO 输出指令
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputCommand {
    /// 工具端供电电压（V）
    ToolVoltage(u32),
    /// 数字输出
    DigitalOut { pin: u32, value: bool },
    /// 模拟输出
    AnalogOut { pin: u32, value: f64 },
    /// 控制器内部标志位
    Flag { index: u32, value: bool },
    /// 末端负载质量（kg）
    Payload(f64),
}

impl OutputCommand {
    /// 渲染为完整的 `sec setOut()` 程序块
    pub fn to_program(&self) -> String {
        let mut block = ScriptBlock::sec(OUTPUT_PROGRAM_NAME);
        block.push(self);
        block.finish()
    }
}

impl fmt::Display for OutputCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            OutputCommand::ToolVoltage(volts) => write!(f, "set_tool_voltage({})", volts),
            OutputCommand::DigitalOut { pin, value } => {
                write!(f, "set_digital_out({}, {})", pin, script_bool(value))
            },
            OutputCommand::AnalogOut { pin, value } => {
                write!(f, "set_analog_out({}, {:.4})", pin, value)
            },
            OutputCommand::Flag { index, value } => {
                write!(f, "set_flag({}, {})", index, script_bool(value))
            },
            OutputCommand::Payload(mass) => write!(f, "set_payload({:.3})", mass),
        }
    }
}
