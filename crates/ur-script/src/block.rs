//! 程序块
//!
//! 控制器把一个程序块当作一个整体执行，因此程序块只能整体构建、整体交付：
//! `finish()` 消费构建器并返回完整文本，不存在"半个程序块"。

use crate::motion::ServoJ;
use crate::TRAJECTORY_PROGRAM_NAME;
use std::fmt::{self, Write};

/// 程序块类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// 主程序（`def`），会替换控制器上当前运行的程序
    Def,
    /// 次级程序（`sec`），与主程序并行执行，不能包含运动指令
    Sec,
}

impl BlockKind {
    fn keyword(self) -> &'static str {
        match self {
            BlockKind::Def => "def",
            BlockKind::Sec => "sec",
        }
    }
}

/// 程序块构建器
///
/// ```text
/// def traj():
/// \t<statement>
/// \t<statement>
/// end
/// ```
#[derive(Debug, Clone)]
pub struct ScriptBlock {
    kind: BlockKind,
    text: String,
    statements: usize,
}

impl ScriptBlock {
    pub fn new(kind: BlockKind, name: &str) -> Self {
        let mut text = String::with_capacity(64);
        // 写入 String 不会失败
        let _ = writeln!(text, "{} {}():", kind.keyword(), name);
        Self {
            kind,
            text,
            statements: 0,
        }
    }

    /// 创建主程序块
    pub fn def(name: &str) -> Self {
        Self::new(BlockKind::Def, name)
    }

    /// 创建次级程序块
    pub fn sec(name: &str) -> Self {
        Self::new(BlockKind::Sec, name)
    }

    /// 追加一条语句（自动缩进并换行）
    pub fn push(&mut self, statement: impl fmt::Display) -> &mut Self {
        let _ = writeln!(self.text, "\t{}", statement);
        self.statements += 1;
        self
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// 已追加的语句数量
    pub fn statement_count(&self) -> usize {
        self.statements
    }

    /// 结束程序块，返回完整文本
    pub fn finish(mut self) -> String {
        self.text.push_str("end\n");
        self.text
    }
}

/// 轨迹程序：`def traj():` 包裹的一串 `servoj` 语句
#[derive(Debug, Clone)]
pub struct TrajectoryProgram {
    block: ScriptBlock,
}

impl TrajectoryProgram {
    pub fn new() -> Self {
        Self {
            block: ScriptBlock::def(TRAJECTORY_PROGRAM_NAME),
        }
    }

    /// 预分配文本容量（每条 `servoj` 约 90 字节）
    pub fn with_capacity(statements: usize) -> Self {
        let mut program = Self::new();
        program.block.text.reserve(statements * 90 + 4);
        program
    }

    pub fn push_servo(&mut self, servo: ServoJ<'_>) -> &mut Self {
        self.block.push(servo);
        self
    }

    pub fn statement_count(&self) -> usize {
        self.block.statement_count()
    }

    pub fn finish(self) -> String {
        self.block.finish()
    }
}

impl Default for TrajectoryProgram {
    fn default() -> Self {
        Self::new()
    }
}

/// 单行指令（不包裹程序块），如 `stopj(10)\n`
pub fn line(statement: impl fmt::Display) -> String {
    format!("{}\n", statement)
}
