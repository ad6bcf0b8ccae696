//! 数值格式化工具

use std::fmt;

/// 关节列表：`[v0, v1, …]`，每个值固定小数位
pub(crate) struct JointList<'a> {
    values: &'a [f64],
    precision: usize,
}

impl<'a> JointList<'a> {
    pub(crate) fn new(values: &'a [f64], precision: usize) -> Self {
        Self { values, precision }
    }
}

impl fmt::Display for JointList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:.*}", self.precision, value)?;
        }
        f.write_str("]")
    }
}

/// URScript 布尔字面量
pub(crate) fn script_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
