//! 源代码位置追踪
//!
//! 行号、列号都是 1-based，列号按 Unicode 码点计数，用于错误显示。

use std::fmt;

/// 源代码坐标
///
/// `column` 指向下一个将被消费的字符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// 行号，1-based；尚未读取任何行时为 0
    pub line: usize,
    /// 列号，1-based，Unicode码点计数
    pub column: usize,
}

impl Coordinate {
    /// 创建新坐标
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// 读取第一行之前的位置
    pub fn before_input() -> Self {
        Self { line: 0, column: 1 }
    }

    /// 前进一个字符
    pub fn advance(&mut self) {
        self.column += 1;
    }

    /// 切换到下一行行首
    pub fn next_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::before_input()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
