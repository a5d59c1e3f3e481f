//! 行源抽象
//!
//! 按需产出文本行的惰性、只进序列。每次调用返回下一行（不含换行符），
//! `Ok(None)` 表示输入真正结束，I/O 失败通过 `Err` 返回，二者不混淆。

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// 行源 trait
pub trait LineSource {
    /// 读取下一行
    ///
    /// # Returns
    /// - `Ok(Some(line))` - 下一行，已去掉行尾的 `\n` / `\r\n`
    /// - `Ok(None)` - 输入已结束
    /// - `Err(e)` - 底层读取失败
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}

/// 从任意 `BufRead` 逐行读取
///
/// ```
/// use calx_core::lexer::{LineSource, ReaderLines};
///
/// let mut lines = ReaderLines::new("1 + 2\r\n3\n".as_bytes());
/// assert_eq!(lines.next_line().unwrap(), Some("1 + 2".to_string()));
/// assert_eq!(lines.next_line().unwrap(), Some("3".to_string()));
/// assert_eq!(lines.next_line().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct ReaderLines<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }

    /// 取回底层 reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        // read_line 遇到非法 UTF-8 时返回 InvalidData
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_terminator(&self.buf).to_string()))
    }
}

/// 内存中的行序列
#[derive(Debug, Clone, Default)]
pub struct MemoryLines {
    lines: VecDeque<String>,
}

impl MemoryLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// 按与 [`ReaderLines`] 相同的规则把文本切分成行
    pub fn from_text(text: &str) -> Self {
        Self::new(text.split_inclusive('\n').map(strip_terminator))
    }

    /// 剩余行数
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for MemoryLines {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
