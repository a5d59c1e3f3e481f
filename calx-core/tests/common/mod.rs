//! 测试辅助工具

#![allow(dead_code)]

use calx_core::lexer::{Lexer, LexerError, LineSource, MemoryLines, ReaderLines, Token};
use std::io;

/// 把多行输入（按给定的行切分）完整分析成 token 序列
pub fn lex_lines(lines: &[&str]) -> Result<Vec<Token>, LexerError> {
    lex_source(MemoryLines::new(lines.iter().copied()))
}

/// 经由 `BufRead` 路径分析文本
pub fn lex_reader(text: &str) -> Result<Vec<Token>, LexerError> {
    lex_source(ReaderLines::new(text.as_bytes()))
}

pub fn lex_source<S: LineSource>(source: S) -> Result<Vec<Token>, LexerError> {
    Lexer::new(source).tokens().collect()
}

pub fn num(value: u64) -> Token {
    Token::number(value)
}

pub fn op(text: &str) -> Token {
    Token::operator(text)
}

/// 先产出给定的行，然后读取失败
pub struct FailingSource {
    lines: std::vec::IntoIter<String>,
}

impl FailingSource {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl LineSource for FailingSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        match self.lines.next() {
            Some(line) => Ok(Some(line)),
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "connection reset")),
        }
    }
}
