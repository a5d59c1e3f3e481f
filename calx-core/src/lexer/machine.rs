//! 词法状态机
//!
//! 转移函数是 `(状态, 预读字符)` 的纯函数。数字与运算符都按最长匹配累积，
//! 预读字符类别改变或遇到输入结束时发出 token，触发字符不被消费。

use super::error::ErrorKind;
use super::token::Token;

/// 运算符字符集
pub const OPERATOR_CHARS: [char; 15] = [
    '+', '-', '*', '/', '$', '!', '&', '|', '^', '\\', '.', ',', '<', '>', '=',
];

/// 判断是否为运算符字符
pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

/// 预读字符的类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// 当前行或整个输入已结束
    End,
    Whitespace,
    /// ASCII 数字及其数值
    Digit(u8),
    Operator(char),
    Other(char),
}

impl CharClass {
    pub fn of(lookahead: Option<char>) -> Self {
        match lookahead {
            None => CharClass::End,
            Some(c) if c.is_whitespace() => CharClass::Whitespace,
            Some(c @ '0'..='9') => CharClass::Digit(c as u8 - b'0'),
            Some(c) if is_operator_char(c) => CharClass::Operator(c),
            Some(c) => CharClass::Other(c),
        }
    }
}

/// 状态机工作状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum State {
    /// 没有累积中的 token
    #[default]
    Start,
    /// 正在累积数字
    InNumber(u64),
    /// 正在累积运算符，非空
    InOperator(String),
}

/// 一次转移的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// 提交新状态并消费预读字符
    Next(State),
    /// 发出 token，不消费预读字符
    Emit(Token),
    /// 拒绝预读字符
    Reject(ErrorKind),
}

/// 转移函数
pub fn transition(state: &State, lookahead: Option<char>) -> Step {
    use CharClass::*;

    match (state, CharClass::of(lookahead)) {
        (_, Other(c)) => Step::Reject(ErrorKind::UnacceptableCharacter(c)),

        (State::Start, End | Whitespace) => Step::Next(State::Start),
        (State::Start, Digit(d)) => Step::Next(State::InNumber(u64::from(d))),
        (State::Start, Operator(c)) => Step::Next(State::InOperator(c.to_string())),

        (State::InNumber(n), Digit(d)) => match n
            .checked_mul(10)
            .and_then(|n| n.checked_add(u64::from(d)))
        {
            Some(value) => Step::Next(State::InNumber(value)),
            None => Step::Reject(ErrorKind::NumberOverflow),
        },
        (State::InNumber(n), End | Whitespace | Operator(_)) => Step::Emit(Token::number(*n)),

        (State::InOperator(op), Operator(c)) => {
            let mut op = op.clone();
            op.push(c);
            Step::Next(State::InOperator(op))
        }
        (State::InOperator(op), End | Whitespace | Digit(_)) => {
            Step::Emit(Token::operator(op.as_str()))
        }
    }
}
