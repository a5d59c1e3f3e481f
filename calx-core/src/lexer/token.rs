//! Token 定义

use std::fmt;

use serde::Serialize;

/// 词法单元
///
/// 序列化为带 `tag` 字段的对象：
/// `{"tag":"number","value":12}` / `{"tag":"operator","operator":"+"}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
pub enum Token {
    /// 非负整数
    Number { value: u64 },
    /// 连续运算符字符组成的符号，非空
    Operator { operator: String },
}

impl Token {
    pub fn number(value: u64) -> Self {
        Token::Number { value }
    }

    pub fn operator(operator: impl Into<String>) -> Self {
        Token::Operator {
            operator: operator.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number { value } => write!(f, "Number({value})"),
            Token::Operator { operator } => write!(f, "Operator({operator:?})"),
        }
    }
}
