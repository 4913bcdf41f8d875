//! 页面与组件标识符
//!
//! 编辑器导出的 id 通常是整数，手写 manifest 中也常见字符串 id，
//! 两者都原样保留，不做互相转换（`1` 与 `"1"` 是不同的 id）。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 整数或字符串标识符
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ident {
    /// 整数 id（编辑器导出）
    Int(i64),
    /// 字符串 id
    Name(String),
}

/// 页面 id
pub type PageId = Ident;

/// 组件 id（仅在所属页面内唯一）
pub type ComponentId = Ident;

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ident::Int(n) => write!(f, "{}", n),
            Ident::Name(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Ident {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

impl From<String> for Ident {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

/// 命令行/宿主事件中的 id：能解析为整数时视为整数
impl FromStr for Ident {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<i64>() {
            Ok(n) => Self::Int(n),
            Err(_) => Self::Name(s.trim().to_string()),
        })
    }
}
