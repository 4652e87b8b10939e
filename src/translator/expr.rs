//! 生成代码的语法值
//! 只描述规则含义，渲染统一交给 Display 实现

use std::fmt;

use crate::rule::model::{RuleKind, StringMethod, WindowProperty};

/// 生成代码中过滤器管理器的变量名
pub const FILTER_MANAGER: &str = "filterManager";
/// 谓词闭包的参数名
pub const WINDOW_PARAM: &str = "window";

/// C# 字符串字面量（转义反斜杠与双引号）
#[derive(Debug, Clone, Copy)]
pub struct CSharpString<'a>(pub &'a str);

impl fmt::Display for CSharpString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for ch in self.0.chars() {
            match ch {
                '\\' => f.write_str("\\\\")?,
                '"' => f.write_str("\\\"")?,
                c => write!(f, "{}", c)?,
            }
        }
        f.write_str("\"")
    }
}

/// 针对 window 的布尔表达式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// window.<P>.<M>("<id>")
    Call {
        property: WindowProperty,
        method: StringMethod,
        id: String,
    },
    /// (<lhs> || <rhs>)
    Or(Box<Expr>, Box<Expr>),
    /// 以 " && " 连接
    And(Vec<Expr>),
    /// !<inner>
    Not(Box<Expr>),
}

impl Expr {
    pub fn call(property: WindowProperty, method: StringMethod, id: impl Into<String>) -> Self {
        Expr::Call {
            property,
            method,
            id: id.into(),
        }
    }

    /// Legacy 匹配：前缀或后缀命中
    pub fn legacy(property: WindowProperty, id: &str) -> Self {
        Expr::Or(
            Box::new(Expr::call(property, StringMethod::StartsWith, id)),
            Box::new(Expr::call(property, StringMethod::EndsWith, id)),
        )
    }

    pub fn negate(self) -> Self {
        Expr::Not(Box::new(self))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Call {
                property,
                method,
                id,
            } => write!(f, "{}.{}.{}({})", WINDOW_PARAM, property, method, CSharpString(id)),
            Expr::Or(lhs, rhs) => write!(f, "({} || {})", lhs, rhs),
            Expr::And(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" && ")?;
                    }
                    write!(f, "{}", member)?;
                }
                Ok(())
            }
            // 多成员的 And 取反需要括号
            Expr::Not(inner) => match inner.as_ref() {
                Expr::And(members) if members.len() > 1 => write!(f, "!({})", inner),
                _ => write!(f, "!{}", inner),
            },
        }
    }
}

/// 一条完整的过滤器注册语句
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// filterManager.Add<Kind>Filter("<id>");
    Register { kind: RuleKind, id: String },
    /// filterManager.Add((window) => <expr>);
    Predicate(Expr),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Register { kind, id } => {
                write!(f, "{}.Add{}Filter({});", FILTER_MANAGER, kind, CSharpString(id))
            }
            Statement::Predicate(expr) => {
                write!(f, "{}.Add(({}) => {});", FILTER_MANAGER, WINDOW_PARAM, expr)
            }
        }
    }
}
