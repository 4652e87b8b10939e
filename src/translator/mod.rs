//! 转译模块：规则 → 语法值
pub mod expr;
pub mod translator;

pub use self::expr::{CSharpString, Expr, Statement};
pub use self::translator::RuleTranslator;
