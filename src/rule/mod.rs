//! 规则模块：负责规则的加载、缓存、解析与数据模型定义
pub mod model;
pub mod original;
pub mod parser;
pub mod cache;
pub mod loader;

// 导出核心接口
pub use self::model::{
    AppEntry, Comparison, MatchGroup, MatchRule, MatchingStrategy, ResolvedStrategy,
    RuleDocument, RuleKind, StringMethod, WindowProperty,
};
pub use self::parser::RuleParser;
pub use self::loader::RuleLoader;
pub use self::cache::RuleCacheManager;
