//! komorebi-rulegen - 将 komorebi 应用规则库转译为 Whim 过滤器注册代码

// 导出全局错误类型
pub use self::error::{RuleGenError, RuleGenResult};

// 导出配置模块
pub use self::config::{
    ConfigManager, CustomConfigBuilder, DEFAULT_RULES_URL, EmitStyle, GlobalConfig, RuleOrigin,
};

// 导出规则模块核心接口
pub use self::rule::{
    AppEntry, MatchGroup, MatchRule, MatchingStrategy, RuleCacheManager, RuleDocument, RuleKind,
    RuleLoader, RuleParser,
};

// 导出转译模块核心接口
pub use self::translator::{Expr, RuleTranslator, Statement};

// 导出输出模块核心接口
pub use self::emitter::{Emitter, GenerationContext, GenerationReport};

// 导出生成流水线
pub use self::generator::RuleGenerator;

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod translator;
pub mod emitter;
pub mod generator;
