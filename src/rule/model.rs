//! 规则数据模型定义
//! 经过校验的强类型规则：类型/匹配策略均为封闭枚举，未知取值在加载阶段即被拒绝

use std::fmt;
use std::str::FromStr;

use crate::error::{RuleGenError, RuleGenResult};

/// 规则类型（匹配窗口的哪个属性）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Class,
    Exe,
    Title,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Class => "Class",
            RuleKind::Exe => "Exe",
            RuleKind::Title => "Title",
        }
    }

    /// 规则类型对应的窗口属性
    pub fn window_property(&self) -> WindowProperty {
        match self {
            RuleKind::Class => WindowProperty::WindowClass,
            RuleKind::Exe => WindowProperty::ProcessFileName,
            RuleKind::Title => WindowProperty::Title,
        }
    }
}

impl FromStr for RuleKind {
    type Err = RuleGenError;

    fn from_str(s: &str) -> RuleGenResult<Self> {
        match s {
            "Class" => Ok(RuleKind::Class),
            "Exe" => Ok(RuleKind::Exe),
            "Title" => Ok(RuleKind::Title),
            other => Err(RuleGenError::UnsupportedRuleError(format!(
                "未知规则类型：{}",
                other
            ))),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 生成代码中 window 对象的字符串属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowProperty {
    WindowClass,
    ProcessFileName,
    Title,
}

impl WindowProperty {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowProperty::WindowClass => "WindowClass",
            WindowProperty::ProcessFileName => "ProcessFileName",
            WindowProperty::Title => "Title",
        }
    }
}

impl fmt::Display for WindowProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 字符串比较方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringMethod {
    Equals,
    Contains,
    EndsWith,
    StartsWith,
}

impl StringMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            StringMethod::Equals => "Equals",
            StringMethod::Contains => "Contains",
            StringMethod::EndsWith => "EndsWith",
            StringMethod::StartsWith => "StartsWith",
        }
    }
}

impl fmt::Display for StringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 解析后的比较方式：Legacy 展开为 StartsWith || EndsWith
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Legacy,
    Method(StringMethod),
}

/// 源数据中的匹配策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchingStrategy {
    #[default]
    Legacy,
    Equals,
    Contains,
    EndsWith,
    StartsWith,
    DoesNotEqual,
    DoesNotContain,
    DoesNotEndWith,
    DoesNotStartWith,
}

/// 取反前缀
const NEGATION_PREFIX: &str = "DoesNot";

impl FromStr for MatchingStrategy {
    type Err = RuleGenError;

    fn from_str(s: &str) -> RuleGenResult<Self> {
        let strategy = match s {
            "Legacy" => MatchingStrategy::Legacy,
            "Equals" => MatchingStrategy::Equals,
            "Contains" => MatchingStrategy::Contains,
            "EndsWith" => MatchingStrategy::EndsWith,
            "StartsWith" => MatchingStrategy::StartsWith,
            "DoesNotEqual" => MatchingStrategy::DoesNotEqual,
            "DoesNotContain" => MatchingStrategy::DoesNotContain,
            "DoesNotEndWith" => MatchingStrategy::DoesNotEndWith,
            "DoesNotStartWith" => MatchingStrategy::DoesNotStartWith,
            other if other.starts_with(NEGATION_PREFIX) => {
                return Err(RuleGenError::UnsupportedRuleError(format!(
                    "无法取反的匹配策略：{}",
                    other
                )));
            }
            other => {
                return Err(RuleGenError::UnsupportedRuleError(format!(
                    "未知匹配策略：{}",
                    other
                )));
            }
        };
        Ok(strategy)
    }
}

impl MatchingStrategy {
    pub fn is_negated(&self) -> bool {
        matches!(
            self,
            MatchingStrategy::DoesNotEqual
                | MatchingStrategy::DoesNotContain
                | MatchingStrategy::DoesNotEndWith
                | MatchingStrategy::DoesNotStartWith
        )
    }

    /// 去掉取反前缀并转为复数动词形式，Exe 的 Legacy 视为 Equals
    pub fn resolve(&self, kind: RuleKind) -> ResolvedStrategy {
        let comparison = match self {
            MatchingStrategy::Legacy if kind == RuleKind::Exe => {
                Comparison::Method(StringMethod::Equals)
            }
            MatchingStrategy::Legacy => Comparison::Legacy,
            MatchingStrategy::Equals | MatchingStrategy::DoesNotEqual => {
                Comparison::Method(StringMethod::Equals)
            }
            MatchingStrategy::Contains | MatchingStrategy::DoesNotContain => {
                Comparison::Method(StringMethod::Contains)
            }
            MatchingStrategy::EndsWith | MatchingStrategy::DoesNotEndWith => {
                Comparison::Method(StringMethod::EndsWith)
            }
            MatchingStrategy::StartsWith | MatchingStrategy::DoesNotStartWith => {
                Comparison::Method(StringMethod::StartsWith)
            }
        };

        ResolvedStrategy {
            comparison,
            negated: self.is_negated(),
        }
    }
}

/// 匹配策略解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStrategy {
    pub comparison: Comparison,
    pub negated: bool,
}

/// 单条匹配规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRule {
    pub kind: RuleKind,
    pub id: String,
    pub strategy: MatchingStrategy,
}

impl MatchRule {
    /// 使用默认 Legacy 策略创建
    pub fn new(kind: RuleKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            strategy: MatchingStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: MatchingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn resolved(&self) -> ResolvedStrategy {
        self.strategy.resolve(self.kind)
    }
}

/// 单条规则，或按 AND 组合的规则组
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchGroup {
    Single(MatchRule),
    Composite(Vec<MatchRule>),
}

impl MatchGroup {
    pub fn rule_count(&self) -> usize {
        match self {
            MatchGroup::Single(_) => 1,
            MatchGroup::Composite(rules) => rules.len(),
        }
    }
}

/// 单个应用及其浮动窗口规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    pub name: String,
    pub float_identifiers: Option<Vec<MatchGroup>>,
}

/// 完整规则文档（保持源数据顺序）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleDocument {
    pub apps: Vec<AppEntry>,
}

impl RuleDocument {
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppEntry> {
        self.apps.iter()
    }

    /// 含 float_identifiers 的应用数
    pub fn floating_app_count(&self) -> usize {
        self.apps
            .iter()
            .filter(|app| app.float_identifiers.is_some())
            .count()
    }
}
