//! komorebi 规则解析器
//! YAML 字节 → 原始模型 → 强类型 RuleDocument

use tracing::debug;

use super::model::{AppEntry, MatchGroup, MatchRule, MatchingStrategy, RuleDocument, RuleKind};
use super::original::{
    KomorebiOriginalApp, KomorebiOriginalAppList, KomorebiOriginalIdentifier, KomorebiOriginalRule,
};
use crate::error::{RuleGenError, RuleGenResult};

/// 规则文档解析器
#[derive(Debug, Clone, Default)]
pub struct RuleParser;

impl RuleParser {
    /// 从字节流解析并校验规则文档
    pub fn parse_from_bytes(&self, bytes: &[u8]) -> RuleGenResult<RuleDocument> {
        let original: KomorebiOriginalAppList = serde_yaml::from_slice(bytes).map_err(|e| {
            let preview = String::from_utf8_lossy(&bytes[..bytes.len().min(200)]);
            debug!("YAML 解析失败，前 200 字节: {}", preview);
            RuleGenError::from(e)
        })?;

        debug!("原始规则解析成功，应用数：{}", original.len());
        self.convert(original)
    }

    pub fn parse_from_str(&self, content: &str) -> RuleGenResult<RuleDocument> {
        self.parse_from_bytes(content.as_bytes())
    }

    /// 原始模型 → 强类型模型，遇到未知规则立即失败
    pub fn convert(&self, original: KomorebiOriginalAppList) -> RuleGenResult<RuleDocument> {
        let apps = original
            .into_iter()
            .map(|app| self.convert_app(app))
            .collect::<RuleGenResult<Vec<_>>>()?;

        Ok(RuleDocument { apps })
    }

    fn convert_app(&self, app: KomorebiOriginalApp) -> RuleGenResult<AppEntry> {
        let float_identifiers = match app.float_identifiers {
            Some(identifiers) => Some(
                identifiers
                    .into_iter()
                    .map(|identifier| self.convert_identifier(&app.name, identifier))
                    .collect::<RuleGenResult<Vec<_>>>()?,
            ),
            None => None,
        };

        Ok(AppEntry {
            name: app.name,
            float_identifiers,
        })
    }

    fn convert_identifier(
        &self,
        app_name: &str,
        identifier: KomorebiOriginalIdentifier,
    ) -> RuleGenResult<MatchGroup> {
        match identifier {
            KomorebiOriginalIdentifier::Single(rule) => {
                Ok(MatchGroup::Single(self.convert_rule(app_name, rule)?))
            }
            KomorebiOriginalIdentifier::Composite(rules) => {
                if rules.is_empty() {
                    return Err(RuleGenError::UnsupportedRuleError(format!(
                        "[{}] 组合规则为空",
                        app_name
                    )));
                }
                let rules = rules
                    .into_iter()
                    .map(|rule| self.convert_rule(app_name, rule))
                    .collect::<RuleGenResult<Vec<_>>>()?;
                Ok(MatchGroup::Composite(rules))
            }
        }
    }

    fn convert_rule(&self, app_name: &str, rule: KomorebiOriginalRule) -> RuleGenResult<MatchRule> {
        let kind: RuleKind = rule.kind.parse().map_err(|e| with_app(app_name, e))?;
        let strategy = match rule.matching_strategy.as_deref() {
            Some(raw) => raw
                .parse::<MatchingStrategy>()
                .map_err(|e| with_app(app_name, e))?,
            None => MatchingStrategy::default(),
        };

        Ok(MatchRule {
            kind,
            id: rule.id,
            strategy,
        })
    }
}

/// 在错误信息前补充应用名
fn with_app(app_name: &str, err: RuleGenError) -> RuleGenError {
    match err {
        RuleGenError::UnsupportedRuleError(msg) => {
            RuleGenError::UnsupportedRuleError(format!("[{}] {}", app_name, msg))
        }
        other => other,
    }
}
