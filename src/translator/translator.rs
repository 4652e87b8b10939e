//! 规则转译器
//! MatchRule / MatchGroup / AppEntry → Statement，保持源数据顺序

use crate::rule::model::{AppEntry, Comparison, MatchGroup, MatchRule, StringMethod};

use super::expr::{Expr, Statement};

/// 规则转译器（无状态）
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTranslator;

impl RuleTranslator {
    pub fn new() -> Self {
        Self
    }

    /// 转译单条规则
    ///
    /// 非组合、未取反的 Equals 规则使用 `Add<Kind>Filter` 简写，其余一律生成谓词
    pub fn translate_rule(&self, rule: &MatchRule, composite: bool) -> Statement {
        let resolved = rule.resolved();
        let is_plain_equals = resolved.comparison == Comparison::Method(StringMethod::Equals)
            && !resolved.negated;

        if is_plain_equals && !composite {
            return Statement::Register {
                kind: rule.kind,
                id: rule.id.clone(),
            };
        }

        Statement::Predicate(self.rule_expr(rule))
    }

    /// 规则对应的布尔表达式（不使用简写）
    pub fn rule_expr(&self, rule: &MatchRule) -> Expr {
        let resolved = rule.resolved();
        let property = rule.kind.window_property();

        let expr = match resolved.comparison {
            Comparison::Method(method) => Expr::call(property, method, rule.id.as_str()),
            Comparison::Legacy => Expr::legacy(property, &rule.id),
        };

        if resolved.negated { expr.negate() } else { expr }
    }

    /// 转译规则组：组合规则以 && 连接为一个谓词
    pub fn translate_group(&self, group: &MatchGroup) -> Statement {
        match group {
            MatchGroup::Single(rule) => self.translate_rule(rule, false),
            MatchGroup::Composite(rules) => Statement::Predicate(Expr::And(
                rules.iter().map(|rule| self.rule_expr(rule)).collect(),
            )),
        }
    }

    /// 转译应用的全部 float_identifiers
    pub fn translate_app(&self, app: &AppEntry) -> Vec<Statement> {
        app.float_identifiers
            .iter()
            .flatten()
            .map(|group| self.translate_group(group))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::model::{MatchingStrategy, RuleKind};

    fn render(statement: Statement) -> String {
        statement.to_string()
    }

    #[test]
    fn test_exe_without_strategy_uses_shorthand() {
        let rule = MatchRule::new(RuleKind::Exe, "notepad.exe");
        assert_eq!(
            render(RuleTranslator.translate_rule(&rule, false)),
            r#"filterManager.AddExeFilter("notepad.exe");"#
        );
    }

    #[test]
    fn test_equals_shorthand_for_every_kind() {
        for (kind, expected) in [
            (RuleKind::Class, r#"filterManager.AddClassFilter("x");"#),
            (RuleKind::Exe, r#"filterManager.AddExeFilter("x");"#),
            (RuleKind::Title, r#"filterManager.AddTitleFilter("x");"#),
        ] {
            let rule = MatchRule::new(kind, "x").with_strategy(MatchingStrategy::Equals);
            assert_eq!(render(RuleTranslator.translate_rule(&rule, false)), expected);
        }
    }

    #[test]
    fn test_negated_contains_wrapped_in_predicate() {
        let rule = MatchRule::new(RuleKind::Title, "Settings")
            .with_strategy(MatchingStrategy::DoesNotContain);
        assert_eq!(RuleTranslator.rule_expr(&rule).to_string(), r#"!window.Title.Contains("Settings")"#);
        assert_eq!(
            render(RuleTranslator.translate_rule(&rule, false)),
            r#"filterManager.Add((window) => !window.Title.Contains("Settings"));"#
        );
    }

    #[test]
    fn test_negation_equals_not_of_plain_verb() {
        let pairs = [
            (MatchingStrategy::DoesNotEqual, MatchingStrategy::Equals),
            (MatchingStrategy::DoesNotContain, MatchingStrategy::Contains),
            (MatchingStrategy::DoesNotEndWith, MatchingStrategy::EndsWith),
            (MatchingStrategy::DoesNotStartWith, MatchingStrategy::StartsWith),
        ];

        for kind in [RuleKind::Class, RuleKind::Exe, RuleKind::Title] {
            for (negated, plain) in pairs {
                let negated_rule = MatchRule::new(kind, "id").with_strategy(negated);
                let plain_rule = MatchRule::new(kind, "id").with_strategy(plain);
                assert_eq!(
                    RuleTranslator.rule_expr(&negated_rule).to_string(),
                    format!("!{}", RuleTranslator.rule_expr(&plain_rule))
                );
            }
        }
    }

    #[test]
    fn test_does_not_equal_never_uses_shorthand() {
        let rule = MatchRule::new(RuleKind::Exe, "a.exe").with_strategy(MatchingStrategy::DoesNotEqual);
        assert_eq!(
            render(RuleTranslator.translate_rule(&rule, false)),
            r#"filterManager.Add((window) => !window.ProcessFileName.Equals("a.exe"));"#
        );
    }

    #[test]
    fn test_legacy_for_class_and_title_expands_to_disjunction() {
        let rule = MatchRule::new(RuleKind::Class, "Chrome_WidgetWin_1");
        assert_eq!(
            render(RuleTranslator.translate_rule(&rule, false)),
            r#"filterManager.Add((window) => (window.WindowClass.StartsWith("Chrome_WidgetWin_1") || window.WindowClass.EndsWith("Chrome_WidgetWin_1")));"#
        );

        let rule = MatchRule::new(RuleKind::Title, "Picture-in-Picture");
        assert_eq!(
            RuleTranslator.rule_expr(&rule).to_string(),
            r#"(window.Title.StartsWith("Picture-in-Picture") || window.Title.EndsWith("Picture-in-Picture"))"#
        );
    }

    #[test]
    fn test_legacy_exe_in_composite_renders_equals_call() {
        let rule = MatchRule::new(RuleKind::Exe, "a.exe");
        assert_eq!(
            render(RuleTranslator.translate_rule(&rule, true)),
            r#"filterManager.Add((window) => window.ProcessFileName.Equals("a.exe"));"#
        );
    }

    #[test]
    fn test_composite_group_joined_with_and() {
        let group = MatchGroup::Composite(vec![
            MatchRule::new(RuleKind::Exe, "a.exe"),
            MatchRule::new(RuleKind::Title, "b").with_strategy(MatchingStrategy::Contains),
        ]);
        assert_eq!(
            render(RuleTranslator.translate_group(&group)),
            r#"filterManager.Add((window) => window.ProcessFileName.Equals("a.exe") && window.Title.Contains("b"));"#
        );
    }

    #[test]
    fn test_single_member_composite_never_shorthand() {
        let group = MatchGroup::Composite(vec![
            MatchRule::new(RuleKind::Class, "x").with_strategy(MatchingStrategy::Equals),
        ]);
        assert_eq!(
            render(RuleTranslator.translate_group(&group)),
            r#"filterManager.Add((window) => window.WindowClass.Equals("x"));"#
        );
    }

    #[test]
    fn test_translate_app_keeps_source_order() {
        let app = AppEntry {
            name: "Demo".to_string(),
            float_identifiers: Some(vec![
                MatchGroup::Single(MatchRule::new(RuleKind::Title, "z")),
                MatchGroup::Single(MatchRule::new(RuleKind::Exe, "a.exe")),
            ]),
        };
        let statements: Vec<String> = RuleTranslator
            .translate_app(&app)
            .into_iter()
            .map(render)
            .collect();
        assert_eq!(
            statements,
            vec![
                r#"filterManager.Add((window) => (window.Title.StartsWith("z") || window.Title.EndsWith("z")));"#.to_string(),
                r#"filterManager.AddExeFilter("a.exe");"#.to_string(),
            ]
        );

        let empty = AppEntry {
            name: "None".to_string(),
            float_identifiers: None,
        };
        assert!(RuleTranslator.translate_app(&empty).is_empty());
    }
}
