//! komorebi 原始规则模型
//! 仅存放 applications.yaml 的原始结构，kind / matching_strategy 保持字符串，由解析器负责校验

use serde::Deserialize;

/// komorebi 原始匹配规则
#[derive(Debug, Clone, Deserialize)]
pub struct KomorebiOriginalRule {
    pub kind: String,
    pub id: String,
    #[serde(default)] // 缺省时按 Legacy 处理
    pub matching_strategy: Option<String>,
}

/// 单条规则或规则组（YAML 中为映射或序列）
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum KomorebiOriginalIdentifier {
    Single(KomorebiOriginalRule),
    Composite(Vec<KomorebiOriginalRule>),
}

/// komorebi 原始应用记录，其余字段（manage_identifiers 等）忽略
#[derive(Debug, Clone, Deserialize)]
pub struct KomorebiOriginalApp {
    pub name: String,
    #[serde(default)]
    pub float_identifiers: Option<Vec<KomorebiOriginalIdentifier>>,
}

/// komorebi 原始应用列表
pub type KomorebiOriginalAppList = Vec<KomorebiOriginalApp>;
