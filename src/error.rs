//! 全局错误类型定义

use serde_yaml::Error as SerdeYamlError;
use std::io::Error as IoError;
use thiserror::Error;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum RuleGenError {
    // 规则源相关错误
    #[error("网络请求失败：{0}")]
    NetworkError(String),
    #[error("规则解析失败：{0}")]
    ParseError(String),
    #[error("不支持的规则：{0}")]
    UnsupportedRuleError(String),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

impl From<SerdeYamlError> for RuleGenError {
    fn from(e: SerdeYamlError) -> Self {
        RuleGenError::ParseError(e.to_string())
    }
}

// 全局Result类型
pub type RuleGenResult<T> = Result<T, RuleGenError>;
