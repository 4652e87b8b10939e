//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::{RuleGenError, RuleGenResult};

/// komorebi 官方应用规则库地址
pub const DEFAULT_RULES_URL: &str = "https://raw.githubusercontent.com/LGUG2Z/komorebi-application-specific-configuration/master/applications.yaml";

/// 规则来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOrigin {
    Remote(String),     // 远程 URL（下载后写入缓存文件）
    LocalFile(PathBuf), // 本地 YAML 文件（例如上次运行留下的缓存）
}

/// 生成代码的排版风格
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitStyle {
    /// 规则语句缩进
    pub indent: String,
    /// 应用名注释前缀
    pub comment: String,
}

impl EmitStyle {
    pub const TAB_INDENT: &'static str = "\t\t";
    pub const SPACE_INDENT: &'static str = "        ";
    pub const LINE_COMMENT: &'static str = "// ";
    pub const DOC_COMMENT: &'static str = "/// ";

    /// 使用 8 个空格代替两个制表符
    pub fn with_spaces(mut self) -> Self {
        self.indent = Self::SPACE_INDENT.to_string();
        self
    }

    /// 应用名注释改用 `/// `
    pub fn with_doc_comments(mut self) -> Self {
        self.comment = Self::DOC_COMMENT.to_string();
        self
    }
}

impl Default for EmitStyle {
    fn default() -> Self {
        Self {
            indent: Self::TAB_INDENT.to_string(),
            comment: Self::LINE_COMMENT.to_string(),
        }
    }
}

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 规则来源
    pub origin: RuleOrigin,
    // 下载规则的本地缓存路径
    pub rule_cache_path: PathBuf,
    // 生成文件路径（每次运行覆盖）
    pub output_path: PathBuf,
    // HTTP 超时（单位：秒），None 表示不设置
    pub http_timeout: Option<u64>,
    // 输出排版
    pub style: EmitStyle,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            origin: RuleOrigin::Remote(DEFAULT_RULES_URL.to_string()),
            rule_cache_path: PathBuf::from("komorebi_rules.yaml"),
            output_path: PathBuf::from("DefaultFilteredWindowsKomorebi.g.cs"),
            http_timeout: None,
            style: EmitStyle::default(),
            verbose: false,
        }
    }
}

impl GlobalConfig {
    pub fn http_timeout_duration(&self) -> Option<Duration> {
        self.http_timeout.map(Duration::from_secs)
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    /// 远程规则源，仅接受 http/https
    pub fn remote_url(mut self, raw_url: &str) -> RuleGenResult<Self> {
        let url = Url::parse(raw_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RuleGenError::InvalidInput(format!(
                "规则源仅支持 http/https：{}",
                raw_url
            )));
        }
        self.config.origin = RuleOrigin::Remote(url.to_string());
        Ok(self)
    }

    pub fn local_file(mut self, path: PathBuf) -> Self {
        self.config.origin = RuleOrigin::LocalFile(path);
        self
    }

    pub fn rule_cache_path(mut self, path: PathBuf) -> Self {
        self.config.rule_cache_path = path;
        self
    }

    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.config.output_path = path;
        self
    }

    pub fn http_timeout(mut self, timeout: Option<u64>) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn style(mut self, style: EmitStyle) -> Self {
        self.config.style = style;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
