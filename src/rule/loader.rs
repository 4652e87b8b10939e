//! 规则加载管理器
//! 负责从远程拉取规则库（落盘缓存后解析）或直接读取本地规则文件

use std::path::Path;

use reqwest::Client;
use tracing::{debug, info};

use super::cache::RuleCacheManager;
use super::model::RuleDocument;
use super::parser::RuleParser;
use crate::config::{GlobalConfig, RuleOrigin};
use crate::error::{RuleGenError, RuleGenResult};

const USER_AGENT: &str = concat!("komorebi-rulegen/", env!("CARGO_PKG_VERSION"));

/// 规则加载管理器
pub struct RuleLoader {
    client: Client,
    parser: RuleParser,
}

impl RuleLoader {
    /// 按配置构建 HTTP 客户端（仅在设置了超时时启用超时）
    pub fn new(config: &GlobalConfig) -> RuleGenResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.http_timeout_duration() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RuleGenError::NetworkError(format!("HTTP 客户端构建失败：{}", e)))?;

        Ok(Self {
            client,
            parser: RuleParser,
        })
    }

    /// 按规则来源加载规则文档
    pub async fn load(&self, config: &GlobalConfig) -> RuleGenResult<RuleDocument> {
        match &config.origin {
            RuleOrigin::Remote(url) => self.load_remote(url, &config.rule_cache_path).await,
            RuleOrigin::LocalFile(path) => self.load_local(path).await,
        }
    }

    /// 拉取 → 缓存 → 解析；失败不重试
    pub async fn load_remote(&self, url: &str, cache_path: &Path) -> RuleGenResult<RuleDocument> {
        let bytes = self.fetch_bytes(url).await?;
        RuleCacheManager::save_raw(cache_path, &bytes).await?;

        let document = self.parser.parse_from_bytes(&bytes)?;
        info!("远程规则加载完成，应用总数：{}", document.len());
        Ok(document)
    }

    /// 读取本地规则文件，不写缓存
    pub async fn load_local(&self, path: &Path) -> RuleGenResult<RuleDocument> {
        let bytes = RuleCacheManager::load_raw(path).await?;
        let document = self.parser.parse_from_bytes(&bytes)?;
        info!("本地规则加载完成（{}），应用总数：{}", path.display(), document.len());
        Ok(document)
    }

    /// 拉取远程原文，非 2xx 状态码视为网络错误
    pub async fn fetch_bytes(&self, url: &str) -> RuleGenResult<Vec<u8>> {
        debug!("开始拉取规则源，URL：{}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RuleGenError::NetworkError(format!("请求 {} 失败：{}", url, e)))?;

        if !response.status().is_success() {
            return Err(RuleGenError::NetworkError(format!(
                "URL {} 返回状态码 {}",
                url,
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RuleGenError::NetworkError(format!("读取响应体失败：{}", e)))?;

        debug!("规则源拉取成功，大小：{} 字节", bytes.len());
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::rule::model::RuleKind;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BODY: &str = "- name: Notepad\n  float_identifiers:\n    - kind: Exe\n      id: notepad.exe\n";

    #[tokio::test]
    async fn test_load_remote_caches_exact_bytes() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/applications.yaml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let cache_path = dir.path().join("komorebi_rules.yaml");
        let url = format!("{}/applications.yaml", mock_server.uri());

        let loader = RuleLoader::new(&ConfigManager::get_default()).unwrap();
        let doc = loader.load_remote(&url, &cache_path).await.unwrap();

        assert_eq!(doc.len(), 1);
        let groups = doc.apps[0].float_identifiers.as_ref().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(std::fs::read_to_string(&cache_path).unwrap(), BODY);

        let single = match &groups[0] {
            crate::rule::model::MatchGroup::Single(rule) => rule,
            other => panic!("unexpected group: {:?}", other),
        };
        assert_eq!(single.kind, RuleKind::Exe);
    }

    #[tokio::test]
    async fn test_non_success_status_is_network_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("404: Not Found"))
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let cache_path = dir.path().join("komorebi_rules.yaml");
        let url = format!("{}/applications.yaml", mock_server.uri());

        let loader = RuleLoader::new(&ConfigManager::get_default()).unwrap();
        let err = loader.load_remote(&url, &cache_path).await.unwrap_err();

        assert!(matches!(err, RuleGenError::NetworkError(_)));
        assert!(!cache_path.exists());
    }

    #[tokio::test]
    async fn test_invalid_yaml_is_parse_error_but_still_cached() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let cache_path = dir.path().join("komorebi_rules.yaml");
        let url = format!("{}/applications.yaml", mock_server.uri());

        let loader = RuleLoader::new(&ConfigManager::get_default()).unwrap();
        let err = loader.load_remote(&url, &cache_path).await.unwrap_err();

        assert!(matches!(err, RuleGenError::ParseError(_)));
        assert!(cache_path.exists());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // 1 号端口无人监听，连接被拒绝
        let dir = tempfile::tempdir().unwrap();
        let loader = RuleLoader::new(&ConfigManager::get_default()).unwrap();
        let err = loader
            .load_remote("http://127.0.0.1:1/applications.yaml", &dir.path().join("c.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, RuleGenError::NetworkError(_)));
    }

    #[tokio::test]
    async fn test_load_local_origin() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("applications.yaml");
        std::fs::write(&input, BODY).unwrap();

        let config = ConfigManager::custom().local_file(input).build();
        let loader = RuleLoader::new(&config).unwrap();
        let doc = loader.load(&config).await.unwrap();
        assert_eq!(doc.apps[0].name, "Notepad");
    }
}
