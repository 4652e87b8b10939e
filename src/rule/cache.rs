//! 规则缓存管理
//! 仅处理下载原文的落盘与读取，不做任何格式转换

use std::path::Path;

use tracing::debug;

use crate::error::RuleGenResult;

/// 规则缓存管理器
pub struct RuleCacheManager;

impl RuleCacheManager {
    /// 按原样写入下载内容，必要时创建父目录
    pub async fn save_raw(cache_path: &Path, bytes: &[u8]) -> RuleGenResult<()> {
        if let Some(parent) = cache_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(cache_path, bytes).await?;

        debug!("规则原文已缓存：{}（{} 字节）", cache_path.display(), bytes.len());
        Ok(())
    }

    /// 读取本地规则原文
    pub async fn load_raw(cache_path: &Path) -> RuleGenResult<Vec<u8>> {
        let bytes = tokio::fs::read(cache_path).await?;
        debug!("读取本地规则：{}（{} 字节）", cache_path.display(), bytes.len());
        Ok(bytes)
    }
}
