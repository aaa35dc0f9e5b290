use crate::error::FileError;
use crate::models::movie::ImdbId;
use regex::Regex;
use std::path::Path;
use tokio::fs;

/// 从文本行中提取 IMDb ID
///
/// 正则的第 1 个捕获组即 ID；没有捕获组时取整个匹配
#[derive(Debug, Clone)]
pub struct IdScanner {
    pattern: Regex,
}

impl IdScanner {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// 扫描单行，不匹配返回 `None`
    pub fn scan_line(&self, line: &str) -> Option<ImdbId> {
        let caps = self.pattern.captures(line)?;
        let m = caps.get(1).or_else(|| caps.get(0))?;
        ImdbId::new(m.as_str())
    }

    /// 逐行扫描全文，保留原始顺序，不去重
    pub fn scan(&self, content: &str) -> Vec<ImdbId> {
        content.lines().filter_map(|line| self.scan_line(line)).collect()
    }
}

/// 读取输入文件并提取所有 IMDb ID
///
/// 非 UTF-8 内容按有损方式解码，不视为错误
pub async fn load_imdb_ids(path: &Path, scanner: &IdScanner) -> Result<Vec<ImdbId>, FileError> {
    let bytes = fs::read(path).await.map_err(|source| FileError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8_lossy(&bytes);
    let ids = scanner.scan(&content);

    tracing::debug!("从 {} 中提取到 {} 个 ID", path.display(), ids.len());

    Ok(ids)
}
