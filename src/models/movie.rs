//! 电影数据模型
//!
//! IMDb ID → TMDb 查询的输入和输出

use crate::error::LookupError;
use serde::Deserialize;
use std::fmt::{self, Display};

/// IMDb 标题 ID（如 `tt0111161`），保证非空
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImdbId(String);

impl ImdbId {
    /// 创建 ID，空字符串返回 `None`
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ImdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// TMDb `/find` 接口返回的单个候选电影
#[derive(Debug, Clone, Deserialize)]
pub struct MovieCandidate {
    pub id: u64,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub original_language: String,
}

/// TMDb `/find` 接口响应
#[derive(Debug, Deserialize)]
pub struct FindResponse {
    #[serde(default)]
    pub movie_results: Vec<MovieCandidate>,
}

/// 匹配成功的记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRecord {
    /// TMDb 电影 ID
    pub tmdb_id: u64,
    /// 海报路径，TMDb 返回 null 时为空字符串
    pub poster_path: String,
    /// 原始语言代码
    pub language: String,
    /// 来源 IMDb ID
    pub imdb_id: ImdbId,
}

impl MatchedRecord {
    pub fn from_candidate(imdb_id: ImdbId, candidate: MovieCandidate) -> Self {
        Self {
            tmdb_id: candidate.id,
            poster_path: candidate.poster_path.unwrap_or_default(),
            language: candidate.original_language,
            imdb_id,
        }
    }
}

/// 查询失败，附带来源 ID 和原因
#[derive(Debug)]
pub struct LookupFailure {
    pub imdb_id: ImdbId,
    pub cause: LookupError,
}

impl LookupFailure {
    pub fn new(imdb_id: ImdbId, cause: LookupError) -> Self {
        Self { imdb_id, cause }
    }
}

impl Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[imdb {}] {}", self.imdb_id, self.cause)
    }
}

impl std::error::Error for LookupFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// 单个 ID 的查询结果
pub type LookupResult = Result<MatchedRecord, LookupFailure>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_is_rejected() {
        assert!(ImdbId::new("").is_none());
        assert_eq!(ImdbId::new("tt0111161").unwrap().as_str(), "tt0111161");
    }

    #[test]
    fn null_poster_becomes_empty() {
        let response: FindResponse = serde_json::from_str(
            r#"{"movie_results":[{"id":278,"poster_path":null,"original_language":"en"}],"tv_results":[]}"#,
        )
        .unwrap();
        let candidate = response.movie_results.into_iter().next().unwrap();
        let record = MatchedRecord::from_candidate(ImdbId::new("tt0111161").unwrap(), candidate);

        assert_eq!(record.tmdb_id, 278);
        assert_eq!(record.poster_path, "");
        assert_eq!(record.language, "en");
    }

    #[test]
    fn failure_display_names_the_id() {
        let failure = LookupFailure::new(ImdbId::new("tt1").unwrap(), LookupError::NoMatch);
        assert_eq!(failure.to_string(), "[imdb tt1] 没有匹配结果");
    }
}
