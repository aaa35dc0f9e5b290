/// TMDb API 客户端
///
/// 封装 `/find` 接口：用 IMDb ID 查 TMDb 电影
use crate::config::Config;
use crate::error::{AppError, LookupError};
use crate::models::{FindResponse, ImdbId, LookupFailure, LookupResult, MatchedRecord};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("tmdb_enrich/", env!("CARGO_PKG_VERSION"));

/// TMDb API 客户端
///
/// 令牌在启动时传入一次，所有请求共用；`reqwest::Client` 内部是 Arc，可以跨任务共享
pub struct TmdbClient {
    http: Client,
    base_url: String,
    token: String,
}

impl TmdbClient {
    /// 创建新的 TMDb 客户端
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(AppError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        })
    }

    /// 构建查询地址
    pub fn find_url(&self, imdb_id: &ImdbId) -> String {
        format!(
            "{}/find/{}?external_source=imdb_id",
            self.base_url, imdb_id
        )
    }

    /// 查询单个 IMDb ID
    ///
    /// 只请求一次，不重试。多个候选时取第一个。
    ///
    /// # 返回
    /// - 成功：第一个候选电影
    /// - 失败：网络错误 / 非成功状态码 / 响应无法解析 / 没有候选
    pub async fn lookup(&self, imdb_id: &ImdbId) -> LookupResult {
        let fail = |cause| LookupFailure::new(imdb_id.clone(), cause);
        let url = self.find_url(imdb_id);

        debug!("查询 {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| fail(LookupError::Transport(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fail(LookupError::UnexpectedStatus(status.as_u16())));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| fail(LookupError::Transport(e)))?;
        let found: FindResponse =
            serde_json::from_slice(&body).map_err(|e| fail(LookupError::Decode(e)))?;

        debug!("{} 返回 {} 个候选", imdb_id, found.movie_results.len());

        found
            .movie_results
            .into_iter()
            .next()
            .map(|candidate| MatchedRecord::from_candidate(imdb_id.clone(), candidate))
            .ok_or_else(|| fail(LookupError::NoMatch))
    }
}
