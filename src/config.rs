use crate::error::ConfigError;
use std::path::PathBuf;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 同时进行的查询数量
    pub max_concurrent_lookups: usize,
    /// 输入文件（IMDb Turtle 文件）
    pub input_file: PathBuf,
    /// 输出文件（每次运行都会覆盖）
    pub output_file: PathBuf,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- TMDb API 配置 ---
    pub api_base_url: String,
    pub api_token: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 从输入行中提取 IMDb ID 的正则，第 1 个捕获组即 ID
    pub id_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: 2,
            input_file: PathBuf::from("imdb.ttl"),
            output_file: PathBuf::from("tmdb.ttl"),
            verbose_logging: false,
            api_base_url: "https://api.themoviedb.org/3".to_string(),
            api_token: String::new(),
            request_timeout_secs: 30,
            id_pattern: r"imt:(tt\d+)".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            max_concurrent_lookups: std::env::var("MAX_CONCURRENT_LOOKUPS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_lookups),
            input_file: std::env::var("INPUT_FILE").map(PathBuf::from).unwrap_or(default.input_file),
            output_file: std::env::var("OUTPUT_FILE").map(PathBuf::from).unwrap_or(default.output_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            api_base_url: std::env::var("TMDB_API_BASE_URL").unwrap_or(default.api_base_url),
            api_token: std::env::var("TMDB_TOKEN").unwrap_or(default.api_token),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            id_pattern: std::env::var("ID_PATTERN").unwrap_or(default.id_pattern),
        }
    }

    /// 检查启动前必须满足的条件
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        if self.max_concurrent_lookups == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_original_job() {
        let config = Config::default();
        assert_eq!(config.max_concurrent_lookups, 2);
        assert_eq!(config.input_file, PathBuf::from("imdb.ttl"));
        assert_eq!(config.output_file, PathBuf::from("tmdb.ttl"));
    }

    #[test]
    fn validate_rejects_blank_token() {
        let config = Config {
            api_token: "   ".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::MissingToken)));
    }

    #[test]
    fn validate_rejects_zero_concurrency() {
        let config = Config {
            api_token: "token".to_string(),
            max_concurrent_lookups: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroConcurrency)));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = Config {
            api_token: "token".to_string(),
            request_timeout_secs: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn validate_accepts_token() {
        let config = Config {
            api_token: "token".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
