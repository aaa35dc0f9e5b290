//! 命令行参数
//!
//! 命令行的值覆盖环境变量和默认值

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// 用 TMDb 的数据补全 IMDb 电影列表，输出 Turtle 文件
#[derive(Debug, Parser)]
#[command(name = "tmdb_enrich", version, about, long_about = None)]
pub struct Cli {
    /// TMDb API 令牌（也可以用环境变量 TMDB_TOKEN）
    pub token: Option<String>,

    /// 输入文件
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 输出文件（会被覆盖）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 最大并发查询数
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// TMDb API 地址
    #[arg(long)]
    pub base_url: Option<String>,

    /// 单次请求超时（秒）
    #[arg(long)]
    pub timeout: Option<u64>,

    /// 显示详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 把命令行参数合并进配置
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(token) = self.token {
            config.api_token = token;
        }
        if let Some(input) = self.input {
            config.input_file = input;
        }
        if let Some(output) = self.output {
            config.output_file = output;
        }
        if let Some(concurrency) = self.concurrency {
            config.max_concurrent_lookups = concurrency;
        }
        if let Some(base_url) = self.base_url {
            config.api_base_url = base_url;
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }
        config.verbose_logging |= self.verbose;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config() {
        let cli = Cli::parse_from([
            "tmdb_enrich",
            "secret",
            "-i",
            "in.ttl",
            "--output",
            "out.ttl",
            "-c",
            "8",
            "-v",
        ]);
        let config = cli.apply(Config::default());

        assert_eq!(config.api_token, "secret");
        assert_eq!(config.input_file, PathBuf::from("in.ttl"));
        assert_eq!(config.output_file, PathBuf::from("out.ttl"));
        assert_eq!(config.max_concurrent_lookups, 8);
        assert!(config.verbose_logging);
    }

    #[test]
    fn missing_args_keep_config() {
        let base = Config {
            api_token: "from-env".to_string(),
            ..Config::default()
        };
        let config = Cli::parse_from(["tmdb_enrich"]).apply(base);

        assert_eq!(config.api_token, "from-env");
        assert_eq!(config.max_concurrent_lookups, 2);
        assert!(!config.verbose_logging);
    }

    #[test]
    fn zero_timeout_argument_fails_validation() {
        let config = Cli::parse_from(["tmdb_enrich", "secret", "--timeout", "0"])
            .apply(Config::default());
        assert!(matches!(
            config.validate(),
            Err(crate::error::ConfigError::ZeroTimeout)
        ));
    }

    #[test]
    fn empty_token_argument_fails_validation() {
        let config = Cli::parse_from(["tmdb_enrich", ""]).apply(Config::default());
        assert!(config.validate().is_err());
    }
}
