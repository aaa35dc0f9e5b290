//! 错误类型
//!
//! - `AppError`：启动阶段的致命错误，直接终止整个批处理
//! - `LookupError`：单个 IMDb ID 查询失败的原因，只记录日志，不影响其他 ID

use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型（致命）
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// ID 匹配规则无法编译
    #[error("ID 匹配规则无效: {0}")]
    Pattern(#[from] regex::Error),
    /// HTTP 客户端创建失败
    #[error("HTTP 客户端初始化失败: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 没有提供 TMDb API 令牌
    #[error("请提供 TMDb API 令牌（第一个参数或环境变量 TMDB_TOKEN）")]
    MissingToken,
    /// 并发数为 0，无法创建工作池
    #[error("并发数必须大于 0")]
    ZeroConcurrency,
    /// 请求超时为 0，所有请求都会立即超时
    #[error("请求超时必须大于 0 秒")]
    ZeroTimeout,
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({}): {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 创建文件失败
    #[error("创建文件失败 ({}): {source}", .path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({}): {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 有记录写入失败，输出文件不完整
    #[error("输出文件不完整 ({}): {failed} 条记录写入失败", .path.display())]
    Incomplete { path: PathBuf, failed: usize },
}

/// 单次查询失败的原因
#[derive(Debug, Error)]
pub enum LookupError {
    /// 网络请求失败（连接错误、超时等）
    #[error("请求失败: {0}")]
    Transport(#[source] reqwest::Error),
    /// 返回了非成功状态码
    #[error("异常状态码 {0}")]
    UnexpectedStatus(u16),
    /// 状态码正常，但没有匹配结果
    #[error("没有匹配结果")]
    NoMatch,
    /// 响应体无法解析
    #[error("响应解析失败: {0}")]
    Decode(#[source] serde_json::Error),
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
