//! # TMDb Enrich
//!
//! 读取 IMDb Turtle 文件中的电影 ID，逐个调用 TMDb `/find` 接口查询，
//! 把匹配到的电影写成 Turtle 文件。
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - `ImdbId`、`MatchedRecord`、`LookupFailure`
//! - `models/loaders` - 从输入文件中提取 IMDb ID
//!
//! ### ② 客户端层（Clients）
//! - `TmdbClient` - 单次查询，不重试，多个候选取第一个
//!
//! ### ③ 业务能力层（Services）
//! - `RecordWriter` - 写 tmdb.ttl 能力，持锁整行写入
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/dispatcher` - 有界并发调度 + 完成屏障
//! - `orchestrator/batch_processor` - 应用生命周期、启动检查、统计
//!
//! ## 模块结构

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use clients::TmdbClient;
pub use config::Config;
pub use error::{AppError, AppResult, LookupError};
pub use models::{ImdbId, LookupFailure, LookupResult, MatchedRecord};
pub use orchestrator::{App, BatchStats, Dispatcher};
pub use services::RecordWriter;
