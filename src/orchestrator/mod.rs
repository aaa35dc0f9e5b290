//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量查询处理器
//! - 管理应用生命周期（初始化、运行、收尾）
//! - 加载全部 IMDb ID
//! - 持有 TmdbClient 和 RecordWriter
//! - 输出全局统计信息
//!
//! ### `dispatcher` - 有界调度器
//! - 控制并发数量（Semaphore）
//! - 每个 ID 一个任务：查询 → 写入
//! - 等待全部任务完成（完成屏障）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<ImdbId>)
//!     ↓
//! dispatcher (有界并发，单个 ImdbId 一个任务)
//!     ↓
//! clients::TmdbClient (查询)  →  services::RecordWriter (写入)
//! ```

pub mod batch_processor;
pub mod dispatcher;

// 重新导出主要类型
pub use batch_processor::App;
pub use dispatcher::{BatchStats, Dispatcher};
