//! 批量查询处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责启动检查、资源管理和批量调度。
//!
//! ## 核心功能
//!
//! 1. **启动检查**：令牌、并发数、ID 规则、输入文件，任何一项失败都直接终止
//! 2. **批量加载**：扫描输入文件，得到全部 IMDb ID（`Vec<ImdbId>`）
//! 3. **资源管理**：持有 TmdbClient 和 RecordWriter
//! 4. **并发调度**：委托 Dispatcher 完成有界并发查询
//! 5. **收尾**：全部任务完成后刷新输出文件，输出统计
//!
//! 输出文件在输入文件读取成功之后才创建，输入不可读时不会改动输出文件。

use crate::clients::TmdbClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{load_imdb_ids, IdScanner, ImdbId};
use crate::orchestrator::dispatcher::{BatchStats, Dispatcher};
use crate::services::RecordWriter;
use crate::utils::logging::{log_ids_loaded, log_startup, print_final_stats};
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    ids: Vec<ImdbId>,
    client: Arc<TmdbClient>,
    writer: Arc<RecordWriter>,
    dispatcher: Dispatcher,
}

impl App {
    /// 初始化应用
    ///
    /// 所有致命错误都在这里返回，此时还没有发出任何网络请求
    pub async fn initialize(config: Config) -> AppResult<Self> {
        config.validate()?;

        log_startup(&config);

        let dispatcher = Dispatcher::new(config.max_concurrent_lookups)?;
        let scanner = IdScanner::new(&config.id_pattern)?;

        // 加载所有待查询的 ID
        info!("📁 正在扫描 {} ...", config.input_file.display());
        let ids = load_imdb_ids(&config.input_file, &scanner).await?;

        let client = TmdbClient::new(&config)?;
        let writer = RecordWriter::create(&config.output_file).await?;

        Ok(Self {
            config,
            ids,
            client: Arc::new(client),
            writer: Arc::new(writer),
            dispatcher,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(self) -> Result<BatchStats> {
        let Self {
            config,
            ids,
            client,
            writer,
            dispatcher,
        } = self;

        if ids.is_empty() {
            warn!("⚠️ 输入文件中没有找到 IMDb ID，只写入文件头");
        } else {
            log_ids_loaded(ids.len(), dispatcher.max_concurrent());
        }

        let stats = dispatcher
            .run(
                ids,
                move |imdb_id| {
                    let client = Arc::clone(&client);
                    async move { client.lookup(&imdb_id).await }
                },
                Arc::clone(&writer),
            )
            .await?;

        // 所有任务都已结束，可以安全落盘
        writer.finish().await?;

        print_final_stats(&stats, &config);

        Ok(stats)
    }
}
