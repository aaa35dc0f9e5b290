//! 有界调度器 - 编排层
//!
//! ## 职责
//!
//! 1. **并发控制**：用 Semaphore 限制同时进行的查询数量
//! 2. **背压**：许可用完时，下一个 ID 的派发会等待
//! 3. **失败隔离**：单个 ID 失败只记日志，不影响其他 ID
//! 4. **完成屏障**：等待所有任务结束后才返回统计
//!
//! 每个 ID 恰好产生一次终态事件：写入一条记录，或记录一次失败。
//! 许可由任务持有，任务结束（包括 panic）时自动释放。

use crate::error::ConfigError;
use crate::models::{ImdbId, LookupResult};
use crate::services::RecordWriter;
use anyhow::Result;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 批处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub total: usize,
    pub matched: usize,
    pub failed: usize,
}

/// 单个 ID 的终态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Matched,
    Failed,
}

/// 有界调度器
pub struct Dispatcher {
    semaphore: Arc<Semaphore>,
    max_concurrent: usize,
}

impl Dispatcher {
    /// 创建调度器，并发数为 0 时无法创建
    pub fn new(max_concurrent: usize) -> Result<Self, ConfigError> {
        if max_concurrent == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }

        Ok(Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent.min(Semaphore::MAX_PERMITS))),
            max_concurrent,
        })
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// 派发所有 ID 并等待全部完成
    ///
    /// # 参数
    /// - `ids`: 待查询的 ID（按顺序派发，完成顺序不保证）
    /// - `lookup`: 单个 ID 的查询函数
    /// - `sink`: 结果写入服务
    ///
    /// # 返回
    /// 返回统计，`matched + failed == ids.len()`
    pub async fn run<F, Fut>(
        &self,
        ids: Vec<ImdbId>,
        lookup: F,
        sink: Arc<RecordWriter>,
    ) -> Result<BatchStats>
    where
        F: Fn(ImdbId) -> Fut,
        Fut: Future<Output = LookupResult> + Send + 'static,
    {
        let mut handles = Vec::with_capacity(ids.len());

        for imdb_id in ids {
            let permit = self.semaphore.clone().acquire_owned().await?;
            let pending = lookup(imdb_id.clone());
            let sink = Arc::clone(&sink);

            let handle = tokio::spawn(async move {
                let _permit = permit;
                match pending.await {
                    Ok(record) => match sink.record(&record).await {
                        Ok(()) => {
                            info!("{} -> {}", record.imdb_id, record.tmdb_id);
                            Outcome::Matched
                        }
                        Err(e) => {
                            error!("[imdb {}] ❌ {}", record.imdb_id, e);
                            Outcome::Failed
                        }
                    },
                    Err(failure) => {
                        warn!("{}", failure);
                        Outcome::Failed
                    }
                }
            });
            handles.push((imdb_id, handle));
        }

        // 完成屏障：等待所有任务结束
        let (ids, handles): (Vec<_>, Vec<_>) = handles.into_iter().unzip();
        let results = futures::future::join_all(handles).await;

        let mut stats = BatchStats {
            total: ids.len(),
            ..Default::default()
        };

        for (imdb_id, result) in ids.iter().zip(results) {
            match result {
                Ok(Outcome::Matched) => stats.matched += 1,
                Ok(Outcome::Failed) => stats.failed += 1,
                Err(e) => {
                    error!("[imdb {}] 任务执行失败: {}", imdb_id, e);
                    stats.failed += 1;
                }
            }
        }

        Ok(stats)
    }
}
