//! 结果写入服务 - 业务能力层
//!
//! 只负责"把匹配结果写进 tmdb.ttl"，不关心查询流程。
//! 多个任务会同时调用 `record`，所有写入都在同一把锁内完成，每行整体写入。

use crate::error::FileError;
use crate::models::MatchedRecord;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::Mutex;
use tracing::debug;

/// 输出文件头：前缀声明和词表定义
pub const PREAMBLE: &str = r#"@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix tmm: <https://www.themoviedb.org/movie/> .
@prefix tmdb: <https://developers.themoviedb.org/3#> .
@prefix imdb: <https://www.imdb.com/interfaces/> .

tmdb:Movie rdf:type owl:Class .

tmdb:id rdf:type owl:DatatypeProperty .
tmdb:poster rdf:type owl:DatatypeProperty .
tmdb:lang rdf:type owl:DatatypeProperty .

imdb:id rdf:type owl:DatatypeProperty .

"#;

/// 结果写入服务
///
/// 职责：
/// - 创建（覆盖）输出文件并写入文件头
/// - 将单条匹配结果序列化为一行写入
/// - 批处理结束后刷新落盘
///
/// 任意一条记录写入失败后，文件内容就不再可信（缓冲区里可能只落了半行），
/// 此时 `finish` 一定返回错误。
pub struct RecordWriter {
    path: PathBuf,
    file: Mutex<BufWriter<File>>,
    failed_writes: AtomicUsize,
}

impl RecordWriter {
    /// 创建输出文件，已存在则覆盖
    pub async fn create(path: impl Into<PathBuf>) -> Result<Self, FileError> {
        let path = path.into();

        let file = File::create(&path)
            .await
            .map_err(|source| FileError::CreateFailed {
                path: path.clone(),
                source,
            })?;

        let mut file = BufWriter::new(file);
        file.write_all(PREAMBLE.as_bytes())
            .await
            .map_err(|source| FileError::WriteFailed {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            file: Mutex::new(file),
            failed_writes: AtomicUsize::new(0),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 写入一条匹配结果
    ///
    /// 先在锁外格式化整行，再持锁一次性写入
    pub async fn record(&self, record: &MatchedRecord) -> Result<(), FileError> {
        let line = format_record(record);

        let mut file = self.file.lock().await;
        if let Err(source) = file.write_all(line.as_bytes()).await {
            self.failed_writes.fetch_add(1, Ordering::SeqCst);
            return Err(self.write_failed(source));
        }

        debug!("写入记录: {} -> {}", record.imdb_id, record.tmdb_id);

        Ok(())
    }

    /// 刷新缓冲并关闭文件
    ///
    /// 必须在所有查询任务结束之后调用。之前有记录写入失败时返回
    /// `FileError::Incomplete`。
    pub async fn finish(&self) -> Result<(), FileError> {
        let mut file = self.file.lock().await;
        file.flush().await.map_err(|source| self.write_failed(source))?;
        file.get_mut()
            .sync_all()
            .await
            .map_err(|source| self.write_failed(source))?;

        let failed = self.failed_writes.load(Ordering::SeqCst);
        if failed > 0 {
            return Err(FileError::Incomplete {
                path: self.path.clone(),
                failed,
            });
        }
        Ok(())
    }

    fn write_failed(&self, source: std::io::Error) -> FileError {
        FileError::WriteFailed {
            path: self.path.clone(),
            source,
        }
    }
}

/// 将一条记录序列化为一行 Turtle
pub fn format_record(record: &MatchedRecord) -> String {
    format!(
        "tmm:{id} rdf:type tmdb:Movie ; tmdb:id \"{id}\" ; imdb:id \"{imdb}\" ; tmdb:poster \"{poster}\" ; tmdb:lang \"{lang}\" .\n",
        id = record.tmdb_id,
        imdb = escape_literal(record.imdb_id.as_str()),
        poster = escape_literal(&record.poster_path),
        lang = escape_literal(&record.language),
    )
}

/// 转义 Turtle 字符串字面量
fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}
