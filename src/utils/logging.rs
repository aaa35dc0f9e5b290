/// 日志工具模块
///
/// 提供日志初始化和批处理各阶段的输出
use crate::config::Config;
use crate::orchestrator::BatchStats;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则默认 info（verbose 时为 debug）。
/// 重复调用不会报错，方便测试里多次初始化。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - IMDb → TMDb 批量查询");
    info!("📊 最大并发数: {}", config.max_concurrent_lookups);
    info!("📥 输入文件: {}", config.input_file.display());
    info!("📤 输出文件: {}", config.output_file.display());
    info!("{}", "=".repeat(60));
}

/// 记录 ID 加载信息
///
/// # 参数
/// - `total`: ID 总数
/// - `max_concurrent`: 最大并发数
pub fn log_ids_loaded(total: usize, max_concurrent: usize) {
    info!("✓ 找到 {} 个待查询的 IMDb ID", total);
    info!("📋 同时最多查询 {} 个", max_concurrent);
}

/// 打印最终统计信息
pub fn print_final_stats(stats: &BatchStats, config: &Config) {
    info!("{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 匹配: {}/{}", stats.matched, stats.total);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("结果已保存至: {}", config.output_file.display());
}
