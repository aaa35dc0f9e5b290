use anyhow::Result;
use clap::Parser;
use tmdb_enrich::cli::Cli;
use tmdb_enrich::utils::logging;
use tmdb_enrich::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 命令行参数覆盖环境变量
    let config = Cli::parse().apply(Config::from_env());

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
