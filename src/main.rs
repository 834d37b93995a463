use anyhow::{Context, Result};
use quiz_bank_builder::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load().context("加载配置失败")?;

    // 初始化日志
    logger::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config)
        .await?
        .run()
        .await
        .context("题库生成失败，未写出任何文件")?;

    Ok(())
}
