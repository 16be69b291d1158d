use anyhow::Result;
use scrape_question_answer::app::App;
use scrape_question_answer::config::Config;
use scrape_question_answer::logger;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置，缺少 API 密钥时在开始任何工作前退出
    let config = Config::from_env()?;

    // 初始化并运行应用
    App::initialize(config)?.run().await?;

    Ok(())
}
