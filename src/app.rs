use std::fs;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::llm::LlmClient;
use crate::config::Config;
use crate::processing;

/// 应用主结构
pub struct App {
    config: Config,
    llm: LlmClient,
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    completed: usize,
    skipped: usize,
    total: usize,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        let llm = LlmClient::new(&config);

        // 确保输出目录存在
        fs::create_dir_all(&config.output_dir)
            .with_context(|| format!("无法创建输出目录: {}", config.output_dir))?;

        Ok(Self { config, llm })
    }

    /// 运行应用主逻辑
    ///
    /// 按列表顺序逐个处理章节；抓取或生成回答的失败直接向上
    /// 传播并终止运行，只有数量不匹配的章节会被跳过。
    pub async fn run(&self) -> Result<()> {
        if self.config.chapter_urls.is_empty() {
            warn!("⚠️ 章节 URL 列表为空，程序结束");
            return Ok(());
        }

        log_startup(&self.config);

        let mut stats = ProcessingStats {
            total: self.config.chapter_urls.len(),
            ..Default::default()
        };

        for (idx, url) in self.config.chapter_urls.iter().enumerate() {
            let chapter_index = idx + 1;
            info!("\n{}", "─".repeat(60));
            info!("[章节 {}] 开始处理: {}", chapter_index, url);

            if processing::process_chapter(&self.llm, url, chapter_index, &self.config).await? {
                stats.completed += 1;
            } else {
                stats.skipped += 1;
            }
        }

        print_final_stats(&stats, &self.config);

        Ok(())
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 面试题回答生成");
    info!("📚 待处理章节数: {}", config.chapter_urls.len());
    info!("🤖 模型: {}", config.llm_model_name);
    info!("{}", "=".repeat(60));
}

fn print_final_stats(stats: &ProcessingStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 已写出: {}/{}", stats.completed, stats.total);
    info!("⚠️ 已跳过: {}", stats.skipped);
    info!("📁 输出目录: {}", config.output_dir);
    info!("{}", "=".repeat(60));
}
