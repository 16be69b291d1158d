//! # Scrape Question Answer
//!
//! 从《Machine Learning Interviews Book》在线章节抓取面试题，
//! 调用 LLM 为每道题生成回答，按章节写出文本文件。
//!
//! ## 处理流程
//!
//! 对每个配置的章节 URL，按顺序执行：
//!
//! 1. 抓取章节页面（`api::page`）
//! 2. 从第一个有序列表中提取带难度标记的题目（`extract`）
//! 3. 为每道题调用 LLM 生成回答（`api::llm`）
//! 4. 写出 `chp<章节编号>.txt`（`processing`）
//!
//! 整个流程完全顺序执行，没有并发、重试和持久化状态；
//! 抓取或生成回答的失败直接终止运行。

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod logger;
pub mod models;
pub mod processing;

// 重新导出常用类型
pub use api::llm::LlmClient;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ChapterQuestions, Difficulty, Question};
