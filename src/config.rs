use anyhow::Result;

use crate::error::AppError;

/// 各章节题目页面的 URL（固定配置，按处理顺序排列）
///
/// 来自《Machine Learning Interviews Book》在线版
const CHAPTER_URLS: &[&str] = &[
    // 第 5 章：数学
    // "https://huyenchip.com/ml-interviews-book/contents/5.1.1-vectors.html",
    // "https://huyenchip.com/ml-interviews-book/contents/5.1.2-matrices.html",
    // "https://huyenchip.com/ml-interviews-book/contents/5.1.3-dimensionality-reduction.html",
    // "https://huyenchip.com/ml-interviews-book/contents/5.1.4-calculus-and-convex-optimization.html",
    // "https://huyenchip.com/ml-interviews-book/contents/5.2.1.2-questions.html",
    // "https://huyenchip.com/ml-interviews-book/contents/5.2.2-stats.html",
    // 第 6 章：计算机科学
    // "https://huyenchip.com/ml-interviews-book/contents/6.1-algorithms.html",
    // "https://huyenchip.com/ml-interviews-book/contents/6.2-complexity-and-numerical-analysis.html",
    // 第 7 章：机器学习基础
    // "https://huyenchip.com/ml-interviews-book/contents/7.1-basics.html",
    // "https://huyenchip.com/ml-interviews-book/contents/7.2-sampling-and-creating-training-data.html",
    // "https://huyenchip.com/ml-interviews-book/contents/7.3-objective-functions,-metrics,-and-evaluation.html",
    // 第 8 章：机器学习算法
    "https://huyenchip.com/ml-interviews-book/contents/8.1.2-questions.html",
    "https://huyenchip.com/ml-interviews-book/contents/8.2.1-natural-language-processing.html",
    "https://huyenchip.com/ml-interviews-book/contents/8.2.2-computer-vision.html",
    "https://huyenchip.com/ml-interviews-book/contents/8.2.3-reinforcement-learning.html",
    "https://huyenchip.com/ml-interviews-book/contents/8.2.4-other.html",
    "https://huyenchip.com/ml-interviews-book/contents/8.3-training-neural-networks.html",
];

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    // --- LLM 配置 ---
    /// API 密钥（必需，无默认值）
    pub llm_api_key: String,
    /// API 基础 URL
    pub llm_api_base_url: String,
    /// 模型名称
    pub llm_model_name: String,
    // --- 输出配置 ---
    /// 章节文件输出目录
    pub output_dir: String,
    /// 待处理的章节 URL 列表
    pub chapter_urls: Vec<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// `LLM_API_KEY` 为必需项，缺失时返回错误；其余字段有默认值。
    /// 章节 URL 列表是固定配置，不接受外部输入。
    pub fn from_env() -> Result<Self> {
        let llm_api_key = std::env::var("LLM_API_KEY")
            .map_err(|_| AppError::env_var_not_found("LLM_API_KEY"))?;

        Ok(Self {
            llm_api_key,
            llm_api_base_url: std::env::var("LLM_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            llm_model_name: std::env::var("LLM_MODEL_NAME")
                .unwrap_or_else(|_| "gpt-4".to_string()),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or_else(|_| ".".to_string()),
            chapter_urls: CHAPTER_URLS.iter().map(|s| s.to_string()).collect(),
        })
    }
}
