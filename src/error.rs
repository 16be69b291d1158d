use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 必需的环境变量不存在
    EnvVarNotFound { var_name: String },
    /// 章节页面抓取失败
    FetchFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// URL 中找不到章节编号
    ChapterIdNotFound { url: String },
    /// LLM API 调用失败
    LlmCallFailed {
        model: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// LLM 返回结果为空
    LlmEmptyResponse { model: String },
    /// LLM 返回内容为空
    LlmEmptyContent { model: String },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EnvVarNotFound { var_name } => {
                write!(f, "环境变量 {} 不存在", var_name)
            }
            AppError::FetchFailed { url, source } => {
                write!(f, "章节页面抓取失败 ({}): {}", url, source)
            }
            AppError::ChapterIdNotFound { url } => {
                write!(f, "URL 中找不到章节编号: {}", url)
            }
            AppError::LlmCallFailed { model, source } => {
                write!(f, "LLM API调用失败 (模型: {}): {}", model, source)
            }
            AppError::LlmEmptyResponse { model } => {
                write!(f, "LLM返回结果为空 (模型: {})", model)
            }
            AppError::LlmEmptyContent { model } => {
                write!(f, "LLM返回内容为空 (模型: {})", model)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::FetchFailed { source, .. } | AppError::LlmCallFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建环境变量缺失错误
    pub fn env_var_not_found(var_name: impl Into<String>) -> Self {
        AppError::EnvVarNotFound {
            var_name: var_name.into(),
        }
    }

    /// 创建页面抓取错误
    pub fn fetch_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::FetchFailed {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// 创建章节编号缺失错误
    pub fn chapter_id_not_found(url: impl Into<String>) -> Self {
        AppError::ChapterIdNotFound { url: url.into() }
    }

    /// 创建LLM API调用错误
    pub fn llm_call_failed(
        model: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::LlmCallFailed {
            model: model.into(),
            source: Box::new(source),
        }
    }

    /// 创建LLM空结果错误
    pub fn llm_empty_response(model: impl Into<String>) -> Self {
        AppError::LlmEmptyResponse {
            model: model.into(),
        }
    }

    /// 创建LLM空内容错误
    pub fn llm_empty_content(model: impl Into<String>) -> Self {
        AppError::LlmEmptyContent {
            model: model.into(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
