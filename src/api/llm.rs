//! LLM API 模块
//!
//! 负责调用聊天补全接口，为面试题生成回答

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::AppError;

/// 回答面试题时使用的系统提示词
const ANSWER_GUIDELINES: &str = r#"
You're a skilled machine learning engineer answering technical questions in an interview.
Difficulty levels, if available, are indicated as: [E] for easy, [M] for medium, and [H] for hard.

Guidelines:
* For [E] questions, demonstrate a fundamental understanding of machine learning concepts.
* For [M] and [H] questions, offer details to prove your expertise.
* Use concrete examples and emphasize real-world application when applicable.
* Include code snippets if relevant.
* Quantify and qualify achievements: discuss specific improvements and how you overcame challenges.
* If a question seems incorrect or ambiguous, request clarification.

Adopt a conversational and professional tone, as if you are a candidate in an interview. Provide clear recommendations and conclusions in your answers, using first-person narrative and colloquial expressions where appropriate. Ensure your responses demonstrate both technical expertise and effective communication skills.
"#;

/// 生成回答时的采样温度，偏向确定性输出
const ANSWER_TEMPERATURE: f32 = 0.3;

/// LLM 客户端
pub struct LlmClient {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    pub fn new(config: &Config) -> Self {
        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config);

        Self {
            client,
            model_name: config.llm_model_name.clone(),
        }
    }

    /// 为单道面试题生成回答
    ///
    /// # 参数
    /// - `question`: 带难度标记的题目文本，如 `"[E] What is X?"`
    ///
    /// # 返回
    /// 返回 LLM 生成的回答
    pub async fn answer_question(&self, question: &str) -> Result<String> {
        self.chat(question, Some(ANSWER_GUIDELINES)).await
    }

    /// 发送聊天请求
    ///
    /// # 参数
    /// - `user_message`: 用户消息内容
    /// - `system_message`: 系统消息（可选）
    ///
    /// # 返回
    /// 返回 LLM 的响应内容
    pub async fn chat(&self, user_message: &str, system_message: Option<&str>) -> Result<String> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.len());

        // 构建消息列表
        let mut messages = Vec::new();

        // 添加系统消息（如果提供）
        if let Some(sys_msg) = system_message {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        // 添加用户消息
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        // 构建请求
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(ANSWER_TEMPERATURE)
            .build()?;

        // 调用 API，失败时直接向上传播，没有重试
        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            AppError::llm_call_failed(self.model_name.clone(), e)
        })?;

        debug!("LLM API 调用成功");

        // 提取响应内容
        let choice = response
            .choices
            .first()
            .ok_or_else(|| AppError::llm_empty_response(self.model_name.clone()))?;

        let content = choice
            .message
            .content
            .clone()
            .ok_or_else(|| AppError::llm_empty_content(self.model_name.clone()))?;

        Ok(content.trim().to_string())
    }
}
