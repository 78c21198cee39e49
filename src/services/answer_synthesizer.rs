//! AI 答案生成服务 - 业务能力层
//!
//! 只负责"为一道填空题生成候选答案"，不关心题目从哪来、答案怎么填
//!
//! ## 技术栈
//! - 使用 `async-openai` 的请求类型构建 ChatCompletion 请求体
//! - 通过 [`ChatTransport`] 发送（默认 reqwest），以便拿到原始状态码和响应文本
//! - 兼容 OpenAI API 的服务（如 DeepSeek 等）

use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::clients::{ChatRequest, ChatTransport, HttpChatClient};
use crate::config::SynthesisConfig;
use crate::error::{ProtocolError, Result, SynthesisError};
use crate::models::AnswerSet;
use crate::services::response_parser::extract_answers;
use crate::utils::truncate_text;

/// 模拟模式下返回的固定答案
pub const MOCK_ANSWERS: [&str; 5] = [
    "挺好的，继续保持",
    "还需要改进一下",
    "非常满意，感谢",
    "有些地方不太方便",
    "整体体验不错",
];

/// AI 答案生成服务
///
/// 职责：
/// - 按配置选择模拟 / 真实 API 模式
/// - 构建 prompt 并调用 ChatCompletion 接口（单次请求，不重试）
/// - 从模型输出中解析最多 5 个答案
/// - 不持有任何跨调用的状态
pub struct AnswerSynthesizer<T = HttpChatClient> {
    transport: T,
}

impl AnswerSynthesizer<HttpChatClient> {
    /// 使用默认 HTTP 客户端
    pub fn new() -> Self {
        Self::with_transport(HttpChatClient::new())
    }
}

impl Default for AnswerSynthesizer<HttpChatClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ChatTransport> AnswerSynthesizer<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 为单个题目生成候选答案
    ///
    /// 任何失败都只记录日志并返回空集合，调用方应把空结果当作
    /// "这道题跳过 AI 辅助"，而不是致命错误。
    ///
    /// # 示例
    /// ```no_run
    /// # use wjx_ai_answers::{AnswerSynthesizer, SynthesisConfig};
    /// # async fn example() {
    /// let synthesizer = AnswerSynthesizer::new();
    /// let answers = synthesizer
    ///     .synthesize("您对食堂的建议是？", &SynthesisConfig::mock())
    ///     .await;
    /// assert_eq!(answers.len(), 5);
    /// # }
    /// ```
    pub async fn synthesize(&self, question: &str, config: &SynthesisConfig) -> AnswerSet {
        match self.try_synthesize(question, config).await {
            Ok(answers) => answers,
            Err(e) => {
                log_failure(&e);
                AnswerSet::empty()
            }
        }
    }

    /// 与 [`synthesize`](Self::synthesize) 相同，但返回具体的失败原因
    pub async fn try_synthesize(
        &self,
        question: &str,
        config: &SynthesisConfig,
    ) -> Result<AnswerSet> {
        // ========== Mock 模式 ==========
        if config.use_mock {
            info!("[AI Mock] 正在使用模拟 AI 数据");
            debug!("[AI Mock] 题目: {}", truncate_text(question, 30));
            info!("[AI Mock] 返回{}个模拟答案", MOCK_ANSWERS.len());
            return Ok(MOCK_ANSWERS.into_iter().collect());
        }

        // ========== 真实 API 模式 ==========
        let api_key = config.api_key().ok_or(SynthesisError::ConfigurationGap)?;

        info!("[AI] 正在为题目生成答案: {}", truncate_text(question, 50));

        let prompt = build_prompt(question);
        debug!("[AI] Prompt 内容: {}", truncate_text(&prompt, 50));

        let request = ChatRequest {
            url: config.chat_completions_url(),
            api_key: api_key.to_string(),
            body: build_request_body(&prompt, config)?,
            timeout: Duration::from_secs(config.timeout_seconds),
        };

        let response = self.transport.post(request).await?;
        info!("[AI] API 响应状态码: {}", response.status);

        if !response.is_ok() {
            return Err(ProtocolError::Status {
                status: response.status,
                body: response.body,
            }
            .into());
        }

        let content = extract_content(&response.body)?;
        debug!("[AI] 原始响应内容: {}", truncate_text(&content, 100));

        match extract_answers(&content) {
            Some(answers) if !answers.is_empty() => {
                info!("[AI] 成功生成 {} 个答案: {:?}", answers.len(), &*answers);
                Ok(answers)
            }
            _ => Err(SynthesisError::Parse { raw: content }),
        }
    }
}

/// 使用默认 HTTP 客户端为单个题目生成答案
pub async fn generate_answers_for_question(question: &str, config: &SynthesisConfig) -> AnswerSet {
    AnswerSynthesizer::new().synthesize(question, config).await
}

/// 构建 prompt
pub fn build_prompt(question: &str) -> String {
    format!(
        "请为问卷题目'{}'生成 5 个简短、真实、口语化的回答。请直接返回 JSON 数组格式，不要包含 Markdown 标记。",
        question
    )
}

/// 构建 ChatCompletion 请求体
fn build_request_body(prompt: &str, config: &SynthesisConfig) -> Result<Value> {
    let user_msg = ChatCompletionRequestUserMessageArgs::default()
        .content(prompt)
        .build()
        .map_err(|e| SynthesisError::Unexpected(format!("构建用户消息失败: {}", e)))?;

    let request = CreateChatCompletionRequestArgs::default()
        .model(&config.model_id)
        .messages(vec![ChatCompletionRequestMessage::User(user_msg)])
        .temperature(config.temperature)
        .max_tokens(config.max_tokens)
        .build()
        .map_err(|e| SynthesisError::Unexpected(format!("构建请求失败: {}", e)))?;

    serde_json::to_value(&request)
        .map_err(|e| SynthesisError::Unexpected(format!("序列化请求失败: {}", e)))
}

/// 取出 `choices[0].message.content`
fn extract_content(body: &str) -> Result<String> {
    let envelope: Value = serde_json::from_str(body)
        .map_err(|e| ProtocolError::Envelope(format!("响应不是合法 JSON: {}", e)))?;

    envelope
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ProtocolError::Envelope("缺少 choices[0].message.content".to_string()).into())
}

fn log_failure(e: &SynthesisError) {
    match e {
        SynthesisError::ConfigurationGap => {
            warn!("[AI] AI_API_KEY 未配置，跳过 AI 生成");
        }
        SynthesisError::Protocol(ProtocolError::Status { status, body }) => {
            error!("[AI] API 请求失败: {} - {}", status, truncate_text(body, 200));
        }
        SynthesisError::Parse { raw } => {
            warn!("[AI] 未能从响应中解析出有效答案");
            debug!("[AI] JSON 解析失败，原始内容: {}", truncate_text(raw, 200));
        }
        other => {
            error!("[AI] {}", other);
        }
    }
}
