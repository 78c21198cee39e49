/// Chat Completion 传输层
///
/// 只负责把请求体 POST 出去并拿回状态码和响应文本，
/// 不关心状态码含义和响应内容
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

use crate::error::Result;

/// 一次 HTTP 请求
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// 完整的 `/chat/completions` 地址
    pub url: String,
    pub api_key: String,
    /// OpenAI ChatCompletion 请求体
    pub body: Value,
    pub timeout: Duration,
}

/// HTTP 响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    pub status: u16,
    pub body: String,
}

impl ChatResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// 传输层抽象，测试中可替换为假实现
pub trait ChatTransport {
    /// 发送一次请求，不重试
    ///
    /// 网络层失败（超时、连接、DNS）返回 `SynthesisError::Transport`
    fn post(&self, request: ChatRequest) -> impl Future<Output = Result<ChatResponse>> + Send;
}

/// 基于 reqwest 的 HTTP 客户端
#[derive(Debug, Clone, Default)]
pub struct HttpChatClient {
    client: reqwest::Client,
}

impl HttpChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// 复用已有的 reqwest 客户端
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ChatTransport for HttpChatClient {
    fn post(&self, request: ChatRequest) -> impl Future<Output = Result<ChatResponse>> + Send {
        let builder = self
            .client
            .post(&request.url)
            .bearer_auth(&request.api_key)
            .json(&request.body)
            .timeout(request.timeout);

        async move {
            debug!("[AI] 发送请求到: {}", request.url);

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;

            Ok(ChatResponse { status, body })
        }
    }
}
