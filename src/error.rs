//! 错误类型
//!
//! AI 答案生成的所有失败都归入 [`SynthesisError`]，
//! 由 `AnswerSynthesizer::synthesize` 在边界处吸收为空结果并记录日志。

use thiserror::Error;

/// AI 答案生成错误
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// 未配置 API Key（配置缺失，不算运行时故障）
    #[error("AI_API_KEY 未配置")]
    ConfigurationGap,

    /// 网络层失败：超时、连接失败、DNS 等
    #[error("API 请求{}: {message}", transport_kind(.timed_out))]
    Transport { timed_out: bool, message: String },

    /// 协议层失败：非 200 状态码或响应结构不符
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// 无法从模型输出中解析出 JSON 数组
    #[error("未能从响应中解析出有效答案")]
    Parse { raw: String },

    /// 其他未预期的错误
    #[error("未知错误: {0}")]
    Unexpected(String),
}

/// 协议层错误
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// 非 200 响应
    #[error("API 请求失败: {status}")]
    Status { status: u16, body: String },

    /// 200 响应但缺少 `choices[0].message.content`
    #[error("响应格式解析失败: {0}")]
    Envelope(String),
}

impl SynthesisError {
    /// 是否只是配置缺失（日志降级为 warn）
    pub fn is_configuration_gap(&self) -> bool {
        matches!(self, SynthesisError::ConfigurationGap)
    }
}

impl From<reqwest::Error> for SynthesisError {
    fn from(e: reqwest::Error) -> Self {
        SynthesisError::Transport {
            timed_out: e.is_timeout(),
            message: e.to_string(),
        }
    }
}

fn transport_kind(timed_out: &bool) -> &'static str {
    if *timed_out {
        "超时"
    } else {
        "异常"
    }
}

pub type Result<T> = std::result::Result<T, SynthesisError>;
