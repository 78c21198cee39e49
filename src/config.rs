//! 程序配置
//!
//! 加载顺序：默认值 → TOML 配置文件（可选）→ 环境变量

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::runtime;

/// 默认配置文件名（位于运行目录下）
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// AI 答案生成配置
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SynthesisConfig {
    /// API 密钥，缺失或为空时不会发起真实请求
    pub api_key: Option<String>,
    /// OpenAI 兼容接口地址
    pub base_url: String,
    /// 是否使用模拟数据（不消耗 Token）
    pub use_mock: bool,
    pub model_id: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// 请求超时（秒）
    pub timeout_seconds: u64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.deepseek.com/v1".to_string(),
            use_mock: false,
            model_id: "deepseek-chat".to_string(),
            temperature: 0.8,
            max_tokens: 200,
            timeout_seconds: 30,
        }
    }
}

impl SynthesisConfig {
    /// 模拟模式配置，测试下游逻辑时使用
    pub fn mock() -> Self {
        Self {
            use_mock: true,
            ..Self::default()
        }
    }

    /// 返回非空的 API Key
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// `{base_url}/chat/completions`，去掉末尾的 `/`
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// 用环境变量覆盖当前配置，无法解析的值会被忽略
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("AI_API_KEY") {
            self.api_key = Some(key);
        }
        if let Ok(url) = std::env::var("AI_BASE_URL") {
            self.base_url = url;
        }
        if let Ok(model) = std::env::var("AI_MODEL_ID") {
            self.model_id = model;
        }
        self.use_mock = env_parse("AI_USE_MOCK").unwrap_or(self.use_mock);
        self.temperature = env_parse("AI_TEMPERATURE").unwrap_or(self.temperature);
        self.max_tokens = env_parse("AI_MAX_TOKENS").unwrap_or(self.max_tokens);
        self.timeout_seconds = env_parse("AI_TIMEOUT_SECONDS").unwrap_or(self.timeout_seconds);
    }
}

/// 同时进行的 AI 请求数上限
pub const MAX_CONCURRENT_LIMIT: usize = 12;

/// 程序配置
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 同时进行的 AI 请求数，会被限制在 1..=12
    pub max_concurrent: usize,
    /// AI 配置（TOML 中的 `[ai]` 表）
    pub ai: SynthesisConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose_logging: false,
            max_concurrent: 2,
            ai: SynthesisConfig::default(),
        }
    }
}

impl Config {
    /// 仅使用默认值和环境变量
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("无法解析配置文件")
    }

    /// 加载配置
    ///
    /// # 参数
    /// - `path`: 显式指定的配置文件；为 `None` 时尝试运行目录下的 `config.toml`
    ///
    /// 显式指定的文件不存在时报错，默认文件不存在时直接使用默认值。
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path).await?,
            None => {
                let default_path = runtime::resource_path(DEFAULT_CONFIG_FILE);
                if tokio::fs::try_exists(&default_path).await.unwrap_or(false) {
                    Self::from_file(&default_path).await?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env();
        Ok(config)
    }

    async fn from_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("配置文件格式错误: {}", path.display()))
    }

    /// 实际使用的并发数
    pub fn concurrency(&self) -> usize {
        self.max_concurrent.clamp(1, MAX_CONCURRENT_LIMIT)
    }

    fn apply_env(&mut self) {
        self.verbose_logging = env_parse("VERBOSE_LOGGING").unwrap_or(self.verbose_logging);
        self.max_concurrent = env_parse("MAX_CONCURRENT").unwrap_or(self.max_concurrent);
        self.ai.apply_env();
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
