//! # WJX AI Answers
//!
//! 为问卷星填空题生成 AI 候选答案的 Rust 库
//!
//! ## 架构设计
//!
//! ### ① 传输层（Clients）
//! - `clients/` - 只负责把 ChatCompletion 请求发出去，拿回状态码和响应文本
//! - `HttpChatClient` - 基于 reqwest 的默认实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单道题
//! - `AnswerSynthesizer` - 模式选择（模拟 / 真实 API）、请求构建、失败降级
//! - `response_parser` - 从模型输出中解析 JSON 数组的解析链
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 为整张题目表生成答案
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod runtime;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{ChatTransport, HttpChatClient};
pub use config::{Config, SynthesisConfig};
pub use error::{Result, SynthesisError};
pub use models::{AnswerSet, QuestionSheet, TextQuestion};
pub use services::{generate_answers_for_question, AnswerSynthesizer};
pub use workflow::{SheetFlow, SheetStats};
