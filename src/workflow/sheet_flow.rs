//! 题目表处理流程 - 流程层
//!
//! 核心职责：为题目表中所有还没有答案的填空题生成答案
//!
//! 流程顺序：
//! 1. 已有 texts 的题目 → 保留
//! 2. 其余题目调用 AnswerSynthesizer，同时进行的请求数受 Semaphore 限制
//! 3. 生成成功 → 写入 texts；返回空 → 跳过（填写时不使用 AI 答案）

use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::clients::ChatTransport;
use crate::config::SynthesisConfig;
use crate::models::{QuestionSheet, TextQuestion};
use crate::services::AnswerSynthesizer;
use crate::utils::truncate_text;

/// 单题处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessResult {
    /// 已生成答案
    Filled,
    /// 原本就有答案，未调用 AI
    Kept,
    /// AI 未返回答案
    Skipped,
}

/// 整张表的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SheetStats {
    pub filled: usize,
    pub kept: usize,
    pub skipped: usize,
}

impl SheetStats {
    pub fn total(&self) -> usize {
        self.filled + self.kept + self.skipped
    }

    fn record(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Filled => self.filled += 1,
            ProcessResult::Kept => self.kept += 1,
            ProcessResult::Skipped => self.skipped += 1,
        }
    }
}

/// 题目表处理流程
///
/// - 不持有任何跨调用状态
/// - 只依赖业务能力（AnswerSynthesizer）
/// - 同时进行的 AI 请求不超过 `max_concurrent`
pub struct SheetFlow<'a, T> {
    synthesizer: &'a AnswerSynthesizer<T>,
    config: &'a SynthesisConfig,
    semaphore: Semaphore,
}

impl<'a, T: ChatTransport> SheetFlow<'a, T> {
    /// # 参数
    /// - `max_concurrent`: 同时进行的请求数，0 视为 1
    pub fn new(
        synthesizer: &'a AnswerSynthesizer<T>,
        config: &'a SynthesisConfig,
        max_concurrent: usize,
    ) -> Self {
        Self {
            synthesizer,
            config,
            semaphore: Semaphore::new(max_concurrent.max(1)),
        }
    }

    /// 填充整张题目表
    pub async fn run(&self, sheet: &mut QuestionSheet) -> SheetStats {
        let results = join_all(sheet.questions.iter_mut().map(|q| self.fill_question(q))).await;

        let mut stats = SheetStats::default();
        for result in results {
            stats.record(result);
        }

        info!(
            "题目表处理完成: 生成 {} / 保留 {} / 跳过 {}",
            stats.filled, stats.kept, stats.skipped
        );
        stats
    }

    async fn fill_question(&self, question: &mut TextQuestion) -> ProcessResult {
        if !question.needs_answers() {
            return ProcessResult::Kept;
        }

        // Semaphore 从不 close，acquire 不会失败
        let _permit = self.semaphore.acquire().await.ok();
        let answers = self
            .synthesizer
            .synthesize(&question.title, self.config)
            .await;

        if answers.is_empty() {
            warn!(
                "[题目 {}] ⚠️ 未生成答案，跳过: {}",
                question.num,
                truncate_text(&question.title, 30)
            );
            return ProcessResult::Skipped;
        }

        info!("[题目 {}] ✓ 生成 {} 个答案", question.num, answers.len());
        question.texts = answers.into_vec();
        ProcessResult::Filled
    }
}
