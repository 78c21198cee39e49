use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

use wjx_ai_answers::models::{load_question_sheet, save_question_sheet};
use wjx_ai_answers::utils::logging::{log_startup, print_final_stats};
use wjx_ai_answers::{logger, AnswerSynthesizer, Config, QuestionSheet, SheetFlow};

/// 为问卷星填空题生成 AI 候选答案
#[derive(Debug, Parser)]
#[command(name = "wjx-ai", version)]
struct Cli {
    /// 题目文本，可以给多个
    questions: Vec<String>,

    /// 题目表（TOML），为其中没有答案的题目生成答案
    #[arg(long, conflicts_with = "questions")]
    sheet: Option<PathBuf>,

    /// 题目表输出路径，默认覆盖输入文件
    #[arg(long, requires = "sheet")]
    output: Option<PathBuf>,

    /// 配置文件，默认为运行目录下的 config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// 使用模拟数据，不调用 API
    #[arg(long)]
    mock: bool,

    /// 显示详细日志
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::load(cli.config.as_deref()).await?;
    config.ai.use_mock |= cli.mock;
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logger::init(config.verbose_logging);

    let mut sheet = match &cli.sheet {
        Some(path) => load_question_sheet(path).await?,
        None => QuestionSheet::from_titles(cli.questions.iter().cloned()),
    };

    if sheet.questions.is_empty() {
        warn!("⚠️ 没有待处理的题目，程序结束");
        return Ok(());
    }

    let mode = if config.ai.use_mock {
        "模拟数据"
    } else {
        config.ai.model_id.as_str()
    };
    log_startup(mode, sheet.pending_count());

    let synthesizer = AnswerSynthesizer::new();
    let stats = SheetFlow::new(&synthesizer, &config.ai, config.concurrency())
        .run(&mut sheet)
        .await;

    match &cli.sheet {
        Some(input) => {
            let output = cli.output.as_deref().unwrap_or(input);
            save_question_sheet(output, &sheet).await?;
        }
        None => print_answers(&sheet),
    }

    print_final_stats(stats.filled, stats.filled + stats.skipped);

    Ok(())
}

fn print_answers(sheet: &QuestionSheet) {
    for question in &sheet.questions {
        println!("{}. {}", question.num, question.title);
        if question.texts.is_empty() {
            println!("   (无)");
        }
        for (i, text) in question.texts.iter().enumerate() {
            println!("   {}) {}", i + 1, text);
        }
    }
}
