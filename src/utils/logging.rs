use anyhow::Result;
/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use std::fmt::Write as _;
use tracing::info;

use crate::models::QuestionSheet;

/// 记录程序启动信息
///
/// # 参数
/// - `mode`: 运行模式描述（模拟 / 真实 API）
/// - `question_count`: 待处理题目数
pub fn log_startup(mode: &str, question_count: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - AI 填空答案生成");
    info!("🤖 模式: {}", mode);
    info!("📋 待处理题目: {}", question_count);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `filled`: 成功生成答案的题目数
/// - `total`: 题目总数
pub fn print_final_stats(filled: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 已生成: {}/{}", filled, total);
    info!("⏭️ 未生成: {}", total - filled.min(total));
    info!("{}", "=".repeat(60));
}

/// 生成题目表文件头（TOML 注释）
///
/// 链接中的换行等控制字符会被转义，保证每一行都是注释
pub fn sheet_header(sheet: &QuestionSheet) -> Result<String> {
    let mut header = String::new();
    writeln!(header, "# {}", "=".repeat(58))?;
    writeln!(
        header,
        "# AI 填空答案 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    if let Some(url) = &sheet.url {
        writeln!(header, "# 问卷: {}", url.escape_debug())?;
    }
    writeln!(header, "# {}", "=".repeat(58))?;
    Ok(header)
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
