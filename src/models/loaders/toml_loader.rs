use crate::models::question::QuestionSheet;
use crate::utils::logging::sheet_header;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载题目表
pub async fn load_question_sheet(toml_file_path: &Path) -> Result<QuestionSheet> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let sheet: QuestionSheet = toml::from_str(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    tracing::info!(
        "成功加载 {} 个题目，其中 {} 个待生成",
        sheet.questions.len(),
        sheet.pending_count()
    );

    Ok(sheet)
}

/// 将题目表写回 TOML 文件（带时间戳注释头）
pub async fn save_question_sheet(toml_file_path: &Path, sheet: &QuestionSheet) -> Result<()> {
    let body = toml::to_string_pretty(sheet).context("无法序列化题目表")?;
    let content = format!("{}\n{}", sheet_header(sheet)?, body);

    if let Some(parent) = toml_file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("无法创建目录: {}", parent.display()))?;
    }

    fs::write(toml_file_path, content)
        .await
        .with_context(|| format!("无法写入TOML文件: {}", toml_file_path.display()))?;

    tracing::info!("题目表已保存至: {}", toml_file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::TextQuestion;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("wjx-ai-{}-{}", std::process::id(), name))
            .join("sheet.toml")
    }

    #[tokio::test]
    async fn test_save_then_load_keeps_answers() {
        let path = temp_path("save-load");
        let mut sheet = QuestionSheet::from_titles(["您对食堂的建议是？", "您的专业是？"]);
        sheet.url = Some("https://www.wjx.cn/vm/abc.aspx".to_string());
        sheet.questions[0].texts = vec!["多点辣菜".to_string(), "挺好的".to_string()];

        save_question_sheet(&path, &sheet).await.unwrap();
        let loaded = load_question_sheet(&path).await.unwrap();

        assert_eq!(loaded, sheet);
        assert_eq!(loaded.pending_count(), 1);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_url_with_newline_survives_save_and_load() {
        let path = temp_path("newline-url");
        let mut sheet = QuestionSheet::from_titles(["您的建议？"]);
        sheet.url = Some("https://www.wjx.cn/vm/a.aspx\nnot toml".to_string());

        save_question_sheet(&path, &sheet).await.unwrap();
        let loaded = load_question_sheet(&path).await.unwrap();

        assert_eq!(loaded, sheet);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_load_hand_written_sheet() {
        let path = temp_path("hand-written");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            r#"
            [[questions]]
            num = 3
            title = "您对本次活动有什么建议？"

            [[questions]]
            title = "其他意见"
            texts = ["无"]
            "#,
        )
        .unwrap();

        let sheet = load_question_sheet(&path).await.unwrap();

        assert_eq!(sheet.url, None);
        assert_eq!(
            sheet.questions[0],
            TextQuestion::new(3, "您对本次活动有什么建议？")
        );
        assert_eq!(sheet.questions[1].num, 0);
        assert!(!sheet.questions[1].needs_answers());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_load_missing_file_is_an_error() {
        let result = load_question_sheet(Path::new("/nonexistent/wjx-ai/sheet.toml")).await;
        assert!(result.is_err());
    }
}
